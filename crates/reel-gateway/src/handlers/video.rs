use crate::caller::Caller;
use crate::error::{AppError, Result};
use crate::model::{DurationQuery, TitleQuery};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use reel_core::{CatalogError, Video, VideoId};

/// Converts a path id into a `VideoId`.
///
/// Ids are signed on the wire; zero and negative values can never name a
/// stored video and resolve to `NotFound`.
fn video_id(raw: i64) -> Result<VideoId> {
    u64::try_from(raw)
        .ok()
        .filter(|&id| id != 0)
        .map(VideoId::new)
        .ok_or(AppError::Catalog(CatalogError::NotFound(VideoId::UNSET)))
}

pub async fn create_video_handler(
    State(state): State<AppState>,
    Json(video): Json<Video>,
) -> Result<Json<Video>> {
    let video = state.catalog().create(video).await?;
    Ok(Json(video))
}

pub async fn list_videos_handler(State(state): State<AppState>) -> Result<Json<Vec<Video>>> {
    Ok(Json(state.catalog().list().await?))
}

pub async fn get_video_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Video>> {
    Ok(Json(state.catalog().get(video_id(id)?).await?))
}

pub async fn find_by_name_handler(
    Query(query): Query<TitleQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Video>>> {
    Ok(Json(state.catalog().find_by_title(&query.title).await?))
}

pub async fn find_by_duration_handler(
    Query(query): Query<DurationQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Video>>> {
    Ok(Json(
        state
            .catalog()
            .find_by_duration_less_than(query.duration)
            .await?,
    ))
}

pub async fn like_video_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    caller: Caller,
) -> Result<StatusCode> {
    state.catalog().like(video_id(id)?, caller.name()).await?;
    Ok(StatusCode::OK)
}

pub async fn unlike_video_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    caller: Caller,
) -> Result<StatusCode> {
    state
        .catalog()
        .unlike(video_id(id)?, caller.name())
        .await?;
    Ok(StatusCode::OK)
}
