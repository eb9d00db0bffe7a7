use axum::routing::{get, post};
use axum::Router;
use reel_core::api::{VIDEO_DURATION_SEARCH_PATH, VIDEO_SVC_PATH, VIDEO_TITLE_SEARCH_PATH};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_video_handler, find_by_duration_handler, find_by_name_handler, get_video_handler,
    go_handler, health_handler, like_video_handler, list_videos_handler, unlike_video_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/go", get(go_handler))
            .route("/health", get(health_handler))
            .route(
                VIDEO_SVC_PATH,
                get(list_videos_handler).post(create_video_handler),
            )
            .route(VIDEO_TITLE_SEARCH_PATH, get(find_by_name_handler))
            .route(VIDEO_DURATION_SEARCH_PATH, get(find_by_duration_handler))
            .route(&format!("{VIDEO_SVC_PATH}/{{id}}"), get(get_video_handler))
            .route(
                &format!("{VIDEO_SVC_PATH}/{{id}}/like"),
                post(like_video_handler),
            )
            .route(
                &format!("{VIDEO_SVC_PATH}/{{id}}/unlike"),
                post(unlike_video_handler),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
