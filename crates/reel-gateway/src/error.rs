use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reel_core::CatalogError;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors surfaced by the HTTP handlers.
///
/// Every variant maps to a bare status code with an empty body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("caller identity is missing")]
    Unauthenticated,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Catalog(CatalogError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Catalog(CatalogError::AlreadyLiked { .. }) => StatusCode::BAD_REQUEST,
            AppError::Catalog(CatalogError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        status.into_response()
    }
}
