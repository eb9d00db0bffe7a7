use crate::video::VideoId;
use thiserror::Error;

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Result type for repository operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Failures of a repository backend.
///
/// The in-memory repository never fails; these variants exist for backends
/// that can, and surface from the gateway as 500.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("video not found: {0}")]
    NotFound(VideoId),
    #[error("video {id} is already liked by {caller}")]
    AlreadyLiked { id: VideoId, caller: String },
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
