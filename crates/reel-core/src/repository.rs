use crate::error::StorageResult;
use crate::video::{Video, VideoId};
use async_trait::async_trait;

/// A read-only view of a video repository.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the video stored under `id`.
    /// Returns `None` if there is no such entry.
    async fn get(&self, id: VideoId) -> StorageResult<Option<Video>>;

    /// Returns a snapshot of every stored video, in no particular order.
    async fn list(&self) -> StorageResult<Vec<Video>>;

    /// Returns a snapshot of the videos matching `predicate`.
    async fn find<P>(&self, predicate: P) -> StorageResult<Vec<Video>>
    where
        P: Fn(&Video) -> bool + Send + Sync;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Stores `video` under its id, replacing any existing entry.
    /// Returns the replaced entry, if any.
    async fn upsert(&self, video: Video) -> StorageResult<Option<Video>>;

    /// Applies `mutate` to the entry stored under `id` while holding
    /// exclusive access to it.
    ///
    /// Returns `None` without calling `mutate` if there is no such entry.
    async fn update<F, T>(&self, id: VideoId, mutate: F) -> StorageResult<Option<T>>
    where
        F: FnOnce(&mut Video) -> T + Send,
        T: Send;
}
