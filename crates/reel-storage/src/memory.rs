use async_trait::async_trait;
use dashmap::DashMap;
use reel_core::error::StorageResult;
use reel_core::{ReadRepository, Repository, Video, VideoId};

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap shards its locks, so lookups and updates on different videos
/// proceed in parallel while an `update` holds the write lock of its own
/// entry for the duration of the mutation.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<VideoId, Video>,
}

impl InMemoryRepository {
    /// Creates a new, empty in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, id: VideoId) -> StorageResult<Option<Video>> {
        Ok(self.storage.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> StorageResult<Vec<Video>> {
        Ok(self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn find<P>(&self, predicate: P) -> StorageResult<Vec<Video>>
    where
        P: Fn(&Video) -> bool + Send + Sync,
    {
        Ok(self
            .storage
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect())
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn upsert(&self, video: Video) -> StorageResult<Option<Video>> {
        Ok(self.storage.insert(video.id, video))
    }

    async fn update<F, T>(&self, id: VideoId, mutate: F) -> StorageResult<Option<T>>
    where
        F: FnOnce(&mut Video) -> T + Send,
        T: Send,
    {
        Ok(self
            .storage
            .get_mut(&id)
            .map(|mut entry| mutate(entry.value_mut())))
    }
}
