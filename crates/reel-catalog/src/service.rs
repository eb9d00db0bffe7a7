use crate::policy::UnlikePolicy;
use async_trait::async_trait;
use reel_core::error::Result;
use reel_core::{Catalog, CatalogError, Repository, Video, VideoId};
use reel_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace};

/// A concrete implementation of the `Catalog` trait.
///
/// This service wraps a `Repository` and a `Generator` to handle:
/// - Id assignment for videos submitted without one
/// - Title and duration searches
/// - Like bookkeeping
///
/// Note: The `Generator` implementation is responsible for ensuring
/// uniqueness of generated ids. Caller-supplied ids are trusted as-is.
#[derive(Debug, Clone)]
pub struct VideoCatalogService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    unlike_policy: UnlikePolicy,
}

impl<R: Repository, G: Generator> VideoCatalogService<R, G> {
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            unlike_policy: UnlikePolicy::default(),
        }
    }

    pub fn with_unlike_policy(mut self, unlike_policy: UnlikePolicy) -> Self {
        self.unlike_policy = unlike_policy;
        self
    }

    fn assign_id(&self, video: &mut Video) {
        if video.id.is_unset() {
            video.id = self.generator.generate().into();
        }
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Catalog for VideoCatalogService<R, G> {
    async fn create(&self, mut video: Video) -> Result<Video> {
        self.assign_id(&mut video);

        let replaced = self.repository.upsert(video.clone()).await?;
        debug!(id = %video.id, replaced = replaced.is_some(), "stored video");

        Ok(video)
    }

    async fn list(&self) -> Result<Vec<Video>> {
        Ok(self.repository.list().await?)
    }

    async fn get(&self, id: VideoId) -> Result<Video> {
        trace!(id = %id, "looking up video");

        self.repository
            .get(id)
            .await?
            .ok_or(CatalogError::NotFound(id))
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<Video>> {
        Ok(self
            .repository
            .find(|video: &Video| video.name.contains(title))
            .await?)
    }

    async fn find_by_duration_less_than(&self, duration: i64) -> Result<Vec<Video>> {
        Ok(self
            .repository
            .find(move |video: &Video| video.duration < duration)
            .await?)
    }

    async fn like(&self, id: VideoId, caller: &str) -> Result<()> {
        // check and mutation run under the same entry lock
        let outcome = self
            .repository
            .update(id, |video| {
                if video.is_liked_by(caller) {
                    return Err(CatalogError::AlreadyLiked {
                        id,
                        caller: caller.to_owned(),
                    });
                }
                video.likes = video.likes.wrapping_add(1);
                video.liked_by.insert(caller.to_owned());
                Ok(video.likes)
            })
            .await?;

        let likes = outcome.ok_or(CatalogError::NotFound(id))??;
        debug!(id = %id, caller = %caller, likes, "video liked");

        Ok(())
    }

    async fn unlike(&self, id: VideoId, caller: &str) -> Result<()> {
        let policy = self.unlike_policy;
        let likes = self
            .repository
            .update(id, |video| {
                let had_liked = video.liked_by.remove(caller);
                if had_liked || policy == UnlikePolicy::Unconditional {
                    video.likes = video.likes.wrapping_sub(1);
                }
                video.likes
            })
            .await?
            .ok_or(CatalogError::NotFound(id))?;

        debug!(id = %id, caller = %caller, likes, "video unliked");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_generator::seq::SeqGenerator;
    use reel_storage::InMemoryRepository;
    use std::collections::BTreeSet;

    fn test_service() -> VideoCatalogService<InMemoryRepository, SeqGenerator> {
        VideoCatalogService::new(InMemoryRepository::new(), SeqGenerator::new())
    }

    fn new_video(name: &str, duration: i64) -> Video {
        Video::builder().name(name).duration(duration).build()
    }

    fn ids(videos: Vec<Video>) -> BTreeSet<u64> {
        videos.into_iter().map(|v| v.id.get()).collect()
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let service = test_service();

        let first = service.create(new_video("abc", 100)).await.unwrap();
        let second = service.create(new_video("abcd", 50)).await.unwrap();

        assert_eq!(first.id, VideoId::new(1));
        assert_eq!(second.id, VideoId::new(2));
        assert_eq!(first.likes, 0);
        assert!(first.liked_by.is_empty());
    }

    #[tokio::test]
    async fn create_with_explicit_id_overwrites() {
        let service = test_service();
        service.create(new_video("first", 10)).await.unwrap();

        let mut replacement = new_video("second", 20);
        replacement.id = VideoId::new(1);
        let stored = service.create(replacement).await.unwrap();

        assert_eq!(stored.id, VideoId::new(1));
        assert_eq!(service.get(VideoId::new(1)).await.unwrap().name, "second");
        assert_eq!(service.list().await.unwrap().len(), 1);

        // explicit ids do not advance the counter
        let next = service.create(new_video("third", 30)).await.unwrap();
        assert_eq!(next.id, VideoId::new(2));
    }

    #[tokio::test]
    async fn get_returns_stored_video() {
        let service = test_service();
        let created = service.create(new_video("abc", 100)).await.unwrap();

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_nonexistent_is_not_found() {
        let service = test_service();

        let err = service.get(VideoId::new(7)).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(id) if id == VideoId::new(7)));
    }

    #[tokio::test]
    async fn find_by_title_matches_substrings() {
        let service = test_service();
        service.create(new_video("abc", 100)).await.unwrap();
        service.create(new_video("abcd", 50)).await.unwrap();
        service.create(new_video("xyz", 10)).await.unwrap();

        assert_eq!(
            ids(service.find_by_title("abc").await.unwrap()),
            BTreeSet::from([1, 2])
        );
        assert_eq!(
            ids(service.find_by_title("").await.unwrap()),
            BTreeSet::from([1, 2, 3])
        );
        assert!(service.find_by_title("ABC").await.unwrap().is_empty());
        assert!(service.find_by_title("nope").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_duration_is_strictly_less_than() {
        let service = test_service();
        service.create(new_video("abc", 100)).await.unwrap();
        service.create(new_video("abcd", 50)).await.unwrap();
        service.create(new_video("exact", 75)).await.unwrap();

        assert_eq!(
            ids(service.find_by_duration_less_than(75).await.unwrap()),
            BTreeSet::from([2])
        );
        assert!(service
            .find_by_duration_less_than(50)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn like_twice_is_rejected_without_mutation() {
        let service = test_service();
        let video = service.create(new_video("abc", 100)).await.unwrap();

        service.like(video.id, "alice").await.unwrap();
        let err = service.like(video.id, "alice").await.unwrap_err();
        assert!(matches!(err, CatalogError::AlreadyLiked { ref caller, .. } if caller == "alice"));

        let stored = service.get(video.id).await.unwrap();
        assert_eq!(stored.likes, 1);
        assert_eq!(stored.liked_by, BTreeSet::from(["alice".to_string()]));
    }

    #[tokio::test]
    async fn like_and_unlike_nonexistent_are_not_found() {
        let service = test_service();
        service.create(new_video("abc", 100)).await.unwrap();

        let err = service.like(VideoId::new(9), "alice").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
        let err = service.unlike(VideoId::new(9), "alice").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));

        let stored = service.get(VideoId::new(1)).await.unwrap();
        assert_eq!(stored.likes, 0);
    }

    #[tokio::test]
    async fn unconditional_unlike_always_decrements() {
        let service = test_service();
        let video = service.create(new_video("abc", 100)).await.unwrap();

        service.unlike(video.id, "bob").await.unwrap();
        service.unlike(video.id, "bob").await.unwrap();

        let stored = service.get(video.id).await.unwrap();
        assert_eq!(stored.likes, -2);
        assert!(stored.liked_by.is_empty());
    }

    #[tokio::test]
    async fn liked_only_unlike_ignores_strangers() {
        let service = test_service().with_unlike_policy(UnlikePolicy::LikedOnly);
        let video = service.create(new_video("abc", 100)).await.unwrap();

        service.like(video.id, "alice").await.unwrap();
        service.unlike(video.id, "bob").await.unwrap();
        assert_eq!(service.get(video.id).await.unwrap().likes, 1);

        service.unlike(video.id, "alice").await.unwrap();
        service.unlike(video.id, "alice").await.unwrap();

        let stored = service.get(video.id).await.unwrap();
        assert_eq!(stored.likes, 0);
        assert!(stored.liked_by.is_empty());
    }

    #[tokio::test]
    async fn like_unlike_walkthrough() {
        let service = test_service();

        let first = service.create(new_video("abc", 100)).await.unwrap();
        assert_eq!(first.id, VideoId::new(1));
        let second = service.create(new_video("abcd", 50)).await.unwrap();
        assert_eq!(second.id, VideoId::new(2));

        assert_eq!(
            ids(service.find_by_title("abc").await.unwrap()),
            BTreeSet::from([1, 2])
        );
        assert_eq!(
            ids(service.find_by_duration_less_than(75).await.unwrap()),
            BTreeSet::from([2])
        );

        service.like(first.id, "alice").await.unwrap();
        let stored = service.get(first.id).await.unwrap();
        assert_eq!(stored.likes, 1);
        assert_eq!(stored.liked_by, BTreeSet::from(["alice".to_string()]));

        assert!(service.like(first.id, "alice").await.is_err());
        assert_eq!(service.get(first.id).await.unwrap(), stored);

        service.unlike(first.id, "alice").await.unwrap();
        let stored = service.get(first.id).await.unwrap();
        assert_eq!(stored.likes, 0);
        assert!(stored.liked_by.is_empty());

        service.unlike(first.id, "bob").await.unwrap();
        let stored = service.get(first.id).await.unwrap();
        assert_eq!(stored.likes, -1);
        assert!(stored.liked_by.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_likes_from_distinct_callers() {
        let service = Arc::new(test_service());
        let id = service.create(new_video("abc", 100)).await.unwrap().id;

        let mut handles = vec![];
        for i in 0..64 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                service.like(id, &format!("user-{i}")).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let stored = service.get(id).await.unwrap();
        assert_eq!(stored.likes, 64);
        assert_eq!(stored.liked_by.len(), 64);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_likes_from_same_caller_count_once() {
        let service = Arc::new(test_service());
        let id = service.create(new_video("abc", 100)).await.unwrap().id;

        let mut handles = vec![];
        for _ in 0..32 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(
                async move { service.like(id, "alice").await },
            ));
        }

        let mut accepted = 0;
        let mut rejected = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => accepted += 1,
                Err(CatalogError::AlreadyLiked { .. }) => rejected += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(accepted, 1);
        assert_eq!(rejected, 31);
        let stored = service.get(id).await.unwrap();
        assert_eq!(stored.likes, 1);
        assert_eq!(stored.liked_by, BTreeSet::from(["alice".to_string()]));
    }

    #[tokio::test]
    async fn like_counts_wrap_at_integer_limits() {
        let service = test_service();

        let mut at_max = new_video("max", 1);
        at_max.likes = i64::MAX;
        let at_max = service.create(at_max).await.unwrap();
        service.like(at_max.id, "alice").await.unwrap();
        assert_eq!(service.get(at_max.id).await.unwrap().likes, i64::MIN);
        service.unlike(at_max.id, "alice").await.unwrap();
        assert_eq!(service.get(at_max.id).await.unwrap().likes, i64::MAX);

        let mut at_min = new_video("min", 1);
        at_min.likes = i64::MIN;
        let at_min = service.create(at_min).await.unwrap();
        service.unlike(at_min.id, "bob").await.unwrap();
        assert_eq!(service.get(at_min.id).await.unwrap().likes, i64::MAX);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_distinct_ids() {
        let service = Arc::new(test_service());

        let mut handles = vec![];
        for i in 0..64 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                service
                    .create(new_video(&format!("video-{i}"), i))
                    .await
                    .unwrap()
                    .id
            }));
        }

        let mut seen = BTreeSet::new();
        for handle in handles {
            assert!(seen.insert(handle.await.unwrap().get()));
        }
        assert_eq!(seen, (1..=64).collect::<BTreeSet<u64>>());
        assert_eq!(service.list().await.unwrap().len(), 64);
    }
}
