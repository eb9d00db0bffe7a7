use crate::error::Result;
use crate::video::{Video, VideoId};
use async_trait::async_trait;

#[async_trait]
pub trait Catalog: Send + Sync + 'static {
    /// Stores a video, assigning a fresh id when `video.id` is unset.
    /// A non-zero id is used as-is and replaces any existing entry.
    async fn create(&self, video: Video) -> Result<Video>;

    /// Returns every stored video, in no particular order.
    async fn list(&self) -> Result<Vec<Video>>;

    /// Returns the video stored under `id`, or `NotFound`.
    async fn get(&self, id: VideoId) -> Result<Video>;

    /// Returns the videos whose name contains `title` (case-sensitive).
    async fn find_by_title(&self, title: &str) -> Result<Vec<Video>>;

    /// Returns the videos whose duration is strictly less than `duration`.
    async fn find_by_duration_less_than(&self, duration: i64) -> Result<Vec<Video>>;

    /// Records a like from `caller`.
    /// Fails with `AlreadyLiked` if `caller` already likes the video.
    async fn like(&self, id: VideoId, caller: &str) -> Result<()>;

    /// Withdraws a like from `caller`.
    async fn unlike(&self, id: VideoId, caller: &str) -> Result<()>;
}
