pub mod seq;

use reel_core::VideoId;

/// Trait for generating video ids.
///
/// Implementations are pure generators that don't interact with storage.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<VideoId>;
    /// Generates a value that can be converted into a unique, non-zero id.
    ///
    /// Successive calls on the same generator must never yield the same id.
    fn generate(&self) -> Self::Output;
}
