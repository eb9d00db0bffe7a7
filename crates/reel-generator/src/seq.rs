use crate::Generator;
use reel_core::VideoId;
use std::sync::atomic::{AtomicU64, Ordering};

/// A sequential id generator backed by an atomic counter.
///
/// The counter starts at the configured offset and is incremented before
/// use, so a fresh generator yields 1, 2, 3, ... The counter wraps at
/// `u64::MAX` and never yields the reserved id zero.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
}

impl SeqGenerator {
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Creates a generator whose first id is `offset + 1`.
    ///
    /// Useful for resuming numbering after a known id.
    pub fn with_offset(offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
        }
    }
}

impl Default for SeqGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for SeqGenerator {
    type Output = VideoId;

    fn generate(&self) -> Self::Output {
        loop {
            // fetch_add wraps on overflow
            let id = self.counter.fetch_add(1, Ordering::SeqCst).wrapping_add(1);
            if id != 0 {
                return VideoId::new(id);
            }
        }
    }
}
