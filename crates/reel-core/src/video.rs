use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use typed_builder::TypedBuilder;

/// Identifier of a catalog entry.
///
/// Zero is reserved as the "unset" value: a video submitted with id zero
/// gets a fresh id assigned when it is created.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VideoId(u64);

impl VideoId {
    pub const UNSET: VideoId = VideoId(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for VideoId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for VideoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog entry.
///
/// `likes` and `liked_by` are updated independently, so the count is not
/// guaranteed to equal the number of likers (and may go negative).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default)]
    #[builder(default)]
    pub id: VideoId,
    #[builder(setter(into))]
    pub name: String,
    pub duration: i64,
    #[serde(default)]
    #[builder(default)]
    pub likes: i64,
    #[serde(default)]
    #[builder(default)]
    pub liked_by: BTreeSet<String>,
}

impl Video {
    /// Returns `true` if `caller` has a recorded like on this video.
    pub fn is_liked_by(&self, caller: &str) -> bool {
        self.liked_by.contains(caller)
    }
}
