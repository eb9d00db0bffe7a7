/// How `unlike` treats a caller who has no recorded like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnlikePolicy {
    /// Always decrement the like count and drop the caller from the likers.
    /// The count may drift from the number of likers and go negative.
    #[default]
    Unconditional,
    /// Only withdraw a like the caller actually recorded; otherwise do nothing.
    LikedOnly,
}
