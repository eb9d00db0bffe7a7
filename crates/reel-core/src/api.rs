//! Path and parameter names shared by the gateway and its clients.

/// Root of the video collection.
pub const VIDEO_SVC_PATH: &str = "/video";

/// Title substring search, relative to the server root.
pub const VIDEO_TITLE_SEARCH_PATH: &str = "/video/search/findByName";

/// Duration threshold search, relative to the server root.
pub const VIDEO_DURATION_SEARCH_PATH: &str = "/video/search/findByDurationLessThan";

pub const TITLE_PARAMETER: &str = "title";
pub const DURATION_PARAMETER: &str = "duration";

/// Header carrying the authenticated caller name when no upstream layer has
/// attached one to the request extensions.
pub const CALLER_HEADER: &str = "x-caller-identity";
