use serde::Deserialize;

/// Query of a title search; the field name matches `api::TITLE_PARAMETER`.
#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    pub title: String,
}

/// Query of a duration search; the field name matches `api::DURATION_PARAMETER`.
#[derive(Debug, Deserialize)]
pub struct DurationQuery {
    pub duration: i64,
}
