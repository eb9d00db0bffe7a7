mod health;
mod video;

pub use health::HealthResponse;
pub use video::{DurationQuery, TitleQuery};
