mod health;
mod video;

pub use health::{go_handler, health_handler};
pub use video::{
    create_video_handler, find_by_duration_handler, find_by_name_handler, get_video_handler,
    like_video_handler, list_videos_handler, unlike_video_handler,
};
