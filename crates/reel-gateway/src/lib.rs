//! HTTP gateway for the Reel video catalog.
//!
//! Exposes a [`reel_core::Catalog`] over HTTP with `axum`. The route table
//! lives in [`app::App::router`]; handlers translate catalog errors into
//! bare status codes via [`error::AppError`].

pub mod app;
pub mod caller;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use caller::Caller;
pub use error::AppError;
pub use state::AppState;
