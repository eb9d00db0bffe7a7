//! Core types and traits for the Reel video catalog.
//!
//! This crate provides the shared data model, error types, storage traits
//! and the [`Catalog`] service trait used by both the catalog service and
//! the HTTP gateway.

pub mod api;
pub mod catalog;
pub mod error;
pub mod repository;
pub mod video;

pub use catalog::Catalog;
pub use error::{CatalogError, StorageError};
pub use repository::{ReadRepository, Repository};
pub use video::{Video, VideoId};
