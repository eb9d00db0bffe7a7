//! Video catalog service implementation.
//!
//! This crate provides [`VideoCatalogService`], the implementation of the
//! [`reel_core::Catalog`] trait over a repository and an id generator.

pub mod policy;
pub mod service;

pub use policy::UnlikePolicy;
pub use service::VideoCatalogService;
