pub mod memory;

pub use memory::InMemoryRepository;
pub use reel_core::{ReadRepository, Repository, StorageError};
