//! Storage module
//!
//! Durable key-value persistence for planner state.

mod backend;
mod store;

pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use store::{PersistentStore, StorageKey};
