//! In-memory adapters for tests and local snapshots.

mod in_memory_store;

pub use in_memory_store::{InMemoryMoralGraphStore, StoreSnapshot};
