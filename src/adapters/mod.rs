//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - Reads from the judgement store database
//! - `memory` - In-memory store for tests and JSON snapshots
//! - `http` - REST endpoints over the application handlers

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::{InMemoryMoralGraphStore, StoreSnapshot};
pub use postgres::PostgresMoralGraphReader;
