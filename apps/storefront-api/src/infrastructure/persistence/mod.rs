//! Persistence adapters (driven side).

pub mod in_memory;
pub mod sqlite;

pub use in_memory::{InMemoryCatalog, InMemoryOrderRepository};
pub use sqlite::SqliteStore;
