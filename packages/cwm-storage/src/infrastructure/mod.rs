//! Infrastructure layer - Storage adapters

pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use memory::InMemoryModelStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteModelStore;
