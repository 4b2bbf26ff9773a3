//! Foundation::KeyIndexes
//!
//! Unique keys, key relationships, indexes and index entries.

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use infrastructure::StandardKeyIndexesPackage;
pub use ports::KeyIndexesPackage;
