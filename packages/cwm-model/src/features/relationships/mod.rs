//! ObjectModel::Relationships
//!
//! Associations, association ends and generalizations.

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use infrastructure::StandardRelationshipsPackage;
pub use ports::RelationshipsPackage;
