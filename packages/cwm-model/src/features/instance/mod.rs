//! ObjectModel::Instance
//!
//! Objects, data values, slots and extents.

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use infrastructure::StandardInstancePackage;
pub use ports::InstancePackage;
