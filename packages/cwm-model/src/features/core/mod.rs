//! ObjectModel::Core
//!
//! - `domain`: typed properties and associations on [`ModelGraph`](crate::graph::ModelGraph)
//! - `ports`: [`CorePackage`] factory trait
//! - `infrastructure`: [`StandardCorePackage`]

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use infrastructure::StandardCorePackage;
pub use ports::CorePackage;
