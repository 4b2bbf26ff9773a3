//! Foundation::TypeMapping
//!
//! Type systems and the mappings between their data types.

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use infrastructure::StandardTypeMappingPackage;
pub use ports::TypeMappingPackage;
