//! Foundation::DataTypes
//!
//! Enumerations, type aliases and discriminated unions.

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use infrastructure::StandardDataTypesPackage;
pub use ports::DataTypesPackage;
