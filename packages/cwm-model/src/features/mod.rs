//! Feature modules - one per CWM package
//!
//! Each package contains:
//! - domain         - Typed property and association API on `ModelGraph`
//! - ports          - Package factory trait
//! - infrastructure - Standard factory implementation

// ObjectModel
pub mod behavioral;
pub mod core;
pub mod instance;
pub mod relationships;

// Foundation
pub mod data_types;
pub mod key_indexes;
pub mod software_deployment;
pub mod type_mapping;

// Resource
pub mod relational;

// Model-wide constraint checking (all packages)
pub mod validation;
