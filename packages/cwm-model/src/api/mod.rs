//! Public entry points
//!
//! - `package_registry`: class-path selection of package factories
//! - `factory`: [`CwmFactory`], one configured implementation per package
//! - `model_query`: read-only navigation and statistics

pub mod factory;
pub mod model_query;
pub mod package_registry;

pub use factory::CwmFactory;
pub use model_query::{ModelQuery, ModelStats};
pub use package_registry::{PackageInterface, PackageRegistry};
