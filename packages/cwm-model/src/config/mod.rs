//! Configuration System
//!
//! 2-tier configuration:
//! - Level 1: Preset (strict, lenient) - Simple one-liner
//! - Level 2: YAML v1 / builder overrides - Complete control
//!
//! # Examples
//!
//! ```rust,ignore
//! use cwm_model::config::{ModelConfig, Preset};
//!
//! // Level 1: Simple preset
//! let config = ModelConfig::preset(Preset::Lenient);
//!
//! // Level 2: Overrides
//! let config = ModelConfig::preset(Preset::Strict)
//!     .locale(Locale::De)
//!     .validation(|v| v.max_violations(100))
//!     .build()?;
//!
//! let config = ModelConfig::from_yaml("warehouse-model.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod model_config;
pub mod preset;
pub mod section_configs;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigExportV1;
pub use model_config::ModelConfig;
pub use preset::Preset;
pub use section_configs::{PackageImplementations, ValidationConfig};
pub use validation::{Validatable, ValidatableCollection};
