//! Configuration I/O (YAML)
//!
//! Defines the YAML schema types. Loading and saving live in
//! model_config.rs.

use serde::{Deserialize, Serialize};

use super::section_configs::{PackageImplementations, ValidationConfig};

/// Supported schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    #[serde(default)]
    pub version: Option<u32>,

    /// Base preset
    pub preset: String,

    /// Message locale (`en`, `de`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Eager constraint checks in setters (overrides the preset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eager: Option<bool>,

    /// Package implementation class paths
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<PackageImplementations>,

    /// Validator settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::error::ConfigError;
    use crate::config::{ModelConfig, Preset};
    use crate::shared::models::{CwmConstraint, Locale};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_roundtrip() {
        let config = ModelConfig::preset(Preset::Lenient)
            .locale(Locale::De)
            .validation(|v| v.max_violations(50));

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("preset: lenient"));
        assert!(yaml.contains("max_violations: 50"));

        let back = ModelConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_yaml_loading() {
        let yaml_content = r#"
version: 1
preset: strict
locale: de
eager: false
validation:
  max_violations: 10
  fail_fast: true
  skip_constraints: [DependencyEnds]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = ModelConfig::from_yaml(temp_file.path()).unwrap();
        assert_eq!(config.locale, Locale::De);
        assert!(!config.policy.eager);
        assert_eq!(config.validation.max_violations, 10);
        assert!(config.validation.fail_fast);
        assert!(config.validation.is_skipped(CwmConstraint::DependencyEnds));
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = ModelConfig::from_yaml_str("preset: strict\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = ModelConfig::from_yaml_str("version: 2\npreset: strict\n");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::UnsupportedVersion { .. }
        ));
    }

    #[test]
    fn test_yaml_unknown_field() {
        let result = ModelConfig::from_yaml_str("version: 1\npreset: strict\nturbo: true\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));

        let nested = "version: 1\npreset: strict\nvalidation:\n  max_violation: 3\n";
        assert!(matches!(
            ModelConfig::from_yaml_str(nested),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_yaml_unknown_preset_and_locale() {
        assert!(matches!(
            ModelConfig::from_yaml_str("version: 1\npreset: fast\n"),
            Err(ConfigError::UnknownPreset(_))
        ));
        assert!(matches!(
            ModelConfig::from_yaml_str("version: 1\npreset: strict\nlocale: fr\n"),
            Err(ConfigError::UnknownLocale(_))
        ));
    }

    #[test]
    fn test_yaml_range_checked() {
        let yaml = "version: 1\npreset: custom\nvalidation:\n  max_violations: 5000000\n";
        assert!(matches!(
            ModelConfig::from_yaml_str(yaml),
            Err(ConfigError::Range { .. })
        ));
    }
}
