//! Model configuration
//!
//! One `ModelConfig` drives a session: the constraint policy of new graphs,
//! the locale of constraint messages, which package implementations the
//! factory instantiates, and how the validator runs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, SUPPORTED_VERSIONS};
use super::preset::Preset;
use super::section_configs::{PackageImplementations, ValidationConfig};
use super::validation::Validatable;
use crate::shared::models::{ConstraintPolicy, CwmPackage, Locale};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub preset: Preset,
    pub policy: ConstraintPolicy,
    pub locale: Locale,
    pub packages: PackageImplementations,
    pub validation: ValidationConfig,
}

impl ModelConfig {
    /// Defaults of a preset
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            policy: preset.policy(),
            locale: Locale::default(),
            packages: PackageImplementations::default(),
            validation: ValidationConfig::from_preset(preset),
        }
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Toggle eager constraint checks
    pub fn eager(mut self, eager: bool) -> Self {
        self.policy = ConstraintPolicy { eager };
        self
    }

    /// Select the implementation of one package
    pub fn package(mut self, package: CwmPackage, class_path: impl Into<String>) -> Self {
        self.packages.set(package, class_path);
        self
    }

    /// Adjust validator settings
    ///
    /// ```rust,ignore
    /// let config = ModelConfig::preset(Preset::Lenient)
    ///     .validation(|v| v.max_violations(100).fail_fast(true))
    ///     .build()?;
    /// ```
    pub fn validation(mut self, f: impl FnOnce(ValidationConfig) -> ValidationConfig) -> Self {
        self.validation = f(self.validation);
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> ConfigResult<Self> {
        self.validate()?;
        Ok(self)
    }

    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        // Version check
        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = Preset::from_str(&export.preset)
            .map_err(|_| ConfigError::UnknownPreset(export.preset.clone()))?;
        let mut config = Self::preset(preset);

        if let Some(locale) = export.locale {
            config.locale =
                Locale::from_str(&locale).map_err(|_| ConfigError::UnknownLocale(locale))?;
        }
        if let Some(eager) = export.eager {
            config.policy = ConstraintPolicy { eager };
        }
        if let Some(packages) = export.packages {
            config.packages = packages;
        }
        if let Some(validation) = export.validation {
            config.validation = validation;
        }

        config.build()
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            preset: self.preset.to_string(),
            locale: Some(self.locale.to_string()),
            eager: Some(self.policy.eager),
            packages: Some(self.packages.clone()),
            validation: Some(self.validation.clone()),
        };
        Ok(serde_yaml::to_string(&export)?)
    }

    /// Get a human-readable description of the configuration
    pub fn describe(&self) -> String {
        let limit = match self.validation.max_violations {
            0 => "unlimited".to_string(),
            n => n.to_string(),
        };
        format!(
            "preset={} eager={} locale={} max_violations={} fail_fast={} parallel={}",
            self.preset,
            self.policy.eager,
            self.locale,
            limit,
            self.validation.fail_fast,
            self.validation.parallel
        )
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl Validatable for ModelConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.validation.validate()?;
        self.packages.validate()
    }

    fn config_name(&self) -> &'static str {
        "model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_defaults() {
        let config = ModelConfig::default();
        assert_eq!(config.preset, Preset::Strict);
        assert!(config.policy.eager);
        assert_eq!(config.locale, Locale::En);

        let lenient = ModelConfig::preset(Preset::Lenient);
        assert!(!lenient.policy.eager);
        assert_eq!(lenient.validation.max_violations, 1000);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ModelConfig::preset(Preset::Strict)
            .eager(false)
            .locale(Locale::De)
            .package(CwmPackage::Core, "my_tool::AuditedCorePackage")
            .validation(|v| v.fail_fast(true).parallel(false))
            .build()
            .unwrap();
        assert!(!config.policy.eager);
        assert_eq!(
            config.packages.class_path(CwmPackage::Core),
            "my_tool::AuditedCorePackage"
        );
        assert!(config.validation.fail_fast);
        assert!(!config.validation.parallel);
    }

    #[test]
    fn test_build_rejects_invalid() {
        let result = ModelConfig::default()
            .validation(|v| v.max_violations(usize::MAX))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_describe() {
        let text = ModelConfig::preset(Preset::Lenient).describe();
        assert!(text.contains("preset=lenient"));
        assert!(text.contains("max_violations=1000"));
        assert!(ModelConfig::default().describe().contains("unlimited"));
    }
}
