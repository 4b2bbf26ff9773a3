//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range validation error
    #[error("Invalid range for field '{field}': {value} not in {min}..={max}. {hint}")]
    Range {
        field: String,
        value: String,
        min: String,
        max: String,
        hint: String,
    },

    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// Unknown preset name
    #[error("Unknown preset '{0}'. Valid presets: strict, lenient, custom")]
    UnknownPreset(String),

    #[error("Unknown locale '{0}'. Valid locales: en, de")]
    UnknownLocale(String),

    /// Class path that is not a plausible Rust path
    #[error("Invalid implementation path '{path}' for package '{package}'. {hint}")]
    InvalidClassPath {
        package: String,
        path: String,
        hint: String,
    },

    /// Settings that contradict each other
    #[error("Configuration conflict: {issue}. Fix: {fix}")]
    Conflict { issue: String, fix: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a range error with a hint
    pub fn range_with_hint(
        field: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
        hint: impl Into<String>,
    ) -> Self {
        Self::Range {
            field: field.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
            hint: hint.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_formatting() {
        let err = ConfigError::range_with_hint(
            "max_violations",
            2_000_000,
            0,
            1_000_000,
            "Use 0 for no limit",
        );

        let msg = err.to_string();
        assert!(msg.contains("max_violations"));
        assert!(msg.contains("0..=1000000"));
        assert!(msg.contains("Use 0 for no limit"));
    }

    #[test]
    fn test_unsupported_version_error() {
        let err = ConfigError::UnsupportedVersion {
            found: 2,
            supported: vec![1],
        };

        let msg = err.to_string();
        assert!(msg.contains("version 2"));
        assert!(msg.contains("Supported versions: 1"));
    }

    #[test]
    fn test_unknown_preset_error() {
        let err = ConfigError::UnknownPreset("paranoid".to_string());
        let msg = err.to_string();
        assert!(msg.contains("paranoid"));
        assert!(msg.contains("strict, lenient, custom"));
    }

    #[test]
    fn test_conflict_error() {
        let err = ConfigError::Conflict {
            issue: "fail_fast with max_violations 10".to_string(),
            fix: "drop one of them".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("fail_fast"));
        assert!(msg.contains("drop one"));
    }

    #[test]
    fn test_missing_version_error() {
        let msg = ConfigError::MissingVersion.to_string();
        assert!(msg.contains("version: 1"));
    }
}
