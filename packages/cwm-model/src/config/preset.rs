//! Preset configurations
//!
//! Presets provide complete default configurations for common use cases.

use serde::{Deserialize, Serialize};

use crate::shared::models::ConstraintPolicy;

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Modelling tools: every mutation checks the eager constraints
    ///
    /// - Policy: eager
    /// - Validation: unlimited violations, parallel rules
    Strict,

    /// Importers: build in any order, validate afterwards
    ///
    /// - Policy: structural invariants only
    /// - Validation: first 1000 violations
    Lenient,

    /// Custom: User-defined (YAML only)
    ///
    /// Starts from the strict defaults.
    Custom,
}

impl Preset {
    /// Constraint policy for this preset
    pub fn policy(&self) -> ConstraintPolicy {
        match self {
            Self::Strict | Self::Custom => ConstraintPolicy::strict(),
            Self::Lenient => ConstraintPolicy::lenient(),
        }
    }

    /// Violation cap for this preset (0 = unlimited)
    pub fn max_violations(&self) -> usize {
        match self {
            Self::Strict | Self::Custom => 0,
            Self::Lenient => 1000,
        }
    }

    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            "custom" => Ok(Self::Custom),
            _ => Err(format!(
                "Unknown preset '{}'. Valid presets: strict, lenient, custom",
                s
            )),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
            Self::Custom => "custom",
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Strict
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parsing() {
        assert_eq!(Preset::from_str("strict").unwrap(), Preset::Strict);
        assert_eq!(Preset::from_str("LENIENT").unwrap(), Preset::Lenient);
        assert_eq!(Preset::from_str("custom").unwrap(), Preset::Custom);
        assert!(Preset::from_str("fast").is_err());
    }

    #[test]
    fn test_preset_display() {
        assert_eq!(Preset::Strict.to_string(), "strict");
        assert_eq!(Preset::Lenient.to_string(), "lenient");
    }

    #[test]
    fn test_preset_policies() {
        assert!(Preset::Strict.policy().eager);
        assert!(!Preset::Lenient.policy().eager);
        assert_eq!(Preset::Lenient.max_violations(), 1000);
    }

    #[test]
    fn test_default_preset() {
        assert_eq!(Preset::default(), Preset::Strict);
    }
}
