//! Section configuration types
//!
//! Each section of the model configuration has its own struct with
//! validation.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::validation::Validatable;
use crate::features::behavioral::StandardBehavioralPackage;
use crate::features::core::StandardCorePackage;
use crate::features::data_types::StandardDataTypesPackage;
use crate::features::instance::StandardInstancePackage;
use crate::features::key_indexes::StandardKeyIndexesPackage;
use crate::features::relational::StandardRelationalPackage;
use crate::features::relationships::StandardRelationshipsPackage;
use crate::features::software_deployment::StandardSoftwareDeploymentPackage;
use crate::features::type_mapping::StandardTypeMappingPackage;
use crate::shared::models::{CwmConstraint, CwmPackage};

const MAX_VIOLATIONS_LIMIT: usize = 1_000_000;

// ============================================================================
// Validation
// ============================================================================

/// Model validator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Stop collecting after this many violations (0 = unlimited, ..=1000000)
    pub max_violations: usize,

    /// Stop at the first violation
    pub fail_fast: bool,

    /// Run rules on the rayon pool (needs the `parallel` feature)
    pub parallel: bool,

    /// Constraints the validator does not check
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skip_constraints: Vec<CwmConstraint>,
}

impl ValidationConfig {
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            max_violations: preset.max_violations(),
            fail_fast: false,
            parallel: true,
            skip_constraints: Vec::new(),
        }
    }

    pub fn max_violations(mut self, value: usize) -> Self {
        self.max_violations = value;
        self
    }

    pub fn fail_fast(mut self, value: bool) -> Self {
        self.fail_fast = value;
        self
    }

    pub fn parallel(mut self, value: bool) -> Self {
        self.parallel = value;
        self
    }

    pub fn skip(mut self, constraint: CwmConstraint) -> Self {
        if !self.skip_constraints.contains(&constraint) {
            self.skip_constraints.push(constraint);
        }
        self
    }

    pub fn is_skipped(&self, constraint: CwmConstraint) -> bool {
        self.skip_constraints.contains(&constraint)
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl Validatable for ValidationConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_violations > MAX_VIOLATIONS_LIMIT {
            return Err(ConfigError::range_with_hint(
                "max_violations",
                self.max_violations,
                0,
                MAX_VIOLATIONS_LIMIT,
                "Use 0 for no limit",
            ));
        }
        for (i, constraint) in self.skip_constraints.iter().enumerate() {
            if self.skip_constraints[..i].contains(constraint) {
                return Err(ConfigError::Conflict {
                    issue: format!("constraint {:?} is skipped twice", constraint),
                    fix: "list each constraint once in skip_constraints".to_string(),
                });
            }
        }
        if self.skip_constraints.len() == CwmConstraint::ALL.len() {
            return Err(ConfigError::Conflict {
                issue: "every constraint is skipped".to_string(),
                fix: "remove entries from skip_constraints".to_string(),
            });
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "validation"
    }
}

// ============================================================================
// Package implementations
// ============================================================================

/// Implementation class path per CWM package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageImplementations {
    pub core: String,
    pub behavioral: String,
    pub relationships: String,
    pub instance: String,
    pub key_indexes: String,
    pub software_deployment: String,
    pub type_mapping: String,
    pub data_types: String,
    pub relational: String,
}

impl PackageImplementations {
    pub fn class_path(&self, package: CwmPackage) -> &str {
        match package {
            CwmPackage::Core => &self.core,
            CwmPackage::Behavioral => &self.behavioral,
            CwmPackage::Relationships => &self.relationships,
            CwmPackage::Instance => &self.instance,
            CwmPackage::KeyIndexes => &self.key_indexes,
            CwmPackage::SoftwareDeployment => &self.software_deployment,
            CwmPackage::TypeMapping => &self.type_mapping,
            CwmPackage::DataTypes => &self.data_types,
            CwmPackage::Relational => &self.relational,
        }
    }

    pub fn set(&mut self, package: CwmPackage, class_path: impl Into<String>) {
        let slot = match package {
            CwmPackage::Core => &mut self.core,
            CwmPackage::Behavioral => &mut self.behavioral,
            CwmPackage::Relationships => &mut self.relationships,
            CwmPackage::Instance => &mut self.instance,
            CwmPackage::KeyIndexes => &mut self.key_indexes,
            CwmPackage::SoftwareDeployment => &mut self.software_deployment,
            CwmPackage::TypeMapping => &mut self.type_mapping,
            CwmPackage::DataTypes => &mut self.data_types,
            CwmPackage::Relational => &mut self.relational,
        };
        *slot = class_path.into();
    }
}

impl Default for PackageImplementations {
    fn default() -> Self {
        Self {
            core: StandardCorePackage::CLASS_PATH.to_string(),
            behavioral: StandardBehavioralPackage::CLASS_PATH.to_string(),
            relationships: StandardRelationshipsPackage::CLASS_PATH.to_string(),
            instance: StandardInstancePackage::CLASS_PATH.to_string(),
            key_indexes: StandardKeyIndexesPackage::CLASS_PATH.to_string(),
            software_deployment: StandardSoftwareDeploymentPackage::CLASS_PATH.to_string(),
            type_mapping: StandardTypeMappingPackage::CLASS_PATH.to_string(),
            data_types: StandardDataTypesPackage::CLASS_PATH.to_string(),
            relational: StandardRelationalPackage::CLASS_PATH.to_string(),
        }
    }
}

impl Validatable for PackageImplementations {
    fn validate(&self) -> ConfigResult<()> {
        for package in CwmPackage::ALL {
            let path = self.class_path(*package);
            let well_formed = !path.is_empty()
                && path.split("::").all(|segment| {
                    !segment.is_empty()
                        && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
                        && !segment.starts_with(|c: char| c.is_ascii_digit())
                });
            if !well_formed {
                return Err(ConfigError::InvalidClassPath {
                    package: package.as_str().to_string(),
                    path: path.to_string(),
                    hint: "Use a path like 'my_crate::MyCorePackage'".to_string(),
                });
            }
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "packages"
    }
}
