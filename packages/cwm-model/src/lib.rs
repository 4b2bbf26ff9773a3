/*
 * CWM Model - Common Warehouse Metamodel 1.1 object graph
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (MetaClass, ElementId, Link, handles)
 * - graph/       : Arena graph + bidirectional link engine
 * - features/    : One vertical slice per CWM package, plus validation
 * - api/         : Package registry, factory, queries
 * - config/      : Presets, YAML configuration
 *
 * Packages:
 * - ObjectModel : Core, Behavioral, Relationships, Instance
 * - Foundation  : KeyIndexes, SoftwareDeployment, TypeMapping, DataTypes
 * - Resource    : Relational
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::len_without_is_empty)] // Registry-style len()

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and macros
#[macro_use]
pub mod shared;

/// Error types
pub mod errors;

/// Arena graph and link engine
pub mod graph;

/// Per-package factories and typed APIs, model validation
pub mod features;

/// Registry, factory and queries
pub mod api;

/// Configuration system
pub mod config;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use api::{CwmFactory, ModelQuery, ModelStats, PackageInterface, PackageRegistry};
pub use config::{ModelConfig, Preset};
pub use errors::{CwmError, Result};
pub use features::validation::{ModelValidator, ValidationReport, Violation};
pub use graph::ModelGraph;
pub use shared::models::{
    ConstraintPolicy, CwmConstraint, CwmPackage, Element, ElementId, Link, LinkEnd, Locale,
    MetaClass,
};

/// Package factory traits and their standard implementations
pub mod packages {
    pub use crate::features::behavioral::{BehavioralPackage, StandardBehavioralPackage};
    pub use crate::features::core::{CorePackage, StandardCorePackage};
    pub use crate::features::data_types::{DataTypesPackage, StandardDataTypesPackage};
    pub use crate::features::instance::{InstancePackage, StandardInstancePackage};
    pub use crate::features::key_indexes::{KeyIndexesPackage, StandardKeyIndexesPackage};
    pub use crate::features::relational::{RelationalPackage, StandardRelationalPackage};
    pub use crate::features::relationships::{RelationshipsPackage, StandardRelationshipsPackage};
    pub use crate::features::software_deployment::{
        SoftwareDeploymentPackage, StandardSoftwareDeploymentPackage,
    };
    pub use crate::features::type_mapping::{StandardTypeMappingPackage, TypeMappingPackage};
}
