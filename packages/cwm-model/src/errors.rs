//! Error types for cwm-model
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::config::ConfigError;
use crate::shared::models::{CwmConstraint, CwmPackage, ElementId, Link, Locale, MetaClass};

/// Main error type for metadata graph operations
#[derive(Debug, Error)]
pub enum CwmError {
    /// OCL-derived invariant violated by a mutation
    #[error("{constraint} violated on {element}: {}", constraint.message(Locale::En))]
    Constraint {
        constraint: CwmConstraint,
        element: ElementId,
    },

    /// Id is out of range or refers to a deleted element
    #[error("Element {0} not found")]
    ElementNotFound(ElementId),

    #[error("Element {id} is a {actual}, expected a {expected}")]
    WrongMetaClass {
        id: ElementId,
        expected: MetaClass,
        actual: MetaClass,
    },

    #[error("Cannot instantiate abstract meta-class {0}")]
    AbstractMetaClass(MetaClass),

    /// Required single-valued reference is unset
    #[error("Element {element} has no {role}")]
    MissingReference {
        element: ElementId,
        role: &'static str,
    },

    #[error("Invalid operation on link {link}: {reason}")]
    InvalidLinkOperation { link: Link, reason: String },

    #[error("Position {position} out of bounds (len {len})")]
    PositionOutOfBounds { position: usize, len: usize },

    /// No implementation registered under a class path
    #[error("No {package} package implementation registered as '{class_path}'")]
    UnknownImplementation {
        package: CwmPackage,
        class_path: String,
    },

    /// Inconsistent inverse references (typically from a corrupted file)
    #[error("Integrity error: {0}")]
    Integrity(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CwmError {
    pub fn constraint(constraint: CwmConstraint, element: impl Into<ElementId>) -> Self {
        CwmError::Constraint {
            constraint,
            element: element.into(),
        }
    }

    pub fn integrity(msg: impl Into<String>) -> Self {
        CwmError::Integrity(msg.into())
    }

    pub fn invalid_link(link: Link, reason: impl Into<String>) -> Self {
        CwmError::InvalidLinkOperation {
            link,
            reason: reason.into(),
        }
    }

    /// Constraint behind this error, if it is a violation
    pub fn violated_constraint(&self) -> Option<CwmConstraint> {
        match self {
            CwmError::Constraint { constraint, .. } => Some(*constraint),
            _ => None,
        }
    }

    /// Message in the requested locale (constraint violations only; other
    /// errors keep their English display text)
    pub fn localized_message(&self, locale: Locale) -> String {
        match self {
            CwmError::Constraint {
                constraint,
                element,
            } => format!("{} ({}): {}", constraint, element, constraint.message(locale)),
            other => other.to_string(),
        }
    }
}

/// Result type alias for metadata graph operations
pub type Result<T> = std::result::Result<T, CwmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_display() {
        let err = CwmError::constraint(CwmConstraint::MappingSourceEqualsTarget, ElementId::from_raw(3));
        assert_eq!(
            err.to_string(),
            "Foundation C-8-1 violated on #3: The source and target types of a type mapping must differ"
        );
        assert_eq!(
            err.violated_constraint(),
            Some(CwmConstraint::MappingSourceEqualsTarget)
        );
    }

    #[test]
    fn test_localized_message() {
        let err = CwmError::constraint(CwmConstraint::MultiplePrimaryKeys, ElementId::from_raw(1));
        assert_eq!(
            err.localized_message(Locale::De),
            "Relational C-1-1 (#1): Eine Tabelle hat höchstens einen Primärschlüssel"
        );
        let missing = CwmError::ElementNotFound(ElementId::from_raw(9));
        assert_eq!(missing.localized_message(Locale::De), "Element #9 not found");
        assert_eq!(missing.violated_constraint(), None);
    }
}
