//! CWM enumeration data types
//!
//! Value types used by meta-class properties (`VisibilityKind`,
//! `ScopeKind`, ...). Defaults follow the OMG model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityKind {
    #[default]
    Public,
    Protected,
    Private,
    Package,
}

/// Whether a feature belongs to each instance or to the classifier itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeKind {
    #[default]
    Instance,
    Classifier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeableKind {
    #[default]
    Changeable,
    Frozen,
    AddOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingKind {
    #[default]
    Unordered,
    Ordered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationKind {
    #[default]
    None,
    Shared,
    Composite,
}

impl AggregationKind {
    pub fn is_aggregate(self) -> bool {
        !matches!(self, Self::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterDirectionKind {
    #[default]
    In,
    Inout,
    Out,
    Return,
}

/// Relational column nullability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullableType {
    ColumnNoNulls,
    #[default]
    ColumnNullable,
    ColumnNullableUnknown,
}

/// Foreign key update/delete action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferentialRuleType {
    ImportedKeyNoAction,
    ImportedKeyCascade,
    ImportedKeySetNull,
    #[default]
    ImportedKeyRestrict,
    ImportedKeySetDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeferrabilityType {
    InitiallyDeferred,
    InitiallyImmediate,
    #[default]
    NotDeferrable,
}

/// `(tag, value)` pair attached to a model element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedValue {
    pub tag: String,
    pub value: String,
}

impl TaggedValue {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }
}
