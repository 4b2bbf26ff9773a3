//! Validation Ports
//!
//! A [`ConstraintRule`] checks one [`CwmConstraint`]. Element rules declare
//! the meta-classes they apply to and are called once per matching element;
//! graph rules (cycle detection) see the whole graph at once.
//!
//! ## Usage
//! ```rust,ignore
//! struct NoEmptyNames;
//!
//! impl ConstraintRule for NoEmptyNames {
//!     fn constraint(&self) -> CwmConstraint { CwmConstraint::DuplicateOwnedName }
//!     fn name(&self) -> &'static str { "NoEmptyNames" }
//!     fn scope(&self) -> &'static [MetaClass] { &[MetaClass::Class] }
//!     fn check_element(&self, graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
//!         Ok(vec![])
//!     }
//! }
//!
//! let validator = ModelValidator::new(&config).with_rule(Box::new(NoEmptyNames));
//! ```

use super::domain::Finding;
use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{CwmConstraint, Element, MetaClass};

/// Constraint Rule Port - Interface for every model constraint check
///
/// # Implementors
/// - `ElementRule` (per-element checks)
/// - `GeneralizationCycleRule`, `OwnershipCycleRule` (graph-wide)
pub trait ConstraintRule: Send + Sync {
    /// Constraint reported by this rule
    fn constraint(&self) -> CwmConstraint;

    /// Rule name for debugging and logging
    fn name(&self) -> &'static str;

    /// Meta-classes `check_element` is called for; empty for graph rules
    fn scope(&self) -> &'static [MetaClass];

    /// Check a single element of a kind listed in `scope`
    fn check_element(&self, _graph: &ModelGraph, _element: &Element) -> Result<Vec<Finding>> {
        Ok(Vec::new())
    }

    /// Check the whole graph
    fn check_graph(&self, _graph: &ModelGraph) -> Result<Vec<Finding>> {
        Ok(Vec::new())
    }

    /// Whether `check_element` applies to `element`
    fn applies_to(&self, element: &Element) -> bool {
        self.scope().iter().any(|mc| element.is_kind_of(*mc))
    }

    fn is_graph_rule(&self) -> bool {
        self.scope().is_empty()
    }
}
