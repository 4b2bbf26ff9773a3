//! Model-wide constraint validation
//!
//! - `domain`: [`Finding`], [`Violation`], [`ValidationReport`]
//! - `ports`: [`ConstraintRule`] trait
//! - `infrastructure`: one rule per [`CwmConstraint`](crate::shared::models::CwmConstraint)
//! - `application`: [`ModelValidator`]

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::ModelValidator;
pub use domain::{Finding, ValidationReport, Violation};
pub use infrastructure::{standard_rules, ElementCheck, ElementRule, GeneralizationCycleRule, OwnershipCycleRule};
pub use ports::ConstraintRule;
