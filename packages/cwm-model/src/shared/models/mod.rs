//! Shared data models
//!
//! Identity, taxonomy, typed handles, association descriptors and element
//! storage used by every package.

pub mod constraint;
pub mod element;
pub mod expression;
pub mod handles;
pub mod id;
pub mod kinds;
pub mod link;
pub mod meta_class;
pub mod multiplicity;

pub use constraint::{ConstraintPolicy, CwmConstraint, Enforcement, Locale};
pub use element::*;
pub use expression::{BooleanExpression, Expression, ProcedureExpression, QueryExpression};
pub use handles::*;
pub use id::ElementId;
pub use kinds::*;
pub use link::{EndSpec, Link, LinkEnd, LinkSpec, Side, Upper};
pub use meta_class::{CwmPackage, MetaClass};
pub use multiplicity::{Multiplicity, MultiplicityRange};
