//! Validation Infrastructure - Constraint rule implementations
//!
//! - `object_model`: Core, Behavioral, Relationships, Instance
//! - `foundation`: KeyIndexes, SoftwareDeployment, DataTypes, TypeMapping
//! - `relational`: Relational
//! - `cycles`: graph-wide ownership and generalization cycles (petgraph)

mod cycles;
mod foundation;
mod object_model;
mod relational;

use std::collections::BTreeMap;

pub use cycles::{GeneralizationCycleRule, OwnershipCycleRule};

use super::domain::Finding;
use super::ports::ConstraintRule;
use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{CwmConstraint, Element, ElementId, LinkEnd, MetaClass};

/// Per-element check function
pub type ElementCheck = fn(&ModelGraph, &Element) -> Result<Vec<Finding>>;

/// Rule backed by a plain function
#[derive(Clone, Copy)]
pub struct ElementRule {
    constraint: CwmConstraint,
    name: &'static str,
    scope: &'static [MetaClass],
    check: ElementCheck,
}

impl ElementRule {
    pub const fn new(
        constraint: CwmConstraint,
        name: &'static str,
        scope: &'static [MetaClass],
        check: ElementCheck,
    ) -> Self {
        Self {
            constraint,
            name,
            scope,
            check,
        }
    }
}

impl ConstraintRule for ElementRule {
    fn constraint(&self) -> CwmConstraint {
        self.constraint
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn scope(&self) -> &'static [MetaClass] {
        self.scope
    }

    fn check_element(&self, graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
        (self.check)(graph, element)
    }
}

impl std::fmt::Debug for ElementRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementRule")
            .field("constraint", &self.constraint)
            .field("scope", &self.scope)
            .finish()
    }
}

/// One rule per [`CwmConstraint`], in declaration order
pub fn standard_rules() -> Vec<Box<dyn ConstraintRule>> {
    let mut rules: Vec<Box<dyn ConstraintRule>> = Vec::with_capacity(CwmConstraint::ALL.len());
    for rule in object_model::RULES
        .iter()
        .chain(foundation::RULES)
        .chain(relational::RULES)
    {
        rules.push(Box::new(*rule));
    }
    rules.push(Box::new(OwnershipCycleRule));
    rules.push(Box::new(GeneralizationCycleRule));
    rules.sort_by_key(|r| {
        CwmConstraint::ALL
            .iter()
            .position(|c| *c == r.constraint())
            .unwrap_or(usize::MAX)
    });
    rules
}

// ═══════════════════════════════════════════════════════════════════════════
// Helpers shared by rule modules
// ═══════════════════════════════════════════════════════════════════════════

/// First partner on a link end (single-valued ends hold at most one)
pub(crate) fn first_partner(element: &Element, end: LinkEnd) -> Option<ElementId> {
    element.related(end).first().copied()
}

/// Names used more than once among `members`
///
/// `group` returns the naming group of a member, or `None` when the member
/// does not take part. Only members of the same group clash.
pub(crate) fn name_clashes(
    graph: &ModelGraph,
    owner: ElementId,
    members: &[ElementId],
    group: impl Fn(&Element) -> Option<&'static str>,
) -> Result<Vec<Finding>> {
    let mut counts: BTreeMap<(&'static str, &str), usize> = BTreeMap::new();
    for id in members {
        let member = graph.element(*id)?;
        if let (Some(group), Some(name)) = (group(member), member.name()) {
            *counts.entry((group, name)).or_insert(0) += 1;
        }
    }
    Ok(counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|((group, name), n)| {
            Finding::with_detail(owner, format!("{} '{}' used {} times", group, name, n))
        })
        .collect())
}

/// Single finding when `ok` is false
pub(crate) fn unless(ok: bool, element: ElementId) -> Vec<Finding> {
    if ok {
        Vec::new()
    } else {
        vec![Finding::new(element)]
    }
}
