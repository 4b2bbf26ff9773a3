//! Graph-wide cycle rules
//!
//! The link engine refuses cycles as they are created, so these only fire
//! on graphs deserialized from external documents. Each rule projects the
//! model onto a petgraph `DiGraph` and reports every member of a strongly
//! connected component that contains a cycle (self-loops included).

use ahash::AHashMap;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::errors::Result;
use crate::features::validation::domain::Finding;
use crate::features::validation::ports::ConstraintRule;
use crate::graph::ModelGraph;
use crate::shared::models::{CwmConstraint, Element, ElementId, Link, LinkEnd, MetaClass};

/// Composite ownership (owner -> part) must be acyclic
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnershipCycleRule;

impl ConstraintRule for OwnershipCycleRule {
    fn constraint(&self) -> CwmConstraint {
        CwmConstraint::OwnershipCycle
    }

    fn name(&self) -> &'static str {
        "OwnershipCycle"
    }

    fn scope(&self) -> &'static [MetaClass] {
        &[]
    }

    fn check_graph(&self, graph: &ModelGraph) -> Result<Vec<Finding>> {
        Ok(cyclic_members(graph, |_, element| {
            Link::composites()
                .flat_map(|link| element.related(LinkEnd::source(link)).iter().copied())
                .collect()
        }))
    }
}

/// Generalization (child -> parent) must be acyclic
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralizationCycleRule;

impl ConstraintRule for GeneralizationCycleRule {
    fn constraint(&self) -> CwmConstraint {
        CwmConstraint::GeneralizationCycle
    }

    fn name(&self) -> &'static str {
        "GeneralizationCycle"
    }

    fn scope(&self) -> &'static [MetaClass] {
        &[]
    }

    fn check_graph(&self, graph: &ModelGraph) -> Result<Vec<Finding>> {
        Ok(cyclic_members(graph, |graph, element| {
            if element.is_kind_of(MetaClass::Classifier) {
                graph.generalization_parents(element.id)
            } else {
                Vec::new()
            }
        }))
    }
}

fn cyclic_members(
    graph: &ModelGraph,
    successors: impl Fn(&ModelGraph, &Element) -> Vec<ElementId>,
) -> Vec<Finding> {
    let mut digraph: DiGraph<ElementId, ()> = DiGraph::new();
    let mut nodes: AHashMap<ElementId, NodeIndex> = AHashMap::new();
    for element in graph.iter() {
        nodes.insert(element.id, digraph.add_node(element.id));
    }
    for element in graph.iter() {
        let Some(&from) = nodes.get(&element.id) else {
            continue;
        };
        for next in successors(graph, element) {
            if let Some(&to) = nodes.get(&next) {
                digraph.add_edge(from, to, ());
            }
        }
    }

    let mut findings = Vec::new();
    for scc in tarjan_scc(&digraph) {
        let cyclic = scc.len() > 1 || scc.first().is_some_and(|n| digraph.contains_edge(*n, *n));
        if !cyclic {
            continue;
        }
        let mut members: Vec<ElementId> = scc.iter().map(|n| digraph[*n]).collect();
        members.sort();
        let detail = format!(
            "cycle through {}",
            members
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
        findings.extend(
            members
                .iter()
                .map(|id| Finding::with_detail(*id, detail.clone())),
        );
    }
    findings
}
