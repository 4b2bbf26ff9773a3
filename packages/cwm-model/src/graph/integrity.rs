//! Structural integrity of the link lists
//!
//! The link engine keeps both ends of every link in sync and the factories
//! lay out each element's facets. Graphs read from disk bypass both, so they
//! are checked here before use.

use std::collections::HashSet;
use std::mem::discriminant;

use super::ModelGraph;
use crate::errors::{CwmError, Result};
use crate::shared::models::{Element, ElementId, Link, LinkEnd};

impl ModelGraph {
    /// Every inconsistency found, as human-readable lines
    pub fn integrity_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for (index, slot) in self.slots.iter().enumerate() {
            let Some(element) = slot else {
                continue;
            };
            if element.id.index() != index {
                issues.push(format!(
                    "slot {} holds element {}",
                    index, element.id
                ));
            }
            if element.meta_class.is_abstract() {
                issues.push(format!(
                    "{} has abstract meta-class {}",
                    element.id, element.meta_class
                ));
            }
            facet_issues(element, &mut issues);

            for (end, partners) in element.link_ends() {
                let spec = end.spec();
                if !element.is_kind_of(spec.holder) {
                    issues.push(format!(
                        "{} ({}) cannot hold {}",
                        element.id, element.meta_class, end
                    ));
                }
                if spec.is_single() && partners.len() > 1 {
                    issues.push(format!(
                        "{} holds {} values on single-valued {}",
                        element.id,
                        partners.len(),
                        end
                    ));
                }
                let unique: HashSet<&ElementId> = partners.iter().collect();
                if unique.len() != partners.len() {
                    issues.push(format!("{} has duplicate entries on {}", element.id, end));
                }
                for partner in partners {
                    self.check_inverse(element.id, end, *partner, &mut issues);
                }
            }

            let owners: usize = Link::composites()
                .map(|link| element.related(LinkEnd::target(link)).len())
                .sum();
            if owners > 1 {
                issues.push(format!(
                    "{} has {} composite owners",
                    element.id, owners
                ));
            }
            if self.in_ownership_cycle(element.id) {
                issues.push(format!("{} owns itself through composite links", element.id));
            }
        }

        issues
    }

    /// Walk up the first composite owner until the chain ends or comes back
    fn in_ownership_cycle(&self, id: ElementId) -> bool {
        let mut cursor = self.composite_owner(id);
        for _ in 0..self.slots.len() {
            match cursor {
                Some((_, owner)) if owner == id => return true,
                Some((_, owner)) => cursor = self.composite_owner(owner),
                None => return false,
            }
        }
        false
    }

    fn check_inverse(
        &self,
        id: ElementId,
        end: LinkEnd,
        partner: ElementId,
        issues: &mut Vec<String>,
    ) {
        match self.element(partner) {
            Ok(other) => {
                if !other.related(end.opposite()).contains(&id) {
                    issues.push(format!(
                        "{} -> {} on {} has no inverse on {}",
                        id,
                        partner,
                        end,
                        end.opposite()
                    ));
                }
            }
            Err(_) => issues.push(format!("{} refers to missing {} on {}", id, partner, end)),
        }
    }

    /// Fail on the first inconsistency
    pub fn check_integrity(&self) -> Result<()> {
        match self.integrity_issues().into_iter().next() {
            Some(issue) => Err(CwmError::integrity(issue)),
            None => Ok(()),
        }
    }
}

/// Facets present on `element` must be exactly those its meta-class gets
/// from [`Element::new`]
fn facet_issues(element: &Element, issues: &mut Vec<String>) {
    let expected = Element::new(element.id, element.meta_class);
    let layout = [
        ("classifier", element.classifier.is_some() == expected.classifier.is_some()),
        ("feature", element.feature.is_some() == expected.feature.is_some()),
        ("structural", element.structural.is_some() == expected.structural.is_some()),
        ("attribute", element.attribute.is_some() == expected.attribute.is_some()),
        ("behavioral", element.behavioral.is_some() == expected.behavioral.is_some()),
        ("props", discriminant(&element.props) == discriminant(&expected.props)),
        (
            "resource",
            element.resource.as_ref().map(discriminant)
                == expected.resource.as_ref().map(discriminant),
        ),
    ];
    for (facet, ok) in layout {
        if !ok {
            issues.push(format!(
                "{} ({}) has a malformed {} facet",
                element.id, element.meta_class, facet
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{AttributeId, ClassId, IndexId, PackageId, Props};

    #[test]
    fn test_engine_built_graph_is_consistent() {
        let mut graph = ModelGraph::new();
        let class: ClassId = graph.instantiate(Some("C")).unwrap();
        let attr: AttributeId = graph.instantiate(Some("a")).unwrap();
        graph.link(Link::ClassifierFeature, class, attr).unwrap();
        graph.link(Link::StructuralFeatureType, attr, class).unwrap();
        assert!(graph.integrity_issues().is_empty());
        graph.check_integrity().unwrap();
    }

    #[test]
    fn test_missing_inverse_detected() {
        let mut graph = ModelGraph::new();
        let class: ClassId = graph.instantiate(Some("C")).unwrap();
        let attr: AttributeId = graph.instantiate(Some("a")).unwrap();
        graph
            .element_mut(class.id())
            .unwrap()
            .links_mut(LinkEnd::source(Link::ClassifierFeature))
            .push(attr.id());

        let issues = graph.integrity_issues();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("has no inverse"));
        assert!(matches!(
            graph.check_integrity(),
            Err(CwmError::Integrity(_))
        ));
    }

    #[test]
    fn test_dangling_reference_detected() {
        let mut graph = ModelGraph::new();
        let class: ClassId = graph.instantiate(Some("C")).unwrap();
        graph
            .element_mut(class.id())
            .unwrap()
            .links_mut(LinkEnd::source(Link::ClassifierFeature))
            .push(ElementId::from_raw(40));
        assert!(graph.integrity_issues()[0].contains("missing"));
    }

    #[test]
    fn test_ownership_cycle_detected() {
        let mut graph = ModelGraph::new();
        let a: PackageId = graph.instantiate(Some("a")).unwrap();
        let b: PackageId = graph.instantiate(Some("b")).unwrap();
        graph.force_link(Link::ElementOwnership, a, b).unwrap();
        graph.force_link(Link::ElementOwnership, b, a).unwrap();

        let issues = graph.integrity_issues();
        assert_eq!(
            issues
                .iter()
                .filter(|i| i.contains("owns itself"))
                .count(),
            2
        );
    }

    #[test]
    fn test_second_composite_owner_detected() {
        let mut graph = ModelGraph::new();
        let a: PackageId = graph.instantiate(Some("a")).unwrap();
        let b: PackageId = graph.instantiate(Some("b")).unwrap();
        let class: ClassId = graph.instantiate(Some("C")).unwrap();
        graph.force_link(Link::ElementOwnership, a, class).unwrap();
        graph.force_link(Link::ElementOwnership, b, class).unwrap();

        let issues = graph.integrity_issues();
        assert!(issues.iter().any(|i| i.contains("2 composite owners")));
    }

    #[test]
    fn test_facet_layout_checked() {
        let mut graph = ModelGraph::new();
        let index: IndexId = graph.instantiate(Some("idx")).unwrap();
        let class: ClassId = graph.instantiate(Some("C")).unwrap();
        assert!(graph.integrity_issues().is_empty());

        graph.element_mut(index.id()).unwrap().props = Props::None;
        graph.element_mut(class.id()).unwrap().classifier = None;

        let issues = graph.integrity_issues();
        assert_eq!(issues.len(), 2);
        assert!(issues[0].contains("malformed props facet"));
        assert!(issues[1].contains("malformed classifier facet"));
    }
}
