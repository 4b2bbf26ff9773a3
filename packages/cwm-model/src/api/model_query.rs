//! ModelQuery - read-only navigation over a `ModelGraph`
//!
//! Name lookups follow composite ownership: the qualified name of an
//! element is the `::`-joined names of its owner chain, outermost first.
//! Unnamed segments are rendered as their id (`#7`).

use std::collections::{BTreeMap, HashSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CwmError, Result};
use crate::graph::ModelGraph;
use crate::shared::models::{
    ClassifierId, ClassifierRef, ElementId, FeatureId, Link, LinkEnd, MetaClass, ModelElementRef,
    Side,
};

/// Separator between qualified-name segments
pub const SEPARATOR: &str = "::";

// ═══════════════════════════════════════════════════════════════════════════
// Core Types
// ═══════════════════════════════════════════════════════════════════════════

/// Element counts of a graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelStats {
    pub element_count: usize,
    /// Link pairs (each bidirectional pair counted once)
    pub link_count: usize,
    pub by_meta_class: BTreeMap<String, usize>,
    pub by_package: BTreeMap<String, usize>,
}

impl fmt::Display for ModelStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} element(s), {} link(s)", self.element_count, self.link_count)?;
        for (package, count) in &self.by_package {
            writeln!(f, "  {:<20} {:>6}", package, count)?;
        }
        for (meta_class, count) in &self.by_meta_class {
            writeln!(f, "    {:<22} {:>6}", meta_class, count)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ModelQuery - Core API
// ═══════════════════════════════════════════════════════════════════════════

/// Query API borrowing a graph
#[derive(Debug, Clone, Copy)]
pub struct ModelQuery<'g> {
    graph: &'g ModelGraph,
}

impl<'g> ModelQuery<'g> {
    pub fn new(graph: &'g ModelGraph) -> Self {
        Self { graph }
    }

    /// Owner chain names joined with `::`
    pub fn qualified_name(&self, id: impl Into<ElementId>) -> Result<String> {
        let id = id.into();
        let mut segments = vec![self.segment(id)?];
        let mut cursor = self.graph.composite_owner(id);
        while let Some((_, owner)) = cursor {
            if segments.len() > self.graph.len() {
                return Err(CwmError::integrity(format!(
                    "ownership chain of {} does not terminate",
                    id
                )));
            }
            segments.push(self.segment(owner)?);
            cursor = self.graph.composite_owner(owner);
        }
        segments.reverse();
        Ok(segments.join(SEPARATOR))
    }

    /// Elements whose qualified name is `path`
    ///
    /// More than one element matches when kinds of the same name coexist
    /// (a class and a package both called `Sales`).
    pub fn find_by_qualified_name(&self, path: &str) -> Vec<ElementId> {
        let mut segments = path.split(SEPARATOR);
        let Some(first) = segments.next() else {
            return Vec::new();
        };
        let mut matches: Vec<ElementId> = self
            .graph
            .iter()
            .filter(|e| self.graph.composite_owner(e.id).is_none() && self.matches(e.id, first))
            .map(|e| e.id)
            .collect();
        for segment in segments {
            matches = matches
                .iter()
                .flat_map(|owner| self.parts(*owner))
                .filter(|part| self.matches(*part, segment))
                .collect();
            if matches.is_empty() {
                break;
            }
        }
        matches
    }

    /// Every element called `name`, in id order
    pub fn find_by_name(&self, name: &str) -> Vec<ElementId> {
        self.graph
            .iter()
            .filter(|e| e.name() == Some(name))
            .map(|e| e.id)
            .collect()
    }

    /// Every element that is a `kind` (sub-classes included)
    pub fn elements_of_kind(&self, kind: MetaClass) -> Vec<ElementId> {
        self.graph
            .iter()
            .filter(|e| e.is_kind_of(kind))
            .map(|e| e.id)
            .collect()
    }

    /// Composite parts of `owner` that are a `kind`
    pub fn owned_elements_of_kind(
        &self,
        owner: impl Into<ElementId>,
        kind: MetaClass,
    ) -> Result<Vec<ElementId>> {
        let owner = owner.into();
        self.graph.element(owner)?;
        let mut out = Vec::new();
        for part in self.parts(owner) {
            if self.graph.meta_class_of(part)?.is_kind_of(kind) {
                out.push(part);
            }
        }
        Ok(out)
    }

    /// Every (transitive) parent through generalizations, nearest first
    pub fn ancestors(&self, classifier: impl ClassifierRef) -> Result<Vec<ClassifierId>> {
        let start = classifier.element_id();
        self.graph.element(start)?;
        let mut seen = HashSet::from([start]);
        let mut out = Vec::new();
        let mut queue: VecDeque<ElementId> = self.graph.generalization_parents(start).into();
        while let Some(next) = queue.pop_front() {
            if !seen.insert(next) {
                continue;
            }
            out.push(self.graph.downcast::<ClassifierId>(next)?);
            queue.extend(self.graph.generalization_parents(next));
        }
        Ok(out)
    }

    /// `true` when `sub` specializes `sup`, directly or transitively
    pub fn is_subtype_of(&self, sub: impl ClassifierRef, sup: impl ClassifierRef) -> bool {
        self.graph.inherits_from(sub.element_id(), sup.element_id())
    }

    /// Own features followed by inherited ones (nearest ancestor first)
    pub fn all_features(&self, classifier: impl ClassifierRef) -> Result<Vec<FeatureId>> {
        let mut out = self.graph.features(classifier)?;
        for ancestor in self.ancestors(classifier)? {
            out.extend(self.graph.features(ancestor)?);
        }
        Ok(out)
    }

    pub fn model_stats(&self) -> ModelStats {
        let mut stats = ModelStats::default();
        for element in self.graph.iter() {
            stats.element_count += 1;
            *stats
                .by_meta_class
                .entry(element.meta_class.as_str().to_string())
                .or_insert(0) += 1;
            *stats
                .by_package
                .entry(element.meta_class.package().as_str().to_string())
                .or_insert(0) += 1;
            stats.link_count += element
                .link_ends()
                .filter(|(end, _)| end.side == Side::Source)
                .map(|(_, partners)| partners.len())
                .sum::<usize>();
        }
        stats
    }

    // ─────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────

    fn segment(&self, id: ElementId) -> Result<String> {
        Ok(match self.graph.name(id)? {
            Some(name) => name.to_string(),
            None => id.to_string(),
        })
    }

    fn matches(&self, id: ElementId, segment: &str) -> bool {
        match self.graph.name(id) {
            Ok(Some(name)) => name == segment,
            Ok(None) => id.to_string() == segment,
            Err(_) => false,
        }
    }

    fn parts(&self, owner: ElementId) -> Vec<ElementId> {
        let Ok(element) = self.graph.element(owner) else {
            return Vec::new();
        };
        Link::composites()
            .flat_map(|link| element.related(LinkEnd::source(link)).iter().copied())
            .collect()
    }
}

impl ModelGraph {
    /// Query API over this graph
    pub fn query(&self) -> ModelQuery<'_> {
        ModelQuery::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::core::{CorePackage, StandardCorePackage};
    use crate::features::relational::{RelationalPackage, StandardRelationalPackage};
    use crate::features::relationships::{RelationshipsPackage, StandardRelationshipsPackage};
    use crate::shared::models::{ClassId, PackageId, PrimaryKeyId};
    use pretty_assertions::assert_eq;

    struct Fixture {
        graph: ModelGraph,
        sales: PackageId,
        party: ClassId,
        customer: ClassId,
        vip: ClassId,
    }

    /// sales { Party(name) <- Customer(since) <- Vip(tier) }
    fn fixture() -> Fixture {
        let mut g = ModelGraph::new();
        let core = StandardCorePackage;
        let rel = StandardRelationshipsPackage;
        let sales = core.create_package(&mut g, "sales").unwrap();
        let party = core.create_class(&mut g, "Party").unwrap();
        let customer = core.create_class(&mut g, "Customer").unwrap();
        let vip = core.create_class(&mut g, "Vip").unwrap();
        for (class, attr) in [(party, "name"), (customer, "since"), (vip, "tier")] {
            g.add_owned_element(sales, class).unwrap();
            let a = core.create_attribute(&mut g, attr).unwrap();
            g.add_feature(class, a).unwrap();
        }
        rel.create_generalization(&mut g, customer.into(), party.into())
            .unwrap();
        rel.create_generalization(&mut g, vip.into(), customer.into())
            .unwrap();
        Fixture {
            graph: g,
            sales,
            party,
            customer,
            vip,
        }
    }

    #[test]
    fn test_qualified_name_roundtrip() {
        let f = fixture();
        let q = f.graph.query();
        let since = f.graph.features(f.customer).unwrap()[0];
        assert_eq!(q.qualified_name(since).unwrap(), "sales::Customer::since");
        assert_eq!(
            q.find_by_qualified_name("sales::Customer::since"),
            vec![since.element_id()]
        );
        assert!(q.find_by_qualified_name("sales::Nobody").is_empty());
    }

    #[test]
    fn test_unnamed_segment_uses_id() {
        let mut g = ModelGraph::new();
        let table = StandardRelationalPackage.create_table(&mut g, "t").unwrap();
        let pk: PrimaryKeyId = g.instantiate(None).unwrap();
        g.add_owned_element(table, pk).unwrap();
        let q = g.query();
        assert_eq!(q.qualified_name(pk).unwrap(), "t::#1");
        assert_eq!(q.find_by_qualified_name("t::#1"), vec![pk.element_id()]);
    }

    #[test]
    fn test_kind_lookups() {
        let f = fixture();
        let q = f.graph.query();
        assert_eq!(q.elements_of_kind(MetaClass::Class).len(), 3);
        assert_eq!(q.elements_of_kind(MetaClass::Classifier).len(), 3);
        assert_eq!(q.elements_of_kind(MetaClass::Attribute).len(), 3);
        assert_eq!(
            q.owned_elements_of_kind(f.sales, MetaClass::Classifier).unwrap(),
            vec![f.party.element_id(), f.customer.element_id(), f.vip.element_id()]
        );
        assert_eq!(q.find_by_name("Vip"), vec![f.vip.element_id()]);
    }

    #[test]
    fn test_ancestors_and_features() {
        let f = fixture();
        let q = f.graph.query();
        let ancestors: Vec<ClassifierId> = q.ancestors(f.vip).unwrap();
        assert_eq!(ancestors, vec![f.customer.as_classifier(), f.party.as_classifier()]);
        assert!(q.is_subtype_of(f.vip, f.party));
        assert!(!q.is_subtype_of(f.party, f.vip));
        assert!(!q.is_subtype_of(f.vip, f.vip));

        let names: Vec<&str> = q
            .all_features(f.vip)
            .unwrap()
            .into_iter()
            .map(|feature| f.graph.name(feature).unwrap().unwrap())
            .collect();
        assert_eq!(names, vec!["tier", "since", "name"]);
    }

    #[test]
    fn test_model_stats() {
        let f = fixture();
        let stats = f.graph.query().model_stats();
        assert_eq!(stats.element_count, 9);
        assert_eq!(stats.by_meta_class["Class"], 3);
        assert_eq!(stats.by_meta_class["Generalization"], 2);
        assert_eq!(stats.by_package["Core"], 7);
        assert_eq!(stats.by_package["Relationships"], 2);
        // 3 owned classes + 3 features + 2 x (child, parent)
        assert_eq!(stats.link_count, 10);
        assert!(stats.to_string().starts_with("9 element(s), 10 link(s)"));
    }
}
