//! Model graph
//!
//! Arena of [`Element`]s addressed by [`ElementId`]. Elements refer to each
//! other only through link lists maintained by the link engine
//! ([`links`](self::links)), so the graph owns every element and handles stay
//! `Copy`.
//!
//! Deleted elements leave a tombstone (`None` slot); ids are never reused.

pub mod integrity;
pub mod io;
pub mod links;
mod rules;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CwmError, Result};
use crate::shared::models::{
    ConstraintPolicy, CwmConstraint, Element, ElementId, Facet, Link, LinkEnd, MetaClass,
    ModelElementRef, Side, TaggedValue, VisibilityKind,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelGraph {
    slots: Vec<Option<Element>>,
    #[serde(skip)]
    policy: ConstraintPolicy,
}

impl ModelGraph {
    /// Empty graph with the strict (eager) constraint policy
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ConstraintPolicy) -> Self {
        Self {
            slots: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> ConstraintPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: ConstraintPolicy) {
        self.policy = policy;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Element lifecycle
    // ═══════════════════════════════════════════════════════════════════════

    /// Create an element of the handle's meta-class
    ///
    /// Package factories are the public way to build elements; this is the
    /// primitive they share.
    pub fn instantiate<H: ModelElementRef>(&mut self, name: Option<&str>) -> Result<H> {
        let meta_class = H::META_CLASS;
        if meta_class.is_abstract() {
            return Err(CwmError::AbstractMetaClass(meta_class));
        }
        let id = ElementId::from_index(self.slots.len());
        let mut element = Element::new(id, meta_class);
        element.core.name = name.map(str::to_string);
        self.slots.push(Some(element));
        debug!(%id, %meta_class, name = ?name, "created element");
        Ok(H::from_element_id(id))
    }

    /// Create an element and wire its required references; the element is
    /// removed again if `init` fails
    pub(crate) fn instantiate_with<H: ModelElementRef>(
        &mut self,
        name: Option<&str>,
        init: impl FnOnce(&mut Self, H) -> Result<()>,
    ) -> Result<H> {
        let handle: H = self.instantiate(name)?;
        if let Err(err) = init(self, handle) {
            self.delete(handle.element_id())?;
            return Err(err);
        }
        Ok(handle)
    }

    /// Delete an element, detach all of its links and cascade through
    /// composite links. Returns every deleted id, parts first.
    pub fn delete(&mut self, id: impl Into<ElementId>) -> Result<Vec<ElementId>> {
        let id = id.into();
        self.element(id)?;
        let mut deleted = Vec::new();
        self.delete_recursive(id, &mut HashSet::new(), &mut deleted);
        debug!(%id, cascade = deleted.len(), "deleted element");
        Ok(deleted)
    }

    fn delete_recursive(
        &mut self,
        id: ElementId,
        visited: &mut HashSet<ElementId>,
        deleted: &mut Vec<ElementId>,
    ) {
        // a composite cycle must not recurse forever
        if !visited.insert(id) {
            return;
        }
        let Some(element) = self.slot(id) else {
            return;
        };
        let parts: Vec<ElementId> = Link::composites()
            .flat_map(|link| element.related(LinkEnd::source(link)).to_vec())
            .collect();
        for part in parts {
            self.delete_recursive(part, visited, deleted);
        }

        let ends: Vec<(LinkEnd, Vec<ElementId>)> = match self.slot(id) {
            Some(element) => element
                .link_ends()
                .map(|(end, ids)| (end, ids.to_vec()))
                .collect(),
            None => return,
        };
        for (end, partners) in ends {
            for partner in partners {
                match end.side {
                    Side::Source => self.detach(end.link, id, partner),
                    Side::Target => self.detach(end.link, partner, id),
                }
            }
        }

        self.slots[id.index()] = None;
        deleted.push(id);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════════

    fn slot(&self, id: ElementId) -> Option<&Element> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn element(&self, id: impl Into<ElementId>) -> Result<&Element> {
        let id = id.into();
        self.slot(id).ok_or(CwmError::ElementNotFound(id))
    }

    pub(crate) fn element_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.slots
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(CwmError::ElementNotFound(id))
    }

    pub fn contains(&self, id: impl Into<ElementId>) -> bool {
        self.slot(id.into()).is_some()
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live elements in id order
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    pub fn meta_class_of(&self, id: impl Into<ElementId>) -> Result<MetaClass> {
        Ok(self.element(id)?.meta_class)
    }

    /// Checked conversion to a more specific handle
    pub fn downcast<H: ModelElementRef>(&self, id: impl Into<ElementId>) -> Result<H> {
        let id = id.into();
        self.expect_kind(id, H::META_CLASS)?;
        Ok(H::from_element_id(id))
    }

    pub(crate) fn expect_kind(&self, id: ElementId, expected: MetaClass) -> Result<()> {
        let actual = self.meta_class_of(id)?;
        if actual.is_kind_of(expected) {
            Ok(())
        } else {
            Err(CwmError::WrongMetaClass {
                id,
                expected,
                actual,
            })
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Facets
    // ═══════════════════════════════════════════════════════════════════════

    /// Property group `F` of an element
    pub fn facet<F: Facet>(&self, id: impl Into<ElementId>) -> Result<&F> {
        let id = id.into();
        let element = self.element(id)?;
        F::of(element).ok_or(CwmError::WrongMetaClass {
            id,
            expected: F::HOLDER,
            actual: element.meta_class,
        })
    }

    /// Mutate property group `F` of an element
    pub fn update<F: Facet, R>(
        &mut self,
        id: impl Into<ElementId>,
        f: impl FnOnce(&mut F) -> R,
    ) -> Result<R> {
        let id = id.into();
        let element = self.element_mut(id)?;
        let actual = element.meta_class;
        match F::of_mut(element) {
            Some(facet) => Ok(f(facet)),
            None => Err(CwmError::WrongMetaClass {
                id,
                expected: F::HOLDER,
                actual,
            }),
        }
    }

    pub(crate) fn check(&self, constraint: CwmConstraint, ok: bool, element: ElementId) -> Result<()> {
        if ok || !self.policy.applies(constraint) {
            Ok(())
        } else {
            Err(CwmError::constraint(constraint, element))
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ModelElement properties
    // ═══════════════════════════════════════════════════════════════════════

    pub fn name(&self, id: impl Into<ElementId>) -> Result<Option<&str>> {
        Ok(self.element(id)?.name())
    }

    /// Rename an element; returns the prior name
    pub fn set_name(&mut self, id: impl Into<ElementId>, name: Option<&str>) -> Result<Option<String>> {
        let id = id.into();
        let containers: Vec<(Link, ElementId)> = {
            let element = self.element(id)?;
            NAMED_LINKS
                .iter()
                .filter_map(|link| {
                    element
                        .related(LinkEnd::target(*link))
                        .first()
                        .map(|c| (*link, *c))
                })
                .collect()
        };
        for (link, container) in containers {
            self.check_sibling_name(link, container, id, name)?;
        }
        let element = self.element_mut(id)?;
        Ok(std::mem::replace(
            &mut element.core.name,
            name.map(str::to_string),
        ))
    }

    pub fn visibility(&self, id: impl Into<ElementId>) -> Result<VisibilityKind> {
        Ok(self.element(id)?.core.visibility)
    }

    pub fn set_visibility(
        &mut self,
        id: impl Into<ElementId>,
        visibility: VisibilityKind,
    ) -> Result<VisibilityKind> {
        let element = self.element_mut(id.into())?;
        Ok(std::mem::replace(&mut element.core.visibility, visibility))
    }

    pub fn tagged_value(&self, id: impl Into<ElementId>, tag: &str) -> Result<Option<&str>> {
        Ok(self.element(id)?.tagged_value(tag))
    }

    pub fn tagged_values(&self, id: impl Into<ElementId>) -> Result<&[TaggedValue]> {
        Ok(&self.element(id)?.core.tagged_values)
    }

    /// Set a tag; replaces an existing value in place and returns it
    pub fn set_tagged_value(
        &mut self,
        id: impl Into<ElementId>,
        tag: &str,
        value: &str,
    ) -> Result<Option<String>> {
        let element = self.element_mut(id.into())?;
        let values = &mut element.core.tagged_values;
        match values.iter_mut().find(|tv| tv.tag == tag) {
            Some(existing) => Ok(Some(std::mem::replace(
                &mut existing.value,
                value.to_string(),
            ))),
            None => {
                values.push(TaggedValue::new(tag, value));
                Ok(None)
            }
        }
    }

    pub fn remove_tagged_value(&mut self, id: impl Into<ElementId>, tag: &str) -> Result<Option<String>> {
        let element = self.element_mut(id.into())?;
        let values = &mut element.core.tagged_values;
        let position = values.iter().position(|tv| tv.tag == tag);
        Ok(position.map(|i| values.remove(i).value))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Sibling names
    // ═══════════════════════════════════════════════════════════════════════

    /// Reject `name` for `member` if a sibling under `container` already
    /// uses it (eager policy only)
    pub(crate) fn check_sibling_name(
        &self,
        link: Link,
        container: ElementId,
        member: ElementId,
        name: Option<&str>,
    ) -> Result<()> {
        let Some(name) = name else {
            return Ok(());
        };
        let member_class = self.meta_class_of(member)?;
        let Some(constraint) = naming_constraint(link, member_class) else {
            return Ok(());
        };
        if !self.policy.applies(constraint) {
            return Ok(());
        }
        for sibling in self.element(container)?.related(LinkEnd::source(link)) {
            if *sibling == member {
                continue;
            }
            let other = self.element(*sibling)?;
            if other.name() == Some(name) && same_naming_kind(link, other.meta_class, member_class) {
                return Err(CwmError::constraint(constraint, container));
            }
        }
        Ok(())
    }
}

/// Containment links whose members need distinct names
pub(crate) const NAMED_LINKS: &[Link] = &[
    Link::ElementOwnership,
    Link::ClassifierFeature,
    Link::BehavioralFeatureParameter,
    Link::EventParameter,
    Link::EnumerationLiterals,
];

pub(crate) fn naming_constraint(link: Link, member: MetaClass) -> Option<CwmConstraint> {
    match link {
        Link::ElementOwnership => Some(CwmConstraint::DuplicateOwnedName),
        Link::ClassifierFeature if member.is_kind_of(MetaClass::StructuralFeature) => {
            Some(CwmConstraint::DuplicateFeatureName)
        }
        Link::BehavioralFeatureParameter | Link::EventParameter => {
            Some(CwmConstraint::DuplicateParameterName)
        }
        Link::EnumerationLiterals => Some(CwmConstraint::DuplicateLiteralName),
        _ => None,
    }
}

/// Whether two members of the same container compete for a name
pub(crate) fn same_naming_kind(link: Link, a: MetaClass, b: MetaClass) -> bool {
    match link {
        Link::ElementOwnership => a == b,
        Link::ClassifierFeature => {
            a.is_kind_of(MetaClass::StructuralFeature) && b.is_kind_of(MetaClass::StructuralFeature)
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{
        AttributeId, ClassId, ClassifierFacet, ClassifierId, PackageId, TableId,
    };

    #[test]
    fn test_instantiate_and_lookup() {
        let mut graph = ModelGraph::new();
        let class: ClassId = graph.instantiate(Some("Customer")).unwrap();
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.name(class).unwrap(), Some("Customer"));
        assert_eq!(graph.meta_class_of(class).unwrap(), MetaClass::Class);
    }

    #[test]
    fn test_abstract_meta_class_rejected() {
        let mut graph = ModelGraph::new();
        let err = graph.instantiate::<ClassifierId>(None).unwrap_err();
        assert!(matches!(err, CwmError::AbstractMetaClass(MetaClass::Classifier)));
    }

    #[test]
    fn test_downcast() {
        let mut graph = ModelGraph::new();
        let table: TableId = graph.instantiate(Some("T")).unwrap();
        let classifier: ClassifierId = table.into();
        assert_eq!(graph.downcast::<TableId>(classifier).unwrap(), table);
        let err = graph.downcast::<AttributeId>(classifier).unwrap_err();
        assert!(matches!(
            err,
            CwmError::WrongMetaClass {
                expected: MetaClass::Attribute,
                actual: MetaClass::Table,
                ..
            }
        ));
    }

    #[test]
    fn test_setters_return_prior_value() {
        let mut graph = ModelGraph::new();
        let class: ClassId = graph.instantiate(Some("A")).unwrap();
        assert_eq!(graph.set_name(class, Some("B")).unwrap(), Some("A".to_string()));
        assert_eq!(
            graph.set_visibility(class, VisibilityKind::Private).unwrap(),
            VisibilityKind::Public
        );
        assert_eq!(graph.set_tagged_value(class, "owner", "ops").unwrap(), None);
        assert_eq!(
            graph.set_tagged_value(class, "owner", "dba").unwrap(),
            Some("ops".to_string())
        );
        assert_eq!(graph.tagged_values(class).unwrap().len(), 1);
        assert_eq!(graph.remove_tagged_value(class, "owner").unwrap(), Some("dba".to_string()));
    }

    #[test]
    fn test_facet_access() {
        let mut graph = ModelGraph::new();
        let class: ClassId = graph.instantiate(None).unwrap();
        let prior = graph
            .update::<ClassifierFacet, _>(class, |f| std::mem::replace(&mut f.is_abstract, true))
            .unwrap();
        assert!(!prior);
        assert!(graph.facet::<ClassifierFacet>(class).unwrap().is_abstract);

        let package: PackageId = graph.instantiate(None).unwrap();
        assert!(graph.facet::<ClassifierFacet>(package).is_err());
    }

    #[test]
    fn test_delete_terminates_on_ownership_cycle() {
        let mut graph = ModelGraph::new();
        let a: PackageId = graph.instantiate(Some("a")).unwrap();
        let b: PackageId = graph.instantiate(Some("b")).unwrap();
        graph.force_link(Link::ElementOwnership, a, b).unwrap();
        graph.force_link(Link::ElementOwnership, b, a).unwrap();

        let deleted = graph.delete(a).unwrap();
        assert_eq!(deleted, vec![b.id(), a.id()]);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut graph = ModelGraph::new();
        let a: ClassId = graph.instantiate(None).unwrap();
        graph.delete(a).unwrap();
        let b: ClassId = graph.instantiate(None).unwrap();
        assert_ne!(a.id(), b.id());
        assert!(!graph.contains(a));
        assert!(matches!(
            graph.element(a),
            Err(CwmError::ElementNotFound(_))
        ));
        assert_eq!(graph.len(), 1);
    }
}
