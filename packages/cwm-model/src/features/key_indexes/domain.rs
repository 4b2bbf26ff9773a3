//! Foundation::KeyIndexes typed API

use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    ClassId, ClassRef, CwmConstraint, ElementId, IndexId, IndexProps, IndexRef, IndexedFeatureId,
    IndexedFeatureProps, IndexedFeatureRef, KeyRelationshipId, KeyRelationshipRef, Link, LinkEnd,
    ModelElementRef, StructuralFeatureId, StructuralFeatureRef, UniqueKeyId, UniqueKeyRef,
};

impl ModelGraph {
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // UniqueKey / KeyRelationship
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    pub fn add_key_feature(
        &mut self,
        key: impl UniqueKeyRef,
        feature: impl StructuralFeatureRef,
    ) -> Result<bool> {
        self.link(Link::UniqueFeature, key.element_id(), feature.element_id())
    }

    pub fn insert_key_feature(
        &mut self,
        key: impl UniqueKeyRef,
        feature: impl StructuralFeatureRef,
        position: usize,
    ) -> Result<()> {
        self.insert_at(
            Link::UniqueFeature,
            key.element_id(),
            feature.element_id(),
            position,
        )
    }

    pub fn remove_key_feature(
        &mut self,
        key: impl UniqueKeyRef,
        feature: impl StructuralFeatureRef,
    ) -> Result<bool> {
        self.unlink(Link::UniqueFeature, key.element_id(), feature.element_id())
    }

    /// Key columns in key order
    pub fn key_features(&self, key: impl UniqueKeyRef) -> Result<Vec<StructuralFeatureId>> {
        self.related_as(key.element_id(), LinkEnd::source(Link::UniqueFeature))
    }

    /// Unique keys a feature takes part in
    pub fn unique_keys(&self, feature: impl StructuralFeatureRef) -> Result<Vec<UniqueKeyId>> {
        self.related_as(feature.element_id(), LinkEnd::target(Link::UniqueFeature))
    }

    pub fn add_relationship_feature(
        &mut self,
        relationship: impl KeyRelationshipRef,
        feature: impl StructuralFeatureRef,
    ) -> Result<bool> {
        self.link(
            Link::KeyRelationshipFeature,
            relationship.element_id(),
            feature.element_id(),
        )
    }

    pub fn insert_relationship_feature(
        &mut self,
        relationship: impl KeyRelationshipRef,
        feature: impl StructuralFeatureRef,
        position: usize,
    ) -> Result<()> {
        self.insert_at(
            Link::KeyRelationshipFeature,
            relationship.element_id(),
            feature.element_id(),
            position,
        )
    }

    pub fn remove_relationship_feature(
        &mut self,
        relationship: impl KeyRelationshipRef,
        feature: impl StructuralFeatureRef,
    ) -> Result<bool> {
        self.unlink(
            Link::KeyRelationshipFeature,
            relationship.element_id(),
            feature.element_id(),
        )
    }

    pub fn relationship_features(
        &self,
        relationship: impl KeyRelationshipRef,
    ) -> Result<Vec<StructuralFeatureId>> {
        self.related_as(
            relationship.element_id(),
            LinkEnd::source(Link::KeyRelationshipFeature),
        )
    }

    pub fn key_relationships_of(
        &self,
        feature: impl StructuralFeatureRef,
    ) -> Result<Vec<KeyRelationshipId>> {
        self.related_as(
            feature.element_id(),
            LinkEnd::target(Link::KeyRelationshipFeature),
        )
    }

    /// Unique key a relationship (foreign key) refers to
    pub fn referenced_key(&self, relationship: impl KeyRelationshipRef) -> Result<Option<UniqueKeyId>> {
        self.single_as(
            relationship.element_id(),
            LinkEnd::source(Link::UniqueKeyRelationship),
        )
    }

    pub fn set_referenced_key(
        &mut self,
        relationship: impl KeyRelationshipRef,
        key: Option<UniqueKeyId>,
    ) -> Result<Option<UniqueKeyId>> {
        let prior = self.set_single(
            relationship.element_id(),
            LinkEnd::source(Link::UniqueKeyRelationship),
            key.map(ElementId::from),
        )?;
        Ok(prior.map(UniqueKeyId::from_element_id))
    }

    /// Relationships referring to a unique key
    pub fn key_relationships(&self, key: impl UniqueKeyRef) -> Result<Vec<KeyRelationshipId>> {
        self.related_as(
            key.element_id(),
            LinkEnd::target(Link::UniqueKeyRelationship),
        )
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Index
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    pub fn is_partitioning(&self, index: impl IndexRef) -> Result<bool> {
        Ok(self.facet::<IndexProps>(index.element_id())?.is_partitioning)
    }

    pub fn set_is_partitioning(&mut self, index: impl IndexRef, value: bool) -> Result<bool> {
        self.update::<IndexProps, _>(index.element_id(), |p| {
            std::mem::replace(&mut p.is_partitioning, value)
        })
    }

    pub fn is_sorted(&self, index: impl IndexRef) -> Result<bool> {
        Ok(self.facet::<IndexProps>(index.element_id())?.is_sorted)
    }

    /// Unsorting an index is rejected while any of its features carries an
    /// ascending flag
    pub fn set_is_sorted(&mut self, index: impl IndexRef, value: bool) -> Result<bool> {
        let id = index.element_id();
        if !value {
            let mut ok = true;
            for feature in self.related(id, LinkEnd::source(Link::IndexedFeatures))? {
                ok &= self.facet::<IndexedFeatureProps>(*feature)?.is_ascending.is_none();
            }
            self.check(CwmConstraint::AscendingRequiresSorted, ok, id)?;
        }
        self.update::<IndexProps, _>(id, |p| std::mem::replace(&mut p.is_sorted, value))
    }

    pub fn is_unique(&self, index: impl IndexRef) -> Result<bool> {
        Ok(self.facet::<IndexProps>(index.element_id())?.is_unique)
    }

    pub fn set_is_unique(&mut self, index: impl IndexRef, value: bool) -> Result<bool> {
        self.update::<IndexProps, _>(index.element_id(), |p| {
            std::mem::replace(&mut p.is_unique, value)
        })
    }

    pub fn add_indexed_feature(
        &mut self,
        index: impl IndexRef,
        indexed_feature: impl IndexedFeatureRef,
    ) -> Result<bool> {
        self.link(
            Link::IndexedFeatures,
            index.element_id(),
            indexed_feature.element_id(),
        )
    }

    pub fn insert_indexed_feature(
        &mut self,
        index: impl IndexRef,
        indexed_feature: impl IndexedFeatureRef,
        position: usize,
    ) -> Result<()> {
        self.insert_at(
            Link::IndexedFeatures,
            index.element_id(),
            indexed_feature.element_id(),
            position,
        )
    }

    pub fn remove_indexed_feature(
        &mut self,
        index: impl IndexRef,
        indexed_feature: impl IndexedFeatureRef,
    ) -> Result<bool> {
        self.unlink(
            Link::IndexedFeatures,
            index.element_id(),
            indexed_feature.element_id(),
        )
    }

    /// Index entries in key order
    pub fn indexed_features(&self, index: impl IndexRef) -> Result<Vec<IndexedFeatureId>> {
        self.related_as(index.element_id(), LinkEnd::source(Link::IndexedFeatures))
    }

    pub fn index_of(&self, indexed_feature: impl IndexedFeatureRef) -> Result<Option<IndexId>> {
        self.single_as(
            indexed_feature.element_id(),
            LinkEnd::target(Link::IndexedFeatures),
        )
    }

    pub fn spanned_class(&self, index: impl IndexRef) -> Result<Option<ClassId>> {
        self.single_as(index.element_id(), LinkEnd::source(Link::IndexSpansClass))
    }

    pub fn set_spanned_class(
        &mut self,
        index: impl IndexRef,
        class: Option<ClassId>,
    ) -> Result<Option<ClassId>> {
        let prior = self.set_single(
            index.element_id(),
            LinkEnd::source(Link::IndexSpansClass),
            class.map(ElementId::from),
        )?;
        Ok(prior.map(ClassId::from_element_id))
    }

    /// Indexes spanning a class
    pub fn indexes(&self, class: impl ClassRef) -> Result<Vec<IndexId>> {
        self.related_as(class.element_id(), LinkEnd::target(Link::IndexSpansClass))
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // IndexedFeature
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Structural feature an index entry refers to
    pub fn indexed_target(
        &self,
        indexed_feature: impl IndexedFeatureRef,
    ) -> Result<Option<StructuralFeatureId>> {
        self.single_as(
            indexed_feature.element_id(),
            LinkEnd::source(Link::IndexedFeatureInfo),
        )
    }

    pub fn set_indexed_target(
        &mut self,
        indexed_feature: impl IndexedFeatureRef,
        feature: Option<StructuralFeatureId>,
    ) -> Result<Option<StructuralFeatureId>> {
        let prior = self.set_single(
            indexed_feature.element_id(),
            LinkEnd::source(Link::IndexedFeatureInfo),
            feature.map(ElementId::from),
        )?;
        Ok(prior.map(StructuralFeatureId::from_element_id))
    }

    /// Index entries referring to a feature
    pub fn index_entries(&self, feature: impl StructuralFeatureRef) -> Result<Vec<IndexedFeatureId>> {
        self.related_as(
            feature.element_id(),
            LinkEnd::target(Link::IndexedFeatureInfo),
        )
    }

    pub fn is_ascending(&self, indexed_feature: impl IndexedFeatureRef) -> Result<Option<bool>> {
        Ok(self
            .facet::<IndexedFeatureProps>(indexed_feature.element_id())?
            .is_ascending)
    }

    /// Set the sort direction; only meaningful on a sorted index
    pub fn set_is_ascending(
        &mut self,
        indexed_feature: impl IndexedFeatureRef,
        value: Option<bool>,
    ) -> Result<Option<bool>> {
        let id = indexed_feature.element_id();
        if value.is_some() {
            if let Some(index) = self.index_of(indexed_feature)? {
                let sorted = self.is_sorted(index)?;
                self.check(CwmConstraint::AscendingRequiresSorted, sorted, id)?;
            }
        }
        self.update::<IndexedFeatureProps, _>(id, |p| std::mem::replace(&mut p.is_ascending, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::core::{CorePackage, StandardCorePackage};
    use crate::features::key_indexes::{KeyIndexesPackage, StandardKeyIndexesPackage};
    use crate::shared::models::{AttributeId, ConstraintPolicy};

    fn class_with_attrs(g: &mut ModelGraph) -> (ClassId, AttributeId, AttributeId) {
        let core = StandardCorePackage;
        let class = core.create_class(g, "Order").unwrap();
        let id = core.create_attribute(g, "id").unwrap();
        let date = core.create_attribute(g, "date").unwrap();
        g.add_feature(class, id).unwrap();
        g.add_feature(class, date).unwrap();
        (class, id, date)
    }

    #[test]
    fn test_unique_key_and_relationship() {
        let mut g = ModelGraph::new();
        let ki = StandardKeyIndexesPackage;
        let (_, id, date) = class_with_attrs(&mut g);
        let key = ki.create_unique_key(&mut g, "pk").unwrap();
        g.add_key_feature(key, id).unwrap();
        g.insert_key_feature(key, date, 0).unwrap();
        let order: Vec<StructuralFeatureId> = vec![date.into(), id.into()];
        assert_eq!(g.key_features(key).unwrap(), order);
        assert_eq!(g.unique_keys(id).unwrap(), vec![key]);

        let rel = ki.create_key_relationship(&mut g, "fk").unwrap();
        assert_eq!(g.set_referenced_key(rel, Some(key)).unwrap(), None);
        g.add_relationship_feature(rel, id).unwrap();
        assert_eq!(g.key_relationships(key).unwrap(), vec![rel]);
        assert_eq!(g.key_relationships_of(id).unwrap(), vec![rel]);
        assert_eq!(g.referenced_key(rel).unwrap(), Some(key));
    }

    #[test]
    fn test_index_entries() {
        let mut g = ModelGraph::new();
        let ki = StandardKeyIndexesPackage;
        let (class, id, date) = class_with_attrs(&mut g);
        let index = ki.create_index(&mut g, "ix_order").unwrap();
        g.set_spanned_class(index, Some(class)).unwrap();
        let first = ki.create_indexed_feature(&mut g, index, date.into()).unwrap();
        let second = ki.create_indexed_feature(&mut g, index, id.into()).unwrap();

        assert_eq!(g.indexed_features(index).unwrap(), vec![first, second]);
        assert_eq!(g.index_of(first).unwrap(), Some(index));
        assert_eq!(g.indexed_target(second).unwrap(), Some(id.into()));
        assert_eq!(g.index_entries(date).unwrap(), vec![first]);
        assert_eq!(g.indexes(class).unwrap(), vec![index]);

        g.insert_indexed_feature(index, second, 0).unwrap();
        assert_eq!(g.indexed_features(index).unwrap(), vec![second, first]);

        // entries are parts of the index
        let deleted = g.delete(index).unwrap();
        assert_eq!(deleted.len(), 3);
        assert!(g.index_entries(date).unwrap().is_empty());
    }

    #[test]
    fn test_ascending_requires_sorted() {
        let mut g = ModelGraph::new();
        let ki = StandardKeyIndexesPackage;
        let (_, id, _) = class_with_attrs(&mut g);
        let index = ki.create_index(&mut g, "ix").unwrap();
        let entry = ki.create_indexed_feature(&mut g, index, id.into()).unwrap();

        let err = g.set_is_ascending(entry, Some(true)).unwrap_err();
        assert_eq!(err.violated_constraint(), Some(CwmConstraint::AscendingRequiresSorted));
        assert_eq!(g.is_ascending(entry).unwrap(), None);

        assert!(!g.set_is_sorted(index, true).unwrap());
        assert_eq!(g.set_is_ascending(entry, Some(false)).unwrap(), None);
        let err = g.set_is_sorted(index, false).unwrap_err();
        assert_eq!(err.violated_constraint(), Some(CwmConstraint::AscendingRequiresSorted));
        assert!(g.is_sorted(index).unwrap());

        g.set_policy(ConstraintPolicy::lenient());
        g.set_is_sorted(index, false).unwrap();
    }

    #[test]
    fn test_ascending_entry_added_to_unsorted_index() {
        let mut g = ModelGraph::new();
        let ki = StandardKeyIndexesPackage;
        let (_, id, _) = class_with_attrs(&mut g);
        let sorted = ki.create_index(&mut g, "sorted").unwrap();
        g.set_is_sorted(sorted, true).unwrap();
        let entry = ki.create_indexed_feature(&mut g, sorted, id.into()).unwrap();
        g.set_is_ascending(entry, Some(true)).unwrap();

        let unsorted = ki.create_index(&mut g, "unsorted").unwrap();
        let err = g.add_indexed_feature(unsorted, entry).unwrap_err();
        assert_eq!(err.violated_constraint(), Some(CwmConstraint::AscendingRequiresSorted));
        assert_eq!(g.index_of(entry).unwrap(), Some(sorted));
    }

    #[test]
    fn test_index_flags() {
        let mut g = ModelGraph::new();
        let index = StandardKeyIndexesPackage.create_index(&mut g, "ix").unwrap();
        assert!(!g.set_is_unique(index, true).unwrap());
        assert!(!g.set_is_partitioning(index, true).unwrap());
        assert!(g.is_unique(index).unwrap() && g.is_partitioning(index).unwrap());
    }
}
