//! ObjectModel::Relationships typed API

use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    AggregationKind, AssociationEndId, AssociationEndProps, AssociationId, ClassifierId,
    ClassifierRef, CwmConstraint, ElementId, GeneralizationId, Link, LinkEnd, MetaClass,
    ModelElementRef,
};

impl ModelGraph {
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Association / AssociationEnd
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Ends of an association in declaration order
    pub fn association_ends(&self, association: AssociationId) -> Result<Vec<AssociationEndId>> {
        let mut ends = Vec::new();
        for feature in self.related(association, LinkEnd::source(Link::ClassifierFeature))? {
            if self.meta_class_of(*feature)?.is_kind_of(MetaClass::AssociationEnd) {
                ends.push(AssociationEndId::from_element_id(*feature));
            }
        }
        Ok(ends)
    }

    /// Opposite end of a binary association
    pub fn other_end(&self, end: AssociationEndId) -> Result<Option<AssociationEndId>> {
        let Some(owner) = self.owner(end)? else {
            return Ok(None);
        };
        let association = AssociationId::from_element_id(owner.id());
        let ends = self.association_ends(association)?;
        if ends.len() != 2 {
            return Ok(None);
        }
        Ok(ends.into_iter().find(|e| *e != end))
    }

    pub fn aggregation(&self, end: AssociationEndId) -> Result<AggregationKind> {
        Ok(self.facet::<AssociationEndProps>(end)?.aggregation)
    }

    /// Change the aggregation; at most one end of an association aggregates
    pub fn set_aggregation(
        &mut self,
        end: AssociationEndId,
        aggregation: AggregationKind,
    ) -> Result<AggregationKind> {
        if aggregation.is_aggregate() {
            if let Some(owner) = self.owner(end)? {
                let ok = self.aggregate_end(owner.id(), Some(end.id()))?.is_none();
                self.check(CwmConstraint::MultipleAggregateEnds, ok, owner.id())?;
            }
        }
        self.update::<AssociationEndProps, _>(end, |p| {
            std::mem::replace(&mut p.aggregation, aggregation)
        })
    }

    pub fn is_navigable(&self, end: AssociationEndId) -> Result<bool> {
        Ok(self.facet::<AssociationEndProps>(end)?.is_navigable)
    }

    pub fn set_is_navigable(&mut self, end: AssociationEndId, value: bool) -> Result<bool> {
        self.update::<AssociationEndProps, _>(end, |p| std::mem::replace(&mut p.is_navigable, value))
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Generalization
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    pub fn child(&self, generalization: GeneralizationId) -> Result<Option<ClassifierId>> {
        self.single_as(generalization, LinkEnd::source(Link::GeneralizationChild))
    }

    pub fn set_child(
        &mut self,
        generalization: GeneralizationId,
        child: Option<ClassifierId>,
    ) -> Result<Option<ClassifierId>> {
        let prior = self.set_single(
            generalization,
            LinkEnd::source(Link::GeneralizationChild),
            child.map(ElementId::from),
        )?;
        Ok(prior.map(ClassifierId::from_element_id))
    }

    pub fn parent(&self, generalization: GeneralizationId) -> Result<Option<ClassifierId>> {
        self.single_as(generalization, LinkEnd::source(Link::GeneralizationParent))
    }

    pub fn set_parent(
        &mut self,
        generalization: GeneralizationId,
        parent: Option<ClassifierId>,
    ) -> Result<Option<ClassifierId>> {
        let prior = self.set_single(
            generalization,
            LinkEnd::source(Link::GeneralizationParent),
            parent.map(ElementId::from),
        )?;
        Ok(prior.map(ClassifierId::from_element_id))
    }

    /// Generalizations in which `classifier` is the child
    pub fn generalizations(&self, classifier: impl ClassifierRef) -> Result<Vec<GeneralizationId>> {
        self.related_as(
            classifier.element_id(),
            LinkEnd::target(Link::GeneralizationChild),
        )
    }

    /// Generalizations in which `classifier` is the parent
    pub fn specializations(&self, classifier: impl ClassifierRef) -> Result<Vec<GeneralizationId>> {
        self.related_as(
            classifier.element_id(),
            LinkEnd::target(Link::GeneralizationParent),
        )
    }

    /// Direct supertypes
    pub fn parents(&self, classifier: impl ClassifierRef) -> Result<Vec<ClassifierId>> {
        let id = classifier.element_id();
        self.element(id)?;
        Ok(self
            .generalization_parents(id)
            .into_iter()
            .map(ClassifierId::from_element_id)
            .collect())
    }

    /// Direct subtypes
    pub fn children(&self, classifier: impl ClassifierRef) -> Result<Vec<ClassifierId>> {
        let mut out = Vec::new();
        for generalization in self.specializations(classifier)? {
            if let Some(child) = self.child(generalization)? {
                out.push(child);
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::core::{CorePackage, StandardCorePackage};
    use crate::features::relationships::{RelationshipsPackage, StandardRelationshipsPackage};
    use crate::shared::models::ConstraintPolicy;

    fn binary_association(g: &mut ModelGraph) -> (AssociationId, AssociationEndId, AssociationEndId) {
        let rel = StandardRelationshipsPackage;
        let assoc = rel.create_association(g, "places").unwrap();
        let a = rel.create_association_end(g, "customer").unwrap();
        let b = rel.create_association_end(g, "orders").unwrap();
        g.add_feature(assoc, a).unwrap();
        g.add_feature(assoc, b).unwrap();
        (assoc, a, b)
    }

    #[test]
    fn test_association_ends() {
        let mut g = ModelGraph::new();
        let (assoc, a, b) = binary_association(&mut g);
        assert_eq!(g.association_ends(assoc).unwrap(), vec![a, b]);
        assert_eq!(g.other_end(a).unwrap(), Some(b));
        assert!(g.set_is_navigable(b, false).unwrap());
        assert!(!g.is_navigable(b).unwrap());
    }

    #[test]
    fn test_end_owner_must_be_association() {
        let mut g = ModelGraph::new();
        let class = StandardCorePackage.create_class(&mut g, "C").unwrap();
        let end = StandardRelationshipsPackage
            .create_association_end(&mut g, "e")
            .unwrap();
        let err = g.add_feature(class, end).unwrap_err();
        assert_eq!(err.violated_constraint(), Some(CwmConstraint::AssociationEndOwner));
    }

    #[test]
    fn test_single_aggregate_end() {
        let mut g = ModelGraph::new();
        let (_, a, b) = binary_association(&mut g);
        assert_eq!(
            g.set_aggregation(a, AggregationKind::Composite).unwrap(),
            AggregationKind::None
        );
        let err = g.set_aggregation(b, AggregationKind::Shared).unwrap_err();
        assert_eq!(err.violated_constraint(), Some(CwmConstraint::MultipleAggregateEnds));

        let mut lenient = ModelGraph::with_policy(ConstraintPolicy::lenient());
        let (_, a, b) = binary_association(&mut lenient);
        lenient.set_aggregation(a, AggregationKind::Composite).unwrap();
        lenient.set_aggregation(b, AggregationKind::Shared).unwrap();
    }

    #[test]
    fn test_generalization_links() {
        let mut g = ModelGraph::new();
        let core = StandardCorePackage;
        let base = core.create_class(&mut g, "Party").unwrap();
        let derived = core.create_class(&mut g, "Customer").unwrap();
        let gen = StandardRelationshipsPackage
            .create_generalization(&mut g, derived.into(), base.into())
            .unwrap();
        assert_eq!(g.child(gen).unwrap(), Some(derived.into()));
        assert_eq!(g.parent(gen).unwrap(), Some(base.into()));
        assert_eq!(g.parents(derived).unwrap(), vec![ClassifierId::from(base)]);
        assert_eq!(g.children(base).unwrap(), vec![ClassifierId::from(derived)]);
        assert_eq!(g.generalizations(derived).unwrap(), vec![gen]);
    }

    #[test]
    fn test_generalization_cycle_always_rejected() {
        let mut g = ModelGraph::with_policy(ConstraintPolicy::lenient());
        let core = StandardCorePackage;
        let rel = StandardRelationshipsPackage;
        let a = core.create_class(&mut g, "A").unwrap();
        let b = core.create_class(&mut g, "B").unwrap();
        let c = core.create_class(&mut g, "C").unwrap();
        rel.create_generalization(&mut g, b.into(), a.into()).unwrap();
        rel.create_generalization(&mut g, c.into(), b.into()).unwrap();
        let before = g.len();
        let err = rel
            .create_generalization(&mut g, a.into(), c.into())
            .unwrap_err();
        assert_eq!(err.violated_constraint(), Some(CwmConstraint::GeneralizationCycle));
        assert_eq!(g.len(), before);

        let err = rel
            .create_generalization(&mut g, a.into(), a.into())
            .unwrap_err();
        assert_eq!(err.violated_constraint(), Some(CwmConstraint::GeneralizationCycle));
    }
}
