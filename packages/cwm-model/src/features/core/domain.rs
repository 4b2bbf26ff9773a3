//! ObjectModel::Core typed API
//!
//! Properties and associations of ModelElement, Namespace, Package,
//! Classifier, Feature, StructuralFeature, Attribute, Constraint, Dependency
//! and Stereotype.

use crate::errors::{CwmError, Result};
use crate::graph::ModelGraph;
use crate::shared::models::{
    AttributeFacet, AttributeRef, BooleanExpression, ChangeableKind, ClassifierFacet,
    ClassifierId, ClassifierRef, ConstraintId, ConstraintProps, ConstraintRef, CwmConstraint,
    DependencyId, DependencyProps, ElementId, Expression, FeatureFacet, FeatureId, FeatureRef,
    Link, LinkEnd, MetaClass, ModelElementRef, Multiplicity, NamespaceId, NamespaceRef,
    OrderingKind, PackageId, PackageRef, ScopeKind, StereotypeId, StereotypeProps,
    StructuralFeatureFacet, StructuralFeatureId, StructuralFeatureRef,
};

impl ModelGraph {
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Namespace ownership
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Owning namespace of an element
    pub fn namespace(&self, element: impl ModelElementRef) -> Result<Option<NamespaceId>> {
        self.single_as(element.element_id(), LinkEnd::target(Link::ElementOwnership))
    }

    /// Move an element into `namespace` (or detach it); returns the prior owner
    pub fn set_namespace(
        &mut self,
        element: impl ModelElementRef,
        namespace: Option<NamespaceId>,
    ) -> Result<Option<NamespaceId>> {
        let prior = self.set_single(
            element.element_id(),
            LinkEnd::target(Link::ElementOwnership),
            namespace.map(ElementId::from),
        )?;
        Ok(prior.map(NamespaceId::from_element_id))
    }

    pub fn add_owned_element(
        &mut self,
        namespace: impl NamespaceRef,
        element: impl ModelElementRef,
    ) -> Result<bool> {
        self.link(
            Link::ElementOwnership,
            namespace.element_id(),
            element.element_id(),
        )
    }

    pub fn remove_owned_element(
        &mut self,
        namespace: impl NamespaceRef,
        element: impl ModelElementRef,
    ) -> Result<bool> {
        self.unlink(
            Link::ElementOwnership,
            namespace.element_id(),
            element.element_id(),
        )
    }

    pub fn owned_elements(&self, namespace: impl NamespaceRef) -> Result<Vec<ElementId>> {
        Ok(self
            .related(namespace.element_id(), LinkEnd::source(Link::ElementOwnership))?
            .to_vec())
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Package imports
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    pub fn add_imported_element(
        &mut self,
        package: impl PackageRef,
        element: impl ModelElementRef,
    ) -> Result<bool> {
        self.link(
            Link::ImportedElements,
            package.element_id(),
            element.element_id(),
        )
    }

    pub fn remove_imported_element(
        &mut self,
        package: impl PackageRef,
        element: impl ModelElementRef,
    ) -> Result<bool> {
        self.unlink(
            Link::ImportedElements,
            package.element_id(),
            element.element_id(),
        )
    }

    pub fn imported_elements(&self, package: impl PackageRef) -> Result<Vec<ElementId>> {
        Ok(self
            .related(package.element_id(), LinkEnd::source(Link::ImportedElements))?
            .to_vec())
    }

    /// Packages importing an element
    pub fn importers(&self, element: impl ModelElementRef) -> Result<Vec<PackageId>> {
        self.related_as(element.element_id(), LinkEnd::target(Link::ImportedElements))
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Classifier
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    pub fn is_abstract(&self, classifier: impl ClassifierRef) -> Result<bool> {
        Ok(self.facet::<ClassifierFacet>(classifier.element_id())?.is_abstract)
    }

    pub fn set_is_abstract(&mut self, classifier: impl ClassifierRef, value: bool) -> Result<bool> {
        self.update::<ClassifierFacet, _>(classifier.element_id(), |f| {
            std::mem::replace(&mut f.is_abstract, value)
        })
    }

    /// Append a feature; a feature owned elsewhere is moved
    pub fn add_feature(&mut self, classifier: impl ClassifierRef, feature: impl FeatureRef) -> Result<bool> {
        self.link(
            Link::ClassifierFeature,
            classifier.element_id(),
            feature.element_id(),
        )
    }

    pub fn insert_feature(
        &mut self,
        classifier: impl ClassifierRef,
        feature: impl FeatureRef,
        position: usize,
    ) -> Result<()> {
        self.insert_at(
            Link::ClassifierFeature,
            classifier.element_id(),
            feature.element_id(),
            position,
        )
    }

    pub fn remove_feature(&mut self, classifier: impl ClassifierRef, feature: impl FeatureRef) -> Result<bool> {
        self.unlink(
            Link::ClassifierFeature,
            classifier.element_id(),
            feature.element_id(),
        )
    }

    /// Owned features in declaration order
    pub fn features(&self, classifier: impl ClassifierRef) -> Result<Vec<FeatureId>> {
        self.related_as(classifier.element_id(), LinkEnd::source(Link::ClassifierFeature))
    }

    /// Owned structural features (attributes, columns, association ends)
    pub fn structural_features(
        &self,
        classifier: impl ClassifierRef,
    ) -> Result<Vec<StructuralFeatureId>> {
        let mut out = Vec::new();
        for feature in self.related(classifier.element_id(), LinkEnd::source(Link::ClassifierFeature))? {
            if self.meta_class_of(*feature)?.is_kind_of(MetaClass::StructuralFeature) {
                out.push(StructuralFeatureId::from_element_id(*feature));
            }
        }
        Ok(out)
    }

    pub fn owner(&self, feature: impl FeatureRef) -> Result<Option<ClassifierId>> {
        self.single_as(feature.element_id(), LinkEnd::target(Link::ClassifierFeature))
    }

    /// Structural features typed by this classifier
    pub fn typed_features(&self, classifier: impl ClassifierRef) -> Result<Vec<StructuralFeatureId>> {
        self.related_as(
            classifier.element_id(),
            LinkEnd::target(Link::StructuralFeatureType),
        )
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Feature / StructuralFeature / Attribute
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    pub fn owner_scope(&self, feature: impl FeatureRef) -> Result<ScopeKind> {
        Ok(self.facet::<FeatureFacet>(feature.element_id())?.owner_scope)
    }

    pub fn set_owner_scope(&mut self, feature: impl FeatureRef, scope: ScopeKind) -> Result<ScopeKind> {
        self.update::<FeatureFacet, _>(feature.element_id(), |f| {
            std::mem::replace(&mut f.owner_scope, scope)
        })
    }

    pub fn changeability(&self, feature: impl StructuralFeatureRef) -> Result<ChangeableKind> {
        Ok(self
            .facet::<StructuralFeatureFacet>(feature.element_id())?
            .changeability)
    }

    pub fn set_changeability(
        &mut self,
        feature: impl StructuralFeatureRef,
        value: ChangeableKind,
    ) -> Result<ChangeableKind> {
        self.update::<StructuralFeatureFacet, _>(feature.element_id(), |f| {
            std::mem::replace(&mut f.changeability, value)
        })
    }

    pub fn multiplicity(&self, feature: impl StructuralFeatureRef) -> Result<Option<&Multiplicity>> {
        Ok(self
            .facet::<StructuralFeatureFacet>(feature.element_id())?
            .multiplicity
            .as_ref())
    }

    /// Replace the multiplicity; malformed ranges are always rejected
    pub fn set_multiplicity(
        &mut self,
        feature: impl StructuralFeatureRef,
        value: Option<Multiplicity>,
    ) -> Result<Option<Multiplicity>> {
        let id = feature.element_id();
        let ok = value.as_ref().map_or(true, Multiplicity::is_valid);
        self.check(CwmConstraint::InvalidMultiplicityRange, ok, id)?;
        self.update::<StructuralFeatureFacet, _>(id, |f| std::mem::replace(&mut f.multiplicity, value))
    }

    pub fn ordering(&self, feature: impl StructuralFeatureRef) -> Result<OrderingKind> {
        Ok(self.facet::<StructuralFeatureFacet>(feature.element_id())?.ordering)
    }

    pub fn set_ordering(
        &mut self,
        feature: impl StructuralFeatureRef,
        value: OrderingKind,
    ) -> Result<OrderingKind> {
        self.update::<StructuralFeatureFacet, _>(feature.element_id(), |f| {
            std::mem::replace(&mut f.ordering, value)
        })
    }

    pub fn target_scope(&self, feature: impl StructuralFeatureRef) -> Result<ScopeKind> {
        Ok(self
            .facet::<StructuralFeatureFacet>(feature.element_id())?
            .target_scope)
    }

    pub fn set_target_scope(
        &mut self,
        feature: impl StructuralFeatureRef,
        value: ScopeKind,
    ) -> Result<ScopeKind> {
        self.update::<StructuralFeatureFacet, _>(feature.element_id(), |f| {
            std::mem::replace(&mut f.target_scope, value)
        })
    }

    pub fn feature_type(&self, feature: impl StructuralFeatureRef) -> Result<Option<ClassifierId>> {
        self.single_as(feature.element_id(), LinkEnd::source(Link::StructuralFeatureType))
    }

    /// Set (or clear) the type; returns the prior type
    pub fn set_type(
        &mut self,
        feature: impl StructuralFeatureRef,
        classifier: Option<ClassifierId>,
    ) -> Result<Option<ClassifierId>> {
        let prior = self.set_single(
            feature.element_id(),
            LinkEnd::source(Link::StructuralFeatureType),
            classifier.map(ElementId::from),
        )?;
        Ok(prior.map(ClassifierId::from_element_id))
    }

    pub fn initial_value(&self, attribute: impl AttributeRef) -> Result<Option<&Expression>> {
        Ok(self
            .facet::<AttributeFacet>(attribute.element_id())?
            .initial_value
            .as_ref())
    }

    pub fn set_initial_value(
        &mut self,
        attribute: impl AttributeRef,
        value: Option<Expression>,
    ) -> Result<Option<Expression>> {
        self.update::<AttributeFacet, _>(attribute.element_id(), |f| {
            std::mem::replace(&mut f.initial_value, value)
        })
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Constraint
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    pub fn constraint_body(&self, constraint: impl ConstraintRef) -> Result<Option<&BooleanExpression>> {
        Ok(self
            .facet::<ConstraintProps>(constraint.element_id())?
            .body
            .as_ref())
    }

    pub fn set_constraint_body(
        &mut self,
        constraint: impl ConstraintRef,
        body: Option<BooleanExpression>,
    ) -> Result<Option<BooleanExpression>> {
        self.update::<ConstraintProps, _>(constraint.element_id(), |p| {
            std::mem::replace(&mut p.body, body)
        })
    }

    pub fn add_constrained_element(
        &mut self,
        constraint: impl ConstraintRef,
        element: impl ModelElementRef,
    ) -> Result<bool> {
        self.link(
            Link::ElementConstraint,
            constraint.element_id(),
            element.element_id(),
        )
    }

    pub fn remove_constrained_element(
        &mut self,
        constraint: impl ConstraintRef,
        element: impl ModelElementRef,
    ) -> Result<bool> {
        self.unlink(
            Link::ElementConstraint,
            constraint.element_id(),
            element.element_id(),
        )
    }

    pub fn constrained_elements(&self, constraint: impl ConstraintRef) -> Result<Vec<ElementId>> {
        Ok(self
            .related(constraint.element_id(), LinkEnd::source(Link::ElementConstraint))?
            .to_vec())
    }

    /// Constraints applied to an element
    pub fn constraints(&self, element: impl ModelElementRef) -> Result<Vec<ConstraintId>> {
        self.related_as(element.element_id(), LinkEnd::target(Link::ElementConstraint))
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Dependency
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    pub fn dependency_kind(&self, dependency: DependencyId) -> Result<Option<&str>> {
        Ok(self.facet::<DependencyProps>(dependency)?.kind.as_deref())
    }

    pub fn set_dependency_kind(
        &mut self,
        dependency: DependencyId,
        kind: Option<&str>,
    ) -> Result<Option<String>> {
        self.update::<DependencyProps, _>(dependency, |p| {
            std::mem::replace(&mut p.kind, kind.map(str::to_string))
        })
    }

    pub fn add_client(&mut self, dependency: DependencyId, client: impl ModelElementRef) -> Result<bool> {
        self.link(Link::DependencyClient, dependency, client.element_id())
    }

    pub fn remove_client(&mut self, dependency: DependencyId, client: impl ModelElementRef) -> Result<bool> {
        self.unlink(Link::DependencyClient, dependency, client.element_id())
    }

    pub fn add_supplier(&mut self, dependency: DependencyId, supplier: impl ModelElementRef) -> Result<bool> {
        self.link(Link::DependencySupplier, dependency, supplier.element_id())
    }

    pub fn remove_supplier(
        &mut self,
        dependency: DependencyId,
        supplier: impl ModelElementRef,
    ) -> Result<bool> {
        self.unlink(Link::DependencySupplier, dependency, supplier.element_id())
    }

    pub fn clients(&self, dependency: DependencyId) -> Result<Vec<ElementId>> {
        Ok(self
            .related(dependency, LinkEnd::source(Link::DependencyClient))?
            .to_vec())
    }

    pub fn suppliers(&self, dependency: DependencyId) -> Result<Vec<ElementId>> {
        Ok(self
            .related(dependency, LinkEnd::source(Link::DependencySupplier))?
            .to_vec())
    }

    pub fn client_dependencies(&self, element: impl ModelElementRef) -> Result<Vec<DependencyId>> {
        self.related_as(element.element_id(), LinkEnd::target(Link::DependencyClient))
    }

    pub fn supplier_dependencies(&self, element: impl ModelElementRef) -> Result<Vec<DependencyId>> {
        self.related_as(element.element_id(), LinkEnd::target(Link::DependencySupplier))
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Stereotype
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    pub fn base_class(&self, stereotype: StereotypeId) -> Result<Option<&str>> {
        Ok(self
            .facet::<StereotypeProps>(stereotype)?
            .base_class
            .as_deref())
    }

    /// Change the extended meta-class; elements already stereotyped must
    /// still conform (eager policy)
    pub fn set_base_class(
        &mut self,
        stereotype: StereotypeId,
        base_class: Option<MetaClass>,
    ) -> Result<Option<String>> {
        if let Some(base) = base_class {
            let mut ok = true;
            for element in self.related(stereotype, LinkEnd::source(Link::StereotypedElement))? {
                ok &= self.meta_class_of(*element)?.is_kind_of(base);
            }
            self.check(CwmConstraint::StereotypeBaseClass, ok, stereotype.id())?;
        }
        self.update::<StereotypeProps, _>(stereotype, |p| {
            std::mem::replace(&mut p.base_class, base_class.map(|mc| mc.as_str().to_string()))
        })
    }

    pub fn stereotype(&self, element: impl ModelElementRef) -> Result<Option<StereotypeId>> {
        self.single_as(element.element_id(), LinkEnd::target(Link::StereotypedElement))
    }

    pub fn set_stereotype(
        &mut self,
        element: impl ModelElementRef,
        stereotype: Option<StereotypeId>,
    ) -> Result<Option<StereotypeId>> {
        let prior = self.set_single(
            element.element_id(),
            LinkEnd::target(Link::StereotypedElement),
            stereotype.map(ElementId::from),
        )?;
        Ok(prior.map(StereotypeId::from_element_id))
    }

    pub fn extended_elements(&self, stereotype: StereotypeId) -> Result<Vec<ElementId>> {
        Ok(self
            .related(stereotype, LinkEnd::source(Link::StereotypedElement))?
            .to_vec())
    }

    /// Owner of a feature, failing when unset
    pub(crate) fn required_owner(&self, feature: impl FeatureRef) -> Result<ClassifierId> {
        let id = feature.element_id();
        self.owner(feature)?.ok_or(CwmError::MissingReference {
            element: id,
            role: "owner",
        })
    }
}
