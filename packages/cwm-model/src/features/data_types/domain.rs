//! Foundation::DataTypes typed API

use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    ClassifierId, ClassifierRef, CwmConstraint, ElementId, EnumerationId, EnumerationLiteralId,
    EnumerationLiteralProps, EnumerationProps, Expression, Link, LinkEnd, MetaClass,
    ModelElementRef, StructuralFeatureId, StructuralFeatureRef, TypeAliasRef, UnionId,
    UnionMemberId, UnionMemberProps,
};

impl ModelGraph {
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Enumeration
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    facet_accessors! {
        EnumerationProps, EnumerationId {
            is_ordered, set_is_ordered => is_ordered: bool;
        }
    }

    facet_accessors! {
        EnumerationLiteralProps, EnumerationLiteralId {
            literal_value, set_literal_value => value: Option<Expression>;
        }
    }

    pub fn add_literal(&mut self, enumeration: EnumerationId, literal: EnumerationLiteralId) -> Result<bool> {
        self.link(Link::EnumerationLiterals, enumeration, literal)
    }

    pub fn insert_literal(
        &mut self,
        enumeration: EnumerationId,
        literal: EnumerationLiteralId,
        position: usize,
    ) -> Result<()> {
        self.insert_at(Link::EnumerationLiterals, enumeration, literal, position)
    }

    pub fn remove_literal(
        &mut self,
        enumeration: EnumerationId,
        literal: EnumerationLiteralId,
    ) -> Result<bool> {
        self.unlink(Link::EnumerationLiterals, enumeration, literal)
    }

    pub fn literals(&self, enumeration: EnumerationId) -> Result<Vec<EnumerationLiteralId>> {
        self.related_as(enumeration, LinkEnd::source(Link::EnumerationLiterals))
    }

    pub fn literal_enumeration(&self, literal: EnumerationLiteralId) -> Result<Option<EnumerationId>> {
        self.single_as(literal, LinkEnd::target(Link::EnumerationLiterals))
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // TypeAlias
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    pub fn aliased_type(&self, alias: impl TypeAliasRef) -> Result<Option<ClassifierId>> {
        self.single_as(alias.element_id(), LinkEnd::source(Link::ClassifierAlias))
    }

    /// Point an alias at another type; an alias never names itself
    pub fn set_aliased_type(
        &mut self,
        alias: impl TypeAliasRef,
        classifier: Option<ClassifierId>,
    ) -> Result<Option<ClassifierId>> {
        let prior = self.set_single(
            alias.element_id(),
            LinkEnd::source(Link::ClassifierAlias),
            classifier.map(ElementId::from),
        )?;
        Ok(prior.map(ClassifierId::from_element_id))
    }

    pub fn aliases(&self, classifier: impl ClassifierRef) -> Result<Vec<ElementId>> {
        Ok(self
            .related(classifier.element_id(), LinkEnd::target(Link::ClassifierAlias))?
            .to_vec())
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Union
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    facet_accessors! {
        UnionMemberProps, UnionMemberId {
            member_case, set_member_case => member_case: Option<Expression>;
        }
    }

    /// Members in declaration order
    pub fn union_members(&self, union: UnionId) -> Result<Vec<UnionMemberId>> {
        let mut members = Vec::new();
        for feature in self.related(union, LinkEnd::source(Link::ClassifierFeature))? {
            if self.meta_class_of(*feature)?.is_kind_of(MetaClass::UnionMember) {
                members.push(UnionMemberId::from_element_id(*feature));
            }
        }
        Ok(members)
    }

    pub fn default_union_member(&self, union: UnionId) -> Result<Option<UnionMemberId>> {
        Ok(self
            .default_member(union.id(), None)?
            .map(UnionMemberId::from_element_id))
    }

    pub fn is_default(&self, member: UnionMemberId) -> Result<bool> {
        Ok(self.facet::<UnionMemberProps>(member)?.is_default)
    }

    /// Mark the default member; a union has at most one
    pub fn set_is_default(&mut self, member: UnionMemberId, value: bool) -> Result<bool> {
        if value {
            if let Some(owner) = self.owner(member)? {
                let ok = self.default_member(owner.id(), Some(member.id()))?.is_none();
                self.check(CwmConstraint::MultipleDefaultMembers, ok, owner.id())?;
            }
        }
        self.update::<UnionMemberProps, _>(member, |p| std::mem::replace(&mut p.is_default, value))
    }

    pub fn discriminator(&self, union: UnionId) -> Result<Option<StructuralFeatureId>> {
        self.single_as(union, LinkEnd::source(Link::DiscriminatedUnion))
    }

    pub fn set_discriminator(
        &mut self,
        union: UnionId,
        feature: Option<StructuralFeatureId>,
    ) -> Result<Option<StructuralFeatureId>> {
        let prior = self.set_single(
            union,
            LinkEnd::source(Link::DiscriminatedUnion),
            feature.map(ElementId::from),
        )?;
        Ok(prior.map(StructuralFeatureId::from_element_id))
    }

    /// Unions discriminated by a feature
    pub fn discriminated_unions(&self, feature: impl StructuralFeatureRef) -> Result<Vec<UnionId>> {
        self.related_as(
            feature.element_id(),
            LinkEnd::target(Link::DiscriminatedUnion),
        )
    }
}
