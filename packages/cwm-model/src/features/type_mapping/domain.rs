//! Foundation::TypeMapping typed API

use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    ClassifierId, ClassifierRef, ElementId, Link, LinkEnd, ModelElementRef, TypeMappingId,
    TypeMappingProps,
};

impl ModelGraph {
    facet_accessors! {
        TypeMappingProps, TypeMappingId {
            is_best_match, set_is_best_match => is_best_match: bool;
            is_lossy, set_is_lossy => is_lossy: bool;
        }
    }

    pub fn source_type(&self, mapping: TypeMappingId) -> Result<Option<ClassifierId>> {
        self.single_as(mapping, LinkEnd::source(Link::MappingSource))
    }

    /// Source and target of a mapping must differ
    pub fn set_source_type(
        &mut self,
        mapping: TypeMappingId,
        classifier: Option<ClassifierId>,
    ) -> Result<Option<ClassifierId>> {
        let prior = self.set_single(
            mapping,
            LinkEnd::source(Link::MappingSource),
            classifier.map(ElementId::from),
        )?;
        Ok(prior.map(ClassifierId::from_element_id))
    }

    pub fn target_type(&self, mapping: TypeMappingId) -> Result<Option<ClassifierId>> {
        self.single_as(mapping, LinkEnd::source(Link::MappingTarget))
    }

    pub fn set_target_type(
        &mut self,
        mapping: TypeMappingId,
        classifier: Option<ClassifierId>,
    ) -> Result<Option<ClassifierId>> {
        let prior = self.set_single(
            mapping,
            LinkEnd::source(Link::MappingTarget),
            classifier.map(ElementId::from),
        )?;
        Ok(prior.map(ClassifierId::from_element_id))
    }

    /// Mappings whose source is `classifier`
    pub fn mappings_from(&self, classifier: impl ClassifierRef) -> Result<Vec<TypeMappingId>> {
        self.related_as(classifier.element_id(), LinkEnd::target(Link::MappingSource))
    }

    /// Mappings whose target is `classifier`
    pub fn mappings_to(&self, classifier: impl ClassifierRef) -> Result<Vec<TypeMappingId>> {
        self.related_as(classifier.element_id(), LinkEnd::target(Link::MappingTarget))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::core::{CorePackage, StandardCorePackage};
    use crate::features::type_mapping::{StandardTypeMappingPackage, TypeMappingPackage};
    use crate::shared::models::{ConstraintPolicy, CwmConstraint};

    #[test]
    fn test_mapping_between_type_systems() {
        let mut g = ModelGraph::new();
        let core = StandardCorePackage;
        let tm = StandardTypeMappingPackage;
        let cobol = tm.create_type_system(&mut g, "cobol").unwrap();
        let sql = tm.create_type_system(&mut g, "sql").unwrap();
        let int = core.create_data_type(&mut g, "int").unwrap();
        let integer = core.create_data_type(&mut g, "INTEGER").unwrap();
        g.add_owned_element(cobol, int).unwrap();
        g.add_owned_element(sql, integer).unwrap();

        let mapping = tm
            .create_type_mapping(&mut g, "int->INTEGER", int.into(), integer.into())
            .unwrap();
        g.add_owned_element(sql, mapping).unwrap();
        assert!(!g.set_is_best_match(mapping, true).unwrap());
        assert_eq!(g.source_type(mapping).unwrap(), Some(int.into()));
        assert_eq!(g.target_type(mapping).unwrap(), Some(integer.into()));
        assert_eq!(g.mappings_from(int).unwrap(), vec![mapping]);
        assert_eq!(g.mappings_to(integer).unwrap(), vec![mapping]);
        assert!(g.is_best_match(mapping).unwrap());
        assert!(!g.is_lossy(mapping).unwrap());
    }

    #[test]
    fn test_source_equals_target_always_rejected() {
        let mut g = ModelGraph::with_policy(ConstraintPolicy::lenient());
        let int = StandardCorePackage.create_data_type(&mut g, "int").unwrap();
        let text = StandardCorePackage.create_data_type(&mut g, "text").unwrap();
        let tm = StandardTypeMappingPackage;
        let err = tm
            .create_type_mapping(&mut g, "loop", int.into(), int.into())
            .unwrap_err();
        assert_eq!(
            err.violated_constraint(),
            Some(CwmConstraint::MappingSourceEqualsTarget)
        );
        assert_eq!(g.len(), 2);

        let mapping = tm
            .create_type_mapping(&mut g, "m", int.into(), text.into())
            .unwrap();
        let err = g.set_target_type(mapping, Some(int.into())).unwrap_err();
        assert_eq!(
            err.violated_constraint(),
            Some(CwmConstraint::MappingSourceEqualsTarget)
        );
        assert_eq!(g.target_type(mapping).unwrap(), Some(text.into()));
    }
}
