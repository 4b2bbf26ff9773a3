use super::ports::DataTypesPackage;
use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    ClassifierId, EnumerationId, EnumerationLiteralId, Link, TypeAliasId, UnionId, UnionMemberId,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDataTypesPackage;

impl StandardDataTypesPackage {
    pub const CLASS_PATH: &'static str = "cwm_model::features::data_types::StandardDataTypesPackage";
}

impl DataTypesPackage for StandardDataTypesPackage {
    fn class_path(&self) -> &'static str {
        Self::CLASS_PATH
    }

    fn create_enumeration(&self, graph: &mut ModelGraph, name: &str) -> Result<EnumerationId> {
        graph.instantiate(Some(name))
    }

    fn create_enumeration_literal(
        &self,
        graph: &mut ModelGraph,
        name: &str,
    ) -> Result<EnumerationLiteralId> {
        graph.instantiate(Some(name))
    }

    fn create_type_alias(
        &self,
        graph: &mut ModelGraph,
        name: &str,
        aliased: ClassifierId,
    ) -> Result<TypeAliasId> {
        graph.instantiate_with(Some(name), |g, alias: TypeAliasId| {
            g.link(Link::ClassifierAlias, alias, aliased).map(drop)
        })
    }

    fn create_union(&self, graph: &mut ModelGraph, name: &str) -> Result<UnionId> {
        graph.instantiate(Some(name))
    }

    fn create_union_member(&self, graph: &mut ModelGraph, name: &str) -> Result<UnionMemberId> {
        graph.instantiate(Some(name))
    }
}
