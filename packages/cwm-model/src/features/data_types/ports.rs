//! DataTypes factory port

use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    ClassifierId, EnumerationId, EnumerationLiteralId, TypeAliasId, UnionId, UnionMemberId,
};

/// Factory for Foundation::DataTypes meta-classes
pub trait DataTypesPackage: Send + Sync {
    fn class_path(&self) -> &'static str;

    fn create_enumeration(&self, graph: &mut ModelGraph, name: &str) -> Result<EnumerationId>;

    fn create_enumeration_literal(
        &self,
        graph: &mut ModelGraph,
        name: &str,
    ) -> Result<EnumerationLiteralId>;

    /// Alias naming `aliased`
    fn create_type_alias(
        &self,
        graph: &mut ModelGraph,
        name: &str,
        aliased: ClassifierId,
    ) -> Result<TypeAliasId>;

    fn create_union(&self, graph: &mut ModelGraph, name: &str) -> Result<UnionId>;

    fn create_union_member(&self, graph: &mut ModelGraph, name: &str) -> Result<UnionMemberId>;
}
