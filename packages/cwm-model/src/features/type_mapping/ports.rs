//! TypeMapping factory port

use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{ClassifierId, TypeMappingId, TypeSystemId};

/// Factory for Foundation::TypeMapping meta-classes
pub trait TypeMappingPackage: Send + Sync {
    fn class_path(&self) -> &'static str;

    fn create_type_system(&self, graph: &mut ModelGraph, name: &str) -> Result<TypeSystemId>;

    /// Mapping from `source` to a different `target` type
    fn create_type_mapping(
        &self,
        graph: &mut ModelGraph,
        name: &str,
        source: ClassifierId,
        target: ClassifierId,
    ) -> Result<TypeMappingId>;
}
