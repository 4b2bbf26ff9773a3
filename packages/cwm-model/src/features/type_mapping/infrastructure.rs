use super::ports::TypeMappingPackage;
use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{ClassifierId, Link, TypeMappingId, TypeSystemId};

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTypeMappingPackage;

impl StandardTypeMappingPackage {
    pub const CLASS_PATH: &'static str =
        "cwm_model::features::type_mapping::StandardTypeMappingPackage";
}

impl TypeMappingPackage for StandardTypeMappingPackage {
    fn class_path(&self) -> &'static str {
        Self::CLASS_PATH
    }

    fn create_type_system(&self, graph: &mut ModelGraph, name: &str) -> Result<TypeSystemId> {
        graph.instantiate(Some(name))
    }

    fn create_type_mapping(
        &self,
        graph: &mut ModelGraph,
        name: &str,
        source: ClassifierId,
        target: ClassifierId,
    ) -> Result<TypeMappingId> {
        graph.instantiate_with(Some(name), |g, mapping: TypeMappingId| {
            g.link(Link::MappingSource, mapping, source)?;
            g.link(Link::MappingTarget, mapping, target)?;
            Ok(())
        })
    }
}
