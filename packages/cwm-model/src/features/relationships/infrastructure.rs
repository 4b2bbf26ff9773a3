use super::ports::RelationshipsPackage;
use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    AssociationEndId, AssociationId, ClassifierId, GeneralizationId, Link,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRelationshipsPackage;

impl StandardRelationshipsPackage {
    pub const CLASS_PATH: &'static str =
        "cwm_model::features::relationships::StandardRelationshipsPackage";
}

impl RelationshipsPackage for StandardRelationshipsPackage {
    fn class_path(&self) -> &'static str {
        Self::CLASS_PATH
    }

    fn create_association(&self, graph: &mut ModelGraph, name: &str) -> Result<AssociationId> {
        graph.instantiate(Some(name))
    }

    fn create_association_end(
        &self,
        graph: &mut ModelGraph,
        name: &str,
    ) -> Result<AssociationEndId> {
        graph.instantiate(Some(name))
    }

    fn create_generalization(
        &self,
        graph: &mut ModelGraph,
        child: ClassifierId,
        parent: ClassifierId,
    ) -> Result<GeneralizationId> {
        graph.instantiate_with(None, |g, generalization: GeneralizationId| {
            g.link(Link::GeneralizationChild, generalization, child)?;
            g.link(Link::GeneralizationParent, generalization, parent)?;
            Ok(())
        })
    }
}
