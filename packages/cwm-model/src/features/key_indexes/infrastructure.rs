use super::ports::KeyIndexesPackage;
use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    IndexId, IndexedFeatureId, KeyRelationshipId, Link, StructuralFeatureId, UniqueKeyId,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardKeyIndexesPackage;

impl StandardKeyIndexesPackage {
    pub const CLASS_PATH: &'static str =
        "cwm_model::features::key_indexes::StandardKeyIndexesPackage";
}

impl KeyIndexesPackage for StandardKeyIndexesPackage {
    fn class_path(&self) -> &'static str {
        Self::CLASS_PATH
    }

    fn create_unique_key(&self, graph: &mut ModelGraph, name: &str) -> Result<UniqueKeyId> {
        graph.instantiate(Some(name))
    }

    fn create_key_relationship(
        &self,
        graph: &mut ModelGraph,
        name: &str,
    ) -> Result<KeyRelationshipId> {
        graph.instantiate(Some(name))
    }

    fn create_index(&self, graph: &mut ModelGraph, name: &str) -> Result<IndexId> {
        graph.instantiate(Some(name))
    }

    fn create_indexed_feature(
        &self,
        graph: &mut ModelGraph,
        index: IndexId,
        feature: StructuralFeatureId,
    ) -> Result<IndexedFeatureId> {
        graph.instantiate_with(None, |g, entry: IndexedFeatureId| {
            g.link(Link::IndexedFeatures, index, entry)?;
            g.link(Link::IndexedFeatureInfo, entry, feature)?;
            Ok(())
        })
    }
}
