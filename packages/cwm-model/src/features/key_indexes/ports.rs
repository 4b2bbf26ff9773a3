//! KeyIndexes factory port

use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    IndexId, IndexedFeatureId, KeyRelationshipId, StructuralFeatureId, UniqueKeyId,
};

/// Factory for Foundation::KeyIndexes meta-classes
pub trait KeyIndexesPackage: Send + Sync {
    fn class_path(&self) -> &'static str;

    fn create_unique_key(&self, graph: &mut ModelGraph, name: &str) -> Result<UniqueKeyId>;

    fn create_key_relationship(&self, graph: &mut ModelGraph, name: &str)
        -> Result<KeyRelationshipId>;

    fn create_index(&self, graph: &mut ModelGraph, name: &str) -> Result<IndexId>;

    /// Entry of `index` referring to `feature`, appended in key order
    fn create_indexed_feature(
        &self,
        graph: &mut ModelGraph,
        index: IndexId,
        feature: StructuralFeatureId,
    ) -> Result<IndexedFeatureId>;
}
