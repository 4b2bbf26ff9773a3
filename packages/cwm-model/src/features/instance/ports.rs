//! Instance factory port

use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{DataValueId, ExtentId, ObjectId, SlotId, StructuralFeatureId};

/// Factory for ObjectModel::Instance meta-classes
pub trait InstancePackage: Send + Sync {
    fn class_path(&self) -> &'static str;

    fn create_object(&self, graph: &mut ModelGraph, name: &str) -> Result<ObjectId>;

    fn create_data_value(&self, graph: &mut ModelGraph, value: &str) -> Result<DataValueId>;

    /// Slot of `object` for `feature`
    fn create_slot(
        &self,
        graph: &mut ModelGraph,
        object: ObjectId,
        feature: StructuralFeatureId,
    ) -> Result<SlotId>;

    fn create_extent(&self, graph: &mut ModelGraph, name: &str) -> Result<ExtentId>;
}
