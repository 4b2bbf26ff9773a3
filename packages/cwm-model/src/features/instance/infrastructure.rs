use super::ports::InstancePackage;
use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    DataValueId, DataValueProps, ExtentId, Link, ObjectId, SlotId, StructuralFeatureId,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardInstancePackage;

impl StandardInstancePackage {
    pub const CLASS_PATH: &'static str = "cwm_model::features::instance::StandardInstancePackage";
}

impl InstancePackage for StandardInstancePackage {
    fn class_path(&self) -> &'static str {
        Self::CLASS_PATH
    }

    fn create_object(&self, graph: &mut ModelGraph, name: &str) -> Result<ObjectId> {
        graph.instantiate(Some(name))
    }

    fn create_data_value(&self, graph: &mut ModelGraph, value: &str) -> Result<DataValueId> {
        graph.instantiate_with(None, |g, data_value: DataValueId| {
            g.update::<DataValueProps, _>(data_value, |p| p.value = value.to_string())
        })
    }

    fn create_slot(
        &self,
        graph: &mut ModelGraph,
        object: ObjectId,
        feature: StructuralFeatureId,
    ) -> Result<SlotId> {
        graph.instantiate_with(None, |g, slot: SlotId| {
            g.link(Link::ObjectSlot, object, slot)?;
            g.link(Link::FeatureSlot, slot, feature)?;
            Ok(())
        })
    }

    fn create_extent(&self, graph: &mut ModelGraph, name: &str) -> Result<ExtentId> {
        graph.instantiate(Some(name))
    }
}
