//! ObjectModel::Instance typed API

use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    ClassifierId, ClassifierRef, DataValueId, DataValueProps, ElementId, InstanceId, InstanceRef,
    Link, LinkEnd, ModelElementRef, ObjectId, SlotId, StructuralFeatureId,
};

impl ModelGraph {
    pub fn classifier(&self, instance: impl InstanceRef) -> Result<Option<ClassifierId>> {
        self.single_as(instance.element_id(), LinkEnd::source(Link::InstanceClassifier))
    }

    /// Classify an instance; objects need a non-datatype classifier and
    /// data values a datatype
    pub fn set_classifier(
        &mut self,
        instance: impl InstanceRef,
        classifier: Option<ClassifierId>,
    ) -> Result<Option<ClassifierId>> {
        let prior = self.set_single(
            instance.element_id(),
            LinkEnd::source(Link::InstanceClassifier),
            classifier.map(ElementId::from),
        )?;
        Ok(prior.map(ClassifierId::from_element_id))
    }

    pub fn instances(&self, classifier: impl ClassifierRef) -> Result<Vec<InstanceId>> {
        self.related_as(
            classifier.element_id(),
            LinkEnd::target(Link::InstanceClassifier),
        )
    }

    pub fn data_value(&self, value: DataValueId) -> Result<&str> {
        Ok(&self.facet::<DataValueProps>(value)?.value)
    }

    pub fn set_data_value(&mut self, value: DataValueId, text: &str) -> Result<String> {
        self.update::<DataValueProps, _>(value, |p| std::mem::replace(&mut p.value, text.to_string()))
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Slots
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    pub fn add_slot(&mut self, object: ObjectId, slot: SlotId) -> Result<bool> {
        self.link(Link::ObjectSlot, object, slot)
    }

    pub fn remove_slot(&mut self, object: ObjectId, slot: SlotId) -> Result<bool> {
        self.unlink(Link::ObjectSlot, object, slot)
    }

    pub fn slots(&self, object: ObjectId) -> Result<Vec<SlotId>> {
        self.related_as(object, LinkEnd::source(Link::ObjectSlot))
    }

    pub fn slot_object(&self, slot: SlotId) -> Result<Option<ObjectId>> {
        self.single_as(slot, LinkEnd::target(Link::ObjectSlot))
    }

    pub fn slot_value(&self, slot: SlotId) -> Result<Option<InstanceId>> {
        self.single_as(slot, LinkEnd::source(Link::SlotValue))
    }

    pub fn set_slot_value(
        &mut self,
        slot: SlotId,
        value: Option<InstanceId>,
    ) -> Result<Option<InstanceId>> {
        let prior = self.set_single(
            slot,
            LinkEnd::source(Link::SlotValue),
            value.map(ElementId::from),
        )?;
        Ok(prior.map(InstanceId::from_element_id))
    }

    /// Slots holding `instance` as their value
    pub fn value_slots(&self, instance: impl InstanceRef) -> Result<Vec<SlotId>> {
        self.related_as(instance.element_id(), LinkEnd::target(Link::SlotValue))
    }

    pub fn slot_feature(&self, slot: SlotId) -> Result<Option<StructuralFeatureId>> {
        self.single_as(slot, LinkEnd::source(Link::FeatureSlot))
    }

    pub fn set_slot_feature(
        &mut self,
        slot: SlotId,
        feature: Option<StructuralFeatureId>,
    ) -> Result<Option<StructuralFeatureId>> {
        let prior = self.set_single(
            slot,
            LinkEnd::source(Link::FeatureSlot),
            feature.map(ElementId::from),
        )?;
        Ok(prior.map(StructuralFeatureId::from_element_id))
    }
}
