//! Standard Core factory

use super::ports::CorePackage;
use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    AttributeId, ClassId, ConstraintId, DataTypeId, DependencyId, MetaClass, ModelId, PackageId,
    StereotypeId, StereotypeProps, SubsystemId,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCorePackage;

impl StandardCorePackage {
    pub const CLASS_PATH: &'static str = "cwm_model::features::core::StandardCorePackage";
}

impl CorePackage for StandardCorePackage {
    fn class_path(&self) -> &'static str {
        Self::CLASS_PATH
    }

    fn create_package(&self, graph: &mut ModelGraph, name: &str) -> Result<PackageId> {
        graph.instantiate(Some(name))
    }

    fn create_model(&self, graph: &mut ModelGraph, name: &str) -> Result<ModelId> {
        graph.instantiate(Some(name))
    }

    fn create_subsystem(&self, graph: &mut ModelGraph, name: &str) -> Result<SubsystemId> {
        graph.instantiate(Some(name))
    }

    fn create_class(&self, graph: &mut ModelGraph, name: &str) -> Result<ClassId> {
        graph.instantiate(Some(name))
    }

    fn create_data_type(&self, graph: &mut ModelGraph, name: &str) -> Result<DataTypeId> {
        graph.instantiate(Some(name))
    }

    fn create_attribute(&self, graph: &mut ModelGraph, name: &str) -> Result<AttributeId> {
        graph.instantiate(Some(name))
    }

    fn create_constraint(&self, graph: &mut ModelGraph, name: &str) -> Result<ConstraintId> {
        graph.instantiate(Some(name))
    }

    fn create_dependency(&self, graph: &mut ModelGraph, name: &str) -> Result<DependencyId> {
        graph.instantiate(Some(name))
    }

    fn create_stereotype(
        &self,
        graph: &mut ModelGraph,
        name: &str,
        base_class: Option<MetaClass>,
    ) -> Result<StereotypeId> {
        graph.instantiate_with(Some(name), |g, stereotype: StereotypeId| {
            g.update::<StereotypeProps, _>(stereotype, |p| {
                p.base_class = base_class.map(|mc| mc.as_str().to_string());
            })
        })
    }
}
