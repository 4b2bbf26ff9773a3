//! Core factory port
//!
//! Implementations are selected by class path through the package registry.

use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    AttributeId, ClassId, ConstraintId, DataTypeId, DependencyId, MetaClass, ModelId, PackageId,
    StereotypeId, SubsystemId,
};

/// Factory for ObjectModel::Core meta-classes
pub trait CorePackage: Send + Sync {
    /// Class path this implementation is registered under
    fn class_path(&self) -> &'static str;

    fn create_package(&self, graph: &mut ModelGraph, name: &str) -> Result<PackageId>;

    fn create_model(&self, graph: &mut ModelGraph, name: &str) -> Result<ModelId>;

    fn create_subsystem(&self, graph: &mut ModelGraph, name: &str) -> Result<SubsystemId>;

    fn create_class(&self, graph: &mut ModelGraph, name: &str) -> Result<ClassId>;

    fn create_data_type(&self, graph: &mut ModelGraph, name: &str) -> Result<DataTypeId>;

    fn create_attribute(&self, graph: &mut ModelGraph, name: &str) -> Result<AttributeId>;

    fn create_constraint(&self, graph: &mut ModelGraph, name: &str) -> Result<ConstraintId>;

    fn create_dependency(&self, graph: &mut ModelGraph, name: &str) -> Result<DependencyId>;

    /// `base_class` restricts which meta-classes the stereotype may extend
    fn create_stereotype(
        &self,
        graph: &mut ModelGraph,
        name: &str,
        base_class: Option<MetaClass>,
    ) -> Result<StereotypeId>;
}
