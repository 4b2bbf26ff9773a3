//! Behavioral factory port

use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{EventId, InterfaceId, MethodId, OperationId, ParameterId};

/// Factory for ObjectModel::Behavioral meta-classes
pub trait BehavioralPackage: Send + Sync {
    fn class_path(&self) -> &'static str;

    fn create_operation(&self, graph: &mut ModelGraph, name: &str) -> Result<OperationId>;

    /// A method always implements an operation
    fn create_method(
        &self,
        graph: &mut ModelGraph,
        name: &str,
        specification: OperationId,
    ) -> Result<MethodId>;

    fn create_parameter(&self, graph: &mut ModelGraph, name: &str) -> Result<ParameterId>;

    fn create_interface(&self, graph: &mut ModelGraph, name: &str) -> Result<InterfaceId>;

    fn create_event(&self, graph: &mut ModelGraph, name: &str) -> Result<EventId>;
}
