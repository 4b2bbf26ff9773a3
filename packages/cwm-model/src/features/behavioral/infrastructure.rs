use super::ports::BehavioralPackage;
use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{EventId, InterfaceId, Link, MethodId, OperationId, ParameterId};

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBehavioralPackage;

impl StandardBehavioralPackage {
    pub const CLASS_PATH: &'static str = "cwm_model::features::behavioral::StandardBehavioralPackage";
}

impl BehavioralPackage for StandardBehavioralPackage {
    fn class_path(&self) -> &'static str {
        Self::CLASS_PATH
    }

    fn create_operation(&self, graph: &mut ModelGraph, name: &str) -> Result<OperationId> {
        graph.instantiate(Some(name))
    }

    fn create_method(
        &self,
        graph: &mut ModelGraph,
        name: &str,
        specification: OperationId,
    ) -> Result<MethodId> {
        graph.instantiate_with(Some(name), |g, method: MethodId| {
            g.link(Link::OperationMethod, specification, method).map(drop)
        })
    }

    fn create_parameter(&self, graph: &mut ModelGraph, name: &str) -> Result<ParameterId> {
        graph.instantiate(Some(name))
    }

    fn create_interface(&self, graph: &mut ModelGraph, name: &str) -> Result<InterfaceId> {
        graph.instantiate(Some(name))
    }

    fn create_event(&self, graph: &mut ModelGraph, name: &str) -> Result<EventId> {
        graph.instantiate(Some(name))
    }
}
