use super::ports::SoftwareDeploymentPackage;
use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    ComponentId, DataManagerId, DataProviderId, DeployedComponentId, DeployedSoftwareSystemId,
    Link, MachineId, ProviderConnectionId, SiteId, SoftwareSystemId,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSoftwareDeploymentPackage;

impl StandardSoftwareDeploymentPackage {
    pub const CLASS_PATH: &'static str =
        "cwm_model::features::software_deployment::StandardSoftwareDeploymentPackage";
}

impl SoftwareDeploymentPackage for StandardSoftwareDeploymentPackage {
    fn class_path(&self) -> &'static str {
        Self::CLASS_PATH
    }

    fn create_site(&self, graph: &mut ModelGraph, name: &str) -> Result<SiteId> {
        graph.instantiate(Some(name))
    }

    fn create_machine(&self, graph: &mut ModelGraph, name: &str) -> Result<MachineId> {
        graph.instantiate(Some(name))
    }

    fn create_software_system(
        &self,
        graph: &mut ModelGraph,
        name: &str,
    ) -> Result<SoftwareSystemId> {
        graph.instantiate(Some(name))
    }

    fn create_deployed_software_system(
        &self,
        graph: &mut ModelGraph,
        name: &str,
        system: SoftwareSystemId,
    ) -> Result<DeployedSoftwareSystemId> {
        graph.instantiate_with(Some(name), |g, deployed: DeployedSoftwareSystemId| {
            g.link(Link::SoftwareSystemDeployment, deployed, system).map(drop)
        })
    }

    fn create_component(&self, graph: &mut ModelGraph, name: &str) -> Result<ComponentId> {
        graph.instantiate(Some(name))
    }

    fn create_deployed_component(
        &self,
        graph: &mut ModelGraph,
        name: &str,
        component: ComponentId,
    ) -> Result<DeployedComponentId> {
        graph.instantiate_with(Some(name), |g, deployed: DeployedComponentId| {
            g.link(Link::ComponentDeployment, deployed, component).map(drop)
        })
    }

    fn create_data_manager(&self, graph: &mut ModelGraph, name: &str) -> Result<DataManagerId> {
        graph.instantiate(Some(name))
    }

    fn create_data_provider(&self, graph: &mut ModelGraph, name: &str) -> Result<DataProviderId> {
        graph.instantiate(Some(name))
    }

    fn create_provider_connection(
        &self,
        graph: &mut ModelGraph,
        name: &str,
        provider: DataProviderId,
        manager: DataManagerId,
    ) -> Result<ProviderConnectionId> {
        graph.instantiate_with(Some(name), |g, connection: ProviderConnectionId| {
            g.link(Link::DataProviderConnection, provider, connection)?;
            g.link(Link::DataManagerConnection, manager, connection)?;
            Ok(())
        })
    }
}
