//! SoftwareDeployment factory port

use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    ComponentId, DataManagerId, DataProviderId, DeployedComponentId, DeployedSoftwareSystemId,
    MachineId, ProviderConnectionId, SiteId, SoftwareSystemId,
};

/// Factory for Foundation::SoftwareDeployment meta-classes
pub trait SoftwareDeploymentPackage: Send + Sync {
    fn class_path(&self) -> &'static str;

    fn create_site(&self, graph: &mut ModelGraph, name: &str) -> Result<SiteId>;

    fn create_machine(&self, graph: &mut ModelGraph, name: &str) -> Result<MachineId>;

    fn create_software_system(&self, graph: &mut ModelGraph, name: &str)
        -> Result<SoftwareSystemId>;

    fn create_deployed_software_system(
        &self,
        graph: &mut ModelGraph,
        name: &str,
        system: SoftwareSystemId,
    ) -> Result<DeployedSoftwareSystemId>;

    fn create_component(&self, graph: &mut ModelGraph, name: &str) -> Result<ComponentId>;

    /// Installation of `component`; the machine is assigned separately
    fn create_deployed_component(
        &self,
        graph: &mut ModelGraph,
        name: &str,
        component: ComponentId,
    ) -> Result<DeployedComponentId>;

    fn create_data_manager(&self, graph: &mut ModelGraph, name: &str) -> Result<DataManagerId>;

    fn create_data_provider(&self, graph: &mut ModelGraph, name: &str) -> Result<DataProviderId>;

    fn create_provider_connection(
        &self,
        graph: &mut ModelGraph,
        name: &str,
        provider: DataProviderId,
        manager: DataManagerId,
    ) -> Result<ProviderConnectionId>;
}
