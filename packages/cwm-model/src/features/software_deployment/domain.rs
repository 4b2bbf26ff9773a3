//! Foundation::SoftwareDeployment typed API

use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    ComponentId, DataManagerId, DataManagerRef, DataProviderId, DeployedComponentId,
    DeployedComponentProps, DeployedComponentRef, DeployedSoftwareSystemId, ElementId, Link,
    LinkEnd, MachineId, MachineProps, ModelElementRef, ProviderConnectionId,
    ProviderConnectionProps, SiteId, SoftwareSystemId, SoftwareSystemProps,
};

impl ModelGraph {
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Site / Machine
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    facet_accessors! {
        MachineProps, MachineId {
            ip_addresses, set_ip_addresses => ip_addresses: Vec<String>;
            host_names, set_host_names => host_names: Vec<String>;
            machine_id, set_machine_id => machine_id: Option<String>;
        }
    }

    pub fn site(&self, machine: MachineId) -> Result<Option<SiteId>> {
        self.single_as(machine, LinkEnd::source(Link::MachineSite))
    }

    pub fn set_site(&mut self, machine: MachineId, site: Option<SiteId>) -> Result<Option<SiteId>> {
        let prior = self.set_single(
            machine,
            LinkEnd::source(Link::MachineSite),
            site.map(ElementId::from),
        )?;
        Ok(prior.map(SiteId::from_element_id))
    }

    pub fn machines(&self, site: SiteId) -> Result<Vec<MachineId>> {
        self.related_as(site, LinkEnd::target(Link::MachineSite))
    }

    pub fn add_deployed_component(
        &mut self,
        machine: MachineId,
        component: impl DeployedComponentRef,
    ) -> Result<bool> {
        self.link(Link::ComponentsOnMachine, machine, component.element_id())
    }

    pub fn remove_deployed_component(
        &mut self,
        machine: MachineId,
        component: impl DeployedComponentRef,
    ) -> Result<bool> {
        self.unlink(Link::ComponentsOnMachine, machine, component.element_id())
    }

    pub fn deployed_components(&self, machine: MachineId) -> Result<Vec<DeployedComponentId>> {
        self.related_as(machine, LinkEnd::source(Link::ComponentsOnMachine))
    }

    pub fn machine(&self, component: impl DeployedComponentRef) -> Result<Option<MachineId>> {
        self.single_as(
            component.element_id(),
            LinkEnd::target(Link::ComponentsOnMachine),
        )
    }

    pub fn set_machine(
        &mut self,
        component: impl DeployedComponentRef,
        machine: Option<MachineId>,
    ) -> Result<Option<MachineId>> {
        let prior = self.set_single(
            component.element_id(),
            LinkEnd::target(Link::ComponentsOnMachine),
            machine.map(ElementId::from),
        )?;
        Ok(prior.map(MachineId::from_element_id))
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Components and software systems
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    facet_accessors! {
        DeployedComponentProps, impl DeployedComponentRef {
            pathname, set_pathname => pathname: Option<String>;
        }
    }

    facet_accessors! {
        SoftwareSystemProps, SoftwareSystemId {
            system_type, set_system_type => system_type: Option<String>;
            system_subtype, set_system_subtype => subtype: Option<String>;
            supplier, set_supplier => supplier: Option<String>;
            system_version, set_system_version => version: Option<String>;
        }
    }

    /// Component a deployment installs
    pub fn component(&self, deployed: impl DeployedComponentRef) -> Result<Option<ComponentId>> {
        self.single_as(
            deployed.element_id(),
            LinkEnd::source(Link::ComponentDeployment),
        )
    }

    pub fn set_component(
        &mut self,
        deployed: impl DeployedComponentRef,
        component: Option<ComponentId>,
    ) -> Result<Option<ComponentId>> {
        let prior = self.set_single(
            deployed.element_id(),
            LinkEnd::source(Link::ComponentDeployment),
            component.map(ElementId::from),
        )?;
        Ok(prior.map(ComponentId::from_element_id))
    }

    pub fn component_deployments(&self, component: ComponentId) -> Result<Vec<DeployedComponentId>> {
        self.related_as(component, LinkEnd::target(Link::ComponentDeployment))
    }

    pub fn software_system(
        &self,
        deployed: DeployedSoftwareSystemId,
    ) -> Result<Option<SoftwareSystemId>> {
        self.single_as(deployed, LinkEnd::source(Link::SoftwareSystemDeployment))
    }

    pub fn set_software_system(
        &mut self,
        deployed: DeployedSoftwareSystemId,
        system: Option<SoftwareSystemId>,
    ) -> Result<Option<SoftwareSystemId>> {
        let prior = self.set_single(
            deployed,
            LinkEnd::source(Link::SoftwareSystemDeployment),
            system.map(ElementId::from),
        )?;
        Ok(prior.map(SoftwareSystemId::from_element_id))
    }

    pub fn system_deployments(
        &self,
        system: SoftwareSystemId,
    ) -> Result<Vec<DeployedSoftwareSystemId>> {
        self.related_as(system, LinkEnd::target(Link::SoftwareSystemDeployment))
    }

    pub fn add_system_component(
        &mut self,
        deployed: DeployedSoftwareSystemId,
        component: impl DeployedComponentRef,
    ) -> Result<bool> {
        self.link(Link::SystemComponents, deployed, component.element_id())
    }

    pub fn remove_system_component(
        &mut self,
        deployed: DeployedSoftwareSystemId,
        component: impl DeployedComponentRef,
    ) -> Result<bool> {
        self.unlink(Link::SystemComponents, deployed, component.element_id())
    }

    pub fn system_components(
        &self,
        deployed: DeployedSoftwareSystemId,
    ) -> Result<Vec<DeployedComponentId>> {
        self.related_as(deployed, LinkEnd::source(Link::SystemComponents))
    }

    pub fn deployed_software_systems(
        &self,
        component: impl DeployedComponentRef,
    ) -> Result<Vec<DeployedSoftwareSystemId>> {
        self.related_as(
            component.element_id(),
            LinkEnd::target(Link::SystemComponents),
        )
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Provider connections
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    facet_accessors! {
        ProviderConnectionProps, ProviderConnectionId {
            connection_is_read_only, set_connection_is_read_only => is_read_only: bool;
        }
    }

    pub fn data_provider(&self, connection: ProviderConnectionId) -> Result<Option<DataProviderId>> {
        self.single_as(connection, LinkEnd::target(Link::DataProviderConnection))
    }

    pub fn set_data_provider(
        &mut self,
        connection: ProviderConnectionId,
        provider: Option<DataProviderId>,
    ) -> Result<Option<DataProviderId>> {
        let prior = self.set_single(
            connection,
            LinkEnd::target(Link::DataProviderConnection),
            provider.map(ElementId::from),
        )?;
        Ok(prior.map(DataProviderId::from_element_id))
    }

    pub fn data_manager(&self, connection: ProviderConnectionId) -> Result<Option<DataManagerId>> {
        self.single_as(connection, LinkEnd::target(Link::DataManagerConnection))
    }

    pub fn set_data_manager(
        &mut self,
        connection: ProviderConnectionId,
        manager: Option<DataManagerId>,
    ) -> Result<Option<DataManagerId>> {
        let prior = self.set_single(
            connection,
            LinkEnd::target(Link::DataManagerConnection),
            manager.map(ElementId::from),
        )?;
        Ok(prior.map(DataManagerId::from_element_id))
    }

    /// Connections a provider serves
    pub fn resource_connections(&self, provider: DataProviderId) -> Result<Vec<ProviderConnectionId>> {
        self.related_as(provider, LinkEnd::source(Link::DataProviderConnection))
    }

    /// Connections a data manager uses as a client
    pub fn client_connections(
        &self,
        manager: impl DataManagerRef,
    ) -> Result<Vec<ProviderConnectionId>> {
        self.related_as(
            manager.element_id(),
            LinkEnd::source(Link::DataManagerConnection),
        )
    }
}
