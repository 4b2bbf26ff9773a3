//! CwmFactory - one implementation of every package, chosen by configuration

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::package_registry::{PackageInterface, PackageRegistry};
use crate::config::ModelConfig;
use crate::errors::Result;
use crate::features::behavioral::BehavioralPackage;
use crate::features::core::CorePackage;
use crate::features::data_types::DataTypesPackage;
use crate::features::instance::InstancePackage;
use crate::features::key_indexes::KeyIndexesPackage;
use crate::features::relational::RelationalPackage;
use crate::features::relationships::RelationshipsPackage;
use crate::features::software_deployment::SoftwareDeploymentPackage;
use crate::features::type_mapping::TypeMappingPackage;
use crate::features::validation::ModelValidator;
use crate::graph::ModelGraph;

/// Entry point for building and checking models
///
/// ## Example
/// ```rust,ignore
/// let factory = CwmFactory::new(ModelConfig::preset(Preset::Lenient))?;
/// let mut graph = factory.new_graph();
/// let table = factory.relational().create_table(&mut graph, "orders")?;
/// let report = factory.validator().validate(&graph)?;
/// ```
pub struct CwmFactory {
    config: ModelConfig,
    core: Arc<dyn CorePackage>,
    behavioral: Arc<dyn BehavioralPackage>,
    relationships: Arc<dyn RelationshipsPackage>,
    instance: Arc<dyn InstancePackage>,
    key_indexes: Arc<dyn KeyIndexesPackage>,
    software_deployment: Arc<dyn SoftwareDeploymentPackage>,
    type_mapping: Arc<dyn TypeMappingPackage>,
    data_types: Arc<dyn DataTypesPackage>,
    relational: Arc<dyn RelationalPackage>,
}

impl CwmFactory {
    /// Resolve implementations through the process-wide registry
    pub fn new(config: ModelConfig) -> Result<Self> {
        let registry = PackageRegistry::global();
        Self::with_registry(&registry, config)
    }

    pub fn with_registry(registry: &PackageRegistry, config: ModelConfig) -> Result<Self> {
        fn resolve<P: PackageInterface + ?Sized>(
            registry: &PackageRegistry,
            config: &ModelConfig,
        ) -> Result<Arc<P>> {
            registry.create::<P>(config.packages.class_path(P::PACKAGE))
        }

        let factory = Self {
            core: resolve(registry, &config)?,
            behavioral: resolve(registry, &config)?,
            relationships: resolve(registry, &config)?,
            instance: resolve(registry, &config)?,
            key_indexes: resolve(registry, &config)?,
            software_deployment: resolve(registry, &config)?,
            type_mapping: resolve(registry, &config)?,
            data_types: resolve(registry, &config)?,
            relational: resolve(registry, &config)?,
            config,
        };
        debug!(config = %factory.config.describe(), "factory ready");
        Ok(factory)
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Empty graph with the configured constraint policy
    pub fn new_graph(&self) -> ModelGraph {
        ModelGraph::with_policy(self.config.policy)
    }

    pub fn validator(&self) -> ModelValidator {
        ModelValidator::new(&self.config)
    }

    pub fn core(&self) -> &dyn CorePackage {
        self.core.as_ref()
    }

    pub fn behavioral(&self) -> &dyn BehavioralPackage {
        self.behavioral.as_ref()
    }

    pub fn relationships(&self) -> &dyn RelationshipsPackage {
        self.relationships.as_ref()
    }

    pub fn instance(&self) -> &dyn InstancePackage {
        self.instance.as_ref()
    }

    pub fn key_indexes(&self) -> &dyn KeyIndexesPackage {
        self.key_indexes.as_ref()
    }

    pub fn software_deployment(&self) -> &dyn SoftwareDeploymentPackage {
        self.software_deployment.as_ref()
    }

    pub fn type_mapping(&self) -> &dyn TypeMappingPackage {
        self.type_mapping.as_ref()
    }

    pub fn data_types(&self) -> &dyn DataTypesPackage {
        self.data_types.as_ref()
    }

    pub fn relational(&self) -> &dyn RelationalPackage {
        self.relational.as_ref()
    }
}

impl fmt::Debug for CwmFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CwmFactory")
            .field("config", &self.config.describe())
            .field("core", &self.core.class_path())
            .field("relational", &self.relational.class_path())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use crate::errors::CwmError;
    use crate::shared::models::{CwmConstraint, CwmPackage};

    #[test]
    fn test_default_factory_builds_valid_model() {
        let factory = CwmFactory::new(ModelConfig::default()).unwrap();
        let mut g = factory.new_graph();
        assert!(g.policy().eager);
        let schema = factory.relational().create_schema(&mut g, "dw").unwrap();
        let table = factory.relational().create_table(&mut g, "orders").unwrap();
        g.add_owned_element(schema, table).unwrap();
        assert!(factory.validator().validate(&g).unwrap().is_valid());
    }

    #[test]
    fn test_lenient_factory() {
        let factory = CwmFactory::new(ModelConfig::preset(Preset::Lenient)).unwrap();
        let mut g = factory.new_graph();
        assert!(!g.policy().eager);
        let schema = factory.relational().create_schema(&mut g, "dw").unwrap();
        for _ in 0..2 {
            let table = factory.relational().create_table(&mut g, "orders").unwrap();
            g.add_owned_element(schema, table).unwrap();
        }
        let report = factory.validator().validate(&g).unwrap();
        assert!(report.has(CwmConstraint::DuplicateOwnedName));
    }

    #[test]
    fn test_unknown_implementation() {
        let config = ModelConfig::default().package(CwmPackage::TypeMapping, "acme::TypeMapping");
        let err = CwmFactory::new(config).err().unwrap();
        assert!(matches!(
            err,
            CwmError::UnknownImplementation {
                package: CwmPackage::TypeMapping,
                ..
            }
        ));
    }

    #[test]
    fn test_local_registry() {
        let empty = PackageRegistry::new();
        assert!(CwmFactory::with_registry(&empty, ModelConfig::default()).is_err());
        let factory =
            CwmFactory::with_registry(&PackageRegistry::with_defaults(), ModelConfig::default())
                .unwrap();
        assert!(format!("{:?}", factory).contains("StandardCorePackage"));
    }
}
