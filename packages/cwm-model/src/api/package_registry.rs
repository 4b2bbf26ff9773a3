//! PackageRegistry - class-path based selection of package factories
//!
//! Every CWM package is a trait (`CorePackage`, `RelationalPackage`, ...).
//! Implementations are registered under a class-path string and created on
//! demand:
//!
//! ```rust,ignore
//! let core = <dyn CorePackage>::create("cwm_model::features::core::StandardCorePackage")?;
//! let class = core.create_class(&mut graph, "Customer")?;
//! ```
//!
//! A process-wide registry backs the static `create` entry points; local
//! registries are independent of it.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::{RwLock, RwLockReadGuard};
use tracing::{debug, info};

use crate::errors::{CwmError, Result};
use crate::features::behavioral::{BehavioralPackage, StandardBehavioralPackage};
use crate::features::core::{CorePackage, StandardCorePackage};
use crate::features::data_types::{DataTypesPackage, StandardDataTypesPackage};
use crate::features::instance::{InstancePackage, StandardInstancePackage};
use crate::features::key_indexes::{KeyIndexesPackage, StandardKeyIndexesPackage};
use crate::features::relational::{RelationalPackage, StandardRelationalPackage};
use crate::features::relationships::{RelationshipsPackage, StandardRelationshipsPackage};
use crate::features::software_deployment::{
    SoftwareDeploymentPackage, StandardSoftwareDeploymentPackage,
};
use crate::features::type_mapping::{StandardTypeMappingPackage, TypeMappingPackage};
use crate::shared::models::CwmPackage;

/// A package factory trait object type (`dyn CorePackage`, ...)
pub trait PackageInterface: Send + Sync + 'static {
    const PACKAGE: CwmPackage;
    const DEFAULT_CLASS_PATH: &'static str;

    fn default_impl() -> Arc<Self>;
}

type Constructor<P> = Arc<dyn Fn() -> Arc<P> + Send + Sync>;

/// Class path -> constructor, per package
#[derive(Default)]
pub struct PackageRegistry {
    constructors: AHashMap<(CwmPackage, String), Box<dyn Any + Send + Sync>>,
}

impl PackageRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the standard implementation of every package
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_default::<dyn CorePackage>();
        registry.register_default::<dyn BehavioralPackage>();
        registry.register_default::<dyn RelationshipsPackage>();
        registry.register_default::<dyn InstancePackage>();
        registry.register_default::<dyn KeyIndexesPackage>();
        registry.register_default::<dyn SoftwareDeploymentPackage>();
        registry.register_default::<dyn TypeMappingPackage>();
        registry.register_default::<dyn DataTypesPackage>();
        registry.register_default::<dyn RelationalPackage>();
        registry
    }

    fn register_default<P: PackageInterface + ?Sized>(&mut self) {
        self.insert::<P>(P::DEFAULT_CLASS_PATH.to_string(), Arc::new(P::default_impl));
    }

    fn insert<P: PackageInterface + ?Sized>(&mut self, class_path: String, ctor: Constructor<P>) -> bool {
        self.constructors
            .insert((P::PACKAGE, class_path), Box::new(ctor))
            .is_some()
    }

    /// Register `constructor` under `class_path`
    ///
    /// Returns `true` when an earlier registration was replaced.
    pub fn register<P: PackageInterface + ?Sized>(
        &mut self,
        class_path: impl Into<String>,
        constructor: impl Fn() -> Arc<P> + Send + Sync + 'static,
    ) -> bool {
        let class_path = class_path.into();
        info!(package = %P::PACKAGE.as_str(), class_path = %class_path, "package implementation registered");
        self.insert::<P>(class_path, Arc::new(constructor))
    }

    /// Instantiate the implementation registered under `class_path`
    pub fn create<P: PackageInterface + ?Sized>(&self, class_path: &str) -> Result<Arc<P>> {
        let ctor = self.constructor::<P>(class_path)?;
        Ok(ctor())
    }

    /// Constructor registered under `class_path`, detached from the registry
    /// so it can run without holding a lock on it
    fn constructor<P: PackageInterface + ?Sized>(&self, class_path: &str) -> Result<Constructor<P>> {
        let ctor = self
            .constructors
            .get(&(P::PACKAGE, class_path.to_string()))
            .and_then(|c| c.downcast_ref::<Constructor<P>>())
            .ok_or_else(|| CwmError::UnknownImplementation {
                package: P::PACKAGE,
                class_path: class_path.to_string(),
            })?;
        debug!(package = %P::PACKAGE.as_str(), class_path, "package implementation created");
        Ok(Arc::clone(ctor))
    }

    pub fn contains(&self, package: CwmPackage, class_path: &str) -> bool {
        self.constructors
            .contains_key(&(package, class_path.to_string()))
    }

    /// Registered class paths of `package`, sorted
    pub fn class_paths(&self, package: CwmPackage) -> Vec<&str> {
        let mut paths: Vec<&str> = self
            .constructors
            .keys()
            .filter(|(p, _)| *p == package)
            .map(|(_, path)| path.as_str())
            .collect();
        paths.sort_unstable();
        paths
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Process-wide registry
    // ═══════════════════════════════════════════════════════════════════════

    /// Shared registry, initialized with the standard implementations
    pub fn global() -> RwLockReadGuard<'static, PackageRegistry> {
        GLOBAL.read()
    }

    /// Register into the shared registry
    pub fn register_global<P: PackageInterface + ?Sized>(
        class_path: impl Into<String>,
        constructor: impl Fn() -> Arc<P> + Send + Sync + 'static,
    ) -> bool {
        GLOBAL.write().register::<P>(class_path, constructor)
    }
}

static GLOBAL: Lazy<RwLock<PackageRegistry>> = Lazy::new(|| RwLock::new(PackageRegistry::with_defaults()));

impl fmt::Debug for PackageRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<String> = self
            .constructors
            .keys()
            .map(|(package, path)| format!("{}={}", package.as_str(), path))
            .collect();
        keys.sort();
        f.debug_struct("PackageRegistry")
            .field("implementations", &keys)
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Package interfaces
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! package_interface {
    ($($trait:ident => $package:ident, $standard:ident;)*) => {
        $(
            impl PackageInterface for dyn $trait {
                const PACKAGE: CwmPackage = CwmPackage::$package;
                const DEFAULT_CLASS_PATH: &'static str = $standard::CLASS_PATH;

                fn default_impl() -> Arc<Self> {
                    Arc::new($standard)
                }
            }

            impl dyn $trait {
                /// Instantiate the implementation registered under `class_path`
                /// in the process-wide registry
                pub fn create(class_path: &str) -> Result<Arc<dyn $trait>> {
                    // the read guard is released before the constructor runs
                    let ctor = PackageRegistry::global().constructor::<dyn $trait>(class_path)?;
                    Ok(ctor())
                }
            }
        )*
    };
}

package_interface! {
    CorePackage => Core, StandardCorePackage;
    BehavioralPackage => Behavioral, StandardBehavioralPackage;
    RelationshipsPackage => Relationships, StandardRelationshipsPackage;
    InstancePackage => Instance, StandardInstancePackage;
    KeyIndexesPackage => KeyIndexes, StandardKeyIndexesPackage;
    SoftwareDeploymentPackage => SoftwareDeployment, StandardSoftwareDeploymentPackage;
    TypeMappingPackage => TypeMapping, StandardTypeMappingPackage;
    DataTypesPackage => DataTypes, StandardDataTypesPackage;
    RelationalPackage => Relational, StandardRelationalPackage;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ModelGraph;
    use crate::shared::models::{
        AttributeId, ClassId, ConstraintId, DataTypeId, DependencyId, MetaClass, ModelId, PackageId,
        StereotypeId, SubsystemId,
    };

    /// Core factory that prefixes class names
    #[derive(Debug)]
    struct PrefixedCore(&'static str);

    impl CorePackage for PrefixedCore {
        fn class_path(&self) -> &'static str {
            "tests::PrefixedCore"
        }

        fn create_package(&self, graph: &mut ModelGraph, name: &str) -> Result<PackageId> {
            StandardCorePackage.create_package(graph, name)
        }

        fn create_model(&self, graph: &mut ModelGraph, name: &str) -> Result<ModelId> {
            StandardCorePackage.create_model(graph, name)
        }

        fn create_subsystem(&self, graph: &mut ModelGraph, name: &str) -> Result<SubsystemId> {
            StandardCorePackage.create_subsystem(graph, name)
        }

        fn create_class(&self, graph: &mut ModelGraph, name: &str) -> Result<ClassId> {
            StandardCorePackage.create_class(graph, &format!("{}{}", self.0, name))
        }

        fn create_data_type(&self, graph: &mut ModelGraph, name: &str) -> Result<DataTypeId> {
            StandardCorePackage.create_data_type(graph, name)
        }

        fn create_attribute(&self, graph: &mut ModelGraph, name: &str) -> Result<AttributeId> {
            StandardCorePackage.create_attribute(graph, name)
        }

        fn create_constraint(&self, graph: &mut ModelGraph, name: &str) -> Result<ConstraintId> {
            StandardCorePackage.create_constraint(graph, name)
        }

        fn create_dependency(&self, graph: &mut ModelGraph, name: &str) -> Result<DependencyId> {
            StandardCorePackage.create_dependency(graph, name)
        }

        fn create_stereotype(
            &self,
            graph: &mut ModelGraph,
            name: &str,
            base_class: Option<MetaClass>,
        ) -> Result<StereotypeId> {
            StandardCorePackage.create_stereotype(graph, name, base_class)
        }
    }

    #[test]
    fn test_defaults_registered() {
        let registry = PackageRegistry::with_defaults();
        assert_eq!(registry.len(), CwmPackage::ALL.len());
        assert!(registry.contains(CwmPackage::Relational, StandardRelationalPackage::CLASS_PATH));
        let core = registry
            .create::<dyn CorePackage>(StandardCorePackage::CLASS_PATH)
            .unwrap();
        assert_eq!(core.class_path(), StandardCorePackage::CLASS_PATH);
    }

    #[test]
    fn test_unknown_class_path() {
        let registry = PackageRegistry::with_defaults();
        let err = registry
            .create::<dyn KeyIndexesPackage>("nowhere::Missing")
            .err()
            .unwrap();
        assert!(matches!(
            err,
            CwmError::UnknownImplementation {
                package: CwmPackage::KeyIndexes,
                ..
            }
        ));
        // class path of another package
        assert!(registry
            .create::<dyn KeyIndexesPackage>(StandardCorePackage::CLASS_PATH)
            .is_err());
    }

    #[test]
    fn test_register_custom_implementation() {
        let mut registry = PackageRegistry::new();
        assert!(!registry.register::<dyn CorePackage>("tests::PrefixedCore", || {
            Arc::new(PrefixedCore("Dim"))
        }));
        let core = registry.create::<dyn CorePackage>("tests::PrefixedCore").unwrap();
        let mut g = ModelGraph::new();
        let class = core.create_class(&mut g, "Customer").unwrap();
        assert_eq!(g.name(class).unwrap(), Some("DimCustomer"));
        assert_eq!(registry.class_paths(CwmPackage::Core), vec!["tests::PrefixedCore"]);
        // replacing reports the earlier registration
        assert!(registry.register::<dyn CorePackage>("tests::PrefixedCore", || {
            Arc::new(PrefixedCore("Fact"))
        }));
    }

    #[test]
    fn test_static_entry_point() {
        let relational = <dyn RelationalPackage>::create(StandardRelationalPackage::CLASS_PATH).unwrap();
        let mut g = ModelGraph::new();
        relational.create_table(&mut g, "orders").unwrap();
        assert_eq!(g.len(), 1);

        PackageRegistry::register_global::<dyn CorePackage>("tests::GlobalCore", || {
            Arc::new(PrefixedCore("G"))
        });
        assert!(<dyn CorePackage>::create("tests::GlobalCore").is_ok());
        assert!(PackageRegistry::global().contains(CwmPackage::Core, StandardCorePackage::CLASS_PATH));
    }

    #[test]
    fn test_constructor_may_register_globally() {
        PackageRegistry::register_global::<dyn CorePackage>("tests::SelfRegistering", || {
            PackageRegistry::register_global::<dyn CorePackage>("tests::Registered", || {
                Arc::new(PrefixedCore("R"))
            });
            Arc::new(PrefixedCore("S"))
        });
        let core = <dyn CorePackage>::create("tests::SelfRegistering").unwrap();
        let mut g = ModelGraph::new();
        let class = core.create_class(&mut g, "Order").unwrap();
        assert_eq!(g.name(class).unwrap(), Some("SOrder"));
        assert!(PackageRegistry::global().contains(CwmPackage::Core, "tests::Registered"));
    }
}
