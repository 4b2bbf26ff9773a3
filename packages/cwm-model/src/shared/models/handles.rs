//! Typed element handles
//!
//! One `Copy` newtype over [`ElementId`] per meta-class. Role traits encode
//! the CWM generalization hierarchy at compile time: a `TableId` is a
//! [`ClassifierRef`] (and may own features) while an `IndexId` is not.
//!
//! Abstract handles (`ClassifierId`, `StructuralFeatureId`, ...) are obtained
//! by upcasting (`From` or the `as_*` role methods); going the other way is a
//! checked [`ModelGraph::downcast`](crate::graph::ModelGraph::downcast).

use std::fmt::Debug;

use super::id::ElementId;
use super::meta_class::MetaClass;

/// Base role of every handle
pub trait ModelElementRef: Copy + Debug {
    /// Most general meta-class the handle may refer to
    const META_CLASS: MetaClass;

    fn element_id(self) -> ElementId;

    /// Wrap an id without checking its meta-class
    #[doc(hidden)]
    fn from_element_id(id: ElementId) -> Self;
}

impl ModelElementRef for ElementId {
    const META_CLASS: MetaClass = MetaClass::ModelElement;

    fn element_id(self) -> ElementId {
        self
    }

    fn from_element_id(id: ElementId) -> Self {
        id
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Role traits
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! role {
    ($(#[$doc:meta])* $role:ident $(: $($sup:ident),+)? => $method:ident -> $handle:ident) => {
        $(#[$doc])*
        pub trait $role: ModelElementRef $($(+ $sup)+)? {
            fn $method(self) -> $handle {
                $handle::from_element_id(self.element_id())
            }
        }
    };
}

role!(
    /// Elements that own other elements
    NamespaceRef => as_namespace -> NamespaceId
);
role!(PackageRef: NamespaceRef => as_package -> PackageId);
role!(
    /// Namespaces with features and generalizations
    ClassifierRef: NamespaceRef => as_classifier -> ClassifierId
);
role!(ClassRef: ClassifierRef => as_class -> ClassId);
role!(DataTypeRef: ClassifierRef => as_data_type -> DataTypeId);
role!(TypeAliasRef: DataTypeRef => as_type_alias -> TypeAliasId);
role!(SubsystemRef: ClassifierRef, PackageRef => as_subsystem -> SubsystemId);
role!(ColumnSetRef: ClassRef => as_column_set -> ColumnSetId);
role!(FeatureRef => as_feature -> FeatureId);
role!(StructuralFeatureRef: FeatureRef => as_structural_feature -> StructuralFeatureId);
role!(AttributeRef: StructuralFeatureRef => as_attribute -> AttributeId);
role!(BehavioralFeatureRef: FeatureRef => as_behavioral_feature -> BehavioralFeatureId);
role!(InstanceRef => as_instance -> InstanceId);
role!(ConstraintRef => as_constraint -> ConstraintId);
role!(UniqueKeyRef => as_unique_key -> UniqueKeyId);
role!(KeyRelationshipRef => as_key_relationship -> KeyRelationshipId);
role!(IndexRef => as_index -> IndexId);
role!(IndexedFeatureRef => as_indexed_feature -> IndexedFeatureId);
role!(DeployedComponentRef: PackageRef => as_deployed_component -> DeployedComponentId);
role!(DataManagerRef: DeployedComponentRef => as_data_manager -> DataManagerId);

// ═══════════════════════════════════════════════════════════════════════════
// Abstract meta-classes
// ═══════════════════════════════════════════════════════════════════════════

meta_handle!(NamespaceId => Namespace, roles [NamespaceRef]);
meta_handle!(
    ClassifierId => Classifier,
    roles [NamespaceRef, ClassifierRef],
    upcast [NamespaceId]
);
meta_handle!(FeatureId => Feature, roles [FeatureRef]);
meta_handle!(
    StructuralFeatureId => StructuralFeature,
    roles [FeatureRef, StructuralFeatureRef],
    upcast [FeatureId]
);
meta_handle!(
    BehavioralFeatureId => BehavioralFeature,
    roles [FeatureRef, BehavioralFeatureRef],
    upcast [FeatureId]
);
meta_handle!(InstanceId => Instance, roles [InstanceRef]);
meta_handle!(
    ColumnSetId => ColumnSet,
    roles [NamespaceRef, ClassifierRef, ClassRef, ColumnSetRef],
    upcast [NamespaceId, ClassifierId, ClassId]
);
meta_handle!(
    NamedColumnSetId => NamedColumnSet,
    roles [NamespaceRef, ClassifierRef, ClassRef, ColumnSetRef],
    upcast [NamespaceId, ClassifierId, ClassId, ColumnSetId]
);

// ═══════════════════════════════════════════════════════════════════════════
// ObjectModel::Core
// ═══════════════════════════════════════════════════════════════════════════

meta_handle!(
    PackageId => Package,
    roles [NamespaceRef, PackageRef],
    upcast [NamespaceId]
);
meta_handle!(
    ModelId => Model,
    roles [NamespaceRef, PackageRef],
    upcast [NamespaceId, PackageId]
);
meta_handle!(
    /// A classifier that is also a package
    SubsystemId => Subsystem,
    roles [NamespaceRef, PackageRef, ClassifierRef, SubsystemRef],
    upcast [NamespaceId, PackageId, ClassifierId]
);
meta_handle!(
    ClassId => Class,
    roles [NamespaceRef, ClassifierRef, ClassRef],
    upcast [NamespaceId, ClassifierId]
);
meta_handle!(
    DataTypeId => DataType,
    roles [NamespaceRef, ClassifierRef, DataTypeRef],
    upcast [NamespaceId, ClassifierId]
);
meta_handle!(
    AttributeId => Attribute,
    roles [FeatureRef, StructuralFeatureRef, AttributeRef],
    upcast [FeatureId, StructuralFeatureId]
);
meta_handle!(ConstraintId => Constraint, roles [ConstraintRef]);
meta_handle!(DependencyId => Dependency);
meta_handle!(StereotypeId => Stereotype);

// ═══════════════════════════════════════════════════════════════════════════
// ObjectModel::Behavioral
// ═══════════════════════════════════════════════════════════════════════════

meta_handle!(
    OperationId => Operation,
    roles [FeatureRef, BehavioralFeatureRef],
    upcast [FeatureId, BehavioralFeatureId]
);
meta_handle!(
    MethodId => Method,
    roles [FeatureRef, BehavioralFeatureRef],
    upcast [FeatureId, BehavioralFeatureId]
);
meta_handle!(ParameterId => Parameter);
meta_handle!(
    InterfaceId => Interface,
    roles [NamespaceRef, ClassifierRef],
    upcast [NamespaceId, ClassifierId]
);
meta_handle!(EventId => Event);

// ═══════════════════════════════════════════════════════════════════════════
// ObjectModel::Relationships
// ═══════════════════════════════════════════════════════════════════════════

meta_handle!(
    AssociationId => Association,
    roles [NamespaceRef, ClassifierRef, ClassRef],
    upcast [NamespaceId, ClassifierId, ClassId]
);
meta_handle!(
    AssociationEndId => AssociationEnd,
    roles [FeatureRef, StructuralFeatureRef],
    upcast [FeatureId, StructuralFeatureId]
);
meta_handle!(GeneralizationId => Generalization);

// ═══════════════════════════════════════════════════════════════════════════
// ObjectModel::Instance
// ═══════════════════════════════════════════════════════════════════════════

meta_handle!(
    /// Instance of a class (`CwmObject`)
    ObjectId => Object,
    roles [InstanceRef],
    upcast [InstanceId]
);
meta_handle!(DataValueId => DataValue, roles [InstanceRef], upcast [InstanceId]);
meta_handle!(SlotId => Slot);
meta_handle!(
    ExtentId => Extent,
    roles [NamespaceRef, PackageRef],
    upcast [NamespaceId, PackageId]
);

// ═══════════════════════════════════════════════════════════════════════════
// Foundation::KeyIndexes
// ═══════════════════════════════════════════════════════════════════════════

meta_handle!(UniqueKeyId => UniqueKey, roles [UniqueKeyRef]);
meta_handle!(KeyRelationshipId => KeyRelationship, roles [KeyRelationshipRef]);
meta_handle!(IndexId => Index, roles [IndexRef]);
meta_handle!(IndexedFeatureId => IndexedFeature, roles [IndexedFeatureRef]);

// ═══════════════════════════════════════════════════════════════════════════
// Foundation::SoftwareDeployment
// ═══════════════════════════════════════════════════════════════════════════

meta_handle!(SiteId => Site);
meta_handle!(MachineId => Machine, roles [NamespaceRef], upcast [NamespaceId]);
meta_handle!(
    SoftwareSystemId => SoftwareSystem,
    roles [NamespaceRef, PackageRef, ClassifierRef, SubsystemRef],
    upcast [NamespaceId, PackageId, ClassifierId, SubsystemId]
);
meta_handle!(
    DeployedSoftwareSystemId => DeployedSoftwareSystem,
    roles [NamespaceRef, PackageRef],
    upcast [NamespaceId, PackageId]
);
meta_handle!(
    ComponentId => Component,
    roles [NamespaceRef, ClassifierRef],
    upcast [NamespaceId, ClassifierId]
);
meta_handle!(
    DeployedComponentId => DeployedComponent,
    roles [NamespaceRef, PackageRef, DeployedComponentRef],
    upcast [NamespaceId, PackageId]
);
meta_handle!(
    DataManagerId => DataManager,
    roles [NamespaceRef, PackageRef, DeployedComponentRef, DataManagerRef],
    upcast [NamespaceId, PackageId, DeployedComponentId]
);
meta_handle!(
    DataProviderId => DataProvider,
    roles [NamespaceRef, PackageRef, DeployedComponentRef, DataManagerRef],
    upcast [NamespaceId, PackageId, DeployedComponentId, DataManagerId]
);
meta_handle!(ProviderConnectionId => ProviderConnection);

// ═══════════════════════════════════════════════════════════════════════════
// Foundation::TypeMapping
// ═══════════════════════════════════════════════════════════════════════════

meta_handle!(
    TypeSystemId => TypeSystem,
    roles [NamespaceRef, PackageRef],
    upcast [NamespaceId, PackageId]
);
meta_handle!(TypeMappingId => TypeMapping);

// ═══════════════════════════════════════════════════════════════════════════
// Foundation::DataTypes
// ═══════════════════════════════════════════════════════════════════════════

meta_handle!(
    EnumerationId => Enumeration,
    roles [NamespaceRef, ClassifierRef, DataTypeRef],
    upcast [NamespaceId, ClassifierId, DataTypeId]
);
meta_handle!(EnumerationLiteralId => EnumerationLiteral);
meta_handle!(
    TypeAliasId => TypeAlias,
    roles [NamespaceRef, ClassifierRef, DataTypeRef, TypeAliasRef],
    upcast [NamespaceId, ClassifierId, DataTypeId]
);
meta_handle!(
    UnionId => Union,
    roles [NamespaceRef, ClassifierRef],
    upcast [NamespaceId, ClassifierId]
);
meta_handle!(
    UnionMemberId => UnionMember,
    roles [FeatureRef, StructuralFeatureRef, AttributeRef],
    upcast [FeatureId, StructuralFeatureId, AttributeId]
);

// ═══════════════════════════════════════════════════════════════════════════
// Resource::Relational
// ═══════════════════════════════════════════════════════════════════════════

meta_handle!(
    CatalogId => Catalog,
    roles [NamespaceRef, PackageRef],
    upcast [NamespaceId, PackageId]
);
meta_handle!(
    SchemaId => Schema,
    roles [NamespaceRef, PackageRef],
    upcast [NamespaceId, PackageId]
);
meta_handle!(
    TableId => Table,
    roles [NamespaceRef, ClassifierRef, ClassRef, ColumnSetRef],
    upcast [NamespaceId, ClassifierId, ClassId, ColumnSetId, NamedColumnSetId]
);
meta_handle!(
    ViewId => View,
    roles [NamespaceRef, ClassifierRef, ClassRef, ColumnSetRef],
    upcast [NamespaceId, ClassifierId, ClassId, ColumnSetId, NamedColumnSetId]
);
meta_handle!(
    ColumnId => Column,
    roles [FeatureRef, StructuralFeatureRef, AttributeRef],
    upcast [FeatureId, StructuralFeatureId, AttributeId]
);
meta_handle!(
    SqlSimpleTypeId => SqlSimpleType,
    roles [NamespaceRef, ClassifierRef, DataTypeRef],
    upcast [NamespaceId, ClassifierId, DataTypeId]
);
meta_handle!(
    SqlDistinctTypeId => SqlDistinctType,
    roles [NamespaceRef, ClassifierRef, DataTypeRef, TypeAliasRef],
    upcast [NamespaceId, ClassifierId, DataTypeId, TypeAliasId]
);
meta_handle!(
    UniqueConstraintId => UniqueConstraint,
    roles [UniqueKeyRef],
    upcast [UniqueKeyId]
);
meta_handle!(
    PrimaryKeyId => PrimaryKey,
    roles [UniqueKeyRef],
    upcast [UniqueKeyId, UniqueConstraintId]
);
meta_handle!(
    ForeignKeyId => ForeignKey,
    roles [KeyRelationshipRef],
    upcast [KeyRelationshipId]
);
meta_handle!(SqlIndexId => SqlIndex, roles [IndexRef], upcast [IndexId]);
meta_handle!(
    SqlIndexColumnId => SqlIndexColumn,
    roles [IndexedFeatureRef],
    upcast [IndexedFeatureId]
);
meta_handle!(
    CheckConstraintId => CheckConstraint,
    roles [ConstraintRef],
    upcast [ConstraintId]
);
