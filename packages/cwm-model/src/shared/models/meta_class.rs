//! CWM meta-class taxonomy
//!
//! The OMG model uses multiple inheritance (a `Subsystem` is both a
//! `Classifier` and a `Package`). The taxonomy is a static table: every
//! meta-class lists its direct parents and `is_kind_of` walks that table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// CWM sub-package that defines a meta-class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CwmPackage {
    Core,
    Behavioral,
    Relationships,
    Instance,
    KeyIndexes,
    SoftwareDeployment,
    TypeMapping,
    DataTypes,
    Relational,
}

impl CwmPackage {
    pub const ALL: &'static [CwmPackage] = &[
        CwmPackage::Core,
        CwmPackage::Behavioral,
        CwmPackage::Relationships,
        CwmPackage::Instance,
        CwmPackage::KeyIndexes,
        CwmPackage::SoftwareDeployment,
        CwmPackage::TypeMapping,
        CwmPackage::DataTypes,
        CwmPackage::Relational,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::Behavioral => "Behavioral",
            Self::Relationships => "Relationships",
            Self::Instance => "Instance",
            Self::KeyIndexes => "KeyIndexes",
            Self::SoftwareDeployment => "SoftwareDeployment",
            Self::TypeMapping => "TypeMapping",
            Self::DataTypes => "DataTypes",
            Self::Relational => "Relational",
        }
    }

    /// CWM layer the package belongs to
    pub fn layer(&self) -> &'static str {
        match self {
            Self::Core | Self::Behavioral | Self::Relationships | Self::Instance => "ObjectModel",
            Self::KeyIndexes | Self::SoftwareDeployment | Self::TypeMapping | Self::DataTypes => {
                "Foundation"
            }
            Self::Relational => "Resource",
        }
    }
}

impl fmt::Display for CwmPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every meta-class of the supported CWM packages, abstract ones included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetaClass {
    // ObjectModel::Core
    ModelElement,
    Namespace,
    Package,
    Model,
    Subsystem,
    Classifier,
    Class,
    DataType,
    Feature,
    StructuralFeature,
    Attribute,
    Constraint,
    Dependency,
    Stereotype,

    // ObjectModel::Behavioral
    BehavioralFeature,
    Operation,
    Method,
    Parameter,
    Interface,
    Event,

    // ObjectModel::Relationships
    Association,
    AssociationEnd,
    Generalization,

    // ObjectModel::Instance
    Instance,
    Object,
    DataValue,
    Slot,
    Extent,

    // Foundation::KeyIndexes
    UniqueKey,
    KeyRelationship,
    Index,
    IndexedFeature,

    // Foundation::SoftwareDeployment
    Site,
    Machine,
    SoftwareSystem,
    DeployedSoftwareSystem,
    Component,
    DeployedComponent,
    DataManager,
    DataProvider,
    ProviderConnection,

    // Foundation::TypeMapping
    TypeSystem,
    TypeMapping,

    // Foundation::DataTypes
    Enumeration,
    EnumerationLiteral,
    TypeAlias,
    Union,
    UnionMember,

    // Resource::Relational
    Catalog,
    Schema,
    ColumnSet,
    NamedColumnSet,
    Table,
    View,
    Column,
    SqlSimpleType,
    SqlDistinctType,
    UniqueConstraint,
    PrimaryKey,
    ForeignKey,
    SqlIndex,
    SqlIndexColumn,
    CheckConstraint,
}

use MetaClass::*;

impl MetaClass {
    pub const ALL: &'static [MetaClass] = &[
        ModelElement,
        Namespace,
        Package,
        Model,
        Subsystem,
        Classifier,
        Class,
        DataType,
        Feature,
        StructuralFeature,
        Attribute,
        Constraint,
        Dependency,
        Stereotype,
        BehavioralFeature,
        Operation,
        Method,
        Parameter,
        Interface,
        Event,
        Association,
        AssociationEnd,
        Generalization,
        Instance,
        Object,
        DataValue,
        Slot,
        Extent,
        UniqueKey,
        KeyRelationship,
        Index,
        IndexedFeature,
        Site,
        Machine,
        SoftwareSystem,
        DeployedSoftwareSystem,
        Component,
        DeployedComponent,
        DataManager,
        DataProvider,
        ProviderConnection,
        TypeSystem,
        TypeMapping,
        Enumeration,
        EnumerationLiteral,
        TypeAlias,
        Union,
        UnionMember,
        Catalog,
        Schema,
        ColumnSet,
        NamedColumnSet,
        Table,
        View,
        Column,
        SqlSimpleType,
        SqlDistinctType,
        UniqueConstraint,
        PrimaryKey,
        ForeignKey,
        SqlIndex,
        SqlIndexColumn,
        CheckConstraint,
    ];

    /// Direct super-classes
    pub fn parents(self) -> &'static [MetaClass] {
        match self {
            ModelElement => &[],
            Namespace => &[ModelElement],
            Package => &[Namespace],
            Model => &[Package],
            Subsystem => &[Classifier, Package],
            Classifier => &[Namespace],
            Class => &[Classifier],
            DataType => &[Classifier],
            Feature => &[ModelElement],
            StructuralFeature => &[Feature],
            Attribute => &[StructuralFeature],
            Constraint | Dependency | Stereotype => &[ModelElement],

            BehavioralFeature => &[Feature],
            Operation | Method => &[BehavioralFeature],
            Parameter | Event => &[ModelElement],
            Interface => &[Classifier],

            Association => &[Class],
            AssociationEnd => &[StructuralFeature],
            Generalization => &[ModelElement],

            Instance => &[ModelElement],
            Object | DataValue => &[Instance],
            Slot => &[ModelElement],
            Extent => &[Package],

            UniqueKey | KeyRelationship | Index | IndexedFeature => &[ModelElement],

            Site => &[ModelElement],
            Machine => &[Namespace],
            SoftwareSystem => &[Subsystem],
            DeployedSoftwareSystem => &[Package],
            Component => &[Classifier],
            DeployedComponent => &[Package],
            DataManager => &[DeployedComponent],
            DataProvider => &[DataManager],
            ProviderConnection => &[ModelElement],

            TypeSystem => &[Package],
            TypeMapping => &[ModelElement],

            Enumeration => &[DataType],
            EnumerationLiteral => &[ModelElement],
            TypeAlias => &[DataType],
            Union => &[Classifier],
            UnionMember => &[Attribute],

            Catalog | Schema => &[Package],
            ColumnSet => &[Class],
            NamedColumnSet => &[ColumnSet],
            Table | View => &[NamedColumnSet],
            Column => &[Attribute],
            SqlSimpleType => &[DataType],
            SqlDistinctType => &[TypeAlias],
            UniqueConstraint => &[UniqueKey],
            PrimaryKey => &[UniqueConstraint],
            ForeignKey => &[KeyRelationship],
            SqlIndex => &[Index],
            SqlIndexColumn => &[IndexedFeature],
            CheckConstraint => &[Constraint],
        }
    }

    /// `true` when `self` is `other` or inherits from it
    pub fn is_kind_of(self, other: MetaClass) -> bool {
        self == other || self.parents().iter().any(|p| p.is_kind_of(other))
    }

    /// Abstract meta-classes cannot be instantiated
    pub fn is_abstract(self) -> bool {
        matches!(
            self,
            ModelElement
                | Namespace
                | Classifier
                | Feature
                | StructuralFeature
                | BehavioralFeature
                | Instance
                | ColumnSet
                | NamedColumnSet
        )
    }

    /// Every (transitive) super-class, nearest first, without duplicates
    pub fn ancestors(self) -> Vec<MetaClass> {
        let mut out = Vec::new();
        let mut queue: Vec<MetaClass> = self.parents().to_vec();
        while !queue.is_empty() {
            let next = queue.remove(0);
            if !out.contains(&next) {
                out.push(next);
                queue.extend_from_slice(next.parents());
            }
        }
        out
    }

    pub fn package(self) -> CwmPackage {
        match self {
            ModelElement | Namespace | Package | Model | Subsystem | Classifier | Class
            | DataType | Feature | StructuralFeature | Attribute | Constraint | Dependency
            | Stereotype => CwmPackage::Core,
            BehavioralFeature | Operation | Method | Parameter | Interface | Event => {
                CwmPackage::Behavioral
            }
            Association | AssociationEnd | Generalization => CwmPackage::Relationships,
            Instance | Object | DataValue | Slot | Extent => CwmPackage::Instance,
            UniqueKey | KeyRelationship | Index | IndexedFeature => CwmPackage::KeyIndexes,
            Site | Machine | SoftwareSystem | DeployedSoftwareSystem | Component
            | DeployedComponent | DataManager | DataProvider | ProviderConnection => {
                CwmPackage::SoftwareDeployment
            }
            TypeSystem | TypeMapping => CwmPackage::TypeMapping,
            Enumeration | EnumerationLiteral | TypeAlias | Union | UnionMember => {
                CwmPackage::DataTypes
            }
            Catalog | Schema | ColumnSet | NamedColumnSet | Table | View | Column
            | SqlSimpleType | SqlDistinctType | UniqueConstraint | PrimaryKey | ForeignKey
            | SqlIndex | SqlIndexColumn | CheckConstraint => CwmPackage::Relational,
        }
    }

    /// OMG name of the meta-class
    pub fn as_str(self) -> &'static str {
        match self {
            ModelElement => "ModelElement",
            Namespace => "Namespace",
            Package => "Package",
            Model => "Model",
            Subsystem => "Subsystem",
            Classifier => "Classifier",
            Class => "Class",
            DataType => "DataType",
            Feature => "Feature",
            StructuralFeature => "StructuralFeature",
            Attribute => "Attribute",
            Constraint => "Constraint",
            Dependency => "Dependency",
            Stereotype => "Stereotype",
            BehavioralFeature => "BehavioralFeature",
            Operation => "Operation",
            Method => "Method",
            Parameter => "Parameter",
            Interface => "Interface",
            Event => "Event",
            Association => "Association",
            AssociationEnd => "AssociationEnd",
            Generalization => "Generalization",
            Instance => "Instance",
            Object => "Object",
            DataValue => "DataValue",
            Slot => "Slot",
            Extent => "Extent",
            UniqueKey => "UniqueKey",
            KeyRelationship => "KeyRelationship",
            Index => "Index",
            IndexedFeature => "IndexedFeature",
            Site => "Site",
            Machine => "Machine",
            SoftwareSystem => "SoftwareSystem",
            DeployedSoftwareSystem => "DeployedSoftwareSystem",
            Component => "Component",
            DeployedComponent => "DeployedComponent",
            DataManager => "DataManager",
            DataProvider => "DataProvider",
            ProviderConnection => "ProviderConnection",
            TypeSystem => "TypeSystem",
            TypeMapping => "TypeMapping",
            Enumeration => "Enumeration",
            EnumerationLiteral => "EnumerationLiteral",
            TypeAlias => "TypeAlias",
            Union => "Union",
            UnionMember => "UnionMember",
            Catalog => "Catalog",
            Schema => "Schema",
            ColumnSet => "ColumnSet",
            NamedColumnSet => "NamedColumnSet",
            Table => "Table",
            View => "View",
            Column => "Column",
            SqlSimpleType => "SQLSimpleType",
            SqlDistinctType => "SQLDistinctType",
            UniqueConstraint => "UniqueConstraint",
            PrimaryKey => "PrimaryKey",
            ForeignKey => "ForeignKey",
            SqlIndex => "SQLIndex",
            SqlIndexColumn => "SQLIndexColumn",
            CheckConstraint => "CheckConstraint",
        }
    }

    /// Look up a meta-class by its OMG name (case-insensitive)
    pub fn from_name(name: &str) -> Option<MetaClass> {
        Self::ALL
            .iter()
            .copied()
            .find(|mc| mc.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for MetaClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_inheritance_chain() {
        assert!(PrimaryKey.is_kind_of(UniqueConstraint));
        assert!(PrimaryKey.is_kind_of(UniqueKey));
        assert!(PrimaryKey.is_kind_of(ModelElement));
        assert!(!PrimaryKey.is_kind_of(Classifier));
    }

    #[test]
    fn test_multiple_inheritance() {
        assert!(Subsystem.is_kind_of(Classifier));
        assert!(Subsystem.is_kind_of(Package));
        assert!(SoftwareSystem.is_kind_of(Package));
        assert!(SoftwareSystem.is_kind_of(Namespace));
    }

    #[test]
    fn test_ancestors_deduplicated() {
        let ancestors = Subsystem.ancestors();
        assert_eq!(ancestors[0], Classifier);
        assert_eq!(ancestors[1], Package);
        assert_eq!(
            ancestors.iter().filter(|mc| **mc == Namespace).count(),
            1,
            "Namespace reachable through both parents must appear once"
        );
        assert!(ancestors.contains(&ModelElement));
    }

    #[test]
    fn test_table_is_a_class() {
        assert!(Table.is_kind_of(Class));
        assert!(Table.is_kind_of(Classifier));
        assert!(Column.is_kind_of(Attribute));
        assert!(Column.is_kind_of(StructuralFeature));
    }

    #[test]
    fn test_abstract_classes() {
        assert!(Classifier.is_abstract());
        assert!(NamedColumnSet.is_abstract());
        assert!(!Class.is_abstract());
        assert!(!Table.is_abstract());
    }

    #[test]
    fn test_every_meta_class_reaches_model_element() {
        for mc in MetaClass::ALL {
            assert!(mc.is_kind_of(ModelElement), "{} is not a ModelElement", mc);
        }
    }

    #[test]
    fn test_name_roundtrip() {
        for mc in MetaClass::ALL {
            assert_eq!(MetaClass::from_name(mc.as_str()), Some(*mc));
        }
        assert_eq!(MetaClass::from_name("sqlindex"), Some(SqlIndex));
        assert_eq!(MetaClass::from_name("Widget"), None);
    }

    #[test]
    fn test_packages_and_layers() {
        assert_eq!(Index.package(), CwmPackage::KeyIndexes);
        assert_eq!(Index.package().layer(), "Foundation");
        assert_eq!(Table.package().layer(), "Resource");
        assert_eq!(Slot.package().layer(), "ObjectModel");
    }
}
