//! Association descriptors
//!
//! Every bidirectional CWM association is a [`Link`] variant with a static
//! [`LinkSpec`]. The source end is the property held by the source
//! meta-class (`Namespace.ownedElement`), the target end the inverse property
//! held by the target meta-class (`ModelElement.namespace`). A composite link
//! makes the source the owner of the target.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::meta_class::MetaClass;

/// Which end of a link an element sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Source,
    Target,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Source => Side::Target,
            Side::Target => Side::Source,
        }
    }
}

/// Upper bound of an association end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upper {
    One,
    Many,
}

/// One end of an association
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndSpec {
    /// Meta-class holding the property
    pub holder: MetaClass,
    /// OMG property name
    pub role: &'static str,
    pub upper: Upper,
    pub ordered: bool,
}

impl EndSpec {
    const fn new(holder: MetaClass, role: &'static str, upper: Upper, ordered: bool) -> Self {
        Self {
            holder,
            role,
            upper,
            ordered,
        }
    }

    pub fn is_single(&self) -> bool {
        self.upper == Upper::One
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSpec {
    pub source: EndSpec,
    pub target: EndSpec,
    pub composite: bool,
}

impl LinkSpec {
    pub fn end(&self, side: Side) -> &EndSpec {
        match side {
            Side::Source => &self.source,
            Side::Target => &self.target,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Link {
    // ObjectModel::Core
    ElementOwnership,
    ImportedElements,
    ClassifierFeature,
    StructuralFeatureType,
    DependencyClient,
    DependencySupplier,
    ElementConstraint,
    StereotypedElement,

    // ObjectModel::Behavioral
    BehavioralFeatureParameter,
    EventParameter,
    ParameterType,
    OperationMethod,

    // ObjectModel::Relationships
    GeneralizationChild,
    GeneralizationParent,

    // ObjectModel::Instance
    InstanceClassifier,
    ObjectSlot,
    SlotValue,
    FeatureSlot,

    // Foundation::KeyIndexes
    UniqueFeature,
    KeyRelationshipFeature,
    UniqueKeyRelationship,
    IndexedFeatures,
    IndexedFeatureInfo,
    IndexSpansClass,

    // Foundation::SoftwareDeployment
    MachineSite,
    ComponentsOnMachine,
    ComponentDeployment,
    SoftwareSystemDeployment,
    SystemComponents,
    DataProviderConnection,
    DataManagerConnection,

    // Foundation::TypeMapping
    MappingSource,
    MappingTarget,

    // Foundation::DataTypes
    EnumerationLiterals,
    ClassifierAlias,
    DiscriminatedUnion,

    // Resource::Relational
    DistinctTypeSimpleType,
}

use MetaClass as M;
use Upper::{Many, One};

const fn spec(source: EndSpec, target: EndSpec, composite: bool) -> LinkSpec {
    LinkSpec {
        source,
        target,
        composite,
    }
}

const fn one(holder: MetaClass, role: &'static str) -> EndSpec {
    EndSpec::new(holder, role, One, false)
}

const fn many(holder: MetaClass, role: &'static str) -> EndSpec {
    EndSpec::new(holder, role, Many, false)
}

const fn ordered(holder: MetaClass, role: &'static str) -> EndSpec {
    EndSpec::new(holder, role, Many, true)
}

impl Link {
    pub const ALL: &'static [Link] = &[
        Link::ElementOwnership,
        Link::ImportedElements,
        Link::ClassifierFeature,
        Link::StructuralFeatureType,
        Link::DependencyClient,
        Link::DependencySupplier,
        Link::ElementConstraint,
        Link::StereotypedElement,
        Link::BehavioralFeatureParameter,
        Link::EventParameter,
        Link::ParameterType,
        Link::OperationMethod,
        Link::GeneralizationChild,
        Link::GeneralizationParent,
        Link::InstanceClassifier,
        Link::ObjectSlot,
        Link::SlotValue,
        Link::FeatureSlot,
        Link::UniqueFeature,
        Link::KeyRelationshipFeature,
        Link::UniqueKeyRelationship,
        Link::IndexedFeatures,
        Link::IndexedFeatureInfo,
        Link::IndexSpansClass,
        Link::MachineSite,
        Link::ComponentsOnMachine,
        Link::ComponentDeployment,
        Link::SoftwareSystemDeployment,
        Link::SystemComponents,
        Link::DataProviderConnection,
        Link::DataManagerConnection,
        Link::MappingSource,
        Link::MappingTarget,
        Link::EnumerationLiterals,
        Link::ClassifierAlias,
        Link::DiscriminatedUnion,
        Link::DistinctTypeSimpleType,
    ];

    pub fn spec(self) -> LinkSpec {
        match self {
            Link::ElementOwnership => spec(
                many(M::Namespace, "ownedElement"),
                one(M::ModelElement, "namespace"),
                true,
            ),
            Link::ImportedElements => spec(
                many(M::Package, "importedElement"),
                many(M::ModelElement, "importer"),
                false,
            ),
            Link::ClassifierFeature => spec(
                ordered(M::Classifier, "feature"),
                one(M::Feature, "owner"),
                true,
            ),
            Link::StructuralFeatureType => spec(
                one(M::StructuralFeature, "type"),
                many(M::Classifier, "structuralFeature"),
                false,
            ),
            Link::DependencyClient => spec(
                many(M::Dependency, "client"),
                many(M::ModelElement, "clientDependency"),
                false,
            ),
            Link::DependencySupplier => spec(
                many(M::Dependency, "supplier"),
                many(M::ModelElement, "supplierDependency"),
                false,
            ),
            Link::ElementConstraint => spec(
                ordered(M::Constraint, "constrainedElement"),
                many(M::ModelElement, "constraint"),
                false,
            ),
            Link::StereotypedElement => spec(
                many(M::Stereotype, "extendedElement"),
                one(M::ModelElement, "stereotype"),
                false,
            ),
            Link::BehavioralFeatureParameter => spec(
                ordered(M::BehavioralFeature, "parameter"),
                one(M::Parameter, "behavioralFeature"),
                true,
            ),
            Link::EventParameter => spec(
                ordered(M::Event, "parameter"),
                one(M::Parameter, "event"),
                true,
            ),
            Link::ParameterType => spec(
                one(M::Parameter, "type"),
                many(M::Classifier, "parameter"),
                false,
            ),
            Link::OperationMethod => spec(
                many(M::Operation, "method"),
                one(M::Method, "specification"),
                false,
            ),
            Link::GeneralizationChild => spec(
                one(M::Generalization, "child"),
                many(M::Classifier, "generalization"),
                false,
            ),
            Link::GeneralizationParent => spec(
                one(M::Generalization, "parent"),
                many(M::Classifier, "specialization"),
                false,
            ),
            Link::InstanceClassifier => spec(
                one(M::Instance, "classifier"),
                many(M::Classifier, "instance"),
                false,
            ),
            Link::ObjectSlot => spec(many(M::Object, "slot"), one(M::Slot, "object"), true),
            Link::SlotValue => spec(
                one(M::Slot, "value"),
                many(M::Instance, "valueSlot"),
                false,
            ),
            Link::FeatureSlot => spec(
                one(M::Slot, "feature"),
                many(M::StructuralFeature, "slot"),
                false,
            ),
            Link::UniqueFeature => spec(
                ordered(M::UniqueKey, "feature"),
                many(M::StructuralFeature, "uniqueKey"),
                false,
            ),
            Link::KeyRelationshipFeature => spec(
                ordered(M::KeyRelationship, "feature"),
                many(M::StructuralFeature, "keyRelationship"),
                false,
            ),
            Link::UniqueKeyRelationship => spec(
                one(M::KeyRelationship, "uniqueKey"),
                many(M::UniqueKey, "keyRelationship"),
                false,
            ),
            Link::IndexedFeatures => spec(
                ordered(M::Index, "indexedFeature"),
                one(M::IndexedFeature, "index"),
                true,
            ),
            Link::IndexedFeatureInfo => spec(
                one(M::IndexedFeature, "feature"),
                many(M::StructuralFeature, "indexedFeature"),
                false,
            ),
            Link::IndexSpansClass => spec(
                one(M::Index, "spannedClass"),
                many(M::Class, "index"),
                false,
            ),
            Link::MachineSite => spec(one(M::Machine, "site"), many(M::Site, "machine"), false),
            Link::ComponentsOnMachine => spec(
                many(M::Machine, "deployedComponent"),
                one(M::DeployedComponent, "machine"),
                false,
            ),
            Link::ComponentDeployment => spec(
                one(M::DeployedComponent, "component"),
                many(M::Component, "deployment"),
                false,
            ),
            Link::SoftwareSystemDeployment => spec(
                one(M::DeployedSoftwareSystem, "softwareSystem"),
                many(M::SoftwareSystem, "deployment"),
                false,
            ),
            Link::SystemComponents => spec(
                many(M::DeployedSoftwareSystem, "deployedComponent"),
                many(M::DeployedComponent, "deployedSoftwareSystem"),
                false,
            ),
            Link::DataProviderConnection => spec(
                many(M::DataProvider, "resourceConnection"),
                one(M::ProviderConnection, "dataProvider"),
                false,
            ),
            Link::DataManagerConnection => spec(
                many(M::DataManager, "clientConnection"),
                one(M::ProviderConnection, "dataManager"),
                false,
            ),
            Link::MappingSource => spec(
                one(M::TypeMapping, "sourceType"),
                many(M::Classifier, "mappingFrom"),
                false,
            ),
            Link::MappingTarget => spec(
                one(M::TypeMapping, "targetType"),
                many(M::Classifier, "mappingTo"),
                false,
            ),
            Link::EnumerationLiterals => spec(
                ordered(M::Enumeration, "literal"),
                one(M::EnumerationLiteral, "enumeration"),
                true,
            ),
            Link::ClassifierAlias => spec(
                one(M::TypeAlias, "type"),
                many(M::Classifier, "alias"),
                false,
            ),
            Link::DiscriminatedUnion => spec(
                one(M::Union, "discriminator"),
                many(M::StructuralFeature, "discriminatedUnion"),
                false,
            ),
            Link::DistinctTypeSimpleType => spec(
                one(M::SqlDistinctType, "sqlSimpleType"),
                many(M::SqlSimpleType, "sqlDistinctType"),
                false,
            ),
        }
    }

    pub fn is_composite(self) -> bool {
        self.spec().composite
    }

    /// Composite links, in declaration order
    pub fn composites() -> impl Iterator<Item = Link> {
        Self::ALL.iter().copied().filter(|l| l.is_composite())
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = self.spec();
        write!(
            f,
            "{}.{} / {}.{}",
            spec.source.holder, spec.source.role, spec.target.holder, spec.target.role
        )
    }
}

/// Key of an element's reference list: one end of one link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LinkEnd {
    pub link: Link,
    pub side: Side,
}

impl LinkEnd {
    pub fn new(link: Link, side: Side) -> Self {
        Self { link, side }
    }

    pub fn source(link: Link) -> Self {
        Self::new(link, Side::Source)
    }

    pub fn target(link: Link) -> Self {
        Self::new(link, Side::Target)
    }

    pub fn opposite(self) -> Self {
        Self::new(self.link, self.side.opposite())
    }

    pub fn spec(self) -> EndSpec {
        *self.link.spec().end(self.side)
    }
}

impl fmt::Display for LinkEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = self.spec();
        write!(f, "{}.{}", end.holder, end.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_links_listed() {
        assert_eq!(Link::ALL.len(), 37);
        let mut sorted = Link::ALL.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 37);
    }

    #[test]
    fn test_composite_links_have_single_owner_end() {
        for link in Link::composites() {
            assert!(
                link.spec().target.is_single(),
                "{:?} owns parts through a multi-valued end",
                link
            );
        }
        assert_eq!(Link::composites().count(), 7);
    }

    #[test]
    fn test_ordered_ends_are_multi_valued() {
        for link in Link::ALL {
            for side in [Side::Source, Side::Target] {
                let end = LinkEnd::new(*link, side).spec();
                if end.ordered {
                    assert_eq!(end.upper, Upper::Many);
                }
            }
        }
    }

    #[test]
    fn test_holders_are_not_leaf_only() {
        let spec = Link::ClassifierFeature.spec();
        assert!(MetaClass::Table.is_kind_of(spec.source.holder));
        assert!(MetaClass::Column.is_kind_of(spec.target.holder));
        assert!(!MetaClass::Index.is_kind_of(spec.source.holder));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            LinkEnd::target(Link::ElementOwnership).to_string(),
            "ModelElement.namespace"
        );
        assert_eq!(
            Link::IndexedFeatures.to_string(),
            "Index.indexedFeature / IndexedFeature.index"
        );
    }
}
