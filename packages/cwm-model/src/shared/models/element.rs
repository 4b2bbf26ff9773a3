//! Model element storage
//!
//! An [`Element`] carries the properties of every meta-class it is a kind
//! of. Properties of abstract meta-classes live in facets (`Classifier`,
//! `Feature`, `StructuralFeature`, ...); properties introduced by concrete
//! meta-classes live in [`Props`] (ObjectModel + Foundation) and
//! [`ResourceProps`] (Relational extensions). A `SqlIndex` therefore has
//! `Props::Index` *and* `ResourceProps::SqlIndex`.
//!
//! All facets and props implement [`Facet`], so the graph reads and updates
//! them through one generic accessor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::expression::{BooleanExpression, Expression, ProcedureExpression, QueryExpression};
use super::id::ElementId;
use super::kinds::{
    AggregationKind, ChangeableKind, DeferrabilityType, NullableType, OrderingKind,
    ParameterDirectionKind, ReferentialRuleType, ScopeKind, TaggedValue, VisibilityKind,
};
use super::link::LinkEnd;
use super::meta_class::MetaClass;
use super::multiplicity::Multiplicity;

// ═══════════════════════════════════════════════════════════════════════════
// Facets of abstract meta-classes
// ═══════════════════════════════════════════════════════════════════════════

/// ModelElement properties, present on every element
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoreFacet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub visibility: VisibilityKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tagged_values: Vec<TaggedValue>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassifierFacet {
    pub is_abstract: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureFacet {
    pub owner_scope: ScopeKind,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StructuralFeatureFacet {
    pub changeability: ChangeableKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplicity: Option<Multiplicity>,
    pub ordering: OrderingKind,
    pub target_scope: ScopeKind,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttributeFacet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BehavioralFeatureFacet {
    pub is_query: bool,
}

// ═══════════════════════════════════════════════════════════════════════════
// Concrete meta-class properties
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OperationProps {
    pub is_abstract: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MethodProps {
    pub body: Option<ProcedureExpression>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParameterProps {
    pub default_value: Option<Expression>,
    pub kind: ParameterDirectionKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationEndProps {
    pub aggregation: AggregationKind,
    pub is_navigable: bool,
}

impl Default for AssociationEndProps {
    fn default() -> Self {
        Self {
            aggregation: AggregationKind::None,
            is_navigable: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConstraintProps {
    pub body: Option<BooleanExpression>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DependencyProps {
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StereotypeProps {
    /// OMG name of the meta-class this stereotype extends
    pub base_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataValueProps {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndexProps {
    pub is_partitioning: bool,
    pub is_sorted: bool,
    pub is_unique: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndexedFeatureProps {
    pub is_ascending: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MachineProps {
    pub ip_addresses: Vec<String>,
    pub host_names: Vec<String>,
    pub machine_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SoftwareSystemProps {
    pub system_type: Option<String>,
    pub subtype: Option<String>,
    pub supplier: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeployedComponentProps {
    pub pathname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProviderConnectionProps {
    pub is_read_only: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeMappingProps {
    pub is_best_match: bool,
    pub is_lossy: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnumerationProps {
    pub is_ordered: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnumerationLiteralProps {
    pub value: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UnionMemberProps {
    pub member_case: Option<Expression>,
    pub is_default: bool,
}

/// Properties introduced by a concrete ObjectModel/Foundation meta-class
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum Props {
    #[default]
    None,
    Operation(OperationProps),
    Method(MethodProps),
    Parameter(ParameterProps),
    AssociationEnd(AssociationEndProps),
    Constraint(ConstraintProps),
    Dependency(DependencyProps),
    Stereotype(StereotypeProps),
    DataValue(DataValueProps),
    Index(IndexProps),
    IndexedFeature(IndexedFeatureProps),
    Machine(MachineProps),
    SoftwareSystem(SoftwareSystemProps),
    DeployedComponent(DeployedComponentProps),
    ProviderConnection(ProviderConnectionProps),
    TypeMapping(TypeMappingProps),
    Enumeration(EnumerationProps),
    EnumerationLiteral(EnumerationLiteralProps),
    UnionMember(UnionMemberProps),
}

impl Props {
    /// Default properties of a (concrete) meta-class
    pub fn for_meta_class(meta_class: MetaClass) -> Self {
        use MetaClass as M;
        let is = |mc: MetaClass| meta_class.is_kind_of(mc);

        if is(M::Operation) {
            Props::Operation(Default::default())
        } else if is(M::Method) {
            Props::Method(Default::default())
        } else if is(M::Parameter) {
            Props::Parameter(Default::default())
        } else if is(M::AssociationEnd) {
            Props::AssociationEnd(Default::default())
        } else if is(M::Constraint) {
            Props::Constraint(Default::default())
        } else if is(M::Dependency) {
            Props::Dependency(Default::default())
        } else if is(M::Stereotype) {
            Props::Stereotype(Default::default())
        } else if is(M::DataValue) {
            Props::DataValue(Default::default())
        } else if is(M::Index) {
            Props::Index(Default::default())
        } else if is(M::IndexedFeature) {
            Props::IndexedFeature(Default::default())
        } else if is(M::Machine) {
            Props::Machine(Default::default())
        } else if is(M::SoftwareSystem) {
            Props::SoftwareSystem(Default::default())
        } else if is(M::DeployedComponent) {
            Props::DeployedComponent(Default::default())
        } else if is(M::ProviderConnection) {
            Props::ProviderConnection(Default::default())
        } else if is(M::TypeMapping) {
            Props::TypeMapping(Default::default())
        } else if is(M::Enumeration) {
            Props::Enumeration(Default::default())
        } else if is(M::EnumerationLiteral) {
            Props::EnumerationLiteral(Default::default())
        } else if is(M::UnionMember) {
            Props::UnionMember(Default::default())
        } else {
            Props::None
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Relational extensions
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogProps {
    pub default_character_set_name: Option<String>,
    pub default_collation_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableProps {
    pub is_temporary: bool,
    /// `LOCAL` or `GLOBAL` for temporary tables
    pub temporary_scope: Option<String>,
    pub is_system: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewProps {
    pub is_read_only: bool,
    pub check_option: bool,
    pub query_expression: Option<QueryExpression>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnProps {
    pub precision: Option<i64>,
    pub scale: Option<i64>,
    pub is_nullable: NullableType,
    pub length: Option<i64>,
    pub collation_name: Option<String>,
    pub character_set_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SqlSimpleTypeProps {
    pub type_number: Option<i64>,
    pub character_maximum_length: Option<i64>,
    pub character_octet_length: Option<i64>,
    pub numeric_precision: Option<i64>,
    pub numeric_precision_radix: Option<i64>,
    pub numeric_scale: Option<i64>,
    pub date_time_precision: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SqlDistinctTypeProps {
    pub length: Option<i64>,
    pub precision: Option<i64>,
    pub scale: Option<i64>,
    pub character_set_name: Option<String>,
    pub collation_name: Option<String>,
}

/// Shared by `UniqueConstraint` and `PrimaryKey`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UniqueConstraintProps {
    pub deferrability: DeferrabilityType,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForeignKeyProps {
    pub delete_rule: ReferentialRuleType,
    pub update_rule: ReferentialRuleType,
    pub deferrability: DeferrabilityType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlIndexProps {
    pub filter_condition: Option<String>,
    pub is_nullable: bool,
    pub auto_update: bool,
}

impl Default for SqlIndexProps {
    fn default() -> Self {
        Self {
            filter_condition: None,
            is_nullable: true,
            auto_update: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CheckConstraintProps {
    pub deferrability: DeferrabilityType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum ResourceProps {
    Catalog(CatalogProps),
    Table(TableProps),
    View(ViewProps),
    Column(ColumnProps),
    SqlSimpleType(SqlSimpleTypeProps),
    SqlDistinctType(SqlDistinctTypeProps),
    UniqueConstraint(UniqueConstraintProps),
    ForeignKey(ForeignKeyProps),
    SqlIndex(SqlIndexProps),
    CheckConstraint(CheckConstraintProps),
}

impl ResourceProps {
    pub fn for_meta_class(meta_class: MetaClass) -> Option<Self> {
        use MetaClass as M;
        let is = |mc: MetaClass| meta_class.is_kind_of(mc);

        let props = if is(M::Catalog) {
            ResourceProps::Catalog(Default::default())
        } else if is(M::Table) {
            ResourceProps::Table(Default::default())
        } else if is(M::View) {
            ResourceProps::View(Default::default())
        } else if is(M::Column) {
            ResourceProps::Column(Default::default())
        } else if is(M::SqlSimpleType) {
            ResourceProps::SqlSimpleType(Default::default())
        } else if is(M::SqlDistinctType) {
            ResourceProps::SqlDistinctType(Default::default())
        } else if is(M::UniqueConstraint) {
            ResourceProps::UniqueConstraint(Default::default())
        } else if is(M::ForeignKey) {
            ResourceProps::ForeignKey(Default::default())
        } else if is(M::SqlIndex) {
            ResourceProps::SqlIndex(Default::default())
        } else if is(M::CheckConstraint) {
            ResourceProps::CheckConstraint(Default::default())
        } else {
            return None;
        };
        Some(props)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Element
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub meta_class: MetaClass,
    #[serde(flatten)]
    pub core: CoreFacet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<ClassifierFacet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<FeatureFacet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structural: Option<StructuralFeatureFacet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<AttributeFacet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavioral: Option<BehavioralFeatureFacet>,
    #[serde(default)]
    pub props: Props,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<ResourceProps>,
    #[serde(default, with = "link_map", skip_serializing_if = "BTreeMap::is_empty")]
    pub(crate) links: BTreeMap<LinkEnd, Vec<ElementId>>,
}

impl Element {
    /// Fresh element with every facet of `meta_class` at its default
    pub fn new(id: ElementId, meta_class: MetaClass) -> Self {
        let is = |mc: MetaClass| meta_class.is_kind_of(mc);
        Self {
            id,
            meta_class,
            core: CoreFacet::default(),
            classifier: is(MetaClass::Classifier).then(ClassifierFacet::default),
            feature: is(MetaClass::Feature).then(FeatureFacet::default),
            structural: is(MetaClass::StructuralFeature).then(StructuralFeatureFacet::default),
            attribute: is(MetaClass::Attribute).then(AttributeFacet::default),
            behavioral: is(MetaClass::BehavioralFeature).then(BehavioralFeatureFacet::default),
            props: Props::for_meta_class(meta_class),
            resource: ResourceProps::for_meta_class(meta_class),
            links: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.core.name.as_deref()
    }

    pub fn is_kind_of(&self, meta_class: MetaClass) -> bool {
        self.meta_class.is_kind_of(meta_class)
    }

    /// Partners on one link end, in link order
    pub fn related(&self, end: LinkEnd) -> &[ElementId] {
        self.links.get(&end).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every link end this element participates in
    pub fn link_ends(&self) -> impl Iterator<Item = (LinkEnd, &[ElementId])> {
        self.links.iter().map(|(end, ids)| (*end, ids.as_slice()))
    }

    pub fn tagged_value(&self, tag: &str) -> Option<&str> {
        self.core
            .tagged_values
            .iter()
            .find(|tv| tv.tag == tag)
            .map(|tv| tv.value.as_str())
    }

    pub(crate) fn links_mut(&mut self, end: LinkEnd) -> &mut Vec<ElementId> {
        self.links.entry(end).or_default()
    }

    /// Drop empty reference lists so equal graphs serialize identically
    pub(crate) fn prune_links(&mut self, end: LinkEnd) {
        if self.links.get(&end).is_some_and(Vec::is_empty) {
            self.links.remove(&end);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic facet access
// ═══════════════════════════════════════════════════════════════════════════

/// A property group stored on an [`Element`]
pub trait Facet: Sized + 'static {
    /// Meta-class that introduces the properties
    const HOLDER: MetaClass;

    fn of(element: &Element) -> Option<&Self>;

    fn of_mut(element: &mut Element) -> Option<&mut Self>;
}

macro_rules! facet {
    ($ty:ident => $holder:ident, field $field:ident) => {
        impl Facet for $ty {
            const HOLDER: MetaClass = MetaClass::$holder;

            fn of(element: &Element) -> Option<&Self> {
                element.$field.as_ref()
            }

            fn of_mut(element: &mut Element) -> Option<&mut Self> {
                element.$field.as_mut()
            }
        }
    };
    ($ty:ident => $holder:ident, props $variant:ident) => {
        impl Facet for $ty {
            const HOLDER: MetaClass = MetaClass::$holder;

            fn of(element: &Element) -> Option<&Self> {
                match &element.props {
                    Props::$variant(p) => Some(p),
                    _ => None,
                }
            }

            fn of_mut(element: &mut Element) -> Option<&mut Self> {
                match &mut element.props {
                    Props::$variant(p) => Some(p),
                    _ => None,
                }
            }
        }
    };
    ($ty:ident => $holder:ident, resource $variant:ident) => {
        impl Facet for $ty {
            const HOLDER: MetaClass = MetaClass::$holder;

            fn of(element: &Element) -> Option<&Self> {
                match &element.resource {
                    Some(ResourceProps::$variant(p)) => Some(p),
                    _ => None,
                }
            }

            fn of_mut(element: &mut Element) -> Option<&mut Self> {
                match &mut element.resource {
                    Some(ResourceProps::$variant(p)) => Some(p),
                    _ => None,
                }
            }
        }
    };
}

facet!(ClassifierFacet => Classifier, field classifier);
facet!(FeatureFacet => Feature, field feature);
facet!(StructuralFeatureFacet => StructuralFeature, field structural);
facet!(AttributeFacet => Attribute, field attribute);
facet!(BehavioralFeatureFacet => BehavioralFeature, field behavioral);

facet!(OperationProps => Operation, props Operation);
facet!(MethodProps => Method, props Method);
facet!(ParameterProps => Parameter, props Parameter);
facet!(AssociationEndProps => AssociationEnd, props AssociationEnd);
facet!(ConstraintProps => Constraint, props Constraint);
facet!(DependencyProps => Dependency, props Dependency);
facet!(StereotypeProps => Stereotype, props Stereotype);
facet!(DataValueProps => DataValue, props DataValue);
facet!(IndexProps => Index, props Index);
facet!(IndexedFeatureProps => IndexedFeature, props IndexedFeature);
facet!(MachineProps => Machine, props Machine);
facet!(SoftwareSystemProps => SoftwareSystem, props SoftwareSystem);
facet!(DeployedComponentProps => DeployedComponent, props DeployedComponent);
facet!(ProviderConnectionProps => ProviderConnection, props ProviderConnection);
facet!(TypeMappingProps => TypeMapping, props TypeMapping);
facet!(EnumerationProps => Enumeration, props Enumeration);
facet!(EnumerationLiteralProps => EnumerationLiteral, props EnumerationLiteral);
facet!(UnionMemberProps => UnionMember, props UnionMember);

facet!(CatalogProps => Catalog, resource Catalog);
facet!(TableProps => Table, resource Table);
facet!(ViewProps => View, resource View);
facet!(ColumnProps => Column, resource Column);
facet!(SqlSimpleTypeProps => SqlSimpleType, resource SqlSimpleType);
facet!(SqlDistinctTypeProps => SqlDistinctType, resource SqlDistinctType);
facet!(UniqueConstraintProps => UniqueConstraint, resource UniqueConstraint);
facet!(ForeignKeyProps => ForeignKey, resource ForeignKey);
facet!(SqlIndexProps => SqlIndex, resource SqlIndex);
facet!(CheckConstraintProps => CheckConstraint, resource CheckConstraint);

// ═══════════════════════════════════════════════════════════════════════════
// Serde helpers
// ═══════════════════════════════════════════════════════════════════════════

/// Serialize the link map as a list (JSON object keys must be strings)
pub mod link_map {
    use super::*;
    use serde::{Deserializer, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Entry {
        #[serde(flatten)]
        end: LinkEnd,
        ids: Vec<ElementId>,
    }

    pub fn serialize<S>(
        map: &BTreeMap<LinkEnd, Vec<ElementId>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries: Vec<Entry> = map
            .iter()
            .map(|(end, ids)| Entry {
                end: *end,
                ids: ids.clone(),
            })
            .collect();
        entries.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<LinkEnd, Vec<ElementId>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<Entry>::deserialize(deserializer)?;
        Ok(entries.into_iter().map(|e| (e.end, e.ids)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::link::{Link, Side};

    #[test]
    fn test_facets_follow_taxonomy() {
        let column = Element::new(ElementId::from_raw(0), MetaClass::Column);
        assert!(column.feature.is_some());
        assert!(column.structural.is_some());
        assert!(column.attribute.is_some());
        assert!(column.classifier.is_none());
        assert!(matches!(column.resource, Some(ResourceProps::Column(_))));

        let table = Element::new(ElementId::from_raw(1), MetaClass::Table);
        assert!(table.classifier.is_some());
        assert!(table.feature.is_none());
        assert_eq!(table.props, Props::None);
    }

    #[test]
    fn test_inherited_leaf_props() {
        let sql_index = Element::new(ElementId::from_raw(0), MetaClass::SqlIndex);
        assert!(IndexProps::of(&sql_index).is_some());
        assert!(SqlIndexProps::of(&sql_index).is_some());

        let provider = Element::new(ElementId::from_raw(1), MetaClass::DataProvider);
        assert!(DeployedComponentProps::of(&provider).is_some());

        let pk = Element::new(ElementId::from_raw(2), MetaClass::PrimaryKey);
        assert!(UniqueConstraintProps::of(&pk).is_some());
        assert!(ForeignKeyProps::of(&pk).is_none());
    }

    #[test]
    fn test_defaults() {
        let end = Element::new(ElementId::from_raw(0), MetaClass::AssociationEnd);
        let props = AssociationEndProps::of(&end).unwrap();
        assert!(props.is_navigable);
        assert_eq!(props.aggregation, AggregationKind::None);

        let column = Element::new(ElementId::from_raw(1), MetaClass::Column);
        assert_eq!(
            ColumnProps::of(&column).unwrap().is_nullable,
            NullableType::ColumnNullable
        );
    }

    #[test]
    fn test_json_shape() {
        let mut index = Element::new(ElementId::from_raw(4), MetaClass::Index);
        index.core.name = Some("idx_customer".to_string());
        index
            .links_mut(LinkEnd::new(Link::IndexedFeatures, Side::Source))
            .push(ElementId::from_raw(5));

        let json = serde_json::to_value(&index).unwrap();
        assert_eq!(json["name"], "idx_customer");
        assert_eq!(json["meta_class"], "Index");
        assert_eq!(json["props"]["class"], "index");
        assert_eq!(json["links"][0]["link"], "IndexedFeatures");
        assert_eq!(json["links"][0]["side"], "source");

        let back: Element = serde_json::from_value(json).unwrap();
        assert_eq!(back, index);
    }

    #[test]
    fn test_prune_links() {
        let mut element = Element::new(ElementId::from_raw(0), MetaClass::Class);
        let end = LinkEnd::source(Link::ClassifierFeature);
        element.links_mut(end);
        element.prune_links(end);
        assert_eq!(element.link_ends().count(), 0);
    }
}
