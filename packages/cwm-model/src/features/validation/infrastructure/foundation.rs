//! Foundation rules (KeyIndexes, SoftwareDeployment, DataTypes, TypeMapping)

use std::collections::{BTreeMap, BTreeSet};

use super::{first_partner, name_clashes, unless, ElementRule};
use crate::errors::Result;
use crate::features::validation::domain::Finding;
use crate::graph::ModelGraph;
use crate::shared::models::{
    CwmConstraint as C, Element, ElementId, Facet, IndexProps, IndexedFeatureProps, Link, LinkEnd,
    MetaClass as M, TypeMappingProps, UnionMemberProps,
};

pub(super) const RULES: &[ElementRule] = &[
    // KeyIndexes
    ElementRule::new(C::AscendingRequiresSorted, "AscendingRequiresSorted", &[M::IndexedFeature], ascending_requires_sorted),
    ElementRule::new(C::KeyFeatureCountMismatch, "KeyFeatureCountMismatch", &[M::KeyRelationship], key_feature_count),
    ElementRule::new(C::IndexedFeatureNotInSpannedClass, "IndexedFeatureNotInSpannedClass", &[M::IndexedFeature], indexed_feature_in_spanned_class),
    ElementRule::new(C::UniqueKeyFeatureOwner, "UniqueKeyFeatureOwner", &[M::UniqueKey], unique_key_feature_owner),
    // SoftwareDeployment
    ElementRule::new(C::MissingMachine, "MissingMachine", &[M::DeployedComponent], missing_machine),
    ElementRule::new(C::ProviderConnectionEnds, "ProviderConnectionEnds", &[M::ProviderConnection], provider_connection_ends),
    // DataTypes
    ElementRule::new(C::DuplicateLiteralName, "DuplicateLiteralName", &[M::Enumeration], duplicate_literal_name),
    ElementRule::new(C::MultipleDefaultMembers, "MultipleDefaultMembers", &[M::Union], multiple_default_members),
    ElementRule::new(C::DiscriminatorNotMember, "DiscriminatorNotMember", &[M::Union], discriminator_not_member),
    ElementRule::new(C::TypeAliasSelf, "TypeAliasSelf", &[M::TypeAlias], type_alias_self),
    // TypeMapping
    ElementRule::new(C::MappingSourceEqualsTarget, "MappingSourceEqualsTarget", &[M::TypeMapping], mapping_source_equals_target),
    ElementRule::new(C::MultipleBestMatches, "MultipleBestMatches", &[M::TypeSystem], multiple_best_matches),
];

fn owner_of(graph: &ModelGraph, feature: ElementId) -> Result<Option<ElementId>> {
    Ok(first_partner(
        graph.element(feature)?,
        LinkEnd::target(Link::ClassifierFeature),
    ))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// KeyIndexes
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn ascending_requires_sorted(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let has_direction = IndexedFeatureProps::of(element).is_some_and(|p| p.is_ascending.is_some());
    let Some(index) = first_partner(element, LinkEnd::target(Link::IndexedFeatures)) else {
        return Ok(Vec::new());
    };
    Ok(unless(
        !has_direction || graph.facet::<IndexProps>(index)?.is_sorted,
        element.id,
    ))
}

fn key_feature_count(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let Some(unique_key) = first_partner(element, LinkEnd::source(Link::UniqueKeyRelationship))
    else {
        return Ok(Vec::new());
    };
    let own = element
        .related(LinkEnd::source(Link::KeyRelationshipFeature))
        .len();
    let expected = graph
        .element(unique_key)?
        .related(LinkEnd::source(Link::UniqueFeature))
        .len();
    Ok(if own == expected {
        Vec::new()
    } else {
        vec![Finding::with_detail(
            element.id,
            format!("{} feature(s), unique key {} has {}", own, unique_key, expected),
        )]
    })
}

fn indexed_feature_in_spanned_class(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let index = first_partner(element, LinkEnd::target(Link::IndexedFeatures));
    let feature = first_partner(element, LinkEnd::source(Link::IndexedFeatureInfo));
    let (Some(index), Some(feature)) = (index, feature) else {
        return Ok(Vec::new());
    };
    let Some(spanned) = first_partner(graph.element(index)?, LinkEnd::source(Link::IndexSpansClass))
    else {
        return Ok(Vec::new());
    };
    let ok = owner_of(graph, feature)?
        .is_some_and(|owner| owner == spanned || graph.inherits_from(spanned, owner));
    Ok(unless(ok, element.id))
}

fn unique_key_feature_owner(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let mut owners = BTreeSet::new();
    for feature in element.related(LinkEnd::source(Link::UniqueFeature)) {
        owners.insert(owner_of(graph, *feature)?);
    }
    Ok(if owners.len() > 1 {
        vec![Finding::with_detail(
            element.id,
            format!("features span {} owners", owners.len()),
        )]
    } else {
        Vec::new()
    })
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SoftwareDeployment
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn missing_machine(_graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let machine = first_partner(element, LinkEnd::target(Link::ComponentsOnMachine));
    Ok(unless(machine.is_some(), element.id))
}

fn provider_connection_ends(_graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let provider = first_partner(element, LinkEnd::target(Link::DataProviderConnection));
    let manager = first_partner(element, LinkEnd::target(Link::DataManagerConnection));
    let detail = match (provider, manager) {
        (Some(p), Some(m)) if p != m => return Ok(Vec::new()),
        (Some(_), Some(_)) => "provider is its own manager",
        (None, _) => "no data provider",
        (_, None) => "no data manager",
    };
    Ok(vec![Finding::with_detail(element.id, detail)])
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DataTypes
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn duplicate_literal_name(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let literals = element.related(LinkEnd::source(Link::EnumerationLiterals));
    name_clashes(graph, element.id, literals, |_| Some("literal"))
}

fn multiple_default_members(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let mut defaults = 0;
    for feature in element.related(LinkEnd::source(Link::ClassifierFeature)) {
        if UnionMemberProps::of(graph.element(*feature)?).is_some_and(|p| p.is_default) {
            defaults += 1;
        }
    }
    Ok(unless(defaults <= 1, element.id))
}

fn discriminator_not_member(_graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let Some(discriminator) = first_partner(element, LinkEnd::source(Link::DiscriminatedUnion))
    else {
        return Ok(Vec::new());
    };
    let members = element.related(LinkEnd::source(Link::ClassifierFeature));
    Ok(unless(members.contains(&discriminator), element.id))
}

fn type_alias_self(_graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let aliased = first_partner(element, LinkEnd::source(Link::ClassifierAlias));
    Ok(unless(aliased != Some(element.id), element.id))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TypeMapping
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn mapping_source_equals_target(_graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let source = first_partner(element, LinkEnd::source(Link::MappingSource));
    let target = first_partner(element, LinkEnd::source(Link::MappingTarget));
    Ok(unless(source.is_none() || source != target, element.id))
}

/// Best-match mappings owned by a type system, grouped by source type
fn multiple_best_matches(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let mut best: BTreeMap<ElementId, usize> = BTreeMap::new();
    for owned in element.related(LinkEnd::source(Link::ElementOwnership)) {
        let mapping = graph.element(*owned)?;
        if !TypeMappingProps::of(mapping).is_some_and(|p| p.is_best_match) {
            continue;
        }
        if let Some(source) = first_partner(mapping, LinkEnd::source(Link::MappingSource)) {
            *best.entry(source).or_insert(0) += 1;
        }
    }
    Ok(best
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(source, n)| {
            Finding::with_detail(
                element.id,
                format!("source {} has {} best matches", source, n),
            )
        })
        .collect())
}
