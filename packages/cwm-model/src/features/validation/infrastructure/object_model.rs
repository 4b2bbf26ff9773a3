//! ObjectModel rules (Core, Behavioral, Relationships, Instance)

use super::{first_partner, name_clashes, unless, ElementRule};
use crate::errors::Result;
use crate::features::validation::domain::Finding;
use crate::graph::ModelGraph;
use crate::shared::models::{
    AssociationEndProps, ClassifierFacet, CwmConstraint as C, Element, ElementId, Facet, Link, LinkEnd,
    MetaClass as M, ParameterDirectionKind, ParameterProps,
};

pub(super) const RULES: &[ElementRule] = &[
    // Core
    ElementRule::new(C::DuplicateOwnedName, "DuplicateOwnedName", &[M::Namespace], duplicate_owned_name),
    ElementRule::new(C::SingleCompositeOwner, "SingleCompositeOwner", &[M::ModelElement], single_composite_owner),
    ElementRule::new(C::SelfConstraint, "SelfConstraint", &[M::Constraint], self_constraint),
    ElementRule::new(C::DuplicateFeatureName, "DuplicateFeatureName", &[M::Classifier], duplicate_feature_name),
    ElementRule::new(C::InvalidMultiplicityRange, "InvalidMultiplicityRange", &[M::StructuralFeature], invalid_multiplicity),
    ElementRule::new(C::StereotypeBaseClass, "StereotypeBaseClass", &[M::Stereotype], stereotype_base_class),
    ElementRule::new(C::DependencyEnds, "DependencyEnds", &[M::Dependency], dependency_ends),
    // Behavioral
    ElementRule::new(C::DuplicateParameterName, "DuplicateParameterName", &[M::BehavioralFeature, M::Event], duplicate_parameter_name),
    ElementRule::new(C::MultipleReturnParameters, "MultipleReturnParameters", &[M::BehavioralFeature], multiple_return_parameters),
    ElementRule::new(C::MethodOwnerMismatch, "MethodOwnerMismatch", &[M::Method], method_owner_mismatch),
    // Relationships
    ElementRule::new(C::AssociationEndCount, "AssociationEndCount", &[M::Association], association_end_count),
    ElementRule::new(C::MultipleAggregateEnds, "MultipleAggregateEnds", &[M::Association], multiple_aggregate_ends),
    ElementRule::new(C::AssociationEndOwner, "AssociationEndOwner", &[M::AssociationEnd], association_end_owner),
    // Instance
    ElementRule::new(C::SlotFeatureNotInClassifier, "SlotFeatureNotInClassifier", &[M::Slot], slot_feature_in_classifier),
    ElementRule::new(C::DataValueClassifier, "DataValueClassifier", &[M::DataValue], data_value_classifier),
    ElementRule::new(C::ObjectClassifier, "ObjectClassifier", &[M::Object], object_classifier),
    ElementRule::new(C::AbstractInstantiation, "AbstractInstantiation", &[M::Instance], abstract_instantiation),
];

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Core
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn duplicate_owned_name(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let owned = element.related(LinkEnd::source(Link::ElementOwnership));
    name_clashes(graph, element.id, owned, |member| Some(member.meta_class.as_str()))
}

fn single_composite_owner(_graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let owners: usize = Link::composites()
        .map(|link| element.related(LinkEnd::target(link)).len())
        .sum();
    if owners > 1 {
        Ok(vec![Finding::with_detail(
            element.id,
            format!("{} composite owners", owners),
        )])
    } else {
        Ok(Vec::new())
    }
}

fn self_constraint(_graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let constrained = element.related(LinkEnd::source(Link::ElementConstraint));
    Ok(unless(!constrained.contains(&element.id), element.id))
}

fn duplicate_feature_name(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let features = element.related(LinkEnd::source(Link::ClassifierFeature));
    name_clashes(graph, element.id, features, |member| {
        member
            .is_kind_of(M::StructuralFeature)
            .then_some("structural feature")
    })
}

fn invalid_multiplicity(_graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let multiplicity = element
        .structural
        .as_ref()
        .and_then(|s| s.multiplicity.as_ref());
    Ok(match multiplicity {
        Some(m) if !m.is_valid() => vec![Finding::with_detail(element.id, m.to_string())],
        _ => Vec::new(),
    })
}

fn stereotype_base_class(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();
    for extended in element.related(LinkEnd::source(Link::StereotypedElement)) {
        if !graph.stereotype_accepts(element.id, *extended)? {
            findings.push(Finding::with_detail(
                element.id,
                format!(
                    "extends {} {}",
                    graph.meta_class_of(*extended)?,
                    extended
                ),
            ));
        }
    }
    Ok(findings)
}

fn dependency_ends(_graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let clients = element.related(LinkEnd::source(Link::DependencyClient));
    let suppliers = element.related(LinkEnd::source(Link::DependencySupplier));
    let missing = match (clients.is_empty(), suppliers.is_empty()) {
        (false, false) => return Ok(Vec::new()),
        (true, false) => "no client",
        (false, true) => "no supplier",
        (true, true) => "no client and no supplier",
    };
    Ok(vec![Finding::with_detail(element.id, missing)])
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Behavioral
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn parameters(element: &Element) -> &[ElementId] {
    let link = if element.is_kind_of(M::Event) {
        Link::EventParameter
    } else {
        Link::BehavioralFeatureParameter
    };
    element.related(LinkEnd::source(link))
}

fn duplicate_parameter_name(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    name_clashes(graph, element.id, parameters(element), |_| Some("parameter"))
}

fn multiple_return_parameters(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let mut returns = 0;
    for parameter in parameters(element) {
        if graph.facet::<ParameterProps>(*parameter)?.kind == ParameterDirectionKind::Return {
            returns += 1;
        }
    }
    Ok(if returns > 1 {
        vec![Finding::with_detail(
            element.id,
            format!("{} return parameters", returns),
        )]
    } else {
        Vec::new()
    })
}

fn method_owner_mismatch(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let Some(operation) = first_partner(element, LinkEnd::target(Link::OperationMethod)) else {
        return Ok(Vec::new());
    };
    let owner_end = LinkEnd::target(Link::ClassifierFeature);
    let method_owner = first_partner(element, owner_end);
    let operation_owner = first_partner(graph.element(operation)?, owner_end);
    Ok(unless(method_owner == operation_owner, element.id))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Relationships
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn association_ends<'g>(
    graph: &'g ModelGraph,
    association: &Element,
) -> Result<Vec<&'g AssociationEndProps>> {
    let mut ends = Vec::new();
    for feature in association.related(LinkEnd::source(Link::ClassifierFeature)) {
        if let Some(props) = AssociationEndProps::of(graph.element(*feature)?) {
            ends.push(props);
        }
    }
    Ok(ends)
}

fn association_end_count(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let count = association_ends(graph, element)?.len();
    Ok(if count < 2 {
        vec![Finding::with_detail(element.id, format!("{} end(s)", count))]
    } else {
        Vec::new()
    })
}

fn multiple_aggregate_ends(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let aggregates = association_ends(graph, element)?
        .iter()
        .filter(|end| end.aggregation.is_aggregate())
        .count();
    Ok(unless(aggregates <= 1, element.id))
}

fn association_end_owner(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let Some(owner) = first_partner(element, LinkEnd::target(Link::ClassifierFeature)) else {
        return Ok(Vec::new());
    };
    let owner_class = graph.meta_class_of(owner)?;
    if owner_class.is_kind_of(M::Association) {
        Ok(Vec::new())
    } else {
        Ok(vec![Finding::with_detail(
            element.id,
            format!("owned by {} {}", owner_class, owner),
        )])
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Instance
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn classifier_of(instance: &Element) -> Option<ElementId> {
    first_partner(instance, LinkEnd::source(Link::InstanceClassifier))
}

fn slot_feature_in_classifier(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let object = first_partner(element, LinkEnd::target(Link::ObjectSlot));
    let feature = first_partner(element, LinkEnd::source(Link::FeatureSlot));
    let (Some(object), Some(feature)) = (object, feature) else {
        return Ok(Vec::new());
    };
    let Some(classifier) = classifier_of(graph.element(object)?) else {
        return Ok(Vec::new());
    };
    let feature_owner = first_partner(
        graph.element(feature)?,
        LinkEnd::target(Link::ClassifierFeature),
    );
    let ok = feature_owner
        .is_some_and(|owner| owner == classifier || graph.inherits_from(classifier, owner));
    Ok(unless(ok, element.id))
}

fn data_value_classifier(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let Some(classifier) = classifier_of(element) else {
        return Ok(Vec::new());
    };
    Ok(unless(
        graph.meta_class_of(classifier)?.is_kind_of(M::DataType),
        element.id,
    ))
}

fn object_classifier(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let Some(classifier) = classifier_of(element) else {
        return Ok(Vec::new());
    };
    Ok(unless(
        !graph.meta_class_of(classifier)?.is_kind_of(M::DataType),
        element.id,
    ))
}

fn abstract_instantiation(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let Some(classifier) = classifier_of(element) else {
        return Ok(Vec::new());
    };
    Ok(unless(
        !graph.facet::<ClassifierFacet>(classifier)?.is_abstract,
        element.id,
    ))
}
