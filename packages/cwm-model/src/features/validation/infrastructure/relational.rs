//! Relational rules

use super::{unless, ElementRule};
use crate::errors::Result;
use crate::features::validation::domain::Finding;
use crate::graph::ModelGraph;
use crate::shared::models::{
    ColumnProps, CwmConstraint as C, Element, Facet, Link, LinkEnd, MetaClass as M, NullableType,
};

pub(super) const RULES: &[ElementRule] = &[
    ElementRule::new(C::MultiplePrimaryKeys, "MultiplePrimaryKeys", &[M::Table], multiple_primary_keys),
    ElementRule::new(C::NullablePrimaryKeyColumn, "NullablePrimaryKeyColumn", &[M::PrimaryKey], nullable_primary_key_column),
    ElementRule::new(C::ScaleExceedsPrecision, "ScaleExceedsPrecision", &[M::Column], scale_exceeds_precision),
];

fn multiple_primary_keys(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let mut keys = 0;
    for owned in element.related(LinkEnd::source(Link::ElementOwnership)) {
        if graph.meta_class_of(*owned)?.is_kind_of(M::PrimaryKey) {
            keys += 1;
        }
    }
    Ok(if keys > 1 {
        vec![Finding::with_detail(element.id, format!("{} primary keys", keys))]
    } else {
        Vec::new()
    })
}

fn nullable_primary_key_column(graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();
    for feature in element.related(LinkEnd::source(Link::UniqueFeature)) {
        let column = graph.element(*feature)?;
        // Unknown nullability counts as nullable
        if ColumnProps::of(column).is_some_and(|p| p.is_nullable != NullableType::ColumnNoNulls) {
            let label = column.name().unwrap_or("<unnamed>");
            findings.push(Finding::with_detail(
                element.id,
                format!("column '{}' {} is nullable", label, feature),
            ));
        }
    }
    Ok(findings)
}

fn scale_exceeds_precision(_graph: &ModelGraph, element: &Element) -> Result<Vec<Finding>> {
    let Some(props) = ColumnProps::of(element) else {
        return Ok(Vec::new());
    };
    let ok = match (props.precision, props.scale) {
        (Some(precision), Some(scale)) => scale <= precision,
        _ => true,
    };
    Ok(unless(ok, element.id))
}
