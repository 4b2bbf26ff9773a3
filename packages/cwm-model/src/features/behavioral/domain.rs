//! ObjectModel::Behavioral typed API

use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    BehavioralFeatureFacet, BehavioralFeatureId, BehavioralFeatureRef, ClassifierId, CwmConstraint,
    ElementId, EventId, Expression, Link, LinkEnd, MethodId, MethodProps, ModelElementRef,
    OperationId, OperationProps, ParameterDirectionKind, ParameterId, ParameterProps,
    ProcedureExpression,
};

impl ModelGraph {
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // BehavioralFeature / Operation / Method
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    pub fn is_query(&self, feature: impl BehavioralFeatureRef) -> Result<bool> {
        Ok(self.facet::<BehavioralFeatureFacet>(feature.element_id())?.is_query)
    }

    pub fn set_is_query(&mut self, feature: impl BehavioralFeatureRef, value: bool) -> Result<bool> {
        self.update::<BehavioralFeatureFacet, _>(feature.element_id(), |f| {
            std::mem::replace(&mut f.is_query, value)
        })
    }

    pub fn operation_is_abstract(&self, operation: OperationId) -> Result<bool> {
        Ok(self.facet::<OperationProps>(operation)?.is_abstract)
    }

    pub fn set_operation_is_abstract(&mut self, operation: OperationId, value: bool) -> Result<bool> {
        self.update::<OperationProps, _>(operation, |p| std::mem::replace(&mut p.is_abstract, value))
    }

    pub fn method_body(&self, method: MethodId) -> Result<Option<&ProcedureExpression>> {
        Ok(self.facet::<MethodProps>(method)?.body.as_ref())
    }

    pub fn set_method_body(
        &mut self,
        method: MethodId,
        body: Option<ProcedureExpression>,
    ) -> Result<Option<ProcedureExpression>> {
        self.update::<MethodProps, _>(method, |p| std::mem::replace(&mut p.body, body))
    }

    /// Operation a method implements
    pub fn specification(&self, method: MethodId) -> Result<Option<OperationId>> {
        self.single_as(method, LinkEnd::target(Link::OperationMethod))
    }

    pub fn set_specification(
        &mut self,
        method: MethodId,
        operation: Option<OperationId>,
    ) -> Result<Option<OperationId>> {
        let prior = self.set_single(
            method,
            LinkEnd::target(Link::OperationMethod),
            operation.map(ElementId::from),
        )?;
        Ok(prior.map(OperationId::from_element_id))
    }

    pub fn add_method(&mut self, operation: OperationId, method: MethodId) -> Result<bool> {
        self.link(Link::OperationMethod, operation, method)
    }

    pub fn remove_method(&mut self, operation: OperationId, method: MethodId) -> Result<bool> {
        self.unlink(Link::OperationMethod, operation, method)
    }

    pub fn methods(&self, operation: OperationId) -> Result<Vec<MethodId>> {
        self.related_as(operation, LinkEnd::source(Link::OperationMethod))
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Parameters
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    pub fn add_parameter(
        &mut self,
        feature: impl BehavioralFeatureRef,
        parameter: ParameterId,
    ) -> Result<bool> {
        self.link(
            Link::BehavioralFeatureParameter,
            feature.element_id(),
            parameter,
        )
    }

    pub fn insert_parameter(
        &mut self,
        feature: impl BehavioralFeatureRef,
        parameter: ParameterId,
        position: usize,
    ) -> Result<()> {
        self.insert_at(
            Link::BehavioralFeatureParameter,
            feature.element_id(),
            parameter,
            position,
        )
    }

    pub fn remove_parameter(
        &mut self,
        feature: impl BehavioralFeatureRef,
        parameter: ParameterId,
    ) -> Result<bool> {
        self.unlink(
            Link::BehavioralFeatureParameter,
            feature.element_id(),
            parameter,
        )
    }

    /// Parameters in signature order
    pub fn parameters(&self, feature: impl BehavioralFeatureRef) -> Result<Vec<ParameterId>> {
        self.related_as(
            feature.element_id(),
            LinkEnd::source(Link::BehavioralFeatureParameter),
        )
    }

    pub fn behavioral_feature(&self, parameter: ParameterId) -> Result<Option<BehavioralFeatureId>> {
        self.single_as(parameter, LinkEnd::target(Link::BehavioralFeatureParameter))
    }

    /// The `return` parameter of a feature, if any
    pub fn result_parameter(&self, feature: impl BehavioralFeatureRef) -> Result<Option<ParameterId>> {
        Ok(self
            .return_parameter(feature.element_id(), None)?
            .map(ParameterId::from_element_id))
    }

    pub fn add_event_parameter(&mut self, event: EventId, parameter: ParameterId) -> Result<bool> {
        self.link(Link::EventParameter, event, parameter)
    }

    pub fn remove_event_parameter(&mut self, event: EventId, parameter: ParameterId) -> Result<bool> {
        self.unlink(Link::EventParameter, event, parameter)
    }

    pub fn event_parameters(&self, event: EventId) -> Result<Vec<ParameterId>> {
        self.related_as(event, LinkEnd::source(Link::EventParameter))
    }

    pub fn event(&self, parameter: ParameterId) -> Result<Option<EventId>> {
        self.single_as(parameter, LinkEnd::target(Link::EventParameter))
    }

    pub fn parameter_kind(&self, parameter: ParameterId) -> Result<ParameterDirectionKind> {
        Ok(self.facet::<ParameterProps>(parameter)?.kind)
    }

    /// Change the direction; a feature keeps at most one `return` parameter
    pub fn set_parameter_kind(
        &mut self,
        parameter: ParameterId,
        kind: ParameterDirectionKind,
    ) -> Result<ParameterDirectionKind> {
        if kind == ParameterDirectionKind::Return {
            if let Some(feature) = self.behavioral_feature(parameter)? {
                let ok = self.return_parameter(feature.id(), Some(parameter.id()))?.is_none();
                self.check(CwmConstraint::MultipleReturnParameters, ok, feature.id())?;
            }
        }
        self.update::<ParameterProps, _>(parameter, |p| std::mem::replace(&mut p.kind, kind))
    }

    pub fn default_value(&self, parameter: ParameterId) -> Result<Option<&Expression>> {
        Ok(self.facet::<ParameterProps>(parameter)?.default_value.as_ref())
    }

    pub fn set_default_value(
        &mut self,
        parameter: ParameterId,
        value: Option<Expression>,
    ) -> Result<Option<Expression>> {
        self.update::<ParameterProps, _>(parameter, |p| std::mem::replace(&mut p.default_value, value))
    }

    pub fn parameter_type(&self, parameter: ParameterId) -> Result<Option<ClassifierId>> {
        self.single_as(parameter, LinkEnd::source(Link::ParameterType))
    }

    pub fn set_parameter_type(
        &mut self,
        parameter: ParameterId,
        classifier: Option<ClassifierId>,
    ) -> Result<Option<ClassifierId>> {
        let prior = self.set_single(
            parameter,
            LinkEnd::source(Link::ParameterType),
            classifier.map(ElementId::from),
        )?;
        Ok(prior.map(ClassifierId::from_element_id))
    }
}
