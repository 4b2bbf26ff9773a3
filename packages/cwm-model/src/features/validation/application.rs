//! Validation Application Layer
//!
//! [`ModelValidator`] runs every [`ConstraintRule`] over a graph and turns
//! findings into localized [`Violation`]s. Deferred constraints (those that
//! depend on multi-step construction) are only ever checked here; eager
//! ones are re-checked so graphs built under a lenient policy or loaded
//! from disk get the same guarantees.

use tracing::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::domain::{Finding, ValidationReport, Violation};
use super::infrastructure::standard_rules;
use super::ports::ConstraintRule;
use crate::config::{ModelConfig, ValidationConfig};
use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{Element, ElementId, Locale};

/// Model-wide constraint validation service
///
/// ## Example
/// ```rust,ignore
/// let validator = ModelValidator::new(&ModelConfig::preset(Preset::Lenient));
/// let report = validator.validate(&graph)?;
/// for violation in &report.violations {
///     println!("{}", violation);
/// }
/// ```
pub struct ModelValidator {
    rules: Vec<Box<dyn ConstraintRule>>,
    config: ValidationConfig,
    locale: Locale,
}

impl ModelValidator {
    /// Validator with one rule per constraint
    pub fn new(config: &ModelConfig) -> Self {
        Self {
            rules: standard_rules(),
            config: config.validation.clone(),
            locale: config.locale,
        }
    }

    /// Add a rule (builder pattern)
    pub fn with_rule(mut self, rule: Box<dyn ConstraintRule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    fn active_rules(&self) -> Vec<&dyn ConstraintRule> {
        self.rules
            .iter()
            .map(|r| r.as_ref())
            .filter(|r| !self.config.is_skipped(r.constraint()))
            .collect()
    }

    fn runs_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.config.parallel && !self.config.fail_fast
    }

    /// Validate every element of `graph`
    pub fn validate(&self, graph: &ModelGraph) -> Result<ValidationReport> {
        let rules = self.active_rules();
        let elements: Vec<&Element> = graph.iter().collect();

        let mut report = if self.config.fail_fast {
            self.first_violation(graph, &rules, &elements)?
        } else {
            let mut violations = if self.runs_parallel() {
                self.check_parallel(graph, &rules, &elements)?
            } else {
                self.check_sequential(graph, &rules, &elements)?
            };
            violations.extend(self.check_graph_rules(graph, &rules, None)?);
            sort(&mut violations);
            ValidationReport {
                violations,
                elements_checked: elements.len(),
                rules_run: rules.len(),
                truncated: false,
            }
        };

        let limit = self.config.max_violations;
        if limit > 0 && report.violations.len() > limit {
            warn!(
                found = report.violations.len(),
                limit, "violation limit reached, report truncated"
            );
            report.violations.truncate(limit);
            report.truncated = true;
        }

        info!(
            violations = report.violations.len(),
            elements = report.elements_checked,
            rules = report.rules_run,
            truncated = report.truncated,
            "model validated"
        );
        Ok(report)
    }

    /// Validate a single element (graph-wide rules report only its findings)
    pub fn validate_element(
        &self,
        graph: &ModelGraph,
        id: impl Into<ElementId>,
    ) -> Result<ValidationReport> {
        let element = graph.element(id)?;
        let rules = self.active_rules();
        let mut violations = self.check_element(graph, &rules, element)?;
        violations.extend(self.check_graph_rules(graph, &rules, Some(element.id))?);
        sort(&mut violations);
        debug!(element = %element.id, violations = violations.len(), "element validated");
        Ok(ValidationReport {
            violations,
            elements_checked: 1,
            rules_run: rules.len(),
            truncated: false,
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Rule execution
    // ═══════════════════════════════════════════════════════════════════════

    fn check_element(
        &self,
        graph: &ModelGraph,
        rules: &[&dyn ConstraintRule],
        element: &Element,
    ) -> Result<Vec<Violation>> {
        let mut violations = Vec::new();
        for rule in rules {
            if rule.is_graph_rule() || !rule.applies_to(element) {
                continue;
            }
            violations.extend(self.localize(*rule, rule.check_element(graph, element)?));
        }
        Ok(violations)
    }

    fn check_graph_rules(
        &self,
        graph: &ModelGraph,
        rules: &[&dyn ConstraintRule],
        only: Option<ElementId>,
    ) -> Result<Vec<Violation>> {
        let mut violations = Vec::new();
        for rule in rules.iter().filter(|r| r.is_graph_rule()) {
            let findings = rule
                .check_graph(graph)?
                .into_iter()
                .filter(|f| only.map_or(true, |id| f.element == id));
            violations.extend(self.localize(*rule, findings));
        }
        Ok(violations)
    }

    fn check_sequential(
        &self,
        graph: &ModelGraph,
        rules: &[&dyn ConstraintRule],
        elements: &[&Element],
    ) -> Result<Vec<Violation>> {
        let mut violations = Vec::new();
        for element in elements {
            violations.extend(self.check_element(graph, rules, element)?);
        }
        Ok(violations)
    }

    #[cfg(feature = "parallel")]
    fn check_parallel(
        &self,
        graph: &ModelGraph,
        rules: &[&dyn ConstraintRule],
        elements: &[&Element],
    ) -> Result<Vec<Violation>> {
        let per_element: Vec<Vec<Violation>> = elements
            .par_iter()
            .map(|element| self.check_element(graph, rules, element))
            .collect::<Result<_>>()?;
        Ok(per_element.into_iter().flatten().collect())
    }

    #[cfg(not(feature = "parallel"))]
    fn check_parallel(
        &self,
        graph: &ModelGraph,
        rules: &[&dyn ConstraintRule],
        elements: &[&Element],
    ) -> Result<Vec<Violation>> {
        self.check_sequential(graph, rules, elements)
    }

    /// Stop at the first element (in id order) with a violation
    fn first_violation(
        &self,
        graph: &ModelGraph,
        rules: &[&dyn ConstraintRule],
        elements: &[&Element],
    ) -> Result<ValidationReport> {
        for (checked, element) in elements.iter().enumerate() {
            let mut violations = self.check_element(graph, rules, element)?;
            if !violations.is_empty() {
                sort(&mut violations);
                violations.truncate(1);
                warn!(element = %element.id, "fail-fast validation stopped at first violation");
                return Ok(ValidationReport {
                    violations,
                    elements_checked: checked + 1,
                    rules_run: rules.len(),
                    truncated: true,
                });
            }
        }
        let mut violations = self.check_graph_rules(graph, rules, None)?;
        sort(&mut violations);
        let truncated = violations.len() > 1;
        violations.truncate(1);
        Ok(ValidationReport {
            violations,
            elements_checked: elements.len(),
            rules_run: rules.len(),
            truncated,
        })
    }

    fn localize<'a>(
        &'a self,
        rule: &'a dyn ConstraintRule,
        findings: impl IntoIterator<Item = Finding> + 'a,
    ) -> impl Iterator<Item = Violation> + 'a {
        findings
            .into_iter()
            .map(move |f| Violation::new(rule.constraint(), f, self.locale))
    }
}

impl Default for ModelValidator {
    fn default() -> Self {
        Self::new(&ModelConfig::default())
    }
}

impl std::fmt::Debug for ModelValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelValidator")
            .field("rules", &self.rules.len())
            .field("config", &self.config)
            .field("locale", &self.locale)
            .finish()
    }
}

fn sort(violations: &mut [Violation]) {
    violations.sort_by(|a, b| {
        (a.element, a.constraint, &a.detail).cmp(&(b.element, b.constraint, &b.detail))
    });
}
