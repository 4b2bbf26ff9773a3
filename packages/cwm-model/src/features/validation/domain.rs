//! Validation domain models

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::CwmError;
use crate::shared::models::{CwmConstraint, ElementId, Locale};

/// Raw rule output: the offending element and optional context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub element: ElementId,
    pub detail: Option<String>,
}

impl Finding {
    pub fn new(element: impl Into<ElementId>) -> Self {
        Self {
            element: element.into(),
            detail: None,
        }
    }

    pub fn with_detail(element: impl Into<ElementId>, detail: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            detail: Some(detail.into()),
        }
    }
}

/// One violated constraint instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub constraint: CwmConstraint,
    pub code: &'static str,
    pub element: ElementId,
    /// Localized constraint message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Violation {
    pub fn new(constraint: CwmConstraint, finding: Finding, locale: Locale) -> Self {
        Self {
            constraint,
            code: constraint.code(),
            element: finding.element,
            message: constraint.message(locale).to_string(),
            detail: finding.detail,
        }
    }

    /// The violation as the error an eager check would have raised
    pub fn to_error(&self) -> CwmError {
        CwmError::constraint(self.constraint, self.element)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.element, self.message)?;
        if let Some(detail) = &self.detail {
            write!(f, " ({})", detail)?;
        }
        Ok(())
    }
}

/// Result of validating a graph
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Violations ordered by element, then constraint
    pub violations: Vec<Violation>,
    pub elements_checked: usize,
    pub rules_run: usize,
    /// `true` when `max_violations` or `fail_fast` cut the run short
    pub truncated: bool,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations of one constraint
    pub fn count(&self, constraint: CwmConstraint) -> usize {
        self.violations
            .iter()
            .filter(|v| v.constraint == constraint)
            .count()
    }

    pub fn has(&self, constraint: CwmConstraint) -> bool {
        self.violations.iter().any(|v| v.constraint == constraint)
    }

    pub fn violations_of(&self, element: impl Into<ElementId>) -> Vec<&Violation> {
        let element = element.into();
        self.violations
            .iter()
            .filter(|v| v.element == element)
            .collect()
    }

    /// Violation counts per constraint
    pub fn by_constraint(&self) -> BTreeMap<CwmConstraint, usize> {
        let mut counts = BTreeMap::new();
        for v in &self.violations {
            *counts.entry(v.constraint).or_insert(0) += 1;
        }
        counts
    }

    /// `Err` with the first violation, for callers that want the eager behavior
    pub fn into_result(self) -> Result<Self, CwmError> {
        match self.violations.first() {
            Some(first) => Err(first.to_error()),
            None => Ok(self),
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} violation(s) in {} element(s), {} rule(s){}",
            self.violations.len(),
            self.elements_checked,
            self.rules_run,
            if self.truncated { " [truncated]" } else { "" }
        )?;
        for v in &self.violations {
            writeln!(f, "  {}", v)?;
        }
        Ok(())
    }
}
