//! Custom assertions for test verification

use cwm_model::{CwmConstraint, CwmError, ModelGraph, ValidationReport};

/// Assert that a report has no violations
pub fn assert_valid(report: &ValidationReport) {
    assert!(report.is_valid(), "Expected a valid model, got:\n{}", report);
}

/// Assert the number of violations of one constraint
pub fn assert_violations(report: &ValidationReport, constraint: CwmConstraint, expected: usize) {
    assert_eq!(
        report.count(constraint),
        expected,
        "Expected {expected} {constraint:?} violation(s) in:\n{}",
        report
    );
}

/// Assert that an operation was rejected with `constraint`
pub fn assert_rejected<T: std::fmt::Debug>(result: Result<T, CwmError>, constraint: CwmConstraint) {
    match result {
        Err(err) => assert_eq!(
            err.violated_constraint(),
            Some(constraint),
            "Expected {constraint:?}, got error: {err}"
        ),
        Ok(value) => panic!("Expected {constraint:?}, got Ok({value:?})"),
    }
}

/// Assert that every inverse reference of the graph is consistent
pub fn assert_integrity(graph: &ModelGraph) {
    let issues = graph.integrity_issues();
    assert!(issues.is_empty(), "Integrity issues: {:#?}", issues);
}
