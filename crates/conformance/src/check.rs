//! Comparison of validator output against a fixture's expected report.
//!
//! Only the contract-relevant parts are compared: the score and level, the
//! sealed totals, the number of failures, and the presence of every coverage
//! category. Failure contents and key order are not checked.

use gap_score_domain::{ScoreFlavor, TestCategory};
use serde_json::Value;

/// Compare `stdout` against `expected`, returning one message per mismatch.
pub fn check_output(expected: &Value, stdout: &str, flavor: ScoreFlavor) -> Vec<String> {
    let actual: Value = match serde_json::from_str(stdout) {
        Ok(value) => value,
        Err(e) => return vec![format!("Invalid JSON output: {}", e)],
    };

    let mut errors = Vec::new();

    for key in [flavor.version_key(), "report", "sealed_tests", "failures"] {
        if actual.get(key).is_none() {
            errors.push(format!("Missing required key: {}", key));
        }
    }

    if let (Some(actual_report), Some(expected_report)) = (actual.get("report"), expected.get("report")) {
        let score_key = flavor.score_key();
        let expected_score = expected_score(expected_report, flavor);
        let actual_score = actual_report.get(score_key);
        if !values_match(actual_score, expected_score) {
            errors.push(format!(
                "{}: expected {}, got {}",
                score_key,
                display(expected_score),
                display(actual_score)
            ));
        }

        let expected_level = expected_report.get("level");
        let actual_level = actual_report.get("level");
        if !values_match(actual_level, expected_level) {
            errors.push(format!(
                "level: expected {}, got {}",
                display(expected_level),
                display(actual_level)
            ));
        }
    }

    if let (Some(actual_sealed), Some(expected_sealed)) =
        (actual.get("sealed_tests"), expected.get("sealed_tests"))
    {
        for field in ["total", "passed", "failed"] {
            let expected_value = expected_sealed.get(field);
            let actual_value = actual_sealed.get(field);
            if !values_match(actual_value, expected_value) {
                errors.push(format!(
                    "sealed_tests.{}: expected {}, got {}",
                    field,
                    display(expected_value),
                    display(actual_value)
                ));
            }
        }
    }

    if let (Some(actual_failures), Some(expected_failures)) =
        (actual.get("failures"), expected.get("failures"))
    {
        let expected_count = expected_failures.as_array().map_or(0, Vec::len);
        match actual_failures.as_array() {
            Some(failures) if failures.len() == expected_count => {}
            Some(failures) => errors.push(format!(
                "failures count: expected {}, got {}",
                expected_count,
                failures.len()
            )),
            None => errors.push("failures: expected an array".to_string()),
        }
    }

    if expected.get("coverage_comparison").is_some() {
        match actual.get("coverage_comparison") {
            None => errors
                .push("Missing coverage_comparison (expected when --open provided)".to_string()),
            Some(coverage) => {
                for category in TestCategory::all() {
                    if coverage.get(category.as_str()).is_none() {
                        errors.push(format!("Missing coverage_comparison.{}", category));
                    }
                }
            }
        }
    }

    errors
}

/// The expected score, named by the flavor or by the other known key.
///
/// Fixture suites are written once and shared between flavors.
fn expected_score(report: &Value, flavor: ScoreFlavor) -> Option<&Value> {
    report.get(flavor.score_key()).or_else(|| {
        [ScoreFlavor::Gap, ScoreFlavor::Shadow]
            .iter()
            .find_map(|other| report.get(other.score_key()))
    })
}

/// JSON equality, except that numbers compare by value (`0` matches `0.0`).
fn values_match(actual: Option<&Value>, expected: Option<&Value>) -> bool {
    match (actual, expected) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => a.as_f64() == b.as_f64(),
        (Some(a), Some(b)) => a == b,
        (None, None) => true,
        _ => false,
    }
}

fn display(value: Option<&Value>) -> String {
    value.map_or_else(|| "null".to_string(), Value::to_string)
}
