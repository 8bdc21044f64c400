//! Proptest strategies for test suites.

use gap_score_domain::{TestCategory, TestResult, TestStatus};
use proptest::prelude::*;

pub fn status() -> impl Strategy<Value = TestStatus> {
    prop_oneof![
        Just(TestStatus::Passed),
        Just(TestStatus::Failed),
        Just(TestStatus::Unknown),
    ]
}

/// A category string: one of the fixed four, an unknown one, or none
pub fn raw_category() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        4 => prop::sample::select(TestCategory::all().to_vec())
            .prop_map(|c| Some(c.as_str().to_string())),
        1 => Just(Some("performance".to_string())),
        1 => Just(None),
    ]
}

pub fn test_result() -> impl Strategy<Value = TestResult> {
    ("[a-z_]{1,16}", status(), raw_category()).prop_map(|(name, status, category)| TestResult {
        name: Some(name),
        status,
        category,
        ..TestResult::default()
    })
}

pub fn suite(max_len: usize) -> impl Strategy<Value = Vec<TestResult>> {
    prop::collection::vec(test_result(), 0..=max_len)
}

/// `(failed, total)` with `failed <= total`, and a shuffled suite of that shape
pub fn suite_with_failures(max_total: usize) -> impl Strategy<Value = (usize, Vec<TestResult>)> {
    (0..=max_total)
        .prop_flat_map(|total| (0..=total, Just(total)))
        .prop_flat_map(|(failed, total)| {
            let tests: Vec<TestResult> = (0..total)
                .map(|i| {
                    let status = if i < failed {
                        TestStatus::Failed
                    } else {
                        TestStatus::Passed
                    };
                    TestResult::new(format!("t{}", i), status)
                })
                .collect();
            (Just(failed), Just(tests).prop_shuffle())
        })
}
