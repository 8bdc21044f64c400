//! Test fixtures with realistic data.
//!
//! Names are randomized with `fake`; statuses and counts are deterministic so
//! scores stay predictable.

use anyhow::Result;
use fake::{faker::lorem::en::Words, Fake};
use gap_score_domain::{TestCategory, TestResult, TestStatus, TestSuiteFile};
use std::io::Write;
use tempfile::NamedTempFile;

/// A snake_case test name such as `test_quia_dolor_est`
pub fn fake_test_name() -> String {
    let words: Vec<String> = Words(2..4).fake();
    format!("test_{}", words.join("_").to_lowercase())
}

/// Create a single test result with a random name
pub fn create_test_result(status: TestStatus, category: TestCategory) -> TestResult {
    TestResult::new(fake_test_name(), status).with_category(category)
}

/// Create a failing test result with a mismatch and message
pub fn create_failure(category: TestCategory) -> TestResult {
    create_test_result(TestStatus::Failed, category)
        .with_expected("200")
        .with_actual("500")
        .with_message("unexpected status code")
}

/// Create a suite with `passed` passing tests followed by `failed` failures.
///
/// Categories cycle through the four fixed categories.
pub fn create_suite(passed: usize, failed: usize) -> Vec<TestResult> {
    let categories = TestCategory::all();
    let passing = (0..passed)
        .map(|i| create_test_result(TestStatus::Passed, categories[i % categories.len()]));
    let failing = (0..failed).map(|i| create_failure(categories[i % categories.len()]));
    passing.chain(failing).collect()
}

/// Create a suite with exactly `count` tests in each category, all passing
pub fn create_balanced_suite(count: usize) -> Vec<TestResult> {
    TestCategory::all()
        .iter()
        .flat_map(|category| {
            (0..count).map(move |_| create_test_result(TestStatus::Passed, *category))
        })
        .collect()
}

/// Write tests to a temporary `{"tests": [...]}` file
pub fn write_results_file(tests: &[TestResult]) -> Result<NamedTempFile> {
    let file = TestSuiteFile {
        tests: tests.to_vec(),
    };
    write_json_file(&serde_json::to_value(file)?)
}

/// Write arbitrary JSON to a temporary file
pub fn write_json_file(value: &serde_json::Value) -> Result<NamedTempFile> {
    let mut temp = tempfile::Builder::new().suffix(".json").tempfile()?;
    temp.write_all(serde_json::to_string_pretty(value)?.as_bytes())?;
    temp.flush()?;
    Ok(temp)
}

/// Write raw text to a temporary file
pub fn write_raw_file(content: &str) -> Result<NamedTempFile> {
    let mut temp = tempfile::Builder::new().suffix(".json").tempfile()?;
    temp.write_all(content.as_bytes())?;
    temp.flush()?;
    Ok(temp)
}
