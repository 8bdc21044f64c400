//! Fluent builder pattern for constructing test data.
//!
//! This module provides builders for single test results and whole suites.

use gap_score_domain::{TestCategory, TestResult, TestStatus, TestSuiteFile};

/// Builder for creating TestResult instances
#[derive(Clone)]
pub struct TestResultBuilder {
    name: Option<String>,
    status: TestStatus,
    category: Option<String>,
    expected: Option<String>,
    actual: Option<String>,
    message: Option<String>,
}

impl TestResultBuilder {
    pub fn new() -> Self {
        Self {
            name: Some("test_case".to_string()),
            status: TestStatus::Passed,
            category: Some(TestCategory::HappyPath.as_str().to_string()),
            expected: None,
            actual: None,
            message: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    pub fn passed(mut self) -> Self {
        self.status = TestStatus::Passed;
        self
    }

    pub fn failed(mut self) -> Self {
        self.status = TestStatus::Failed;
        self
    }

    pub fn with_status(mut self, status: TestStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(mut self, category: TestCategory) -> Self {
        self.category = Some(category.as_str().to_string());
        self
    }

    /// Set a category string verbatim, including ones outside the fixed four.
    pub fn with_raw_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn without_category(mut self) -> Self {
        self.category = None;
        self
    }

    /// Set expected and actual values together
    pub fn with_mismatch(mut self, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self.actual = Some(actual.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn build(self) -> TestResult {
        TestResult {
            name: self.name,
            status: self.status,
            category: self.category,
            expected: self.expected,
            actual: self.actual,
            message: self.message,
        }
    }
}

impl Default for TestResultBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for an ordered list of test results
#[derive(Clone, Default)]
pub struct SuiteBuilder {
    tests: Vec<TestResult>,
}

impl SuiteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_test(mut self, test: TestResult) -> Self {
        self.tests.push(test);
        self
    }

    /// Append `count` passing happy-path tests
    pub fn passed_n(self, count: usize) -> Self {
        self.passed_in(TestCategory::HappyPath, count)
    }

    /// Append `count` passing tests in `category`
    pub fn passed_in(mut self, category: TestCategory, count: usize) -> Self {
        let offset = self.tests.len();
        self.tests.extend((0..count).map(|i| {
            TestResultBuilder::new()
                .with_name(format!("{}_{}", category.as_str(), offset + i))
                .with_category(category)
                .build()
        }));
        self
    }

    /// Append one failing test with a message
    pub fn failed(self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.with_test(
            TestResultBuilder::new()
                .with_name(name)
                .failed()
                .with_message(message)
                .build(),
        )
    }

    /// Append `count` failing tests in `category`
    pub fn failed_in(mut self, category: TestCategory, count: usize) -> Self {
        let offset = self.tests.len();
        self.tests.extend((0..count).map(|i| {
            TestResultBuilder::new()
                .with_name(format!("{}_{}", category.as_str(), offset + i))
                .with_category(category)
                .failed()
                .build()
        }));
        self
    }

    pub fn build(self) -> Vec<TestResult> {
        self.tests
    }

    /// Wrap the suite in its on-disk shape
    pub fn build_file(self) -> TestSuiteFile {
        TestSuiteFile { tests: self.tests }
    }
}
