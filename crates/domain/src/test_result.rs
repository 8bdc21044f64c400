//! Test result records consumed by the scoring engine.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of a single pre-computed test.
///
/// Only `failed` counts against the score. Any status string other than
/// `passed` or `failed`, including a missing one, deserializes to
/// [`TestStatus::Unknown`] and is treated as not failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    /// The test passed.
    Passed,
    /// The test failed; the only status counted against the score.
    Failed,
    /// Missing or unrecognized status.
    #[default]
    #[serde(other)]
    Unknown,
}

impl TestStatus {
    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }
}

/// The four fixed test-intent buckets used by the coverage comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestCategory {
    /// `happy_path`
    HappyPath,
    /// `edge_case`
    EdgeCase,
    /// `error_handling`
    ErrorHandling,
    /// `security`
    Security,
}

impl TestCategory {
    /// All categories in report order.
    pub fn all() -> &'static [TestCategory] {
        &[
            Self::HappyPath,
            Self::EdgeCase,
            Self::ErrorHandling,
            Self::Security,
        ]
    }

    /// Wire name of the category (`happy_path`, `edge_case`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HappyPath => "happy_path",
            Self::EdgeCase => "edge_case",
            Self::ErrorHandling => "error_handling",
            Self::Security => "security",
        }
    }

    /// Label used in tables.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::HappyPath => "Happy path",
            Self::EdgeCase => "Edge case",
            Self::ErrorHandling => "Error handling",
            Self::Security => "Security",
        }
    }
}

impl fmt::Display for TestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown test category: {}", s))
    }
}

/// A single test outcome as supplied in a results file.
///
/// The category is kept as the raw string from the input so that unknown
/// categories survive into failure entries untouched; coverage counting
/// compares it against [`TestCategory::as_str`] by exact equality.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TestResult {
    /// Test name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Outcome; `Unknown` when missing or null
    #[serde(default, deserialize_with = "null_as_unknown")]
    pub status: TestStatus,

    /// Raw category string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Expected value, for failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,

    /// Actual value, for failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,

    /// Failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TestResult {
    /// A record with a name and status.
    pub fn new(name: impl Into<String>, status: TestStatus) -> Self {
        Self {
            name: Some(name.into()),
            status,
            ..Self::default()
        }
    }

    /// Set a known category.
    pub fn with_category(mut self, category: TestCategory) -> Self {
        self.category = Some(category.as_str().to_string());
        self
    }

    /// Set a category string verbatim.
    pub fn with_raw_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the expected value.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Set the actual value.
    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }

    /// Set the failure message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// True only for `failed`.
    pub fn is_failed(&self) -> bool {
        self.status == TestStatus::Failed
    }

    /// True if the raw category string is exactly the wire name of `category`.
    pub fn in_category(&self, category: TestCategory) -> bool {
        self.category.as_deref() == Some(category.as_str())
    }
}

/// On-disk shape of a results file: `{"tests": [...]}`.
///
/// A missing or `null` `tests` key yields an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestSuiteFile {
    /// Records in file order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tests: Vec<TestResult>,
}

fn null_as_unknown<'de, D>(deserializer: D) -> Result<TestStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TestStatus>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<TestResult>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TestResult>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        let t: TestResult = serde_json::from_str(r#"{"name":"a","status":"failed"}"#).unwrap();
        assert_eq!(t.status, TestStatus::Failed);

        let t: TestResult = serde_json::from_str(r#"{"name":"a","status":"skipped"}"#).unwrap();
        assert_eq!(t.status, TestStatus::Unknown);
        assert!(!t.is_failed());

        let t: TestResult = serde_json::from_str(r#"{"name":"a"}"#).unwrap();
        assert_eq!(t.status, TestStatus::Unknown);

        let t: TestResult = serde_json::from_str(r#"{"name":"a","status":null}"#).unwrap();
        assert_eq!(t.status, TestStatus::Unknown);
    }

    #[test]
    fn test_optional_fields_accept_null() {
        let t: TestResult = serde_json::from_str(
            r#"{"name":"a","status":"failed","category":null,"message":null}"#,
        )
        .unwrap();
        assert!(t.category.is_none());
        assert!(t.message.is_none());
    }

    #[test]
    fn test_category_round_trip_names() {
        for category in TestCategory::all() {
            assert_eq!(category.as_str().parse::<TestCategory>().unwrap(), *category);
        }
        assert!("performance".parse::<TestCategory>().is_err());
    }

    #[test]
    fn test_in_category_is_exact_match() {
        let t = TestResult::new("a", TestStatus::Passed).with_raw_category("Security");
        assert!(!t.in_category(TestCategory::Security));

        let t = TestResult::new("a", TestStatus::Passed).with_category(TestCategory::Security);
        assert!(t.in_category(TestCategory::Security));
    }

    #[test]
    fn test_suite_file_missing_tests_key() {
        let file: TestSuiteFile = serde_json::from_str(r#"{"other":"data"}"#).unwrap();
        assert!(file.tests.is_empty());

        let file: TestSuiteFile = serde_json::from_str(r#"{"tests":null}"#).unwrap();
        assert!(file.tests.is_empty());
    }
}
