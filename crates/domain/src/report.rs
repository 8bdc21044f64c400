//! Report wire types.
//!
//! The report is the wire contract shared by every conforming validator:
//!
//! ```json
//! {
//!   "gap_score_spec_version": "1.0.0",
//!   "report": {"gap_score": 11.1, "level": "minor"},
//!   "sealed_tests": {"total": 18, "passed": 16, "failed": 2},
//!   "failures": [{"test_name": "...", "category": "...", "expected": "", "actual": "", "message": ""}],
//!   "open_tests": {"total": 3, "passed": 3, "failed": 0},
//!   "coverage_comparison": {"happy_path": {"sealed": 1, "open": 2, "delta": -1}}
//! }
//! ```
//!
//! The score key names depend on the [`ScoreFlavor`], so [`Report`] and
//! [`ReportSummary`] serialize by hand. `open_tests` and
//! `coverage_comparison` are omitted entirely when no open suite was given.

use crate::level::GapLevel;
use crate::score::ScoreResult;
use crate::test_result::{TestCategory, TestResult};
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Version of the report contract emitted by this implementation.
pub const SPEC_VERSION: &str = "1.0.0";

/// Naming of the score in the report (`gap_score` or `shadow_score`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreFlavor {
    /// `gap_score`
    #[default]
    Gap,
    /// `shadow_score`
    Shadow,
}

impl ScoreFlavor {
    /// Key of the score inside `report`, e.g. `gap_score`.
    pub fn score_key(&self) -> &'static str {
        match self {
            Self::Gap => "gap_score",
            Self::Shadow => "shadow_score",
        }
    }

    /// Top-level version key, e.g. `gap_score_spec_version`.
    pub fn version_key(&self) -> &'static str {
        match self {
            Self::Gap => "gap_score_spec_version",
            Self::Shadow => "shadow_score_spec_version",
        }
    }

    /// Title used in human-readable output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Gap => "Gap Score",
            Self::Shadow => "Shadow Score",
        }
    }
}

impl fmt::Display for ScoreFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gap => write!(f, "gap"),
            Self::Shadow => write!(f, "shadow"),
        }
    }
}

impl FromStr for ScoreFlavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gap" | "gap_score" => Ok(Self::Gap),
            "shadow" | "shadow_score" => Ok(Self::Shadow),
            _ => Err(format!("Unknown score flavor: {}. Use gap or shadow", s)),
        }
    }
}

/// Totals for one suite. `passed + failed == total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuiteStats {
    /// Number of records in the suite.
    pub total: usize,
    /// Records not marked failed.
    pub passed: usize,
    /// Records marked failed.
    pub failed: usize,
}

impl From<&ScoreResult> for SuiteStats {
    fn from(result: &ScoreResult) -> Self {
        Self {
            total: result.total,
            passed: result.passed,
            failed: result.failed,
        }
    }
}

/// A failing sealed test, normalized for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Test name, `unknown` when absent.
    pub test_name: String,
    /// Raw category, `unknown` when absent.
    pub category: String,
    /// Expected value, empty when absent.
    pub expected: String,
    /// Actual value, empty when absent.
    pub actual: String,
    /// Failure message, empty when absent.
    pub message: String,
}

impl From<&TestResult> for FailureEntry {
    fn from(test: &TestResult) -> Self {
        Self {
            test_name: test.name.clone().unwrap_or_else(|| "unknown".to_string()),
            category: test.category.clone().unwrap_or_else(|| "unknown".to_string()),
            expected: test.expected.clone().unwrap_or_default(),
            actual: test.actual.clone().unwrap_or_default(),
            message: test.message.clone().unwrap_or_default(),
        }
    }
}

/// Per-category sealed/open counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryComparison {
    /// Sealed records in the category.
    pub sealed: usize,
    /// Open records in the category.
    pub open: usize,
    /// `sealed - open`; negative when the open suite covers more.
    pub delta: i64,
}

impl CategoryComparison {
    /// Counts for one category; `delta` is derived.
    pub fn new(sealed: usize, open: usize) -> Self {
        Self {
            sealed,
            open,
            delta: sealed as i64 - open as i64,
        }
    }
}

/// Coverage comparison over the four fixed categories, in report order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoverageComparison(IndexMap<TestCategory, CategoryComparison>);

impl CoverageComparison {
    /// An empty comparison.
    pub fn new() -> Self {
        Self(IndexMap::with_capacity(TestCategory::all().len()))
    }

    /// Set the counts for a category, keeping first-insertion order.
    pub fn insert(&mut self, category: TestCategory, comparison: CategoryComparison) {
        self.0.insert(category, comparison);
    }

    /// Counts for a category, if present.
    pub fn get(&self, category: TestCategory) -> Option<&CategoryComparison> {
        self.0.get(&category)
    }

    /// Categories and counts in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&TestCategory, &CategoryComparison)> {
        self.0.iter()
    }

    /// Number of categories present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no category is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The `report` object: the score and its level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportSummary {
    /// Decides the score key.
    pub flavor: ScoreFlavor,
    /// Sealed score, rounded to one decimal.
    pub score: f64,
    /// Severity of `score`.
    pub level: GapLevel,
}

impl Serialize for ReportSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.flavor.score_key(), &self.score)?;
        map.serialize_entry("level", &self.level)?;
        map.end()
    }
}

/// The externally emitted report.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Decides the version and score keys.
    pub flavor: ScoreFlavor,
    /// Report contract version, [`SPEC_VERSION`].
    pub spec_version: &'static str,
    /// The `report` object.
    pub summary: ReportSummary,
    /// Sealed suite totals.
    pub sealed_tests: SuiteStats,
    /// Sealed failures in input order.
    pub failures: Vec<FailureEntry>,
    /// Open suite totals; present only with an open suite.
    pub open_tests: Option<SuiteStats>,
    /// Per-category counts; present only with an open suite.
    pub coverage_comparison: Option<CoverageComparison>,
}

impl Report {
    /// The sealed score.
    pub fn score(&self) -> f64 {
        self.summary.score
    }

    /// Severity of the sealed score.
    pub fn level(&self) -> GapLevel {
        self.summary.level
    }

    /// Checks the structural invariants of the report, returning one
    /// message per violation.
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        let sealed = &self.sealed_tests;
        if sealed.passed + sealed.failed != sealed.total {
            violations.push(format!(
                "sealed_tests: passed ({}) + failed ({}) != total ({})",
                sealed.passed, sealed.failed, sealed.total
            ));
        }
        if self.failures.len() != sealed.failed {
            violations.push(format!(
                "failures: {} entries but sealed_tests.failed is {}",
                self.failures.len(),
                sealed.failed
            ));
        }
        if sealed.total == 0 && (self.summary.score != 0.0 || !self.summary.level.is_perfect()) {
            violations.push("empty sealed suite must score 0.0 / perfect".to_string());
        }
        if let Some(open) = &self.open_tests {
            if open.passed + open.failed != open.total {
                violations.push(format!(
                    "open_tests: passed ({}) + failed ({}) != total ({})",
                    open.passed, open.failed, open.total
                ));
            }
        }
        if self.open_tests.is_some() != self.coverage_comparison.is_some() {
            violations.push("open_tests and coverage_comparison must appear together".to_string());
        }

        violations
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 4
            + usize::from(self.open_tests.is_some())
            + usize::from(self.coverage_comparison.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry(self.flavor.version_key(), self.spec_version)?;
        map.serialize_entry("report", &self.summary)?;
        map.serialize_entry("sealed_tests", &self.sealed_tests)?;
        map.serialize_entry("failures", &self.failures)?;
        if let Some(open) = &self.open_tests {
            map.serialize_entry("open_tests", open)?;
        }
        if let Some(coverage) = &self.coverage_comparison {
            map.serialize_entry("coverage_comparison", coverage)?;
        }
        map.end()
    }
}
