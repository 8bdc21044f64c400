//! Scoring Engine - Core scoring and classification logic
//!
//! The scoring engine turns lists of pre-computed test results into a gap
//! score, classifies it, compares sealed and open category coverage, and
//! assembles the externally emitted [`Report`].
//!
//! Everything here is a pure function of its inputs: no I/O, no shared
//! state, and identical inputs always yield identical reports.

use gap_score_domain::{
    CategoryComparison, CoverageComparison, FailureEntry, GapLevel, Report, ReportSummary,
    ScoreFlavor, ScoreResult, SuiteStats, TestCategory, TestResult, LEVEL_TABLE, SPEC_VERSION,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Round to one decimal place, halves away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Classify a score into its severity level and indicator.
///
/// Returns the first tier of [`LEVEL_TABLE`] whose upper bound is `>= score`,
/// so boundary values belong to the lower tier (`15.0` is minor, `15.1` is
/// moderate). Anything above 100 falls through to critical.
pub fn classify(score: f64) -> (GapLevel, &'static str) {
    let level = LEVEL_TABLE
        .iter()
        .find(|(bound, _)| score <= *bound)
        .map(|(_, level)| *level)
        .unwrap_or(GapLevel::Critical);
    (level, level.indicator())
}

/// Compute the score for one suite.
///
/// An empty suite scores `0.0` / perfect. Otherwise the score is the
/// percentage of records with status `failed`, rounded to one decimal.
pub fn compute(tests: &[TestResult]) -> ScoreResult {
    if tests.is_empty() {
        return ScoreResult::empty();
    }

    let failures: Vec<TestResult> = tests.iter().filter(|t| t.is_failed()).cloned().collect();
    let total = tests.len();
    let failed = failures.len();
    let score = round_one_decimal(failed as f64 / total as f64 * 100.0);
    let (level, _) = classify(score);

    ScoreResult {
        score,
        level,
        total,
        passed: total - failed,
        failed,
        failures,
    }
}

/// Count records per fixed category in each suite independently.
///
/// Records with a missing or unrecognized category are not counted.
pub fn build_coverage(sealed: &[TestResult], open: &[TestResult]) -> CoverageComparison {
    let mut comparison = CoverageComparison::new();
    for &category in TestCategory::all() {
        let sealed_count = sealed.iter().filter(|t| t.in_category(category)).count();
        let open_count = open.iter().filter(|t| t.in_category(category)).count();
        comparison.insert(category, CategoryComparison::new(sealed_count, open_count));
    }
    comparison
}

/// Tally total/passed/failed without collecting failures.
pub fn tally(tests: &[TestResult]) -> SuiteStats {
    let failed = tests.iter().filter(|t| t.is_failed()).count();
    SuiteStats {
        total: tests.len(),
        passed: tests.len() - failed,
        failed,
    }
}

/// Build a `gap_score` report. See [`ScoreEngine::build_report`].
pub fn build_report(sealed: &[TestResult], open: Option<&[TestResult]>) -> Report {
    ScoreEngine::default().build_report(sealed, open)
}

/// Scoring engine configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEngineConfig {
    /// Naming of the score in emitted reports
    pub flavor: ScoreFlavor,
}

/// The main scoring engine
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    config: ScoreEngineConfig,
}

impl ScoreEngine {
    /// Create a new scoring engine
    pub fn new(config: ScoreEngineConfig) -> Self {
        Self { config }
    }

    /// Create an engine that emits reports under the given flavor
    pub fn with_flavor(flavor: ScoreFlavor) -> Self {
        Self::new(ScoreEngineConfig { flavor })
    }

    pub fn flavor(&self) -> ScoreFlavor {
        self.config.flavor
    }

    /// Build the full report.
    ///
    /// `open_tests` and `coverage_comparison` are present if and only if an
    /// open suite is supplied (an empty open suite still counts as supplied).
    #[instrument(skip(self, sealed, open), fields(sealed = sealed.len(), has_open = open.is_some()))]
    pub fn build_report(&self, sealed: &[TestResult], open: Option<&[TestResult]>) -> Report {
        let result = compute(sealed);
        let flavor = self.config.flavor;

        debug!(
            score = result.score,
            level = %result.level,
            failed = result.failed,
            total = result.total,
            "Sealed suite scored"
        );

        let (open_tests, coverage_comparison) = match open {
            Some(open) => {
                let stats = tally(open);
                debug!(total = stats.total, failed = stats.failed, "Open suite tallied");
                (Some(stats), Some(build_coverage(sealed, open)))
            }
            None => (None, None),
        };

        Report {
            flavor,
            spec_version: SPEC_VERSION,
            summary: ReportSummary {
                flavor,
                score: result.score,
                level: result.level,
            },
            sealed_tests: SuiteStats::from(&result),
            failures: result.failures.iter().map(FailureEntry::from).collect(),
            open_tests,
            coverage_comparison,
        }
    }
}
