//! Derived score for a single suite.

use crate::level::GapLevel;
use crate::test_result::TestResult;
use serde::{Deserialize, Serialize};

/// Score computed over one list of test results.
///
/// In-memory only; the emitted shape is [`crate::report::Report`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Failure percentage in `[0, 100]`, rounded to one decimal.
    pub score: f64,
    /// Severity of `score`.
    pub level: GapLevel,
    /// Number of records scored.
    pub total: usize,
    /// Records not marked failed.
    pub passed: usize,
    /// Records marked failed.
    pub failed: usize,
    /// Failing records in their original input order.
    pub failures: Vec<TestResult>,
}

impl ScoreResult {
    /// The result for an empty suite: zero score, `perfect`.
    pub fn empty() -> Self {
        Self {
            score: 0.0,
            level: GapLevel::Perfect,
            total: 0,
            passed: 0,
            failed: 0,
            failures: Vec::new(),
        }
    }
}

impl Default for ScoreResult {
    fn default() -> Self {
        Self::empty()
    }
}
