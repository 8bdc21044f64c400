//! Fixture suite format.
//!
//! ```json
//! {
//!   "conformance_suite_version": "1.0.0",
//!   "fixtures": [{
//!     "id": "demo-minor",
//!     "description": "16 passed, 2 failed scores 11.1 (minor)",
//!     "input": {"sealed": "results.json", "open": "open.json", "threshold": 15.0},
//!     "expected_output": {"report": {"gap_score": 11.1, "level": "minor"}},
//!     "expected_exit_code": 0
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// A versioned list of fixtures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSuite {
    /// Version of the fixture suite
    pub conformance_suite_version: String,

    /// Fixtures in execution order
    pub fixtures: Vec<Fixture>,
}

/// One validator invocation and its expected result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    /// Unique identifier
    pub id: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Validator inputs
    pub input: FixtureInput,

    /// Expected report; only the exit code is checked when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<serde_json::Value>,

    /// Expected process exit code
    pub expected_exit_code: i32,
}

/// Validator inputs for a fixture
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureInput {
    /// Sealed results file, relative to the suite's base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sealed: Option<String>,

    /// Sealed results document embedded in the fixture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sealed_inline: Option<serde_json::Value>,

    /// Open results file, relative to the suite's base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,

    /// Gate threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}
