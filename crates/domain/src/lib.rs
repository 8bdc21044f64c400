//! Gap Score Domain Types
//!
//! This crate provides the core domain model for the Gap Score toolchain.
//! It defines the input records, severity levels, report wire types and
//! error taxonomy shared by the scoring engine, the CLI and the
//! conformance runner.
//!
//! ## Architecture
//!
//! The domain layer is organized into the following modules:
//!
//! - **test_result**: Input records (`TestResult`), status and category types
//! - **level**: Severity levels and the classification table
//! - **score**: The derived `ScoreResult` for a single suite
//! - **report**: The externally emitted `Report` and its building blocks
//! - **errors**: Error types with machine-readable codes and exit codes
//!
//! ## Usage
//!
//! ```rust
//! use gap_score_domain::{GapLevel, TestCategory, TestResult, TestStatus};
//!
//! let record = TestResult::new("rejects_empty_password", TestStatus::Failed)
//!     .with_category(TestCategory::Security);
//! assert!(record.is_failed());
//!
//! assert_eq!(GapLevel::Minor.as_str(), "minor");
//! assert_eq!(TestCategory::all().len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod level;
pub mod report;
pub mod score;
pub mod test_result;

pub use errors::{
    AppError, AppResult, ConfigError, ConformanceError, InputError, EXIT_ERROR, EXIT_GATE_FAILED,
};
pub use level::{GapLevel, LEVEL_TABLE};
pub use report::{
    CategoryComparison, CoverageComparison, FailureEntry, Report, ReportSummary, ScoreFlavor,
    SuiteStats, SPEC_VERSION,
};
pub use score::ScoreResult;
pub use test_result::{TestCategory, TestResult, TestStatus, TestSuiteFile};
