//! Gap Score Conformance Runner
//!
//! This crate runs a shared fixture suite against any validator that accepts
//! the common command-line interface (`--sealed`, `--open`, `--threshold`)
//! and checks its exit code and JSON report.
//!
//! ## Modules
//!
//! - **fixture**: The fixture suite format
//! - **io**: Loading suites, staging inline inputs, writing summaries
//! - **check**: Comparing a report against a fixture's expectations
//! - **adapters**: The `Validator` trait, external commands and the builtin engine
//! - **runner**: Sequential suite execution
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gap_score_conformance::{run_suite_file, adapters::BuiltinValidator};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let summary = run_suite_file(
//!         Path::new("crates/conformance/fixtures/fixtures.json"),
//!         &BuiltinValidator::default(),
//!     )
//!     .await?;
//!     println!("Results: {}/{} passed", summary.passed, summary.total());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod check;
pub mod fixture;
pub mod io;
pub mod runner;

use std::path::Path;

use gap_score_domain::ConformanceError;

pub use adapters::{validator_from_spec, BuiltinValidator, CommandValidator, Validator};
pub use check::check_output;
pub use fixture::{Fixture, FixtureInput, FixtureSuite};
pub use runner::{ConformanceRunner, ConformanceSummary, FixtureOutcome};

/// Runs a suite file against `validator`, resolving fixture paths against
/// the suite file's directory.
pub async fn run_suite_file(
    path: &Path,
    validator: &dyn Validator,
) -> Result<ConformanceSummary, ConformanceError> {
    ConformanceRunner::from_file(path)?.run_all(validator).await
}
