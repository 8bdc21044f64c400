//! Application layer for Gap Score
//!
//! This crate turns test result files into gap score reports.
//!
//! ## Modules
//!
//! - `scoring` - Classification, per-suite scoring and report assembly
//! - `gate` - Threshold gate for CI pipelines
//! - `io` - Loading results files
//! - `render` - JSON and text renderings of a report
//! - `run` - A complete load/score/gate run

pub mod gate;
pub mod io;
pub mod render;
pub mod run;
pub mod scoring;

pub use gate::{GateOutcome, ThresholdGate};
pub use io::{load_results, parse_results};
pub use render::{render_headline, render_json, render_summary};
pub use run::{execute, ScoreRequest, ScoreRun};
pub use scoring::{
    build_coverage, build_report, classify, compute, round_one_decimal, tally, ScoreEngine,
    ScoreEngineConfig,
};
