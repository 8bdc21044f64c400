//! Gap Score CLI Library
//!
//! This library provides the commands behind the `gap-score` and
//! `gap-score-conformance` binaries and the terminal output formatting.

pub mod commands;
pub mod output;

pub use output::{JsonFormatter, OutputFormat, SummaryFormatter, TableFormatter};

/// Re-export common types
pub use anyhow::{Context, Result};
