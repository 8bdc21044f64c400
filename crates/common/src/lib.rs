//! Common utilities shared by the Gap Score binaries.
//!
//! This crate provides:
//! - Layered configuration (defaults, config files, environment)
//! - Telemetry setup for structured logging on stderr

pub mod config;
pub mod telemetry;

// Re-export commonly used types
pub use config::{ConfigSources, ReportFormat, ScoreConfig};
pub use telemetry::init_tracing;
