//! CLI commands

pub mod conformance;
pub mod score;

use anyhow::Result;
use gap_score_common::{init_tracing, telemetry::DEFAULT_LOG_LEVEL};
use gap_score_domain::{AppError, ConfigError, ConformanceError, InputError};

/// Initialize stderr logging from the verbosity flags
pub fn init_logging(verbose: bool, configured_level: &str, json: bool) -> Result<()> {
    let level = if verbose {
        "debug"
    } else if configured_level.is_empty() {
        DEFAULT_LOG_LEVEL
    } else {
        configured_level
    };
    init_tracing(level, json)
}

/// Process exit code for a clap parse failure.
///
/// Help and version requests succeed; every other parse error exits 1.
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

/// Classify a command failure into the shared error taxonomy.
///
/// Context added along the way is kept in the message of
/// [`AppError::Internal`] only; typed errors are recovered from the chain.
pub fn into_app_error(err: anyhow::Error) -> AppError {
    let err = match err.downcast::<AppError>() {
        Ok(app) => return app,
        Err(err) => err,
    };
    let err = match err.downcast::<InputError>() {
        Ok(input) => return input.into(),
        Err(err) => err,
    };
    let err = match err.downcast::<ConformanceError>() {
        Ok(conformance) => return conformance.into(),
        Err(err) => err,
    };
    match err.downcast::<ConfigError>() {
        Ok(config) => config.into(),
        Err(err) => AppError::Internal(format!("{:#}", err)),
    }
}
