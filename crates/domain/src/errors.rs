//! Error types for the Gap Score toolchain.
//!
//! This module defines the error hierarchy shared by the engine, the CLI and
//! the conformance runner. Every top-level error carries a machine-readable
//! code and the process exit code it maps to.

use std::path::PathBuf;

/// Exit code for a threshold breach. Not an error: the report is printed first.
pub const EXIT_GATE_FAILED: i32 = 1;

/// Exit code for fatal input, configuration and runner errors.
pub const EXIT_ERROR: i32 = 2;

/// Top-level application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Problems with a results file or a CLI value
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Problems running the conformance suite
    #[error("Conformance error: {0}")]
    Conformance(#[from] ConformanceError),

    /// Problems loading or validating configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Input(_) => "INPUT_ERROR",
            Self::Conformance(_) => "CONFORMANCE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        EXIT_ERROR
    }
}

/// Errors reading test results or CLI values
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The results file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The results file is not valid JSON of the expected shape
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Threshold is NaN or infinite
    #[error("Threshold must be a finite number, got {0}")]
    InvalidThreshold(f64),
}

/// Conformance runner errors
#[derive(Debug, thiserror::Error)]
pub enum ConformanceError {
    /// The fixture suite could not be read
    #[error("Failed to read fixture suite {}: {source}", .path.display())]
    FixtureRead {
        /// Suite file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The fixture suite is malformed
    #[error("Failed to parse fixture suite {}: {source}", .path.display())]
    FixtureParse {
        /// Suite file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A fixture has neither `sealed` nor `sealed_inline`
    #[error("Fixture {0} has no sealed input")]
    MissingSealedInput(String),

    /// The validator command string is empty
    #[error("Validator command is empty")]
    EmptyCommand,

    /// The validator process could not be started
    #[error("Failed to spawn validator `{command}`: {source}")]
    Spawn {
        /// Program that failed to start
        command: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Inline fixture input could not be staged on disk
    #[error("Failed to stage inline input: {0}")]
    Staging(#[source] std::io::Error),
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration sources could not be merged or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(String),

    /// Configured threshold is NaN or infinite
    #[error("Configured threshold must be a finite number, got {0}")]
    InvalidThreshold(f64),

    /// Log level is not one of trace/debug/info/warn/error
    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}

/// Application-wide result type
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::Input(InputError::InvalidThreshold(f64::NAN));
        assert_eq!(err.error_code(), "INPUT_ERROR");
        assert_eq!(err.exit_code(), EXIT_ERROR);

        let err = AppError::Conformance(ConformanceError::EmptyCommand);
        assert_eq!(err.error_code(), "CONFORMANCE_ERROR");

        let err = AppError::Config(ConfigError::InvalidLogLevel("loud".to_string()));
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_messages_include_path() {
        let err = InputError::Read {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_gate_and_error_exit_codes_differ() {
        assert_ne!(EXIT_GATE_FAILED, EXIT_ERROR);
    }
}
