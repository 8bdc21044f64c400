//! Adapters module for validators under test.
//!
//! This module defines the `Validator` trait and the two implementations:
//! an external command and the in-process engine.

mod builtin;
mod command;

use std::path::PathBuf;

use async_trait::async_trait;
use gap_score_domain::{ConformanceError, ScoreFlavor};

pub use builtin::BuiltinValidator;
pub use command::CommandValidator;

/// Validator spec that selects [`BuiltinValidator`].
pub const BUILTIN_VALIDATOR: &str = "builtin";

/// Arguments for one validator run, with paths already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Sealed results file
    pub sealed: PathBuf,
    /// Open results file
    pub open: Option<PathBuf>,
    /// Gate threshold
    pub threshold: Option<f64>,
}

impl Invocation {
    /// Command-line arguments in the common validator interface.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["--sealed".to_string(), self.sealed.display().to_string()];
        if let Some(open) = &self.open {
            args.push("--open".to_string());
            args.push(open.display().to_string());
        }
        if let Some(threshold) = self.threshold {
            args.push("--threshold".to_string());
            args.push(threshold.to_string());
        }
        args
    }
}

/// Captured result of one validator run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Execution {
    /// Process exit code; `-1` if the process was killed by a signal
    pub exit_code: i32,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

/// A gap score validator that can be exercised by the conformance suite.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use gap_score_conformance::adapters::{Execution, Invocation, Validator};
/// use gap_score_domain::ConformanceError;
///
/// struct AlwaysPerfect;
///
/// #[async_trait]
/// impl Validator for AlwaysPerfect {
///     fn id(&self) -> String {
///         "always-perfect".to_string()
///     }
///
///     async fn run(&self, _invocation: &Invocation) -> Result<Execution, ConformanceError> {
///         Ok(Execution {
///             exit_code: 0,
///             stdout: r#"{"report": {"gap_score": 0.0, "level": "perfect"}}"#.to_string(),
///             stderr: String::new(),
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait Validator: Send + Sync {
    /// Returns an identifier for reports, e.g. the command line.
    fn id(&self) -> String;

    /// Runs the validator once.
    ///
    /// # Errors
    ///
    /// Returns an error only if the validator could not be run at all. A
    /// non-zero exit is reported through [`Execution::exit_code`].
    async fn run(&self, invocation: &Invocation) -> Result<Execution, ConformanceError>;

    /// Returns a human-readable description of this validator.
    ///
    /// Default implementation returns the ID.
    fn description(&self) -> String {
        self.id()
    }
}

/// Builds a validator from a `--validator` value.
///
/// `builtin` selects the in-process engine; anything else is treated as a
/// command line.
pub fn validator_from_spec(
    spec: &str,
    flavor: ScoreFlavor,
) -> Result<Box<dyn Validator>, ConformanceError> {
    if spec.trim() == BUILTIN_VALIDATOR {
        Ok(Box::new(BuiltinValidator::new(flavor)))
    } else {
        Ok(Box::new(CommandValidator::parse(spec)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_args() {
        let invocation = Invocation {
            sealed: PathBuf::from("demos/sealed.json"),
            open: Some(PathBuf::from("demos/open.json")),
            threshold: Some(15.0),
        };
        assert_eq!(
            invocation.to_args(),
            vec![
                "--sealed",
                "demos/sealed.json",
                "--open",
                "demos/open.json",
                "--threshold",
                "15"
            ]
        );
    }

    #[test]
    fn test_invocation_args_sealed_only() {
        let invocation = Invocation {
            sealed: PathBuf::from("s.json"),
            open: None,
            threshold: None,
        };
        assert_eq!(invocation.to_args(), vec!["--sealed", "s.json"]);
    }

    #[test]
    fn test_validator_from_spec() {
        let builtin = validator_from_spec("builtin", ScoreFlavor::Gap).unwrap();
        assert_eq!(builtin.id(), "builtin");

        let command = validator_from_spec("python3 validators/gap-score.py", ScoreFlavor::Gap).unwrap();
        assert_eq!(command.id(), "python3 validators/gap-score.py");

        assert!(validator_from_spec("   ", ScoreFlavor::Gap).is_err());
    }
}
