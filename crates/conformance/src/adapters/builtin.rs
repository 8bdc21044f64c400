//! The in-process engine as a validator.

use async_trait::async_trait;
use gap_score_application::{execute, render_json, ScoreRequest};
use gap_score_domain::{ConformanceError, ScoreFlavor, EXIT_ERROR};

use super::{Execution, Invocation, Validator, BUILTIN_VALIDATOR};

/// Runs the Rust engine directly, producing the same stdout and exit code
/// as the `gap-score` binary with `--format json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinValidator {
    flavor: ScoreFlavor,
}

impl BuiltinValidator {
    /// Creates a validator that emits reports under `flavor`.
    pub fn new(flavor: ScoreFlavor) -> Self {
        Self { flavor }
    }
}

#[async_trait]
impl Validator for BuiltinValidator {
    fn id(&self) -> String {
        BUILTIN_VALIDATOR.to_string()
    }

    fn description(&self) -> String {
        format!("in-process {} engine", self.flavor.display_name())
    }

    async fn run(&self, invocation: &Invocation) -> Result<Execution, ConformanceError> {
        let request = ScoreRequest {
            sealed: invocation.sealed.clone(),
            open: invocation.open.clone(),
            threshold: invocation.threshold,
            flavor: self.flavor,
        };

        let run = match execute(&request) {
            Ok(run) => run,
            Err(e) => {
                return Ok(Execution {
                    exit_code: EXIT_ERROR,
                    stdout: String::new(),
                    stderr: format!("Error: {}\n", e),
                })
            }
        };

        match render_json(&run.report) {
            Ok(json) => Ok(Execution {
                exit_code: run.exit_code(),
                stdout: format!("{}\n", json),
                stderr: String::new(),
            }),
            Err(e) => Ok(Execution {
                exit_code: EXIT_ERROR,
                stdout: String::new(),
                stderr: format!("Error: failed to serialize report: {}\n", e),
            }),
        }
    }
}
