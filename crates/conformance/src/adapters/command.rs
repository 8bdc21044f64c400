//! External validator processes.

use async_trait::async_trait;
use gap_score_domain::ConformanceError;
use tokio::process::Command;
use tracing::debug;

use super::{Execution, Invocation, Validator};

/// Runs a validator command line with the invocation's arguments appended.
#[derive(Debug, Clone)]
pub struct CommandValidator {
    program: String,
    args: Vec<String>,
}

impl CommandValidator {
    /// Splits a command line on whitespace. Quoting is not supported.
    pub fn parse(command: &str) -> Result<Self, ConformanceError> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(ConformanceError::EmptyCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl Validator for CommandValidator {
    fn id(&self) -> String {
        self.command_line()
    }

    fn description(&self) -> String {
        format!("external command `{}`", self.command_line())
    }

    async fn run(&self, invocation: &Invocation) -> Result<Execution, ConformanceError> {
        let mut command = Command::new(&self.program);
        command.args(&self.args).args(invocation.to_args());

        debug!(command = %self.command_line(), args = ?invocation.to_args(), "Spawning validator");

        let output = command
            .output()
            .await
            .map_err(|source| ConformanceError::Spawn {
                command: self.command_line(),
                source,
            })?;

        Ok(Execution {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
