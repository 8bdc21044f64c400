//! Sequential execution of a fixture suite against one validator.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use gap_score_domain::{ConformanceError, ScoreFlavor};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument, warn};

use crate::adapters::{Invocation, Validator};
use crate::check::check_output;
use crate::fixture::{Fixture, FixtureSuite};
use crate::io::{default_base_dir, load_suite, stage_inline};

/// Result of one fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureOutcome {
    /// Fixture identifier
    pub id: String,
    /// Fixture description
    pub description: String,
    /// True when every check passed
    pub passed: bool,
    /// One message per failed check
    pub errors: Vec<String>,
}

/// Result of a whole suite run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceSummary {
    /// Version of the fixture suite that was run
    pub suite_version: String,
    /// Identifier of the validator under test
    pub validator: String,
    /// Number of passing fixtures
    pub passed: usize,
    /// Number of failing fixtures
    pub failed: usize,
    /// Per-fixture outcomes in suite order
    pub outcomes: Vec<FixtureOutcome>,
    /// UTC time the run finished
    pub timestamp: DateTime<Utc>,
}

impl ConformanceSummary {
    /// Total number of fixtures run
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// True when every fixture passed
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Process exit code for the run
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

/// Runs a fixture suite
#[derive(Debug, Clone)]
pub struct ConformanceRunner {
    suite: FixtureSuite,
    base_dir: PathBuf,
    flavor: ScoreFlavor,
}

impl ConformanceRunner {
    /// Creates a runner resolving relative fixture paths against `base_dir`.
    pub fn new(suite: FixtureSuite, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            suite,
            base_dir: base_dir.into(),
            flavor: ScoreFlavor::default(),
        }
    }

    /// Loads a suite file, resolving paths against its directory.
    pub fn from_file(path: &Path) -> Result<Self, ConformanceError> {
        let suite = load_suite(path)?;
        Ok(Self::new(suite, default_base_dir(path)))
    }

    /// Overrides the base directory.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Sets the flavor expected in validator output.
    pub fn with_flavor(mut self, flavor: ScoreFlavor) -> Self {
        self.flavor = flavor;
        self
    }

    /// The loaded suite
    pub fn suite(&self) -> &FixtureSuite {
        &self.suite
    }

    /// Directory relative fixture paths resolve against
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Runs every fixture in order.
    ///
    /// # Errors
    ///
    /// Stops at the first fixture that cannot be run at all, such as a
    /// validator that fails to spawn. Check failures are recorded in the
    /// summary instead.
    #[instrument(skip_all, fields(validator = %validator.id(), fixtures = self.suite.fixtures.len()))]
    pub async fn run_all(&self, validator: &dyn Validator) -> Result<ConformanceSummary, ConformanceError> {
        let mut outcomes = Vec::with_capacity(self.suite.fixtures.len());

        for fixture in &self.suite.fixtures {
            outcomes.push(self.run_fixture(validator, fixture).await?);
        }

        let passed = outcomes.iter().filter(|o| o.passed).count();
        let failed = outcomes.len() - passed;
        info!(passed, failed, "Conformance run complete");

        Ok(ConformanceSummary {
            suite_version: self.suite.conformance_suite_version.clone(),
            validator: validator.id(),
            passed,
            failed,
            outcomes,
            timestamp: Utc::now(),
        })
    }

    /// Runs one fixture and checks its exit code and output.
    pub async fn run_fixture(
        &self,
        validator: &dyn Validator,
        fixture: &Fixture,
    ) -> Result<FixtureOutcome, ConformanceError> {
        // Keeps the staged inline file alive until the validator has run
        let (invocation, _staged) = self.prepare(fixture)?;

        let execution = validator.run(&invocation).await?;
        debug!(
            fixture = %fixture.id,
            exit_code = execution.exit_code,
            stderr = %execution.stderr.trim(),
            "Validator finished"
        );

        let mut errors = Vec::new();
        if execution.exit_code != fixture.expected_exit_code {
            errors.push(format!(
                "exit code: expected {}, got {}",
                fixture.expected_exit_code, execution.exit_code
            ));
        }
        if let Some(expected) = &fixture.expected_output {
            errors.extend(check_output(expected, &execution.stdout, self.flavor));
        }

        if !errors.is_empty() {
            warn!(fixture = %fixture.id, errors = errors.len(), "Fixture failed");
        }

        Ok(FixtureOutcome {
            id: fixture.id.clone(),
            description: fixture.description.clone(),
            passed: errors.is_empty(),
            errors,
        })
    }

    /// Resolves a fixture's inputs, staging inline sealed input on disk.
    fn prepare(
        &self,
        fixture: &Fixture,
    ) -> Result<(Invocation, Option<NamedTempFile>), ConformanceError> {
        let input = &fixture.input;

        let (sealed, staged) = match (&input.sealed, &input.sealed_inline) {
            (Some(path), _) => (self.base_dir.join(path), None),
            (None, Some(document)) => {
                let staged = stage_inline(document)?;
                (staged.path().to_path_buf(), Some(staged))
            }
            (None, None) => return Err(ConformanceError::MissingSealedInput(fixture.id.clone())),
        };

        let invocation = Invocation {
            sealed,
            open: input.open.as_ref().map(|path| self.base_dir.join(path)),
            threshold: input.threshold,
        };
        Ok((invocation, staged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::FixtureInput;

    fn fixture(input: FixtureInput) -> Fixture {
        Fixture {
            id: "f".to_string(),
            description: String::new(),
            input,
            expected_output: None,
            expected_exit_code: 0,
        }
    }

    fn runner() -> ConformanceRunner {
        ConformanceRunner::new(
            FixtureSuite {
                conformance_suite_version: "1.0.0".to_string(),
                fixtures: Vec::new(),
            },
            "/suite",
        )
    }

    #[test]
    fn test_prepare_resolves_paths() {
        let (invocation, staged) = runner()
            .prepare(&fixture(FixtureInput {
                sealed: Some("data/sealed.json".to_string()),
                open: Some("data/open.json".to_string()),
                threshold: Some(10.0),
                ..FixtureInput::default()
            }))
            .unwrap();

        assert!(staged.is_none());
        assert_eq!(invocation.sealed, PathBuf::from("/suite/data/sealed.json"));
        assert_eq!(invocation.open, Some(PathBuf::from("/suite/data/open.json")));
        assert_eq!(invocation.threshold, Some(10.0));
    }

    #[test]
    fn test_prepare_stages_inline_input() {
        let (invocation, staged) = runner()
            .prepare(&fixture(FixtureInput {
                sealed_inline: Some(serde_json::json!({"tests": []})),
                ..FixtureInput::default()
            }))
            .unwrap();

        let staged = staged.unwrap();
        assert_eq!(invocation.sealed, staged.path());
        assert!(invocation.sealed.exists());
    }

    #[test]
    fn test_prepare_requires_sealed_input() {
        let err = runner().prepare(&fixture(FixtureInput::default())).unwrap_err();
        assert!(matches!(err, ConformanceError::MissingSealedInput(id) if id == "f"));
    }

    #[test]
    fn test_summary_exit_code() {
        let summary = ConformanceSummary {
            suite_version: "1.0.0".to_string(),
            validator: "builtin".to_string(),
            passed: 3,
            failed: 1,
            outcomes: Vec::new(),
            timestamp: Utc::now(),
        };
        assert_eq!(summary.total(), 4);
        assert!(!summary.all_passed());
        assert_eq!(summary.exit_code(), 1);
    }
}
