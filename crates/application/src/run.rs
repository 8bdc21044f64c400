//! One scoring run: load, score, gate.

use crate::gate::{GateOutcome, ThresholdGate};
use crate::io::load_results;
use crate::scoring::ScoreEngine;
use gap_score_domain::{InputError, Report, ScoreFlavor};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Inputs to a single scoring run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreRequest {
    pub sealed: PathBuf,
    pub open: Option<PathBuf>,
    pub threshold: Option<f64>,
    pub flavor: ScoreFlavor,
}

/// The report and the gate decision for one run
#[derive(Debug, Clone)]
pub struct ScoreRun {
    pub report: Report,
    pub gate: GateOutcome,
}

impl ScoreRun {
    pub fn exit_code(&self) -> i32 {
        self.gate.exit_code()
    }
}

/// Load both suites, build the report and evaluate the threshold.
///
/// Any input error aborts the run before a report exists.
#[instrument(skip_all, fields(sealed = %request.sealed.display()))]
pub fn execute(request: &ScoreRequest) -> Result<ScoreRun, InputError> {
    let gate = ThresholdGate::new(request.threshold)?;
    let sealed = load_results(&request.sealed)?;
    let open = request.open.as_deref().map(load_results).transpose()?;

    let report = ScoreEngine::with_flavor(request.flavor).build_report(&sealed, open.as_deref());
    let gate = gate.evaluate(report.score());

    info!(score = report.score(), level = %report.level(), "Scoring complete");
    Ok(ScoreRun { report, gate })
}
