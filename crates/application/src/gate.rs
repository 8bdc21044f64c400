//! Threshold gate for CI use.
//!
//! A gate fails only when the score is strictly greater than the threshold;
//! a score exactly at the threshold passes.

use gap_score_domain::{InputError, EXIT_GATE_FAILED};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Outcome of evaluating a score against the gate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GateOutcome {
    /// No threshold configured
    NoThreshold,
    /// Score is at or below the threshold
    Pass { score: f64, threshold: f64 },
    /// Score is strictly above the threshold
    Exceeded { score: f64, threshold: f64 },
}

impl GateOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Exceeded { .. })
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        if self.is_failure() {
            EXIT_GATE_FAILED
        } else {
            0
        }
    }
}

/// Threshold gate
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThresholdGate {
    threshold: Option<f64>,
}

impl ThresholdGate {
    /// Create a gate, rejecting NaN and infinite thresholds
    pub fn new(threshold: Option<f64>) -> Result<Self, InputError> {
        match threshold {
            Some(value) if !value.is_finite() => Err(InputError::InvalidThreshold(value)),
            _ => Ok(Self { threshold }),
        }
    }

    /// A gate that never fails
    pub fn disabled() -> Self {
        Self { threshold: None }
    }

    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    pub fn evaluate(&self, score: f64) -> GateOutcome {
        match self.threshold {
            None => GateOutcome::NoThreshold,
            Some(threshold) if score > threshold => {
                warn!(score, threshold, "Score exceeds threshold");
                GateOutcome::Exceeded { score, threshold }
            }
            Some(threshold) => GateOutcome::Pass { score, threshold },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_to_threshold_passes() {
        let gate = ThresholdGate::new(Some(10.0)).unwrap();
        let outcome = gate.evaluate(10.0);
        assert!(!outcome.is_failure());
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_above_threshold_fails() {
        let gate = ThresholdGate::new(Some(15.0)).unwrap();
        let outcome = gate.evaluate(50.0);
        assert_eq!(outcome, GateOutcome::Exceeded { score: 50.0, threshold: 15.0 });
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn test_no_threshold_never_fails() {
        let outcome = ThresholdGate::disabled().evaluate(100.0);
        assert_eq!(outcome, GateOutcome::NoThreshold);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_zero_threshold() {
        let gate = ThresholdGate::new(Some(0.0)).unwrap();
        assert!(!gate.evaluate(0.0).is_failure());
        assert!(gate.evaluate(0.1).is_failure());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(ThresholdGate::new(Some(f64::NAN)).is_err());
        assert!(ThresholdGate::new(Some(f64::INFINITY)).is_err());
        assert!(ThresholdGate::new(None).is_ok());
    }
}
