//! Scores the bundled demo suites under `demos/`.

use gap_score_application::{execute, load_results, render_summary, ScoreRequest};
use gap_score_domain::{GapLevel, ScoreFlavor, TestCategory};
use std::path::PathBuf;

fn demo(name: &str, file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
        .join(file)
}

fn request(name: &str, threshold: Option<f64>) -> ScoreRequest {
    ScoreRequest {
        sealed: demo(name, "sealed-results.json"),
        open: Some(demo(name, "open-results.json")),
        threshold,
        flavor: ScoreFlavor::Gap,
    }
}

#[test]
fn test_perfect_score_demo() {
    let run = execute(&request("01-perfect-score", Some(0.0))).unwrap();

    assert_eq!(run.report.score(), 0.0);
    assert_eq!(run.report.level(), GapLevel::Perfect);
    assert!(run.report.failures.is_empty());
    assert_eq!(run.exit_code(), 0);
}

#[test]
fn test_minor_gaps_demo() {
    let run = execute(&request("02-minor-gaps", Some(15.0))).unwrap();

    assert_eq!(run.report.score(), 11.1);
    assert_eq!(run.report.level(), GapLevel::Minor);
    assert_eq!(run.report.sealed_tests.total, 18);
    assert_eq!(run.report.sealed_tests.passed, 16);
    assert_eq!(run.report.failures.len(), 2);
    assert_eq!(run.exit_code(), 0);

    let coverage = run.report.coverage_comparison.as_ref().unwrap();
    assert_eq!(coverage.get(TestCategory::HappyPath).unwrap().delta, 4);
    assert_eq!(coverage.get(TestCategory::Security).unwrap().open, 0);
}

#[test]
fn test_critical_gaps_demo_fails_gate() {
    let run = execute(&request("03-critical-gaps", Some(15.0))).unwrap();

    assert_eq!(run.report.score(), 60.0);
    assert_eq!(run.report.level(), GapLevel::Critical);
    assert_eq!(run.report.failures.len(), 6);
    assert_eq!(run.exit_code(), 1);
}

#[test]
fn test_demo_summary_headline() {
    let run = execute(&request("02-minor-gaps", None)).unwrap();
    let summary = render_summary(&run.report);

    assert!(summary.starts_with("Gap Score: 11.1% 🟢 (minor)\nSealed: 16/18 passed\nOpen:   3/3 passed\n"));
    assert!(summary.contains("Failures (2):"));
    assert!(summary.contains("  ❌ rejects_cancel_of_shipped_order: shipped order was cancelled"));
}

#[test]
fn test_every_demo_has_both_suites() {
    for name in ["01-perfect-score", "02-minor-gaps", "03-critical-gaps"] {
        assert!(!load_results(&demo(name, "sealed-results.json")).unwrap().is_empty());
        assert!(!load_results(&demo(name, "open-results.json")).unwrap().is_empty());
    }
}
