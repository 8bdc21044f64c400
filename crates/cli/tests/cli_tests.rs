//! Black-box tests of the `gap-score` and `gap-score-conformance` binaries.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn demo(name: &str, file: &str) -> PathBuf {
    workspace_root().join("demos").join(name).join(file)
}

/// `gap-score` isolated from the user's config and environment
fn gap_score() -> Command {
    let mut cmd = Command::cargo_bin("gap-score").unwrap();
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"))
        .env("HOME", env!("CARGO_MANIFEST_DIR"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("GAP_SCORE_THRESHOLD")
        .env_remove("GAP_SCORE_FORMAT")
        .env_remove("GAP_SCORE_FLAVOR");
    cmd
}

fn conformance() -> Command {
    let mut cmd = Command::cargo_bin("gap-score-conformance").unwrap();
    cmd.current_dir(workspace_root())
        .env("HOME", env!("CARGO_MANIFEST_DIR"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("GAP_SCORE_THRESHOLD")
        .env_remove("GAP_SCORE_FORMAT")
        .env_remove("GAP_SCORE_FLAVOR");
    cmd
}

fn write_suite(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Report output
// ============================================================================

#[test]
fn test_json_report_for_minor_demo() {
    let output = gap_score()
        .arg("--sealed")
        .arg(demo("02-minor-gaps", "sealed-results.json"))
        .arg("--open")
        .arg(demo("02-minor-gaps", "open-results.json"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["gap_score_spec_version"], "1.0.0");
    assert_eq!(report["report"]["gap_score"], 11.1);
    assert_eq!(report["report"]["level"], "minor");
    assert_eq!(report["failures"].as_array().unwrap().len(), 2);
    assert_eq!(report["coverage_comparison"]["happy_path"]["delta"], 4);
}

#[test]
fn test_summary_format() {
    gap_score()
        .arg("--sealed")
        .arg(demo("02-minor-gaps", "sealed-results.json"))
        .args(["--format", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Gap Score: 11.1% 🟢 (minor)\nSealed: 16/18 passed\n\nFailures (2):\n",
        ));
}

#[test]
fn test_empty_open_is_treated_as_absent() {
    let output = gap_score()
        .arg("--sealed")
        .arg(demo("02-minor-gaps", "sealed-results.json"))
        .args(["--open", ""])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["report"]["gap_score"], 11.1);
    assert!(report.get("open_tests").is_none());
    assert!(report.get("coverage_comparison").is_none());
}

#[test]
fn test_table_format() {
    gap_score()
        .arg("--sealed")
        .arg(demo("03-critical-gaps", "sealed-results.json"))
        .arg("--open")
        .arg(demo("03-critical-gaps", "open-results.json"))
        .args(["--format", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gap Score: 60.0% 🔴 (critical)"))
        .stdout(predicate::str::contains("Error handling"))
        .stdout(predicate::str::contains("rejects_path_traversal_in_name"));
}

#[test]
fn test_shadow_flavor() {
    let output = gap_score()
        .arg("--sealed")
        .arg(demo("01-perfect-score", "sealed-results.json"))
        .args(["--flavor", "shadow"])
        .output()
        .unwrap();

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["shadow_score_spec_version"], "1.0.0");
    assert_eq!(report["report"]["shadow_score"], 0.0);
}

// ============================================================================
// Threshold gate
// ============================================================================

#[test]
fn test_score_equal_to_threshold_passes() {
    let dir = tempfile::tempdir().unwrap();
    let tests: Vec<String> = (0..10)
        .map(|i| {
            let status = if i == 0 { "failed" } else { "passed" };
            format!(r#"{{"name": "t{}", "status": "{}"}}"#, i, status)
        })
        .collect();
    let sealed = write_suite(
        &dir,
        "sealed.json",
        &format!(r#"{{"tests": [{}]}}"#, tests.join(",")),
    );

    gap_score()
        .arg("--sealed")
        .arg(&sealed)
        .args(["--threshold", "10"])
        .assert()
        .code(0);
}

#[test]
fn test_threshold_exceeded_prints_report_and_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let sealed = write_suite(
        &dir,
        "sealed.json",
        r#"{"tests": [{"name": "a", "status": "passed"}, {"name": "b", "status": "failed"}]}"#,
    );

    gap_score()
        .arg("--sealed")
        .arg(&sealed)
        .args(["--threshold", "15"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"gap_score\": 50.0"))
        .stderr(predicate::str::contains("exceeds threshold"));
}

#[test]
fn test_threshold_from_environment() {
    gap_score()
        .env("GAP_SCORE_THRESHOLD", "50")
        .arg("--sealed")
        .arg(demo("03-critical-gaps", "sealed-results.json"))
        .assert()
        .code(1);
}

#[test]
fn test_threshold_from_project_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("gap-score.toml"),
        "threshold = 5.0\nformat = \"summary\"\n",
    )
    .unwrap();

    gap_score()
        .current_dir(dir.path())
        .arg("--sealed")
        .arg(demo("02-minor-gaps", "sealed-results.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Gap Score: 11.1%"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_sealed_flag_exits_1() {
    gap_score()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--sealed"));
}

#[test]
fn test_help_exits_0() {
    gap_score()
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("--threshold"));
}

#[test]
fn test_malformed_json_exits_2_without_report() {
    let dir = tempfile::tempdir().unwrap();
    let sealed = write_suite(&dir, "sealed.json", r#"{"tests": [ {"name": "#);

    gap_score()
        .arg("--sealed")
        .arg(&sealed)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_missing_file_exits_2() {
    gap_score()
        .args(["--sealed", "/nonexistent/sealed-results.json"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("/nonexistent/sealed-results.json"));
}

#[test]
fn test_missing_tests_key_is_empty_suite() {
    let dir = tempfile::tempdir().unwrap();
    let sealed = write_suite(&dir, "sealed.json", r#"{"runner": "pytest"}"#);

    let output = gap_score().arg("--sealed").arg(&sealed).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["report"]["level"], "perfect");
    assert_eq!(report["sealed_tests"]["total"], 0);
}

// ============================================================================
// Conformance runner
// ============================================================================

#[test]
fn test_conformance_builtin() {
    conformance()
        .assert()
        .success()
        .stdout(predicate::str::contains("Results: 16/16 passed"));
}

#[test]
fn test_conformance_against_gap_score_binary() {
    let binary = assert_cmd::cargo::cargo_bin("gap-score");

    conformance()
        .args(["--verbose", "--validator"])
        .arg(binary)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ demo-minor"))
        .stdout(predicate::str::contains("Results: 16/16 passed"));
}

#[test]
fn test_conformance_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("conformance.json");

    conformance().arg("--report").arg(&report).assert().success();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(written["failed"], 0);
    assert_eq!(written["validator"], "builtin");
}

#[test]
fn test_conformance_missing_suite_exits_2() {
    conformance()
        .args(["--fixtures", "/nonexistent/fixtures.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read fixture suite"));
}
