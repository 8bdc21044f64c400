//! Text and JSON renderings of a [`Report`].

use gap_score_domain::Report;
use std::fmt::Write;

/// Pretty-printed JSON with 2-space indentation.
pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Headline lines shared by the summary and table renderings.
pub fn render_headline(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {:.1}% {} ({})",
        report.flavor.display_name(),
        report.score(),
        report.level().indicator(),
        report.level()
    );
    let sealed = &report.sealed_tests;
    let _ = writeln!(out, "Sealed: {}/{} passed", sealed.passed, sealed.total);
    if let Some(open) = &report.open_tests {
        let _ = writeln!(out, "Open:   {}/{} passed", open.passed, open.total);
    }
    out
}

/// Human-readable summary.
///
/// ```text
/// Gap Score: 11.1% 🟢 (minor)
/// Sealed: 16/18 passed
/// Open:   3/3 passed
///
/// Failures (2):
///   ❌ rejects_empty_password: expected 400
/// ```
pub fn render_summary(report: &Report) -> String {
    let mut out = render_headline(report);
    if !report.failures.is_empty() {
        let _ = writeln!(out, "\nFailures ({}):", report.failures.len());
        for failure in &report.failures {
            let _ = writeln!(out, "  ❌ {}: {}", failure.test_name, failure.message);
        }
    }
    out
}
