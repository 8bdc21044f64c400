//! Output formatters

use anyhow::Result;
use gap_score_application::{render_json, render_summary};
use gap_score_domain::Report;

/// JSON formatter
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format a report as pretty JSON
    pub fn format(report: &Report) -> Result<String> {
        Ok(render_json(report)?)
    }
}

/// Plain-text summary formatter
pub struct SummaryFormatter;

impl SummaryFormatter {
    /// Format a report as the human-readable summary
    pub fn format(report: &Report) -> String {
        render_summary(report)
    }
}
