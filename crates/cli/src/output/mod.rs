//! Output formatting for CLI

use anyhow::Result;
use gap_score_domain::Report;

mod formatters;
mod table;

pub use formatters::{JsonFormatter, SummaryFormatter};
pub use gap_score_common::ReportFormat as OutputFormat;
pub use table::TableFormatter;

/// Render a report in the requested format, newline-terminated.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Json => JsonFormatter::format(report)?,
        OutputFormat::Summary => SummaryFormatter::format(report),
        OutputFormat::Table => TableFormatter::report(report),
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Color helpers
pub mod colors {
    use colored::*;
    use gap_score_domain::GapLevel;

    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    pub fn error(s: &str) -> ColoredString {
        s.red()
    }

    /// Color a string by severity level
    pub fn level(s: &str, level: GapLevel) -> ColoredString {
        match level {
            GapLevel::Perfect | GapLevel::Minor => s.green(),
            GapLevel::Moderate => s.yellow(),
            GapLevel::Significant => s.truecolor(255, 140, 0),
            GapLevel::Critical => s.red().bold(),
        }
    }
}
