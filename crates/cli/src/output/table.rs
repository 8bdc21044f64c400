//! Table formatting utilities

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, *};
use gap_score_application::render_headline;
use gap_score_domain::{Report, SuiteStats};

use super::colors;

/// Table formatter
pub struct TableFormatter;

impl TableFormatter {
    /// Create a new table with default styling
    pub fn new() -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    /// Create a simple table with headers and rows
    pub fn simple(headers: Vec<&str>, rows: Vec<Vec<String>>) -> String {
        let mut table = Self::new();
        table.set_header(headers);

        for row in rows {
            table.add_row(row);
        }

        table.to_string()
    }

    /// Headline plus suite, coverage and failure tables
    pub fn report(report: &Report) -> String {
        let level = report.level();
        let mut sections = vec![colors::level(render_headline(report).trim_end(), level).to_string()];

        let mut suites = vec![suite_row("Sealed", &report.sealed_tests)];
        if let Some(open) = &report.open_tests {
            suites.push(suite_row("Open", open));
        }
        sections.push(Self::simple(vec!["Suite", "Total", "Passed", "Failed"], suites));

        if let Some(coverage) = &report.coverage_comparison {
            let rows = coverage
                .iter()
                .map(|(category, counts)| {
                    vec![
                        category.display_name().to_string(),
                        counts.sealed.to_string(),
                        counts.open.to_string(),
                        format!("{:+}", counts.delta),
                    ]
                })
                .collect();
            sections.push(Self::simple(vec!["Category", "Sealed", "Open", "Delta"], rows));
        }

        if !report.failures.is_empty() {
            let rows = report
                .failures
                .iter()
                .map(|f| {
                    vec![
                        f.test_name.clone(),
                        f.category.clone(),
                        f.expected.clone(),
                        f.actual.clone(),
                        f.message.clone(),
                    ]
                })
                .collect();
            sections.push(Self::simple(
                vec!["Test", "Category", "Expected", "Actual", "Message"],
                rows,
            ));
        }

        sections.join("\n\n")
    }
}

fn suite_row(name: &str, stats: &SuiteStats) -> Vec<String> {
    vec![
        name.to_string(),
        stats.total.to_string(),
        stats.passed.to_string(),
        stats.failed.to_string(),
    ]
}
