//! The conformance command behind `gap-score-conformance`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use gap_score_conformance::{
    io::{write_summary, DEFAULT_FIXTURES_PATH},
    validator_from_spec, ConformanceRunner, ConformanceSummary,
};
use gap_score_domain::ScoreFlavor;

use super::score::CliFlavor;
use crate::output::colors;

/// Arguments of the conformance command
#[derive(Args, Debug, Clone)]
pub struct ConformanceArgs {
    /// Fixture suite to run
    #[arg(long, value_name = "PATH", default_value = DEFAULT_FIXTURES_PATH)]
    pub fixtures: PathBuf,

    /// Validator command line, or `builtin` for the in-process engine
    #[arg(long, value_name = "CMD", default_value = "builtin")]
    pub validator: String,

    /// Directory fixture paths are relative to [default: the suite's directory]
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Score naming expected in validator output
    #[arg(long, value_enum, default_value = "gap")]
    pub flavor: CliFlavor,

    /// Also list passing fixtures
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the run summary as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

/// Run the suite, print results and return the process exit code.
pub async fn run(args: &ConformanceArgs) -> Result<i32> {
    let flavor = ScoreFlavor::from(args.flavor);
    let validator = validator_from_spec(&args.validator, flavor)?;

    let mut runner = ConformanceRunner::from_file(&args.fixtures)?.with_flavor(flavor);
    if let Some(base_dir) = &args.base_dir {
        runner = runner.with_base_dir(base_dir);
    }

    let suite = runner.suite();
    println!(
        "{}",
        format!(
            "{} Conformance Suite v{}",
            flavor.display_name(),
            suite.conformance_suite_version
        )
        .bold()
        .cyan()
    );
    println!("Testing: {}", validator.description());
    println!("Fixtures: {}", suite.fixtures.len());
    println!();

    let summary = runner.run_all(validator.as_ref()).await?;
    print_outcomes(&summary, args.verbose);

    if let Some(path) = &args.report {
        let written = write_summary(&summary, path)
            .with_context(|| format!("Failed to write conformance report to {}", path.display()))?;
        println!("Report: {}", written.display());
    }

    Ok(summary.exit_code())
}

fn print_outcomes(summary: &ConformanceSummary, verbose: bool) {
    for outcome in &summary.outcomes {
        if outcome.passed {
            if verbose {
                println!("  {} {}: {}", colors::success("✅"), outcome.id, outcome.description);
            }
        } else {
            println!("  {} {}: {}", colors::error("❌"), outcome.id.bold(), outcome.description);
            for error in &outcome.errors {
                println!("     → {}", error);
            }
        }
    }

    println!();
    let counts = format!("Results: {}/{} passed", summary.passed, summary.total());
    if summary.all_passed() {
        println!("{} {}", counts, "✅ All conformant".green().bold());
    } else {
        println!("{} {}", counts, format!("({} failed)", summary.failed).red().bold());
    }
}
