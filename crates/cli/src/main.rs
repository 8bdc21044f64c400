//! Gap Score CLI
//!
//! Scores pre-computed test results and optionally gates on a threshold.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use gap_score_cli::commands::{init_logging, into_app_error, parse_error_exit_code, score};
use gap_score_common::ScoreConfig;

#[derive(Parser, Debug)]
#[command(name = "gap-score")]
#[command(author, version, about = "Score how much of a sealed test suite an implementation fails")]
#[command(long_about = "Compute the gap score: the percentage of sealed (hidden) tests an \
    implementation fails, classified into perfect, minor, moderate, significant or critical.\n\n\
    With --threshold the process exits 1 when the score is strictly greater than the threshold, \
    after printing the report.")]
struct Cli {
    #[command(flatten)]
    score: score::ScoreArgs,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_error_exit_code(&e));
        }
    };

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            let err = into_app_error(e);
            tracing::debug!(code = err.error_code(), "Exiting on error");
            std::process::exit(err.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config = ScoreConfig::load()?;

    if cli.no_color || !config.colored {
        colored::control::set_override(false);
    }

    init_logging(cli.verbose, &config.log_level, cli.log_json || config.json_logging)?;

    score::run(&cli.score, &config)
}
