//! Gap Score conformance runner
//!
//! Runs the shared fixture suite against a validator and reports which
//! fixtures it gets wrong.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use gap_score_cli::commands::{conformance, init_logging, into_app_error, parse_error_exit_code};
use gap_score_common::telemetry::DEFAULT_LOG_LEVEL;

#[derive(Parser, Debug)]
#[command(name = "gap-score-conformance")]
#[command(author, version, about = "Check a gap score validator against the conformance fixtures")]
struct Cli {
    #[command(flatten)]
    conformance: conformance::ConformanceArgs,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_error_exit_code(&e));
        }
    };

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            let err = into_app_error(e);
            tracing::debug!(code = err.error_code(), "Exiting on error");
            std::process::exit(err.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    init_logging(cli.conformance.verbose, DEFAULT_LOG_LEVEL, false)?;

    conformance::run(&cli.conformance).await
}
