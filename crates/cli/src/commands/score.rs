//! The scoring command behind `gap-score`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use gap_score_application::{execute, GateOutcome, ScoreRequest};
use gap_score_common::ScoreConfig;
use gap_score_domain::ScoreFlavor;
use tracing::debug;

use crate::output::{colors, render, OutputFormat};

/// Output format for the report
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliOutputFormat {
    /// Pretty-printed JSON report (default)
    Json,
    /// Human-readable summary
    Summary,
    /// Summary with coverage and failure tables
    Table,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Summary => OutputFormat::Summary,
            CliOutputFormat::Table => OutputFormat::Table,
        }
    }
}

/// Naming of the score in the report
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliFlavor {
    /// `gap_score`
    Gap,
    /// `shadow_score`
    Shadow,
}

impl From<CliFlavor> for ScoreFlavor {
    fn from(f: CliFlavor) -> Self {
        match f {
            CliFlavor::Gap => ScoreFlavor::Gap,
            CliFlavor::Shadow => ScoreFlavor::Shadow,
        }
    }
}

/// Arguments of the scoring command
#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Results of the sealed (hidden) test suite
    #[arg(long, value_name = "PATH")]
    pub sealed: PathBuf,

    /// Results of the open (author-written) test suite; empty means none
    #[arg(long, value_name = "PATH")]
    pub open: Option<String>,

    /// Exit 1 when the score is strictly greater than this value
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Output format [default: json]
    #[arg(long, value_enum)]
    pub format: Option<CliOutputFormat>,

    /// Score naming in the report [default: gap]
    #[arg(long, value_enum)]
    pub flavor: Option<CliFlavor>,
}

/// Settings after layering flags over configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedScore {
    pub request: ScoreRequest,
    pub format: OutputFormat,
}

/// Apply command-line flags on top of the loaded configuration.
pub fn resolve(args: &ScoreArgs, config: &ScoreConfig) -> ResolvedScore {
    ResolvedScore {
        request: ScoreRequest {
            sealed: args.sealed.clone(),
            open: args
                .open
                .as_deref()
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            threshold: args.threshold.or(config.threshold),
            flavor: args.flavor.map(Into::into).unwrap_or(config.flavor),
        },
        format: args.format.map(Into::into).unwrap_or(config.format),
    }
}

/// Score the suites, print the report and return the process exit code.
///
/// Input errors are returned before anything is written to stdout.
pub fn run(args: &ScoreArgs, config: &ScoreConfig) -> Result<i32> {
    let resolved = resolve(args, config);
    debug!(?resolved, "Resolved scoring settings");

    let run = execute(&resolved.request)?;
    let output = render(&run.report, resolved.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write report")?;

    if let GateOutcome::Exceeded { score, threshold } = run.gate {
        eprintln!(
            "{} score {:.1} exceeds threshold {}",
            colors::error("Gate failed:"),
            score,
            threshold
        );
    }

    Ok(run.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ScoreArgs {
        ScoreArgs {
            sealed: PathBuf::from("sealed.json"),
            open: None,
            threshold: None,
            format: None,
            flavor: None,
        }
    }

    #[test]
    fn test_config_fills_unset_flags() {
        let config = ScoreConfig {
            threshold: Some(20.0),
            format: OutputFormat::Summary,
            flavor: ScoreFlavor::Shadow,
            ..ScoreConfig::default()
        };

        let resolved = resolve(&args(), &config);

        assert_eq!(resolved.request.threshold, Some(20.0));
        assert_eq!(resolved.request.flavor, ScoreFlavor::Shadow);
        assert_eq!(resolved.format, OutputFormat::Summary);
    }

    #[test]
    fn test_flags_override_config() {
        let config = ScoreConfig {
            threshold: Some(20.0),
            format: OutputFormat::Summary,
            ..ScoreConfig::default()
        };
        let args = ScoreArgs {
            threshold: Some(5.0),
            format: Some(CliOutputFormat::Table),
            flavor: Some(CliFlavor::Gap),
            ..args()
        };

        let resolved = resolve(&args, &config);

        assert_eq!(resolved.request.threshold, Some(5.0));
        assert_eq!(resolved.format, OutputFormat::Table);
    }

    #[test]
    fn test_empty_open_means_no_open_suite() {
        let args = ScoreArgs {
            open: Some(String::new()),
            ..self::args()
        };
        assert_eq!(resolve(&args, &ScoreConfig::default()).request.open, None);

        let args = ScoreArgs {
            open: Some("open.json".to_string()),
            ..self::args()
        };
        assert_eq!(
            resolve(&args, &ScoreConfig::default()).request.open,
            Some(PathBuf::from("open.json"))
        );
    }

    #[test]
    fn test_defaults() {
        let resolved = resolve(&args(), &ScoreConfig::default());
        assert_eq!(resolved.request.threshold, None);
        assert_eq!(resolved.request.flavor, ScoreFlavor::Gap);
        assert_eq!(resolved.format, OutputFormat::Json);
    }
}
