//! Configuration management.
//!
//! Settings are layered, later sources overriding earlier ones:
//! 1. Built-in defaults
//! 2. `~/.gap-score/config.toml`
//! 3. `./gap-score.toml`
//! 4. Environment variables prefixed with `GAP_SCORE_`
//!
//! Command-line flags are applied on top by the binaries.

use gap_score_domain::{ConfigError, ScoreFlavor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// How a report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Summary,
    Table,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
            Self::Table => write!(f, "table"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "summary" => Ok(Self::Summary),
            "table" => Ok(Self::Table),
            _ => Err(format!(
                "Unknown output format: {}. Use json, summary, or table",
                s
            )),
        }
    }
}

/// Resolved configuration for a scoring run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Gate threshold; no gate when unset
    #[serde(default)]
    pub threshold: Option<f64>,

    #[serde(default)]
    pub format: ReportFormat,

    #[serde(default)]
    pub flavor: ScoreFlavor,

    /// Colored terminal output
    #[serde(default = "default_colored")]
    pub colored: bool,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub json_logging: bool,
}

fn default_colored() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            threshold: None,
            format: ReportFormat::default(),
            flavor: ScoreFlavor::default(),
            colored: default_colored(),
            log_level: default_log_level(),
            json_logging: false,
        }
    }
}

/// Where configuration is read from
#[derive(Debug, Clone)]
pub struct ConfigSources {
    /// Per-user file, `~/.gap-score/config.toml` by default
    pub user_file: Option<PathBuf>,
    /// Per-project file, `./gap-score.toml` by default
    pub project_file: Option<PathBuf>,
    /// Environment variable prefix, without the trailing underscore
    pub env_prefix: String,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            user_file: dirs::home_dir().map(|home| home.join(".gap-score").join("config.toml")),
            project_file: Some(PathBuf::from("gap-score.toml")),
            env_prefix: "GAP_SCORE".to_string(),
        }
    }
}

impl ScoreConfig {
    /// Load configuration from the default sources.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gap_score_common::config::ScoreConfig;
    ///
    /// let config = ScoreConfig::load().expect("Failed to load configuration");
    /// println!("Threshold: {:?}", config.threshold);
    /// ```
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&ConfigSources::default())
    }

    /// Load configuration from explicit sources. Missing files are skipped.
    pub fn load_from(sources: &ConfigSources) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        for file in [&sources.user_file, &sources.project_file]
            .into_iter()
            .flatten()
        {
            builder = builder.add_source(
                config::File::from(file.as_path())
                    .format(config::FileFormat::Toml)
                    .required(false),
            );
        }

        // Example: GAP_SCORE_THRESHOLD=15
        let config = builder
            .add_source(
                config::Environment::with_prefix(&sources.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        let mut score_config: ScoreConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            score_config.colored = false;
        }

        score_config.validate()?;
        Ok(score_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(threshold) = self.threshold {
            if !threshold.is_finite() {
                return Err(ConfigError::InvalidThreshold(threshold));
            }
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }

        Ok(())
    }
}
