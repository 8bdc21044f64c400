//! Severity levels for a gap score.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Human-readable severity of a gap score, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapLevel {
    /// No sealed test failed.
    Perfect,
    /// Up to 15% of sealed tests failed.
    Minor,
    /// Up to 30%.
    Moderate,
    /// Up to 50%.
    Significant,
    /// More than half of the sealed suite failed.
    Critical,
}

/// Ascending classification table: a score belongs to the first tier whose
/// upper bound is `>= score`. Each bound is inclusive.
pub const LEVEL_TABLE: [(f64, GapLevel); 5] = [
    (0.0, GapLevel::Perfect),
    (15.0, GapLevel::Minor),
    (30.0, GapLevel::Moderate),
    (50.0, GapLevel::Significant),
    (100.0, GapLevel::Critical),
];

impl GapLevel {
    /// All levels, lowest to highest.
    pub fn all() -> &'static [GapLevel] {
        &[
            Self::Perfect,
            Self::Minor,
            Self::Moderate,
            Self::Significant,
            Self::Critical,
        ]
    }

    /// Wire name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Minor => "minor",
            Self::Moderate => "moderate",
            Self::Significant => "significant",
            Self::Critical => "critical",
        }
    }

    /// Emoji indicator used by the summary output.
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Perfect => "✅",
            Self::Minor => "🟢",
            Self::Moderate => "🟡",
            Self::Significant => "🟠",
            Self::Critical => "🔴",
        }
    }

    /// True for [`GapLevel::Perfect`].
    pub fn is_perfect(&self) -> bool {
        *self == Self::Perfect
    }
}

impl fmt::Display for GapLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GapLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "perfect" => Ok(Self::Perfect),
            "minor" => Ok(Self::Minor),
            "moderate" => Ok(Self::Moderate),
            "significant" => Ok(Self::Significant),
            "critical" => Ok(Self::Critical),
            _ => Err(format!("Unknown gap level: {}", s)),
        }
    }
}
