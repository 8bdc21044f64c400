//! I/O operations for fixture suites and run summaries.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gap_score_domain::ConformanceError;
use tempfile::NamedTempFile;

use crate::fixture::FixtureSuite;
use crate::runner::ConformanceSummary;

/// Default location of the bundled fixture suite, relative to the workspace root.
pub const DEFAULT_FIXTURES_PATH: &str = "crates/conformance/fixtures/fixtures.json";

/// Reads a fixture suite from a JSON file.
pub fn load_suite(path: &Path) -> Result<FixtureSuite, ConformanceError> {
    let content = fs::read_to_string(path).map_err(|source| ConformanceError::FixtureRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConformanceError::FixtureParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Directory that relative fixture paths resolve against when none is given.
pub fn default_base_dir(suite_path: &Path) -> PathBuf {
    match suite_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Writes an inline results document to a temporary file.
///
/// The file is removed when the returned handle is dropped.
pub fn stage_inline(document: &serde_json::Value) -> Result<NamedTempFile, ConformanceError> {
    let mut file = tempfile::Builder::new()
        .prefix("gap-score-fixture-")
        .suffix(".json")
        .tempfile()
        .map_err(ConformanceError::Staging)?;
    let content = serde_json::to_vec(document)
        .map_err(|e| ConformanceError::Staging(std::io::Error::other(e)))?;
    file.write_all(&content).map_err(ConformanceError::Staging)?;
    file.flush().map_err(ConformanceError::Staging)?;
    Ok(file)
}

/// Writes a run summary as pretty-printed JSON.
pub fn write_summary(summary: &ConformanceSummary, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, summary)
        .with_context(|| "Failed to serialize conformance summary")?;

    writer.flush()?;

    Ok(path.to_path_buf())
}
