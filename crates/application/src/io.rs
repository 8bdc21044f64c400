//! Loading test results from disk.

use gap_score_domain::{InputError, TestResult, TestSuiteFile};
use std::path::Path;
use tracing::debug;

/// Parse a results document held in memory.
///
/// `path` is only used to label errors.
pub fn parse_results(path: &Path, content: &str) -> Result<Vec<TestResult>, InputError> {
    let file: TestSuiteFile =
        serde_json::from_str(content).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(file.tests)
}

/// Load a `{"tests": [...]}` results file.
///
/// A file without a `tests` key yields an empty list.
pub fn load_results(path: &Path) -> Result<Vec<TestResult>, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let tests = parse_results(path, &content)?;
    debug!(path = %path.display(), count = tests.len(), "Loaded test results");
    Ok(tests)
}
