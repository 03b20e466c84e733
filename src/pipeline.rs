//! Load-and-render workflow for diff results stored on disk.
//!
//! The renderer itself never touches the filesystem; these helpers read a
//! serialized [`DiffResult`] and hand it to the configured reporter, adding
//! the file path to any error on the way.

use crate::config::AppConfig;
use crate::diff::DiffResult;
use crate::error::{ApiDiffError, ErrorContext, Result};
use std::path::Path;

/// Read and decode a JSON diff result
pub fn load_diff_file(path: &Path) -> Result<DiffResult> {
    tracing::debug!("Loading diff result: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ApiDiffError::io(path, e))?;
    DiffResult::from_json_str(&content)
        .with_context(|| format!("Failed to parse diff result: {}", path.display()))
}

/// Load a diff result and render it with the reporter `config` describes
pub fn render_diff_file(path: &Path, config: &AppConfig) -> Result<String> {
    let result = load_diff_file(path)?;
    config
        .reporter()
        .render(&result)
        .with_context(|| format!("Failed to render report for {}", path.display()))
}
