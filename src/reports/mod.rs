//! Report generation for diff results.
//!
//! The Markdown reporter turns a [`DiffResult`] into a change log with four
//! fixed sections: new, deleted, deprecated and changed endpoints.
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! Text taken from the API documents (paths, summaries, descriptions) is
//! escaped or flattened before it is embedded in a report.

pub mod escape;
mod markdown;
mod types;

pub use markdown::MarkdownReporter;
pub use types::ReportConfig;

use crate::diff::DiffResult;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    /// An entry of the diff result lacks data the report needs
    #[error("Malformed input at {locator}: {reason}")]
    MalformedInput { locator: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl ReportError {
    /// Create a malformed-input error for the entry at `locator`
    pub fn malformed(locator: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            locator: locator.into(),
            reason: reason.into(),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from diff results
    fn generate_diff_report(&self, result: &DiffResult) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_diff_report(
        &self,
        result: &DiffResult,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_diff_report(result)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }
}

/// Create the report generator for the given configuration
#[must_use]
pub fn create_reporter(config: ReportConfig) -> Box<dyn ReportGenerator + Send + Sync> {
    Box::new(MarkdownReporter::with_config(config))
}
