//! Unified error types for openapi-diff.
//!
//! Report generation has its own [`ReportError`]; this module wraps it
//! together with decoding and IO failures so the load-and-render workflow
//! in [`crate::pipeline`] has a single error type, and provides context
//! chaining through [`ErrorContext`].

use crate::reports::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for openapi-diff operations.
///
/// Each variant keeps a message that starts out as the underlying error's
/// text and grows a prefix with every context added.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiDiffError {
    /// Errors during report generation
    #[error("Report generation failed: {message}")]
    Report {
        message: String,
        #[source]
        source: ReportError,
    },

    /// A serialized diff result could not be decoded
    #[error("Invalid diff result: {message}")]
    InvalidDiff {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO errors with context
    #[error("IO error at {}: {message}", .path.display())]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenient Result type for openapi-diff operations
pub type Result<T> = std::result::Result<T, ApiDiffError>;

impl ApiDiffError {
    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
            source,
        }
    }
}

impl From<ReportError> for ApiDiffError {
    fn from(err: ReportError) -> Self {
        Self::Report {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ApiDiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidDiff {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Extension trait for adding context to errors.
///
/// Context strings chain outward, so an error passing through two layers
/// reads `"outer: inner: cause"`.
///
/// ```
/// use openapi_diff::error::ErrorContext;
/// use openapi_diff::DiffResult;
///
/// let err = DiffResult::from_json_str("42").context("loading diff.json").unwrap_err();
/// assert!(err.to_string().starts_with("Invalid diff result: loading diff.json: "));
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ApiDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing message.
fn add_context_to_error(err: ApiDiffError, new_ctx: &str) -> ApiDiffError {
    match err {
        ApiDiffError::Report { message, source } => ApiDiffError::Report {
            message: chain_context(new_ctx, &message),
            source,
        },
        ApiDiffError::InvalidDiff { message, source } => ApiDiffError::InvalidDiff {
            message: chain_context(new_ctx, &message),
            source,
        },
        ApiDiffError::Io {
            path,
            message,
            source,
        } => ApiDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
    }
}

/// Returns `new` alone when `existing` is empty, `"new: existing"` otherwise.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
