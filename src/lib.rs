//! **Markdown change reports for OpenAPI diff results.**
//!
//! `openapi-diff` takes the result of comparing two versions of an API
//! document and renders it as a Markdown change log: new, deleted,
//! deprecated and changed endpoints, with parameter and response property
//! details for every changed operation.
//!
//! The comparison itself happens upstream. This crate consumes a fully
//! populated [`DiffResult`] (usually deserialized from JSON) and produces a
//! string; rendering is pure and deterministic, so the same input always
//! yields byte-identical output.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: endpoints, HTTP methods, parameters and schema elements.
//! - **[`diff`]**: the [`DiffResult`] structure and its changed endpoints,
//!   operations and parameters.
//! - **[`reports`]**: the [`MarkdownReporter`] and escaping utilities.
//! - **[`config`]**: report options, loadable from `.openapi-diff.yaml`.
//! - **[`pipeline`]**: load a diff result from a JSON file and render it.
//!
//! ## Getting Started
//!
//! ```
//! use openapi_diff::{DiffResult, MarkdownReporter};
//! use openapi_diff::model::{Endpoint, HttpMethod};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = DiffResult {
//!         new_endpoints: vec![Endpoint::new(HttpMethod::Get, "/pets").with_summary("list pets")],
//!         ..Default::default()
//!     };
//!
//!     let report = MarkdownReporter::new().render(&result)?;
//!     assert!(report.starts_with("### What's New\n---\n* `GET` /pets list pets\n"));
//!     Ok(())
//! }
//! ```
//!
//! ### Rendering a serialized diff
//!
//! ```
//! use openapi_diff::{DiffResult, MarkdownReporter};
//!
//! let json = r#"{
//!     "changedEndpoints": [{
//!         "pathUrl": "/pets/{id}",
//!         "changedOperations": {
//!             "PUT": {
//!                 "diffParam": true,
//!                 "addParameters": [{"name": "tag"}]
//!             }
//!         }
//!     }]
//! }"#;
//!
//! let result: DiffResult = serde_json::from_str(json).unwrap();
//! let report = MarkdownReporter::new().render(&result).unwrap();
//! assert!(report.ends_with("* `PUT` /pets/{id}  \n    Parameter\n\n        Add tag\n"));
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, ConfigFileError};
pub use diff::{ChangedEndpoint, ChangedOperation, ChangedParameter, DiffResult, DiffSummary};
pub use error::{ApiDiffError, ErrorContext, Result};
pub use model::{Endpoint, HttpMethod, Parameter, ParameterLocation, Schema, SchemaElement};
pub use pipeline::{load_diff_file, render_diff_file};
pub use reports::{MarkdownReporter, ReportConfig, ReportError, ReportGenerator};
