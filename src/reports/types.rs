//! Report type definitions.

use serde::{Deserialize, Serialize};

/// Configuration for report generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Escape Markdown-significant characters in paths and summaries.
    ///
    /// Disable to reproduce the raw text of the API documents, at the risk
    /// of text like `*` or `_` being interpreted as formatting.
    pub escape_markdown: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            escape_markdown: true,
        }
    }
}

impl ReportConfig {
    /// Config that writes document text as-is
    #[must_use]
    pub const fn verbatim() -> Self {
        Self {
            escape_markdown: false,
        }
    }
}
