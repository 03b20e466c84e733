//! Configuration types.

use crate::reports::{MarkdownReporter, ReportConfig};
use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Report rendering options
    pub report: ReportConfig,
}

impl AppConfig {
    /// Build the Markdown reporter this configuration describes
    #[must_use]
    pub fn reporter(&self) -> MarkdownReporter {
        MarkdownReporter::with_config(self.report.clone())
    }
}
