//! Markdown report generator.
//!
//! Layout of a report:
//!
//! ```text
//! ### What's New
//! ---
//! * `GET` /pets list pets
//!
//! ### What's Deleted
//! ---
//!
//! ### What's Deprecated
//! ---
//!
//! ### What's Changed
//! ---
//! * `PUT` /pets/{id} update a pet  
//!     Parameter
//!
//!         Add tag //Tag to apply
//! ```
//!
//! Every section is always present. A changed operation's bullet ends in two
//! spaces, a hard line break. Detail lines under it are indented twice,
//! once for the list item and once for the code block.

mod changes;
mod details;
mod endpoints;

use super::escape::{code_span, escape_markdown_inline};
use super::{ReportConfig, ReportError, ReportGenerator};
use crate::diff::{ChangedEndpoint, ChangedParameter, DiffResult};
use crate::model::{Endpoint, HttpMethod, Parameter, SchemaElement};
use std::borrow::Cow;

pub(crate) const H3: &str = "### ";
pub(crate) const HR: &str = "---\n";
pub(crate) const LI: &str = "* ";
pub(crate) const PRE_LI: &str = "    ";
pub(crate) const PRE_CODE: &str = "    ";
/// Trailing spaces forcing a line break without a paragraph gap
pub(crate) const HARD_BREAK: &str = "  ";

pub(crate) const NEW_TITLE: &str = "What's New";
pub(crate) const DELETED_TITLE: &str = "What's Deleted";
pub(crate) const DEPRECATED_TITLE: &str = "What's Deprecated";
pub(crate) const CHANGED_TITLE: &str = "What's Changed";

/// How document text is written into list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InlineText {
    escape: bool,
}

impl InlineText {
    pub(crate) const fn new(config: &ReportConfig) -> Self {
        Self {
            escape: config.escape_markdown,
        }
    }

    pub(crate) fn render<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.escape {
            Cow::Owned(escape_markdown_inline(text))
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Build the bullet line shared by endpoint lists and changed operations:
/// `* `METHOD` path summary`, with the summary left out when absent.
pub(crate) fn endpoint_line(
    method: &HttpMethod,
    path: &str,
    summary: Option<&str>,
    text: InlineText,
    locator: &str,
) -> Result<String, ReportError> {
    if method.as_str().trim().is_empty() {
        return Err(ReportError::malformed(locator, "HTTP method is empty"));
    }
    if path.is_empty() {
        return Err(ReportError::malformed(locator, "endpoint path is empty"));
    }

    let mut line = String::new();
    line.push_str(LI);
    line.push_str(&code_span(method.as_str()));
    line.push(' ');
    line.push_str(&text.render(path));
    if let Some(summary) = summary {
        line.push(' ');
        line.push_str(&text.render(summary));
    }
    Ok(line)
}

/// Markdown reporter
#[derive(Debug, Clone, Default)]
pub struct MarkdownReporter {
    config: ReportConfig,
}

impl MarkdownReporter {
    /// Create a new Markdown reporter with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Markdown reporter with the given configuration
    #[must_use]
    pub const fn with_config(config: ReportConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    const fn text(&self) -> InlineText {
        InlineText::new(&self.config)
    }

    /// Render the full report: four headed sections in fixed order.
    pub fn render(&self, result: &DiffResult) -> Result<String, ReportError> {
        let summary = result.summary();
        tracing::debug!(
            added = summary.endpoints_added,
            removed = summary.endpoints_removed,
            deprecated = summary.endpoints_deprecated,
            changed = summary.endpoints_changed,
            operations = summary.operations_changed,
            "Rendering Markdown report"
        );

        let text = self.text();
        let new_list = endpoints::render_list(&result.new_endpoints, "newEndpoints", text)?;
        let missing_list =
            endpoints::render_list(&result.missing_endpoints, "missingEndpoints", text)?;
        let deprecated_list =
            endpoints::render_list(&result.deprecated_endpoints, "deprecatedEndpoints", text)?;
        let changed = changes::render_changes(&result.changed_endpoints, text)?;

        Ok(render_sections(
            &new_list,
            &missing_list,
            &deprecated_list,
            &changed,
        ))
    }

    /// Render a flat endpoint list, one bullet per endpoint.
    pub fn render_list(&self, endpoints: &[Endpoint]) -> Result<String, ReportError> {
        endpoints::render_list(endpoints, "endpoints", self.text())
    }

    /// Render the body of the "What's Changed" section.
    pub fn render_changes(&self, changed: &[ChangedEndpoint]) -> Result<String, ReportError> {
        changes::render_changes(changed, self.text())
    }

    /// Render the detail block listing added and removed response properties.
    pub fn render_property_changes(
        &self,
        added: &[SchemaElement],
        removed: &[SchemaElement],
    ) -> Result<String, ReportError> {
        details::render_property_changes(added, removed, "properties")
    }

    /// Render the detail block listing parameter changes.
    pub fn render_parameter_changes(
        &self,
        added: &[Parameter],
        changed: &[ChangedParameter],
        removed: &[Parameter],
    ) -> Result<String, ReportError> {
        details::render_parameter_changes(added, changed, removed, "parameters")
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_diff_report(&self, result: &DiffResult) -> Result<String, ReportError> {
        self.render(result)
    }
}

/// Stitch the section bodies under their headings.
fn render_sections(
    new_list: &str,
    missing_list: &str,
    deprecated_list: &str,
    changed: &str,
) -> String {
    let mut md = String::with_capacity(
        new_list.len() + missing_list.len() + deprecated_list.len() + changed.len() + 96,
    );
    push_section(&mut md, NEW_TITLE, new_list);
    md.push('\n');
    push_section(&mut md, DELETED_TITLE, missing_list);
    md.push('\n');
    push_section(&mut md, DEPRECATED_TITLE, deprecated_list);
    md.push('\n');
    push_section(&mut md, CHANGED_TITLE, changed);
    md
}

fn push_section(md: &mut String, title: &str, body: &str) {
    md.push_str(H3);
    md.push_str(title);
    md.push('\n');
    md.push_str(HR);
    md.push_str(body);
}
