//! Flat endpoint lists (new, deleted and deprecated endpoints).

use super::{endpoint_line, InlineText};
use crate::model::Endpoint;
use crate::reports::ReportError;

/// Render one bullet line per endpoint, in input order.
///
/// `field` names the list in error locators, e.g. `newEndpoints[2]`.
pub(super) fn render_list(
    endpoints: &[Endpoint],
    field: &str,
    text: InlineText,
) -> Result<String, ReportError> {
    let mut md = String::new();
    for (index, endpoint) in endpoints.iter().enumerate() {
        let locator = format!("{field}[{index}]");
        md.push_str(&endpoint_line(
            &endpoint.method,
            &endpoint.path,
            endpoint.summary.as_deref(),
            text,
            &locator,
        )?);
        md.push('\n');
    }
    Ok(md)
}
