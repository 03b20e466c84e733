//! The "What's Changed" section body.

use super::{details, endpoint_line, InlineText, HARD_BREAK, PRE_LI};
use crate::diff::{ChangedEndpoint, ChangedOperation};
use crate::model::HttpMethod;
use crate::reports::ReportError;

/// Render every changed operation of every changed endpoint, keeping the
/// order of the endpoints and of each endpoint's methods.
pub(super) fn render_changes(
    changed: &[ChangedEndpoint],
    text: InlineText,
) -> Result<String, ReportError> {
    let mut md = String::new();
    for (index, endpoint) in changed.iter().enumerate() {
        for (method, operation) in &endpoint.operations {
            let locator = format!("changedEndpoints[{index}].{method}");
            md.push_str(&render_operation(
                &endpoint.path,
                method,
                operation,
                text,
                &locator,
            )?);
        }
    }
    Ok(md)
}

/// One changed operation: its bullet line, then the parameter and return
/// type blocks the operation's flags ask for.
pub(super) fn render_operation(
    path: &str,
    method: &HttpMethod,
    operation: &ChangedOperation,
    text: InlineText,
    locator: &str,
) -> Result<String, ReportError> {
    tracing::trace!(
        %method,
        path,
        parameters = operation.has_parameter_changes,
        properties = operation.has_property_changes,
        "Rendering changed operation"
    );

    let mut md = endpoint_line(method, path, operation.summary.as_deref(), text, locator)?;
    md.push_str(HARD_BREAK);
    md.push('\n');

    if operation.has_parameter_changes {
        md.push_str(PRE_LI);
        md.push_str("Parameter");
        md.push_str(&details::render_parameter_changes(
            &operation.added_parameters,
            &operation.changed_parameters,
            &operation.removed_parameters,
            locator,
        )?);
    }
    if operation.has_property_changes {
        md.push_str(PRE_LI);
        md.push_str("Return Type");
        md.push_str(&details::render_property_changes(
            &operation.added_properties,
            &operation.removed_properties,
            locator,
        )?);
    }
    Ok(md)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::ChangedParameter;
    use crate::model::{Parameter, SchemaElement};
    use crate::reports::ReportConfig;

    fn text() -> InlineText {
        InlineText::new(&ReportConfig::default())
    }

    #[test]
    fn test_added_parameter_without_description() {
        let operation = ChangedOperation {
            has_parameter_changes: true,
            added_parameters: vec![Parameter::new("tag")],
            ..Default::default()
        };
        let changed =
            vec![ChangedEndpoint::new("/pets/{id}").with_operation(HttpMethod::Put, operation)];

        let md = render_changes(&changed, text()).expect("renders");
        assert_eq!(md, "* `PUT` /pets/{id}  \n    Parameter\n\n        Add tag\n");
        assert!(md.lines().any(|line| line.trim() == "Add tag"));
    }

    #[test]
    fn test_operation_with_no_flags_is_just_the_bullet() {
        let operation = ChangedOperation {
            summary: Some("update a pet".to_string()),
            added_parameters: vec![Parameter::new("ignored")],
            ..Default::default()
        };

        let md = render_operation("/pets/{id}", &HttpMethod::Put, &operation, text(), "op")
            .expect("renders");
        assert_eq!(md, "* `PUT` /pets/{id} update a pet  \n");
    }

    #[test]
    fn test_parameter_block_precedes_return_type_block() {
        let operation = ChangedOperation {
            has_parameter_changes: true,
            has_property_changes: true,
            removed_parameters: vec![Parameter::new("limit").with_description("Page size")],
            added_properties: vec![SchemaElement::new("tag")],
            ..Default::default()
        };

        let md = render_operation("/pets", &HttpMethod::Get, &operation, text(), "op")
            .expect("renders");
        assert_eq!(
            md,
            "* `GET` /pets  \n    Parameter\n\n        Delete limit //Page size\n    Return Type\n\n        Add tag\n"
        );
    }

    #[test]
    fn test_bullet_text_escaped_before_hard_break() {
        let operation = ChangedOperation {
            summary: Some("Update *one* user".to_string()),
            ..Default::default()
        };
        let changed = vec![ChangedEndpoint::new("/users/{user_id}")
            .with_operation(HttpMethod::Patch, operation)];

        let md = render_changes(&changed, text()).expect("renders");
        assert_eq!(md, "* `PATCH` /users/{user\\_id} Update \\*one\\* user  \n");
    }

    #[test]
    fn test_verbatim_bullet_text() {
        let operation = ChangedOperation {
            summary: Some("Update *one* user".to_string()),
            ..Default::default()
        };
        let changed = vec![ChangedEndpoint::new("/users/{user_id}")
            .with_operation(HttpMethod::Patch, operation)];

        let md = render_changes(&changed, InlineText::new(&ReportConfig::verbatim()))
            .expect("renders");
        assert_eq!(md, "* `PATCH` /users/{user_id} Update *one* user  \n");
    }

    #[test]
    fn test_methods_rendered_in_insertion_order() {
        let endpoint = ChangedEndpoint::new("/pets")
            .with_operation(HttpMethod::Post, ChangedOperation::default())
            .with_operation(HttpMethod::Get, ChangedOperation::default());
        let other = ChangedEndpoint::new("/owners")
            .with_operation(HttpMethod::Delete, ChangedOperation::default());

        let md = render_changes(&[endpoint, other], text()).expect("renders");
        assert_eq!(
            md,
            "* `POST` /pets  \n* `GET` /pets  \n* `DELETE` /owners  \n"
        );
    }

    #[test]
    fn test_malformed_changed_parameter_fails_whole_section() {
        let operation = ChangedOperation {
            has_parameter_changes: true,
            changed_parameters: vec![ChangedParameter {
                required_changed: true,
                ..Default::default()
            }],
            ..Default::default()
        };
        let changed = vec![
            ChangedEndpoint::new("/ok")
                .with_operation(HttpMethod::Get, ChangedOperation::default()),
            ChangedEndpoint::new("/pets").with_operation(HttpMethod::Patch, operation),
        ];

        let err = render_changes(&changed, text()).expect_err("malformed");
        match err {
            ReportError::MalformedInput { locator, .. } => {
                assert_eq!(locator, "changedEndpoints[1].PATCH.changedParameters[0].right");
            }
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
    }
}
