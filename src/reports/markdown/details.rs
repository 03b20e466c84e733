//! Detail lines for a changed operation.
//!
//! Both blocks open with a blank line and indent each entry as code inside
//! the operation's list item. Additions come first, then changes inside
//! parameters that still exist, then deletions.

use super::{PRE_CODE, PRE_LI};
use crate::diff::ChangedParameter;
use crate::model::{Parameter, SchemaElement};
use crate::reports::escape::{flatten_line, flatten_line_opt};
use crate::reports::ReportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    Add,
    Delete,
}

impl Change {
    const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Delete => "Delete",
        }
    }
}

/// `Add target //description`, without the comment when there is no description.
fn change_line(change: Change, target: &str, description: Option<&str>) -> String {
    let mut line = format!("{} {}", change.label(), flatten_line(target));
    if let Some(description) = description {
        line.push_str(" //");
        line.push_str(&flatten_line(description));
    }
    line
}

fn parameter_name<'a>(param: &'a Parameter, locator: &str) -> Result<&'a str, ReportError> {
    match param.name.as_deref() {
        Some(name) if !name.is_empty() => Ok(name),
        Some(_) => Err(ReportError::malformed(locator, "parameter name is empty")),
        None => Err(ReportError::malformed(locator, "parameter has no name")),
    }
}

fn element_locator<'a>(element: &'a SchemaElement, locator: &str) -> Result<&'a str, ReportError> {
    if element.locator.is_empty() {
        Err(ReportError::malformed(locator, "schema element locator is empty"))
    } else {
        Ok(element.locator.as_str())
    }
}

fn parameter_lines(
    params: &[Parameter],
    change: Change,
    field: &str,
    locator: &str,
) -> Result<Vec<String>, ReportError> {
    params
        .iter()
        .enumerate()
        .map(|(index, param)| {
            let name = parameter_name(param, &format!("{locator}.{field}[{index}]"))?;
            Ok(change_line(change, name, param.description.as_deref()))
        })
        .collect()
}

fn element_lines(
    elements: &[SchemaElement],
    change: Change,
    field: &str,
    locator: &str,
) -> Result<Vec<String>, ReportError> {
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            let target = element_locator(element, &format!("{locator}.{field}[{index}]"))?;
            Ok(change_line(change, target, element.description()))
        })
        .collect()
}

/// Lines for elements nested inside each changed parameter.
fn nested_element_lines<F>(
    changed: &[ChangedParameter],
    change: Change,
    field: &str,
    select: F,
    locator: &str,
) -> Result<Vec<String>, ReportError>
where
    F: Fn(&ChangedParameter) -> &[SchemaElement],
{
    let mut lines = Vec::new();
    for (index, param) in changed.iter().enumerate() {
        let param_locator = format!("{locator}.changedParameters[{index}]");
        lines.extend(element_lines(select(param), change, field, &param_locator)?);
    }
    Ok(lines)
}

/// Stage 1: parameters only present in the new document.
pub(super) fn added_parameter_lines(
    added: &[Parameter],
    locator: &str,
) -> Result<Vec<String>, ReportError> {
    parameter_lines(added, Change::Add, "addedParameters", locator)
}

/// Stage 2: elements added inside changed parameters.
pub(super) fn increased_property_lines(
    changed: &[ChangedParameter],
    locator: &str,
) -> Result<Vec<String>, ReportError> {
    nested_element_lines(
        changed,
        Change::Add,
        "increasedProperties",
        |param| param.increased_properties.as_slice(),
        locator,
    )
}

/// Stage 3: one line per changed parameter whose required flag or
/// description changed.
pub(super) fn attribute_change_lines(
    changed: &[ChangedParameter],
    locator: &str,
) -> Result<Vec<String>, ReportError> {
    changed
        .iter()
        .enumerate()
        .filter(|(_, param)| param.is_attribute_change())
        .map(|(index, param)| {
            let param_locator = format!("{locator}.changedParameters[{index}].right");
            attribute_change_line(param, &param_locator)
        })
        .collect()
}

fn attribute_change_line(param: &ChangedParameter, locator: &str) -> Result<String, ReportError> {
    let mut line = flatten_line(parameter_name(&param.right, locator)?);
    if param.required_changed {
        line.push_str(" change into ");
        line.push_str(if param.right.required {
            "required"
        } else {
            "not required"
        });
    }
    if param.description_changed {
        line.push_str(" Notes ");
        line.push_str(&flatten_line_opt(param.left.description.as_deref()));
        line.push_str(" change into ");
        line.push_str(&flatten_line_opt(param.right.description.as_deref()));
    }
    Ok(line)
}

/// Stage 4: elements removed from inside changed parameters.
pub(super) fn decreased_property_lines(
    changed: &[ChangedParameter],
    locator: &str,
) -> Result<Vec<String>, ReportError> {
    nested_element_lines(
        changed,
        Change::Delete,
        "decreasedProperties",
        |param| param.decreased_properties.as_slice(),
        locator,
    )
}

/// Stage 5: parameters only present in the old document.
pub(super) fn removed_parameter_lines(
    removed: &[Parameter],
    locator: &str,
) -> Result<Vec<String>, ReportError> {
    parameter_lines(removed, Change::Delete, "removedParameters", locator)
}

/// Join detail lines into a block following a sub-heading.
fn detail_block(lines: impl IntoIterator<Item = String>) -> String {
    let mut block = String::from("\n\n");
    for line in lines {
        block.push_str(PRE_LI);
        block.push_str(PRE_CODE);
        block.push_str(&line);
        block.push('\n');
    }
    block
}

/// Detail block for response property changes.
pub(super) fn render_property_changes(
    added: &[SchemaElement],
    removed: &[SchemaElement],
    locator: &str,
) -> Result<String, ReportError> {
    let mut lines = element_lines(added, Change::Add, "addedProperties", locator)?;
    lines.extend(element_lines(
        removed,
        Change::Delete,
        "removedProperties",
        locator,
    )?);
    Ok(detail_block(lines))
}

/// Detail block for parameter changes.
pub(super) fn render_parameter_changes(
    added: &[Parameter],
    changed: &[ChangedParameter],
    removed: &[Parameter],
    locator: &str,
) -> Result<String, ReportError> {
    let stages = [
        added_parameter_lines(added, locator)?,
        increased_property_lines(changed, locator)?,
        attribute_change_lines(changed, locator)?,
        decreased_property_lines(changed, locator)?,
        removed_parameter_lines(removed, locator)?,
    ];
    Ok(detail_block(stages.into_iter().flatten()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changed(name: &str) -> ChangedParameter {
        ChangedParameter::new(Parameter::new(name), Parameter::new(name))
    }

    #[test]
    fn test_add_line_without_description_has_no_comment() {
        let lines = added_parameter_lines(&[Parameter::new("tag")], "op").expect("valid");
        assert_eq!(lines, vec!["Add tag"]);
    }

    #[test]
    fn test_comment_suffix_is_verbatim() {
        let lines = added_parameter_lines(
            &[Parameter::new("limit").with_description("How many items to return")],
            "op",
        )
        .expect("valid");
        assert_eq!(lines, vec!["Add limit //How many items to return"]);
    }

    #[test]
    fn test_empty_description_still_gets_comment() {
        let lines = removed_parameter_lines(&[Parameter::new("q").with_description("")], "op")
            .expect("valid");
        assert_eq!(lines, vec!["Delete q //"]);
    }

    #[test]
    fn test_required_change_only() {
        let mut param = changed("status");
        param.right.required = true;
        param.required_changed = true;

        let lines = attribute_change_lines(&[param], "op").expect("valid");
        assert_eq!(lines, vec!["status change into required"]);
        assert!(!lines[0].contains("Notes"));
    }

    #[test]
    fn test_required_and_description_change() {
        let mut param = changed("status");
        param.left.description = Some("Status filter".to_string());
        param.right.description = Some("Status values to filter by".to_string());
        param.required_changed = true;
        param.description_changed = true;

        let lines = attribute_change_lines(&[param], "op").expect("valid");
        assert_eq!(
            lines,
            vec!["status change into not required Notes Status filter change into Status values to filter by"]
        );
    }

    #[test]
    fn test_description_change_with_absent_side() {
        let mut param = changed("limit");
        param.right.description = Some("Page size".to_string());
        param.description_changed = true;

        let lines = attribute_change_lines(&[param], "op").expect("valid");
        assert_eq!(lines, vec!["limit Notes - change into Page size"]);
    }

    #[test]
    fn test_unchanged_attributes_emit_nothing() {
        let mut param = changed("body");
        param.increased_properties = vec![SchemaElement::new("body.tag")];
        assert!(attribute_change_lines(&[param], "op").expect("valid").is_empty());
    }

    #[test]
    fn test_nested_properties_follow_parameter_order() {
        let mut first = changed("body");
        first.increased_properties = vec![
            SchemaElement::new("body.tag"),
            SchemaElement::new("body.owner").with_description("Owner id"),
        ];
        first.decreased_properties = vec![SchemaElement::new("body.legacy")];
        let mut second = changed("filter");
        second.increased_properties = vec![SchemaElement::new("filter.color")];

        let params = [first, second];
        assert_eq!(
            increased_property_lines(&params, "op").expect("valid"),
            vec!["Add body.tag", "Add body.owner //Owner id", "Add filter.color"]
        );
        assert_eq!(
            decreased_property_lines(&params, "op").expect("valid"),
            vec!["Delete body.legacy"]
        );
    }

    #[test]
    fn test_parameter_block_stage_order() {
        let mut modified = changed("status");
        modified.right.required = true;
        modified.required_changed = true;
        modified.increased_properties = vec![SchemaElement::new("status.reason")];
        modified.decreased_properties = vec![SchemaElement::new("status.code")];

        let block = render_parameter_changes(
            &[Parameter::new("tag")],
            &[modified],
            &[Parameter::new("sort").with_description("Sort order")],
            "op",
        )
        .expect("valid");

        assert_eq!(
            block,
            "\n\n        Add tag\n        Add status.reason\n        status change into required\n        Delete status.code\n        Delete sort //Sort order\n"
        );
    }

    #[test]
    fn test_property_block() {
        let block = render_property_changes(
            &[SchemaElement::new("id").with_description("Pet id")],
            &[SchemaElement::new("nickname")],
            "op",
        )
        .expect("valid");
        assert_eq!(block, "\n\n        Add id //Pet id\n        Delete nickname\n");
    }

    #[test]
    fn test_empty_blocks_keep_spacing() {
        assert_eq!(render_property_changes(&[], &[], "op").expect("valid"), "\n\n");
        assert_eq!(
            render_parameter_changes(&[], &[], &[], "op").expect("valid"),
            "\n\n"
        );
    }

    #[test]
    fn test_description_line_breaks_are_flattened() {
        let lines = element_lines(
            &[SchemaElement::new("id").with_description("first\nsecond")],
            Change::Add,
            "addedProperties",
            "op",
        )
        .expect("valid");
        assert_eq!(lines, vec!["Add id //first second"]);
    }

    #[test]
    fn test_nameless_parameter_is_malformed() {
        let nameless = Parameter::default();
        let err = render_parameter_changes(&[], &[], &[nameless], "changedEndpoints[0].PUT")
            .expect_err("nameless parameter");
        match err {
            ReportError::MalformedInput { locator, reason } => {
                assert_eq!(locator, "changedEndpoints[0].PUT.removedParameters[0]");
                assert_eq!(reason, "parameter has no name");
            }
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_changed_parameter_without_new_name_is_malformed() {
        let mut param = ChangedParameter::new(Parameter::new("old"), Parameter::default());
        param.required_changed = true;

        let err = attribute_change_lines(&[param], "op").expect_err("nameless");
        assert!(
            err.to_string().contains("op.changedParameters[0].right"),
            "{}",
            err
        );
    }

    #[test]
    fn test_empty_element_locator_is_malformed() {
        let mut param = changed("body");
        param.decreased_properties = vec![SchemaElement::new("")];

        let err = decreased_property_lines(&[param], "op").expect_err("empty locator");
        assert!(
            err.to_string()
                .contains("op.changedParameters[0].decreasedProperties[0]"),
            "{}",
            err
        );
    }
}
