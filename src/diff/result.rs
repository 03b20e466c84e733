//! Diff result structures.

use crate::model::{Endpoint, HttpMethod, Parameter, SchemaElement};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Changed operations of one path, in the order the comparison found them.
pub type OperationMap = IndexMap<HttpMethod, ChangedOperation>;

/// Complete result of an API diff.
///
/// Every list defaults to empty when absent from the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[must_use]
pub struct DiffResult {
    /// Endpoints only present in the new document
    pub new_endpoints: Vec<Endpoint>,
    /// Endpoints only present in the old document
    pub missing_endpoints: Vec<Endpoint>,
    /// Endpoints newly marked as deprecated
    pub deprecated_endpoints: Vec<Endpoint>,
    /// Endpoints present in both documents with differences
    pub changed_endpoints: Vec<ChangedEndpoint>,
}

impl DiffResult {
    /// Create a new empty diff result
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a diff result from its JSON form
    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check if there are any changes
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.new_endpoints.is_empty()
            || !self.missing_endpoints.is_empty()
            || !self.deprecated_endpoints.is_empty()
            || !self.changed_endpoints.is_empty()
    }

    /// Calculate summary statistics
    pub fn summary(&self) -> DiffSummary {
        DiffSummary {
            endpoints_added: self.new_endpoints.len(),
            endpoints_removed: self.missing_endpoints.len(),
            endpoints_deprecated: self.deprecated_endpoints.len(),
            endpoints_changed: self.changed_endpoints.len(),
            operations_changed: self
                .changed_endpoints
                .iter()
                .map(|endpoint| endpoint.operations.len())
                .sum(),
        }
    }
}

/// Summary statistics for a diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct DiffSummary {
    pub endpoints_added: usize,
    pub endpoints_removed: usize,
    pub endpoints_deprecated: usize,
    pub endpoints_changed: usize,
    pub operations_changed: usize,
}

/// A path whose operations differ between the two documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangedEndpoint {
    /// Path template, e.g. `/pets/{id}`
    #[serde(alias = "pathUrl")]
    pub path: String,
    /// Changed operations keyed by method, insertion ordered
    #[serde(default, alias = "changedOperations")]
    pub operations: OperationMap,
}

impl ChangedEndpoint {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            operations: OperationMap::new(),
        }
    }

    /// Append a changed operation. A method already present keeps its
    /// position and has its operation replaced.
    #[must_use]
    pub fn with_operation(
        mut self,
        method: impl Into<HttpMethod>,
        operation: ChangedOperation,
    ) -> Self {
        self.operations.insert(method.into(), operation);
        self
    }
}

/// Differences found for one method of one path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangedOperation {
    pub summary: Option<String>,
    /// Set by the comparison when parameters differ
    #[serde(alias = "diffParam")]
    pub has_parameter_changes: bool,
    /// Set by the comparison when the response schema differs
    #[serde(alias = "diffProp")]
    pub has_property_changes: bool,
    #[serde(alias = "addParameters")]
    pub added_parameters: Vec<Parameter>,
    #[serde(alias = "missingParameters")]
    pub removed_parameters: Vec<Parameter>,
    #[serde(alias = "changedParameter")]
    pub changed_parameters: Vec<ChangedParameter>,
    #[serde(alias = "addProps")]
    pub added_properties: Vec<SchemaElement>,
    #[serde(alias = "missingProps")]
    pub removed_properties: Vec<SchemaElement>,
}

impl ChangedOperation {
    /// Whether anything about this operation actually changed
    #[must_use]
    pub fn is_diff(&self) -> bool {
        self.has_parameter_changes
            || self.has_property_changes
            || !self.added_parameters.is_empty()
            || !self.removed_parameters.is_empty()
            || !self.changed_parameters.is_empty()
            || !self.added_properties.is_empty()
            || !self.removed_properties.is_empty()
    }
}

/// A parameter present in both documents whose definition changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangedParameter {
    /// Definition in the old document
    #[serde(alias = "leftParameter")]
    pub left: Parameter,
    /// Definition in the new document
    #[serde(alias = "rightParameter")]
    pub right: Parameter,
    #[serde(alias = "changeRequired")]
    pub required_changed: bool,
    #[serde(alias = "changeDescription")]
    pub description_changed: bool,
    /// Elements added inside an object-typed parameter
    #[serde(alias = "increased")]
    pub increased_properties: Vec<SchemaElement>,
    /// Elements removed from an object-typed parameter
    #[serde(alias = "missing")]
    pub decreased_properties: Vec<SchemaElement>,
}

impl ChangedParameter {
    pub fn new(left: Parameter, right: Parameter) -> Self {
        Self {
            left,
            right,
            ..Self::default()
        }
    }

    /// Whether the parameter itself (not its inner shape) changed
    #[must_use]
    pub const fn is_attribute_change(&self) -> bool {
        self.required_changed || self.description_changed
    }
}
