//! Parameters and schema elements.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a parameter is carried in the request.
///
/// Locations outside OpenAPI 3 (`formData`, `body` from Swagger 2, vendor
/// values) are kept in [`ParameterLocation::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    Other(String),
}

impl ParameterLocation {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Header => "header",
            Self::Cookie => "cookie",
            Self::Other(location) => location,
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ParameterLocation {
    fn from(s: String) -> Self {
        match s.as_str() {
            "path" => Self::Path,
            "query" => Self::Query,
            "header" => Self::Header,
            "cookie" => Self::Cookie,
            _ => Self::Other(s),
        }
    }
}

impl From<ParameterLocation> for String {
    fn from(location: ParameterLocation) -> Self {
        match location {
            ParameterLocation::Other(location) => location,
            known => known.as_str().to_string(),
        }
    }
}

/// An operation parameter.
///
/// The name is optional only because unresolved references in an API
/// document can produce nameless parameters; reports reject them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<ParameterLocation>,
}

impl Parameter {
    /// Create an optional parameter with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// The part of a schema that reports care about.
///
/// `type` is kept as raw JSON: OpenAPI 3.1 allows a list of types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<serde_json::Value>,
}

/// A schema fragment together with its element locator.
///
/// The locator is a structural path such as `body.owner.name` naming where
/// in a parameter or response the element lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaElement {
    #[serde(alias = "el")]
    pub locator: String,
    #[serde(default)]
    pub schema: Schema,
}

impl SchemaElement {
    pub fn new(locator: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            schema: Schema::default(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.schema.description = Some(description.into());
        self
    }

    /// Description carried by the schema fragment, if any
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.schema.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_defaults() {
        let param: Parameter = serde_json::from_str("{}").expect("empty object is valid");
        assert!(param.name.is_none());
        assert!(param.description.is_none());
        assert!(!param.required);
    }

    #[test]
    fn test_parameter_location_field() {
        let param: Parameter =
            serde_json::from_str(r#"{"name":"id","in":"path","required":true}"#).expect("valid");
        assert_eq!(
            param,
            Parameter {
                location: Some(ParameterLocation::Path),
                ..Parameter::new("id").required(true)
            }
        );
    }

    #[test]
    fn test_unknown_location_is_kept() {
        let param: Parameter =
            serde_json::from_str(r#"{"name":"file","in":"formData"}"#).expect("valid");
        assert_eq!(
            param.location,
            Some(ParameterLocation::Other("formData".to_string()))
        );
        assert_eq!(
            serde_json::to_string(&param.location).expect("serializes"),
            "\"formData\""
        );
    }

    #[test]
    fn test_type_list_is_accepted() {
        let element: SchemaElement = serde_json::from_str(
            r#"{"el":"owner.nickname","schema":{"type":["string","null"]}}"#,
        )
        .expect("valid");
        assert_eq!(
            element.schema.schema_type,
            Some(serde_json::json!(["string", "null"]))
        );
        assert!(element.description().is_none());
    }

    #[test]
    fn test_schema_element_accepts_el_alias() {
        let element: SchemaElement = serde_json::from_str(
            r#"{"el":"owner.name","schema":{"type":"string","description":"Owner"}}"#,
        )
        .expect("valid");
        assert_eq!(element.locator, "owner.name");
        assert_eq!(element.description(), Some("Owner"));
        assert_eq!(element.schema.schema_type, Some(serde_json::json!("string")));
    }
}
