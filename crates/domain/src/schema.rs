//! Structured-output schema
//!
//! Describes the shape a caller expects generated output to take. The
//! schema is only a hint passed to the backend; generated text is never
//! validated against it client-side.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Data type of a [`Schema`] node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// Not specified; should not be used in well-formed schemas
    #[default]
    Unspecified,
    /// String type
    String,
    /// Number type
    Number,
    /// Integer type
    Integer,
    /// Boolean type
    Boolean,
    /// Array type
    Array,
    /// Object type
    Object,
}

/// Recursive description of an expected structured output.
///
/// Serializes to the JSON-Schema-shaped form the backend understands
/// (`"type"`, `"enum"`, `"items"`, `"properties"`, `"required"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Schema {
    /// Data type of this node
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Format hint for primitive types, e.g. `float`/`double` for numbers
    /// and `int32`/`int64` for integers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Brief description of the value; may contain examples
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the value may be null
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,
    /// Possible values of a string node with enum format
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    /// Schema of the elements of an array node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Properties of an object node
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
    /// Required properties of an object node
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Schema {
    /// A plain string schema
    #[must_use]
    pub fn string() -> Self {
        Self {
            schema_type: SchemaType::String,
            ..Self::default()
        }
    }

    /// A string schema restricted to the given values
    #[must_use]
    pub fn string_enum<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            schema_type: SchemaType::String,
            format: Some("enum".to_string()),
            enum_values: values.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// A number schema
    #[must_use]
    pub fn number() -> Self {
        Self {
            schema_type: SchemaType::Number,
            ..Self::default()
        }
    }

    /// An integer schema
    #[must_use]
    pub fn integer() -> Self {
        Self {
            schema_type: SchemaType::Integer,
            ..Self::default()
        }
    }

    /// A boolean schema
    #[must_use]
    pub fn boolean() -> Self {
        Self {
            schema_type: SchemaType::Boolean,
            ..Self::default()
        }
    }

    /// An array schema with the given element schema
    #[must_use]
    pub fn array(items: Self) -> Self {
        Self {
            schema_type: SchemaType::Array,
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }

    /// An object schema with the given properties and required names
    #[must_use]
    pub fn object<I, S>(properties: BTreeMap<String, Self>, required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            schema_type: SchemaType::Object,
            properties,
            required: required.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Attach a description to this node
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SchemaType::String).expect("serialize"),
            "\"string\""
        );
        assert_eq!(
            serde_json::to_string(&SchemaType::Unspecified).expect("serialize"),
            "\"unspecified\""
        );
    }

    #[test]
    fn string_schema_serializes_minimally() {
        let json = serde_json::to_string(&Schema::string()).expect("serialize");
        assert_eq!(json, r#"{"type":"string"}"#);
    }

    #[test]
    fn enum_schema_carries_values() {
        let schema = Schema::string_enum(["EAST", "NORTH", "SOUTH", "WEST"]);
        let json = serde_json::to_value(&schema).expect("serialize");
        assert_eq!(json["type"], "string");
        assert_eq!(json["format"], "enum");
        assert_eq!(json["enum"][0], "EAST");
        assert_eq!(json["enum"][3], "WEST");
    }

    #[test]
    fn array_schema_nests_items() {
        let schema = Schema::array(Schema::number());
        let json = serde_json::to_value(&schema).expect("serialize");
        assert_eq!(json["type"], "array");
        assert_eq!(json["items"]["type"], "number");
    }

    #[test]
    fn object_schema_lists_required_properties() {
        let mut props = BTreeMap::new();
        props.insert("name".to_string(), Schema::string());
        props.insert("age".to_string(), Schema::integer());
        let schema = Schema::object(props, ["name"]);

        let json = serde_json::to_value(&schema).expect("serialize");
        assert_eq!(json["type"], "object");
        assert_eq!(json["properties"]["name"]["type"], "string");
        assert_eq!(json["properties"]["age"]["type"], "integer");
        assert_eq!(json["required"], serde_json::json!(["name"]));
    }

    #[test]
    fn nullable_false_is_omitted() {
        let json = serde_json::to_value(Schema::string()).expect("serialize");
        assert!(json.get("nullable").is_none());
    }

    #[test]
    fn round_trips_through_json() {
        let mut props = BTreeMap::new();
        props.insert(
            "tags".to_string(),
            Schema::array(Schema::string()).with_description("free-form labels"),
        );
        let schema = Schema::object(props, ["tags"]);

        let json = serde_json::to_string(&schema).expect("serialize");
        let parsed: Schema = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(schema, parsed);
    }
}
