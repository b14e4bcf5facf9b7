//! Tool definitions
//!
//! An externally declared callable tool. Definitions are advertised to the
//! generation backend; actually executing a tool is the job of the
//! tool-protocol collaborator, not this crate.

use serde::{Deserialize, Serialize};

use crate::schema::Schema;

/// Declaration of a callable tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique tool name
    pub name: String,
    /// What the tool does and when to use it
    pub description: String,
    /// Schema of the tool's arguments
    pub parameters: Schema,
}

impl ToolDefinition {
    /// Create a tool definition
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Schema,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn serializes_with_parameter_schema() {
        let mut props = BTreeMap::new();
        props.insert("path".to_string(), Schema::string());
        let tool = ToolDefinition::new(
            "read_file",
            "Read the contents of a file",
            Schema::object(props, ["path"]),
        );

        let json = serde_json::to_value(&tool).expect("serialize");
        assert_eq!(json["name"], "read_file");
        assert_eq!(json["parameters"]["type"], "object");
        assert_eq!(json["parameters"]["properties"]["path"]["type"], "string");
    }
}
