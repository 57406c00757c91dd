//! Tool catalog — typed descriptors, input validation, prompt generation.
//!
//! Owns tool *metadata* fetched from the remote server (not implementations —
//! the server keeps those). Descriptors are immutable once fetched; the
//! server remains the source of truth for whether a call is actually valid.

use crate::types::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

// =============================================================================
// Tool descriptor
// =============================================================================

/// Metadata for a single remote tool, as returned by `GET /tools`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Unique tool name within a catalog.
    pub name: String,
    /// Human-readable description, suitable for prompt embedding.
    #[serde(default)]
    pub description: String,
    /// JSON Schema for the accepted keyword arguments.
    #[serde(default = "empty_object")]
    pub input_schema: Value,
    /// JSON Schema for the returned value.
    #[serde(default = "empty_object")]
    pub output_schema: Value,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

impl ToolDescriptor {
    /// Parameter names the schema marks as required.
    pub fn required_params(&self) -> Vec<&str> {
        self.input_schema
            .get("required")
            .and_then(Value::as_array)
            .map(|arr| arr.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Generate a prompt line for this tool.
    ///
    /// Format: `- tool_name(param1: type, param2?: type): description`
    pub fn prompt_line(&self) -> String {
        let required: HashSet<&str> = self.required_params().into_iter().collect();
        let params: Vec<String> = self
            .input_schema
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| {
                props
                    .iter()
                    .map(|(name, schema)| {
                        let ty = schema.get("type").and_then(Value::as_str).unwrap_or("any");
                        let optional = if required.contains(name.as_str()) { "" } else { "?" };
                        format!("{name}{optional}: {ty}")
                    })
                    .collect()
            })
            .unwrap_or_default();

        format!("- {}({}): {}", self.name, params.join(", "), self.description)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Ordered set of tools a server exposes. Preserves server order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    tools: Vec<ToolDescriptor>,
}

impl Catalog {
    pub fn new(tools: Vec<ToolDescriptor>) -> Self {
        Self { tools }
    }

    /// Get a descriptor by tool name.
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Check if a tool exists in this catalog.
    pub fn has_tool(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All tool names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.iter().map(|t| t.name.clone()).collect();
        names.sort();
        names
    }

    /// Descriptors in server order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }

    /// Validate an input map against a tool's `input_schema`.
    ///
    /// Returns a list of violation messages (empty = valid). Advisory only:
    /// the server re-validates and is authoritative.
    pub fn validate_input(&self, name: &str, input: &Value) -> crate::types::Result<Vec<String>> {
        let descriptor = self
            .get(name)
            .ok_or_else(|| Error::not_found(format!("Unknown tool: {name}")))?;

        if !input.is_object() {
            return Err(Error::validation("Tool input must be a JSON object"));
        }

        let validator = jsonschema::validator_for(&descriptor.input_schema)
            .map_err(|e| Error::protocol(format!("invalid input_schema for '{name}': {e}")))?;

        Ok(validator.iter_errors(input).map(|e| e.to_string()).collect())
    }

    /// Generate a formatted prompt section for LLM consumption.
    ///
    /// If `allowed_tools` is Some, only include those tools.
    pub fn prompt_block(&self, allowed_tools: Option<&[String]>) -> String {
        let descriptors: Vec<&ToolDescriptor> = match allowed_tools {
            Some(allowed) => allowed.iter().filter_map(|name| self.get(name)).collect(),
            None => self.tools.iter().collect(),
        };

        if descriptors.is_empty() {
            return String::new();
        }

        let mut lines = Vec::with_capacity(descriptors.len() + 1);
        lines.push("Available tools:".to_string());
        for descriptor in descriptors {
            lines.push(descriptor.prompt_line());
        }
        lines.join("\n")
    }

    /// Number of tools in the catalog.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl From<Vec<ToolDescriptor>> for Catalog {
    fn from(tools: Vec<ToolDescriptor>) -> Self {
        Self::new(tools)
    }
}

impl IntoIterator for Catalog {
    type Item = ToolDescriptor;
    type IntoIter = std::vec::IntoIter<ToolDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.tools.into_iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
