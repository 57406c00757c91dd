//! LangChain-style adapter.
//!
//! LangChain passes tool input as a single string and expects a string back.
//! The input string is parsed as a JSON object; anything that does not parse
//! to an object is wrapped as `{"input": <raw string>}` before the call. The
//! output is serialized back to a JSON string.

use super::{remote_tools, InvocableTool};
use crate::catalog::Catalog;
use crate::client::InvocationClient;
use crate::types::{Error, Result};
use serde_json::{json, Value};
use std::sync::Arc;

/// Name/description pair in LangChain `Tool` registration shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangChainToolSpec {
    pub name: String,
    pub description: String,
}

/// Toolkit exposing a set of tools in LangChain shape.
#[derive(Clone)]
pub struct LangChainToolkit {
    tools: Vec<Arc<dyn InvocableTool>>,
    prompt_block: String,
}

impl std::fmt::Debug for LangChainToolkit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.tools.iter().map(|t| t.name()).collect();
        f.debug_struct("LangChainToolkit")
            .field("tools", &names)
            .finish()
    }
}

impl LangChainToolkit {
    /// Build a toolkit covering every tool in the catalog.
    pub fn from_catalog(catalog: &Catalog, client: &InvocationClient) -> Self {
        Self {
            tools: remote_tools(catalog, client)
                .into_iter()
                .map(|tool| Arc::new(tool) as Arc<dyn InvocableTool>)
                .collect(),
            prompt_block: catalog.prompt_block(None),
        }
    }

    /// Registration specs for LangChain `Tool` construction.
    pub fn get_tools(&self) -> Vec<LangChainToolSpec> {
        self.tools
            .iter()
            .map(|tool| LangChainToolSpec {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
            })
            .collect()
    }

    /// Prompt section listing the tools, for react-style prompt templates.
    pub fn prompt_block(&self) -> &str {
        &self.prompt_block
    }

    /// Run a tool with LangChain's string-in/string-out convention.
    pub async fn run_tool(&self, name: &str, raw_input: &str) -> Result<String> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| Error::not_found(format!("Unknown tool: {name}")))?;

        let input = parse_tool_input(raw_input);
        let output = tool.invoke(input).await?;
        serde_json::to_string(&output).map_err(Error::from)
    }
}

/// LangChain passes input as a string; accept a JSON object, wrap anything
/// else as `{"input": raw}`.
fn parse_tool_input(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ Value::Object(_)) => value,
        _ => json!({ "input": raw }),
    }
}
