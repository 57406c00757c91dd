//! AutoGen-style adapter.
//!
//! AutoGen registers tools as OpenAI-function-format definitions and
//! dispatches calls by function name. `parameters` is the tool's
//! `input_schema` verbatim.

use super::{remote_tools, InvocableTool};
use crate::catalog::Catalog;
use crate::client::InvocationClient;
use crate::types::{Error, Result};
use serde_json::{json, Value};
use std::sync::Arc;

/// Toolkit exposing a set of tools in AutoGen registration shape.
#[derive(Clone)]
pub struct AutoGenToolkit {
    tools: Vec<Arc<dyn InvocableTool>>,
}

impl std::fmt::Debug for AutoGenToolkit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.tools.iter().map(|t| t.name()).collect();
        f.debug_struct("AutoGenToolkit").field("tools", &names).finish()
    }
}

impl AutoGenToolkit {
    pub fn new(tools: Vec<Arc<dyn InvocableTool>>) -> Self {
        Self { tools }
    }

    /// Build a toolkit covering every tool in the catalog.
    pub fn from_catalog(catalog: &Catalog, client: &InvocationClient) -> Self {
        Self::new(
            remote_tools(catalog, client)
                .into_iter()
                .map(|tool| Arc::new(tool) as Arc<dyn InvocableTool>)
                .collect(),
        )
    }

    /// Tool definitions in OpenAI function format:
    /// `{"type": "function", "function": {"name", "description", "parameters"}}`.
    pub fn get_functions(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|tool| {
                json!({
                    "type": "function",
                    "function": {
                        "name": tool.name(),
                        "description": tool.description(),
                        "parameters": tool.input_schema(),
                    }
                })
            })
            .collect()
    }

    /// Dispatch a function call by name.
    pub async fn execute_function(&self, name: &str, arguments: Value) -> Result<Value> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| Error::not_found(format!("Unknown function: {name}")))?;
        tool.invoke(arguments).await
    }
}
