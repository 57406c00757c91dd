//! CrewAI-style adapter.
//!
//! CrewAI tools are callables that return a plain string from `run`. This
//! view renders the tool's structured output as a string: string outputs
//! pass through unquoted, everything else is JSON-encoded.

use super::{remote_tools, InvocableTool};
use crate::catalog::Catalog;
use crate::client::InvocationClient;
use crate::types::Result;
use serde_json::Value;
use std::sync::Arc;

/// One tool in CrewAI registration shape.
#[derive(Clone)]
pub struct CrewAiTool {
    inner: Arc<dyn InvocableTool>,
}

impl std::fmt::Debug for CrewAiTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrewAiTool")
            .field("name", &self.inner.name())
            .finish()
    }
}

impl CrewAiTool {
    pub fn new(inner: Arc<dyn InvocableTool>) -> Self {
        Self { inner }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn description(&self) -> &str {
        self.inner.description()
    }

    /// Invoke the tool and render the output as a plain string.
    pub async fn run(&self, input: Value) -> Result<String> {
        let output = self.inner.invoke(input).await?;
        Ok(render_output(output))
    }
}

/// Build one CrewAI-shaped tool per catalog entry.
pub fn crewai_tools(catalog: &Catalog, client: &InvocationClient) -> Vec<CrewAiTool> {
    remote_tools(catalog, client)
        .into_iter()
        .map(|tool| CrewAiTool::new(Arc::new(tool)))
        .collect()
}

fn render_output(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
