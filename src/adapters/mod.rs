//! Framework adapters — translate agent-framework tool conventions onto the
//! tool server wire contract.
//!
//! The shared seam is [`InvocableTool`]: a named operation with a declared
//! input schema and an async invoke function. [`RemoteTool`] binds one
//! catalog descriptor to an [`InvocationClient`]; each adapter module
//! reshapes that seam into one framework's native registration form. The
//! adapters hold no policy: every client error propagates typed so the
//! framework glue can decide retry or fallback behavior itself.

pub mod autogen;
pub mod crewai;
pub mod langchain;

pub use autogen::AutoGenToolkit;
pub use crewai::CrewAiTool;
pub use langchain::LangChainToolkit;

use crate::catalog::{Catalog, ToolDescriptor};
use crate::client::InvocationClient;
use crate::types::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A named remote operation with a declared input schema and an invoke
/// function. Structural conformance is all the adapters need; there is no
/// shared base type beyond this trait.
#[async_trait]
pub trait InvocableTool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn input_schema(&self) -> &Value;

    /// Invoke the tool with a keyword-style input object.
    async fn invoke(&self, input: Value) -> Result<Value>;
}

/// An [`InvocableTool`] backed by one catalog descriptor and the invocation
/// client.
#[derive(Debug, Clone)]
pub struct RemoteTool {
    descriptor: ToolDescriptor,
    client: InvocationClient,
}

impl RemoteTool {
    pub fn new(descriptor: ToolDescriptor, client: InvocationClient) -> Self {
        Self { descriptor, client }
    }

    pub fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }
}

#[async_trait]
impl InvocableTool for RemoteTool {
    fn name(&self) -> &str {
        &self.descriptor.name
    }

    fn description(&self) -> &str {
        &self.descriptor.description
    }

    fn input_schema(&self) -> &Value {
        &self.descriptor.input_schema
    }

    async fn invoke(&self, input: Value) -> Result<Value> {
        self.client.invoke(&self.descriptor.name, input).await
    }
}

/// Expand a catalog into one [`RemoteTool`] per descriptor, all sharing the
/// given client.
pub fn remote_tools(catalog: &Catalog, client: &InvocationClient) -> Vec<RemoteTool> {
    catalog
        .iter()
        .map(|descriptor| RemoteTool::new(descriptor.clone(), client.clone()))
        .collect()
}
