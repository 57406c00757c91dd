//! Single-shot tool invocation (`POST /call`).

use super::Transport;
use crate::types::{ClientConfig, Error, Result};
use serde_json::{json, Value};

/// Stateless tool invocation client - each call is independent.
///
/// Holds no state across calls, so it is safe to invoke from any number of
/// concurrent tasks. Cloning is cheap and shares the HTTP connection pool.
/// Cancelling an awaiting task aborts the in-flight request; no partial
/// state is left behind.
#[derive(Debug, Clone)]
pub struct InvocationClient {
    pub(crate) transport: Transport,
}

impl InvocationClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Build a client from `TOOLBRIDGE_BASE_URL` / `TOOLBRIDGE_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// The endpoint root this client talks to.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Call a named tool with a keyword-style input object and return the
    /// decoded `output` value.
    ///
    /// Serializes `{"tool": tool, "input": input}` to `POST {base_url}/call`.
    /// The server is the source of truth for tool existence: an unknown name
    /// comes back as [`Error::Invocation`] with status 404.
    pub async fn invoke(&self, tool: &str, input: Value) -> Result<Value> {
        if tool.is_empty() {
            return Err(Error::validation("tool name cannot be empty"));
        }
        if !input.is_object() {
            return Err(Error::validation("tool input must be a JSON object"));
        }

        tracing::debug!(tool, "invoking remote tool");
        let body = json!({ "tool": tool, "input": input });
        let mut response = self.transport.post_json("/call", &body).await?;

        match response.get_mut("output") {
            Some(output) => Ok(output.take()),
            None => Err(Error::protocol("response missing 'output' field")),
        }
    }
}
