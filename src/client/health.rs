//! Server health probing (`GET /health`).

use super::InvocationClient;
use crate::types::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reported health of the tool server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    /// The server answered but did not report `healthy`.
    Degraded,
}

impl InvocationClient {
    /// Probe the server's health endpoint.
    ///
    /// A reachable server reporting `{"status": "healthy"}` maps to
    /// [`HealthStatus::Healthy`]; any other status string maps to
    /// [`HealthStatus::Degraded`] and is logged verbatim. An unreachable
    /// server surfaces as a transport error.
    pub async fn check_health(&self) -> Result<HealthStatus> {
        let response = self.transport.get_json("/health").await?;
        let status = response
            .get("status")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::protocol("health response missing 'status' field"))?;

        if status == "healthy" {
            Ok(HealthStatus::Healthy)
        } else {
            tracing::warn!(status, "tool server reports non-healthy status");
            Ok(HealthStatus::Degraded)
        }
    }
}
