//! HTTP clients for the remote tool server.
//!
//! Two leaf clients share one transport layer: [`InvocationClient`] performs
//! single-shot `POST /call` requests, [`CatalogClient`] fetches and caches
//! `GET /tools`. The health probe (`GET /health`) lives on the invocation
//! client. All failures surface as typed [`Error`](crate::types::Error)s;
//! nothing is retried here.

pub mod catalog;
pub mod health;
pub mod invoke;

pub use catalog::CatalogClient;
pub use health::HealthStatus;
pub use invoke::InvocationClient;

use crate::types::{ClientConfig, Error, Result, API_KEY_HEADER};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::Value;

/// Error body shape used by the tool server for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Shared request plumbing: client construction, auth header, status and
/// body decoding. One instance per client; cloning shares the underlying
/// reqwest connection pool.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Transport {
    pub(crate) fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| Error::validation(format!("invalid API key: {e}")))?;
            headers.insert(API_KEY_HEADER, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(Error::Transport)?;

        Ok(Self { http, config })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// GET an endpoint, decode the JSON body, map failures to the error
    /// taxonomy.
    pub(crate) async fn get_json(&self, path: &str) -> Result<Value> {
        let request = self.http.get(self.config.endpoint(path));
        self.execute(path, request).await
    }

    /// POST a JSON body to an endpoint, decode the JSON response.
    pub(crate) async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let request = self.http.post(self.config.endpoint(path)).json(body);
        self.execute(path, request).await
    }

    async fn execute(&self, path: &str, request: reqwest::RequestBuilder) -> Result<Value> {
        let response = request.send().await.map_err(|e| {
            tracing::debug!(path, error = %e, "transport failure");
            Error::Transport(e)
        })?;

        let status = response.status();
        let text = response.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            // Prefer the structured `detail` message, fall back to raw body.
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.detail)
                .unwrap_or_else(|_| {
                    if text.is_empty() {
                        format!("server returned status {}", status.as_u16())
                    } else {
                        text
                    }
                });
            tracing::debug!(path, status = status.as_u16(), "server rejected request");
            return Err(Error::invocation(status.as_u16(), message));
        }

        serde_json::from_str(&text)
            .map_err(|e| Error::protocol(format!("response body is not valid JSON: {e}")))
    }
}
