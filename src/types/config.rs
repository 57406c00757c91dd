//! Configuration structures.
//!
//! Configuration is loaded from environment variables or deserialized from
//! config files; all fields have serde defaults so partial configs work.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Header used to pass the API key to the tool server.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Default tool server endpoint.
const DEFAULT_BASE_URL: &str = "http://localhost:8001";

/// Client configuration for one tool server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Absolute endpoint root, without a trailing slash
    /// (e.g. `http://localhost:8001`).
    pub base_url: String,

    /// API key sent as the `X-API-Key` header. Optional; the server decides
    /// whether it is required.
    pub api_key: Option<String>,

    /// Per-request timeout. Elapsing surfaces as a transport error.
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Build a config pointing at `base_url`, with defaults elsewhere.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            ..Default::default()
        }
    }

    /// Attach an API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from environment: `TOOLBRIDGE_BASE_URL` and `TOOLBRIDGE_API_KEY`.
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("TOOLBRIDGE_BASE_URL") {
            config.base_url = trim_trailing_slash(url);
        }
        if let Ok(key) = std::env::var("TOOLBRIDGE_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        config
    }

    /// Full URL for an endpoint path (`path` must start with `/`).
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8001");
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_endpoint_join() {
        let config = ClientConfig::new("http://test-server");
        assert_eq!(config.endpoint("/call"), "http://test-server/call");
        assert_eq!(config.endpoint("/tools"), "http://test-server/tools");
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ClientConfig::new("http://test-server/");
        assert_eq!(config.endpoint("/health"), "http://test-server/health");
    }

    #[test]
    fn test_builder_chain() {
        let config = ClientConfig::new("http://test-server")
            .with_api_key("secret")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"base_url": "http://example.com", "timeout": "10s"}"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "http://example.com");
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_deserialize_missing_fields_use_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "http://example.com"}"#).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.api_key.is_none());
    }
}
