//! Catalog retrieval with process-lifetime caching (`GET /tools`).

use super::Transport;
use crate::catalog::{Catalog, ToolDescriptor};
use crate::types::{ClientConfig, Error, Result};
use tokio::sync::Mutex;

/// Client for the server's tool catalog.
///
/// The catalog is fetched lazily and cached for the lifetime of this
/// instance; there is no TTL, only `force_refresh` or process restart
/// invalidates it. The cache mutex is held across the fetch, so concurrent
/// first calls on one instance coalesce into a single request.
#[derive(Debug)]
pub struct CatalogClient {
    transport: Transport,
    cache: Mutex<Option<Catalog>>,
}

impl CatalogClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
            cache: Mutex::new(None),
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

    /// List the tools the server exposes.
    ///
    /// Returns the cached catalog when one exists and `force_refresh` is
    /// false; otherwise fetches `{base_url}/tools`, parses the `tools` field,
    /// stores the result, and returns it.
    pub async fn list_tools(&self, force_refresh: bool) -> Result<Catalog> {
        let mut cache = self.cache.lock().await;
        if !force_refresh {
            if let Some(catalog) = cache.as_ref() {
                tracing::debug!(tools = catalog.len(), "catalog cache hit");
                return Ok(catalog.clone());
            }
        }

        let response = self.transport.get_json("/tools").await?;
        let tools_field = response
            .get("tools")
            .cloned()
            .ok_or_else(|| Error::protocol("response missing 'tools' field"))?;
        let tools: Vec<ToolDescriptor> = serde_json::from_value(tools_field)
            .map_err(|e| Error::protocol(format!("malformed 'tools' field: {e}")))?;

        let catalog = Catalog::new(tools);
        tracing::debug!(tools = catalog.len(), "catalog fetched");
        *cache = Some(catalog.clone());
        Ok(catalog)
    }

    /// Drop the cached catalog without fetching a new one.
    pub async fn invalidate(&self) {
        *self.cache.lock().await = None;
    }
}
