//! Catalog HTTP client.

use crate::error::{CatalogError, Result};
use crate::types::{ApiError, CatalogConfig, MapDetail};
use async_trait::async_trait;
use beatlist_core::{Catalog, CatalogEntry};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Client for a BeatSaver-compatible beatmap catalog.
///
/// # Example
///
/// ```ignore
/// use beatlist_catalog::{BeatSaverClient, CatalogConfig};
///
/// let client = BeatSaverClient::new(CatalogConfig::default())?;
/// if let Some(map) = client.map_by_key("1a2b").await? {
///     println!("{} by {}", map.name, map.level_author);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BeatSaverClient {
    http: Client,
    base_url: String,
}

impl BeatSaverClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        if config.timeout_secs == 0 {
            return Err(CatalogError::InvalidConfig(
                "timeout must be greater than zero".into(),
            ));
        }

        let user_agent = config
            .user_agent
            .unwrap_or_else(|| format!("Beatlist/{}", env!("CARGO_PKG_VERSION")));

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs.max(1)))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Get the catalog base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a map by its key (hex, e.g. "1a2b").
    ///
    /// Returns `Ok(None)` if the catalog has no such map.
    pub async fn map_by_key(&self, key: &str) -> Result<Option<CatalogEntry>> {
        let url = format!("{}/maps/id/{}", self.base_url, encode_segment(key));
        debug!(url = %url, key = %key, "Fetching map by key");

        match self.fetch(&url).await? {
            Some(detail) => Ok(Some(detail.into_entry(None)?)),
            None => Ok(None),
        }
    }

    /// Fetch a map by content hash (hex).
    ///
    /// Returns `Ok(None)` if the catalog has no such map.
    pub async fn map_by_hash(&self, hash: &str) -> Result<Option<CatalogEntry>> {
        let url = format!("{}/maps/hash/{}", self.base_url, encode_segment(hash));
        debug!(url = %url, hash = %hash, "Fetching map by hash");

        match self.fetch(&url).await? {
            Some(detail) => Ok(Some(detail.into_entry(Some(hash))?)),
            None => Ok(None),
        }
    }

    async fn fetch(&self, url: &str) -> Result<Option<MapDetail>> {
        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                CatalogError::Unreachable(e.to_string())
            } else {
                CatalogError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let detail: MapDetail = response.json().await.map_err(|e| {
                CatalogError::ParseError(format!("Failed to parse map response: {}", e))
            })?;
            Ok(Some(detail))
        } else if status == StatusCode::NOT_FOUND {
            debug!(url = %url, "Map not in catalog");
            Ok(None)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = retry_after(&response).unwrap_or(60);
            warn!(url = %url, retry_after_secs, "Catalog rate limit hit");
            Err(CatalogError::RateLimited { retry_after_secs })
        } else {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&error_text)
                .map(|api| api.error)
                .unwrap_or(error_text);
            Err(CatalogError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl Catalog for BeatSaverClient {
    async fn lookup_by_key(&self, key: &str) -> beatlist_core::Result<Option<CatalogEntry>> {
        Ok(self.map_by_key(key).await?)
    }

    async fn lookup_by_hash(&self, hash: &str) -> beatlist_core::Result<Option<CatalogEntry>> {
        Ok(self.map_by_hash(hash).await?)
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
    }

    let base = raw.trim().trim_end_matches('/').to_string();
    if !base.starts_with("http://") && !base.starts_with("https://") {
        return Err(CatalogError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    url::Url::parse(&base).map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;
    Ok(base)
}

fn retry_after(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

// URL path segment encoding helper
fn encode_segment(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}
