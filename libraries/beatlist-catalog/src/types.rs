//! Types for catalog API requests and responses.

use crate::error::{CatalogError, Result};
use beatlist_core::{CatalogEntry, MapHash};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default public catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.beatsaver.com";

/// Configuration for connecting to a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog API (e.g., "https://api.beatsaver.com")
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// User-agent sent with every request (None for the crate default)
    pub user_agent: Option<String>,
}

impl CatalogConfig {
    /// Create a config for the given base URL with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: None,
        }
    }
}

// =============================================================================
// Map Types
// =============================================================================

/// A map as returned by the catalog.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub uploader: Option<UploaderInfo>,
    #[serde(default)]
    pub metadata: MapMetadata,
    #[serde(default)]
    pub uploaded: Option<DateTime<Utc>>,
    #[serde(default)]
    pub versions: Vec<MapVersion>,
}

/// Map uploader.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploaderInfo {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
}

/// Song metadata of a map.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMetadata {
    #[serde(default)]
    pub bpm: f64,
    /// Length in seconds
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub song_name: String,
    #[serde(default)]
    pub song_sub_name: String,
    #[serde(default)]
    pub song_author_name: String,
    #[serde(default)]
    pub level_author_name: String,
}

/// One uploaded version of a map.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapVersion {
    pub hash: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "downloadURL")]
    pub download_url: Option<String>,
    #[serde(default, rename = "coverURL")]
    pub cover_url: Option<String>,
    #[serde(default, rename = "previewURL")]
    pub preview_url: Option<String>,
}

impl MapDetail {
    /// Pick the version to describe: the one matching `hash` if given,
    /// otherwise the most recently created.
    pub fn version_for(&self, hash: Option<&str>) -> Option<&MapVersion> {
        if let Some(hash) = hash {
            if let Some(version) = self
                .versions
                .iter()
                .find(|v| v.hash.eq_ignore_ascii_case(hash))
            {
                return Some(version);
            }
        }

        self.versions.iter().max_by_key(|v| v.created_at)
    }

    /// Flatten into a catalog entry.
    pub fn into_entry(self, hash: Option<&str>) -> Result<CatalogEntry> {
        let version = self.version_for(hash).ok_or_else(|| {
            CatalogError::ParseError(format!("map {} has no versions", self.id))
        })?;

        let map_hash = MapHash::from_hex(&version.hash)
            .map_err(|e| CatalogError::ParseError(e.to_string()))?;
        let cover_url = version.cover_url.clone();
        let download_url = version.download_url.clone();

        Ok(CatalogEntry {
            key: self.id.to_ascii_lowercase(),
            hash: map_hash,
            name: self.name,
            description: self.description,
            uploader: self.uploader.map(|u| u.name),
            song_name: self.metadata.song_name,
            song_sub_name: self.metadata.song_sub_name,
            song_author: self.metadata.song_author_name,
            level_author: self.metadata.level_author_name,
            bpm: self.metadata.bpm,
            duration_secs: self.metadata.duration,
            cover_url,
            download_url,
            uploaded_at: self.uploaded,
        })
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// API error response from the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}
