/// Beatmap catalog entry types
use crate::types::MapHash;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A beatmap as known to the remote catalog
///
/// Only `hash` matters to the playlist core (it is what gets written back on
/// save); the rest is carried for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Catalog key, lowercase hex (e.g. "1a2b")
    pub key: String,

    /// Content hash of the map version this entry describes
    pub hash: MapHash,

    /// Display name
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Uploader's user name
    #[serde(default)]
    pub uploader: Option<String>,

    #[serde(default)]
    pub song_name: String,

    #[serde(default)]
    pub song_sub_name: String,

    #[serde(default)]
    pub song_author: String,

    #[serde(default)]
    pub level_author: String,

    /// Beats per minute
    #[serde(default)]
    pub bpm: f64,

    /// Song length in seconds
    #[serde(default)]
    pub duration_secs: u32,

    #[serde(default)]
    pub cover_url: Option<String>,

    #[serde(default)]
    pub download_url: Option<String>,

    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl CatalogEntry {
    /// Minimal entry, mostly useful for fixtures and fakes
    pub fn new(key: impl Into<String>, hash: MapHash, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            hash,
            name: name.into(),
            description: String::new(),
            uploader: None,
            song_name: String::new(),
            song_sub_name: String::new(),
            song_author: String::new(),
            level_author: String::new(),
            bpm: 0.0,
            duration_secs: 0,
            cover_url: None,
            download_url: None,
            uploaded_at: None,
        }
    }
}
