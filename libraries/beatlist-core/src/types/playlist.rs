//! Format-neutral playlist shape
//!
//! Both the legacy JSON decoder and the binary decoder produce a
//! [`CanonicalPlaylist`]; the resolver consumes it. It only lives for the
//! duration of a load or save call.

use crate::types::MapHash;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playlist as stored on disk, before catalog resolution
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CanonicalPlaylist {
    /// Playlist title
    pub title: String,

    /// Playlist author
    pub author: String,

    /// Free-form description
    pub description: String,

    /// Cover image, opaque bytes
    pub cover: Vec<u8>,

    /// Map references in playlist order
    pub maps: Vec<CanonicalMap>,
}

impl CanonicalPlaylist {
    /// Create an empty playlist with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// One map entry of a [`CanonicalPlaylist`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalMap {
    /// When the map was added to the playlist
    pub date_added: DateTime<Utc>,

    /// How the map is referenced
    pub reference: MapRef,
}

impl CanonicalMap {
    pub fn new(date_added: DateTime<Utc>, reference: MapRef) -> Self {
        Self {
            date_added,
            reference,
        }
    }
}

/// Reference to a beatmap; the variant is the on-disk type tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum MapRef {
    /// Catalog key (rendered as lowercase hex for lookups)
    Key(u32),

    /// Content hash
    Hash(MapHash),

    /// Embedded zip payload
    Zip(Vec<u8>),

    /// In-game level identifier
    #[serde(rename = "levelid")]
    LevelId(String),

    /// Tag this build does not understand (raw tag byte)
    Unknown(u8),
}

impl MapRef {
    /// Short name of the reference kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Key(_) => "key",
            Self::Hash(_) => "hash",
            Self::Zip(_) => "zip",
            Self::LevelId(_) => "levelid",
            Self::Unknown(_) => "unknown",
        }
    }
}

impl std::fmt::Display for MapRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key(key) => write!(f, "key:{key:x}"),
            Self::Hash(hash) => write!(f, "hash:{hash}"),
            Self::Zip(bytes) => write!(f, "zip:{} bytes", bytes.len()),
            Self::LevelId(id) => write!(f, "levelid:{id}"),
            Self::Unknown(tag) => write!(f, "unknown:{tag}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_lowercase_hex() {
        assert_eq!(MapRef::Key(0xBEEF).to_string(), "key:beef");
        let hash = MapHash::from_hex("AB12").unwrap();
        assert_eq!(MapRef::Hash(hash).to_string(), "hash:ab12");
        assert_eq!(MapRef::Unknown(9).to_string(), "unknown:9");
    }

    #[test]
    fn kind_names() {
        assert_eq!(MapRef::Zip(vec![1, 2]).kind(), "zip");
        assert_eq!(MapRef::LevelId("OneSaber".into()).kind(), "levelid");
    }
}
