/// Content hash of a beatmap
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::PlaylistError;

/// Beatmap content hash (raw bytes, rendered as lowercase hex)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapHash(Vec<u8>);

impl MapHash {
    /// Wrap raw hash bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Parse a hex string (case-insensitive)
    pub fn from_hex(hex_str: &str) -> Result<Self, PlaylistError> {
        let trimmed = hex_str.trim();
        if trimmed.is_empty() {
            return Err(PlaylistError::invalid_input("empty map hash"));
        }

        hex::decode(trimmed.to_ascii_lowercase())
            .map(Self)
            .map_err(|e| PlaylistError::invalid_input(format!("invalid map hash {trimmed:?}: {e}")))
    }

    /// Lowercase hex rendering, as used by catalog lookups
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MapHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for MapHash {
    type Err = PlaylistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for MapHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for MapHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Render a numeric beatmap key the way the catalog expects it
pub fn key_to_hex(key: u32) -> String {
    format!("{key:x}")
}

/// Parse a hex beatmap key ("1a2b", case-insensitive)
pub fn key_from_hex(key: &str) -> Option<u32> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return None;
    }
    u32::from_str_radix(trimmed, 16).ok()
}
