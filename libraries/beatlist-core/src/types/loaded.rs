//! Loaded (catalog-resolved) playlist types
//!
//! This is the in-memory representation handed to callers after a load.

use crate::types::{CatalogEntry, MapRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A playlist whose map references went through catalog resolution
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadedPlaylist {
    pub title: String,

    pub author: String,

    pub description: String,

    /// Cover image, opaque bytes
    pub cover: Vec<u8>,

    /// Where the playlist lives on disk (set after a successful load)
    pub path: Option<PathBuf>,

    /// Maps in playlist order
    pub maps: Vec<LoadedMap>,
}

impl LoadedPlaylist {
    /// Number of maps that resolved to a catalog entry
    pub fn resolved_count(&self) -> usize {
        self.maps
            .iter()
            .filter(|map| matches!(map.resolution, MapResolution::Found(_)))
            .count()
    }

    /// Number of maps carrying an unresolvable-reference error
    pub fn error_count(&self) -> usize {
        self.maps.iter().filter(|map| map.error().is_some()).count()
    }
}

/// One map of a [`LoadedPlaylist`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadedMap {
    /// When the map was added (copied from the source file)
    pub date_added: DateTime<Utc>,

    /// The reference this map was loaded from
    pub source: MapRef,

    /// Outcome of catalog resolution
    pub resolution: MapResolution,
}

impl LoadedMap {
    pub fn new(date_added: DateTime<Utc>, source: MapRef, resolution: MapResolution) -> Self {
        Self {
            date_added,
            source,
            resolution,
        }
    }

    /// Catalog view of the map
    ///
    /// `None` means the map was never looked up, `Some(None)` means it was
    /// looked up and not found.
    pub fn online(&self) -> Option<Option<&CatalogEntry>> {
        match &self.resolution {
            MapResolution::Found(entry) => Some(Some(entry)),
            MapResolution::NotFound => Some(None),
            MapResolution::Pending | MapResolution::Unsupported(_) => None,
        }
    }

    /// Why the map cannot be resolved, if it cannot
    pub fn error(&self) -> Option<UnresolvableReason> {
        match self.resolution {
            MapResolution::Unsupported(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Resolution state of a loaded map
///
/// Exactly one of "online" (found or not found) and "error" holds for a
/// resolved map; `Pending` is neither and is only produced by callers that
/// build maps by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum MapResolution {
    /// Not looked up yet
    Pending,

    /// Looked up, catalog has no such map
    NotFound,

    /// Catalog entry for the map
    Found(CatalogEntry),

    /// The reference kind cannot be resolved
    Unsupported(UnresolvableReason),
}

/// Reasons a map reference cannot be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvableReason {
    /// Zip payloads are not supported
    ZipUnsupported,

    /// Level-id references are not supported
    LevelIdUnsupported,

    /// The reference tag is not recognised
    UnknownType,
}

impl UnresolvableReason {
    /// Stable code for display and logging
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZipUnsupported => "zip_unsupported",
            Self::LevelIdUnsupported => "level_id_unsupported",
            Self::UnknownType => "unknown_type",
        }
    }
}

impl std::fmt::Display for UnresolvableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
