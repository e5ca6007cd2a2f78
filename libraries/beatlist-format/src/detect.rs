//! Format discrimination between binary and legacy playlists

use crate::{binary, legacy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// On-disk playlist encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaylistFormat {
    /// Tagged binary container
    Binary,
    /// Older JSON text encoding
    Legacy,
}

impl PlaylistFormat {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Legacy => "legacy",
        }
    }

    /// Guess the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        if ext == binary::EXTENSION {
            Some(Self::Binary)
        } else if legacy::EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Legacy)
        } else {
            None
        }
    }
}

impl std::fmt::Display for PlaylistFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a buffer should be treated as a legacy playlist
///
/// Any marker validation failure counts as legacy, including empty and
/// corrupt buffers.
pub fn is_legacy(buf: &[u8]) -> bool {
    match binary::validate_magic(buf) {
        Ok(()) => false,
        Err(e) => {
            debug!(error = %e, bytes = buf.len(), "No binary marker, treating as legacy");
            true
        }
    }
}

/// Classify a buffer
pub fn detect(buf: &[u8]) -> PlaylistFormat {
    if is_legacy(buf) {
        PlaylistFormat::Legacy
    } else {
        PlaylistFormat::Binary
    }
}
