//! Beatlist Core
//!
//! Shared types, traits, and error handling for beatmap playlists.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Canonical types**: `CanonicalPlaylist`, `CanonicalMap`, `MapRef` (what is on disk)
//! - **Loaded types**: `LoadedPlaylist`, `LoadedMap`, `MapResolution` (what callers work with)
//! - **Collaborators**: `Catalog` (beatmap lookups) and `FileSystem` (whole-file I/O)
//! - **Progress**: a thread-safe `Progress` sink for resolution runs
//! - **Error Handling**: unified `PlaylistError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use beatlist_core::{CanonicalMap, CanonicalPlaylist, MapHash, MapRef};
//! use chrono::Utc;
//!
//! let mut playlist = CanonicalPlaylist::new("Favourites");
//! let hash = MapHash::from_hex("AB12").unwrap();
//! playlist.maps.push(CanonicalMap::new(Utc::now(), MapRef::Hash(hash)));
//!
//! assert_eq!(playlist.maps[0].reference.to_string(), "hash:ab12");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod traits;
pub mod types;

pub use error::{PlaylistError, Result};
pub use storage::{FileSystem, LocalFileSystem};
pub use traits::{Catalog, StaticCatalog};

pub use types::{
    // Stored form
    CanonicalMap, CanonicalPlaylist, MapRef,
    // Loaded form
    LoadedMap, LoadedPlaylist, MapResolution, UnresolvableReason,
    // Catalog
    CatalogEntry, MapHash, key_from_hex, key_to_hex,
    // Progress
    Progress, ProgressSnapshot, ProgressStatus,
};
