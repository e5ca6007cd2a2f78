//! Beatlist playlist formats
//!
//! Two encodings exist on disk:
//!
//! - `binary`: the current tagged container (`.blist`), see [`binary`]
//! - `legacy`: the older JSON text format (`.bplist` / `.json`), see [`legacy`]
//!
//! Both decode into a [`CanonicalPlaylist`]. Only the binary format is
//! ever written.

mod error;

pub mod binary;
pub mod detect;
pub mod legacy;

pub use detect::{detect, is_legacy, PlaylistFormat};
pub use error::{FormatError, Result};

use beatlist_core::CanonicalPlaylist;

/// Decode a playlist buffer of either format
pub fn decode(buf: &[u8]) -> Result<(CanonicalPlaylist, PlaylistFormat)> {
    match detect(buf) {
        PlaylistFormat::Binary => Ok((binary::deserialize(buf)?, PlaylistFormat::Binary)),
        PlaylistFormat::Legacy => Ok((legacy::parse(buf)?, PlaylistFormat::Legacy)),
    }
}

/// Encode a playlist (always binary)
pub fn encode(playlist: &CanonicalPlaylist) -> Result<Vec<u8>> {
    binary::serialize(playlist)
}
