//! Conversion between canonical and loaded playlists

use beatlist_core::{
    CanonicalMap, CanonicalPlaylist, FileSystem, LoadedMap, LoadedPlaylist, MapRef,
    MapResolution, PlaylistError, Result,
};
use std::path::Path;
use tracing::debug;

/// Build a loaded playlist from canonical metadata and resolved maps
///
/// Metadata is copied verbatim; `path` is left unset.
pub fn assemble(canonical: CanonicalPlaylist, maps: Vec<LoadedMap>) -> LoadedPlaylist {
    LoadedPlaylist {
        title: canonical.title,
        author: canonical.author,
        description: canonical.description,
        cover: canonical.cover,
        path: None,
        maps,
    }
}

/// Project a loaded playlist back into its stored form
///
/// Maps without an online view (never looked up, or unresolvable) are
/// dropped. Every other map becomes a hash reference, in input order. A map
/// that was looked up and not found keeps its original hash; one that was
/// referenced by key has no hash to write and fails the projection.
pub fn to_canonical(playlist: &LoadedPlaylist) -> Result<CanonicalPlaylist> {
    let mut maps = Vec::with_capacity(playlist.maps.len());

    for (index, map) in playlist.maps.iter().enumerate() {
        let hash = match &map.resolution {
            MapResolution::Pending | MapResolution::Unsupported(_) => {
                debug!(index, map = %map.source, "Dropping unresolved map from saved playlist");
                continue;
            }
            MapResolution::Found(entry) => entry.hash.clone(),
            MapResolution::NotFound => match &map.source {
                MapRef::Hash(hash) => hash.clone(),
                other => {
                    return Err(PlaylistError::projection(format!(
                        "map {index} ({other}) was not found in the catalog and has no hash"
                    )))
                }
            },
        };

        maps.push(CanonicalMap::new(map.date_added, MapRef::Hash(hash)));
    }

    Ok(CanonicalPlaylist {
        title: playlist.title.clone(),
        author: playlist.author.clone(),
        description: playlist.description.clone(),
        cover: playlist.cover.clone(),
        maps,
    })
}

/// Project, encode and write a playlist as a single whole-buffer write
pub async fn write_binary(
    fs: &dyn FileSystem,
    playlist: &LoadedPlaylist,
    path: &Path,
) -> Result<()> {
    let canonical = to_canonical(playlist)?;
    let bytes = beatlist_format::encode(&canonical)?;
    fs.write(path, &bytes).await
}
