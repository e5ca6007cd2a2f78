//! Catalog resolution of map references
//!
//! Every map is resolved independently and concurrently. Output order is the
//! input order, whatever order the lookups finish in.

use beatlist_core::{
    key_to_hex, CanonicalMap, Catalog, CatalogEntry, LoadedMap, MapRef, MapResolution, Progress,
    UnresolvableReason,
};
use futures_util::future::join_all;
use tracing::{debug, warn};

/// Resolve every map against the catalog
///
/// `progress` is started with the map count, bumped once per finished map
/// (whatever the outcome) and completed when all maps are done.
pub async fn resolve_maps(
    maps: Vec<CanonicalMap>,
    catalog: &dyn Catalog,
    progress: &Progress,
) -> Vec<LoadedMap> {
    progress.start(maps.len());
    debug!(maps = maps.len(), "Resolving playlist maps");

    let tasks = maps.into_iter().map(|map| async move {
        let resolution = resolve_reference(&map.reference, catalog).await;
        progress.increment();
        LoadedMap::new(map.date_added, map.reference, resolution)
    });

    let loaded = join_all(tasks).await;
    progress.complete();
    loaded
}

/// Resolve a single reference
pub async fn resolve_reference(reference: &MapRef, catalog: &dyn Catalog) -> MapResolution {
    match reference {
        MapRef::Key(key) => {
            let key = key_to_hex(*key);
            let result = catalog.lookup_by_key(&key).await;
            lookup_outcome(reference, result)
        }
        MapRef::Hash(hash) => {
            let hash = hash.to_hex();
            let result = catalog.lookup_by_hash(&hash).await;
            lookup_outcome(reference, result)
        }
        MapRef::Zip(_) => MapResolution::Unsupported(UnresolvableReason::ZipUnsupported),
        MapRef::LevelId(_) => MapResolution::Unsupported(UnresolvableReason::LevelIdUnsupported),
        MapRef::Unknown(_) => MapResolution::Unsupported(UnresolvableReason::UnknownType),
    }
}

// Lookup failures count as misses
fn lookup_outcome(
    reference: &MapRef,
    result: beatlist_core::Result<Option<CatalogEntry>>,
) -> MapResolution {
    match result {
        Ok(Some(entry)) => MapResolution::Found(entry),
        Ok(None) => {
            debug!(map = %reference, "Map not in catalog");
            MapResolution::NotFound
        }
        Err(e) => {
            warn!(map = %reference, error = %e, "Catalog lookup failed, treating as not found");
            MapResolution::NotFound
        }
    }
}
