//! Playlist load/save orchestration - brings together format detection,
//! catalog resolution, projection and migration

use crate::assembler::{self, write_binary};
use crate::migrator::{self, MigrationOutcome};
use crate::resolver::resolve_maps;
use beatlist_core::{
    CanonicalPlaylist, Catalog, FileSystem, LoadedPlaylist, LocalFileSystem, PlaylistError,
    Progress, Result,
};
use beatlist_format::PlaylistFormat;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Options for [`PlaylistManager::try_load`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Convert legacy files to the binary format after loading
    pub force_convert: bool,
}

impl LoadOptions {
    pub fn force_convert() -> Self {
        Self {
            force_convert: true,
        }
    }
}

/// Everything a successful load produced
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub playlist: LoadedPlaylist,

    /// Encoding the file was in when it was read
    pub format: PlaylistFormat,

    pub migration: MigrationOutcome,
}

/// Loads and saves playlists
pub struct PlaylistManager {
    catalog: Arc<dyn Catalog>,
    fs: Arc<dyn FileSystem>,
}

impl PlaylistManager {
    /// Create a manager over the given collaborators
    pub fn new(catalog: Arc<dyn Catalog>, fs: Arc<dyn FileSystem>) -> Self {
        Self { catalog, fs }
    }

    /// Create a manager that reads and writes the local disk
    pub fn with_local_fs(catalog: Arc<dyn Catalog>) -> Self {
        Self::new(catalog, Arc::new(LocalFileSystem::new()))
    }

    /// Decode a buffer of either format
    pub fn parse(bytes: &[u8]) -> Result<(CanonicalPlaylist, PlaylistFormat)> {
        Ok(beatlist_format::decode(bytes)?)
    }

    /// Resolve a canonical playlist against the catalog
    pub async fn resolve(
        &self,
        mut canonical: CanonicalPlaylist,
        progress: &Progress,
    ) -> LoadedPlaylist {
        let maps = std::mem::take(&mut canonical.maps);
        let loaded = resolve_maps(maps, self.catalog.as_ref(), progress).await;
        assembler::assemble(canonical, loaded)
    }

    /// Load a playlist file
    ///
    /// Legacy files are converted to the binary format afterwards when
    /// `options.force_convert` is set; the outcome of that step is reported
    /// in [`LoadOutcome::migration`] and never fails the load.
    pub async fn try_load(
        &self,
        path: &Path,
        options: &LoadOptions,
        progress: &Progress,
    ) -> Result<LoadOutcome> {
        if !self.fs.exists(path).await {
            return Err(PlaylistError::not_found(path.display().to_string()));
        }

        let bytes = self.fs.read(path).await?;
        let (canonical, format) = Self::parse(&bytes)?;
        debug!(
            path = %path.display(),
            format = %format,
            maps = canonical.maps.len(),
            "Decoded playlist"
        );

        let mut playlist = self.resolve(canonical, progress).await;
        playlist.path = Some(path.to_path_buf());

        let migration = if format == PlaylistFormat::Legacy && options.force_convert {
            migrator::migrate(self.fs.as_ref(), path, &playlist).await
        } else {
            MigrationOutcome::NotRequested
        };

        if let MigrationOutcome::Migrated { to, .. } = &migration {
            playlist.path = Some(to.clone());
        }

        info!(
            path = %path.display(),
            maps = playlist.maps.len(),
            resolved = playlist.resolved_count(),
            errors = playlist.error_count(),
            "Loaded playlist"
        );

        Ok(LoadOutcome {
            playlist,
            format,
            migration,
        })
    }

    /// Load a playlist file, collapsing every failure to `None`
    pub async fn load(
        &self,
        path: &Path,
        options: &LoadOptions,
        progress: &Progress,
    ) -> Option<LoadedPlaylist> {
        match self.try_load(path, options, progress).await {
            Ok(outcome) => Some(outcome.playlist),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load playlist");
                None
            }
        }
    }

    /// Save a playlist in the binary format
    pub async fn try_save(&self, playlist: &LoadedPlaylist, path: &Path) -> Result<()> {
        write_binary(self.fs.as_ref(), playlist, path).await?;
        info!(path = %path.display(), maps = playlist.maps.len(), "Saved playlist");
        Ok(())
    }

    /// Save a playlist, reporting success as a boolean
    pub async fn save(&self, playlist: &LoadedPlaylist, path: &Path) -> bool {
        match self.try_save(playlist, path).await {
            Ok(()) => true,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to save playlist");
                false
            }
        }
    }
}
