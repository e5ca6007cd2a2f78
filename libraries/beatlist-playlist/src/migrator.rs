//! Upgrade of legacy playlist files to the binary format

use crate::assembler::write_binary;
use beatlist_core::{FileSystem, LoadedPlaylist, PlaylistError};
use beatlist_format::binary;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What happened to a legacy file after load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MigrationOutcome {
    /// No migration was asked for, or the file was already binary
    NotRequested,

    /// Binary file written and the legacy file removed
    Migrated { from: PathBuf, to: PathBuf },

    /// Writing the binary file failed; the legacy file is untouched
    SaveFailed { to: PathBuf, reason: String },

    /// Binary file written but the legacy file could not be removed
    SourceRetained { to: PathBuf, reason: String },
}

impl MigrationOutcome {
    /// Path of the binary file, if one was written
    pub fn new_path(&self) -> Option<&Path> {
        match self {
            Self::Migrated { to, .. } | Self::SourceRetained { to, .. } => Some(to),
            Self::NotRequested | Self::SaveFailed { .. } => None,
        }
    }

    pub fn is_migrated(&self) -> bool {
        matches!(self, Self::Migrated { .. })
    }
}

/// Sibling path with the binary extension
pub fn derived_path(path: &Path) -> PathBuf {
    path.with_extension(binary::EXTENSION)
}

/// Write the binary form next to `source`, then delete `source`
///
/// The legacy file is only removed once the new file has been written. If
/// the derived path is `source` itself the file is rewritten in place.
pub async fn migrate(
    fs: &dyn FileSystem,
    source: &Path,
    playlist: &LoadedPlaylist,
) -> MigrationOutcome {
    let target = derived_path(source);

    if let Err(e) = write_binary(fs, playlist, &target).await {
        warn!(
            source = %source.display(),
            target = %target.display(),
            error = %e,
            "{}, keeping legacy file",
            save_failure_cause(&e)
        );
        return MigrationOutcome::SaveFailed {
            to: target,
            reason: e.to_string(),
        };
    }

    if target != source {
        if let Err(e) = fs.remove(source).await {
            warn!(
                source = %source.display(),
                error = %e,
                "Converted playlist written but legacy file could not be removed"
            );
            return MigrationOutcome::SourceRetained {
                to: target,
                reason: e.to_string(),
            };
        }
    }

    info!(
        from = %source.display(),
        to = %target.display(),
        "Converted legacy playlist"
    );

    MigrationOutcome::Migrated {
        from: source.to_path_buf(),
        to: target,
    }
}

/// Short description of why the binary form could not be written
fn save_failure_cause(err: &PlaylistError) -> &'static str {
    match err {
        PlaylistError::Projection(_) => {
            "Legacy playlist has key-referenced maps the catalog did not return \
             (missing or lookup failed), so it has no hashes to save"
        }
        PlaylistError::Format(_) => "Legacy playlist could not be encoded",
        _ => "Writing the converted playlist failed",
    }
}
