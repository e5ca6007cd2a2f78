//! Discovery of playlist files on disk

use beatlist_core::{PlaylistError, Result};
use beatlist_format::PlaylistFormat;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Scanner for playlist files in directories
#[derive(Debug, Clone, Default)]
pub struct PlaylistScanner {
    /// Whether to follow symbolic links
    follow_links: bool,

    /// Maximum depth to traverse (None for unlimited)
    max_depth: Option<usize>,
}

/// A playlist file found by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedPlaylist {
    pub path: PathBuf,

    /// Format implied by the file extension
    pub format: PlaylistFormat,
}

impl PlaylistScanner {
    /// Create a new playlist scanner
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum directory depth to traverse
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Scan a directory for playlist files, sorted by path
    pub fn scan_directory(&self, path: &Path) -> Result<Vec<ScannedPlaylist>> {
        if !path.exists() {
            return Err(PlaylistError::not_found(path.display().to_string()));
        }

        if !path.is_dir() {
            return Err(PlaylistError::InvalidPath(format!(
                "{} is not a directory",
                path.display()
            )));
        }

        let mut walker = WalkDir::new(path).follow_links(self.follow_links);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut playlists: Vec<ScannedPlaylist> = walker
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let format = PlaylistFormat::from_path(entry.path())?;
                Some(ScannedPlaylist {
                    path: entry.into_path(),
                    format,
                })
            })
            .collect();

        playlists.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(playlists)
    }
}

/// Check if a file looks like a playlist by its extension
pub fn is_playlist_file(path: &Path) -> bool {
    PlaylistFormat::from_path(path).is_some()
}
