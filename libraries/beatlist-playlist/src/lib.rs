//! Beatlist Playlists
//!
//! Loads playlist files of either format, resolves their maps against a
//! beatmap catalog, and saves them back in the binary format.
//!
//! # Architecture
//!
//! - `resolver`: concurrent per-map catalog resolution with progress
//! - `assembler`: canonical <-> loaded conversion and binary writes
//! - `migrator`: legacy-to-binary file upgrade after load
//! - `manager`: public load/save entry points
//! - `scanner`: playlist file discovery
//!
//! # Example
//!
//! ```ignore
//! use beatlist_playlist::{LoadOptions, PlaylistManager};
//! use beatlist_core::Progress;
//!
//! let manager = PlaylistManager::with_local_fs(catalog);
//! let progress = Progress::new();
//! if let Some(playlist) = manager.load(path, &LoadOptions::default(), &progress).await {
//!     println!("{}: {} maps", playlist.title, playlist.maps.len());
//! }
//! ```

pub mod assembler;
pub mod manager;
pub mod migrator;
pub mod resolver;
pub mod scanner;

pub use assembler::{assemble, to_canonical};
pub use manager::{LoadOptions, LoadOutcome, PlaylistManager};
pub use migrator::{derived_path, MigrationOutcome};
pub use resolver::{resolve_maps, resolve_reference};
pub use scanner::{is_playlist_file, PlaylistScanner, ScannedPlaylist};
