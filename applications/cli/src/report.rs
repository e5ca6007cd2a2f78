//! Plain-text rendering of command results

use beatlist_core::{LoadedMap, LoadedPlaylist, MapResolution, ProgressSnapshot};
use beatlist_playlist::{MigrationOutcome, ScannedPlaylist};
use std::fmt::Write;

/// Header block followed by one line per map
pub fn playlist(playlist: &LoadedPlaylist) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Title:       {}", playlist.title);
    let _ = writeln!(out, "Author:      {}", playlist.author);
    if !playlist.description.is_empty() {
        let _ = writeln!(out, "Description: {}", playlist.description);
    }
    if !playlist.cover.is_empty() {
        let _ = writeln!(out, "Cover:       {} bytes", playlist.cover.len());
    }
    let _ = writeln!(
        out,
        "Maps:        {} ({} resolved, {} unsupported)",
        playlist.maps.len(),
        playlist.resolved_count(),
        playlist.error_count()
    );

    for (index, map) in playlist.maps.iter().enumerate() {
        let _ = writeln!(out, "{:>4}. {}", index + 1, map_line(map));
    }

    out
}

/// One-line summary of a map
pub fn map_line(map: &LoadedMap) -> String {
    let added = map.date_added.format("%Y-%m-%d");
    match &map.resolution {
        MapResolution::Found(entry) => {
            let mapper = if entry.level_author.is_empty() {
                String::new()
            } else {
                format!(" [{}]", entry.level_author)
            };
            format!("{} {}{} ({added})", entry.key, entry.name, mapper)
        }
        MapResolution::NotFound => format!("{} not found ({added})", map.source),
        MapResolution::Pending => format!("{} pending ({added})", map.source),
        MapResolution::Unsupported(reason) => {
            format!("{} error: {reason} ({added})", map.source)
        }
    }
}

pub fn migration(outcome: &MigrationOutcome) -> String {
    match outcome {
        MigrationOutcome::NotRequested => "No conversion needed".to_string(),
        MigrationOutcome::Migrated { from, to } => {
            format!("Converted {} -> {}", from.display(), to.display())
        }
        MigrationOutcome::SaveFailed { to, reason } => {
            format!("Could not write {}: {reason}", to.display())
        }
        MigrationOutcome::SourceRetained { to, reason } => format!(
            "Wrote {} but could not remove the legacy file: {reason}",
            to.display()
        ),
    }
}

pub fn scanned(playlist: &ScannedPlaylist) -> String {
    format!("{:<6} {}", playlist.format.as_str(), playlist.path.display())
}

pub fn progress(snapshot: &ProgressSnapshot) -> String {
    format!(
        "{}/{} maps ({:.0}%)",
        snapshot.done,
        snapshot.total,
        snapshot.fraction() * 100.0
    )
}
