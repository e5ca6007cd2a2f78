mod catalog;
mod hash;
mod loaded;
mod playlist;
mod progress;

pub use catalog::CatalogEntry;
pub use hash::{key_from_hex, key_to_hex, MapHash};
pub use loaded::{LoadedMap, LoadedPlaylist, MapResolution, UnresolvableReason};
pub use playlist::{CanonicalMap, CanonicalPlaylist, MapRef};
pub use progress::{Progress, ProgressSnapshot, ProgressStatus};
