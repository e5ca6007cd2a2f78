//! Beatlist Catalog Client
//!
//! HTTP client for a BeatSaver-compatible beatmap catalog.
//!
//! # Features
//!
//! - **Lookup by key**: `GET /maps/id/{key}`
//! - **Lookup by hash**: `GET /maps/hash/{hash}`
//! - **Catalog trait**: plugs into the playlist resolver via [`beatlist_core::Catalog`]
//!
//! A 404 is a miss (`Ok(None)`), not an error.
//!
//! # Example
//!
//! ```ignore
//! use beatlist_catalog::{BeatSaverClient, CatalogConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BeatSaverClient::new(CatalogConfig::default())?;
//!
//!     match client.map_by_hash("ab12cd34...").await? {
//!         Some(map) => println!("Found {}", map.name),
//!         None => println!("Not in catalog"),
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::BeatSaverClient;
pub use error::{CatalogError, Result};
pub use types::{
    CatalogConfig, MapDetail, MapMetadata, MapVersion, UploaderInfo, DEFAULT_BASE_URL,
};
