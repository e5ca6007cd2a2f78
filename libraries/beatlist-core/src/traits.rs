/// Collaborator traits for Beatlist
use crate::error::Result;
use crate::types::{CatalogEntry, MapHash};
use async_trait::async_trait;

/// Beatmap catalog
///
/// Implementers look maps up by catalog key or content hash. A miss is
/// `Ok(None)`; `Err` is reserved for transport/API failures.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Look a map up by its key, given as lowercase hex
    async fn lookup_by_key(&self, key: &str) -> Result<Option<CatalogEntry>>;

    /// Look a map up by its content hash, given as lowercase hex
    async fn lookup_by_hash(&self, hash: &str) -> Result<Option<CatalogEntry>>;
}

/// In-memory catalog
///
/// Serves a fixed set of entries. Used by tests and offline tooling.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<CatalogEntry>,
}

impl StaticCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Add an entry
    pub fn insert(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    fn find_hash(&self, hash: &MapHash) -> Option<CatalogEntry> {
        self.entries.iter().find(|e| &e.hash == hash).cloned()
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn lookup_by_key(&self, key: &str) -> Result<Option<CatalogEntry>> {
        let key = key.to_ascii_lowercase();
        Ok(self
            .entries
            .iter()
            .find(|e| e.key.eq_ignore_ascii_case(&key))
            .cloned())
    }

    async fn lookup_by_hash(&self, hash: &str) -> Result<Option<CatalogEntry>> {
        let hash = MapHash::from_hex(hash)?;
        Ok(self.find_hash(&hash))
    }
}
