#![allow(dead_code)]

use async_trait::async_trait;
use beatlist_core::{
    Catalog, CatalogEntry, FileSystem, LocalFileSystem, MapHash, PlaylistError, Result,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use std::time::Duration;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

pub fn entry(key: &str, hash: &str, name: &str) -> CatalogEntry {
    CatalogEntry::new(key, MapHash::from_hex(hash).unwrap(), name)
}

/// Catalog fake that records lookups, can fail on demand, and answers
/// later-submitted lookups sooner so completion order differs from
/// submission order.
#[derive(Default)]
pub struct FakeCatalog {
    entries: Vec<CatalogEntry>,
    failing: HashSet<String>,
    pub key_lookups: Mutex<Vec<String>>,
    pub hash_lookups: Mutex<Vec<String>>,
    calls: AtomicUsize,
    reverse_delay: bool,
}

impl FakeCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    /// Lookups for this key or hash return a transport error
    pub fn failing_on(mut self, id: &str) -> Self {
        self.failing.insert(id.to_string());
        self
    }

    pub fn with_reverse_delay(mut self) -> Self {
        self.reverse_delay = true;
        self
    }

    pub fn total_lookups(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) as u64;
        if self.reverse_delay {
            tokio::time::sleep(Duration::from_millis(50u64.saturating_sub(call * 5))).await;
        } else {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn lookup_by_key(&self, key: &str) -> Result<Option<CatalogEntry>> {
        self.key_lookups.lock().unwrap().push(key.to_string());
        self.pause().await;

        if self.failing.contains(key) {
            return Err(PlaylistError::catalog("connection reset"));
        }
        Ok(self.entries.iter().find(|e| e.key == key).cloned())
    }

    async fn lookup_by_hash(&self, hash: &str) -> Result<Option<CatalogEntry>> {
        self.hash_lookups.lock().unwrap().push(hash.to_string());
        self.pause().await;

        if self.failing.contains(hash) {
            return Err(PlaylistError::catalog("connection reset"));
        }
        Ok(self.entries.iter().find(|e| e.hash.to_hex() == hash).cloned())
    }
}

/// Local filesystem with switchable write/remove failures
#[derive(Default)]
pub struct FlakyFileSystem {
    inner: LocalFileSystem,
    pub fail_writes: bool,
    pub fail_removes: bool,
    pub writes: Mutex<Vec<PathBuf>>,
    pub removes: Mutex<Vec<PathBuf>>,
}

impl FlakyFileSystem {
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn failing_removes() -> Self {
        Self {
            fail_removes: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl FileSystem for FlakyFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path).await
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.inner.read(path).await
    }

    async fn write(&self, path: &Path, data: &[u8]) -> Result<()> {
        self.writes.lock().unwrap().push(path.to_path_buf());
        if self.fail_writes {
            return Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full").into());
        }
        self.inner.write(path, data).await
    }

    async fn remove(&self, path: &Path) -> Result<()> {
        self.removes.lock().unwrap().push(path.to_path_buf());
        if self.fail_removes {
            return Err(
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into(),
            );
        }
        self.inner.remove(path).await
    }
}
