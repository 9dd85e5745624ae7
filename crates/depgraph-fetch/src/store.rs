//! Keyed blob storage backing the fetch cache

use crate::error::{FetchError, Result};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime};

/// Bytes held in a cache slot, with the time they were stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedBlob {
    pub bytes: Vec<u8>,
    pub stored_at: DateTime<Utc>,
}

impl CachedBlob {
    /// Age relative to `now`. Entries stamped in the future are age zero.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        (now - self.stored_at).to_std().unwrap_or(Duration::ZERO)
    }

    pub fn is_fresh(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        self.age(now) <= max_age
    }
}

/// A keyed blob cache. Writes replace the slot; the last writer wins.
pub trait BlobStore: Send + Sync {
    /// Read a slot. `Ok(None)` when nothing is stored under `key`.
    fn read(&self, key: &str) -> Result<Option<CachedBlob>>;

    /// Store `bytes` under `key`, stamped with `stored_at`.
    fn write(&self, key: &str, bytes: &[u8], stored_at: DateTime<Utc>) -> Result<()>;

    /// Drop a slot. Returns whether anything was removed.
    fn remove(&self, key: &str) -> Result<bool>;
}

impl<S: BlobStore + ?Sized> BlobStore for Arc<S> {
    fn read(&self, key: &str) -> Result<Option<CachedBlob>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, bytes: &[u8], stored_at: DateTime<Utc>) -> Result<()> {
        (**self).write(key, bytes, stored_at)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        (**self).remove(key)
    }
}

/// One file per key in a directory. The slot's timestamp is kept as the
/// file's mtime, so a copy dropped in by hand counts from when it was written.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`. Keys must name a single entry inside the root.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key == "." || key == ".." || key.contains(['/', '\\']) {
            return Err(FetchError::storage(
                key,
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "cache key must be a single path segment",
                ),
            ));
        }
        Ok(self.root.join(key))
    }
}

impl BlobStore for DirStore {
    fn read(&self, key: &str) -> Result<Option<CachedBlob>> {
        let path = self.path_for(key)?;
        let metadata = match std::fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(FetchError::storage(key, e)),
        };
        let modified = metadata.modified().map_err(|e| FetchError::storage(key, e))?;
        let bytes = std::fs::read(&path).map_err(|e| FetchError::storage(key, e))?;

        Ok(Some(CachedBlob {
            bytes,
            stored_at: DateTime::<Utc>::from(modified),
        }))
    }

    fn write(&self, key: &str, bytes: &[u8], stored_at: DateTime<Utc>) -> Result<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.root).map_err(|e| FetchError::storage(key, e))?;

        // Temp file in the same directory, then rename over the slot
        let mut tmp =
            tempfile::NamedTempFile::new_in(&self.root).map_err(|e| FetchError::storage(key, e))?;
        tmp.write_all(bytes).map_err(|e| FetchError::storage(key, e))?;
        tmp.as_file().flush().map_err(|e| FetchError::storage(key, e))?;
        tmp.as_file()
            .set_modified(SystemTime::from(stored_at))
            .map_err(|e| FetchError::storage(key, e))?;
        tmp.persist(&path).map_err(|e| FetchError::storage(key, e.error))?;

        tracing::debug!("Cache slot written: {}", path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(FetchError::storage(key, e)),
        }
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, CachedBlob>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with an explicit timestamp.
    pub fn insert_at(&self, key: &str, bytes: impl Into<Vec<u8>>, stored_at: DateTime<Utc>) {
        self.entries.insert(
            key.to_string(),
            CachedBlob {
                bytes: bytes.into(),
                stored_at,
            },
        );
    }

    /// Number of writes made through [`BlobStore::write`].
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<CachedBlob>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn write(&self, key: &str, bytes: &[u8], stored_at: DateTime<Utc>) -> Result<()> {
        self.insert_at(key, bytes, stored_at);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }
}
