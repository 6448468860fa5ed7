//! Best-effort offline cache.
//!
//! # Responsibilities
//! - Mirror documents to a local JSON file so reads survive going offline
//! - Hold a lock file so only one process caches a given directory
//!
//! # Design Decisions
//! - Enabling the cache sits outside the bootstrap retry path: it runs once,
//!   and a failure degrades to non-cached operation with a warning
//! - `Conflict` (lock held elsewhere) and `Unsupported` (no usable
//!   directory) are never escalated and never retried

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;
use thiserror::Error;

use crate::config::schema::CacheConfig;

const CACHE_FILE: &str = "cache.json";
const LOCK_FILE: &str = "cache.lock";

/// Reasons the offline cache could not be enabled or flushed.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Another process already holds the cache lock.
    #[error("offline cache already in use by another instance: {0}")]
    Conflict(String),

    /// The environment offers no usable cache directory.
    #[error("offline cache unsupported in this environment: {0}")]
    Unsupported(String),

    /// Read or write of the cache file failed.
    #[error("offline cache IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The cache file on disk is not valid JSON.
    #[error("offline cache file corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A thread-safe local mirror of remote documents, keyed by
/// `collection/id`.
#[derive(Debug, Clone)]
pub struct OfflineCache {
    inner: Arc<DashMap<String, Value>>,
    directory: PathBuf,
}

impl OfflineCache {
    /// Acquire the cache directory and load any previous contents.
    pub fn open(directory: &Path) -> Result<Self, PersistenceError> {
        std::fs::create_dir_all(directory)
            .map_err(|e| PersistenceError::Unsupported(e.to_string()))?;

        // create_new is the lock: it fails if another instance got here first
        let lock_path = directory.join(LOCK_FILE);
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&lock_path)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::AlreadyExists {
                    PersistenceError::Conflict(lock_path.display().to_string())
                } else {
                    PersistenceError::Unsupported(e.to_string())
                }
            })?;

        let cache = Self {
            inner: Arc::new(DashMap::new()),
            directory: directory.to_path_buf(),
        };

        let cache_path = directory.join(CACHE_FILE);
        if cache_path.exists() {
            let file = File::open(&cache_path)?;
            let reader = BufReader::new(file);
            let map: std::collections::HashMap<String, Value> = serde_json::from_reader(reader)?;
            for (k, v) in map {
                cache.inner.insert(k, v);
            }
            tracing::info!(
                entries = cache.inner.len(),
                path = %cache_path.display(),
                "Loaded offline cache"
            );
        }

        Ok(cache)
    }

    /// Store a document copy.
    pub fn put(&self, collection: &str, id: &str, document: Value) {
        self.inner.insert(format!("{}/{}", collection, id), document);
    }

    /// Read a cached document copy.
    pub fn get(&self, collection: &str, id: &str) -> Option<Value> {
        self.inner
            .get(&format!("{}/{}", collection, id))
            .map(|r| r.value().clone())
    }

    /// Drop a cached document copy.
    pub fn remove(&self, collection: &str, id: &str) {
        self.inner.remove(&format!("{}/{}", collection, id));
    }

    /// All cached entries as `(key, document)` pairs.
    pub fn snapshot(&self) -> Vec<(String, Value)> {
        self.inner
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect()
    }

    /// Number of cached documents.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Flush the cache to disk.
    pub fn save(&self) -> Result<(), PersistenceError> {
        let cache_path = self.directory.join(CACHE_FILE);
        let file = File::create(&cache_path)?;
        let writer = BufWriter::new(file);

        let map: std::collections::HashMap<_, _> = self
            .inner
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect();

        serde_json::to_writer(writer, &map)?;
        tracing::debug!(entries = map.len(), "Saved offline cache");
        Ok(())
    }

    /// Release the lock so a later instance can take over the directory.
    pub fn release(&self) {
        let lock_path = self.directory.join(LOCK_FILE);
        if let Err(e) = std::fs::remove_file(&lock_path) {
            tracing::debug!(error = %e, "Failed to remove cache lock file");
        }
    }
}

/// Fire-and-forget cache enablement.
///
/// Called once after a successful bootstrap. Any failure is absorbed into a
/// warning and the caller continues without a cache.
pub fn enable_offline_cache(config: &CacheConfig) -> Option<OfflineCache> {
    if !config.enabled {
        return None;
    }

    match OfflineCache::open(Path::new(&config.directory)) {
        Ok(cache) => Some(cache),
        Err(PersistenceError::Conflict(path)) => {
            tracing::warn!(
                lock = %path,
                "Offline cache in use by another instance, continuing without cache"
            );
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "Offline cache unavailable, continuing without cache");
            None
        }
    }
}
