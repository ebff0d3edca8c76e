//! TTL-guarded in-process cache for the registry directory.
//!
//! The directory download is comparatively expensive (a compressed archive
//! decoding to ~10^5 entries), so it is fetched at most once per validity
//! window. Concurrent callers during a refresh all wait on a single in-flight
//! load instead of each triggering their own fetch.

use chrono::{DateTime, Utc};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use dartlens_core::{CorpDirectory, Result};

/// Default validity window for a decoded directory.
pub const DEFAULT_DIRECTORY_TTL: Duration = Duration::from_secs(60 * 60);

/// Cache entry with timestamp for TTL-based invalidation.
#[derive(Debug, Clone)]
struct CacheEntry {
    directory: Arc<CorpDirectory>,
    cached_at: DateTime<Utc>,
}

impl CacheEntry {
    fn new(directory: Arc<CorpDirectory>) -> Self {
        Self {
            directory,
            cached_at: Utc::now(),
        }
    }

    fn is_stale(&self, ttl: Duration) -> bool {
        let age = Utc::now().signed_duration_since(self.cached_at);
        age > chrono::TimeDelta::from_std(ttl).unwrap_or(chrono::TimeDelta::MAX)
    }
}

/// Single-entry TTL cache with single-flight loading.
#[derive(Debug)]
pub struct DirectoryCache {
    ttl: Duration,
    entry: RwLock<Option<CacheEntry>>,
    refresh: Mutex<()>,
}

impl DirectoryCache {
    /// Creates a cache with the given validity window.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
            refresh: Mutex::new(()),
        }
    }

    /// Returns the cached directory, running `load` if the cached copy is
    /// absent or stale.
    ///
    /// Failed loads are not cached; the next caller retries.
    pub async fn get_or_load<F, Fut>(&self, load: F) -> Result<Arc<CorpDirectory>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<CorpDirectory>>,
    {
        if let Some(entry) = self.entry.read().await.as_ref() {
            if !entry.is_stale(self.ttl) {
                debug!("Cache hit for registry directory");
                return Ok(entry.directory.clone());
            }
        }

        let _guard = self.refresh.lock().await;

        // Another caller may have finished the load while we waited.
        if let Some(entry) = self.entry.read().await.as_ref() {
            if !entry.is_stale(self.ttl) {
                debug!("Cache refreshed while waiting for load lock");
                return Ok(entry.directory.clone());
            }
        }

        debug!("Cache miss for registry directory, loading");
        let directory = Arc::new(load().await?);
        *self.entry.write().await = Some(CacheEntry::new(directory.clone()));
        Ok(directory)
    }

    /// Drops the cached directory, forcing the next call to reload.
    pub async fn clear(&self) {
        *self.entry.write().await = None;
        debug!("Cleared cached registry directory");
    }
}

impl Default for DirectoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECTORY_TTL)
    }
}
