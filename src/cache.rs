//! Per-transformer metadata cache.
//!
//! Keyed by canonical URL (`Url::as_str()`). A URL confirmed to have no
//! usable metadata is stored as [`CacheEntry::Absent`] so it is not fetched
//! again during the same run. Nothing is persisted.

use std::future::Future;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use url::Url;

use crate::error::EmbedResult;

// =============================================================================
// Cache Key
// =============================================================================

/// Cache key for URL-based lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(Arc<str>);

impl CacheKey {
    /// Create a cache key from a parsed URL (its canonical href).
    pub fn new(url: &Url) -> Self {
        Self(Arc::from(url.as_str()))
    }

    /// Get the canonical URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Cache Entry
// =============================================================================

/// Cached metadata or the "nothing to embed" sentinel.
#[derive(Debug)]
pub enum CacheEntry<T> {
    Found(Arc<T>),
    Absent,
}

impl<T> Clone for CacheEntry<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Found(value) => Self::Found(Arc::clone(value)),
            Self::Absent => Self::Absent,
        }
    }
}

impl<T> CacheEntry<T> {
    /// Convert to an `Option`, dropping the sentinel.
    pub fn into_option(self) -> Option<Arc<T>> {
        match self {
            Self::Found(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Check if this entry holds metadata.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl<T> From<Option<T>> for CacheEntry<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, |v| Self::Found(Arc::new(v)))
    }
}

// =============================================================================
// Metadata Cache
// =============================================================================

/// Thread-safe metadata cache owned by one transformer instance.
///
/// The lock is only held for map access, never across an `.await`.
/// Concurrent misses for the same key may both fetch; the second write
/// replaces the first with an equivalent value.
#[derive(Debug)]
pub struct MetadataCache<T> {
    inner: RwLock<FxHashMap<CacheKey, CacheEntry<T>>>,
}

impl<T> Default for MetadataCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MetadataCache<T> {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(FxHashMap::default()),
        }
    }

    /// Look up a URL without fetching.
    pub fn get(&self, url: &Url) -> Option<CacheEntry<T>> {
        self.inner.read().get(&CacheKey::new(url)).cloned()
    }

    /// Store an entry for a URL.
    pub fn insert(&self, url: &Url, entry: CacheEntry<T>) {
        self.inner.write().insert(CacheKey::new(url), entry);
    }

    /// Return the cached entry, or run `fetch` once and cache its outcome.
    ///
    /// `Ok(None)` from `fetch` is cached as [`CacheEntry::Absent`]; errors
    /// are returned without touching the cache.
    pub async fn get_or_fetch<F, Fut>(&self, url: &Url, fetch: F) -> EmbedResult<CacheEntry<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = EmbedResult<Option<T>>>,
    {
        if let Some(entry) = self.get(url) {
            tracing::trace!(url = %url, found = entry.is_found(), "metadata cache hit");
            return Ok(entry);
        }

        tracing::trace!(url = %url, "metadata cache miss");
        let entry = CacheEntry::from(fetch().await?);
        self.insert(url, entry.clone());
        Ok(entry)
    }

    /// Check if the cache contains a URL.
    pub fn contains(&self, url: &Url) -> bool {
        self.inner.read().contains_key(&CacheKey::new(url))
    }

    /// Get the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all entries from the cache.
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

// =============================================================================
// Tests
// =============================================================================
