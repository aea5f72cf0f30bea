//! In-process [`CacheStore`] backed by a bounded hash map.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::cache::{CacheError, CacheStore};

/// Number of entries an [`InMemoryCache::new`] store holds before evicting.
pub const DEFAULT_CAPACITY: usize = 1024;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    created_at: Instant,
    ttl: Duration,
    /// Logical access time; higher is more recent.
    last_accessed: u64,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

#[derive(Debug, Default)]
struct Entries {
    map: HashMap<String, CacheEntry>,
    clock: u64,
}

impl Entries {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Drops expired entries, then least recently used ones until there is
    /// room for one more.
    fn evict_if_needed(&mut self, capacity: usize) {
        self.map.retain(|_, entry| !entry.is_expired());
        while self.map.len() >= capacity {
            let oldest = self
                .map
                .iter()
                .min_by_key(|(_, entry)| entry.last_accessed)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(key) => {
                    tracing::debug!("Evicting {} from in-memory cache", key);
                    self.map.remove(&key);
                }
                None => break,
            }
        }
    }
}

/// A process-local, size-bounded cache store.
///
/// Expiry is measured on the monotonic clock. Expired entries are reported
/// as absent and removed when read, when a new entry needs room, or by
/// [`purge_expired`](Self::purge_expired). Once the store is full, inserting
/// a new key evicts the least recently used entry.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use strategy_api::cache::{CacheStore, InMemoryCache};
///
/// let cache: Arc<dyn CacheStore> = Arc::new(InMemoryCache::with_capacity(256));
/// ```
#[derive(Debug)]
pub struct InMemoryCache {
    entries: RwLock<Entries>,
    capacity: usize,
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl InMemoryCache {
    /// Creates an empty cache holding up to [`DEFAULT_CAPACITY`] entries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache holding up to `capacity` entries (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(Entries::default()),
            capacity: capacity.max(1),
        }
    }

    /// Returns the maximum number of entries.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of stored entries, expired ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map_or_else(
            |poisoned| poisoned.into_inner().map.len(),
            |entries| entries.map.len(),
        )
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Poisoned`] if the lock was poisoned.
    pub fn clear(&self) -> Result<(), CacheError> {
        self.entries
            .write()
            .map_err(|_| CacheError::Poisoned)?
            .map
            .clear();
        Ok(())
    }

    /// Removes expired entries and returns how many were dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Poisoned`] if the lock was poisoned.
    pub fn purge_expired(&self) -> Result<usize, CacheError> {
        let mut entries = self.entries.write().map_err(|_| CacheError::Poisoned)?;
        let before = entries.map.len();
        entries.map.retain(|_, entry| !entry.is_expired());
        Ok(before - entries.map.len())
    }
}

#[async_trait]
impl CacheStore for InMemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut entries = self.entries.write().map_err(|_| CacheError::Poisoned)?;
        let now = entries.tick();

        match entries.map.get_mut(key) {
            None => return Ok(None),
            Some(entry) if !entry.is_expired() => {
                entry.last_accessed = now;
                return Ok(Some(entry.value.clone()));
            }
            Some(_) => {}
        }

        entries.map.remove(key);
        Ok(None)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| CacheError::Poisoned)?;
        if !entries.map.contains_key(key) {
            entries.evict_if_needed(self.capacity);
        }

        let last_accessed = entries.tick();
        entries.map.insert(
            key.to_string(),
            CacheEntry {
                value,
                created_at: Instant::now(),
                ttl,
                last_accessed,
            },
        );
        Ok(())
    }
}
