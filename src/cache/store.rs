//! The cache-store capability and the get-or-fetch resolution built on it.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::cache::CacheKey;

/// Failure of the underlying cache storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CacheError {
    /// The storage backend could not be reached or rejected the operation.
    #[error("Cache storage unavailable: {reason}")]
    Unavailable {
        /// Backend-specific description of the failure.
        reason: String,
    },

    /// A lock guarding in-process storage was poisoned by a panicking writer.
    #[error("Cache storage lock poisoned")]
    Poisoned,
}

/// A keyed store for raw response bodies with per-entry expiry.
///
/// Implementations own eviction, persistence and distribution. An entry whose
/// TTL has elapsed must be reported as absent by [`get`](Self::get).
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the stored value if present and unexpired.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores `value` under `key` for `ttl`.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;
}

/// Returns the cached value for `key`, or runs `fetch` and caches its result.
///
/// On a hit `fetch` is never called. On a miss its output is stored with
/// `ttl` before being returned. Errors from the store or from `fetch` are
/// returned as-is; nothing is stored when `fetch` fails.
///
/// # Errors
///
/// Returns the store's [`CacheError`] (converted into `E`) or the error
/// produced by `fetch`.
pub async fn get_or_fetch<F, Fut, E>(
    store: &dyn CacheStore,
    key: &CacheKey,
    ttl: Duration,
    fetch: F,
) -> Result<String, E>
where
    F: FnOnce() -> Fut + Send,
    Fut: Future<Output = Result<String, E>> + Send,
    E: From<CacheError>,
{
    if let Some(value) = store.get(key.as_str()).await? {
        tracing::debug!("Cache hit for {}", key);
        return Ok(value);
    }

    tracing::debug!("Cache miss for {}", key);
    let value = fetch().await?;
    store.set(key.as_str(), value.clone(), ttl).await?;
    tracing::debug!("Cached {} ({} bytes, ttl {}s)", key, value.len(), ttl.as_secs());

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{Arguments, InMemoryCache};

    struct BrokenStore;

    #[async_trait]
    impl CacheStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
            Err(CacheError::Unavailable {
                reason: "connection refused".to_string(),
            })
        }

        async fn set(&self, _key: &str, _value: String, _ttl: Duration) -> Result<(), CacheError> {
            Err(CacheError::Poisoned)
        }
    }

    async fn must_not_fetch() -> Result<String, CacheError> {
        panic!("fetch must not run")
    }

    fn key() -> CacheKey {
        CacheKey::new("get-activities-timeline", &Arguments::new())
    }

    #[tokio::test]
    async fn test_miss_fetches_and_stores() {
        let store = InMemoryCache::new();
        let ttl = Duration::from_secs(60);

        let value = get_or_fetch(&store, &key(), ttl, || async {
            Ok::<_, CacheError>("[1,2]".to_string())
        })
        .await
        .unwrap();

        assert_eq!(value, "[1,2]");
        assert_eq!(
            store.get(key().as_str()).await.unwrap(),
            Some("[1,2]".to_string())
        );
    }

    #[tokio::test]
    async fn test_hit_skips_fetch() {
        let store = InMemoryCache::new();
        store
            .set(key().as_str(), "cached".to_string(), Duration::from_secs(60))
            .await
            .unwrap();

        let value = get_or_fetch(&store, &key(), Duration::from_secs(60), must_not_fetch)
            .await
            .unwrap();

        assert_eq!(value, "cached");
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let store = InMemoryCache::new();

        let result = get_or_fetch(&store, &key(), Duration::from_secs(60), || async {
            Err::<String, _>(CacheError::Unavailable {
                reason: "upstream".to_string(),
            })
        })
        .await;

        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates_without_fetching() {
        let result = get_or_fetch(&BrokenStore, &key(), Duration::from_secs(60), must_not_fetch).await;

        assert!(matches!(result, Err(CacheError::Unavailable { .. })));
    }
}
