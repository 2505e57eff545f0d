//! In-memory cache implementation using moka

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;

use crate::domain::cache::Cache;
use crate::domain::ClassifyError;

/// Configuration for in-memory cache
#[derive(Debug, Clone)]
pub struct InMemoryCacheConfig {
    /// Maximum number of entries; older entries are evicted beyond this
    pub max_capacity: u64,
    /// Upper bound moka applies to entries regardless of their own TTL
    pub default_ttl: Duration,
}

impl Default for InMemoryCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            default_ttl: Duration::from_secs(3600), // 1 hour
        }
    }
}

impl InMemoryCacheConfig {
    /// Creates a new configuration with specified max capacity
    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = capacity;
        self
    }

    /// Sets the default TTL
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }
}

/// Cache entry stored in moka
#[derive(Debug, Clone)]
struct CacheEntry {
    /// Serialized JSON value
    data: String,
    /// Expiration timestamp (millis since epoch)
    expires_at: u64,
}

/// Thread-safe in-memory cache implementation using moka
///
/// Per-entry TTL is authoritative: an entry whose `expires_at` has passed
/// is treated as absent and removed on read, even if moka still holds it.
/// moka's size-bounded eviction is layered on top so the store cannot grow
/// without bound.
#[derive(Debug)]
pub struct InMemoryCache {
    cache: MokaCache<String, CacheEntry>,
}

impl InMemoryCache {
    /// Creates a new in-memory cache with default configuration
    pub fn new() -> Self {
        Self::with_config(InMemoryCacheConfig::default())
    }

    /// Creates a new in-memory cache with the given configuration
    pub fn with_config(config: InMemoryCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(config.default_ttl)
            .build();

        Self { cache }
    }

    fn current_time_millis() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    fn is_expired(entry: &CacheEntry) -> bool {
        Self::current_time_millis() >= entry.expires_at
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, ClassifyError> {
        match self.cache.get(key).await {
            Some(entry) => {
                if Self::is_expired(&entry) {
                    self.cache.remove(key).await;
                    return Ok(None);
                }

                Ok(Some(entry.data.clone()))
            }
            None => Ok(None),
        }
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> Result<(), ClassifyError> {
        let expires_at = Self::current_time_millis() + ttl.as_millis() as u64;
        let entry = CacheEntry {
            data: value.to_string(),
            expires_at,
        };

        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, ClassifyError> {
        let existed = self.cache.get(key).await.is_some();
        self.cache.remove(key).await;
        Ok(existed)
    }

    async fn clear(&self) -> Result<(), ClassifyError> {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
        Ok(())
    }

    async fn size(&self) -> Result<usize, ClassifyError> {
        self.cache.run_pending_tasks().await;
        Ok(self.cache.entry_count() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::CacheExt;
    use crate::domain::{Classification, LabelScore};

    fn sample() -> Classification {
        Classification::new(
            "mock",
            vec![
                LabelScore::new("POSITIVE", 0.95),
                LabelScore::new("NEGATIVE", 0.05),
            ],
        )
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = InMemoryCache::new();
        cache
            .set("key", &sample(), Duration::from_secs(60))
            .await
            .unwrap();

        let result: Option<Classification> = cache.get("key").await.unwrap();
        assert_eq!(result, Some(sample()));
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let cache = InMemoryCache::new();

        let result: Option<Classification> = cache.get("missing").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_expired_entry_is_absent() {
        let cache = InMemoryCache::new();
        cache
            .set("key", &sample(), Duration::from_millis(50))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(80)).await;

        let result: Option<Classification> = cache.get("key").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_set_overwrites_and_resets_lifetime() {
        let cache = InMemoryCache::new();
        cache
            .set("key", &sample(), Duration::from_millis(50))
            .await
            .unwrap();

        // Re-insert just before expiry with a fresh TTL
        tokio::time::sleep(Duration::from_millis(30)).await;
        cache
            .set("key", &sample(), Duration::from_millis(200))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(60)).await;
        let result: Option<Classification> = cache.get("key").await.unwrap();
        assert!(result.is_some());
    }

    #[tokio::test]
    async fn test_delete() {
        let cache = InMemoryCache::new();
        cache
            .set("key", &sample(), Duration::from_secs(60))
            .await
            .unwrap();

        assert!(cache.delete("key").await.unwrap());
        assert!(!cache.delete("key").await.unwrap());
    }

    #[tokio::test]
    async fn test_clear_and_size() {
        let cache = InMemoryCache::new();
        cache
            .set("a", &sample(), Duration::from_secs(60))
            .await
            .unwrap();
        cache
            .set("b", &sample(), Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(cache.size().await.unwrap(), 2);
        cache.clear().await.unwrap();
        assert_eq!(cache.size().await.unwrap(), 0);
    }
}
