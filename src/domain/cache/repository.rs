//! Cache trait definition

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::ClassifyError;

/// Generic cache trait for key-value operations with TTL support
///
/// This trait uses JSON strings internally to be dyn-compatible.
/// Use the [`CacheExt`] helpers for typed get/set operations.
///
/// `get_raw` must treat expired entries as absent; `set_raw` inserts or
/// overwrites and restarts the entry's lifetime.
#[async_trait]
pub trait Cache: Send + Sync + Debug {
    /// Gets a raw JSON value from the cache
    async fn get_raw(&self, key: &str) -> Result<Option<String>, ClassifyError>;

    /// Sets a raw JSON value in the cache with a TTL
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> Result<(), ClassifyError>;

    /// Deletes a value from the cache
    async fn delete(&self, key: &str) -> Result<bool, ClassifyError>;

    /// Checks if a key exists in the cache
    async fn exists(&self, key: &str) -> Result<bool, ClassifyError> {
        Ok(self.get_raw(key).await?.is_some())
    }

    /// Clears all entries from the cache
    async fn clear(&self) -> Result<(), ClassifyError>;

    /// Returns approximate number of entries in the cache
    async fn size(&self) -> Result<usize, ClassifyError>;
}

/// Extension trait providing typed get/set operations
pub trait CacheExt: Cache {
    /// Gets a typed value from the cache
    fn get<'a, V>(
        &'a self,
        key: &'a str,
    ) -> impl std::future::Future<Output = Result<Option<V>, ClassifyError>> + Send
    where
        V: DeserializeOwned + Send,
    {
        async move {
            match self.get_raw(key).await? {
                Some(data) => {
                    let value: V = serde_json::from_str(&data).map_err(|e| {
                        ClassifyError::cache(format!("Failed to deserialize cache value: {}", e))
                    })?;
                    Ok(Some(value))
                }
                None => Ok(None),
            }
        }
    }

    /// Sets a typed value in the cache with a TTL
    fn set<'a, V>(
        &'a self,
        key: &'a str,
        value: &'a V,
        ttl: Duration,
    ) -> impl std::future::Future<Output = Result<(), ClassifyError>> + Send
    where
        V: Serialize + Send + Sync,
    {
        async move {
            let data = serde_json::to_string(value).map_err(|e| {
                ClassifyError::cache(format!("Failed to serialize cache value: {}", e))
            })?;
            self.set_raw(key, &data, ttl).await
        }
    }
}

// Blanket implementation for all types implementing Cache
impl<T: Cache + ?Sized> CacheExt for T {}
