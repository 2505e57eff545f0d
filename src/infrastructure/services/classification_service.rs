//! Classification orchestration with response caching

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::cache::{classification_key, Cache, CacheExt};
use crate::domain::classification::validate_input;
use crate::domain::{Classification, ClassifyError, TextClassifier};

/// Configuration for classification result caching
#[derive(Debug, Clone)]
pub struct ClassificationCacheConfig {
    /// TTL applied to stored results
    pub ttl: Duration,
}

impl Default for ClassificationCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(3600), // 1 hour
        }
    }
}

/// Result of one classification request
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationOutcome {
    pub result: Classification,
    /// Whether the result was served from the cache without a provider call
    pub from_cache: bool,
}

/// Orchestrates cache lookup, provider dispatch, and result recording.
///
/// Per request: validate, derive the cache key, serve a valid cached
/// result if one exists (no provider call on a hit), otherwise make a
/// single provider call and record the result. Provider failures are never
/// cached and propagate unchanged. Cache failures are recovered locally -
/// a read failure counts as a miss and a write failure is dropped after a
/// warning, so cache trouble never blocks classification.
///
/// Two concurrent misses on the same key may both reach the provider and
/// both write; results are idempotent per input, so last-write-wins is
/// fine. No single-flight deduplication is attempted.
#[derive(Debug)]
pub struct ClassificationService {
    cache: Arc<dyn Cache>,
    classifier: Arc<dyn TextClassifier>,
    config: ClassificationCacheConfig,
}

impl ClassificationService {
    pub fn new(cache: Arc<dyn Cache>, classifier: Arc<dyn TextClassifier>) -> Self {
        Self::with_config(cache, classifier, ClassificationCacheConfig::default())
    }

    pub fn with_config(
        cache: Arc<dyn Cache>,
        classifier: Arc<dyn TextClassifier>,
        config: ClassificationCacheConfig,
    ) -> Self {
        Self {
            cache,
            classifier,
            config,
        }
    }

    /// Identifier of the active provider; never invokes it
    pub fn provider_name(&self) -> &'static str {
        self.classifier.provider_name()
    }

    /// Classify `text`, serving from the cache when possible
    pub async fn handle(&self, text: &str) -> Result<ClassificationOutcome, ClassifyError> {
        let trimmed = validate_input(text)?;
        let key = classification_key(trimmed);

        match self.cache.get::<Classification>(&key).await {
            Ok(Some(result)) => {
                debug!(provider = %result.provider, "Serving classification from cache");
                return Ok(ClassificationOutcome {
                    result,
                    from_cache: true,
                });
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "Cache read failed, treating as miss");
            }
        }

        let result = self.classifier.classify(trimmed).await?;

        if let Err(e) = self.cache.set(&key, &result, self.config.ttl).await {
            warn!(error = %e, "Cache write failed, returning uncached result");
        }

        Ok(ClassificationOutcome {
            result,
            from_cache: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::MockCache;
    use crate::domain::classifier::{CountingClassifier, FailingClassifier};
    use crate::infrastructure::cache::{InMemoryCache, InMemoryCacheConfig};
    use crate::infrastructure::classifier::MockClassifier;

    fn service_with(classifier: Arc<dyn TextClassifier>) -> ClassificationService {
        ClassificationService::new(Arc::new(MockCache::new()), classifier)
    }

    #[tokio::test]
    async fn test_miss_then_hit_returns_identical_result() {
        let classifier = Arc::new(CountingClassifier::new());
        let service = service_with(classifier.clone());

        let first = service.handle("Good product").await.unwrap();
        let second = service.handle("Good product").await.unwrap();

        assert!(!first.from_cache);
        assert!(second.from_cache);
        assert_eq!(first.result, second.result);
        assert_eq!(classifier.calls(), 1);
    }

    #[tokio::test]
    async fn test_trim_variants_share_one_cache_entry() {
        let classifier = Arc::new(CountingClassifier::new());
        let service = service_with(classifier.clone());

        service.handle("Good product").await.unwrap();
        let second = service.handle("  Good product  ").await.unwrap();

        assert!(second.from_cache);
        assert_eq!(classifier.calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_provider() {
        let classifier = Arc::new(CountingClassifier::new());
        let service = service_with(classifier.clone());

        for text in ["", "   "] {
            let err = service.handle(text).await.unwrap_err();
            assert!(matches!(err, ClassifyError::InvalidInput { .. }));
        }

        assert_eq!(classifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates_and_is_not_cached() {
        let cache = Arc::new(MockCache::new());
        let service = ClassificationService::new(
            cache.clone(),
            Arc::new(FailingClassifier::new(ClassifyError::provider_timeout(
                "huggingface",
            ))),
        );

        let err = service.handle("text").await.unwrap_err();
        assert_eq!(err, ClassifyError::provider_timeout("huggingface"));
        assert_eq!(cache.size().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_cache_failure_degrades_to_uncached_classification() {
        let classifier = Arc::new(CountingClassifier::new());
        let service = ClassificationService::new(
            Arc::new(MockCache::new().with_error("cache backend down")),
            classifier.clone(),
        );

        let first = service.handle("text").await.unwrap();
        let second = service.handle("text").await.unwrap();

        // Every request classifies; none is served from the broken cache
        assert!(!first.from_cache);
        assert!(!second.from_cache);
        assert_eq!(classifier.calls(), 2);
    }

    #[tokio::test]
    async fn test_ttl_expiry_reinvokes_provider() {
        let cache = Arc::new(InMemoryCache::with_config(
            InMemoryCacheConfig::default().with_default_ttl(Duration::from_secs(60)),
        ));
        let classifier = Arc::new(CountingClassifier::new());
        let service = ClassificationService::with_config(
            cache,
            classifier.clone(),
            ClassificationCacheConfig {
                ttl: Duration::from_millis(50),
            },
        );

        service.handle("text").await.unwrap();
        tokio::time::sleep(Duration::from_millis(80)).await;
        let second = service.handle("text").await.unwrap();

        assert!(!second.from_cache);
        assert_eq!(classifier.calls(), 2);
    }

    #[tokio::test]
    async fn test_mock_scenario_good_product() {
        let service = ClassificationService::new(
            Arc::new(InMemoryCache::new()),
            Arc::new(MockClassifier::new()),
        );

        let first = service.handle("Good product").await.unwrap();
        assert!(!first.from_cache);
        let top = first.result.top().unwrap();
        assert_eq!(top.label, "POSITIVE");
        assert!(top.score >= 0.5);

        let second = service.handle("Good product").await.unwrap();
        assert!(second.from_cache);
        assert_eq!(first.result, second.result);
    }

    #[tokio::test]
    async fn test_provider_name_does_not_classify() {
        let classifier = Arc::new(CountingClassifier::new());
        let service = service_with(classifier.clone());

        assert_eq!(service.provider_name(), "counting");
        assert_eq!(classifier.calls(), 0);
    }
}
