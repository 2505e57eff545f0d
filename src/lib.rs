//! Classify Gateway
//!
//! A text-classification API with:
//! - Pluggable inference backends (deterministic mock, Hugging Face)
//! - Response caching with TTL expiry
//! - Provider failure isolation (timeouts, upstream errors, bad responses)

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use infrastructure::cache::{InMemoryCache, InMemoryCacheConfig};
use infrastructure::classifier::ClassifierFactory;
use infrastructure::services::{ClassificationCacheConfig, ClassificationService};
use tracing::info;

/// Create the application state with all services initialized
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let classifier = ClassifierFactory::create(&config.classifier)?;
    info!("Classification provider: {}", classifier.provider_name());

    let cache_ttl = Duration::from_secs(config.cache.ttl_seconds);
    let cache = Arc::new(InMemoryCache::with_config(
        InMemoryCacheConfig::default()
            .with_max_capacity(config.cache.max_capacity)
            .with_default_ttl(cache_ttl),
    ));

    let classification_service = Arc::new(ClassificationService::with_config(
        cache,
        classifier,
        ClassificationCacheConfig { ttl: cache_ttl },
    ));

    let provider_degraded = config.classifier.missing_credential();
    if provider_degraded {
        tracing::warn!("Remote provider configured without a credential; reporting degraded");
    }

    Ok(AppState::new(classification_service, provider_degraded))
}
