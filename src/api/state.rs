//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::ClassificationService;

/// Application state shared across request handlers.
///
/// The classification service holds references to the cache store and the
/// active provider; neither is owned by the request path. Constructed once
/// at startup and cloned into each handler.
#[derive(Clone)]
pub struct AppState {
    pub classification_service: Arc<ClassificationService>,
    /// Whether the configured backend is usable as-is (remote without a
    /// credential reports degraded)
    pub provider_degraded: bool,
}

impl AppState {
    pub fn new(classification_service: Arc<ClassificationService>, provider_degraded: bool) -> Self {
        Self {
            classification_service,
            provider_degraded,
        }
    }
}
