//! Health check endpoints for Kubernetes probes

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::api::types::Json;

use super::state::AppState;

/// Health check status
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

/// Health response reporting the configured provider
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub provider: String,
}

/// GET /health
///
/// Reports the configured provider identifier without invoking it - health
/// probes must never generate outbound inference calls. `degraded` means
/// the service answers requests but the backend is misconfigured (remote
/// provider without a credential).
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let status = if state.provider_degraded {
        HealthStatus::Degraded
    } else {
        HealthStatus::Ok
    };

    let response = HealthResponse {
        status,
        provider: state.classification_service.provider_name().to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Liveness check - simple check to verify the service is running
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
