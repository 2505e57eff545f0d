use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::classify;
use super::health;
use super::state::AppState;

/// Create the router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(classify::classify))
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
