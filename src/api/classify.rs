//! Classification endpoint handler

use axum::extract::State;
use tracing::info;
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ClassifyRequest, ClassifyResponse, Json};

/// POST /classify
pub async fn classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        text_len = request.text.len(),
        "Processing classification request"
    );

    let outcome = state
        .classification_service
        .handle(&request.text)
        .await?;

    info!(
        request_id = %request_id,
        provider = %outcome.result.provider,
        from_cache = outcome.from_cache,
        "Classification complete"
    );

    Ok(Json(ClassifyResponse::from(outcome)))
}
