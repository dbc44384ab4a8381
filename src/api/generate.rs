//! Relay endpoint handler

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, GenerateRequest, GenerateResponse, Json};

/// POST /api/generate
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    debug!(kind = %body.kind, "Received generate request");

    let request = body.into_advice_request()?;
    let response = state.relay.generate(&request).await?;

    Ok(Json(GenerateResponse {
        text: response.text,
    }))
}

/// Any method other than POST on /api/generate
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
