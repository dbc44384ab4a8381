//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;

use super::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    /// Providers that currently have a credential, in priority order
    pub providers: Vec<&'static str>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    /// Running, but every request would fail with a configuration error
    Degraded,
}

/// Reports the service version and which upstream providers are usable.
///
/// Always 200: missing keys are a configuration problem, not a crash.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let providers = state.relay.available_providers().await;
    let status = if providers.is_empty() {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        providers,
    };

    (StatusCode::OK, Json(response))
}

/// Liveness check
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
