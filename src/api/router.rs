use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::generate;
use super::health;
use super::state::AppState;

/// Create the relay router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .route(
            "/api/generate",
            post(generate::generate).fallback(generate::method_not_allowed),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
