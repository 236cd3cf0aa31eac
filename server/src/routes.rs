//! HTTP routes

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::state::AppState;
use crate::ui;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Render the status panel for the configured records
async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    tracing::debug!(statuses = state.config.statuses.len(), "Rendering dashboard");
    Html(ui::render_page(state.config.statuses.clone()))
}

/// Liveness probe
async fn healthz() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "glowbot",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
