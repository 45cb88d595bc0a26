//! Health handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// Health response body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" when the process is serving
    pub status: String,
    /// Crate version
    pub version: String,
    /// Answer source: "ai" when a provider is wired, "fallback" otherwise
    pub answer_source: String,
}

/// Liveness probe
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let answer_source = if state.ask_service.has_inference() {
        "ai"
    } else {
        "fallback"
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        answer_source: answer_source.to_string(),
    })
}
