use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::AppState;

/// Health check endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub router: String,
    pub scrapes_total: u64,
    pub scrape_errors_total: u64,
}

/// GET /health
///
/// Reports process liveness and cycle counts. Never contacts the router.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let metrics = state.collector.metrics();
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        router: state.config.router.base_url().to_string(),
        scrapes_total: metrics.scrape_success_count(),
        scrape_errors_total: metrics.scrape_error_count(),
    };

    (StatusCode::OK, Json(response))
}
