//! HTTP API module for the Kid Control exporter
//!
//! # Endpoints
//! - `GET /` — welcome page
//! - `GET /health` — health check
//! - `GET /metrics` — runs a collection cycle and returns Prometheus metrics

pub mod handlers;

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::collector::Collector;
use crate::config::Config;

/// Application state shared with endpoints
pub struct AppState {
    pub config: Config,
    pub collector: Collector,
}

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}
