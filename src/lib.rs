// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # MikroTik Kid Control Exporter
//!
//! Prometheus exporter for per-device traffic counters of a MikroTik
//! router's Kid Control feature.
//!
//! Every scrape of `/metrics` reads the device counters over the RouterOS
//! REST API, publishes them as `bytes_down` / `bytes_up` gauges and resets
//! the router-side counters, so each value is the traffic since the
//! previous successful scrape.
//!
//! ## Main modules
//! - `api`: HTTP API handlers
//! - `collector`: fetch, publish, reset cycle
//! - `config`: configuration management
//! - `error`: error types
//! - `metrics`: labels and metrics registry
//! - `mikrotik`: RouterOS REST client
//! - `prelude`: commonly used types and traits

mod api;
mod collector;
mod config;
mod error;
mod metrics;
mod mikrotik;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::{AuthCredential, Config, RouterClientConfig};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Collection cycle
pub use collector::Collector;

/// Metrics registry and labels
pub use metrics::{DeviceLabels, MetricsRegistry};

/// RouterOS REST client and device records
pub use mikrotik::{DeviceRecord, KidControlClient};
