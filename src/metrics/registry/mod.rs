// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry and update logic

mod init;
mod scrape;
mod update;

use crate::metrics::labels::{DeviceLabels, StageLabels};
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Process-wide metrics registry
///
/// Created once at startup and handed to the collector; clones share the
/// same underlying series. Device gauges and exporter self-metrics live in
/// separate registries so that only a successful fetch touches the former.
#[derive(Clone)]
pub struct MetricsRegistry {
    device_registry: Arc<Mutex<Registry>>,
    exporter_registry: Arc<Mutex<Registry>>,
    // per-device traffic since the previous reset
    bytes_down: Family<DeviceLabels, Gauge>,
    bytes_up: Family<DeviceLabels, Gauge>,
    // exporter self-metrics
    devices: Gauge,
    scrapes: Counter,
    scrape_errors: Family<StageLabels, Counter>,
    scrape_duration_milliseconds: Gauge,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
