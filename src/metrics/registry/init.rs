// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Registry initialization and metric registration

use crate::metrics::labels::{DeviceLabels, StageLabels};
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::MetricsRegistry;

impl MetricsRegistry {
    pub fn new() -> Self {
        let mut device_registry = Registry::default();
        let mut exporter_registry = Registry::default();

        let bytes_down = Family::<DeviceLabels, Gauge>::default();
        device_registry.register(
            "bytes_down",
            "Bytes down for given host",
            bytes_down.clone(),
        );
        let bytes_up = Family::<DeviceLabels, Gauge>::default();
        device_registry.register("bytes_up", "Bytes up for given host", bytes_up.clone());

        let devices: Gauge = Gauge::default();
        exporter_registry.register(
            "mikrotik_kid_control_devices",
            "Devices reported by the last successful fetch",
            devices.clone(),
        );
        let scrapes: Counter = Counter::default();
        exporter_registry.register(
            "mikrotik_kid_control_scrapes",
            "Completed collection cycles including the counter reset",
            scrapes.clone(),
        );
        let scrape_errors = Family::<StageLabels, Counter>::default();
        exporter_registry.register(
            "mikrotik_kid_control_scrape_errors",
            "Failed collection cycles by failing stage",
            scrape_errors.clone(),
        );
        let scrape_duration_milliseconds: Gauge = Gauge::default();
        exporter_registry.register(
            "mikrotik_kid_control_scrape_duration_milliseconds",
            "Duration of the last collection cycle in milliseconds",
            scrape_duration_milliseconds.clone(),
        );

        // Both stages exist from the start so rate() works before the first failure
        for stage in [StageLabels::FETCH, StageLabels::RESET] {
            let _ = scrape_errors.get_or_create(&StageLabels::new(stage));
        }

        Self {
            device_registry: Arc::new(Mutex::new(device_registry)),
            exporter_registry: Arc::new(Mutex::new(exporter_registry)),
            bytes_down,
            bytes_up,
            devices,
            scrapes,
            scrape_errors,
            scrape_duration_milliseconds,
        }
    }
}
