// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Scrape and registry-level bookkeeping helpers

use crate::error::{AppError, Result};
use crate::metrics::labels::StageLabels;
use prometheus_client::encoding::text::encode;

use super::MetricsRegistry;

const EOF_MARKER: &str = "# EOF\n";

impl MetricsRegistry {
    /// Encodes device gauges and self-metrics as one OpenMetrics document
    pub async fn encode_metrics(&self) -> Result<String> {
        let devices = self.encode_device_metrics().await?;
        let mut buffer = devices
            .strip_suffix(EOF_MARKER)
            .unwrap_or(&devices)
            .to_string();
        let registry = self.exporter_registry.lock().await;
        encode(&mut buffer, &registry).map_err(|e| AppError::Metrics(e.to_string()))?;
        Ok(buffer)
    }

    /// Encodes only the `bytes_down` / `bytes_up` families
    ///
    /// Only a successful fetch changes this output.
    pub async fn encode_device_metrics(&self) -> Result<String> {
        let registry = self.device_registry.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &registry).map_err(|e| AppError::Metrics(e.to_string()))?;
        Ok(buffer)
    }

    pub fn record_scrape_success(&self) {
        self.scrapes.inc();
    }

    pub fn record_scrape_error(&self, stage: &str) {
        self.scrape_errors.get_or_create(&StageLabels::new(stage)).inc();
    }

    pub fn record_scrape_duration(&self, duration_secs: f64) {
        #[allow(clippy::cast_possible_truncation)]
        let millis = (duration_secs * 1000.0).round() as i64;
        self.scrape_duration_milliseconds.set(millis);
    }

    /// Completed cycles, for the health check
    pub fn scrape_success_count(&self) -> u64 {
        self.scrapes.get()
    }

    /// Failed cycles across all stages, for the health check
    pub fn scrape_error_count(&self) -> u64 {
        [StageLabels::FETCH, StageLabels::RESET]
            .iter()
            .map(|stage| {
                self.scrape_errors
                    .get_or_create(&StageLabels::new(stage))
                    .get()
            })
            .sum()
    }
}
