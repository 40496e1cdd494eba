// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Scrape-triggered collection cycle
//!
//! One cycle reads the Kid Control device counters, publishes them into the
//! registry and resets them on the router, in that order. Each step runs only
//! after the previous one succeeded; nothing is retried.

use std::time::Instant;
use tokio::sync::Mutex;

use crate::error::{AppError, Result};
use crate::metrics::{MetricsRegistry, StageLabels};
use crate::mikrotik::KidControlClient;

/// Runs collection cycles against a single router
///
/// Cycles are serialized: a scrape arriving while another cycle is in flight
/// waits for it, so one cycle's reset can never land between another cycle's
/// fetch and its reset.
pub struct Collector {
    client: KidControlClient,
    metrics: MetricsRegistry,
    cycle_lock: Mutex<()>,
}

impl Collector {
    #[must_use]
    pub fn new(client: KidControlClient, metrics: MetricsRegistry) -> Self {
        Self {
            client,
            metrics,
            cycle_lock: Mutex::new(()),
        }
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Runs one fetch, publish, reset cycle and returns the exposition payload
    ///
    /// # Errors
    ///
    /// - [`AppError::DataFetch`]: the device list could not be read. Nothing
    ///   was published and no reset was sent.
    /// - [`AppError::Reset`]: the counters were published, but the router
    ///   kept its cumulative values. The next successful cycle will include
    ///   this cycle's traffic again.
    /// - [`AppError::Metrics`]: the registry could not be encoded.
    pub async fn collect(&self) -> Result<String> {
        let _cycle = self.cycle_lock.lock().await;

        let start = Instant::now();
        let result = self.run_cycle().await;
        let duration = start.elapsed().as_secs_f64();
        self.metrics.record_scrape_duration(duration);

        match result {
            Ok(device_count) => {
                self.metrics.record_scrape_success();
                tracing::debug!(
                    "Collected {} kid-control devices in {:.3}s",
                    device_count,
                    duration
                );
            }
            Err(e) => {
                if let Some(stage) = failed_stage(&e) {
                    self.metrics.record_scrape_error(stage);
                }
                tracing::warn!("Collection cycle failed in {:.3}s: {}", duration, e);
                return Err(e);
            }
        }

        self.metrics.encode_metrics().await
    }

    async fn run_cycle(&self) -> Result<usize> {
        let devices = self.client.fetch_devices().await?;
        self.metrics.publish_devices(&devices);
        // Published values stay visible even if the reset below fails
        self.client.reset_counters().await?;
        Ok(devices.len())
    }
}

fn failed_stage(error: &AppError) -> Option<&'static str> {
    match error {
        AppError::DataFetch => Some(StageLabels::FETCH),
        AppError::Reset => Some(StageLabels::RESET),
        _ => None,
    }
}
