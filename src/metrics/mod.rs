// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry and update module for the Kid Control exporter
//!
//! Contains label types and the Prometheus metrics registry.

mod labels;
mod registry;

/// Labels for device gauges and scrape errors
pub use labels::{DeviceLabels, LabelValue, StageLabels};

/// Prometheus metrics registry
pub use registry::MetricsRegistry;
