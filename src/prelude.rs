// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use mikrotik_kid_control_exporter::prelude::*;
//! ```

// Core types
pub use crate::config::{AuthCredential, Config, RouterClientConfig};
pub use crate::error::{AppError, Result};

// HTTP surface and collection
pub use crate::api::{AppState, create_router};
pub use crate::collector::Collector;

// Metrics types
pub use crate::metrics::{DeviceLabels, MetricsRegistry, StageLabels};

// MikroTik client
pub use crate::mikrotik::{DeviceRecord, KidControlClient};
