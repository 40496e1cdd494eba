// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Type definitions for Kid Control device data

use serde::Deserialize;

/// Normalized traffic counters for one device, rebuilt every cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    /// Uppercase MAC address, unique within one fetch
    pub mac_address: String,
    /// Router-supplied name, or the MAC when the router has none
    pub display_name: String,
    pub bytes_down: u64,
    pub bytes_up: u64,
}

/// One element of the `/rest/ip/kid-control/device` response
///
/// RouterOS sends many more fields (`.id`, `ip-address`, `rate-down`, ...);
/// only the ones the exporter publishes are decoded.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct KidControlEntry {
    #[serde(rename = "mac-address")]
    pub mac_address: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "bytes-down")]
    pub bytes_down: CounterValue,
    #[serde(rename = "bytes-up")]
    pub bytes_up: CounterValue,
}

/// Counter field as sent by the REST API
///
/// RouterOS encodes numbers as JSON strings; plain numbers are accepted too.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum CounterValue {
    Number(u64),
    Text(String),
}

impl CounterValue {
    pub(crate) fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}
