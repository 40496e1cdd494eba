// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Kid Control response parsing helpers

use crate::mikrotik::types::{DeviceRecord, KidControlEntry};
use std::collections::HashMap;

/// Decodes a device list body and normalizes it into records
pub(crate) fn parse_devices(body: &str) -> Result<Vec<DeviceRecord>, String> {
    let entries: Vec<KidControlEntry> =
        serde_json::from_str(body).map_err(|e| format!("invalid device list: {e}"))?;
    normalize_devices(entries)
}

/// Collapses raw entries into one record per uppercase MAC
///
/// A MAC seen twice keeps the position of its first occurrence and the
/// values of its last one.
pub(crate) fn normalize_devices(entries: Vec<KidControlEntry>) -> Result<Vec<DeviceRecord>, String> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<DeviceRecord> = Vec::with_capacity(entries.len());

    for entry in entries {
        let mac = entry.mac_address.to_uppercase();
        let bytes_down = entry
            .bytes_down
            .as_u64()
            .ok_or_else(|| format!("device {mac}: bytes-down is not a counter"))?;
        let bytes_up = entry
            .bytes_up
            .as_u64()
            .ok_or_else(|| format!("device {mac}: bytes-up is not a counter"))?;
        let display_name = match entry.name {
            Some(name) if !name.is_empty() => name,
            _ => mac.clone(),
        };

        let record = DeviceRecord {
            mac_address: mac.clone(),
            display_name,
            bytes_down,
            bytes_up,
        };
        match index.get(&mac) {
            Some(&pos) => out[pos] = record,
            None => {
                index.insert(mac, out.len());
                out.push(record);
            }
        }
    }

    Ok(out)
}
