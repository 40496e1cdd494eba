// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Device gauge updates

use crate::metrics::labels::DeviceLabels;
use crate::mikrotik::DeviceRecord;

use super::MetricsRegistry;

impl MetricsRegistry {
    /// Publishes one cycle of device counters
    ///
    /// Sets `bytes_down` / `bytes_up` to the fetched values for every device,
    /// replacing whatever the same `{mac, name}` series held before. Series of
    /// devices missing from `devices` are left untouched.
    pub fn publish_devices(&self, devices: &[DeviceRecord]) {
        for device in devices {
            let labels = DeviceLabels::from(device);
            self.bytes_down
                .get_or_create(&labels)
                .set(saturating_i64(device.bytes_down));
            self.bytes_up
                .get_or_create(&labels)
                .set(saturating_i64(device.bytes_up));
        }
        self.devices.set(saturating_i64(devices.len() as u64));
        tracing::trace!("Published counters for {} devices", devices.len());
    }

    /// Current `(bytes_down, bytes_up)` of a device series, if it was ever set
    pub fn device_bytes(&self, labels: &DeviceLabels) -> Option<(i64, i64)> {
        let down = self.bytes_down.get(labels)?.get();
        let up = self.bytes_up.get(labels)?.get();
        Some((down, up))
    }
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
