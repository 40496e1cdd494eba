//! Label types for Prometheus metrics

use prometheus_client::encoding::{EncodeLabelSet, EncodeLabelValue, LabelValueEncoder};
use std::fmt::Write;

use crate::mikrotik::DeviceRecord;

/// Label value taken from router data
///
/// Device names are free text on the router, so `\`, `"` and line feeds are
/// escaped on encoding to keep the exposition parseable.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct LabelValue(String);

impl LabelValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LabelValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for LabelValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl EncodeLabelValue for LabelValue {
    fn encode(&self, encoder: &mut LabelValueEncoder) -> Result<(), std::fmt::Error> {
        for ch in self.0.chars() {
            match ch {
                '\\' => encoder.write_str(r"\\")?,
                '"' => encoder.write_str(r#"\""#)?,
                '\n' => encoder.write_str(r"\n")?,
                c => encoder.write_char(c)?,
            }
        }
        Ok(())
    }
}

/// Series key of the per-device traffic gauges
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct DeviceLabels {
    pub mac: LabelValue,
    pub name: LabelValue,
}

impl DeviceLabels {
    pub fn new(mac: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            mac: LabelValue(mac.into()),
            name: LabelValue(name.into()),
        }
    }
}

impl From<&DeviceRecord> for DeviceLabels {
    fn from(device: &DeviceRecord) -> Self {
        Self::new(device.mac_address.clone(), device.display_name.clone())
    }
}

/// Collection step that failed
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct StageLabels {
    pub stage: String,
}

impl StageLabels {
    pub const FETCH: &'static str = "fetch";
    pub const RESET: &'static str = "reset";

    pub fn new(stage: &str) -> Self {
        Self {
            stage: stage.to_string(),
        }
    }
}
