//! `MikroTik` `RouterOS` REST client module
//!
//! Reads Kid Control device counters over the REST API and resets them
//! after each collection cycle.

mod client;
mod parse;
mod types;

// Re-export public types
pub use client::KidControlClient;
pub use types::DeviceRecord;
