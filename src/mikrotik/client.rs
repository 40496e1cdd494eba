//! RouterOS REST client for Kid Control device counters

use reqwest::{RequestBuilder, StatusCode};
use secrecy::ExposeSecret;

use crate::config::RouterClientConfig;
use crate::error::{AppError, Result};

use super::parse::parse_devices;
use super::types::DeviceRecord;

const DEVICES_PATH: &str = "/rest/ip/kid-control/device";
const RESET_COUNTERS_PATH: &str = "/rest/ip/kid-control/device/reset-counters";

/// `MikroTik` Kid Control REST client
///
/// Reads per-device byte counters and resets them. Every request uses HTTP
/// Basic auth and the TLS/timeout policy of the [`RouterClientConfig`].
#[derive(Debug, Clone)]
pub struct KidControlClient {
    http: reqwest::Client,
    config: RouterClientConfig,
}

impl KidControlClient {
    /// Builds the underlying HTTP client from the router descriptor
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Http`] if the TLS backend cannot be initialized.
    pub fn new(config: RouterClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(!config.verify_ssl())
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &RouterClientConfig {
        &self.config
    }

    /// Reads the device list
    ///
    /// Only an HTTP 200 with a decodable body counts as success; the
    /// response is either fully parsed or rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DataFetch`] on transport failure, timeout,
    /// non-200 status or malformed body.
    pub async fn fetch_devices(&self) -> Result<Vec<DeviceRecord>> {
        let url = self.url(DEVICES_PATH);
        tracing::trace!("GET {}", url);

        let response = self.authorized(self.http.get(&url)).send().await.map_err(|e| {
            tracing::warn!("Device list request to {} failed: {}", url, e);
            AppError::DataFetch
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("Device list request to {} returned {}", url, status);
            return Err(AppError::DataFetch);
        }

        let body = response.text().await.map_err(|e| {
            tracing::warn!("Failed to read device list body: {}", e);
            AppError::DataFetch
        })?;

        let devices = parse_devices(&body).map_err(|e| {
            tracing::warn!("Failed to parse device list: {}", e);
            AppError::DataFetch
        })?;
        tracing::trace!("Parsed {} kid-control devices", devices.len());
        Ok(devices)
    }

    /// Zeroes the router-side device counters
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Reset`] on transport failure, timeout or
    /// non-200 status.
    pub async fn reset_counters(&self) -> Result<()> {
        let url = self.url(RESET_COUNTERS_PATH);
        tracing::trace!("POST {}", url);

        let request = self.http.post(&url).json(&serde_json::json!({}));
        let response = self.authorized(request).send().await.map_err(|e| {
            tracing::warn!("Counter reset request to {} failed: {}", url, e);
            AppError::Reset
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("Counter reset request to {} returned {}", url, status);
            return Err(AppError::Reset);
        }
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let credential = self.config.credential();
        request.basic_auth(
            credential.username,
            Some(credential.password.expose_secret()),
        )
    }
}
