// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the Kid Control exporter
//!
//! Loads the listen address and the router connection descriptor from
//! environment variables (optionally seeded from a `.env` file).

use std::time::Duration;

use secrecy::SecretString;

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    pub const LISTEN_ADDRESS: &str = "0.0.0.0";
    pub const LISTEN_PORT: u16 = 9180;
    pub const REST_API_METHOD: &str = "http";
    pub const MIKROTIK_IP: &str = "192.168.88.1";
    pub const WEBFIG_PORT: u16 = 80;
    pub const USER: &str = "admin";
    pub const PASSWORD: &str = "";
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const LISTEN_ADDRESS: &str = "LISTEN_ADDRESS";
    pub const LISTEN_PORT: &str = "LISTEN_PORT";
    pub const REST_API_METHOD: &str = "MIKROTIK_REST_API_METHOD";
    pub const MIKROTIK_IP: &str = "MIKROTIK_IP";
    pub const WEBFIG_PORT: &str = "MIKROTIK_WEBFIG_PORT";
    pub const USER: &str = "MIKROTIK_USER";
    pub const PASSWORD: &str = "MIKROTIK_PASSWORD";
    pub const VERIFY_SSL: &str = "MIKROTIK_REST_API_VERIFY_SSL";
    pub const REQUEST_TIMEOUT: &str = "MIKROTIK_REQUEST_TIMEOUT";
}

/// Login and password sent with every router request (HTTP Basic auth)
#[derive(Debug, Clone)]
pub struct AuthCredential {
    pub username: String,
    pub password: SecretString,
}

/// Connection descriptor for the monitored router
///
/// Built once at startup and only read afterwards. It carries no connection
/// state; [`KidControlClient`](crate::KidControlClient) turns it into an
/// HTTP client.
#[derive(Debug, Clone)]
pub struct RouterClientConfig {
    base_url: String,
    login: String,
    password: SecretString,
    verify_ssl: bool,
    request_timeout: Duration,
}

impl RouterClientConfig {
    /// Creates a descriptor with TLS verification off and a 30s timeout
    ///
    /// `base_url` is `scheme://host:port`; a trailing slash is dropped.
    pub fn new(
        base_url: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            login: login.into(),
            password: SecretString::from(password.into()),
            verify_ssl: false,
            request_timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn with_verify_ssl(mut self, verify_ssl: bool) -> Self {
        self.verify_ssl = verify_ssl;
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn verify_ssl(&self) -> bool {
        self.verify_ssl
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Derives the Basic auth credential for outbound requests
    pub fn credential(&self) -> AuthCredential {
        AuthCredential {
            username: self.login.clone(),
            password: self.password.clone(),
        }
    }
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub router: RouterClientConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: join_host_port(defaults::LISTEN_ADDRESS, defaults::LISTEN_PORT),
            router: RouterClientConfig::new(
                format!(
                    "{}://{}:{}",
                    defaults::REST_API_METHOD,
                    defaults::MIKROTIK_IP,
                    defaults::WEBFIG_PORT
                ),
                defaults::USER,
                defaults::PASSWORD,
            ),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] when a port or the timeout is not a number.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable source
    ///
    /// Missing variables fall back to [`defaults`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] when a port or the timeout is not a number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let listen_address = var(env_vars::LISTEN_ADDRESS, defaults::LISTEN_ADDRESS);
        let listen_port = parse_number::<u16>(
            env_vars::LISTEN_PORT,
            lookup(env_vars::LISTEN_PORT),
            defaults::LISTEN_PORT,
        )?;

        let method = var(env_vars::REST_API_METHOD, defaults::REST_API_METHOD);
        let ip = var(env_vars::MIKROTIK_IP, defaults::MIKROTIK_IP);
        let webfig_port = parse_number::<u16>(
            env_vars::WEBFIG_PORT,
            lookup(env_vars::WEBFIG_PORT),
            defaults::WEBFIG_PORT,
        )?;
        let timeout_secs = parse_number::<u64>(
            env_vars::REQUEST_TIMEOUT,
            lookup(env_vars::REQUEST_TIMEOUT),
            defaults::REQUEST_TIMEOUT_SECS,
        )?;
        // Only the literal "1" turns verification on
        let verify_ssl = lookup(env_vars::VERIFY_SSL).is_some_and(|v| v == "1");

        let router = RouterClientConfig::new(
            format!("{method}://{ip}:{webfig_port}"),
            var(env_vars::USER, defaults::USER),
            var(env_vars::PASSWORD, defaults::PASSWORD),
        )
        .with_verify_ssl(verify_ssl)
        .with_request_timeout(Duration::from_secs(timeout_secs));

        Ok(Config {
            server_addr: join_host_port(&listen_address, listen_port),
            router,
        })
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{key} must be a number, got '{value}'"))),
    }
}

fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}
