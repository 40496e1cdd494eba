//! Error types for the Kid Control exporter

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// HTTP client construction error
    #[error("HTTP client error")]
    Http(#[from] reqwest::Error),

    /// Metrics encoding error
    #[error("Metrics error: {0}")]
    Metrics(String),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),

    /// Reading device counters from the router failed
    ///
    /// Covers non-200 responses, transport failures, timeouts and
    /// undecodable bodies. Nothing was published.
    #[error("Data request failed")]
    DataFetch,

    /// Resetting the router counters failed
    ///
    /// The metrics of the current cycle were already published, but the
    /// router still holds the cumulative values.
    #[error("Reset request failed")]
    Reset,
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
