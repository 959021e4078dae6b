//! # Catalog Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FetchError (load path)                 ConfigError (startup)           │
//! │  ──────────────────────                 ─────────────────────           │
//! │  Network   - transport failure          InvalidValue  - bad setting     │
//! │  Status    - non-2xx response           InvalidUrl    - bad endpoint    │
//! │  Decode    - body is not a record list  LoadFailed    - file / TOML     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `FetchError` is never retried. The caller shows one message and no
//! partial catalog.

use storefront_core::CoreError;
use thiserror::Error;

/// Result type alias for catalog fetches.
pub type FetchResult<T> = Result<T, FetchError>;

/// Result type alias for configuration handling.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failure of the single catalog load.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("Catalog request failed with status {status}")]
    Status { status: u16 },

    /// The body is not a JSON list of catalog records.
    #[error("Malformed catalog response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<CoreError> for FetchError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MalformedCatalog(msg) => FetchError::Decode(msg),
            other => FetchError::Decode(other.to_string()),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Invalid catalog endpoint: {0}")]
    InvalidUrl(String),

    #[error("Failed to load config: {0}")]
    LoadFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FetchError::Status { status: 503 }.to_string(),
            "Catalog request failed with status 503"
        );
        assert_eq!(
            ConfigError::InvalidValue {
                field: "max_items".to_string(),
                reason: "must be greater than 0".to_string(),
            }
            .to_string(),
            "Invalid value for max_items: must be greater than 0"
        );
    }

    #[test]
    fn test_core_error_becomes_decode() {
        let err: FetchError = CoreError::MalformedCatalog("expected array".to_string()).into();
        assert!(matches!(err, FetchError::Decode(ref msg) if msg == "expected array"));
    }
}
