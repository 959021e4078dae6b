//! # UI Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command Function ── Result<T, UiError>                                 │
//! │         │                                                               │
//! │         ├── FetchError  ──► FETCH_ERROR   (fixed, friendly message)     │
//! │         ├── ConfigError ──► CONFIG_ERROR                                │
//! │         ├── unknown id  ──► NOT_FOUND                                   │
//! │         └── bad input   ──► INVALID_INPUT                               │
//! │                                                                         │
//! │  The terminal prints `message`; details go to the log.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_catalog::{ConfigError, FetchError};

/// Message shown when the catalog cannot be loaded.
pub const CATALOG_UNAVAILABLE: &str =
    "There was an error loading the products. Please try again later.";

/// Error returned from terminal commands.
///
/// ```json
/// { "code": "NOT_FOUND", "message": "Item not found: 42" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for UI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Item id not present in the loaded catalog
    NotFound,

    /// Catalog could not be loaded
    FetchError,

    /// Configuration is invalid
    ConfigError,

    /// Unrecognized command line
    InvalidInput,
}

impl UiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        UiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        UiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        UiError::new(ErrorCode::InvalidInput, message)
    }
}

/// Converts fetch errors to UI errors.
///
/// The user never sees transport details; they are logged instead.
impl From<FetchError> for UiError {
    fn from(err: FetchError) -> Self {
        tracing::error!(error = %err, "Catalog load failed");
        UiError::new(ErrorCode::FetchError, CATALOG_UNAVAILABLE)
    }
}

impl From<ConfigError> for UiError {
    fn from(err: ConfigError) -> Self {
        UiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for UiError {}
