//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                     │
//! │  ├── CoreError        - Catalog body could not be decoded               │
//! │  └── ValidationError  - Why a catalog record was rejected               │
//! │                                                                         │
//! │  storefront-catalog errors (separate crate)                             │
//! │  ├── FetchError       - Network / status / decode failure               │
//! │  └── ConfigError      - Bad configuration                               │
//! │                                                                         │
//! │  Terminal errors (in app)                                               │
//! │  └── UiError          - What the user sees                              │
//! │                                                                         │
//! │  Flow: CoreError → FetchError → UiError → Terminal                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Record rejection is not a failure of the load: rejected records are
//! dropped and logged, the rest of the catalog is kept.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The catalog body is not a JSON list of records.
    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::MalformedCatalog(err.to_string())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Reasons a raw catalog record is not eligible to become an `Item`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: Money, max: Money },

    /// Value is well-formed JSON but not usable as-is.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be positive");

        let err = ValidationError::OutOfRange {
            field: "price".to_string(),
            min: Money::from_cents(1),
            max: Money::from_cents(10_000_000_000),
        };
        assert_eq!(
            err.to_string(),
            "price must be between $0.01 and $100000000.00"
        );

        let err = ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "not a whole number of cents".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "price has invalid format: not a whole number of cents"
        );
    }

    #[test]
    fn test_json_error_becomes_malformed_catalog() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(matches!(core_err, CoreError::MalformedCatalog(_)));
        assert!(core_err.to_string().starts_with("Malformed catalog: "));
    }
}
