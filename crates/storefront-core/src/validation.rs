//! # Validation Module
//!
//! Eligibility rules for catalog records.
//!
//! ```text
//! RawRecord ──► validate_record ──┬── Ok   ──► Item
//!                                 └── Err  ──► dropped (logged)
//! ```
//!
//! Prices are judged on the raw JSON number, before it becomes `Money`:
//! a kept price is positive, at most `MAX_ITEM_PRICE_CENTS`, and a whole
//! number of cents, so the conversion to cents is exact.
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_price, validate_title};
//!
//! assert!(validate_title("Shirt").is_ok());
//! assert!(validate_title("").is_err());
//! assert!(validate_price(10.99).is_ok());
//! assert!(validate_price(0.0).is_err());
//! assert!(validate_price(0.005).is_err());
//! ```

use crate::catalog::RawRecord;
use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_ITEM_PRICE_CENTS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Relative slack allowed when checking that `price * 100` is integral.
///
/// Absorbs the binary representation error of decimal prices such as
/// `10.99`, which is far below one cent for every price in range.
const CENT_TOLERANCE: f64 = 1e-12;

/// Validates a record title.
///
/// ## Rules
/// - Must not be empty (whitespace counts as content)
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    Ok(())
}

/// Validates a record price as published by the catalog.
///
/// ## Rules
/// - Must be strictly positive (NaN is not)
/// - Must not exceed `MAX_ITEM_PRICE_CENTS` (infinity does)
/// - Must be a whole number of cents
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if price.is_nan() || price <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    let cents = price * 100.0;
    if cents > MAX_ITEM_PRICE_CENTS as f64 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: Money::from_cents(1),
            max: Money::from_cents(MAX_ITEM_PRICE_CENTS),
        });
    }

    if (cents - cents.round()).abs() > CENT_TOLERANCE * cents.max(1.0) {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "not a whole number of cents".to_string(),
        });
    }

    Ok(())
}

/// Validates a raw catalog record.
///
/// The title is checked before the price, so a record failing both reports
/// the missing title. A missing price is judged as zero.
pub fn validate_record(record: &RawRecord) -> ValidationResult<()> {
    validate_title(record.title())?;
    validate_price(record.price.unwrap_or_default())?;
    Ok(())
}
