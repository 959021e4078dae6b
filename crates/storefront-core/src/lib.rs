//! # storefront-core: Pure Logic for the Storefront
//!
//! This crate contains the catalog selection rules and the cart aggregation
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal front end (apps/terminal)           │   │
//! │  │        Item cards ──► "add <id>" ──► Cart list + total          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 storefront-catalog (HTTP fetch)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ bytes                                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │   Item    │  │   Money   │  │   Cart    │  │ RawRecord │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO NETWORK • NO FILES • PURE FUNCTIONS                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Item` catalog entry
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - Wire records, decoding, filter / truncate / map
//! - [`cart`] - Cart and its read model
//! - [`validation`] - Record eligibility rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::catalog::{parse_records, select_items};
//! use storefront_core::{Cart, MAX_CATALOG_ITEMS};
//!
//! let body = br#"[{"id":1,"title":"A","price":10},{"id":4,"title":"C","price":20}]"#;
//! let items = select_items(parse_records(body).unwrap(), MAX_CATALOG_ITEMS);
//!
//! let mut cart = Cart::new();
//! for item in items {
//!     cart.add_item(item);
//! }
//! assert_eq!(cart.total_display(), "30.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartSummary};
pub use catalog::{parse_records, select_items, RawCategory, RawRecord};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{Item, ItemId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of items kept from one catalog fetch.
///
/// Bounds the page to a reasonable number of cards.
pub const MAX_CATALOG_ITEMS: usize = 20;

/// Highest price, in cents, a catalog record may carry ($100,000,000.00).
///
/// Keeps every item price far from the `i64` bounds of `Money`.
pub const MAX_ITEM_PRICE_CENTS: i64 = 10_000_000_000;

/// Catalog endpoint used when no configuration overrides it.
pub const DEFAULT_CATALOG_URL: &str = "https://api.escuelajs.co/api/v1/products";
