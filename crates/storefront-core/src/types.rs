//! # Domain Types
//!
//! The catalog entry type shared by the loader, the cart and the front end.
//!
//! ```text
//! ┌─────────────────────────┐
//! │          Item           │
//! │  ─────────────────────  │
//! │  id          (i64)      │
//! │  name                   │
//! │  price       (Money)    │
//! │  category               │
//! │  description            │
//! │  image       (Option)   │
//! └─────────────────────────┘
//! ```
//!
//! Items are immutable once built from catalog data: fields are private and
//! only readable through accessors.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

/// Catalog identifier as published by the remote API.
pub type ItemId = i64;

// =============================================================================
// Item
// =============================================================================

/// A catalog entry eligible for purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: ItemId,
    name: String,
    price: Money,
    category: String,
    description: String,
    image: Option<String>,
}

impl Item {
    /// Builds an item from already-validated values.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        image: Option<String>,
    ) -> Self {
        Item {
            id,
            name: name.into(),
            price,
            category: category.into(),
            description: description.into(),
            image,
        }
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// First image URL of the catalog record, if it had any.
    #[inline]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Multi-line summary of name, price and category.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Item, Money};
    ///
    /// let item = Item::new(1, "Shirt", Money::from_cents(1000), "Clothes", "", None);
    /// assert_eq!(item.info(), "Name: Shirt\nPrice: $10.00\nCategory: Clothes");
    /// ```
    pub fn info(&self) -> String {
        format!(
            "Name: {}\nPrice: {}\nCategory: {}",
            self.name, self.price, self.category
        )
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.price)
    }
}
