//! # Cart Module
//!
//! The session-scoped shopping cart and its totals aggregation.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   new() ──► ┌───────────────────────┐                                   │
//! │             │  has N items (N ≥ 0)  │ ◄──┐                              │
//! │             └───────────┬───────────┘    │                              │
//! │                         │ add_item       │  N → N+1                     │
//! │                         └────────────────┘  total recomputed            │
//! │                                                                         │
//! │   No removal, no quantity update, no clear, no terminal state.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items keep insertion order; duplicates are allowed
//! - `total()` equals the sum of the prices of the items in the cart; it is
//!   recomputed from the full sequence on every mutation
//! - The sum saturates at the `i64` bounds of `Money` and never panics

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Item, ItemId};

// =============================================================================
// Cart
// =============================================================================

/// Ordered collection of selected items with a cached total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<Item>,
    total: Money,
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            total: Money::zero(),
            created_at: Utc::now(),
        }
    }

    /// Appends an item and recomputes the total.
    ///
    /// No validation is performed: any item produced by the loader is
    /// accepted, including one already in the cart.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
        self.recompute_total();
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(Item::price).sum();
    }

    /// Sum of the prices of every item currently in the cart.
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// Total formatted with two decimal places, e.g. `"30.00"`.
    pub fn total_display(&self) -> String {
        self.total.to_decimal_string()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items (duplicates counted).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// When the cart was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Builds the read model shown by the front end.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from(self)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Read Model
// =============================================================================

/// One row of the rendered cart list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item_id: ItemId,
    pub name: String,
    pub price: Money,
}

/// Cart contents and totals for display.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub item_count: usize,
    pub total: Money,
    /// Two-decimal rendering of `total`.
    pub total_display: String,
    /// Drives the "cart is empty" message.
    pub is_empty: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            lines: cart
                .items
                .iter()
                .map(|item| CartLine {
                    item_id: item.id(),
                    name: item.name().to_string(),
                    price: item.price(),
                })
                .collect(),
            item_count: cart.len(),
            total: cart.total(),
            total_display: cart.total_display(),
            is_empty: cart.is_empty(),
            created_at: cart.created_at(),
        }
    }
}
