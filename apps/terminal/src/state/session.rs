//! # Session State
//!
//! The view-controller state: the loaded catalog and the cart, owned by
//! whatever drives the input loop.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  catalog fetched ──► Session::new(items) ──► input loop ──► exit        │
//! │                          cart = empty           │                       │
//! │                                                 ▼                       │
//! │                                  add_to_cart: cart.add_item(item)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is created only after the fetch has completed and is mutated
//! from a single thread, so it carries no locks.

use storefront_core::{Cart, Item, ItemId};
use tracing::info;
use uuid::Uuid;

/// One run of the storefront.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    catalog: Vec<Item>,
    cart: Cart,
}

impl Session {
    /// Starts a session over an already loaded catalog with an empty cart.
    pub fn new(catalog: Vec<Item>) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, items = catalog.len(), "Session started");
        Session {
            id,
            catalog,
            cart: Cart::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Items in catalog order.
    pub fn catalog(&self) -> &[Item] {
        &self.catalog
    }

    /// First catalog item with the given id.
    pub fn find_item(&self, id: ItemId) -> Option<&Item> {
        self.catalog.iter().find(|item| item.id() == id)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Money;

    fn item(id: ItemId, name: &str) -> Item {
        Item::new(id, name, Money::from_cents(100), "", "", None)
    }

    #[test]
    fn test_new_session_has_empty_cart() {
        let session = Session::new(vec![item(1, "A")]);
        assert!(session.cart().is_empty());
        assert_eq!(session.catalog().len(), 1);
    }

    #[test]
    fn test_find_item_returns_first_match() {
        let session = Session::new(vec![item(1, "A"), item(2, "B"), item(2, "B2")]);
        assert_eq!(session.find_item(2).map(Item::name), Some("B"));
        assert!(session.find_item(99).is_none());
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        assert_ne!(Session::new(vec![]).id(), Session::new(vec![]).id());
    }
}
