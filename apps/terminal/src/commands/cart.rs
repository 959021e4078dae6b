//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌──────────┐   add_to_cart   ┌──────────────┐
//! │  Empty   │ ──────────────► │  N items     │ ◄─┐
//! │  Cart    │                 │  total = Σ   │ ──┘ add_to_cart
//! └──────────┘                 └──────────────┘
//! ```
//! There is no remove, update or clear command.

use storefront_core::{CartSummary, ItemId};
use tracing::{debug, info};

use crate::error::UiError;
use crate::state::Session;

/// Gets the current cart contents and total.
pub fn get_cart(session: &Session) -> CartSummary {
    debug!("get_cart command");
    session.cart().summary()
}

/// Adds a catalog item to the cart.
///
/// ## Behavior
/// - Looks the id up in the loaded catalog (first match wins)
/// - Appends a copy of the item; adding the same item again adds a second line
///
/// ## Returns
/// Updated cart, or `NOT_FOUND` when the id is not in the catalog
pub fn add_to_cart(session: &mut Session, item_id: ItemId) -> Result<CartSummary, UiError> {
    debug!(item_id, "add_to_cart command");

    let item = session
        .find_item(item_id)
        .cloned()
        .ok_or_else(|| UiError::not_found("Item", item_id))?;

    let session_id = session.id();
    let cart = session.cart_mut();
    cart.add_item(item);

    info!(
        session = %session_id,
        item_id,
        items = cart.len(),
        total = %cart.total(),
        "Item added to cart"
    );
    Ok(cart.summary())
}
