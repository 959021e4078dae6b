//! # Commands Module
//!
//! Operations the input loop invokes. Each command declares exactly the
//! state it needs:
//!
//! ```rust,ignore
//! // Only needs configuration
//! async fn load_catalog(config: &CatalogConfig) -> Result<Vec<Item>, UiError>
//!
//! // Reads the session
//! fn get_cart(session: &Session) -> CartSummary
//!
//! // Mutates the session
//! fn add_to_cart(session: &mut Session, item_id: ItemId) -> Result<CartSummary, UiError>
//! ```

pub mod cart;
pub mod catalog;
