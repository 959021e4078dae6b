//! # Text Rendering
//!
//! Turns items and cart summaries into terminal text.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ [1] Classic Shirt                 $25.99 │   item card
//! │     Clothes                              │
//! │     https://img.example/shirt.png        │
//! │     → add 1                              │
//! └──────────────────────────────────────────┘
//!
//! Cart (2 items)                                cart list
//!   A                                $10.00
//!   C                                $20.00
//! Total: $30.00
//! ```

use std::io::{self, Write};
use storefront_core::{CartSummary, Item};

use crate::error::UiError;
use crate::state::DisplayConfig;

const NAME_WIDTH: usize = 32;

pub const HELP: &str = "\
Commands:
  list       show the catalog
  add <id>   add an item to the cart
  cart       show the cart and total
  help       show this message
  quit       leave the store";

/// Writes one card per item.
pub fn items<W: Write>(out: &mut W, items: &[Item], display: &DisplayConfig) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "No products available.");
    }

    for item in items {
        writeln!(
            out,
            "[{}] {:<width$} {}",
            item.id(),
            item.name(),
            display.format_money(item.price()),
            width = NAME_WIDTH
        )?;
        if !item.category().is_empty() {
            writeln!(out, "    {}", item.category())?;
        }
        if let Some(image) = item.image() {
            writeln!(out, "    {}", image)?;
        }
        writeln!(out, "    → add {}", item.id())?;
    }
    Ok(())
}

/// Writes the cart list, or the empty-cart message.
pub fn cart<W: Write>(out: &mut W, summary: &CartSummary, display: &DisplayConfig) -> io::Result<()> {
    if summary.is_empty {
        writeln!(out, "Your cart is empty.")?;
    } else {
        let noun = if summary.item_count == 1 { "item" } else { "items" };
        writeln!(out, "Cart ({} {})", summary.item_count, noun)?;
        for line in &summary.lines {
            writeln!(
                out,
                "  {:<width$} {}",
                line.name,
                display.format_money(line.price),
                width = NAME_WIDTH
            )?;
        }
    }
    writeln!(out, "Total: {}{}", display.currency_symbol, summary.total_display)
}

/// Writes a user-facing error.
pub fn error<W: Write>(out: &mut W, err: &UiError) -> io::Result<()> {
    writeln!(out, "{}", err.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CATALOG_UNAVAILABLE;
    use storefront_catalog::FetchError;
    use storefront_core::{Cart, Money};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn shirt() -> Item {
        Item::new(
            1,
            "Shirt",
            Money::from_cents(1000),
            "Clothes",
            "",
            Some("https://img.example/shirt.png".to_string()),
        )
    }

    #[test]
    fn test_item_card() {
        let text = render(|out| items(out, &[shirt()], &DisplayConfig::default()));
        assert!(text.starts_with("[1] Shirt"));
        assert!(text.contains("$10.00"));
        assert!(text.contains("    Clothes\n"));
        assert!(text.contains("https://img.example/shirt.png"));
        assert!(text.contains("→ add 1"));
    }

    #[test]
    fn test_empty_catalog() {
        let text = render(|out| items(out, &[], &DisplayConfig::default()));
        assert_eq!(text, "No products available.\n");
    }

    #[test]
    fn test_empty_cart() {
        let summary = Cart::new().summary();
        let text = render(|out| cart(out, &summary, &DisplayConfig::default()));
        assert_eq!(text, "Your cart is empty.\nTotal: $0.00\n");
    }

    #[test]
    fn test_cart_list() {
        let mut c = Cart::new();
        c.add_item(shirt());
        c.add_item(Item::new(4, "Shoes", Money::from_cents(2000), "", "", None));

        let text = render(|out| cart(out, &c.summary(), &DisplayConfig::default()));

        assert!(text.starts_with("Cart (2 items)\n"));
        assert!(text.contains("  Shirt"));
        assert!(text.contains("$20.00"));
        assert!(text.ends_with("Total: $30.00\n"));
    }

    #[test]
    fn test_error_message() {
        let err = UiError::from(FetchError::Status { status: 500 });
        let text = render(|out| error(out, &err));
        assert_eq!(text, format!("{}\n", CATALOG_UNAVAILABLE));
    }
}
