//! # Input Parsing
//!
//! One line of user input becomes one `Action`.
//!
//! ```text
//! list        → Action::List
//! add 4       → Action::Add(4)
//! cart        → Action::Cart
//! help | ?    → Action::Help
//! quit | exit → Action::Quit
//! ```

use std::str::FromStr;
use storefront_core::ItemId;

use crate::error::UiError;

/// A user action read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Add(ItemId),
    Cart,
    Help,
    Quit,
}

impl FromStr for Action {
    type Err = UiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or("").to_lowercase();
        let arg = parts.next();

        if parts.next().is_some() {
            return Err(UiError::invalid_input(format!(
                "Too many arguments: '{}'",
                line.trim()
            )));
        }

        match (verb.as_str(), arg) {
            ("list", None) => Ok(Action::List),
            ("cart", None) => Ok(Action::Cart),
            ("help" | "?", None) => Ok(Action::Help),
            ("quit" | "exit", None) => Ok(Action::Quit),
            ("add", Some(id)) => id
                .parse::<ItemId>()
                .map(Action::Add)
                .map_err(|_| UiError::invalid_input(format!("Not an item id: '{}'", id))),
            ("add", None) => Err(UiError::invalid_input("Usage: add <id>")),
            _ => Err(UiError::invalid_input(format!(
                "Unknown command: '{}'. Type 'help' for commands.",
                line.trim()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_actions() {
        assert_eq!("list".parse::<Action>().unwrap(), Action::List);
        assert_eq!("  add   4 ".parse::<Action>().unwrap(), Action::Add(4));
        assert_eq!("CART".parse::<Action>().unwrap(), Action::Cart);
        assert_eq!("?".parse::<Action>().unwrap(), Action::Help);
        assert_eq!("exit".parse::<Action>().unwrap(), Action::Quit);
    }

    #[test]
    fn test_parse_errors() {
        for line in ["add", "add x", "add 1 2", "buy 3", "list all"] {
            let err = line.parse::<Action>().unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput, "line: {}", line);
        }
    }
}
