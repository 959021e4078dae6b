//! # State Module
//!
//! Application state for the terminal front end.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │   AppConfig              │        │   Session                │      │
//! │  │   • catalog settings     │        │   • loaded catalog       │      │
//! │  │   • display settings     │        │   • cart                 │      │
//! │  │   read-only after load   │        │   owned by the input loop│      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{AppConfig, DisplayConfig};
pub use session::Session;
