//! # storefront-catalog: Catalog Loader
//!
//! Fetches the product catalog from the remote API and turns it into
//! validated `Item`s using the rules in `storefront-core`.
//!
//! ## Module Organization
//! ```text
//! storefront_catalog/
//! ├── lib.rs      ◄─── Re-exports
//! ├── config.rs   ◄─── Endpoint, item limit, optional timeout
//! ├── source.rs   ◄─── CatalogSource trait + HTTP implementation
//! ├── loader.rs   ◄─── CatalogLoader::load
//! └── error.rs    ◄─── FetchError, ConfigError
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use storefront_catalog::{CatalogConfig, CatalogLoader};
//!
//! let loader = CatalogLoader::from_config(&CatalogConfig::default())?;
//! let items = loader.load().await?;
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod source;

pub use config::CatalogConfig;
pub use error::{ConfigError, ConfigResult, FetchError, FetchResult};
pub use loader::CatalogLoader;
pub use source::{CatalogSource, HttpCatalogSource};
