//! # Catalog Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Environment Variables (highest priority)                            │
//! │     STOREFRONT_CATALOG_URL, STOREFRONT_MAX_ITEMS,                       │
//! │     STOREFRONT_TIMEOUT_SECS                                             │
//! │                                                                         │
//! │  2. [catalog] section of storefront.toml (read by the app)              │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! │     DEFAULT_CATALOG_URL, 20 items, no timeout                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ```toml
//! [catalog]
//! endpoint = "https://api.escuelajs.co/api/v1/products"
//! max_items = 20
//! # timeout_secs = 30
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use storefront_core::{DEFAULT_CATALOG_URL, MAX_CATALOG_ITEMS};
use tracing::{debug, warn};
use url::Url;

use crate::error::{ConfigError, ConfigResult};

fn default_endpoint() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_max_items() -> usize {
    MAX_CATALOG_ITEMS
}

/// Settings for the catalog loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog endpoint (GET, JSON array response).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Maximum items kept after filtering.
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// Request timeout. Unset means the fetch waits indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            endpoint: default_endpoint(),
            max_items: default_max_items(),
            timeout_secs: None,
        }
    }
}

impl CatalogConfig {
    /// Applies `STOREFRONT_*` overrides read through `lookup`.
    ///
    /// The app passes `std::env::var`; tests pass a map. Unparseable numeric
    /// values are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("STOREFRONT_CATALOG_URL") {
            debug!(url = %url, "Overriding catalog endpoint from environment");
            self.endpoint = url;
        }

        if let Some(max) = lookup("STOREFRONT_MAX_ITEMS") {
            match max.parse::<usize>() {
                Ok(n) => self.max_items = n,
                Err(_) => warn!(value = %max, "Ignoring invalid STOREFRONT_MAX_ITEMS"),
            }
        }

        if let Some(secs) = lookup("STOREFRONT_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(n) => self.timeout_secs = Some(n),
                Err(_) => warn!(value = %secs, "Ignoring invalid STOREFRONT_TIMEOUT_SECS"),
            }
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", self.endpoint, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidUrl(format!(
                "endpoint must use http:// or https://, got: {}",
                self.endpoint
            )));
        }

        if self.max_items == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_items".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs".to_string(),
                reason: "must be greater than 0 when set".to_string(),
            });
        }

        Ok(())
    }

    /// Request timeout, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
