//! # Configuration State
//!
//! Application configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Config file (`storefront.toml`, or the path in `STOREFRONT_CONFIG`)
//! 3. Defaults (this file)
//!
//! Read-only after initialization, so no synchronization is needed.
//!
//! ```toml
//! [catalog]
//! endpoint = "https://api.escuelajs.co/api/v1/products"
//! max_items = 20
//!
//! [display]
//! currency_symbol = "$"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storefront_catalog::{CatalogConfig, ConfigError, ConfigResult};
use storefront_core::Money;
use tracing::{debug, info};

/// Full application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog loader settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Presentation settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// How amounts are shown in the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency symbol placed before amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl DisplayConfig {
    /// Formats an amount with the configured symbol and two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::Money;
    /// use storefront_terminal::state::DisplayConfig;
    ///
    /// let display = DisplayConfig::default();
    /// assert_eq!(display.format_money(Money::from_cents(3000)), "$30.00");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        let decimal = amount.to_decimal_string();
        match decimal.strip_prefix('-') {
            Some(abs) => format!("-{}{}", self.currency_symbol, abs),
            None => format!("{}{}", self.currency_symbol, decimal),
        }
    }
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    ///
    /// A missing config file is not an error.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Same as `load`, reading `STOREFRONT_*` variables through `lookup`.
    ///
    /// The file path comes from `config_path`, then `STOREFRONT_CONFIG`,
    /// then the platform config directory.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = config_path
            .or_else(|| lookup("STOREFRONT_CONFIG").map(PathBuf::from))
            .or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.catalog.apply_overrides(&lookup);
        config.catalog.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file without applying overrides.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&contents)
            .map_err(|e| ConfigError::LoadFailed(format!("{}: {}", path.display(), e)))
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "terminal")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}
