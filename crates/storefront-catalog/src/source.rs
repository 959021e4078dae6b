//! # Catalog Sources
//!
//! Where raw catalog records come from.
//!
//! ```text
//! ┌──────────────────┐   fetch_records()   ┌─────────────────────────────┐
//! │  CatalogLoader   │ ──────────────────► │  CatalogSource              │
//! │  (loader.rs)     │ ◄────────────────── │  └── HttpCatalogSource      │
//! └──────────────────┘   Vec<RawRecord>    │      GET <endpoint>         │
//!                                          └─────────────────────────────┘
//! ```

use std::future::Future;

use storefront_core::{parse_records, RawRecord};
use tracing::{debug, warn};

use crate::config::CatalogConfig;
use crate::error::{FetchError, FetchResult};

/// A producer of raw catalog records.
///
/// One call is one fetch: implementations must not retry.
pub trait CatalogSource {
    fn fetch_records(&self) -> impl Future<Output = FetchResult<Vec<RawRecord>>> + Send;
}

/// Fetches the catalog with a single HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCatalogSource {
    /// Builds the HTTP client from the catalog settings.
    pub fn new(config: &CatalogConfig) -> FetchResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(HttpCatalogSource {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn fetch_records(&self) -> FetchResult<Vec<RawRecord>> {
        debug!(endpoint = %self.endpoint, "Fetching catalog");

        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, status = status.as_u16(), "Catalog request rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Catalog body received");

        Ok(parse_records(&body)?)
    }
}
