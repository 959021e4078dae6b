//! # Catalog Commands

use storefront_catalog::{CatalogConfig, CatalogLoader, CatalogSource};
use storefront_core::Item;
use tracing::debug;

use crate::error::UiError;
use crate::state::Session;

/// Loads the catalog over HTTP using the configured endpoint.
///
/// ## Returns
/// The selected items, or a `FETCH_ERROR` carrying the user-facing message.
pub async fn load_catalog(config: &CatalogConfig) -> Result<Vec<Item>, UiError> {
    debug!(endpoint = %config.endpoint, "load_catalog command");
    let loader = CatalogLoader::from_config(config)?;
    load_from(&loader).await
}

/// Loads the catalog through an already built loader.
pub async fn load_from<S: CatalogSource>(loader: &CatalogLoader<S>) -> Result<Vec<Item>, UiError> {
    Ok(loader.load().await?)
}

/// Items to render as cards, in catalog order.
pub fn list_items(session: &Session) -> &[Item] {
    session.catalog()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCode, CATALOG_UNAVAILABLE};
    use storefront_catalog::{FetchError, FetchResult};
    use storefront_core::RawRecord;

    struct Records(Vec<RawRecord>);

    impl CatalogSource for Records {
        async fn fetch_records(&self) -> FetchResult<Vec<RawRecord>> {
            Ok(self.0.clone())
        }
    }

    struct Down;

    impl CatalogSource for Down {
        async fn fetch_records(&self) -> FetchResult<Vec<RawRecord>> {
            Err(FetchError::Network("connection refused".to_string()))
        }
    }

    fn record(id: i64, title: &str, price: f64) -> RawRecord {
        RawRecord {
            id: Some(id),
            title: Some(title.to_string()),
            price: Some(price),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_load_from_selects_items() {
        let loader = CatalogLoader::new(
            Records(vec![
                record(1, "A", 10.0),
                record(2, "", 5.0),
                record(3, "B", -1.0),
                record(4, "C", 20.0),
            ]),
            20,
        );

        let items = load_from(&loader).await.unwrap();
        let session = Session::new(items);

        let names: Vec<&str> = list_items(&session).iter().map(Item::name).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[tokio::test]
    async fn test_load_failure_is_user_facing() {
        let loader = CatalogLoader::new(Down, 20);

        let err = load_from(&loader).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::FetchError);
        assert_eq!(err.message, CATALOG_UNAVAILABLE);
    }
}
