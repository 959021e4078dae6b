//! # Catalog Loader
//!
//! `load()` = one fetch from the source + the pure selection step.
//!
//! ## Load Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load()                                                                 │
//! │    │                                                                    │
//! │    ├── source.fetch_records() ──── Err ──► FetchError (no retry)        │
//! │    │          │                                                         │
//! │    │          ▼ Ok(records)                                             │
//! │    │                                                                    │
//! │    └── select_items(records, max_items) ──► Vec<Item>                   │
//! │           keep: non-empty title AND positive price                      │
//! │           then: first `max_items`, source order                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storefront_core::{select_items, Item};
use tracing::info;

use crate::config::CatalogConfig;
use crate::error::FetchResult;
use crate::source::{CatalogSource, HttpCatalogSource};

/// Loads and selects the catalog from a source.
#[derive(Debug, Clone)]
pub struct CatalogLoader<S> {
    source: S,
    max_items: usize,
}

impl CatalogLoader<HttpCatalogSource> {
    /// Creates an HTTP-backed loader from configuration.
    pub fn from_config(config: &CatalogConfig) -> FetchResult<Self> {
        let source = HttpCatalogSource::new(config)?;
        Ok(CatalogLoader::new(source, config.max_items))
    }
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn new(source: S, max_items: usize) -> Self {
        CatalogLoader { source, max_items }
    }

    /// Fetches the catalog once and returns the selected items.
    ///
    /// ## Errors
    /// Any `FetchError` from the source, unchanged. No partial catalog is
    /// ever returned.
    pub async fn load(&self) -> FetchResult<Vec<Item>> {
        let records = self.source.fetch_records().await?;
        let fetched = records.len();

        let items = select_items(records, self.max_items);

        info!(
            fetched,
            kept = items.len(),
            limit = self.max_items,
            "Catalog loaded"
        );
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use storefront_core::RawRecord;

    // -------------------------------------------------------------------------
    // In-memory source
    // -------------------------------------------------------------------------

    struct StaticSource {
        body: serde_json::Value,
        calls: Arc<AtomicUsize>,
    }

    impl CatalogSource for StaticSource {
        async fn fetch_records(&self) -> FetchResult<Vec<RawRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            serde_json::from_value(self.body.clone()).map_err(|e| FetchError::Decode(e.to_string()))
        }
    }

    struct FailingSource;

    impl CatalogSource for FailingSource {
        async fn fetch_records(&self) -> FetchResult<Vec<RawRecord>> {
            Err(FetchError::Status { status: 502 })
        }
    }

    fn scenario_body() -> serde_json::Value {
        json!([
            {"id": 1, "title": "A", "price": 10, "category": {"name": "Clothes"}, "images": ["a.png"]},
            {"id": 2, "title": "", "price": 5},
            {"id": 3, "title": "B", "price": -1},
            {"id": 4, "title": "C", "price": 20, "category": {"name": "Shoes"}, "images": []}
        ])
    }

    #[tokio::test]
    async fn test_load_selects_and_fetches_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = CatalogLoader::new(
            StaticSource {
                body: scenario_body(),
                calls: calls.clone(),
            },
            20,
        );

        let items = loader.load().await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let names: Vec<&str> = items.iter().map(Item::name).collect();
        assert_eq!(names, ["A", "C"]);
        assert_eq!(items[0].category(), "Clothes");
        assert_eq!(items[0].image(), Some("a.png"));
        assert_eq!(items[1].image(), None);
    }

    #[tokio::test]
    async fn test_load_respects_max_items() {
        let body: Vec<serde_json::Value> = (0..50)
            .map(|i| json!({"id": i, "title": format!("Item {}", i), "price": 1.5}))
            .collect();
        let loader = CatalogLoader::new(
            StaticSource {
                body: json!(body),
                calls: Arc::new(AtomicUsize::new(0)),
            },
            20,
        );

        let items = loader.load().await.unwrap();

        assert_eq!(items.len(), 20);
        assert_eq!(items.first().map(Item::id), Some(0));
        assert_eq!(items.last().map(Item::id), Some(19));
    }

    #[tokio::test]
    async fn test_load_surfaces_source_error() {
        let loader = CatalogLoader::new(FailingSource, 20);
        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 502 }));
    }

    // -------------------------------------------------------------------------
    // HTTP source against a local axum server
    // -------------------------------------------------------------------------

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });
        format!("http://{}/api/v1/products", addr)
    }

    fn http_loader(endpoint: String) -> CatalogLoader<HttpCatalogSource> {
        let config = CatalogConfig {
            endpoint,
            ..CatalogConfig::default()
        };
        CatalogLoader::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn test_http_load_success() {
        let router = Router::new().route(
            "/api/v1/products",
            get(|| async { Json(scenario_body()) }),
        );
        let loader = http_loader(serve(router).await);

        let items = loader.load().await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].price().cents(), 1000);
        assert_eq!(items[1].price().cents(), 2000);
    }

    #[tokio::test]
    async fn test_http_non_success_status() {
        let router = Router::new().route(
            "/api/v1/products",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let loader = http_loader(serve(router).await);

        let err = loader.load().await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn test_http_not_found_path() {
        let router = Router::new();
        let loader = http_loader(serve(router).await);

        let err = loader.load().await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 404 }));
    }

    #[tokio::test]
    async fn test_http_malformed_body() {
        let router = Router::new().route(
            "/api/v1/products",
            get(|| async { Json(json!({"message": "not a list"})) }),
        );
        let loader = http_loader(serve(router).await);

        let err = loader.load().await.unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_http_unreachable_host() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let loader = http_loader(format!("http://{}/api/v1/products", addr));
        let err = loader.load().await.unwrap_err();

        assert!(matches!(err, FetchError::Network(_)));
    }
}
