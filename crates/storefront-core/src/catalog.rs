//! # Catalog Module
//!
//! Wire records and the pure selection step of the catalog loader.
//!
//! ## Selection Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  bytes ──► parse_records ──► Vec<RawRecord>                             │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                     filter: validate_record (title, price)             │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                     take(limit)  (source order kept)                    │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                     map: RawRecord::into_item ──► Vec<Item>             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Filtering happens before truncation, so the output holds the first
//! `limit` *valid* records, never fewer when more exist.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Item, ItemId};
use crate::validation::validate_record;

// =============================================================================
// Wire Records
// =============================================================================

/// Category object nested in a catalog record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCategory {
    #[serde(default)]
    pub name: Option<String>,
}

/// One catalog entry as published by the remote API.
///
/// Every field is optional on the wire. Missing values fall back to empty
/// defaults and are then judged by validation, so one sparse record does not
/// fail the whole catalog.
///
/// ```json
/// {
///   "id": 4,
///   "title": "Handmade Fresh Table",
///   "price": 687,
///   "description": "Andy shoes are designed to...",
///   "category": { "id": 5, "name": "Others" },
///   "images": ["https://placeimg.com/640/480/any"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub id: Option<ItemId>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category: Option<RawCategory>,

    #[serde(default)]
    pub images: Option<Vec<String>>,
}

impl RawRecord {
    /// Identifier, `0` when the record has none.
    pub fn id(&self) -> ItemId {
        self.id.unwrap_or_default()
    }

    /// Title, empty when missing.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Price converted to cents, zero when missing.
    ///
    /// Exact for any price accepted by `validate_record`.
    pub fn price(&self) -> Money {
        self.price.map(Money::from_decimal).unwrap_or_default()
    }

    /// Category label, empty when missing.
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .unwrap_or("")
    }

    /// First image URL, if any.
    pub fn first_image(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|images| images.first())
            .map(String::as_str)
    }

    /// Maps the record to an `Item`.
    ///
    /// Does not validate; callers run `validate_record` first.
    pub fn into_item(self) -> Item {
        let id = self.id();
        let price = self.price();
        let category = self.category_name().to_string();
        let image = self.first_image().map(str::to_string);
        Item::new(
            id,
            self.title.unwrap_or_default(),
            price,
            category,
            self.description.unwrap_or_default(),
            image,
        )
    }
}

// =============================================================================
// Pure Operations
// =============================================================================

/// Decodes a catalog response body into raw records.
///
/// ## Errors
/// `CoreError::MalformedCatalog` when the body is not a JSON array of objects.
pub fn parse_records(body: &[u8]) -> CoreResult<Vec<RawRecord>> {
    let records: Vec<RawRecord> = serde_json::from_slice(body)?;
    Ok(records)
}

/// Keeps eligible records, truncates to `limit`, and maps them to items.
///
/// ## Example
/// ```rust
/// use storefront_core::catalog::{parse_records, select_items};
///
/// let body = br#"[
///     {"id":1,"title":"A","price":10},
///     {"id":2,"title":"","price":5},
///     {"id":3,"title":"B","price":-1},
///     {"id":4,"title":"C","price":20}
/// ]"#;
/// let items = select_items(parse_records(body).unwrap(), 20);
/// let names: Vec<&str> = items.iter().map(|i| i.name()).collect();
/// assert_eq!(names, ["A", "C"]);
/// ```
pub fn select_items(records: Vec<RawRecord>, limit: usize) -> Vec<Item> {
    records
        .into_iter()
        .filter(|record| match validate_record(record) {
            Ok(()) => true,
            Err(reason) => {
                debug!(id = record.id(), %reason, "Dropping catalog record");
                false
            }
        })
        .take(limit)
        .map(RawRecord::into_item)
        .collect()
}
