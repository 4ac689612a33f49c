//! Page envelopes returned by search endpoints.

use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

/// One page of a v3 search response.
///
/// ```json
/// { "total": 300, "count": 100, "offset": 0, "limit": 100, "items": [ ... ] }
/// ```
///
/// A `null` or missing `items` deserializes as an empty list.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct SearchResult<T> {
    /// Items matching the whole query, across all pages.
    #[serde(default)]
    pub total: u32,
    /// Items in this page.
    #[serde(default)]
    pub count: u32,
    /// Index of the first item of this page.
    #[serde(default)]
    pub offset: u32,
    /// Page size used by the server.
    #[serde(default)]
    pub limit: u32,
    /// Items of this page, in server order.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub items: Vec<T>,
}

impl<T> SearchResult<T> {
    /// Whether this page holds the whole result set.
    pub fn is_complete(&self) -> bool {
        self.items.is_empty() || self.total == self.count
    }

    /// Whether the page was filled up to its limit, so more may follow.
    pub fn is_full(&self) -> bool {
        self.limit > 0 && self.count >= self.limit && !self.items.is_empty()
    }
}

/// One page of a legacy orders response.
///
/// ```json
/// { "total": 420, "count": 200, "orders": [ ... ], "nextUrl": "https://..." }
/// ```
///
/// `nextUrl` is an opaque cursor; it is absent or `null` on the last page.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct LegacyPage<T> {
    /// Items matching the whole query.
    #[serde(default)]
    pub total: u32,
    /// Items in this page.
    #[serde(default)]
    pub count: u32,
    /// Items of this page, in server order.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default, rename = "orders", alias = "items")]
    pub items: Vec<T>,
    /// URL of the next page.
    #[serde(default, rename = "nextUrl")]
    pub next_url: Option<String>,
}

impl<T> LegacyPage<T> {
    /// Whether another page follows.
    pub fn has_next(&self) -> bool {
        self.next_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}
