//! Fluent query builder for search requests.
//!
//! # Example
//!
//! ```rust
//! use ecwid_api_client::types::{PaymentStatus, Query};
//!
//! let query = Query::new()
//!     .payment_status(PaymentStatus::Paid)
//!     .keywords("gift card");
//!
//! assert!(!query.has_limit());
//! assert_eq!(query.get("paymentStatus"), Some("PAID"));
//! ```

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;
use time::OffsetDateTime;

use crate::types::{FulfillmentStatus, PaymentStatus};

const LIMIT: &str = "limit";
const OFFSET: &str = "offset";

/// Search parameters sent as the URL query string.
///
/// The builder remembers whether `limit` or `offset` were set by the caller:
/// a query that sets either asks for one specific page, and the client will
/// not walk further pages for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Query {
    params: BTreeMap<String, String>,
}

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary parameter, replacing any previous value.
    pub fn param(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    /// Maximum number of items in the page.
    pub fn limit(self, limit: u32) -> Self {
        self.param(LIMIT, limit)
    }

    /// Index of the first item in the page.
    pub fn offset(self, offset: u32) -> Self {
        self.param(OFFSET, offset)
    }

    /// Full-text search terms.
    pub fn keywords(self, keywords: impl Display) -> Self {
        self.param("keywords", keywords)
    }

    /// Only orders placed by this customer email.
    pub fn email(self, email: impl Display) -> Self {
        self.param("email", email)
    }

    /// Only orders with this payment status.
    pub fn payment_status(self, status: PaymentStatus) -> Self {
        self.param("paymentStatus", status)
    }

    /// Only orders with this fulfillment status.
    pub fn fulfillment_status(self, status: FulfillmentStatus) -> Self {
        self.param("fulfillmentStatus", status)
    }

    /// Only orders created at or after this moment.
    pub fn created_from(self, from: OffsetDateTime) -> Self {
        self.param("createdFrom", from.unix_timestamp())
    }

    /// Only orders created at or before this moment.
    pub fn created_to(self, to: OffsetDateTime) -> Self {
        self.param("createdTo", to.unix_timestamp())
    }

    /// Value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Whether the caller set `limit`.
    pub fn has_limit(&self) -> bool {
        self.params.contains_key(LIMIT)
    }

    /// Whether the caller set `offset`.
    pub fn has_offset(&self) -> bool {
        self.params.contains_key(OFFSET)
    }

    /// Whether the caller asked for one specific page.
    pub fn is_paged(&self) -> bool {
        self.has_limit() || self.has_offset()
    }

    /// The `limit` value, if set and numeric.
    pub fn get_limit(&self) -> Option<u32> {
        self.get(LIMIT).and_then(|v| v.parse().ok())
    }

    /// The `offset` value, if set and numeric.
    pub fn get_offset(&self) -> Option<u32> {
        self.get(OFFSET).and_then(|v| v.parse().ok())
    }

    /// Clamp `limit` down to `max` when the caller asked for more.
    pub fn clamp_limit(mut self, max: u32) -> Self {
        if self.get_limit().is_some_and(|limit| limit > max) {
            self.params.insert(LIMIT.to_string(), max.to_string());
        }
        self
    }

    /// A copy of this query pointing at another offset.
    pub fn at_offset(&self, offset: u32) -> Self {
        self.clone().offset(offset)
    }

    /// Number of parameters set.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Encode as a URL query string (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(&self.params).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_paging_flags() {
        assert!(!Query::new().is_paged());
        assert!(Query::new().limit(10).has_limit());
        assert!(Query::new().offset(10).has_offset());
        assert!(Query::new().offset(0).is_paged());
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(Query::new().limit(500).clamp_limit(100).get_limit(), Some(100));
        assert_eq!(Query::new().limit(50).clamp_limit(100).get_limit(), Some(50));
        assert!(!Query::new().clamp_limit(100).has_limit());
    }

    #[test]
    fn test_at_offset_keeps_filters() {
        let query = Query::new().keywords("shoes");
        let next = query.at_offset(100);

        assert!(!query.has_offset());
        assert_eq!(next.get_offset(), Some(100));
        assert_eq!(next.get("keywords"), Some("shoes"));
    }

    #[test]
    fn test_query_string_encoding() {
        let query = Query::new()
            .keywords("red shoes")
            .created_from(datetime!(2023-11-14 22:13:20 UTC))
            .fulfillment_status(FulfillmentStatus::Shipped);

        assert_eq!(
            query.to_query_string(),
            "createdFrom=1700000000&fulfillmentStatus=SHIPPED&keywords=red+shoes"
        );
    }
}
