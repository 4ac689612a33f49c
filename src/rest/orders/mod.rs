//! v3 orders endpoints.

mod types;

pub use types::*;

use crate::error::EcwidError;
use crate::pagination::collect_offset_pages;
use crate::rate_limit::limits::current::MAX_PAGE_SIZE;
use crate::rest::EcwidClient;
use crate::rest::endpoints::resources::ORDERS;
use crate::types::{Query, SearchResult};

impl EcwidClient {
    /// Search orders and return every matching order.
    ///
    /// All pages are fetched and concatenated in server order. If the query
    /// sets `limit` or `offset`, only that page is fetched. A failure on any
    /// page fails the whole call.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use ecwid_api_client::auth::StaticCredentials;
    /// use ecwid_api_client::rest::EcwidClient;
    /// use ecwid_api_client::types::Query;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EcwidClient::new(Arc::new(StaticCredentials::new(1003, "token")))?;
    ///
    ///     // Every order mentioning "gift"
    ///     let all = client.get_orders(Query::new().keywords("gift")).await?;
    ///
    ///     // Only the ten most recent
    ///     let first_ten = client.get_orders(Query::new().limit(10)).await?;
    ///     assert!(first_ten.len() <= 10);
    ///     println!("{} orders", all.len());
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_orders(&self, query: Query) -> Result<Vec<Order>, EcwidError> {
        collect_offset_pages(query, |page_query| async move {
            self.search_orders(&page_query).await
        })
        .await
    }

    /// Fetch a single page of an order search.
    ///
    /// A `limit` above the API maximum is lowered to it.
    pub async fn search_orders(&self, query: &Query) -> Result<SearchResult<Order>, EcwidError> {
        let query = query.clone().clamp_limit(MAX_PAGE_SIZE);
        self.get(&[ORDERS], &query).await
    }

    /// Get one order by id, or `None` if the store has no such order.
    pub async fn get_order(&self, order_id: &str) -> Result<Option<Order>, EcwidError> {
        self.get_optional(&[ORDERS, order_id], &Query::new()).await
    }

    /// Update an order.
    ///
    /// Only the fields set on `order` are sent.
    pub async fn update_order(&self, order_id: &str, order: &Order) -> Result<UpdateStatus, EcwidError> {
        self.put(&[ORDERS, order_id], order).await
    }

    /// Delete an order.
    pub async fn delete_order(&self, order_id: &str) -> Result<DeleteStatus, EcwidError> {
        self.delete(&[ORDERS, order_id]).await
    }
}
