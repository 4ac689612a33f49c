//! Legacy orders endpoint.

use url::Url;

use crate::error::EcwidError;
use crate::legacy::LegacyClient;
use crate::legacy::endpoints::{params, resources::ORDERS};
use crate::legacy::types::LegacyOrder;
use crate::pagination::collect_cursor_pages;
use crate::rate_limit::limits::legacy::MAX_PAGE_SIZE;
use crate::types::{LegacyPage, Query};

impl LegacyClient {
    /// Search orders and return every matching order.
    ///
    /// Follows the `nextUrl` cursor until the last page. If the query sets
    /// `limit` or `offset`, only the first page is returned. Each page is a
    /// separate rate-limited request; a failure on any of them fails the
    /// whole call.
    pub async fn get_orders(&self, query: Query) -> Result<Vec<LegacyOrder>, EcwidError> {
        let first = self.search_orders(&query).await?;
        if query.is_paged() {
            return Ok(first.items);
        }

        collect_cursor_pages(first, |next_url| async move {
            let url = Url::parse(&next_url)?;
            self.get_url::<LegacyPage<LegacyOrder>>(url).await
        })
        .await
    }

    /// Fetch a single page of an order search.
    ///
    /// A `limit` above the API maximum is lowered to it.
    pub async fn search_orders(&self, query: &Query) -> Result<LegacyPage<LegacyOrder>, EcwidError> {
        let query = query.clone().clamp_limit(MAX_PAGE_SIZE);
        self.get(&[ORDERS], &query).await
    }

    /// Get one order by number, or `None` if the store has no such order.
    pub async fn get_order(&self, number: u64) -> Result<Option<LegacyOrder>, EcwidError> {
        let query = Query::new().param(params::ORDER, number);
        match self.get::<LegacyPage<LegacyOrder>>(&[ORDERS], &query).await {
            Ok(page) => Ok(page.items.into_iter().next()),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
