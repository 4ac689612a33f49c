//! Multi-page result aggregation.
//!
//! Ecwid search endpoints return results one page at a time. The functions
//! here walk the remaining pages and concatenate their items, so callers get
//! the whole result set from a single call.
//!
//! Two schemes exist:
//!
//! - **Offset/limit** (v3 API): the next page is requested with
//!   `offset = previous offset + previous limit` for as long as pages come
//!   back full.
//! - **Cursor** (legacy API): each page carries the URL of the next one in
//!   `nextUrl` until the last page.
//!
//! Aggregation is all-or-nothing. If any page fails, the items collected so
//! far are dropped and the error is returned, because a caller could not tell
//! a truncated list from a complete one. Dropping the returned future stops
//! fetching further pages.

use std::future::Future;

use crate::error::EcwidError;
use crate::types::{LegacyPage, Query, SearchResult};

/// Fetch every page of an offset/limit search.
///
/// `fetch` issues one request for the given query. If the caller set `limit`
/// or `offset` on `query`, only that page is returned.
pub async fn collect_offset_pages<T, F, Fut>(query: Query, mut fetch: F) -> Result<Vec<T>, EcwidError>
where
    F: FnMut(Query) -> Fut,
    Fut: Future<Output = Result<SearchResult<T>, EcwidError>>,
{
    let explicit_page = query.is_paged();
    let first = fetch(query.clone()).await?;

    tracing::debug!(
        total = first.total,
        count = first.count,
        limit = first.limit,
        "fetched first page"
    );

    if first.is_complete() || explicit_page {
        return Ok(first.items);
    }

    let mut offset = first.offset;
    let mut limit = first.limit;
    let mut full = first.is_full();
    let mut items = first.items;

    while full {
        offset += limit;
        let page = fetch(query.at_offset(offset)).await?;

        tracing::debug!(offset, count = page.count, total = page.total, "fetched page");

        full = page.is_full();
        limit = page.limit;
        items.extend(page.items);
    }

    Ok(items)
}

/// Follow the `nextUrl` cursor of a legacy search from its first page.
///
/// `fetch_next` issues one request to the given URL.
pub async fn collect_cursor_pages<T, F, Fut>(
    first: LegacyPage<T>,
    mut fetch_next: F,
) -> Result<Vec<T>, EcwidError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<LegacyPage<T>, EcwidError>>,
{
    let mut next_url = next_cursor(&first);
    let mut items = first.items;

    while let Some(url) = next_url {
        let page = fetch_next(url).await?;

        tracing::debug!(count = page.count, total = page.total, "fetched legacy page");

        next_url = next_cursor(&page);
        items.extend(page.items);
    }

    Ok(items)
}

fn next_cursor<T>(page: &LegacyPage<T>) -> Option<String> {
    if page.has_next() {
        page.next_url.clone()
    } else {
        None
    }
}
