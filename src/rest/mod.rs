//! Ecwid v3 REST API client.
//!
//! Search endpoints return pages of at most 100 items; [`EcwidClient`]
//! walks them with `offset`/`limit` and hands back one list.
//!
//! ```rust,ignore
//! use ecwid_api_client::rest::EcwidClient;
//! use ecwid_api_client::types::Query;
//!
//! let orders = client.get_orders(Query::new()).await?;
//! ```

mod client;
mod endpoints;
pub mod orders;

pub use client::{EcwidClient, EcwidClientBuilder};
pub(crate) use client::{build_http_client, parse_base_url, parse_response, store_url};
pub use endpoints::*;
