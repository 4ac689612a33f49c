//! Legacy (v1) Ecwid API client.
//!
//! The legacy API is deprecated but still serves the orders feed of older
//! integrations. It enforces several request quotas at once, so every call
//! made through [`LegacyClient`] passes the [`RateGate`](crate::rate_limit::RateGate)
//! first. Search results are paged with a `nextUrl` cursor.

mod client;
mod endpoints;
mod orders;
mod types;

pub use client::{LegacyClient, LegacyClientBuilder};
pub use endpoints::*;
pub use types::{LegacyOrder, LegacyOrderItem};
