//! Common types used across the Ecwid client library.

pub mod common;
pub mod page;
pub mod query;

pub use common::*;
pub use page::{LegacyPage, SearchResult};
pub use query::Query;
