//! # Ecwid Client
//!
//! An async Rust client library for the Ecwid e-commerce REST API.
//!
//! ## Features
//!
//! - v3 orders API with transparent `offset`/`limit` pagination
//! - Legacy (v1) orders API with `nextUrl` cursor pagination
//! - Client-side enforcement of the legacy API's multi-tier request quotas
//! - Strong typing for orders with financial precision via `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ecwid_api_client::auth::StaticCredentials;
//! use ecwid_api_client::rest::EcwidClient;
//! use ecwid_api_client::types::Query;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EcwidClient::new(Arc::new(StaticCredentials::new(1003, "secret_token")))?;
//!     let orders = client.get_orders(Query::new()).await?;
//!     println!("{} orders", orders.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod legacy;
pub mod pagination;
pub mod rate_limit;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::EcwidError;
pub use types::common::{FulfillmentStatus, PaymentStatus};

/// Result type alias using EcwidError
pub type Result<T> = std::result::Result<T, EcwidError>;
