//! Ecwid REST API endpoint constants.

/// Base URL for the Ecwid API.
pub const ECWID_BASE_URL: &str = "https://app.ecwid.com";

/// Path segments of the v3 API root; the store id follows them.
pub const API_V3: [&str; 2] = ["api", "v3"];

/// Store-relative v3 resources.
pub mod resources {
    /// Orders collection (`/orders`, `/orders/{id}`).
    pub const ORDERS: &str = "orders";
}
