//! Legacy (v1) API endpoint constants.

/// Path segments of the legacy API root; the store id follows them.
pub const API_V1: [&str; 2] = ["api", "v1"];

/// Store-relative legacy resources.
pub mod resources {
    /// Orders search.
    pub const ORDERS: &str = "orders";
}

/// Query parameter names used by the legacy API.
pub mod params {
    /// Secure key authorizing access to the orders API.
    pub const SECURE_AUTH_KEY: &str = "secure_auth_key";
    /// Select a single order by its number.
    pub const ORDER: &str = "order";
}
