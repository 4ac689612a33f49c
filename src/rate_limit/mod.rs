//! Rate limiting for the legacy Ecwid API.
//!
//! The legacy API documents several quotas that apply at the same time.
//! Requests that break any of them are rejected and repeated offenders risk
//! suspension, so the legacy client checks the quotas locally before each
//! call instead of retrying on HTTP 429.
//!
//! ## Building blocks
//!
//! - [`RateWindow`]: one quota tier (capacity per interval)
//! - [`RateGate`]: all tiers, checked and counted atomically
//! - [`RequestThrottler`]: waits for the gate with a retry interval and a deadline
//! - [`Clock`]: time source, replaceable in tests
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use ecwid_api_client::rate_limit::{RateGate, RateLimitConfig, RequestThrottler};
//!
//! # async fn run() -> Result<(), ecwid_api_client::EcwidError> {
//! let config = RateLimitConfig::default();
//! let gate = Arc::new(RateGate::new(config.tiers.clone(), Arc::new(
//!     ecwid_api_client::rate_limit::SystemClock,
//! ))?);
//! let throttler = RequestThrottler::new(gate, &config);
//!
//! throttler.await_admission().await?;
//! // ... issue the request
//! # Ok(())
//! # }
//! ```

mod clock;
mod gate;
mod throttler;
mod window;

pub use clock::{Clock, ManualClock, SystemClock};
pub use gate::RateGate;
pub use throttler::RequestThrottler;
pub use window::RateWindow;

use std::collections::BTreeMap;
use std::time::Duration;

/// Rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Quota tiers as interval -> maximum calls within that interval.
    pub tiers: BTreeMap<Duration, u32>,
    /// Give up waiting for admission after this long.
    pub max_wait: Duration,
    /// Pause between admission attempts.
    pub retry_interval: Duration,
    /// Whether to enable rate limiting.
    pub enabled: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            tiers: limits::legacy::TIERS
                .iter()
                .map(|&(secs, capacity)| (Duration::from_secs(secs), capacity))
                .collect(),
            max_wait: Duration::from_secs(limits::legacy::MAX_WAIT_SECS),
            retry_interval: Duration::from_secs(limits::legacy::RETRY_INTERVAL_SECS),
            enabled: true,
        }
    }
}

/// Documented Ecwid API limits.
pub mod limits {
    /// Legacy (v1) API limits.
    pub mod legacy {
        /// Quota tiers as (interval in seconds, calls).
        pub const TIERS: [(u64, u32); 3] = [(5, 100), (50, 400), (500, 1400)];
        /// Default maximum admission wait in seconds.
        pub const MAX_WAIT_SECS: u64 = 600;
        /// Default pause between admission attempts in seconds.
        pub const RETRY_INTERVAL_SECS: u64 = 1;
        /// Largest page the legacy orders endpoint returns.
        pub const MAX_PAGE_SIZE: u32 = 200;
    }

    /// Current (v3) API limits.
    pub mod current {
        /// Largest page the v3 search endpoints return.
        pub const MAX_PAGE_SIZE: u32 = 100;
    }
}
