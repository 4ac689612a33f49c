//! Legacy (v1) Ecwid API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::CredentialsProvider;
use crate::error::EcwidError;
use crate::legacy::endpoints::{API_V1, params};
use crate::rate_limit::{Clock, RateGate, RateLimitConfig, RequestThrottler, SystemClock};
use crate::rest::{ECWID_BASE_URL, build_http_client, parse_base_url, parse_response, store_url};
use crate::types::Query;

/// The legacy Ecwid API client.
///
/// Every request, including each follow-up page of a search, first waits for
/// admission from the client's [`RateGate`]. Clients built from the same
/// gate share one quota.
///
/// Failed requests are never retried at the transport level: each admission
/// maps to exactly one HTTP request, and an HTTP 429 is returned as
/// [`EcwidError::Api`].
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use ecwid_api_client::auth::StaticCredentials;
/// use ecwid_api_client::legacy::LegacyClient;
/// use ecwid_api_client::types::Query;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::legacy(1003, "order_key"));
///     let client = LegacyClient::builder().credentials(credentials).build()?;
///
///     let orders = client.get_orders(Query::new()).await?;
///     println!("{} orders", orders.len());
///     Ok(())
/// }
/// ```
///
/// Sharing one quota between two clients:
///
/// ```rust
/// use std::sync::Arc;
/// use ecwid_api_client::legacy::LegacyClient;
/// use ecwid_api_client::rate_limit::RateGate;
///
/// # fn main() -> Result<(), ecwid_api_client::EcwidError> {
/// let gate = Arc::new(RateGate::with_default_tiers()?);
/// let first = LegacyClient::builder().rate_gate(gate.clone()).build()?;
/// let second = LegacyClient::builder().rate_gate(gate.clone()).build()?;
/// assert!(Arc::ptr_eq(first.rate_gate(), second.rate_gate()));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LegacyClient {
    http_client: ClientWithMiddleware,
    base_url: Url,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    throttler: RequestThrottler,
}

impl LegacyClient {
    /// Create a client with default settings and its own rate gate.
    pub fn new(credentials: Arc<dyn CredentialsProvider>) -> Result<Self, EcwidError> {
        Self::builder().credentials(credentials).build()
    }

    /// Create a new client builder.
    pub fn builder() -> LegacyClientBuilder {
        LegacyClientBuilder::new()
    }

    /// The gate this client's requests are admitted through.
    pub fn rate_gate(&self) -> &Arc<RateGate> {
        self.throttler.gate()
    }

    /// The admission throttler.
    pub fn throttler(&self) -> &RequestThrottler {
        &self.throttler
    }

    /// Make a rate-limited GET request for a store resource.
    pub(crate) async fn get<T>(&self, resource: &[&str], query: &Query) -> Result<T, EcwidError>
    where
        T: DeserializeOwned,
    {
        let url = self.request_url(resource, query)?;
        self.get_url(url).await
    }

    /// Make a rate-limited GET request to an absolute URL.
    ///
    /// Used for `nextUrl` cursors, which already carry every parameter.
    pub(crate) async fn get_url<T>(&self, url: Url) -> Result<T, EcwidError>
    where
        T: DeserializeOwned,
    {
        self.throttler.await_admission().await?;
        let response = self.http_client.get(url).send().await?;
        parse_response(response).await
    }

    fn request_url(&self, resource: &[&str], query: &Query) -> Result<Url, EcwidError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(EcwidError::MissingCredentials)?
            .get_credentials();
        let order_key = credentials
            .expose_order_key()
            .ok_or(EcwidError::MissingCredentials)?;

        let mut url = store_url(&self.base_url, &API_V1, credentials.store_id, resource)?;
        let query = query.clone().param(params::SECURE_AUTH_KEY, order_key);
        url.set_query(Some(&query.to_query_string()));
        Ok(url)
    }
}

impl std::fmt::Debug for LegacyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegacyClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_credentials", &self.credentials.is_some())
            .field("throttler", &self.throttler)
            .finish()
    }
}

/// Builder for [`LegacyClient`].
pub struct LegacyClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    user_agent: Option<String>,
    rate_limit: RateLimitConfig,
    rate_gate: Option<Arc<RateGate>>,
    clock: Option<Arc<dyn Clock>>,
}

impl LegacyClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: ECWID_BASE_URL.to_string(),
            credentials: None,
            user_agent: None,
            rate_limit: RateLimitConfig::default(),
            rate_gate: None,
            clock: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the whole rate limit configuration.
    pub fn rate_limit(mut self, config: RateLimitConfig) -> Self {
        self.rate_limit = config;
        self
    }

    /// Set the quota tiers as `(interval, calls)` pairs.
    ///
    /// Ignored when a shared gate is supplied with [`Self::rate_gate`].
    pub fn rate_tiers<I>(mut self, tiers: I) -> Self
    where
        I: IntoIterator<Item = (Duration, u32)>,
    {
        self.rate_limit.tiers = tiers.into_iter().collect();
        self
    }

    /// Set how long a request may wait for admission.
    pub fn max_wait(mut self, max_wait: Duration) -> Self {
        self.rate_limit.max_wait = max_wait;
        self
    }

    /// Set the pause between admission attempts.
    pub fn retry_interval(mut self, retry_interval: Duration) -> Self {
        self.rate_limit.retry_interval = retry_interval;
        self
    }

    /// Enable or disable client-side rate limiting.
    pub fn rate_limiting(mut self, enabled: bool) -> Self {
        self.rate_limit.enabled = enabled;
        self
    }

    /// Admit requests through an existing, possibly shared, gate.
    pub fn rate_gate(mut self, gate: Arc<RateGate>) -> Self {
        self.rate_gate = Some(gate);
        self
    }

    /// Set the clock used by a gate built from the configured tiers.
    ///
    /// The clock decides when quota windows reopen. The admission deadline
    /// (`max_wait`) and the pause between attempts always follow tokio time.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the client.
    ///
    /// Fails with [`EcwidError::Config`] for an unusable base URL, a zero
    /// retry interval, or a tier with a zero interval.
    pub fn build(self) -> Result<LegacyClient, EcwidError> {
        let base_url = parse_base_url(&self.base_url)?;

        if self.rate_limit.enabled && self.rate_limit.retry_interval.is_zero() {
            return Err(EcwidError::Config(
                "rate limit retry interval must be positive".to_string(),
            ));
        }

        let gate = match self.rate_gate {
            Some(gate) => gate,
            None => {
                let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
                Arc::new(RateGate::new(self.rate_limit.tiers.clone(), clock)?)
            }
        };

        Ok(LegacyClient {
            http_client: build_http_client(self.user_agent, None),
            base_url,
            credentials: self.credentials,
            throttler: RequestThrottler::new(gate, &self.rate_limit),
        })
    }
}

impl Default for LegacyClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
