//! Ecwid v3 REST API client implementation.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::CredentialsProvider;
use crate::error::{ApiError, EcwidError};
use crate::rest::endpoints::{API_V3, ECWID_BASE_URL};
use crate::types::Query;

/// The Ecwid v3 REST API client.
///
/// Search calls walk every page of the result unless the query sets `limit`
/// or `offset`; single-entity lookups return `None` for unknown ids.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use ecwid_api_client::auth::StaticCredentials;
/// use ecwid_api_client::rest::EcwidClient;
/// use ecwid_api_client::types::{PaymentStatus, Query};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new(1003, "secret_token"));
///     let client = EcwidClient::builder().credentials(credentials).build()?;
///
///     let paid = client
///         .get_orders(Query::new().payment_status(PaymentStatus::Paid))
///         .await?;
///     println!("{} paid orders", paid.len());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct EcwidClient {
    http_client: ClientWithMiddleware,
    base_url: Url,
    credentials: Option<Arc<dyn CredentialsProvider>>,
}

impl EcwidClient {
    /// Create a client with default settings for the given credentials.
    pub fn new(credentials: Arc<dyn CredentialsProvider>) -> Result<Self, EcwidError> {
        Self::builder().credentials(credentials).build()
    }

    /// Create a new client builder.
    pub fn builder() -> EcwidClientBuilder {
        EcwidClientBuilder::new()
    }

    /// Make an authenticated GET request.
    pub(crate) async fn get<T>(&self, resource: &[&str], query: &Query) -> Result<T, EcwidError>
    where
        T: DeserializeOwned,
    {
        let (url, token) = self.request_url(resource, query)?;
        let response = self
            .http_client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?;
        parse_response(response).await
    }

    /// Make an authenticated GET request, mapping "not found" to `None`.
    pub(crate) async fn get_optional<T>(
        &self,
        resource: &[&str],
        query: &Query,
    ) -> Result<Option<T>, EcwidError>
    where
        T: DeserializeOwned,
    {
        match self.get(resource, query).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Make an authenticated PUT request with a JSON body.
    pub(crate) async fn put<T, B>(&self, resource: &[&str], body: &B) -> Result<T, EcwidError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (url, token) = self.request_url(resource, &Query::new())?;
        let body = serde_json::to_string(body)?;
        let response = self
            .http_client
            .put(url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        parse_response(response).await
    }

    /// Make an authenticated DELETE request.
    pub(crate) async fn delete<T>(&self, resource: &[&str]) -> Result<T, EcwidError>
    where
        T: DeserializeOwned,
    {
        let (url, token) = self.request_url(resource, &Query::new())?;
        let response = self
            .http_client
            .delete(url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?;
        parse_response(response).await
    }

    /// Store URL for a resource plus the token to send with it.
    fn request_url(&self, resource: &[&str], query: &Query) -> Result<(Url, &str), EcwidError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(EcwidError::MissingCredentials)?
            .get_credentials();
        let token = credentials
            .expose_token()
            .ok_or(EcwidError::MissingCredentials)?;

        let mut url = store_url(&self.base_url, &API_V3, credentials.store_id, resource)?;
        if !query.is_empty() {
            url.set_query(Some(&query.to_query_string()));
        }
        Ok((url, token))
    }
}

impl std::fmt::Debug for EcwidClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EcwidClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`EcwidClient`].
pub struct EcwidClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    user_agent: Option<String>,
    max_retries: u32,
}

impl EcwidClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: ECWID_BASE_URL.to_string(),
            credentials: None,
            user_agent: None,
            max_retries: 3,
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

    /// Set the maximum number of retries for transient failures.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    ///
    /// Fails with [`EcwidError::Config`] if the base URL is not usable.
    pub fn build(self) -> Result<EcwidClient, EcwidError> {
        Ok(EcwidClient {
            http_client: build_http_client(self.user_agent, Some(self.max_retries)),
            base_url: parse_base_url(&self.base_url)?,
            credentials: self.credentials,
        })
    }
}

impl Default for EcwidClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the HTTP client with tracing and, if `max_retries` is set,
/// transient-failure retries.
///
/// Without a retry layer every call to `send` is exactly one HTTP request.
pub(crate) fn build_http_client(
    user_agent: Option<String>,
    max_retries: Option<u32>,
) -> ClientWithMiddleware {
    // Build default headers.
    let mut headers = HeaderMap::new();
    let user_agent =
        user_agent.unwrap_or_else(|| format!("ecwid-api-client/{}", env!("CARGO_PKG_VERSION")));
    let header_value = HeaderValue::from_str(&user_agent)
        .unwrap_or_else(|_| HeaderValue::from_static("ecwid-api-client"));
    headers.insert(USER_AGENT, header_value);

    let reqwest_client = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());

    let builder = ClientBuilder::new(reqwest_client).with(TracingMiddleware::default());
    match max_retries {
        Some(max_retries) => {
            let retry_policy = ExponentialBackoff::builder().build_with_max_retries(max_retries);
            builder
                .with(RetryTransientMiddleware::new_with_policy(retry_policy))
                .build()
        }
        None => builder.build(),
    }
}

/// Parse and validate a base URL.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, EcwidError> {
    let url = Url::parse(base_url)?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(EcwidError::Config(format!("unusable base URL: {base_url}")));
    }
    Ok(url)
}

/// `{base}/{prefix...}/{store_id}/{resource...}` with each segment escaped.
pub(crate) fn store_url(
    base_url: &Url,
    prefix: &[&str],
    store_id: u64,
    resource: &[&str],
) -> Result<Url, EcwidError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| EcwidError::Config(format!("unusable base URL: {base_url}")))?
        .pop_if_empty()
        .extend(prefix)
        .push(&store_id.to_string())
        .extend(resource);
    Ok(url)
}

/// Parse a response from the Ecwid API.
pub(crate) async fn parse_response<T>(response: reqwest::Response) -> Result<T, EcwidError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(EcwidError::Api(ApiError::from_body(status.as_u16(), &body)));
    }

    serde_json::from_str(&body).map_err(|e| {
        EcwidError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
    })
}
