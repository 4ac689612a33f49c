//! Error types for the Ecwid client library.

use std::collections::BTreeMap;
use std::time::Duration;

use thiserror::Error;

/// The main error type for all Ecwid client operations.
#[derive(Error, Debug)]
pub enum EcwidError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Ecwid API answered with a non-success status code
    #[error("Ecwid API error: {0}")]
    Api(ApiError),

    /// Invalid static configuration detected while building a client or gate
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The admission wait for the legacy API rate limits ran out of time
    #[error("Rate limit exceeded after waiting {waited:?} ({})", format_snapshot(.snapshot))]
    LimitExceeded {
        /// How long the caller waited before giving up
        waited: Duration,
        /// Per-tier utilization at the moment of the timeout (interval -> calls)
        snapshot: BTreeMap<Duration, u32>,
    },

    /// The rate gate could not be evaluated
    #[error("Internal rate limiting error: {0}")]
    InternalLimit(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing required credentials
    #[error("Missing credentials: store id and access token required")]
    MissingCredentials,
}

impl EcwidError {
    /// HTTP status code carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            EcwidError::Api(api) => Some(api.status),
            EcwidError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error means the requested entity does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this error came from the client-side rate limiter.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, EcwidError::LimitExceeded { .. })
            || matches!(self, EcwidError::Api(api) if api.is_rate_limit())
    }
}

fn format_snapshot(snapshot: &BTreeMap<Duration, u32>) -> String {
    snapshot
        .iter()
        .map(|(interval, count)| format!("{}s: {}", interval.as_secs(), count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// An error answer from the Ecwid API.
///
/// Ecwid signals failures with the HTTP status and, usually, a JSON body
/// such as `{"errorMessage": "...", "errorCode": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code
    pub status: u16,
    /// Error code reported by Ecwid, if any
    pub code: Option<String>,
    /// Error message (raw body when it could not be parsed)
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "HTTP {} {}: {}", self.status, code, self.message),
            None => write!(f, "HTTP {}: {}", self.status, self.message),
        }
    }
}

impl ApiError {
    /// Create a new API error from a status and message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            code: None,
            message: message.into(),
        }
    }

    /// Build an API error from a status code and a response body.
    pub fn from_body(status: u16, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct ErrorBody {
            error_message: Option<String>,
            error_code: Option<String>,
        }

        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) if parsed.error_message.is_some() || parsed.error_code.is_some() => Self {
                status,
                code: parsed.error_code,
                message: parsed.error_message.unwrap_or_default(),
            },
            _ => Self::new(status, body),
        }
    }

    /// Check if the server rejected the call for exceeding its quota.
    pub fn is_rate_limit(&self) -> bool {
        self.status == 429
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check if the token or key was rejected.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}
