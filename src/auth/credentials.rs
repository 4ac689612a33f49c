//! Credential management for the Ecwid API.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

use crate::error::EcwidError;

/// Store credentials: the store id plus the secrets each API generation needs.
#[derive(Clone)]
pub struct Credentials {
    /// The Ecwid store id
    pub store_id: u64,
    /// Access token for the v3 API
    token: Option<SecretString>,
    /// Secure key for the legacy orders API
    order_key: Option<SecretString>,
}

impl Credentials {
    /// Create credentials for the v3 API.
    pub fn new(store_id: u64, token: impl Into<String>) -> Self {
        Self {
            store_id,
            token: Some(SecretString::from(token.into())),
            order_key: None,
        }
    }

    /// Create credentials for the legacy orders API.
    pub fn legacy(store_id: u64, order_key: impl Into<String>) -> Self {
        Self {
            store_id,
            token: None,
            order_key: Some(SecretString::from(order_key.into())),
        }
    }

    /// Add a legacy orders key to these credentials.
    pub fn with_order_key(mut self, order_key: impl Into<String>) -> Self {
        self.order_key = Some(SecretString::from(order_key.into()));
        self
    }

    /// Get the v3 access token.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_token(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.expose_secret())
    }

    /// Get the legacy orders key.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_order_key(&self) -> Option<&str> {
        self.order_key.as_ref().map(|k| k.expose_secret())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("store_id", &self.store_id)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("order_key", &self.order_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager or environment variables.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a provider for the v3 API.
    pub fn new(store_id: u64, token: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(store_id, token),
        }
    }

    /// Create a provider for the legacy orders API.
    pub fn legacy(store_id: u64, order_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::legacy(store_id, order_key),
        }
    }
}

impl From<Credentials> for StaticCredentials {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// Reads `ECWID_STORE_ID` and at least one of `ECWID_TOKEN` (v3 API) and
/// `ECWID_ORDER_KEY` (legacy orders API).
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    pub fn from_env() -> Result<Self, EcwidError> {
        Self::from_env_vars("ECWID_STORE_ID", "ECWID_TOKEN", "ECWID_ORDER_KEY")
    }

    /// Create credentials from custom environment variable names.
    pub fn from_env_vars(
        store_var: &str,
        token_var: &str,
        order_key_var: &str,
    ) -> Result<Self, EcwidError> {
        let store_id = std::env::var(store_var)
            .map_err(|_| EcwidError::Config(format!("environment variable {store_var} not set")))?;
        let store_id = store_id.trim().parse::<u64>().map_err(|e| {
            EcwidError::Config(format!("environment variable {store_var} is not a store id: {e}"))
        })?;

        let token = std::env::var(token_var).ok().map(SecretString::from);
        let order_key = std::env::var(order_key_var).ok().map(SecretString::from);
        if token.is_none() && order_key.is_none() {
            return Err(EcwidError::Config(format!(
                "neither {token_var} nor {order_key_var} is set"
            )));
        }

        Ok(Self {
            credentials: Credentials {
                store_id,
                token,
                order_key,
            },
        })
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if the environment variables are missing or invalid.
    pub fn try_from_env() -> Option<Self> {
        Self::from_env().ok()
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new(1003, "secret_token_abc").with_order_key("order_key_xyz");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("1003"));
        assert!(!debug_str.contains("secret_token_abc"));
        assert!(!debug_str.contains("order_key_xyz"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new(42, "token");
        let creds = provider.get_credentials();
        assert_eq!(creds.store_id, 42);
        assert_eq!(creds.expose_token(), Some("token"));
        assert_eq!(creds.expose_order_key(), None);
    }

    #[test]
    fn test_legacy_credentials() {
        let provider = StaticCredentials::legacy(42, "key");
        let creds = provider.get_credentials();
        assert_eq!(creds.expose_token(), None);
        assert_eq!(creds.expose_order_key(), Some("key"));
    }

    #[test]
    fn test_env_credentials_missing_store() {
        let result = EnvCredentials::from_env_vars(
            "ECWID_TEST_UNSET_STORE",
            "ECWID_TEST_UNSET_TOKEN",
            "ECWID_TEST_UNSET_KEY",
        );
        assert!(matches!(result, Err(EcwidError::Config(_))));
    }
}
