//! Credentials for the Ecwid API.
//!
//! The v3 API authenticates with a store access token, the legacy orders
//! API with a per-store secure key. Both are kept in [`SecretString`]s and
//! redacted from `Debug` output.
//!
//! [`SecretString`]: secrecy::SecretString

mod credentials;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
