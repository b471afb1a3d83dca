//! Authentication types for the SendPulse API client.
//!
//! # Overview
//!
//! - [`ClientCredentials`]: The immutable user ID / secret pair
//! - [`TokenStore`]: The current bearer token and the refresh guard
//! - [`exchange_client_credentials`]: Trades credentials for a fresh token
//! - [`AuthError`]: Failures of the credential exchange
//!
//! SendPulse uses the OAuth client-credentials grant. Tokens are short-lived:
//! when a resource endpoint answers 401 the dispatcher performs one exchange
//! and retries the request once.

mod client_credentials;
mod credentials;
mod error;
mod token_store;

pub use client_credentials::{exchange_client_credentials, AUTH_PATH, CLIENT_CREDENTIALS_GRANT_TYPE};
pub use credentials::ClientCredentials;
pub use error::AuthError;
pub use token_store::TokenStore;
