//! Error types for the SendPulse API client.
//!
//! This module contains the configuration errors raised while validating
//! client settings, and the construction error returned by
//! [`SendpulseApi::new`](crate::SendpulseApi::new).
//!
//! # Error Handling
//!
//! Configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Construction of a client is the only fallible step
//! that surfaces as an `Err`: once a client exists, every operation reports
//! failures through a [`ResponseEnvelope`](crate::ResponseEnvelope).
//!
//! # Example
//!
//! ```rust
//! use sendpulse_api::{ConfigError, UserId};
//!
//! let result = UserId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyUserId)));
//! ```

use crate::auth::AuthError;
use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API user ID cannot be empty.
    #[error("API user ID cannot be empty. Please provide a valid SendPulse API ID.")]
    EmptyUserId,

    /// The API secret cannot be empty.
    #[error("API secret cannot be empty. Please provide a valid SendPulse API secret.")]
    EmptySecret,

    /// The URL scheme is not supported.
    #[error("Invalid scheme '{scheme}'. Expected 'http' or 'https'.")]
    InvalidScheme {
        /// The scheme that was provided.
        scheme: String,
    },

    /// The base URL override is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.sendpulse.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// Errors that can occur while constructing a client.
///
/// Only client construction is fatal: invalid credentials, a failed eager
/// token exchange, or an HTTP stack that cannot be initialized.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The initial credential exchange failed.
    #[error("Could not connect to API, check your ID and SECRET: {0}")]
    Auth(#[from] AuthError),

    /// The underlying HTTP client could not be built.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConfigError>();
    assert_send_sync::<ClientError>();
};
