//! Configuration types for the SendPulse API client.
//!
//! # Overview
//!
//! - [`SendpulseConfig`]: All settings needed to build a client
//! - [`SendpulseConfigBuilder`]: A builder for constructing [`SendpulseConfig`] instances
//! - [`UserId`]: A validated API user ID
//! - [`Secret`]: A validated API secret with masked debug output
//! - [`Scheme`]: Plain HTTP or TLS
//! - [`BaseUrl`]: An optional override of the API host
//!
//! # Example
//!
//! ```rust
//! use sendpulse_api::{SendpulseConfig, UserId, Secret, Scheme};
//!
//! let config = SendpulseConfig::builder()
//!     .user_id(UserId::new("my-id").unwrap())
//!     .secret(Secret::new("my-secret").unwrap())
//!     .scheme(Scheme::Https)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://api.sendpulse.com");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, Scheme, Secret, UserId};

use std::time::Duration;

use crate::auth::ClientCredentials;
use crate::error::ConfigError;

/// Host of the SendPulse REST API.
pub const API_HOST: &str = "api.sendpulse.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the SendPulse API client.
///
/// # Thread Safety
///
/// `SendpulseConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct SendpulseConfig {
    credentials: ClientCredentials,
    scheme: Scheme,
    token: String,
    base_url: Option<BaseUrl>,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl SendpulseConfig {
    /// Creates a new builder for constructing a `SendpulseConfig`.
    #[must_use]
    pub fn builder() -> SendpulseConfigBuilder {
        SendpulseConfigBuilder::new()
    }

    /// Returns the client credentials.
    #[must_use]
    pub const fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }

    /// Returns the transport scheme.
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Returns the initial token. Empty means an exchange happens at construction.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the base URL requests are sent to.
    ///
    /// This is the configured override if present, otherwise
    /// `{scheme}://api.sendpulse.com`.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.base_url.as_ref().map_or_else(
            || format!("{}://{API_HOST}", self.scheme),
            |url| url.as_ref().to_string(),
        )
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify SendpulseConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SendpulseConfig>();
};

/// Builder for constructing [`SendpulseConfig`] instances.
///
/// Required fields are `user_id` and `secret`.
///
/// # Defaults
///
/// - `scheme`: [`Scheme::Https`]
/// - `token`: empty
/// - `base_url`: `None`
/// - `timeout`: 30 seconds
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct SendpulseConfigBuilder {
    user_id: Option<UserId>,
    secret: Option<Secret>,
    scheme: Option<Scheme>,
    token: Option<String>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl SendpulseConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API user ID (required).
    #[must_use]
    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Sets the API secret (required).
    #[must_use]
    pub fn secret(mut self, secret: Secret) -> Self {
        self.secret = Some(secret);
        self
    }

    /// Sets the transport scheme.
    #[must_use]
    pub const fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Sets a previously obtained token, skipping the eager exchange.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Overrides the base URL. When set, [`scheme`](Self::scheme) is ignored.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`SendpulseConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `user_id` or `secret`
    /// is not set.
    pub fn build(self) -> Result<SendpulseConfig, ConfigError> {
        let user_id = self
            .user_id
            .ok_or(ConfigError::MissingRequiredField { field: "user_id" })?;
        let secret = self
            .secret
            .ok_or(ConfigError::MissingRequiredField { field: "secret" })?;

        Ok(SendpulseConfig {
            credentials: ClientCredentials::new(user_id, secret),
            scheme: self.scheme.unwrap_or_default(),
            token: self.token.unwrap_or_default(),
            base_url: self.base_url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
