//! High-level SendPulse operations.
//!
//! [`SendpulseApi`] exposes one async method per REST operation. Every method
//! checks its required arguments first and returns a validation envelope
//! without touching the network when one is missing. Otherwise it builds a
//! [`RequestSpec`] and hands it to the [`HttpClient`].
//!
//! Operations are grouped by resource:
//!
//! - Address books and their emails (`address_books`)
//! - Campaigns (`campaigns`)
//! - Senders (`senders`)
//! - Emails across all books (`emails`)
//! - Blacklist (`blacklist`)
//! - Balance (`balance`)
//! - SMTP relay (`smtp`)

mod address_books;
mod balance;
mod blacklist;
mod campaigns;
mod emails;
mod senders;
mod smtp;
mod types;

pub use types::{BookEmail, NewCampaign, Recipient, SmtpEmail, SmtpEmailQuery, UnsubscribeEmail};

use serde::Serialize;

use crate::clients::{HttpClient, HttpMethod, RequestSpec, ResponseEnvelope};
use crate::config::{Secret, SendpulseConfig, UserId};
use crate::error::ClientError;
use crate::serialization::serialize;

/// Client for the SendPulse REST API.
///
/// # Example
///
/// ```rust,ignore
/// use sendpulse_api::SendpulseApi;
///
/// let api = SendpulseApi::connect("user-id", "secret").await?;
///
/// let balance = api.get_balance(None).await;
/// if balance.is_error {
///     eprintln!("balance failed: {:?}", balance.message);
/// }
/// ```
#[derive(Debug)]
pub struct SendpulseApi {
    http_client: HttpClient,
}

// Verify SendpulseApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SendpulseApi>();
};

impl SendpulseApi {
    /// Creates a client from a configuration.
    ///
    /// When the configuration carries no token, credentials are exchanged
    /// immediately.
    ///
    /// # Errors
    ///
    /// - [`ClientError::HttpClient`] if the HTTP stack cannot be initialized
    /// - [`ClientError::Auth`] if the eager credential exchange fails
    pub async fn new(config: SendpulseConfig) -> Result<Self, ClientError> {
        let http_client = HttpClient::new(&config)?;

        if config.token().is_empty() {
            http_client.authenticate().await?;
        }

        Ok(Self { http_client })
    }

    /// Creates a client for the default HTTPS endpoint from raw credentials.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Config`] if either value is empty
    /// - [`ClientError::Auth`] if the credential exchange fails
    pub async fn connect(
        user_id: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let config = SendpulseConfig::builder()
            .user_id(UserId::new(user_id)?)
            .secret(Secret::new(secret)?)
            .build()?;
        Self::new(config).await
    }

    /// Returns the current bearer token.
    pub async fn token(&self) -> String {
        self.http_client.token().await
    }

    /// Returns the underlying dispatcher.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    async fn request(&self, spec: RequestSpec) -> ResponseEnvelope {
        self.http_client.dispatch(spec).await
    }

    async fn get(&self, path: impl Into<String>) -> ResponseEnvelope {
        self.request(RequestSpec::builder(HttpMethod::Get, path).build())
            .await
    }
}

/// Encodes a structured parameter as JSON, or explains why it cannot be sent.
fn json_param<T: Serialize + ?Sized>(value: &T) -> Result<String, ResponseEnvelope> {
    serialize(value).map_err(|e| {
        ResponseEnvelope::validation_error(format!("Failed to serialize parameter: {e}"))
    })
}

const fn is_positive(id: i64) -> bool {
    id > 0
}
