//! # SendPulse API Rust Client
//!
//! An async client for the SendPulse REST API: address books, campaigns,
//! senders, blacklist, balance, and the SMTP relay.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`SendpulseConfig`] and [`SendpulseConfigBuilder`]
//! - Validated newtypes for API credentials
//! - Client-credentials authentication with transparent token refresh on 401
//! - A uniform [`ResponseEnvelope`] for every operation
//! - A mail delivery adapter in [`mailer`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sendpulse_api::{SendpulseApi, SendpulseConfig, UserId, Secret};
//!
//! let config = SendpulseConfig::builder()
//!     .user_id(UserId::new("your-id").unwrap())
//!     .secret(Secret::new("your-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! // Exchanges credentials for a token before returning
//! let api = SendpulseApi::new(config).await?;
//!
//! let envelope = api.create_address_book("Customers").await;
//! if envelope.is_error {
//!     eprintln!("{:?}", envelope.message);
//! }
//! ```
//!
//! ## Sending Mail
//!
//! ```rust,ignore
//! use sendpulse_api::{Recipient, SmtpEmail};
//!
//! let email = SmtpEmail {
//!     html: "<h1>Hello</h1>".to_string(),
//!     text: "Hello".to_string(),
//!     subject: "Greetings".to_string(),
//!     from: Recipient::new("Shop", "shop@example.com"),
//!     to: vec![Recipient::new("Jane", "jane@example.com")],
//!     bcc: vec![],
//! };
//!
//! let envelope = api.smtp_send_mail(&email).await;
//! ```
//!
//! ## Error Handling
//!
//! Only construction can fail with an `Err` ([`ClientError`]). Every
//! operation returns a [`ResponseEnvelope`]: check `is_error` and `message`.
//! Validation failures are reported without any network request, and
//! transport failures are logged with `tracing` and reported in the envelope.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod mailer;
pub mod serialization;

// Re-export public types at crate root for convenience
pub use api::{
    BookEmail, NewCampaign, Recipient, SendpulseApi, SmtpEmail, SmtpEmailQuery, UnsubscribeEmail,
};
pub use auth::{exchange_client_credentials, AuthError, ClientCredentials, TokenStore};
pub use config::{BaseUrl, Scheme, Secret, SendpulseConfig, SendpulseConfigBuilder, UserId};
pub use error::{ClientError, ConfigError};

// Re-export HTTP client types
pub use clients::{ErrorKind, HttpClient, HttpMethod, RequestSpec, ResponseEnvelope};
