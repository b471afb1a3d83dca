//! Mail delivery through the SendPulse SMTP relay.
//!
//! [`DeliveryMethod`] turns a framework-neutral [`MailMessage`] into an
//! [`SmtpEmail`] and sends it with
//! [`SendpulseApi::smtp_send_mail`]. Settings come from an explicit
//! [`DeliveryConfig`] handed to the constructor; there is no global state.
//!
//! # Example
//!
//! ```rust,ignore
//! use sendpulse_api::mailer::{DeliveryConfig, DeliveryMethod, MailMessage};
//! use sendpulse_api::{Secret, UserId};
//!
//! let config = DeliveryConfig::new(UserId::new("id")?, Secret::new("secret")?);
//! let delivery = DeliveryMethod::new(config);
//!
//! let message = MailMessage::new("shop@example.com", "Your order", "<p>Thanks!</p>")
//!     .to("jane@example.com");
//! let envelope = delivery.deliver(&message).await?;
//! ```

use std::time::Duration;

use crate::api::{Recipient, SendpulseApi, SmtpEmail};
use crate::clients::ResponseEnvelope;
use crate::config::{BaseUrl, Scheme, Secret, SendpulseConfig, UserId, DEFAULT_TIMEOUT};
use crate::error::ClientError;

/// Settings for [`DeliveryMethod`].
#[derive(Clone, Debug)]
pub struct DeliveryConfig {
    /// API user ID.
    pub api_client_id: UserId,
    /// API secret.
    pub api_client_secret: Secret,
    /// Transport scheme. Defaults to HTTPS.
    pub api_protocol: Scheme,
    /// Base URL override.
    pub base_url: Option<BaseUrl>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl DeliveryConfig {
    /// Creates settings for the default HTTPS endpoint.
    #[must_use]
    pub fn new(api_client_id: UserId, api_client_secret: Secret) -> Self {
        Self {
            api_client_id,
            api_client_secret,
            api_protocol: Scheme::default(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    fn client_config(&self) -> Result<SendpulseConfig, ClientError> {
        let mut builder = SendpulseConfig::builder()
            .user_id(self.api_client_id.clone())
            .secret(self.api_client_secret.clone())
            .scheme(self.api_protocol)
            .timeout(self.timeout);
        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url.clone());
        }
        Ok(builder.build()?)
    }
}

/// A message as produced by a mail framework.
///
/// Addresses are bare email strings. The sender's address doubles as its
/// display name unless [`from_name`](Self::from_name) is set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MailMessage {
    /// Sender address.
    pub from: String,
    /// Sender display name.
    pub from_name: Option<String>,
    /// Primary recipients.
    pub to: Vec<String>,
    /// Blind-copy recipients.
    pub bcc: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html_body: String,
    /// Plain-text body. Falls back to the HTML body when absent.
    pub text_body: Option<String>,
}

impl MailMessage {
    /// Creates a message with no recipients.
    #[must_use]
    pub fn new(
        from: impl Into<String>,
        subject: impl Into<String>,
        html_body: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            subject: subject.into(),
            html_body: html_body.into(),
            ..Self::default()
        }
    }

    /// Sets the sender display name.
    #[must_use]
    pub fn from_name(mut self, name: impl Into<String>) -> Self {
        self.from_name = Some(name.into());
        self
    }

    /// Adds a primary recipient.
    #[must_use]
    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.to.push(address.into());
        self
    }

    /// Adds a blind-copy recipient.
    #[must_use]
    pub fn bcc(mut self, address: impl Into<String>) -> Self {
        self.bcc.push(address.into());
        self
    }

    /// Sets the plain-text body.
    #[must_use]
    pub fn text_body(mut self, text: impl Into<String>) -> Self {
        self.text_body = Some(text.into());
        self
    }

    /// Converts the message into the relay's payload shape.
    #[must_use]
    pub fn to_smtp_email(&self) -> SmtpEmail {
        let mailbox = |address: &String| Recipient::new(address.as_str(), address.as_str());

        SmtpEmail {
            html: self.html_body.clone(),
            text: self
                .text_body
                .clone()
                .unwrap_or_else(|| self.html_body.clone()),
            subject: self.subject.clone(),
            from: Recipient::new(
                self.from_name.as_deref().unwrap_or(self.from.as_str()),
                self.from.as_str(),
            ),
            to: self.to.iter().map(mailbox).collect(),
            bcc: self.bcc.iter().map(mailbox).collect(),
        }
    }
}

/// Delivers [`MailMessage`]s through the SMTP relay.
#[derive(Clone, Debug)]
pub struct DeliveryMethod {
    settings: DeliveryConfig,
}

impl DeliveryMethod {
    /// Creates a delivery method with the given settings.
    #[must_use]
    pub const fn new(settings: DeliveryConfig) -> Self {
        Self { settings }
    }

    /// Returns the settings.
    #[must_use]
    pub const fn settings(&self) -> &DeliveryConfig {
        &self.settings
    }

    /// Sends a message.
    ///
    /// A fresh client is created per delivery, which exchanges credentials
    /// first. The relay's answer is returned as-is and logged.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] only if the client cannot be created, e.g.
    /// the credential exchange fails. Rejections by the relay are reported
    /// through the envelope.
    pub async fn deliver(&self, message: &MailMessage) -> Result<ResponseEnvelope, ClientError> {
        let api = SendpulseApi::new(self.settings.client_config()?).await?;

        let envelope = api.smtp_send_mail(&message.to_smtp_email()).await;
        tracing::info!(
            is_error = envelope.is_error,
            status = ?envelope.status_code,
            body = ?envelope.body,
            "[sendpulse_api.smtp_send_mail] result"
        );

        Ok(envelope)
    }
}
