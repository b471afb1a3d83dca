//! Payload types for operations that take structured input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An email entry for an address book, with optional template variables.
///
/// # Example
///
/// ```rust
/// use sendpulse_api::BookEmail;
///
/// let entry = BookEmail::new("jane@example.com").with_variable("name", "Jane");
/// let json = serde_json::to_string(&entry).unwrap();
/// assert_eq!(json, r#"{"email":"jane@example.com","variables":{"name":"Jane"}}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEmail {
    /// The email address.
    pub email: String,
    /// Template variables attached to the address.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, String>,
}

impl BookEmail {
    /// Creates an entry with no variables.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            variables: BTreeMap::new(),
        }
    }

    /// Adds a template variable.
    #[must_use]
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }
}

/// Input for [`SendpulseApi::create_campaign`](crate::SendpulseApi::create_campaign).
///
/// `body` is the campaign HTML; it is base64-encoded before transmission.
/// `attachments` maps file names to their content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewCampaign {
    /// Sender display name.
    pub sender_name: String,
    /// Sender address. Must be an activated sender.
    pub sender_email: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub body: String,
    /// ID of the address book to send to.
    pub book_id: i64,
    /// Optional campaign name.
    pub name: String,
    /// Attachments keyed by file name.
    pub attachments: BTreeMap<String, String>,
}

impl NewCampaign {
    /// Creates a campaign with the required fields.
    #[must_use]
    pub fn new(
        sender_name: impl Into<String>,
        sender_email: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        book_id: i64,
    ) -> Self {
        Self {
            sender_name: sender_name.into(),
            sender_email: sender_email.into(),
            subject: subject.into(),
            body: body.into(),
            book_id,
            ..Self::default()
        }
    }

    /// Sets the campaign name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an attachment.
    #[must_use]
    pub fn attachment(mut self, file_name: impl Into<String>, content: impl Into<String>) -> Self {
        self.attachments.insert(file_name.into(), content.into());
        self
    }
}

/// A named mailbox.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl Recipient {
    /// Creates a mailbox.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A transactional email for [`SendpulseApi::smtp_send_mail`](crate::SendpulseApi::smtp_send_mail).
///
/// `html` is given in plain form; it is base64-encoded before transmission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmtpEmail {
    /// HTML body.
    pub html: String,
    /// Plain-text body.
    pub text: String,
    /// Subject line.
    pub subject: String,
    /// Sender.
    pub from: Recipient,
    /// Primary recipients.
    pub to: Vec<Recipient>,
    /// Blind-copy recipients.
    #[serde(default)]
    pub bcc: Vec<Recipient>,
}

/// An address to add to the SMTP unsubscribe list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsubscribeEmail {
    /// The email address.
    pub email: String,
    /// Why the address was unsubscribed.
    #[serde(default)]
    pub comment: String,
}

impl UnsubscribeEmail {
    /// Creates an entry.
    #[must_use]
    pub fn new(email: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            comment: comment.into(),
        }
    }
}

/// Filters for [`SendpulseApi::smtp_list_emails`](crate::SendpulseApi::smtp_list_emails).
///
/// All fields are always sent. Zero and empty values mean "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SmtpEmailQuery {
    /// Maximum number of entries.
    pub limit: u32,
    /// Number of entries to skip.
    pub offset: u32,
    /// Start of the date range, e.g. `2024-01-01 00:00:00`.
    pub from_date: String,
    /// End of the date range.
    pub to_date: String,
    /// Sender address.
    pub sender: String,
    /// Recipient address.
    pub recipient: String,
}
