//! The uniform result returned by every operation.

use serde::Serialize;

use crate::clients::errors::ErrorKind;

/// Success or failure of a single operation.
///
/// `is_error` is `true` whenever the status code is not 200 or a local
/// validation or transport failure occurred. Error envelopes carry a
/// `message` when one is known.
///
/// # Example
///
/// ```rust
/// use sendpulse_api::{ErrorKind, ResponseEnvelope};
///
/// let envelope = ResponseEnvelope::validation_error("Empty book name");
/// assert!(envelope.is_error);
/// assert_eq!(envelope.message.as_deref(), Some("Empty book name"));
/// assert_eq!(envelope.kind, Some(ErrorKind::Validation));
/// assert!(envelope.body.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    /// The decoded response body, if a response was read.
    pub body: Option<serde_json::Value>,
    /// The HTTP status code, if a response was received.
    pub status_code: Option<u16>,
    /// Whether the operation failed.
    pub is_error: bool,
    /// A human-readable error description.
    pub message: Option<String>,
    /// The class of failure, for error envelopes.
    #[serde(skip)]
    pub kind: Option<ErrorKind>,
}

impl ResponseEnvelope {
    /// Builds an envelope from a decoded response.
    ///
    /// Any status other than 200 is an error. The message is taken from the
    /// body's `message`, `error_description`, or `error` field when present.
    #[must_use]
    pub fn from_response(status_code: u16, body: serde_json::Value) -> Self {
        if status_code == 200 {
            return Self {
                body: Some(body),
                status_code: Some(status_code),
                is_error: false,
                message: None,
                kind: None,
            };
        }

        let message = Self::error_message(&body);
        Self {
            body: Some(body),
            status_code: Some(status_code),
            is_error: true,
            message,
            kind: Some(ErrorKind::HttpStatus),
        }
    }

    /// Builds an error envelope for a failed argument check.
    #[must_use]
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::error(ErrorKind::Validation, message, None)
    }

    /// Builds an error envelope with no body.
    #[must_use]
    pub fn error(kind: ErrorKind, message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self {
            body: None,
            status_code,
            is_error: true,
            message: Some(message.into()),
            kind: Some(kind),
        }
    }

    /// Builds an error envelope for a non-200 reply whose body is not JSON.
    ///
    /// The status is kept and the body is left empty.
    #[must_use]
    pub fn undecodable_status(status_code: u16) -> Self {
        Self::error(
            ErrorKind::HttpStatus,
            format!("Unexpected response body with status {status_code}"),
            Some(status_code),
        )
    }

    /// Returns `true` if the operation succeeded.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        !self.is_error
    }

    fn error_message(body: &serde_json::Value) -> Option<String> {
        ["message", "error_description", "error"]
            .iter()
            .find_map(|key| body.get(key))
            .map(|value| match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
    }
}
