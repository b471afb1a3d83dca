//! Error classification for dispatched requests.
//!
//! Requests never fail with an `Err`: every outcome is reported through a
//! [`ResponseEnvelope`](crate::clients::ResponseEnvelope). The types here
//! describe what went wrong when the envelope is an error.
//!
//! - [`ErrorKind`]: Which class of failure produced an error envelope
//! - [`TransportError`]: Connection, timeout, or body decoding failures

use std::fmt;

use thiserror::Error;

/// Classification of an error envelope.
///
/// Callers are never required to inspect this: `is_error` and `message` carry
/// the same outcome. It is provided for callers that want to react to, say,
/// transport failures differently from API rejections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required argument was missing, empty, or non-positive. No request was sent.
    Validation,
    /// Re-authentication after a 401 failed, or a 401 persisted after the retry.
    Auth,
    /// The API answered with a status other than 200.
    HttpStatus,
    /// The request could not be completed or the response could not be read.
    Transport,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Auth => write!(f, "auth"),
            Self::HttpStatus => write!(f, "http_status"),
            Self::Transport => write!(f, "transport"),
        }
    }
}

/// A failure to complete a request or read its response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network, connection, or timeout error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl TransportError {
    /// Returns `true` if the failure was a request timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ErrorKind>();
    assert_send_sync::<TransportError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::Validation.to_string(), "validation");
        assert_eq!(ErrorKind::Auth.to_string(), "auth");
        assert_eq!(ErrorKind::HttpStatus.to_string(), "http_status");
        assert_eq!(ErrorKind::Transport.to_string(), "transport");
    }

    #[test]
    fn test_malformed_body_message() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = TransportError::from(parse_error);
        assert!(error.to_string().starts_with("Malformed response body"));
        assert!(!error.is_timeout());
    }
}
