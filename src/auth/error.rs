//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during the client-credentials exchange.
///
/// # Example
///
/// ```rust
/// use sendpulse_api::AuthError;
///
/// let error = AuthError::Failed {
///     status: 400,
///     message: "invalid_client".to_string(),
/// };
/// assert!(error.to_string().contains("400"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The exchange request never produced a response.
    #[error("Token request failed: {message}")]
    Network {
        /// Description of the transport failure.
        message: String,
    },

    /// The auth endpoint answered with a non-success status or an unreadable body.
    #[error("Token request failed with status {status}: {message}")]
    Failed {
        /// The HTTP status code returned.
        status: u16,
        /// The response body or parse error.
        message: String,
    },

    /// The auth endpoint answered successfully but without an `access_token`.
    #[error("Token response did not contain an access_token")]
    MissingAccessToken,
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_includes_status_and_message() {
        let error = AuthError::Failed {
            status: 401,
            message: "Invalid client credentials".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("Invalid client credentials"));
    }

    #[test]
    fn test_missing_access_token_message() {
        assert!(AuthError::MissingAccessToken
            .to_string()
            .contains("access_token"));
    }

    #[test]
    fn test_auth_error_implements_std_error() {
        let error: &dyn std::error::Error = &AuthError::Network {
            message: "connection refused".to_string(),
        };
        assert!(error.to_string().contains("connection refused"));
    }
}
