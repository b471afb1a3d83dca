//! Client credentials used for the token exchange.

use crate::config::{Secret, UserId};
use crate::error::ConfigError;

/// The user ID and secret issued by SendPulse.
///
/// Both halves are validated newtypes, so an instance always holds non-empty
/// values. The secret is masked in `Debug` output.
///
/// # Example
///
/// ```rust
/// use sendpulse_api::ClientCredentials;
///
/// let credentials = ClientCredentials::from_parts("id", "secret").unwrap();
/// assert_eq!(credentials.user_id().as_ref(), "id");
/// assert!(ClientCredentials::from_parts("", "secret").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientCredentials {
    user_id: UserId,
    secret: Secret,
}

impl ClientCredentials {
    /// Creates credentials from validated parts.
    #[must_use]
    pub const fn new(user_id: UserId, secret: Secret) -> Self {
        Self { user_id, secret }
    }

    /// Creates credentials from raw strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUserId`] or [`ConfigError::EmptySecret`]
    /// if either value is empty.
    pub fn from_parts(
        user_id: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(UserId::new(user_id)?, Secret::new(secret)?))
    }

    /// Returns the user ID.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the secret.
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }
}
