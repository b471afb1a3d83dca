//! Bearer token storage with a refresh guard.

/// Holds the current bearer token and the refresh guard counter.
///
/// The guard bounds re-authentication to one attempt per outward request:
/// [`begin_refresh_attempt`](Self::begin_refresh_attempt) only succeeds while
/// the guard is 0, and the guard stays raised until
/// [`reset_guard`](Self::reset_guard) is called.
///
/// The dispatcher keeps the store behind a mutex for the duration of a call
/// chain, so the store itself needs no synchronization.
///
/// # Example
///
/// ```rust
/// use sendpulse_api::TokenStore;
///
/// let mut store = TokenStore::new("initial");
/// assert!(store.begin_refresh_attempt());
/// assert!(!store.begin_refresh_attempt());
///
/// store.set_token("fresh");
/// store.reset_guard();
/// assert_eq!(store.get_token(), "fresh");
/// assert_eq!(store.retry_guard(), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStore {
    token: String,
    retry_guard: u32,
}

impl TokenStore {
    /// Creates a store holding `token` with the guard lowered.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            retry_guard: 0,
        }
    }

    /// Returns the current token. Empty if none has been obtained yet.
    #[must_use]
    pub fn get_token(&self) -> &str {
        &self.token
    }

    /// Replaces the current token.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }

    /// Forgets the current token.
    pub fn clear(&mut self) {
        self.token.clear();
    }

    /// Returns `true` if no token is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }

    /// Raises the guard if no refresh is in flight.
    ///
    /// Returns `true` and increments the guard only when it is 0.
    pub fn begin_refresh_attempt(&mut self) -> bool {
        if self.retry_guard != 0 {
            return false;
        }
        self.retry_guard += 1;
        true
    }

    /// Lowers the guard.
    pub fn reset_guard(&mut self) {
        self.retry_guard = 0;
    }

    /// Returns the current guard value.
    #[must_use]
    pub const fn retry_guard(&self) -> u32 {
        self.retry_guard
    }
}
