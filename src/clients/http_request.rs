//! Request description types.
//!
//! This module provides [`RequestSpec`] and its builder. A spec names a path,
//! an [`HttpMethod`], ordered string parameters, and whether the bearer token
//! must be attached.

use std::fmt;

/// HTTP methods used by the SendPulse API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if parameters for this method go in the request body.
    ///
    /// POST and PUT send a form-encoded body. GET and DELETE send a query string.
    #[must_use]
    pub const fn sends_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single logical request to the API.
///
/// Use [`RequestSpec::builder`] to construct one.
///
/// # Example
///
/// ```rust
/// use sendpulse_api::clients::{HttpMethod, RequestSpec};
///
/// let spec = RequestSpec::builder(HttpMethod::Get, "addressbooks")
///     .param("limit", "10")
///     .param("offset", "20")
///     .build();
///
/// assert!(spec.requires_auth);
/// assert_eq!(spec.params[0], ("limit".to_string(), "10".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestSpec {
    /// The path, relative to the API base URL.
    pub path: String,
    /// The HTTP method.
    pub method: HttpMethod,
    /// Parameters in insertion order.
    pub params: Vec<(String, String)>,
    /// Whether the current token is attached as the `authorization` header.
    pub requires_auth: bool,
}

impl RequestSpec {
    /// Creates a new builder for the given method and path.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> RequestSpecBuilder {
        RequestSpecBuilder::new(method, path)
    }
}

/// Builder for [`RequestSpec`] instances.
#[derive(Debug)]
pub struct RequestSpecBuilder {
    path: String,
    method: HttpMethod,
    params: Vec<(String, String)>,
    requires_auth: bool,
}

impl RequestSpecBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            params: Vec::new(),
            requires_auth: true,
        }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Appends a parameter if `value` is `Some`.
    #[must_use]
    pub fn param_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value.to_string()),
            None => self,
        }
    }

    /// Sets whether the token is attached. Defaults to `true`.
    #[must_use]
    pub const fn requires_auth(mut self, requires_auth: bool) -> Self {
        self.requires_auth = requires_auth;
        self
    }

    /// Builds the [`RequestSpec`].
    #[must_use]
    pub fn build(self) -> RequestSpec {
        RequestSpec {
            path: self.path,
            method: self.method,
            params: self.params,
            requires_auth: self.requires_auth,
        }
    }
}
