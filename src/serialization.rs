//! Wire-format helpers.
//!
//! Request parameters travel as strings. List-valued and structured fields are
//! JSON-encoded into a single parameter, free-text fields such as campaign HTML
//! are base64-encoded, and GET/DELETE parameters are rendered as a query string.
//! Caller-supplied values interpolated into a path go through
//! [`encode_path_segment`].
//! Everything here is pure and stateless.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

/// Encodes a value as compact JSON.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as JSON, e.g. a map
/// with non-string keys.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Decodes a JSON document. An empty or whitespace-only input decodes to `null`.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON.
pub fn unserialize(data: &str) -> Result<serde_json::Value, serde_json::Error> {
    if data.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(data)
}

/// Base64-encodes free text with the standard alphabet and padding.
#[must_use]
pub fn encode_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Renders parameters as a query string.
///
/// The first pair is prefixed with `?`, later pairs with `&`. Keys and values
/// are percent-encoded. No parameters yields an empty string.
///
/// # Example
///
/// ```rust
/// use sendpulse_api::serialization::build_query_string;
///
/// let params = vec![
///     ("limit".to_string(), "10".to_string()),
///     ("sender".to_string(), "a@b.com".to_string()),
/// ];
/// assert_eq!(build_query_string(&params), "?limit=10&sender=a%40b.com");
/// ```
#[must_use]
pub fn build_query_string(params: &[(String, String)]) -> String {
    let mut query = String::new();
    for (key, value) in params {
        query.push(if query.is_empty() { '?' } else { '&' });
        query.push_str(&urlencoding::encode(key));
        query.push('=');
        query.push_str(&urlencoding::encode(value));
    }
    query
}

/// Percent-encodes a value for use as one path segment.
///
/// Everything outside the unreserved set is escaped, so `/`, `?` and `#` in
/// an email address or message id cannot change which resource is addressed.
///
/// # Example
///
/// ```rust
/// use sendpulse_api::serialization::encode_path_segment;
///
/// assert_eq!(encode_path_segment("joe?x@example.com"), "joe%3Fx%40example.com");
/// ```
#[must_use]
pub fn encode_path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Strips leading slashes so a path can be appended to the base URL.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    path.trim_start_matches('/')
}
