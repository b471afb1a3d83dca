//! HTTP layer for SendPulse API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: The authenticated request dispatcher
//! - [`RequestSpec`]: A request to be sent to the API
//! - [`ResponseEnvelope`]: The normalized outcome of a request
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`ErrorKind`]: Classification of error envelopes
//!
//! # Retry Behavior
//!
//! The dispatcher retries in exactly one situation: the first attempt of an
//! authenticated request answers 401. It then exchanges credentials for a new
//! token and sends the request once more. A second 401 is returned to the
//! caller. No other status is retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ErrorKind, TransportError};
pub use http_client::{HttpClient, AUTHORIZATION_HEADER, SDK_VERSION};
pub use http_request::{HttpMethod, RequestSpec, RequestSpecBuilder};
pub use http_response::ResponseEnvelope;
