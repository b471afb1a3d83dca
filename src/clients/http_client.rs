//! Authenticated request dispatcher for the SendPulse API.
//!
//! This module provides the [`HttpClient`] type. It sends one request at a
//! time, attaches the bearer token, recovers from one 401 per outward call by
//! exchanging credentials and retrying, and normalizes every outcome into a
//! [`ResponseEnvelope`].

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tokio::sync::Mutex;

use crate::auth::{exchange_client_credentials, AuthError, ClientCredentials, TokenStore};
use crate::clients::errors::{ErrorKind, TransportError};
use crate::clients::http_request::{HttpMethod, RequestSpec};
use crate::clients::http_response::ResponseEnvelope;
use crate::config::SendpulseConfig;
use crate::error::ClientError;
use crate::serialization::{build_query_string, normalize_path, unserialize};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the header carrying the raw token.
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// Progress of one outward call.
///
/// A call starts in `Initial`. A 401 on the first attempt moves it to
/// `AwaitingRefresh`, a successful exchange to `Retried`, and every other
/// outcome to `Done`. `Retried` never leads back to `AwaitingRefresh`.
#[derive(Debug)]
enum DispatchState {
    Initial,
    AwaitingRefresh,
    Retried,
    Done(ResponseEnvelope),
}

/// Raw outcome of a single HTTP exchange.
#[derive(Debug)]
struct RawResponse {
    code: u16,
    text: String,
}

/// HTTP client that dispatches [`RequestSpec`]s to the SendPulse API.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. The token store sits behind an async mutex
/// that is held for the whole dispatch-refresh-retry sequence, so concurrent
/// calls on one client are serialized and each call chain refreshes at most once.
///
/// # Example
///
/// ```rust,ignore
/// use sendpulse_api::clients::{HttpClient, HttpMethod, RequestSpec};
///
/// let client = HttpClient::new(&config)?;
/// client.authenticate().await?;
///
/// let spec = RequestSpec::builder(HttpMethod::Get, "balance").build();
/// let envelope = client.dispatch(spec).await;
/// if !envelope.is_error {
///     println!("{:?}", envelope.body);
/// }
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.sendpulse.com`).
    base_url: String,
    /// Credentials used to refresh the token.
    credentials: ClientCredentials,
    /// Headers the reqwest client sends with every request.
    default_headers: HashMap<String, String>,
    /// Current token and refresh guard.
    store: Mutex<TokenStore>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new client from the given configuration.
    ///
    /// No request is made. The store starts with the configured token, which
    /// may be empty; call [`authenticate`](Self::authenticate) to obtain one.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::HttpClient`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &SendpulseConfig) -> Result<Self, ClientError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}SendPulse API Library v{SDK_VERSION} | Rust {rust_version}");

        // Shared by resource requests and the token exchange.
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .user_agent(user_agent.as_str())
            .default_headers(headers)
            .build()?;

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Ok(Self {
            client,
            base_url: config.base_url(),
            credentials: config.credentials().clone(),
            default_headers,
            store: Mutex::new(TokenStore::new(config.token())),
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the current token.
    pub async fn token(&self) -> String {
        self.store.lock().await.get_token().to_string()
    }

    /// Returns the current refresh guard value.
    pub async fn retry_guard(&self) -> u32 {
        self.store.lock().await.retry_guard()
    }

    /// Exchanges credentials for a fresh token and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the exchange fails. The stored token is left
    /// untouched in that case.
    pub async fn authenticate(&self) -> Result<(), AuthError> {
        let mut store = self.store.lock().await;
        let token =
            exchange_client_credentials(&self.client, &self.base_url, &self.credentials).await?;
        store.set_token(token);
        store.reset_guard();
        tracing::debug!("Obtained SendPulse access token");
        Ok(())
    }

    /// Sends a request and returns its normalized outcome.
    ///
    /// This method handles:
    /// - Attaching the token when `requires_auth` is set
    /// - Placing parameters in the query string (GET/DELETE) or a form body (POST/PUT)
    /// - One credential exchange and one retry when the first attempt answers 401
    /// - Converting transport failures into error envelopes
    ///
    /// It never fails and never panics on remote errors; inspect
    /// [`ResponseEnvelope::is_error`].
    pub async fn dispatch(&self, spec: RequestSpec) -> ResponseEnvelope {
        let mut store = self.store.lock().await;
        let mut state = DispatchState::Initial;

        let envelope = loop {
            state = match state {
                DispatchState::Initial => match self.send(&spec, store.get_token()).await {
                    Ok(raw)
                        if raw.code == 401
                            && spec.requires_auth
                            && store.begin_refresh_attempt() =>
                    {
                        tracing::info!(path = %spec.path, "Received 401, refreshing access token");
                        DispatchState::AwaitingRefresh
                    }
                    outcome => DispatchState::Done(Self::normalize(&spec, outcome)),
                },
                DispatchState::AwaitingRefresh => {
                    match exchange_client_credentials(
                        &self.client,
                        &self.base_url,
                        &self.credentials,
                    )
                    .await
                    {
                        Ok(token) => {
                            store.set_token(token);
                            store.reset_guard();
                            DispatchState::Retried
                        }
                        Err(e) => {
                            tracing::warn!(path = %spec.path, error = %e, "Access token refresh failed");
                            DispatchState::Done(ResponseEnvelope::error(
                                ErrorKind::Auth,
                                e.to_string(),
                                Some(401),
                            ))
                        }
                    }
                }
                DispatchState::Retried => match self.send(&spec, store.get_token()).await {
                    Ok(raw) if raw.code == 401 => {
                        tracing::warn!(path = %spec.path, "Request still unauthorized after token refresh");
                        let mut envelope = Self::normalize(&spec, Ok(raw));
                        envelope.kind = Some(ErrorKind::Auth);
                        DispatchState::Done(envelope)
                    }
                    outcome => DispatchState::Done(Self::normalize(&spec, outcome)),
                },
                DispatchState::Done(envelope) => break envelope,
            };
        };

        // The guard is scoped to one call chain.
        store.reset_guard();
        envelope
    }

    /// Issues one HTTP request without any retry.
    async fn send(&self, spec: &RequestSpec, token: &str) -> Result<RawResponse, TransportError> {
        let path = normalize_path(&spec.path);
        let url = if spec.method.sends_body() {
            format!("{}/{path}", self.base_url)
        } else {
            format!("{}/{path}{}", self.base_url, build_query_string(&spec.params))
        };

        tracing::debug!(method = %spec.method, path = %path, "Sending SendPulse API request");

        let mut req_builder = match spec.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        if spec.requires_auth {
            req_builder = req_builder.header(AUTHORIZATION_HEADER, token);
        }

        if spec.method.sends_body() {
            req_builder = req_builder.form(&spec.params);
        }

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let text = res.text().await?;

        Ok(RawResponse { code, text })
    }

    /// Converts the outcome of a request into an envelope.
    ///
    /// A non-200 reply keeps its status even when the body is not JSON, so
    /// only a failed send or an undecodable 200 counts as a transport failure.
    fn normalize(spec: &RequestSpec, outcome: Result<RawResponse, TransportError>) -> ResponseEnvelope {
        let raw = match outcome {
            Ok(raw) => raw,
            Err(e) => return Self::transport_failure(spec, &e),
        };

        match unserialize(&raw.text) {
            Ok(body) => {
                let envelope = ResponseEnvelope::from_response(raw.code, body);
                if envelope.is_error {
                    tracing::warn!(
                        method = %spec.method,
                        path = %spec.path,
                        status = raw.code,
                        "SendPulse API returned an error status"
                    );
                }
                envelope
            }
            Err(e) if raw.code != 200 => {
                tracing::warn!(
                    method = %spec.method,
                    path = %spec.path,
                    status = raw.code,
                    error = %e,
                    "SendPulse API returned an error status with an undecodable body"
                );
                ResponseEnvelope::undecodable_status(raw.code)
            }
            Err(e) => Self::transport_failure(spec, &TransportError::from(e)),
        }
    }

    fn transport_failure(spec: &RequestSpec, error: &TransportError) -> ResponseEnvelope {
        let message = if error.is_timeout() {
            format!("Request timed out: {error}")
        } else {
            error.to_string()
        };
        tracing::warn!(
            method = %spec.method,
            path = %spec.path,
            error = %message,
            "SendPulse API request failed"
        );
        ResponseEnvelope::error(ErrorKind::Transport, message, None)
    }
}
