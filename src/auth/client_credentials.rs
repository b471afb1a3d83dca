//! OAuth 2.0 Client Credentials Grant against the SendPulse auth endpoint.
//!
//! The exchange posts the API user ID and secret as a form-encoded body and
//! reads `access_token` from the JSON response. It is unauthenticated and
//! never retries: retry policy belongs to the dispatcher.
//!
//! # Example
//!
//! ```rust,ignore
//! use sendpulse_api::{exchange_client_credentials, ClientCredentials};
//!
//! let credentials = ClientCredentials::from_parts("id", "secret")?;
//! let client = reqwest::Client::new();
//! let token = exchange_client_credentials(&client, "https://api.sendpulse.com", &credentials).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::auth::{AuthError, ClientCredentials};

/// Grant type for client credentials.
pub const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// Path of the token endpoint, relative to the API base URL.
pub const AUTH_PATH: &str = "oauth/access_token";

/// Form body for the client credentials exchange.
#[derive(Debug, Serialize)]
struct ClientCredentialsRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

/// Token endpoint response. Other fields (`token_type`, `expires_in`) are ignored.
#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Exchanges client credentials for an access token.
///
/// # Arguments
///
/// * `client` - The HTTP client to send the request with
/// * `base_url` - The API base URL, e.g. `https://api.sendpulse.com`
/// * `credentials` - The user ID and secret to exchange
///
/// # Errors
///
/// - [`AuthError::Network`] if no response was received
/// - [`AuthError::Failed`] on a non-success status or an unparseable body
/// - [`AuthError::MissingAccessToken`] if the body has no usable `access_token`
pub async fn exchange_client_credentials(
    client: &reqwest::Client,
    base_url: &str,
    credentials: &ClientCredentials,
) -> Result<String, AuthError> {
    let token_url = format!("{base_url}/{AUTH_PATH}");

    let request_body = ClientCredentialsRequest {
        grant_type: CLIENT_CREDENTIALS_GRANT_TYPE,
        client_id: credentials.user_id().as_ref(),
        client_secret: credentials.secret().as_ref(),
    };

    let response = client
        .post(&token_url)
        .form(&request_body)
        .send()
        .await
        .map_err(|e| AuthError::Network {
            message: e.to_string(),
        })?;

    let status = response.status().as_u16();

    if !response.status().is_success() {
        let error_body = response.text().await.unwrap_or_default();
        return Err(AuthError::Failed {
            status,
            message: error_body,
        });
    }

    let token_response: AccessTokenResponse =
        response.json().await.map_err(|e| AuthError::Failed {
            status,
            message: format!("Failed to parse token response: {e}"),
        })?;

    match token_response.access_token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::MissingAccessToken),
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientCredentialsRequest<'_>>();
};
