//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use sendpulse_api::{BaseUrl, Secret, SendpulseApi, SendpulseConfig, UserId};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_USER_ID: &str = "test-id";
pub const TEST_SECRET: &str = "test-secret";

/// Builds a configuration pointing at `base_url` with a preset token.
pub fn config_for(base_url: &str, token: &str) -> SendpulseConfig {
    SendpulseConfig::builder()
        .user_id(UserId::new(TEST_USER_ID).unwrap())
        .secret(Secret::new(TEST_SECRET).unwrap())
        .base_url(BaseUrl::new(base_url).unwrap())
        .token(token)
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

/// Creates a client against the mock server without an initial exchange.
pub async fn api_with_token(server: &MockServer, token: &str) -> SendpulseApi {
    SendpulseApi::new(config_for(&server.uri(), token))
        .await
        .unwrap()
}

/// Mounts a token endpoint that hands out `token`.
pub async fn mount_token_endpoint(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": token,
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(server)
        .await;
}

/// Returns a base URL on which nothing is listening.
pub fn closed_port_url() -> String {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    format!("http://127.0.0.1:{port}")
}

/// Decodes an `application/x-www-form-urlencoded` string or query string.
pub fn parse_form(raw: &str) -> Vec<(String, String)> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

/// Looks up one decoded form field.
pub fn form_value(raw: &str, key: &str) -> Option<String> {
    parse_form(raw)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

fn decode(value: &str) -> String {
    urlencoding::decode(&value.replace('+', " "))
        .unwrap()
        .into_owned()
}

/// Returns every request the server received, excluding token exchanges.
pub async fn resource_requests(server: &MockServer) -> Vec<wiremock::Request> {
    server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|request| request.url.path() != "/oauth/access_token")
        .collect()
}
