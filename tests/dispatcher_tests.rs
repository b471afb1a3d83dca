//! Integration tests for the request dispatcher.
//!
//! These tests verify token refresh on 401, parameter placement per HTTP
//! method, and the conversion of transport failures into error envelopes.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{
    api_with_token, closed_port_url, config_for, form_value, parse_form, resource_requests,
};
use sendpulse_api::clients::{HttpClient, HttpMethod, RequestSpec};
use sendpulse_api::{BaseUrl, BookEmail, ErrorKind, Secret, SendpulseApi, SendpulseConfig, UserId};
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

// ============================================================================
// Token refresh
// ============================================================================

#[tokio::test]
async fn test_401_triggers_one_exchange_and_one_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .and(header("authorization", "stale-token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "invalid_token"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "fresh-token"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/balance"))
        .and(header("authorization", "fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "currency": "USD",
            "balance_currency": 12.5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_with_token(&server, "stale-token").await;
    let envelope = api.get_balance(None).await;

    assert!(!envelope.is_error);
    assert_eq!(envelope.status_code, Some(200));
    assert_eq!(envelope.body.unwrap()["currency"], "USD");
    assert_eq!(api.token().await, "fresh-token");
    assert_eq!(api.http_client().retry_guard().await, 0);
}

#[tokio::test]
async fn test_second_401_is_returned_without_another_exchange() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "invalid_token",
            "message": "Token is not valid"
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "fresh-token"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api_with_token(&server, "stale-token").await;
    let envelope = api.get_balance(None).await;

    assert!(envelope.is_error);
    assert_eq!(envelope.status_code, Some(401));
    assert_eq!(envelope.kind, Some(ErrorKind::Auth));
    assert_eq!(envelope.message.as_deref(), Some("Token is not valid"));
}

#[tokio::test]
async fn test_guard_reset_allows_refresh_on_later_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .and(header("authorization", "token-0"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    // token-1 works once, then expires
    Mock::given(method("GET"))
        .and(path("/balance"))
        .and(header("authorization", "token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"call": 1})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/balance"))
        .and(header("authorization", "token-1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/balance"))
        .and(header("authorization", "token-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"call": 2})))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "token-1"})),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "token-2"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api_with_token(&server, "token-0").await;

    let first = api.get_balance(None).await;
    assert!(!first.is_error);
    assert_eq!(first.body.unwrap()["call"], 1);

    let second = api.get_balance(None).await;
    assert!(!second.is_error);
    assert_eq!(second.body.unwrap()["call"], 2);
    assert_eq!(api.token().await, "token-2");
}

#[tokio::test]
async fn test_failed_exchange_returns_auth_error_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/senders"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_client"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_with_token(&server, "stale-token").await;
    let envelope = api.list_senders().await;

    assert!(envelope.is_error);
    assert!(envelope.body.is_none());
    assert_eq!(envelope.kind, Some(ErrorKind::Auth));
    assert!(envelope.message.unwrap().contains("400"));
    assert_eq!(api.token().await, "stale-token");
    assert_eq!(api.http_client().retry_guard().await, 0);
}

#[tokio::test]
async fn test_unauthenticated_request_is_not_refreshed() {
    let server = MockServer::start().await;

    Mock::given(path("/public"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/public"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server.uri(), "token")).unwrap();
    let spec = RequestSpec::builder(HttpMethod::Get, "public")
        .requires_auth(false)
        .build();

    let envelope = client.dispatch(spec).await;

    assert!(envelope.is_error);
    assert_eq!(envelope.status_code, Some(401));
    assert_eq!(envelope.kind, Some(ErrorKind::HttpStatus));
}

#[tokio::test]
async fn test_concurrent_calls_share_a_single_refresh() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .and(header("authorization", "stale-token"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/balance"))
        .and(header("authorization", "fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "fresh-token"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = Arc::new(api_with_token(&server, "stale-token").await);

    let (first, second) = tokio::join!(api.get_balance(None), api.get_balance(None));

    assert!(!first.is_error);
    assert!(!second.is_error);
}

// ============================================================================
// Parameter placement
// ============================================================================

#[tokio::test]
async fn test_get_params_go_in_query_string_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/addressbooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let api = api_with_token(&server, "token").await;
    let envelope = api.list_address_books(Some(10), Some(20)).await;
    assert!(!envelope.is_error);

    let requests = resource_requests(&server).await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("limit=10&offset=20"));
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_delete_params_go_in_query_string_only() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/senders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"result": true})))
        .mount(&server)
        .await;

    let api = api_with_token(&server, "token").await;
    let envelope = api.remove_sender("sender@example.com").await;
    assert!(!envelope.is_error);

    let requests = resource_requests(&server).await;
    let query = requests[0].url.query().unwrap();
    assert_eq!(
        parse_form(query),
        vec![("email".to_string(), "sender@example.com".to_string())]
    );
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_post_params_go_in_form_body_only() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/addressbooks"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_with_token(&server, "token").await;
    let envelope = api.create_address_book("Spring Customers").await;
    assert!(!envelope.is_error);
    assert_eq!(envelope.body.unwrap()["id"], 42);

    let requests = resource_requests(&server).await;
    assert!(requests[0].url.query().is_none());
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert_eq!(form_value(&body, "bookName").as_deref(), Some("Spring Customers"));
}

#[tokio::test]
async fn test_put_params_go_in_form_body_only() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/addressbooks/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"result": true})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_with_token(&server, "token").await;
    let envelope = api.edit_address_book(7, "Renamed").await;
    assert!(!envelope.is_error);

    let requests = resource_requests(&server).await;
    assert!(requests[0].url.query().is_none());
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert_eq!(form_value(&body, "name").as_deref(), Some("Renamed"));
}

// ============================================================================
// Response normalization
// ============================================================================

#[tokio::test]
async fn test_non_200_status_is_error_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/addressbooks/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error_code": 213,
            "message": "Book not found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_with_token(&server, "token").await;
    let envelope = api.get_book_info(99).await;

    assert!(envelope.is_error);
    assert_eq!(envelope.status_code, Some(404));
    assert_eq!(envelope.kind, Some(ErrorKind::HttpStatus));
    assert_eq!(envelope.body.unwrap()["error_code"], 213);
}

#[tokio::test]
async fn test_connection_refused_returns_transport_envelope() {
    let config = config_for(&closed_port_url(), "token");
    let api = SendpulseApi::new(config).await.unwrap();

    let envelope = api.get_balance(None).await;

    assert!(envelope.is_error);
    assert!(envelope.body.is_none());
    assert!(envelope.status_code.is_none());
    assert_eq!(envelope.kind, Some(ErrorKind::Transport));
    assert!(envelope.message.is_some());
}

#[tokio::test]
async fn test_timeout_returns_transport_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = SendpulseConfig::builder()
        .user_id(UserId::new("id").unwrap())
        .secret(Secret::new("secret").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .token("token")
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let api = SendpulseApi::new(config).await.unwrap();

    let envelope = api.get_balance(None).await;

    assert!(envelope.is_error);
    assert_eq!(envelope.kind, Some(ErrorKind::Transport));
    assert!(envelope.message.unwrap().contains("timed out"));
}

#[tokio::test]
async fn test_malformed_body_returns_transport_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Bad gateway</html>"))
        .mount(&server)
        .await;

    let api = api_with_token(&server, "token").await;
    let envelope = api.get_balance(None).await;

    assert!(envelope.is_error);
    assert!(envelope.body.is_none());
    assert_eq!(envelope.kind, Some(ErrorKind::Transport));
}

#[tokio::test]
async fn test_non_json_error_page_keeps_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad gateway</html>"))
        .mount(&server)
        .await;

    let api = api_with_token(&server, "token").await;
    let envelope = api.get_balance(None).await;

    assert!(envelope.is_error);
    assert_eq!(envelope.status_code, Some(502));
    assert_eq!(envelope.kind, Some(ErrorKind::HttpStatus));
    assert!(envelope.body.is_none());
    assert!(envelope.message.unwrap().contains("502"));
}

#[tokio::test]
async fn test_second_401_with_non_json_body_has_no_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "fresh-token"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api_with_token(&server, "stale-token").await;
    let envelope = api.get_balance(None).await;

    assert!(envelope.is_error);
    assert_eq!(envelope.status_code, Some(401));
    assert_eq!(envelope.kind, Some(ErrorKind::Auth));
    assert!(envelope.body.is_none());
}

// ============================================================================
// Serialization round-trip
// ============================================================================

/// Responds with the decoded `emails` form field as the JSON body.
struct EchoEmails;

impl Respond for EchoEmails {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body = String::from_utf8(request.body.clone()).unwrap_or_default();
        let emails = form_value(&body, "emails").unwrap_or_default();
        ResponseTemplate::new(200).set_body_raw(emails, "application/json")
    }
}

#[tokio::test]
async fn test_list_parameter_round_trips_through_echo_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/addressbooks/5/emails"))
        .respond_with(EchoEmails)
        .expect(1)
        .mount(&server)
        .await;

    let emails = vec![
        BookEmail::new("jane@example.com").with_variable("name", "Jane & Co"),
        BookEmail::new("joe+tag@example.com"),
    ];

    let api = api_with_token(&server, "token").await;
    let envelope = api.add_emails(5, &emails).await;

    assert!(!envelope.is_error);
    let echoed: Vec<BookEmail> = serde_json::from_value(envelope.body.unwrap()).unwrap();
    assert_eq!(echoed, emails);
}
