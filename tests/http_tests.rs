//! Transport-level tests: bearer injection, error classification, decoding.

mod common;

use std::time::Duration;

use common::{client_for, markets_response_json, setup_mock_server};
use socialpredict_sdk::prelude::*;
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_bearer_header_attached_when_token_set() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v0/markets"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(markets_response_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.set_token("secret-token").await;
    assert_ok!(client.markets().all().await);
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v0/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(markets_response_json()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_ok!(client.markets().all().await);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_cleared_token_stops_bearer_injection() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v0/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(markets_response_json()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.set_token("T").await;
    client.clear_token().await;
    assert!(!client.is_authenticated().await);
    assert_ok!(client.markets().all().await);

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_explicit_authorization_header_wins_over_token() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v0/markets"))
        .and(header("Authorization", "Bearer pinned"))
        .respond_with(ResponseTemplate::new(200).set_body_json(markets_response_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = SocialPredictClient::builder()
        .base_url(&server.uri())
        .header("Authorization", "Bearer pinned")
        .build()
        .unwrap();
    client.set_token("ignored").await;
    assert_ok!(client.markets().all().await);
}

#[tokio::test]
async fn test_server_error_body_drives_classification() {
    let server = setup_mock_server().await;
    let body = serde_json::json!({"error": "VALIDATION_ERROR", "message": "Invalid data"});
    Mock::given(method("GET"))
        .and(path("/v0/markets"))
        .respond_with(ResponseTemplate::new(400).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let err = client_for(&server).markets().all().await.unwrap_err();
    assert_eq!(err.status_code, 400);
    assert_eq!(err.code, "VALIDATION_ERROR");
    assert_eq!(err.message, "Invalid data");
    assert_eq!(err.data, Some(body));
    assert!(err.is_validation_error());
    assert!(!err.is_network_error());
}

#[tokio::test]
async fn test_server_error_without_json_body_gets_defaults() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v0/markets"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = client_for(&server).markets().all().await.unwrap_err();
    assert_eq!(err.status_code, 503);
    assert_eq!(err.code, "API_ERROR");
    assert_eq!(err.message, "HTTP 503 Error");
    assert!(err.is_server_error());
}

#[tokio::test]
async fn test_auth_error_predicate_on_401() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v0/privateprofile"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "token expired"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).users().private_profile().await.unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(err.message, "token expired");
}

#[tokio::test]
async fn test_not_found_predicate_on_404() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v0/markets/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let err = client_for(&server).markets().get(999).await.unwrap_err();
    assert!(err.is_not_found_error());
    assert_eq!(err.message, "HTTP 404 Error");
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let client = SocialPredictClient::builder()
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client.markets().all().await.unwrap_err();
    assert_eq!(err.status_code, 0);
    assert_eq!(err.code, "NETWORK_ERROR");
    assert_eq!(err.message, "Network error - unable to reach server");
    assert!(err.is_network_error());
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v0/markets"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(markets_response_json())
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = SocialPredictClient::builder()
        .base_url(&server.uri())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.markets().all().await.unwrap_err();
    assert!(err.is_network_error());
    assert_eq!(err.status_code, 0);
}

#[tokio::test]
async fn test_undecodable_success_body_is_decode_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v0/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>hi</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).markets().all().await.unwrap_err();
    assert!(err.is_decode_error());
    assert_eq!(err.code, "MALFORMED_RESPONSE");
    assert_eq!(err.status_code, 200);
}

#[tokio::test]
async fn test_success_body_decodes_into_wire_types() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v0/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(markets_response_json()))
        .mount(&server)
        .await;

    let resp = assert_ok!(client_for(&server).markets().all().await);
    assert_eq!(resp.markets.len(), 1);
    let overview = &resp.markets[0];
    assert_eq!(overview.market.id, 1);
    assert_eq!(overview.market.creator_username, "alice");
    assert_eq!(overview.num_users, 4);
}

#[tokio::test]
async fn test_repeated_reads_return_deep_equal_results() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v0/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(markets_response_json()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = assert_ok!(client.markets().all().await);
    let second = assert_ok!(client.markets().all().await);
    assert_eq!(first, second);
}
