/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for the client transport and debug diagnostics
[POS]:    Integration tests - HTTP client
[UPDATE]: When transport behavior or diagnostics change
*/

mod common;

use std::time::Duration;

use common::{client_for, closed_port_url, debug_client_for, mock_access_token, setup_mock_server};
use qvapay_client::http::DEFAULT_BASE_URL;
use qvapay_client::{
    ClientConfig, CreateOfferParams, ErrorKind, GetOffersParams, OfferType, QvaPayClient,
    TransactionFilter, TransactionStatus,
};
use rust_decimal::Decimal;
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let client = assert_ok!(QvaPayClient::new());
    assert_eq!(client.base_url().as_str().trim_end_matches('/'), DEFAULT_BASE_URL);
    assert!(!client.is_debug());
    assert!(client.auth_token().is_none());
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig::default()
        .with_base_url("https://sandbox.qvapay.com/api")
        .with_auth_token(mock_access_token())
        .with_debug(true);
    assert_eq!(config.timeout, None);
    assert_eq!(config.connect_timeout, None);

    let client = assert_ok!(QvaPayClient::with_config(config));
    assert!(client.is_debug());
    assert_eq!(client.auth_token(), Some(mock_access_token()));
}

#[test]
fn test_timeouts_only_when_configured() {
    let config = ClientConfig::default().with_timeout(Duration::from_secs(15));
    assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    assert_eq!(config.connect_timeout, None);
    assert_ok!(QvaPayClient::with_config(config));
}

#[test]
fn test_invalid_base_url_is_an_api_error() {
    let err = QvaPayClient::with_config(ClientConfig::default().with_base_url("not a url")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn test_debug_records_mask_the_token() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/p2p/index"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_page": 1,
            "data": [],
            "first_page_url": "https://api.qvapay.com/p2p/index?page=1",
            "from": null,
            "last_page": 1,
            "last_page_url": "https://api.qvapay.com/p2p/index?page=1",
            "links": [],
            "next_page_url": null,
            "path": "https://api.qvapay.com/p2p/index",
            "per_page": 15,
            "prev_page_url": null,
            "to": null,
            "total": 0
        })))
        .mount(&server)
        .await;

    let (client, sink) = debug_client_for(&server);
    client.set_auth_token(mock_access_token());
    let params = GetOffersParams {
        offer_type: Some(OfferType::Sell),
        coin: Some("SOL".to_string()),
        ..Default::default()
    };

    let page = assert_ok!(client.p2p().get_offers(Some(&params)).await);
    assert!(page.data.is_empty());

    let requests = sink.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert!(requests[0].url.ends_with("/p2p/index?type=sell&coin=SOL"));
    let authorization = requests[0]
        .headers
        .iter()
        .find(|(name, _)| name == "authorization")
        .map(|(_, value)| value.as_str());
    assert_eq!(authorization, Some("Bearer ***"));
    assert!(
        requests[0]
            .headers
            .iter()
            .all(|(_, value)| !value.contains(&mock_access_token()))
    );

    let responses = sink.responses.lock().unwrap();
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].status, 200);
    assert!(sink.errors.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_debug_error_record_carries_request_and_response() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/p2p/create"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Insufficient balance",
            "code": 4221
        })))
        .mount(&server)
        .await;

    let (client, sink) = debug_client_for(&server);
    let params = CreateOfferParams::new(OfferType::Sell, "USDT", Decimal::from(100), Decimal::from(95));

    let err = client.p2p().create_offer(&params).await.unwrap_err();

    assert_eq!(err.to_string(), "Insufficient balance");
    assert_eq!(err.code(), Some("4221"));
    assert_eq!(err.data(), Some(&json!({"message": "Insufficient balance", "code": 4221})));

    let errors = sink.errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].status, Some(422));
    assert_eq!(errors[0].code.as_deref(), Some("4221"));
    assert_eq!(errors[0].method, "POST");
    assert!(errors[0].url.ends_with("/p2p/create"));
    assert!(
        errors[0]
            .request_body
            .as_deref()
            .is_some_and(|body| body.contains("\"coin\":\"USDT\""))
    );
    assert!(
        errors[0]
            .response_body
            .as_deref()
            .is_some_and(|body| body.contains("Insufficient balance"))
    );
    assert!(sink.responses.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_plain_text_error_body_becomes_message() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/transactions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filter = TransactionFilter {
        status: Some(TransactionStatus::Pending),
        ..Default::default()
    };

    let err = client.transactions().latest(Some(&filter)).await.unwrap_err();

    assert_eq!(err.to_string(), "Service Unavailable");
    assert_eq!(err.status_code(), Some(503));
    assert_eq!(err.data(), Some(&json!("Service Unavailable")));
}

#[tokio::test]
async fn test_empty_error_body_uses_status_fallback() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/coins/99"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.coins().get_by_id(99).await.unwrap_err();

    assert_eq!(err.to_string(), "Request failed with status code 500");
    assert_eq!(err.data(), None);
}

#[tokio::test]
async fn test_unreachable_server_is_classified() {
    let client = assert_ok!(QvaPayClient::with_config(
        ClientConfig::default().with_base_url(closed_port_url())
    ));

    let err = client.p2p().welcome_message().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status_code(), None);
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn test_unexpected_shape_is_a_decode_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/p2p/average"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.p2p().weekly_average().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status_code(), None);
    assert!(err.to_string().contains("missing field"));
}
