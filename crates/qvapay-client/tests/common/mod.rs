/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for qvapay-client tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use qvapay_client::http::{DebugSink, ErrorRecord, RequestRecord, ResponseRecord};
use qvapay_client::{ClientConfig, QvaPayClient};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server, without a token
pub fn client_for(server: &MockServer) -> QvaPayClient {
    QvaPayClient::with_config(ClientConfig::default().with_base_url(server.uri()))
        .expect("client init")
}

/// Debug-mode client whose diagnostics land in the returned sink
pub fn debug_client_for(server: &MockServer) -> (QvaPayClient, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::default());
    let client = QvaPayClient::with_config(
        ClientConfig::default()
            .with_base_url(server.uri())
            .with_debug(true),
    )
    .expect("client init")
    .with_debug_sink(sink.clone());
    (client, sink)
}

/// Base URL of a local port with nothing listening on it
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn mock_access_token() -> String {
    "1|pVY3jYFMd5nLRpRFpS0y7QTWwPV4jAiXOD1oUpKI".to_string()
}

pub fn login_response(token: &str) -> Value {
    json!({
        "access_token": token,
        "token_type": "Bearer",
        "me": {
            "uuid": "ac53d292-d825-4f49-8df2-62c3fe84310f",
            "username": "dantescur",
            "name": "Daniel",
            "lastname": "Saucedo",
            "bio": "Bio",
            "profile_photo_path": "/url/myphoto.jpeg",
            "balance": 10,
            "complete_name": "Daniel Saucedo",
            "name_verified": "Cesar Daniel",
            "profile_photo_url": "https://photo.qvapay.com/sdauy89/myphoto.jpeg",
            "average_rating": "all"
        }
    })
}

/// Sink that keeps every diagnostic record
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub requests: Mutex<Vec<RequestRecord>>,
    pub responses: Mutex<Vec<ResponseRecord>>,
    pub errors: Mutex<Vec<ErrorRecord>>,
}

impl DebugSink for CollectingSink {
    fn request(&self, record: &RequestRecord) {
        self.requests.lock().unwrap().push(record.clone());
    }

    fn response(&self, record: &ResponseRecord) {
        self.responses.lock().unwrap().push(record.clone());
    }

    fn error(&self, record: &ErrorRecord) {
        self.errors.lock().unwrap().push(record.clone());
    }
}
