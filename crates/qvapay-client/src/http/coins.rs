/*
[INPUT]:  Coin identifiers and enablement filters
[OUTPUT]: Coin catalogue entries (public market data)
[POS]:    HTTP layer - coin endpoints
[UPDATE]: When adding new coin endpoints or changing filters
*/

// ### Coin Endpoints

use crate::http::request::ApiRequest;
use crate::http::{QvaPayClient, Result};
use crate::types::{CoinDetail, CoinV2, CoinsResponse, CoinsV2Params};

#[derive(Debug, Clone, Copy)]
pub struct Coins<'a> {
    client: &'a QvaPayClient,
}

impl QvaPayClient {
    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }
}

impl Coins<'_> {
    /// GET /coins
    pub async fn get_all(&self) -> Result<CoinsResponse> {
        self.client.request(ApiRequest::get("/coins")).await
    }

    /// List coins with optional enablement filters
    ///
    /// GET /coins/v2?enabled_in={bool}&enabled_out={bool}&enabled_p2p={bool}
    pub async fn get_v2(&self, params: Option<&CoinsV2Params>) -> Result<Vec<CoinV2>> {
        let mut request = ApiRequest::get("/coins/v2");
        if let Some(params) = params {
            request = request.query(params.to_query());
        }
        self.client.request(request).await
    }

    /// GET /coins/{id}
    pub async fn get_by_id(&self, id: u64) -> Result<CoinDetail> {
        self.client.request(ApiRequest::get(format!("/coins/{id}"))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ClientConfig;
    use crate::types::NumberOrString;
    use serde_json::{Value, json};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> QvaPayClient {
        QvaPayClient::with_config(ClientConfig::default().with_base_url(server.uri()))
            .expect("client init")
    }

    fn coin_v2_fixture() -> Value {
        json!({
            "coins_categories_id": "3",
            "enabled_in": true,
            "enabled_out": true,
            "enabled_p2p": false,
            "fee_in": "1",
            "fee_out": "1",
            "id": "1",
            "logo": "logo",
            "min_in": "min",
            "min_out": "max",
            "name": "name",
            "network": null,
            "price": "price",
            "tick": "string"
        })
    }

    #[tokio::test]
    async fn test_get_all_coins() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coins"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 2,
                "logo": "logo",
                "name": "Coin",
                "coins": [{
                    "id": 1,
                    "name": "Bitcoin",
                    "price": 50000,
                    "coins_categories_id": 1,
                    "created_at": "2025-08-11T10:32:45.746Z",
                    "enabled_in": 0,
                    "enabled_out": 0,
                    "enabled_p2p": 1,
                    "fee_in": "1",
                    "fee_out": " 1",
                    "logo": "logo",
                    "min_in": "1",
                    "min_out": "0",
                    "tick": "tick",
                    "updated_at": "2025-08-11T10:32:45.746Z",
                    "working_data": "yes"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client.coins().get_all().await.unwrap();

        assert_eq!(response.id, 2);
        assert_eq!(response.coins[0].name, "Bitcoin");
        assert!(response.coins[0].enabled_p2p);
        assert_eq!(response.coins[0].price, NumberOrString::from(50000));
    }

    #[tokio::test]
    async fn test_get_v2_without_params_has_no_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coins/v2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([coin_v2_fixture(), coin_v2_fixture()])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let coins = client.coins().get_v2(None).await.unwrap();

        assert_eq!(coins.len(), 2);
        let received = server.received_requests().await.expect("recording enabled");
        assert_eq!(received[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_get_v2_serializes_defined_flags_only() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coins/v2"))
            .and(query_param("enabled_out", "true"))
            .and(query_param("enabled_p2p", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([coin_v2_fixture()])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let params = CoinsV2Params {
            enabled_in: None,
            enabled_out: Some(true),
            enabled_p2p: Some(false),
        };
        let coins = client.coins().get_v2(Some(&params)).await.unwrap();

        assert_eq!(coins[0].tick, "string");
        let received = server.received_requests().await.expect("recording enabled");
        assert_eq!(received[0].url.query(), Some("enabled_out=true&enabled_p2p=false"));
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coins/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1,
                "name": "Bitcoin",
                "price": "50000",
                "coin_category": {"id": 3, "logo": "logo", "name": "Bitcoin"},
                "coins_categories_id": 3,
                "enabled_in": 0,
                "enabled_out": 0,
                "enabled_p2p": 1,
                "fee_in": "12",
                "fee_out": "12",
                "logo": "logo",
                "max_in": 12,
                "max_out": 13,
                "min_in": "12",
                "min_out": "123",
                "tick": "tick",
                "working_data": "since"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let coin = client.coins().get_by_id(1).await.unwrap();

        assert_eq!(coin.coin_category.id, 3);
        assert_eq!(coin.max_out, NumberOrString::from(13));
        assert!(!coin.enabled_in);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coins/1"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Coin not found"})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.coins().get_by_id(1).await.unwrap_err();

        assert_eq!(err.to_string(), "Coin not found");
        assert_eq!(err.status_code(), Some(404));
    }
}
