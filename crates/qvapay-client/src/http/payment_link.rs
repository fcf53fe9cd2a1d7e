/*
[INPUT]:  Payment link parameters
[OUTPUT]: Payment links owned by the authenticated user
[POS]:    HTTP layer - payment link endpoints
[UPDATE]: When adding payment link endpoints
*/

use crate::http::request::ApiRequest;
use crate::http::{QvaPayClient, Result};
use crate::types::{CreatePaymentLinkParams, PaymentLink};

#[derive(Debug, Clone, Copy)]
pub struct PaymentLinks<'a> {
    client: &'a QvaPayClient,
}

impl QvaPayClient {
    pub fn payment_links(&self) -> PaymentLinks<'_> {
        PaymentLinks { client: self }
    }
}

impl PaymentLinks<'_> {
    /// GET /payment_links
    pub async fn get_all(&self) -> Result<Vec<PaymentLink>> {
        self.client.request(ApiRequest::get("/payment_links")).await
    }

    /// POST /payment_links/create
    pub async fn create(&self, params: &CreatePaymentLinkParams) -> Result<PaymentLink> {
        let request = ApiRequest::post("/payment_links/create").json(params)?;
        self.client.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ClientConfig;
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> QvaPayClient {
        QvaPayClient::with_config(ClientConfig::default().with_base_url(server.uri()))
            .expect("client init")
    }

    fn link_fixture() -> Value {
        json!({
            "name": "Coffee",
            "product_id": "coffee-1",
            "amount": 2.5,
            "created_at": "2025-08-11T10:32:45.746Z",
            "updated_at": "2025-08-11T10:32:45.746Z",
            "payment_link_url": "https://qvapay.com/payme/coffee-1"
        })
    }

    #[tokio::test]
    async fn test_get_all_links() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/payment_links"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([link_fixture()])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let links = client.payment_links().get_all().await.unwrap();

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].amount, Decimal::new(25, 1));
    }

    #[tokio::test]
    async fn test_create_link() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/payment_links/create"))
            .and(body_json(json!({"name": "Coffee", "product_id": "coffee-1", "amount": 2.5})))
            .respond_with(ResponseTemplate::new(200).set_body_json(link_fixture()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let params = CreatePaymentLinkParams {
            name: "Coffee".to_string(),
            product_id: "coffee-1".to_string(),
            amount: Decimal::new(25, 1),
        };

        let link = client.payment_links().create(&params).await.unwrap();

        assert_eq!(link.payment_link_url, "https://qvapay.com/payme/coffee-1");
    }
}
