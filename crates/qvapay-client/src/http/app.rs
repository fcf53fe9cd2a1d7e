/*
[INPUT]:  App identifiers and creation parameters
[OUTPUT]: Merchant app records owned by the authenticated user
[POS]:    HTTP layer - app management endpoints
[UPDATE]: When adding new app endpoints
*/

// ### App Endpoints

use crate::http::request::ApiRequest;
use crate::http::{QvaPayClient, Result};
use crate::types::{App, AppCreateParams, AppCreateResponse, AppsResponse};

#[derive(Debug, Clone, Copy)]
pub struct AppApi<'a> {
    client: &'a QvaPayClient,
}

impl QvaPayClient {
    pub fn app(&self) -> AppApi<'_> {
        AppApi { client: self }
    }
}

impl AppApi<'_> {
    /// GET /app
    pub async fn get_all(&self) -> Result<AppsResponse> {
        self.client.request(ApiRequest::get("/app")).await
    }

    /// GET /{uuid}
    pub async fn get(&self, uuid: &str) -> Result<App> {
        self.client.request(ApiRequest::get(format!("/{uuid}"))).await
    }

    /// DELETE /{uuid}
    pub async fn delete(&self, uuid: &str) -> Result<App> {
        self.client.request(ApiRequest::delete(format!("/{uuid}"))).await
    }

    /// POST /app/create
    pub async fn create(&self, params: &AppCreateParams) -> Result<AppCreateResponse> {
        let request = ApiRequest::post("/app/create").json(params)?;
        self.client.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ClientConfig;
    use serde_json::{Value, json};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> QvaPayClient {
        QvaPayClient::with_config(ClientConfig::default().with_base_url(server.uri()))
            .expect("client init")
    }

    fn app_fixture(uuid: &str, active: bool) -> Value {
        json!({
            "uuid": uuid,
            "name": "Test App",
            "url": "https://example.com",
            "logo": "https://example.com/logo.png",
            "description": "Test app description",
            "callback": "https://example.com/callback",
            "success_url": "https://example.com/success",
            "cancel_url": "https://example.com/cancel",
            "active": active,
            "enabled": active,
            "allowed_payment_auth": active,
            "card": active,
            "created_at": "2025-08-10T10:00:00Z",
            "updated_at": "2025-08-10T10:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_get_all_apps() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/app"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": "success",
                "apps": [app_fixture("app-uuid-1", true)]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client.app().get_all().await.unwrap();

        assert_eq!(response.result, "success");
        assert_eq!(response.apps.len(), 1);
        assert_eq!(response.apps[0].success_url, "https://example.com/success");
        assert!(response.apps[0].allowed_payment_auth);
    }

    #[tokio::test]
    async fn test_get_and_delete_use_root_uuid_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/app-uuid-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(app_fixture("app-uuid-1", true)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/app-uuid-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(app_fixture("app-uuid-1", false)))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let fetched = client.app().get("app-uuid-1").await.unwrap();
        let deleted = client.app().delete("app-uuid-1").await.unwrap();

        assert_eq!(fetched.uuid, "app-uuid-1");
        assert!(fetched.active);
        assert!(!deleted.active);
        assert!(!deleted.card);
    }

    #[tokio::test]
    async fn test_create_app() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/app/create"))
            .and(body_json(json!({
                "name": "New App",
                "url": "https://newapp.com",
                "logo": "https://newapp.com/logo.png",
                "callback": "https://newapp.com/callback",
                "success_url": "https://newapp.com/success",
                "cancel_url": "https://newapp.com/cancel"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": "success",
                "app": {
                    "uuid": "app-uuid-2",
                    "secret": "app-secret",
                    "name": "New App",
                    "url": "https://newapp.com",
                    "desc": "",
                    "logo": "https://newapp.com/logo.png"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let params = AppCreateParams {
            name: "New App".to_string(),
            url: "https://newapp.com".to_string(),
            logo: "https://newapp.com/logo.png".to_string(),
            callback: "https://newapp.com/callback".to_string(),
            success_url: "https://newapp.com/success".to_string(),
            cancel_url: "https://newapp.com/cancel".to_string(),
        };

        let response = client.app().create(&params).await.unwrap();

        assert_eq!(response.app.uuid, "app-uuid-2");
        assert_eq!(response.app.secret, "app-secret");
    }

    #[tokio::test]
    async fn test_create_app_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/app/create"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({"message": "The name field is required."})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let params = AppCreateParams {
            name: String::new(),
            url: "https://newapp.com".to_string(),
            logo: String::new(),
            callback: String::new(),
            success_url: String::new(),
            cancel_url: String::new(),
        };

        let err = client.app().create(&params).await.unwrap_err();

        assert_eq!(err.to_string(), "The name field is required.");
        assert_eq!(err.status_code(), Some(422));
    }
}
