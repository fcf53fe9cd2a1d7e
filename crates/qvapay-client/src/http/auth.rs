/*
[INPUT]:  Login/registration credentials and two-factor codes
[OUTPUT]: Session responses; the client's bearer token is set or cleared
[POS]:    HTTP layer - authentication endpoints
[UPDATE]: When the login flow or session endpoints change
*/

// ### Auth Endpoints

use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::http::request::ApiRequest;
use crate::http::{QvaPayClient, QvaPayError, Result};
use crate::types::{LoginParams, LoginResponse, MessageResponse, RegisterParams, RegisterResponse};

const LOGIN_PATH: &str = "/auth/login";

/// Session endpoints; owns the client's token lifecycle
#[derive(Debug, Clone, Copy)]
pub struct Auth<'a> {
    client: &'a QvaPayClient,
}

impl QvaPayClient {
    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }
}

impl Auth<'_> {
    /// Log in and keep the returned access token on the client.
    ///
    /// POST /auth/login
    ///
    /// A body carrying `info` instead of a token means the account needs a
    /// second factor: [`QvaPayError::TwoFactorRequired`] is returned and the
    /// stored token is left as it was.
    pub async fn login(&self, params: &LoginParams) -> Result<LoginResponse> {
        let request = ApiRequest::post(LOGIN_PATH).json(params)?;
        let body: Value = self.client.request(request).await?;

        if let Some(info) = two_factor_info(&body) {
            debug!("login requires a second factor");
            return Err(QvaPayError::TwoFactorRequired { info });
        }

        let response: LoginResponse = self.client.decode_value(&Method::POST, LOGIN_PATH, body)?;
        self.client.set_auth_token(response.access_token.as_str());
        Ok(response)
    }

    /// POST /auth/register
    pub async fn register(&self, params: &RegisterParams) -> Result<RegisterResponse> {
        let request = ApiRequest::post("/auth/register").json(params)?;
        self.client.request(request).await
    }

    /// End the session; the token is cleared only once the server confirms.
    ///
    /// GET /auth/logout
    pub async fn logout(&self) -> Result<MessageResponse> {
        let response: MessageResponse = self.client.request(ApiRequest::get("/auth/logout")).await?;
        self.client.clear_auth_token();
        Ok(response)
    }

    /// POST auth/check
    pub async fn check(&self) -> Result<()> {
        let _: Value = self.client.request(ApiRequest::post("auth/check")).await?;
        Ok(())
    }

    /// Submit a second-factor code as the raw request body
    ///
    /// POST /auth/two-factor
    pub async fn two_factor_check(&self, code: &str) -> Result<Value> {
        let request = ApiRequest::post("/auth/two-factor").raw(code);
        self.client.request(request).await
    }
}

fn two_factor_info(body: &Value) -> Option<String> {
    if body.get("access_token").is_some_and(|token| !token.is_null()) {
        return None;
    }
    match body.get("info")? {
        Value::Null => None,
        Value::String(info) => Some(info.clone()),
        other => Some(other.to_string()),
    }
}
