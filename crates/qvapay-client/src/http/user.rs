/*
[INPUT]:  Profile updates, KYC/avatar files, top-up and withdrawal requests
[OUTPUT]: Authenticated user profile, balance operations and user search
[POS]:    HTTP layer - user account endpoints
[UPDATE]: When adding profile endpoints or changing account flows
*/

// ### User Endpoints

use serde_json::{Value, json};

use crate::http::request::ApiRequest;
use crate::http::{QvaPayClient, Result};
use crate::types::{
    Me, MeExtended, SuccessResponse, TopUpParams, TopUpResponse, UpdateUserParams,
    UpdateUserResponse, UserSearchResult, UserWithdrawResponse, WithdrawRequest,
};

/// Account endpoints of the logged-in user
#[derive(Debug, Clone, Copy)]
pub struct User<'a> {
    client: &'a QvaPayClient,
}

impl QvaPayClient {
    pub fn user(&self) -> User<'_> {
        User { client: self }
    }
}

impl User<'_> {
    /// GET /user
    pub async fn me(&self) -> Result<Me> {
        self.client.request(ApiRequest::get("/user")).await
    }

    /// Profile with ranking, sales and verification data
    ///
    /// GET /user/extended
    pub async fn me_extended(&self) -> Result<MeExtended> {
        self.client.request(ApiRequest::get("/user/extended")).await
    }

    /// GET /user/kyc
    pub async fn kyc_status(&self) -> Result<Value> {
        self.client.request(ApiRequest::get("/user/kyc")).await
    }

    /// Upload an identity document as multipart field `document`
    ///
    /// POST /user/kyc
    pub async fn upload_kyc_document(&self, document: Vec<u8>, file_name: &str) -> Result<Value> {
        let request = ApiRequest::post("/user/kyc").file("document", file_name, document);
        self.client.request(request).await
    }

    /// PUT /user/update
    pub async fn update(&self, params: &UpdateUserParams) -> Result<UpdateUserResponse> {
        let request = ApiRequest::put("/user/update").json(params)?;
        self.client.request(request).await
    }

    /// Change the account email.
    ///
    /// PUT /user/update/email
    ///
    /// Calling without a PIN sends an empty one, which asks the server to
    /// mail a fresh PIN; call again with it to confirm.
    pub async fn update_email(&self, email: &str, pin: Option<&str>) -> Result<Value> {
        let body = json!({ "email": email, "pin": pin.unwrap_or_default() });
        let request = ApiRequest::put("/user/update/email").json(&body)?;
        self.client.request(request).await
    }

    /// PUT /user/update/username
    pub async fn update_username(&self, username: &str) -> Result<Value> {
        let request = ApiRequest::put("/user/update/username").json(&json!({ "username": username }))?;
        self.client.request(request).await
    }

    /// PUT /user/update/avatar
    pub async fn update_avatar(&self, image: Vec<u8>, file_name: &str) -> Result<Value> {
        let request = ApiRequest::put("/user/update/avatar").file("avatar", file_name, image);
        self.client.request(request).await
    }

    /// Request a deposit address for a top-up
    ///
    /// POST /topup
    pub async fn top_up(&self, params: &TopUpParams) -> Result<TopUpResponse> {
        let request = ApiRequest::post("/topup").json(params)?;
        self.client.request(request).await
    }

    /// POST /withdraw
    pub async fn withdraw(&self, params: &WithdrawRequest) -> Result<UserWithdrawResponse> {
        let request = ApiRequest::post("/withdraw").json(params)?;
        self.client.request(request).await
    }

    /// POST /gold
    pub async fn buy_gold(&self, csrf: &str) -> Result<SuccessResponse> {
        let request = ApiRequest::post("/gold").json(&json!({ "csrf": csrf }))?;
        self.client.request(request).await
    }

    /// POST /user/search
    pub async fn search(&self, query: &str) -> Result<UserSearchResult> {
        let request = ApiRequest::post("/user/search").json(&json!({ "query": query }))?;
        self.client.request(request).await
    }
}
