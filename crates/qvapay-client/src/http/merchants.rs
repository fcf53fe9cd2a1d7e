/*
[INPUT]:  Merchant app credentials, invoice/charge/authorization parameters
[OUTPUT]: App info, balance and merchant transactions
[POS]:    HTTP layer - app-credential (v2) merchant endpoints
[UPDATE]: When adding v2 merchant endpoints
*/

// ### Merchant Endpoints
//
// Authenticated by app credentials in the body, never by the session token.

use crate::http::request::ApiRequest;
use crate::http::{QvaPayClient, Result};
use crate::types::{
    AppCredentials, AppInfoResponse, AuthorizePaymentsParams, ChargeUserParams,
    CreateInvoiceParams, MerchantTransaction, NumberOrString,
};

#[derive(Debug, Clone, Copy)]
pub struct Merchants<'a> {
    client: &'a QvaPayClient,
}

impl QvaPayClient {
    pub fn merchants(&self) -> Merchants<'_> {
        Merchants { client: self }
    }
}

impl Merchants<'_> {
    /// POST /v2/info
    pub async fn app_info(&self, credentials: &AppCredentials) -> Result<AppInfoResponse> {
        let request = ApiRequest::post("/v2/info").json(credentials)?;
        self.client.request(request).await
    }

    /// Balance of the app owner's account
    ///
    /// POST /v2/balance
    pub async fn check_balance(&self, credentials: &AppCredentials) -> Result<NumberOrString> {
        let request = ApiRequest::post("/v2/balance").json(credentials)?;
        self.client.request(request).await
    }

    /// POST /v2/create_invoice
    pub async fn create_invoice(&self, params: &CreateInvoiceParams) -> Result<MerchantTransaction> {
        let request = ApiRequest::post("/v2/create_invoice").json(params)?;
        self.client.request(request).await
    }

    /// Charge a user who has authorized the app
    ///
    /// POST /v2/charge
    pub async fn charge_user(&self, params: &ChargeUserParams) -> Result<MerchantTransaction> {
        let request = ApiRequest::post("/v2/charge").json(params)?;
        self.client.request(request).await
    }

    /// POST /v2/authorize_payments
    pub async fn authorize_payments(
        &self,
        params: &AuthorizePaymentsParams,
    ) -> Result<MerchantTransaction> {
        let request = ApiRequest::post("/v2/authorize_payments").json(params)?;
        self.client.request(request).await
    }

    /// POST /v2/transactions/{id}
    pub async fn transaction_status(
        &self,
        id: &str,
        credentials: &AppCredentials,
    ) -> Result<MerchantTransaction> {
        let request = ApiRequest::post(format!("/v2/transactions/{id}")).json(credentials)?;
        self.client.request(request).await
    }

    /// POST /v2/transactions
    pub async fn app_transactions(&self, credentials: &AppCredentials) -> Result<MerchantTransaction> {
        let request = ApiRequest::post("/v2/transactions").json(credentials)?;
        self.client.request(request).await
    }
}
