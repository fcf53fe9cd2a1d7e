/*
[INPUT]:  Product identifiers and purchase parameters
[OUTPUT]: Store catalogue, purchases and purchase receipts
[POS]:    HTTP layer - store endpoints
[UPDATE]: When adding store endpoints
*/

// ### Store Endpoints

use serde_json::Value;

use crate::http::request::ApiRequest;
use crate::http::{QvaPayClient, Result};
use crate::types::{BuyProductParams, Page, Product, Purchase};

#[derive(Debug, Clone, Copy)]
pub struct Store<'a> {
    client: &'a QvaPayClient,
}

impl QvaPayClient {
    pub fn store(&self) -> Store<'_> {
        Store { client: self }
    }
}

impl Store<'_> {
    /// GET /store/my
    pub async fn my_purchases(&self) -> Result<Page<Purchase>> {
        self.client.request(ApiRequest::get("/store/my")).await
    }

    /// GET /store/{uuid}
    pub async fn get(&self, uuid: &str) -> Result<Product> {
        self.client.request(ApiRequest::get(format!("/store/{uuid}"))).await
    }

    /// GET /store
    pub async fn get_all(&self) -> Result<Page<Product>> {
        self.client.request(ApiRequest::get("/store")).await
    }

    /// GET /store/my/{id}
    pub async fn purchase_details(&self, id: u64) -> Result<Purchase> {
        self.client.request(ApiRequest::get(format!("/store/my/{id}"))).await
    }

    /// POST /store/buy
    pub async fn buy_product(&self, params: &BuyProductParams) -> Result<Value> {
        let request = ApiRequest::post("/store/buy").json(params)?;
        self.client.request(request).await
    }
}
