/*
[INPUT]:  Transaction filters, identifiers, transfer and payment parameters
[OUTPUT]: Transaction history, PDF receipts, withdrawals and new transfers
[POS]:    HTTP layer - transaction endpoints
[UPDATE]: When adding transaction endpoints or changing filter fields
*/

// ### Transaction Endpoints

use crate::http::request::{ApiRequest, QueryParams};
use crate::http::{QvaPayClient, Result};
use crate::types::{
    Page, PayTransactionParams, SearchTransactionsParams, Transaction, TransactionFilter,
    TransferParams, Withdraw,
};

#[derive(Debug, Clone, Copy)]
pub struct Transactions<'a> {
    client: &'a QvaPayClient,
}

impl QvaPayClient {
    pub fn transactions(&self) -> Transactions<'_> {
        Transactions { client: self }
    }
}

fn filter_query(filter: Option<&TransactionFilter>) -> QueryParams {
    filter.map(TransactionFilter::to_query).unwrap_or_default()
}

impl Transactions<'_> {
    /// Search the caller's transactions.
    ///
    /// GET /transactions?take&user_id&start&end&status&remote_id&description
    pub async fn search(&self, params: Option<&SearchTransactionsParams>) -> Result<Vec<Transaction>> {
        let query = params.map(SearchTransactionsParams::to_query).unwrap_or_default();
        self.client.request(ApiRequest::get("/transactions").query(query)).await
    }

    /// GET /transactions?start&end&status&remote_id&description
    pub async fn latest(&self, filter: Option<&TransactionFilter>) -> Result<Vec<Transaction>> {
        let request = ApiRequest::get("/transactions").query(filter_query(filter));
        self.client.request(request).await
    }

    /// GET /transaction/{uuid}
    pub async fn details(&self, uuid: &str, filter: Option<&TransactionFilter>) -> Result<Transaction> {
        let request = ApiRequest::get(format!("/transaction/{uuid}")).query(filter_query(filter));
        self.client.request(request).await
    }

    /// Receipt of a transaction as raw PDF bytes
    ///
    /// GET /transaction/{uuid}/pdf
    pub async fn pdf(&self, uuid: &str, filter: Option<&TransactionFilter>) -> Result<Vec<u8>> {
        let request =
            ApiRequest::get(format!("/transaction/{uuid}/pdf")).query(filter_query(filter));
        self.client.request_bytes(request).await
    }

    /// GET /withdraws
    pub async fn withdraws(&self) -> Result<Page<Withdraw>> {
        self.client.request(ApiRequest::get("/withdraws")).await
    }

    /// GET /withdraws/{id}
    pub async fn withdraw_details(&self, id: u64) -> Result<Withdraw> {
        self.client.request(ApiRequest::get(format!("/withdraws/{id}"))).await
    }

    /// Send balance to another user by uuid, email or phone
    ///
    /// POST /transactions/transfer
    pub async fn transfer(&self, params: &TransferParams) -> Result<Transaction> {
        let request = ApiRequest::post("/transactions/transfer").json(params)?;
        self.client.request(request).await
    }

    /// Settle a pending transaction with the account PIN
    ///
    /// POST /transactions/pay
    pub async fn pay(&self, params: &PayTransactionParams) -> Result<Transaction> {
        let request = ApiRequest::post("/transactions/pay").json(params)?;
        self.client.request(request).await
    }
}
