/*
[INPUT]:  Offer filters, offer identifiers, creation parameters, chat text
[OUTPUT]: P2P market data, offers and chat threads
[POS]:    HTTP layer - peer-to-peer exchange endpoints
[UPDATE]: When adding new P2P endpoints or changing offer filters
*/

// ### P2P Endpoints

use serde_json::{Value, json};

use crate::http::request::{ApiRequest, QueryParams};
use crate::http::{QvaPayClient, Result};
use crate::types::{
    CompletedPairsAverageResponse, CreateOfferParams, EnabledCurrency, GetOffersParams,
    MessageResponse, MyOffersParams, OfferResponse, OperationsCount, P2PAverageResponse,
    P2PChatResponse, P2POffer, P2POfferDetails, Page,
};

#[derive(Debug, Clone, Copy)]
pub struct P2P<'a> {
    client: &'a QvaPayClient,
}

impl QvaPayClient {
    pub fn p2p(&self) -> P2P<'_> {
        P2P { client: self }
    }
}

impl P2P<'_> {
    /// GET /p2p
    pub async fn welcome_message(&self) -> Result<MessageResponse> {
        self.client.request(ApiRequest::get("/p2p")).await
    }

    /// GET /p2p/average
    pub async fn weekly_average(&self) -> Result<P2PAverageResponse> {
        self.client.request(ApiRequest::get("/p2p/average")).await
    }

    /// Real-time averages of completed trades, optionally for one currency
    ///
    /// GET /p2p/completed_pairs_average?coins={currency}
    pub async fn completed_pairs_averages(
        &self,
        currency: Option<EnabledCurrency>,
    ) -> Result<CompletedPairsAverageResponse> {
        let mut query = QueryParams::new();
        query.push_opt("coins", currency);
        let request = ApiRequest::get("/p2p/completed_pairs_average").query(query);
        self.client.request(request).await
    }

    /// GET /p2p/get_total_operations
    pub async fn public_operations_count(&self) -> Result<OperationsCount> {
        self.client.request(ApiRequest::get("/p2p/get_total_operations")).await
    }

    /// List open offers.
    ///
    /// GET /p2p/index?type&min&max&coin&my&vip
    ///
    /// Data freshness depends on the caller's level: guests see offers with
    /// a delay, GOLD and VIP accounts in real time.
    pub async fn get_offers(&self, params: Option<&GetOffersParams>) -> Result<Page<P2POffer>> {
        let mut request = ApiRequest::get("/p2p/index");
        if let Some(params) = params {
            request = request.query(params.to_query());
        }
        self.client.request(request).await
    }

    /// GET /p2p/my?type&min&max&coin&vip
    pub async fn get_my_offers(&self, params: Option<&MyOffersParams>) -> Result<Page<P2POffer>> {
        let mut request = ApiRequest::get("/p2p/my");
        if let Some(params) = params {
            request = request.query(params.to_query());
        }
        self.client.request(request).await
    }

    /// GET /p2p/{id}
    pub async fn offer_detail(&self, offer_id: &str) -> Result<P2POfferDetails> {
        self.client.request(ApiRequest::get(format!("/p2p/{offer_id}"))).await
    }

    /// Chat thread of an offer; the offer must be open or the caller a peer in it
    ///
    /// GET /p2p/{id}/chat
    pub async fn offer_chat(&self, offer_id: &str) -> Result<P2PChatResponse> {
        self.client.request(ApiRequest::get(format!("/p2p/{offer_id}/chat"))).await
    }

    /// POST /p2p/create
    pub async fn create_offer(&self, params: &CreateOfferParams) -> Result<OfferResponse> {
        let request = ApiRequest::post("/p2p/create").json(params)?;
        self.client.request(request).await
    }

    /// POST /p2p/{id}/apply
    pub async fn apply_to_offer(&self, offer_id: &str) -> Result<OfferResponse> {
        self.client.request(ApiRequest::post(format!("/p2p/{offer_id}/apply"))).await
    }

    /// POST /p2p/{id}/cancel
    pub async fn cancel_offer(&self, offer_id: &str) -> Result<()> {
        let _: Value = self
            .client
            .request(ApiRequest::post(format!("/p2p/{offer_id}/cancel")))
            .await?;
        Ok(())
    }

    /// POST /p2p/{id}/chat
    pub async fn send_message(&self, offer_id: &str, text: &str) -> Result<OfferResponse> {
        let request = ApiRequest::post(format!("/p2p/{offer_id}/chat")).json(&json!({ "text": text }))?;
        self.client.request(request).await
    }
}
