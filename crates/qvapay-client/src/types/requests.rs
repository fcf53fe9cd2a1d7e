/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - request bodies and query filters
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OfferType, TransactionStatus};
use super::models::serde_helpers;
use crate::http::request::QueryParams;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    pub email: String,
    pub password: String,
    pub c_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppCreateParams {
    pub name: String,
    pub url: String,
    pub logo: String,
    pub callback: String,
    pub success_url: String,
    pub cancel_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoinsV2Params {
    pub enabled_in: Option<bool>,
    pub enabled_out: Option<bool>,
    pub enabled_p2p: Option<bool>,
}

impl CoinsV2Params {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("enabled_in", self.enabled_in)
            .push_opt("enabled_out", self.enabled_out)
            .push_opt("enabled_p2p", self.enabled_p2p);
        query
    }
}

/// Filters for the public P2P offer listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetOffersParams {
    pub offer_type: Option<OfferType>,
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
    pub coin: Option<String>,
    /// Only the caller's own offers
    pub my: Option<bool>,
    pub vip: Option<bool>,
}

impl GetOffersParams {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("type", self.offer_type)
            .push_opt("min", self.min)
            .push_opt("max", self.max)
            .push_opt("coin", self.coin.as_deref())
            .push_opt("my", self.my)
            .push_opt("vip", self.vip);
        query
    }
}

/// Filters for the caller's own offers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MyOffersParams {
    pub offer_type: Option<OfferType>,
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
    pub coin: Option<String>,
    pub vip: Option<bool>,
}

impl MyOffersParams {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("type", self.offer_type)
            .push_opt("min", self.min)
            .push_opt("max", self.max)
            .push_opt("coin", self.coin.as_deref())
            .push_opt("vip", self.vip);
        query
    }
}

/// One payment detail line attached to an offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetail {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl PaymentDetail {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: "text".to_string(),
            value: value.into(),
        }
    }
}

/// Offer payment details: structured lines, or text already serialized by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferDetails {
    Fields(Vec<PaymentDetail>),
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateOfferParams {
    pub offer_type: OfferType,
    pub coin: String,
    pub amount: Decimal,
    pub receive: Decimal,
    pub details: Option<OfferDetails>,
    pub only_kyc: bool,
    pub private: bool,
    pub promote_offer: bool,
    pub only_vip: bool,
}

impl CreateOfferParams {
    pub fn new(
        offer_type: OfferType,
        coin: impl Into<String>,
        amount: Decimal,
        receive: Decimal,
    ) -> Self {
        Self {
            offer_type,
            coin: coin.into(),
            amount,
            receive,
            details: None,
            only_kyc: false,
            private: false,
            promote_offer: false,
            only_vip: false,
        }
    }

    pub fn with_details(mut self, details: OfferDetails) -> Self {
        self.details = Some(details);
        self
    }
}

/// Wire form of an offer: details as JSON text, flags as `1`/`0`
#[derive(Serialize)]
struct CreateOfferBody<'a> {
    #[serde(rename = "type")]
    offer_type: OfferType,
    coin: &'a str,
    #[serde(with = "serde_helpers::amount")]
    amount: Decimal,
    #[serde(with = "serde_helpers::amount")]
    receive: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    only_kyc: u8,
    private: u8,
    promote_offer: u8,
    only_vip: u8,
}

impl Serialize for CreateOfferParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let details = match &self.details {
            Some(OfferDetails::Fields(fields)) => {
                Some(serde_json::to_string(fields).map_err(serde::ser::Error::custom)?)
            }
            Some(OfferDetails::Raw(text)) => Some(text.clone()),
            None => None,
        };

        CreateOfferBody {
            offer_type: self.offer_type,
            coin: &self.coin,
            amount: self.amount,
            receive: self.receive,
            details,
            only_kyc: u8::from(self.only_kyc),
            private: u8::from(self.private),
            promote_offer: u8::from(self.promote_offer),
            only_vip: u8::from(self.only_vip),
        }
        .serialize(serializer)
    }
}

/// Transaction search filters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchTransactionsParams {
    pub take: Option<u32>,
    pub user_id: Option<u64>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub status: Option<TransactionStatus>,
    pub remote_id: Option<String>,
    pub description: Option<String>,
}

impl SearchTransactionsParams {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("take", self.take)
            .push_opt("user_id", self.user_id)
            .push_date("start", self.start.as_ref())
            .push_date("end", self.end.as_ref())
            .push_opt("status", self.status)
            .push_opt("remote_id", self.remote_id.as_deref())
            .push_opt("description", self.description.as_deref());
        query
    }
}

/// Filters shared by the latest, detail and PDF transaction endpoints
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub status: Option<TransactionStatus>,
    pub remote_id: Option<String>,
    pub description: Option<String>,
}

impl TransactionFilter {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_date("start", self.start.as_ref())
            .push_date("end", self.end.as_ref())
            .push_opt("status", self.status)
            .push_opt("remote_id", self.remote_id.as_deref())
            .push_opt("description", self.description.as_deref());
        query
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferParams {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Recipient uuid, email or phone number
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTransactionParams {
    pub uuid: String,
    pub pin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopUpParams {
    pub pay_method: String,
    #[serde(with = "serde_helpers::amount")]
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawRequest {
    pub pay_method: String,
    #[serde(with = "serde_helpers::amount")]
    pub amount: Decimal,
    pub details: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Merchant app credentials carried by every `/v2` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCredentials {
    pub app_id: String,
    pub app_secret: String,
}

impl AppCredentials {
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceProduct {
    pub name: String,
    #[serde(with = "serde_helpers::amount")]
    pub price: Decimal,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateInvoiceParams {
    #[serde(flatten)]
    pub credentials: AppCredentials,
    #[serde(with = "serde_helpers::amount")]
    pub amount: Decimal,
    pub description: String,
    pub remote_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<InvoiceProduct>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeUserParams {
    #[serde(flatten)]
    pub credentials: AppCredentials,
    #[serde(with = "serde_helpers::amount")]
    pub amount: Decimal,
    pub user_uuid: String,
    pub description: String,
    pub remote_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizePaymentsParams {
    #[serde(flatten)]
    pub credentials: AppCredentials,
    pub remote_id: String,
    pub callback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyProductParams {
    pub uuid: String,
    #[serde(with = "serde_helpers::amount")]
    pub amount: Decimal,
    #[serde(with = "serde_helpers::amount")]
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentLinkParams {
    pub name: String,
    pub product_id: String,
    #[serde(with = "serde_helpers::amount")]
    pub amount: Decimal,
}
