/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - endpoint response bodies
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::models::{App, CoinSummary, Me, NumberOrString, P2POffer, Profile, serde_helpers};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub me: Me,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppsResponse {
    pub result: String,
    pub apps: Vec<App>,
}

/// Freshly created app, including its secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApp {
    pub uuid: String,
    pub secret: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCreateResponse {
    pub result: String,
    pub app: NewApp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: u64,
    pub coins_categories_id: u64,
    pub name: String,
    pub logo: String,
    pub tick: String,
    pub fee_in: String,
    pub fee_out: String,
    pub min_in: String,
    pub min_out: String,
    #[serde(default)]
    pub working_data: String,
    #[serde(with = "serde_helpers::flag")]
    pub enabled_in: bool,
    #[serde(with = "serde_helpers::flag")]
    pub enabled_out: bool,
    #[serde(with = "serde_helpers::flag")]
    pub enabled_p2p: bool,
    pub price: NumberOrString,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Coin category with its coins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinsResponse {
    pub id: u64,
    pub name: String,
    pub logo: String,
    pub coins: Vec<Coin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinV2 {
    pub id: NumberOrString,
    pub name: String,
    pub tick: String,
    pub min_in: String,
    pub fee_in: String,
    pub min_out: String,
    pub fee_out: String,
    #[serde(with = "serde_helpers::flag")]
    pub enabled_in: bool,
    #[serde(with = "serde_helpers::flag")]
    pub enabled_out: bool,
    #[serde(with = "serde_helpers::flag")]
    pub enabled_p2p: bool,
    pub coins_categories_id: NumberOrString,
    pub price: NumberOrString,
    pub logo: String,
    #[serde(default)]
    pub network: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinCategory {
    pub id: u64,
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetail {
    pub id: u64,
    pub coins_categories_id: u64,
    pub name: String,
    pub logo: String,
    pub tick: String,
    pub fee_in: String,
    pub fee_out: String,
    pub min_in: String,
    pub min_out: String,
    pub max_in: NumberOrString,
    pub max_out: NumberOrString,
    #[serde(default)]
    pub working_data: String,
    #[serde(with = "serde_helpers::flag")]
    pub enabled_in: bool,
    #[serde(with = "serde_helpers::flag")]
    pub enabled_out: bool,
    #[serde(with = "serde_helpers::flag")]
    pub enabled_p2p: bool,
    pub price: NumberOrString,
    pub coin_category: CoinCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct P2PAverageResponse {
    pub name: String,
    pub tick: String,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedPairsAverageResponse {
    pub average: f64,
    pub average_buy: f64,
    pub average_sell: f64,
    pub median_buy: f64,
    pub median_sell: f64,
    #[serde(default)]
    pub offers: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationsCount {
    pub buy: u64,
    pub sell: u64,
}

/// Full offer view with counterparties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct P2POfferDetails {
    #[serde(flatten)]
    pub offer: P2POffer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin_data: Option<CoinSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Profile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub user_id: u64,
    pub text: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct P2PChatResponse {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Reply to creating, applying to or messaging an offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferResponse {
    pub msg: String,
    pub p2p: P2POffer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeExtended {
    pub uuid: String,
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default, with = "serde_helpers::flag")]
    pub kyc: bool,
    #[serde(default, alias = "goldenCheck", with = "serde_helpers::flag")]
    pub golden_check: bool,
    #[serde(default)]
    pub completed_p2p: u64,
    #[serde(default)]
    pub ranking_position: u64,
    #[serde(default)]
    pub sales: u64,
    #[serde(default)]
    pub complete_name: String,
    #[serde(default)]
    pub name_verified: String,
    #[serde(default)]
    pub cover_photo_url: String,
    #[serde(default)]
    pub profile_photo_url: String,
    #[serde(default)]
    pub average_rating: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserResponse {
    pub uuid: String,
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub logo: String,
    #[serde(with = "serde_helpers::amount")]
    pub balance: Decimal,
    #[serde(default, with = "serde_helpers::flag")]
    pub kyc: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopUpResponse {
    pub response: i64,
    pub coin: String,
    pub value: NumberOrString,
    pub wallet: String,
    pub price: NumberOrString,
    pub transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWithdrawResponse {
    pub id: u64,
    #[serde(alias = "userId")]
    pub user_id: u64,
    pub transaction_id: u64,
    #[serde(with = "serde_helpers::amount")]
    pub amount: Decimal,
    #[serde(with = "serde_helpers::amount")]
    pub receive: Decimal,
    pub payment_method: String,
    pub details: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSearchResult {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub lastname: String,
    pub username: String,
    #[serde(default, with = "serde_helpers::flag")]
    pub kyc: bool,
    #[serde(default, with = "serde_helpers::flag")]
    pub golden_check: bool,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub cover: String,
}

/// Merchant app as seen with its credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppInfoResponse {
    pub user_id: u64,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub callback: String,
    #[serde(default)]
    pub success_url: String,
    #[serde(default)]
    pub cancel_url: String,
    #[serde(default)]
    pub logo: String,
    pub uuid: String,
    #[serde(default, with = "serde_helpers::flag")]
    pub active: bool,
    #[serde(default, with = "serde_helpers::flag")]
    pub enabled: bool,
    #[serde(default, with = "serde_helpers::flag")]
    pub card: bool,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub app_photo_url: String,
}

/// Invoice, charge or authorization issued for a merchant app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantTransaction {
    pub app_id: NumberOrString,
    #[serde(with = "serde_helpers::amount")]
    pub amount: Decimal,
    pub description: String,
    pub remote_id: NumberOrString,
    #[serde(default)]
    pub signed: i64,
    #[serde(rename = "transation_uuid", alias = "transaction_uuid")]
    pub transaction_uuid: String,
    pub url: String,
    #[serde(rename = "signedUrl", alias = "signed_url", default)]
    pub signed_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLink {
    pub name: String,
    pub product_id: String,
    #[serde(with = "serde_helpers::amount")]
    pub amount: Decimal,
    pub created_at: String,
    pub updated_at: String,
    pub payment_link_url: String,
}
