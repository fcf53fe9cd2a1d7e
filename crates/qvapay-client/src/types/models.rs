/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs shared across endpoint responses
[POS]:    Data layer - common entities, pagination and lenient field decoding
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::OfferType;

/// Field the server emits sometimes as a JSON number, sometimes as a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(serde_json::Number),
    String(String),
}

impl NumberOrString {
    /// Numeric value, parsing the string form when needed
    pub fn as_decimal(&self) -> Option<Decimal> {
        let raw = match self {
            NumberOrString::Number(number) => number.to_string(),
            NumberOrString::String(text) => text.trim().to_string(),
        };
        serde_helpers::parse_decimal(&raw)
    }
}

impl fmt::Display for NumberOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberOrString::Number(number) => write!(f, "{number}"),
            NumberOrString::String(text) => f.write_str(text),
        }
    }
}

impl From<&str> for NumberOrString {
    fn from(value: &str) -> Self {
        NumberOrString::String(value.to_string())
    }
}

impl From<i64> for NumberOrString {
    fn from(value: i64) -> Self {
        NumberOrString::Number(value.into())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLink {
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}

/// Paginated listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub current_page: u32,
    pub data: Vec<T>,
    pub first_page_url: String,
    pub from: Option<u32>,
    pub last_page: u32,
    pub last_page_url: String,
    #[serde(default)]
    pub links: Vec<PageLink>,
    pub next_page_url: Option<String>,
    pub path: String,
    pub per_page: u32,
    pub prev_page_url: Option<String>,
    pub to: Option<u32>,
    pub total: u32,
}

/// Authenticated user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Me {
    pub uuid: String,
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub profile_photo_path: String,
    #[serde(with = "serde_helpers::amount")]
    pub balance: Decimal,
    #[serde(default)]
    pub complete_name: String,
    #[serde(default)]
    pub name_verified: String,
    #[serde(default)]
    pub profile_photo_url: String,
    #[serde(default)]
    pub average_rating: String,
}

/// Registered merchant application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    pub uuid: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default, alias = "desc")]
    pub description: String,
    #[serde(default)]
    pub callback: String,
    #[serde(default)]
    pub success_url: String,
    #[serde(default)]
    pub cancel_url: String,
    #[serde(default, with = "serde_helpers::flag")]
    pub active: bool,
    #[serde(default, with = "serde_helpers::flag")]
    pub enabled: bool,
    #[serde(default, with = "serde_helpers::flag")]
    pub allowed_payment_auth: bool,
    #[serde(default, with = "serde_helpers::flag")]
    pub card: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Compact coin record embedded in offers and withdrawals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSummary {
    pub id: u64,
    pub coins_categories_id: u64,
    pub name: String,
    pub logo: String,
    pub tick: String,
    pub fee_in: String,
    pub fee_out: String,
    pub min_in: String,
    pub min_out: String,
    pub price: NumberOrString,
}

/// Public profile of the other side of an exchange
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_verified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "serde_helpers::flag_option")]
    pub kyc: Option<bool>,
}

/// P2P offer as listed, created or applied to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct P2POffer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub uuid: String,
    pub user_id: u64,
    #[serde(rename = "type")]
    pub offer_type: OfferType,
    pub coin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_id: Option<u64>,
    #[serde(with = "serde_helpers::amount")]
    pub amount: Decimal,
    #[serde(with = "serde_helpers::amount")]
    pub receive: Decimal,
    #[serde(default, with = "serde_helpers::flag")]
    pub only_kyc: bool,
    #[serde(default, with = "serde_helpers::flag")]
    pub private: bool,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSummary {
    pub logo: String,
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionWallet {
    pub transaction_id: u64,
    pub invoice_id: String,
    pub wallet_type: String,
    pub wallet: String,
    pub value: String,
    pub received: String,
    pub txid: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub uuid: String,
    pub name: String,
    pub lead: String,
    pub price: String,
    pub logo: String,
    pub sublogo: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceBuy {
    pub service_id: u64,
    pub service_data: String,
    pub status: String,
    pub amount: String,
    pub transaction_id: u64,
    pub created_at: String,
    pub updated_at: String,
    pub service: Service,
}

/// Balance movement between users, apps or services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub uuid: String,
    pub app_id: u64,
    #[serde(with = "serde_helpers::amount")]
    pub amount: Decimal,
    pub description: String,
    pub remote_id: NumberOrString,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<AppSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_by: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_owner: Option<AppSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Profile>,
    #[serde(default)]
    pub wallet: Option<TransactionWallet>,
    #[serde(default)]
    pub servicebuy: Option<ServiceBuy>,
}

/// Withdrawal operation with its backing transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withdraw {
    pub id: u64,
    pub user_id: u64,
    pub transaction_id: u64,
    #[serde(with = "serde_helpers::amount")]
    pub amount: Decimal,
    #[serde(with = "serde_helpers::amount")]
    pub receive: Decimal,
    pub payment_method: String,
    pub details: String,
    pub status: String,
    pub tx_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Transaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin: Option<CoinSummary>,
}

/// Product sold in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub uuid: String,
    pub name: String,
    pub lead: String,
    pub price: NumberOrString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublogo: Option<String>,
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_photo_url: Option<String>,
}

/// Store purchase made by the authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: u64,
    pub service_id: u64,
    pub service_data: String,
    #[serde(default)]
    pub notes: String,
    pub status: String,
    #[serde(with = "serde_helpers::amount")]
    pub amount: Decimal,
    pub transaction_id: u64,
    #[serde(default)]
    pub notified: Option<NumberOrString>,
    pub created_at: String,
    pub updated_at: String,
}

pub(crate) mod serde_helpers {
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn parse_decimal(raw: &str) -> Option<Decimal> {
        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .ok()
    }

    /// Money amount: read from a JSON number or numeric string, written as a JSON number
    pub mod amount {
        use super::*;

        pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            if value.fract().is_zero() {
                if let Some(integer) = value.to_i64() {
                    return serializer.serialize_i64(integer);
                }
            }
            match value.to_f64() {
                Some(float) => serializer.serialize_f64(float),
                None => Err(serde::ser::Error::custom(format!("amount out of range: {value}"))),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value = Value::deserialize(deserializer)?;
            let raw = match &value {
                Value::Number(number) => number.to_string(),
                Value::String(text) => text.trim().to_string(),
                other => {
                    return Err(serde::de::Error::custom(format!("invalid amount: {other}")));
                }
            };
            parse_decimal(&raw)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid amount: {raw}")))
        }
    }

    /// Boolean sent by the server as `true`/`false`, `1`/`0` or `"1"`/`"0"`
    pub mod flag {
        use super::*;

        pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_bool(*value)
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value = Value::deserialize(deserializer)?;
            flag_from_value(&value).map_err(serde::de::Error::custom)
        }
    }

    pub mod flag_option {
        use super::*;

        pub fn serialize<S>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(flag) => serializer.serialize_bool(*flag),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value = Value::deserialize(deserializer)?;
            if value.is_null() {
                return Ok(None);
            }
            flag_from_value(&value)
                .map(Some)
                .map_err(serde::de::Error::custom)
        }
    }

    fn flag_from_value(value: &Value) -> Result<bool, String> {
        match value {
            Value::Null => Ok(false),
            Value::Bool(flag) => Ok(*flag),
            Value::Number(number) => Ok(number.as_f64().is_some_and(|n| n != 0.0)),
            Value::String(text) => match text.trim() {
                "1" | "true" => Ok(true),
                "0" | "false" | "" => Ok(false),
                other => Err(format!("invalid flag value: {other}")),
            },
            other => Err(format!("invalid flag value: {other}")),
        }
    }
}
