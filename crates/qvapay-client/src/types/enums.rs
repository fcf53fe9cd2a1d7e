/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - closed value sets used by requests and responses
[UPDATE]: When the server adds currency codes or status values
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferType {
    Buy,
    Sell,
}

impl OfferType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferType::Buy => "buy",
            OfferType::Sell => "sell",
        }
    }
}

impl fmt::Display for OfferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Paid,
    Pending,
    #[serde(alias = "canceled")]
    Cancelled,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Paid => "paid",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Currency codes accepted by the P2P market filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnabledCurrency {
    Sol,
    Sberbank,
    Zelle,
    Tropipay,
    BankCup,
    Usdcash,
    BankEur,
    Eurcash,
    Clasica,
    Etecsa,
    BankMlc,
    Usdt,
    Usdterc20,
    Qvapay,
    Bandecprepago,
    Bolsatm,
    Paypal,
    Neomoon,
    Cupcash,
    Remesita,
    Usdtbsc,
}

impl EnabledCurrency {
    pub const ALL: [EnabledCurrency; 21] = [
        EnabledCurrency::Sol,
        EnabledCurrency::Sberbank,
        EnabledCurrency::Zelle,
        EnabledCurrency::Tropipay,
        EnabledCurrency::BankCup,
        EnabledCurrency::Usdcash,
        EnabledCurrency::BankEur,
        EnabledCurrency::Eurcash,
        EnabledCurrency::Clasica,
        EnabledCurrency::Etecsa,
        EnabledCurrency::BankMlc,
        EnabledCurrency::Usdt,
        EnabledCurrency::Usdterc20,
        EnabledCurrency::Qvapay,
        EnabledCurrency::Bandecprepago,
        EnabledCurrency::Bolsatm,
        EnabledCurrency::Paypal,
        EnabledCurrency::Neomoon,
        EnabledCurrency::Cupcash,
        EnabledCurrency::Remesita,
        EnabledCurrency::Usdtbsc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnabledCurrency::Sol => "SOL",
            EnabledCurrency::Sberbank => "SBERBANK",
            EnabledCurrency::Zelle => "ZELLE",
            EnabledCurrency::Tropipay => "TROPIPAY",
            EnabledCurrency::BankCup => "BANK_CUP",
            EnabledCurrency::Usdcash => "USDCASH",
            EnabledCurrency::BankEur => "BANK_EUR",
            EnabledCurrency::Eurcash => "EURCASH",
            EnabledCurrency::Clasica => "CLASICA",
            EnabledCurrency::Etecsa => "ETECSA",
            EnabledCurrency::BankMlc => "BANK_MLC",
            EnabledCurrency::Usdt => "USDT",
            EnabledCurrency::Usdterc20 => "USDTERC20",
            EnabledCurrency::Qvapay => "QVAPAY",
            EnabledCurrency::Bandecprepago => "BANDECPREPAGO",
            EnabledCurrency::Bolsatm => "BOLSATM",
            EnabledCurrency::Paypal => "PAYPAL",
            EnabledCurrency::Neomoon => "NEOMOON",
            EnabledCurrency::Cupcash => "CUPCASH",
            EnabledCurrency::Remesita => "REMESITA",
            EnabledCurrency::Usdtbsc => "USDTBSC",
        }
    }
}

impl fmt::Display for EnabledCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for EnabledCurrency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnabledCurrency::ALL
            .into_iter()
            .find(|currency| currency.as_str() == s)
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}
