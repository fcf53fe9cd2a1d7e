/*
[INPUT]:  Failed HTTP exchanges (status, response payload, transport message)
[OUTPUT]: QvaPayError - generic API error or two-factor signal
[POS]:    Error handling layer - unified error type for entire crate
[UPDATE]: When the server error payload format or sentinel codes change
*/

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Server error code signalling that a second authentication factor is needed
pub const TWO_FACTOR_REQUIRED: &str = "TWO_FACTOR_REQUIRED";

/// Message used when neither the payload nor the transport supplies one
pub const DEFAULT_ERROR_MESSAGE: &str = "API error";

/// Discriminant of [`QvaPayError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Api,
    TwoFactorRequired,
}

/// Main error type for the QvaPay client
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QvaPayError {
    /// Any failed exchange not flagged as requiring a second factor
    #[error("{message}")]
    Api {
        message: String,
        status_code: Option<u16>,
        data: Option<Value>,
        code: Option<String>,
    },

    /// The server demands a second authentication factor
    #[error("{info}")]
    TwoFactorRequired { info: String },
}

/// Result type alias for QvaPay operations
pub type Result<T> = std::result::Result<T, QvaPayError>;

impl QvaPayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QvaPayError::Api { .. } => ErrorKind::Api,
            QvaPayError::TwoFactorRequired { .. } => ErrorKind::TwoFactorRequired,
        }
    }

    /// Check if the server asked for a second authentication factor
    pub fn is_two_factor(&self) -> bool {
        matches!(self, QvaPayError::TwoFactorRequired { .. })
    }

    /// HTTP status of the failed exchange, if there was a response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            QvaPayError::Api { status_code, .. } => *status_code,
            QvaPayError::TwoFactorRequired { .. } => None,
        }
    }

    /// Machine error code supplied by the server
    pub fn code(&self) -> Option<&str> {
        match self {
            QvaPayError::Api { code, .. } => code.as_deref(),
            QvaPayError::TwoFactorRequired { .. } => Some(TWO_FACTOR_REQUIRED),
        }
    }

    /// Raw response payload, if any
    pub fn data(&self) -> Option<&Value> {
        match self {
            QvaPayError::Api { data, .. } => data.as_ref(),
            QvaPayError::TwoFactorRequired { .. } => None,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        QvaPayError::Api {
            message: message.into(),
            status_code: Some(status.as_u16()),
            data: None,
            code: None,
        }
    }

    /// Wrap a failure that never reached the server, keeping its message
    pub fn from_message(message: impl Into<String>) -> Self {
        QvaPayError::Api {
            message: message.into(),
            status_code: None,
            data: None,
            code: None,
        }
    }
}

impl From<reqwest::Error> for QvaPayError {
    fn from(err: reqwest::Error) -> Self {
        QvaPayError::Api {
            message: err.to_string(),
            status_code: err.status().map(|status| status.as_u16()),
            data: None,
            code: None,
        }
    }
}

impl From<serde_json::Error> for QvaPayError {
    fn from(err: serde_json::Error) -> Self {
        QvaPayError::from_message(err.to_string())
    }
}

impl From<url::ParseError> for QvaPayError {
    fn from(err: url::ParseError) -> Self {
        QvaPayError::from_message(err.to_string())
    }
}

/// Turn a failed exchange into exactly one typed error.
///
/// `payload` is the decoded response body (`None` when there was no response
/// or the body was empty). `fallback` is the transport's own failure message.
pub fn classify(status: Option<u16>, payload: Option<Value>, fallback: &str) -> QvaPayError {
    let fallback = if fallback.is_empty() {
        DEFAULT_ERROR_MESSAGE
    } else {
        fallback
    };
    let payload = payload.filter(|value| !value.is_null());

    let message = payload
        .as_ref()
        .map(|value| message_from_payload(value, fallback))
        .unwrap_or_else(|| fallback.to_string());
    let code = payload.as_ref().and_then(code_from_payload);

    if code.as_deref() == Some(TWO_FACTOR_REQUIRED) {
        return QvaPayError::TwoFactorRequired { info: message };
    }

    QvaPayError::Api {
        message,
        status_code: status,
        data: payload,
        code,
    }
}

fn message_from_payload(payload: &Value, fallback: &str) -> String {
    match payload {
        Value::Object(map) => ["error", "message"]
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(truthy_text)
            .unwrap_or_else(|| fallback.to_string()),
        Value::Array(_) => fallback.to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Text of a truthy field; `null`, `false`, `0` and `""` yield nothing
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

fn code_from_payload(payload: &Value) -> Option<String> {
    match payload.get("code")? {
        Value::String(code) => Some(code.clone()),
        Value::Number(code) => Some(code.to_string()),
        _ => None,
    }
}
