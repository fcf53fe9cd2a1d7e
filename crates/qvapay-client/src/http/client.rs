/*
[INPUT]:  Client configuration (base URL, token, debug flag, timeouts), ApiRequest descriptors
[OUTPUT]: Decoded API responses or classified QvaPayError values
[POS]:    HTTP layer - core client implementation and auth-token slot
[UPDATE]: When adding connection options or changing request/response handling
*/

use std::env;
use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::trace;

use crate::http::debug::{DebugSink, ErrorRecord, RequestRecord, ResponseRecord, TracingSink, redact_header};
use crate::http::error::classify;
use crate::http::request::{ApiRequest, QueryParams, RequestBody};
use crate::http::{QvaPayError, Result};

/// Production origin of the QvaPay API
pub const DEFAULT_BASE_URL: &str = "https://api.qvapay.com";

pub const ENV_BASE_URL: &str = "QVAPAY_BASE_URL";
pub const ENV_AUTH_TOKEN: &str = "QVAPAY_AUTH_TOKEN";
pub const ENV_DEBUG: &str = "QVAPAY_DEBUG";
pub const ENV_TIMEOUT_SECS: &str = "QVAPAY_TIMEOUT_SECS";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub auth_token: Option<String>,
    pub debug: bool,
    /// Total request timeout; unset leaves reqwest's default (none)
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_token: None,
            debug: false,
            timeout: None,
            connect_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Default configuration overridden by `QVAPAY_*` environment variables
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Apply `QVAPAY_*` environment overrides on top of this configuration
    pub fn with_env(mut self) -> Self {
        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            if !base_url.trim().is_empty() {
                self.base_url = base_url.trim().to_string();
            }
        }

        if let Ok(token) = env::var(ENV_AUTH_TOKEN) {
            if !token.trim().is_empty() {
                self.auth_token = Some(token.trim().to_string());
            }
        }

        if let Ok(debug) = env::var(ENV_DEBUG) {
            self.debug = matches!(
                debug.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        if let Some(secs) = env::var(ENV_TIMEOUT_SECS)
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
        {
            self.timeout = Some(Duration::from_secs(secs));
        }

        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }
}

/// Method and URL of an exchange, kept for diagnostics
struct Exchange {
    method: String,
    url: String,
    request_body: Option<String>,
}

/// Main HTTP client for the QvaPay API.
///
/// Owns its bearer token; every request without an explicit `Authorization`
/// header carries `Bearer <token>` while a token is set.
pub struct QvaPayClient {
    http_client: Client,
    base_url: Url,
    default_headers: HeaderMap,
    auth_token: RwLock<Option<String>>,
    debug: bool,
    debug_sink: Arc<dyn DebugSink>,
}

impl fmt::Debug for QvaPayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QvaPayClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_auth_token", &self.auth_token().is_some())
            .field("debug", &self.debug)
            .finish()
    }
}

impl QvaPayClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(default_headers.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(&config.base_url)?,
            default_headers,
            auth_token: RwLock::new(config.auth_token),
            debug: config.debug,
            debug_sink: Arc::new(TracingSink),
        })
    }

    /// Replace the sink receiving debug diagnostics
    pub fn with_debug_sink(mut self, sink: Arc<dyn DebugSink>) -> Self {
        self.debug_sink = sink;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Replace the stored bearer token
    pub fn set_auth_token(&self, token: impl Into<String>) {
        let mut guard = self
            .auth_token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(token.into());
    }

    /// Remove the stored bearer token
    pub fn clear_auth_token(&self) {
        let mut guard = self
            .auth_token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = None;
    }

    /// Get the stored bearer token if set
    pub fn auth_token(&self) -> Option<String> {
        let guard = self
            .auth_token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.clone()
    }

    /// Execute `request` and decode the JSON response body as `T`.
    ///
    /// An empty body decodes as JSON `null`, a non-JSON body as a JSON string.
    pub async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let (exchange, bytes) = self.execute(request).await?;
        let value = parse_payload(&bytes).unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|err| {
            let err = QvaPayError::from(err);
            self.report(&exchange, &err, Some(body_text(&bytes)), None);
            err
        })
    }

    /// Execute `request` and hand back the raw response bytes
    pub async fn request_bytes(&self, request: ApiRequest) -> Result<Vec<u8>> {
        let (_, bytes) = self.execute(request).await?;
        Ok(bytes)
    }

    /// Decode a body already fetched from `method path`; failures are reported like in `request`
    pub(crate) fn decode_value<T: DeserializeOwned>(
        &self,
        method: &Method,
        path: &str,
        value: Value,
    ) -> Result<T> {
        let body = value.to_string();
        serde_json::from_value(value).map_err(|err| {
            let err = QvaPayError::from(err);
            let url = self
                .endpoint_url(path, &QueryParams::default())
                .map(|url| url.to_string())
                .unwrap_or_else(|_| path.to_string());
            let exchange = Exchange {
                method: method.to_string(),
                url,
                request_body: None,
            };
            self.report(&exchange, &err, Some(body), None);
            err
        })
    }

    /// Build full URL for an endpoint path, ignoring leading slashes on the path
    fn endpoint_url(&self, path: &str, query: &QueryParams) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/{}", path.trim_start_matches('/')))?;
        if !query.is_empty() {
            url.set_query(Some(&query.to_query_string()));
        }
        Ok(url)
    }

    async fn execute(&self, request: ApiRequest) -> Result<(Exchange, Vec<u8>)> {
        let (method, path, query, body, mut headers) = request.into_parts();
        let mut exchange = Exchange {
            method: method.to_string(),
            url: path.clone(),
            request_body: body.describe(),
        };

        let url = match self.endpoint_url(&path, &query) {
            Ok(url) => url,
            Err(err) => {
                self.report(&exchange, &err, None, None);
                return Err(err);
            }
        };
        exchange.url = url.to_string();

        if !headers.contains_key(AUTHORIZATION) {
            if let Some(token) = self.auth_token() {
                match HeaderValue::from_str(&format!("Bearer {token}")) {
                    Ok(value) => {
                        headers.insert(AUTHORIZATION, value);
                    }
                    Err(err) => {
                        let err = QvaPayError::from_message(format!("Invalid auth token: {err}"));
                        self.report(&exchange, &err, None, None);
                        return Err(err);
                    }
                }
            }
        }

        if self.debug {
            self.debug_sink.request(&RequestRecord {
                method: exchange.method.clone(),
                url: exchange.url.clone(),
                headers: self.describe_headers(&headers),
                body: exchange.request_body.clone(),
            });
        }
        trace!(method = %exchange.method, url = %exchange.url, "sending request");

        let builder = self.http_client.request(method, url).headers(headers);
        let builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Raw(text) => builder.body(text),
            RequestBody::File(file) => {
                let part = Part::bytes(file.bytes).file_name(file.file_name);
                builder.multipart(Form::new().part(file.field, part))
            }
        };

        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => {
                let source = err.to_string();
                let classified = classify(err.status().map(|s| s.as_u16()), None, &source);
                self.report(&exchange, &classified, None, Some(source));
                return Err(classified);
            }
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(err) => {
                let source = err.to_string();
                let classified = classify(Some(status.as_u16()), None, &source);
                self.report(&exchange, &classified, None, Some(source));
                return Err(classified);
            }
        };

        if !status.is_success() {
            let fallback = format!("Request failed with status code {}", status.as_u16());
            let err = classify(Some(status.as_u16()), parse_payload(&bytes), &fallback);
            self.report(&exchange, &err, Some(body_text(&bytes)), None);
            return Err(err);
        }

        if self.debug {
            self.debug_sink.response(&ResponseRecord {
                method: exchange.method.clone(),
                url: exchange.url.clone(),
                status: status.as_u16(),
                body: body_text(&bytes),
            });
        }

        Ok((exchange, bytes))
    }

    fn describe_headers(&self, explicit: &HeaderMap) -> Vec<(String, String)> {
        let mut merged = self.default_headers.clone();
        merged.extend(explicit.iter().map(|(name, value)| (name.clone(), value.clone())));
        merged
            .iter()
            .map(|(name, value)| {
                let value = value.to_str().unwrap_or("<binary>");
                (name.to_string(), redact_header(name.as_str(), value))
            })
            .collect()
    }

    fn report(
        &self,
        exchange: &Exchange,
        err: &QvaPayError,
        response_body: Option<String>,
        source: Option<String>,
    ) {
        if !self.debug {
            return;
        }
        self.debug_sink.error(&ErrorRecord {
            message: err.to_string(),
            status: err.status_code(),
            code: err.code().map(str::to_string),
            method: exchange.method.clone(),
            url: exchange.url.clone(),
            request_body: exchange.request_body.clone(),
            response_body,
            source,
        });
    }
}

/// Decode a response body leniently: empty -> None, JSON -> value, other text -> string
fn parse_payload(bytes: &[u8]) -> Option<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(String::from_utf8_lossy(bytes).into_owned())),
    }
}

fn body_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => format!("<{} bytes>", bytes.len()),
    }
}
