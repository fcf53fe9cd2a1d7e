/*
[INPUT]:  Endpoint method/path, filter parameters, request payloads
[OUTPUT]: ApiRequest descriptors executed by QvaPayClient
[POS]:    HTTP layer - request description and query-string building
[UPDATE]: When adding body kinds or changing query serialization rules
*/

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;

use crate::http::Result;

/// Render a date filter as an ISO-8601 instant, e.g. `2023-01-01T00:00:00.000Z`
pub fn iso_instant(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Ordered query parameters; only defined values are ever added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl fmt::Display) -> &mut Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Append `key` only when `value` is present
    pub fn push_opt<T: fmt::Display>(&mut self, key: &'static str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn push_date(&mut self, key: &'static str, value: Option<&DateTime<Utc>>) -> &mut Self {
        self.push_opt(key, value.map(iso_instant))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Form-encoded query string without the leading `?`
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

/// File sent as a single multipart form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub field: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    /// Sent verbatim with the client's JSON content type
    Raw(String),
    File(FileUpload),
}

impl RequestBody {
    /// Short text form used in debug diagnostics
    pub(crate) fn describe(&self) -> Option<String> {
        match self {
            RequestBody::Empty => None,
            RequestBody::Json(value) => Some(value.to_string()),
            RequestBody::Raw(text) => Some(text.clone()),
            RequestBody::File(file) => Some(format!(
                "<multipart {}: {} ({} bytes)>",
                file.field,
                file.file_name,
                file.bytes.len()
            )),
        }
    }
}

/// Description of one API call: method, path, query, body and extra headers
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: QueryParams,
    body: RequestBody,
    headers: HeaderMap,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::default(),
            body: RequestBody::Empty,
            headers: HeaderMap::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Serialize `body` as the JSON payload
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn raw(mut self, body: impl Into<String>) -> Self {
        self.body = RequestBody::Raw(body.into());
        self
    }

    pub fn file(
        mut self,
        field: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.body = RequestBody::File(FileUpload {
            field: field.into(),
            file_name: file_name.into(),
            bytes,
        });
        self
    }

    /// Set an explicit header; an explicit `Authorization` disables token injection
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_params(&self) -> &QueryParams {
        &self.query
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub(crate) fn into_parts(self) -> (Method, String, QueryParams, RequestBody, HeaderMap) {
        (self.method, self.path, self.query, self.body, self.headers)
    }
}
