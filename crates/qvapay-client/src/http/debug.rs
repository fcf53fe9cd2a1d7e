/*
[INPUT]:  Request/response/error details captured by the client in debug mode
[OUTPUT]: Diagnostic records delivered to a pluggable sink (tracing by default)
[POS]:    HTTP layer - debug diagnostics hook
[UPDATE]: When diagnostic record fields or the default sink output change
*/

use std::fmt;

use tracing::{debug, error};

/// Outgoing request as seen right before it is sent
#[derive(Debug, Clone, PartialEq)]
pub struct RequestRecord {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Successful response as received
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseRecord {
    pub method: String,
    pub url: String,
    pub status: u16,
    pub body: String,
}

/// Structured diagnostic for a classified failure
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    pub message: String,
    pub status: Option<u16>,
    pub code: Option<String>,
    pub method: String,
    pub url: String,
    pub request_body: Option<String>,
    pub response_body: Option<String>,
    /// Display text of the underlying transport error, when there was one
    pub source: Option<String>,
}

/// Receives diagnostics while the client runs in debug mode.
///
/// Implementations must not panic; they only observe and never change how a
/// request completes.
pub trait DebugSink: Send + Sync + fmt::Debug {
    fn request(&self, record: &RequestRecord);
    fn response(&self, record: &ResponseRecord);
    fn error(&self, record: &ErrorRecord);
}

/// Default sink: emits `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DebugSink for TracingSink {
    fn request(&self, record: &RequestRecord) {
        debug!(
            method = %record.method,
            url = %record.url,
            headers = ?record.headers,
            body = record.body.as_deref().unwrap_or(""),
            "[QvaPay Debug] request"
        );
    }

    fn response(&self, record: &ResponseRecord) {
        debug!(
            method = %record.method,
            url = %record.url,
            status = record.status,
            body = %record.body,
            "[QvaPay Debug] response"
        );
    }

    fn error(&self, record: &ErrorRecord) {
        error!(
            message = %record.message,
            status = ?record.status,
            code = ?record.code,
            method = %record.method,
            url = %record.url,
            request_body = ?record.request_body,
            response_body = ?record.response_body,
            source = ?record.source,
            "[QvaPay Error]"
        );
    }
}

/// Mask bearer credentials before they reach a diagnostic record
pub(crate) fn redact_header(name: &str, value: &str) -> String {
    if name.eq_ignore_ascii_case("authorization") {
        match value.split_once(' ') {
            Some((scheme, _)) => format!("{scheme} ***"),
            None => "***".to_string(),
        }
    } else {
        value.to_string()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Sink that stores every record for later assertions
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub requests: Mutex<Vec<RequestRecord>>,
        pub responses: Mutex<Vec<ResponseRecord>>,
        pub errors: Mutex<Vec<ErrorRecord>>,
    }

    impl DebugSink for RecordingSink {
        fn request(&self, record: &RequestRecord) {
            self.requests.lock().unwrap().push(record.clone());
        }

        fn response(&self, record: &ResponseRecord) {
            self.responses.lock().unwrap().push(record.clone());
        }

        fn error(&self, record: &ErrorRecord) {
            self.errors.lock().unwrap().push(record.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_authorization_header() {
        assert_eq!(redact_header("Authorization", "Bearer secret"), "Bearer ***");
        assert_eq!(redact_header("authorization", "secret"), "***");
        assert_eq!(redact_header("accept", "application/json"), "application/json");
    }
}
