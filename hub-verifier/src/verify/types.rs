//! Request and response types for the verification handshake.
//!
//! These are deliberately free of any web framework so the handler can be
//! driven from tests or any other host.

use std::collections::BTreeMap;

use axum::http::{HeaderMap, Uri};
pub use axum::http::Method;

/// Query parameter carrying the subscription mode.
pub const MODE_PARAM: &str = "hub.mode";

/// Query parameter carrying the shared verify token.
pub const VERIFY_TOKEN_PARAM: &str = "hub.verify_token";

/// Query parameter carrying the challenge to echo back.
pub const CHALLENGE_PARAM: &str = "hub.challenge";

/// The only mode value that starts a handshake.
pub const SUBSCRIBE_MODE: &str = "subscribe";

// =============================================================================
// Incoming Request
// =============================================================================

/// An inbound call, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingRequest {
    method: Method,
    query: BTreeMap<String, String>,
    headers: BTreeMap<String, String>,
}

impl IncomingRequest {
    /// Request with no query parameters or headers.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            query: BTreeMap::new(),
            headers: BTreeMap::new(),
        }
    }

    /// Builder: set a query parameter, replacing any earlier value.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Builder: set a header. Names are case-insensitive and stored lower-cased.
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    /// Build a request from a raw, still-encoded query string.
    ///
    /// Values are form-url-decoded; bytes that are not valid UTF-8 become
    /// U+FFFD. When a key repeats, the first occurrence wins.
    pub fn from_query_string(method: Method, raw_query: &str) -> Self {
        let mut query = BTreeMap::new();
        for (key, value) in url::form_urlencoded::parse(raw_query.as_bytes()) {
            query
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }

        Self {
            method,
            query,
            headers: BTreeMap::new(),
        }
    }

    /// Build a request from HTTP parts.
    ///
    /// Header values that are not visible ASCII are skipped.
    pub fn from_http(method: Method, uri: &Uri, headers: &HeaderMap) -> Self {
        let mut request = Self::from_query_string(method, uri.query().unwrap_or_default());
        for (name, value) in headers {
            if let Ok(value) = value.to_str() {
                request
                    .headers
                    .entry(name.as_str().to_string())
                    .or_insert_with(|| value.to_string());
            }
        }
        request
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    pub fn query_params(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }
}

// =============================================================================
// Handler Response
// =============================================================================

/// A fully formed response, produced fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl HandlerResponse {
    /// Response with a `content-type` header and the given body.
    pub fn new(status_code: u16, content_type: &str, body: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), content_type.to_string());
        Self {
            status_code,
            headers,
            body: body.into(),
        }
    }

    /// Builder: add or replace a header.
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}
