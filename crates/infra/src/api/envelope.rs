//! Request envelope consumed by the API pipeline.

use reqwest::Method;
use serde_json::Value;

/// A single outbound API request: target path, HTTP verb, optional query
/// parameters, and an optional JSON body.
///
/// Envelopes are built once by the caller, are immutable afterwards, and are
/// consumed exactly once by [`ApiClient::send`](super::ApiClient::send).
#[derive(Debug, Clone)]
pub struct RequestEnvelope {
    path: String,
    method: Method,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl RequestEnvelope {
    /// Create an envelope with an explicit verb.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { path: path.into(), method, query: Vec::new(), body: None }
    }

    /// GET envelope.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST envelope.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT envelope.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// PATCH envelope.
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// DELETE envelope.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn json_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Target path, relative to the configured base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// HTTP verb.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Decompose the envelope for dispatch.
    pub(crate) fn into_parts(self) -> (Method, String, Vec<(String, String)>, Option<Value>) {
        (self.method, self.path, self.query, self.body)
    }
}
