//! Request type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A concrete HTTP request received by the service.
///
/// The builder lower-cases header names and upper-cases the method.
/// Header lookups are case-insensitive either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedRequest {
    /// HTTP method, e.g. "GET"
    pub method: String,

    /// Path plus optional query string, e.g. "/orders?page=2"
    pub url: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,

    #[serde(default)]
    pub body: String,

    /// When the request was received (Unix timestamp milliseconds).
    /// Zero when unknown.
    #[serde(default)]
    pub logged_at_ms: i64,
}

impl LoggedRequest {
    /// URL without the query string
    pub fn path(&self) -> &str {
        match self.url.find('?') {
            Some(idx) => &self.url[..idx],
            None => &self.url,
        }
    }

    /// Header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl Default for LoggedRequest {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            url: "/".to_string(),
            headers: BTreeMap::new(),
            body: String::new(),
            logged_at_ms: 0,
        }
    }
}

/// Builder for creating logged requests
#[derive(Debug, Default)]
pub struct LoggedRequestBuilder {
    request: LoggedRequest,
}

impl LoggedRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.request.method = method.into().to_ascii_uppercase();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.request.url = url.into();
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request
            .headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.request.body = body.into();
        self
    }

    pub fn logged_at(mut self, logged_at_ms: i64) -> Self {
        self.request.logged_at_ms = logged_at_ms;
        self
    }

    pub fn build(self) -> LoggedRequest {
        self.request
    }
}
