//! Stub mapping and served stub definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::matching::RequestPattern;
use crate::request::LoggedRequest;

/// Canned response returned when a stub mapping matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDefinition {
    pub status: u16,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Default for ResponseDefinition {
    fn default() -> Self {
        Self {
            status: 200,
            headers: BTreeMap::new(),
            body: None,
        }
    }
}

impl ResponseDefinition {
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// A registered rule: request pattern plus canned response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StubMapping {
    pub id: String,

    pub request: RequestPattern,

    #[serde(default)]
    pub response: ResponseDefinition,

    /// Lower values win when several stubs match; informational here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

impl StubMapping {
    pub fn new(id: impl Into<String>, request: RequestPattern, response: ResponseDefinition) -> Self {
        Self {
            id: id.into(),
            request,
            response,
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// A journal entry: a request the service received, and the stub that
/// served it, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServedStub {
    pub request: Arc<LoggedRequest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stub_id: Option<String>,
}

impl ServedStub {
    pub fn matched(request: impl Into<Arc<LoggedRequest>>, stub_id: impl Into<String>) -> Self {
        Self {
            request: request.into(),
            stub_id: Some(stub_id.into()),
        }
    }

    pub fn unmatched(request: impl Into<Arc<LoggedRequest>>) -> Self {
        Self {
            request: request.into(),
            stub_id: None,
        }
    }

    pub fn was_matched(&self) -> bool {
        self.stub_id.is_some()
    }
}
