//! Serializable near-miss reports

use serde::Serialize;

use super::calculator::UnmatchedRequestNearMisses;
use super::error::DiagnosticResult;
use super::near_miss::NearMiss;

/// Near misses as returned to admin clients:
/// `{"nearMisses": [{"request": ..., "stubMapping" | "requestPattern": ..., "matchResult": ...}]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindNearMissesResult {
    pub near_misses: Vec<NearMiss>,
}

impl FindNearMissesResult {
    pub fn new(near_misses: Vec<NearMiss>) -> Self {
        Self { near_misses }
    }

    pub fn to_json(&self) -> DiagnosticResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Vec<NearMiss>> for FindNearMissesResult {
    fn from(near_misses: Vec<NearMiss>) -> Self {
        Self::new(near_misses)
    }
}

/// Near misses for every unmatched request in the journal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmatchedNearMissesReport {
    pub unmatched: Vec<UnmatchedRequestNearMisses>,
    pub total: usize,
}

impl UnmatchedNearMissesReport {
    pub fn to_json(&self) -> DiagnosticResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Vec<UnmatchedRequestNearMisses>> for UnmatchedNearMissesReport {
    fn from(unmatched: Vec<UnmatchedRequestNearMisses>) -> Self {
        let total = unmatched.len();
        Self { unmatched, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::RequestPatternBuilder;
    use crate::request::LoggedRequestBuilder;
    use crate::stubbing::{ResponseDefinition, StubMapping};
    use crate::verification::NearMissTarget;
    use std::sync::Arc;

    #[test]
    fn test_report_json_shape() {
        let mapping = Arc::new(StubMapping::new(
            "health",
            RequestPatternBuilder::new().method("GET").url("/health").build(),
            ResponseDefinition::default(),
        ));
        let request = Arc::new(LoggedRequestBuilder::new().url("/healthz").build());
        let near_miss = NearMiss::evaluate(request, NearMissTarget::StubMapping(mapping)).unwrap();

        let json = FindNearMissesResult::from(vec![near_miss]).to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &parsed["nearMisses"][0];
        assert_eq!(first["request"]["url"], "/healthz");
        assert_eq!(first["stubMapping"]["id"], "health");
        assert_eq!(first["matchResult"]["isExactMatch"], false);
        assert!(first["matchResult"]["distance"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_empty_report() {
        let json = FindNearMissesResult::new(Vec::new()).to_json().unwrap();
        assert_eq!(json, r#"{"nearMisses":[]}"#);

        let json = UnmatchedNearMissesReport::from(Vec::new()).to_json().unwrap();
        assert_eq!(json, r#"{"unmatched":[],"total":0}"#);
    }
}
