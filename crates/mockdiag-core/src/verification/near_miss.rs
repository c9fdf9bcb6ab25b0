//! NearMiss - a scored candidate and its ordering rule

use serde::Serialize;
use std::cmp::Ordering;
use std::sync::Arc;

use crate::matching::{MatchOutcome, MatchResult, RequestPattern};
use crate::request::LoggedRequest;
use crate::stubbing::StubMapping;

/// What a request was compared against: a registered stub mapping, or a
/// bare pattern from a verification query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NearMissTarget {
    StubMapping(Arc<StubMapping>),
    RequestPattern(Arc<RequestPattern>),
}

impl NearMissTarget {
    /// The pattern the request is scored against
    pub fn request_pattern(&self) -> &RequestPattern {
        match self {
            NearMissTarget::StubMapping(mapping) => &mapping.request,
            NearMissTarget::RequestPattern(pattern) => pattern,
        }
    }

    pub fn match_request(&self, request: &LoggedRequest) -> MatchOutcome<MatchResult> {
        self.request_pattern().match_request(request)
    }
}

/// A request, the pattern it was compared against, and how close it came.
///
/// Only `NearMiss::evaluate` builds one, so the match result always belongs
/// to the (request, target) pair it is stored with.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearMiss {
    request: Arc<LoggedRequest>,
    #[serde(flatten)]
    target: NearMissTarget,
    match_result: MatchResult,
}

impl NearMiss {
    /// Score `request` against `target` and keep the result with both.
    pub fn evaluate(request: Arc<LoggedRequest>, target: NearMissTarget) -> MatchOutcome<Self> {
        let match_result = target.match_request(&request)?;
        Ok(Self {
            request,
            target,
            match_result,
        })
    }

    pub fn request(&self) -> &Arc<LoggedRequest> {
        &self.request
    }

    pub fn target(&self) -> &NearMissTarget {
        &self.target
    }

    pub fn match_result(&self) -> MatchResult {
        self.match_result
    }

    pub fn distance(&self) -> f64 {
        self.match_result.distance
    }

    pub fn is_exact_match(&self) -> bool {
        self.match_result.is_exact_match
    }

    /// The stub mapping, when the target is one
    pub fn stub_mapping(&self) -> Option<&Arc<StubMapping>> {
        match &self.target {
            NearMissTarget::StubMapping(mapping) => Some(mapping),
            NearMissTarget::RequestPattern(_) => None,
        }
    }

    pub fn request_pattern(&self) -> &RequestPattern {
        self.target.request_pattern()
    }
}

/// Comparator over near misses
pub type NearMissComparator = fn(&NearMiss, &NearMiss) -> Ordering;

/// Closest first: ascending distance. Equal distances compare `Equal`;
/// the ranking routine breaks those ties by source order.
pub fn compare_near_misses(a: &NearMiss, b: &NearMiss) -> Ordering {
    a.match_result.distance.total_cmp(&b.match_result.distance)
}

pub const NEAR_MISS_ASCENDING: NearMissComparator = compare_near_misses;
