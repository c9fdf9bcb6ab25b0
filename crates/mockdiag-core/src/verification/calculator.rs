//! NearMissCalculator - entry points for near-miss diagnostics

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, trace, warn};

use super::error::DiagnosticResult;
use super::near_miss::{NearMiss, NearMissTarget, NEAR_MISS_ASCENDING};
use super::ranking::sort_and_truncate;
use crate::matching::RequestPattern;
use crate::request::LoggedRequest;
use crate::stubbing::{RequestJournal, StubMapping, StubMappings};

/// Near misses for one request that matched no stub
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmatchedRequestNearMisses {
    pub request: Arc<LoggedRequest>,
    pub near_misses: Vec<NearMiss>,
}

/// Ranks registered stubs or journaled requests by closeness.
///
/// Holds no mutable state; every call reads one snapshot from the registry
/// or journal and scores it from scratch.
#[derive(Debug, Clone)]
pub struct NearMissCalculator<S, J> {
    stub_mappings: S,
    request_journal: J,
}

impl<S: StubMappings, J: RequestJournal> NearMissCalculator<S, J> {
    pub fn new(stub_mappings: S, request_journal: J) -> Self {
        Self {
            stub_mappings,
            request_journal,
        }
    }

    /// Registered stub mappings closest to `request`, closest first.
    ///
    /// At most `NEAR_MISS_COUNT` entries; empty when nothing is registered.
    pub fn find_nearest_to_request(
        &self,
        request: impl Into<Arc<LoggedRequest>>,
    ) -> DiagnosticResult<Vec<NearMiss>> {
        let request = request.into();
        let all_mappings = self.stub_mappings.get_all()?;
        rank_against_mappings(&request, &all_mappings)
    }

    /// Journaled requests closest to `pattern`, closest first.
    ///
    /// Used when a verification query found no matching request. At most
    /// `NEAR_MISS_COUNT` entries; empty when the journal is empty.
    pub fn find_nearest_to_pattern(
        &self,
        pattern: impl Into<Arc<RequestPattern>>,
    ) -> DiagnosticResult<Vec<NearMiss>> {
        let pattern = pattern.into();
        let served_stubs = self.request_journal.get_all_served_stubs()?;

        let near_misses = served_stubs
            .iter()
            .map(|served| {
                evaluate(
                    &served.request,
                    NearMissTarget::RequestPattern(Arc::clone(&pattern)),
                )
            })
            .collect::<DiagnosticResult<Vec<_>>>()?;

        let ranked = sort_and_truncate(near_misses, served_stubs.len(), NEAR_MISS_ASCENDING);
        log_ranking("pattern", served_stubs.len(), &ranked);
        Ok(ranked)
    }

    /// Nearest stub mappings for every journaled request that matched no
    /// stub, in journal order.
    pub fn find_near_misses_for_unmatched(
        &self,
    ) -> DiagnosticResult<Vec<UnmatchedRequestNearMisses>> {
        let unmatched = self.request_journal.get_unmatched()?;
        let all_mappings = self.stub_mappings.get_all()?;

        debug!(
            unmatched = unmatched.len(),
            mappings = all_mappings.len(),
            "diagnosing unmatched requests"
        );

        unmatched
            .into_iter()
            .map(|served| -> DiagnosticResult<UnmatchedRequestNearMisses> {
                let near_misses = rank_against_mappings(&served.request, &all_mappings)?;
                Ok(UnmatchedRequestNearMisses {
                    request: served.request,
                    near_misses,
                })
            })
            .collect()
    }
}

fn rank_against_mappings(
    request: &Arc<LoggedRequest>,
    all_mappings: &[Arc<StubMapping>],
) -> DiagnosticResult<Vec<NearMiss>> {
    let near_misses = all_mappings
        .iter()
        .map(|mapping| evaluate(request, NearMissTarget::StubMapping(Arc::clone(mapping))))
        .collect::<DiagnosticResult<Vec<_>>>()?;

    let ranked = sort_and_truncate(near_misses, all_mappings.len(), NEAR_MISS_ASCENDING);
    log_ranking("request", all_mappings.len(), &ranked);
    Ok(ranked)
}

fn evaluate(request: &Arc<LoggedRequest>, target: NearMissTarget) -> DiagnosticResult<NearMiss> {
    let stub_id = match &target {
        NearMissTarget::StubMapping(mapping) => Some(mapping.id.clone()),
        NearMissTarget::RequestPattern(_) => None,
    };

    match NearMiss::evaluate(Arc::clone(request), target) {
        Ok(near_miss) => {
            trace!(
                url = %request.url,
                stub_id = stub_id.as_deref().unwrap_or("-"),
                distance = near_miss.distance(),
                "scored candidate"
            );
            Ok(near_miss)
        }
        Err(err) => {
            warn!(
                url = %request.url,
                stub_id = stub_id.as_deref().unwrap_or("-"),
                error = %err,
                "match evaluation failed"
            );
            Err(err.into())
        }
    }
}

fn log_ranking(source: &str, candidates: usize, ranked: &[NearMiss]) {
    debug!(
        source,
        candidates,
        returned = ranked.len(),
        best_distance = ranked.first().map(NearMiss::distance),
        "ranked near misses"
    );
}
