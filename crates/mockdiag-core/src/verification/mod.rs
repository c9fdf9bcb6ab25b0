//! Near-miss diagnostics
//!
//! When a request matches no stub, or a verification query matches no
//! journaled request, this module reports which candidates came closest:
//!
//! 1. score every candidate once with the match function (`NearMiss::evaluate`)
//! 2. sort ascending by distance, ties kept in source order
//! 3. keep the first `NEAR_MISS_COUNT` (3)
//!
//! Candidates come from the stub registry (`find_nearest_to_request`) or the
//! request journal (`find_nearest_to_pattern`).
//!
//! # Example
//!
//! ```rust
//! use mockdiag_core::matching::RequestPatternBuilder;
//! use mockdiag_core::request::LoggedRequestBuilder;
//! use mockdiag_core::stubbing::{
//!     InMemoryRequestJournal, InMemoryStubMappings, ResponseDefinition, StubMapping,
//! };
//! use mockdiag_core::verification::NearMissCalculator;
//!
//! let registry = InMemoryStubMappings::new();
//! registry
//!     .add(StubMapping::new(
//!         "list-users",
//!         RequestPatternBuilder::new().method("GET").url_path("/users").build(),
//!         ResponseDefinition::default(),
//!     ))
//!     .unwrap();
//!
//! let calculator = NearMissCalculator::new(registry, InMemoryRequestJournal::new());
//! let request = LoggedRequestBuilder::new().method("GET").url("/user").build();
//!
//! let near_misses = calculator.find_nearest_to_request(request).unwrap();
//! assert_eq!(near_misses.len(), 1);
//! assert_eq!(near_misses[0].stub_mapping().unwrap().id, "list-users");
//! ```

mod calculator;
mod error;
mod near_miss;
mod ranking;
mod report;

pub use calculator::{NearMissCalculator, UnmatchedRequestNearMisses};
pub use error::{DiagnosticError, DiagnosticResult};
pub use near_miss::{
    compare_near_misses, NearMiss, NearMissComparator, NearMissTarget, NEAR_MISS_ASCENDING,
};
pub use ranking::{nearest, sort_and_truncate, NEAR_MISS_COUNT};
pub use report::{FindNearMissesResult, UnmatchedNearMissesReport};
