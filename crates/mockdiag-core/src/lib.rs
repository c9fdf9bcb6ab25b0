//! mockdiag Core
//!
//! Near-miss diagnostics for an HTTP stubbing service. When a request
//! matches no registered stub, or a verification query finds no received
//! request, this crate ranks every candidate by match distance and returns
//! the closest few.
//!
//! # Modules
//!
//! - `request` - concrete requests as received
//! - `matching` - request patterns and the graded match function
//! - `stubbing` - stub registry and request journal (traits + in-memory)
//! - `verification` - near-miss scoring, ranking and reports
//!
//! # Example
//!
//! ```rust
//! use mockdiag_core::{
//!     InMemoryRequestJournal, InMemoryStubMappings, LoggedRequestBuilder, NearMissCalculator,
//!     RequestPatternBuilder,
//! };
//!
//! let journal = InMemoryRequestJournal::new();
//! journal.record(LoggedRequestBuilder::new().method("POST").url("/orders").build(), None);
//!
//! let calculator = NearMissCalculator::new(InMemoryStubMappings::new(), &journal);
//! let pattern = RequestPatternBuilder::new().method("PUT").url_path("/orders").build();
//!
//! let near_misses = calculator.find_nearest_to_pattern(pattern).unwrap();
//! assert_eq!(near_misses[0].request().method, "POST");
//! assert!(!near_misses[0].is_exact_match());
//! ```

pub mod matching;
pub mod request;
pub mod stubbing;
pub mod verification;

// Re-export main types at crate root
pub use matching::{
    MatchError, MatchResult, RequestPattern, RequestPatternBuilder, StringMatcher, UrlMatcher,
};
pub use request::{LoggedRequest, LoggedRequestBuilder};
pub use stubbing::{
    InMemoryRequestJournal, InMemoryStubMappings, JournalConfig, RequestJournal,
    ResponseDefinition, ServedStub, StoreError, StubMapping, StubMappings,
};
pub use verification::{
    DiagnosticError, FindNearMissesResult, NearMiss, NearMissCalculator, NearMissTarget,
    NEAR_MISS_COUNT,
};
