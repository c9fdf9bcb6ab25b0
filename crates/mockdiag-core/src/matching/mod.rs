//! Request matching
//!
//! Scores a concrete request against a `RequestPattern`. The result is
//! graded rather than binary so near misses can be ranked:
//!
//! - every criterion (method, URL, each header, each body pattern) yields a
//!   distance in `[0, 1]`
//! - the pattern's distance is the mean over its criteria
//! - the match is exact only when every criterion is exact
//!
//! # Example
//!
//! ```rust
//! use mockdiag_core::matching::{RequestPatternBuilder, StringMatcher};
//! use mockdiag_core::request::LoggedRequestBuilder;
//!
//! let pattern = RequestPatternBuilder::new()
//!     .method("GET")
//!     .url_path("/users")
//!     .header("accept", StringMatcher::EqualTo("application/json".into()))
//!     .build();
//!
//! let request = LoggedRequestBuilder::new()
//!     .method("GET")
//!     .url("/users")
//!     .header("Accept", "text/html")
//!     .build();
//!
//! let result = pattern.match_request(&request).unwrap();
//! assert!(!result.is_exact_match);
//! assert!(result.distance > 0.0);
//! ```

mod pattern;
mod result;
mod strategies;

pub use pattern::{RequestPattern, RequestPatternBuilder};
pub use result::{MatchError, MatchOutcome, MatchResult};
pub use strategies::{string_distance, StringMatcher, UrlMatcher};
