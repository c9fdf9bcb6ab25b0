//! Match results and match errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of comparing one concrete request (or one value) to a pattern.
///
/// `distance` is non-negative: `0.0` is an exact match, larger is worse.
/// Per-criterion results stay within `[0, 1]`, and so does their aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub is_exact_match: bool,
    pub distance: f64,
}

impl MatchResult {
    /// Exact match (distance 0)
    pub fn exact() -> Self {
        Self {
            is_exact_match: true,
            distance: 0.0,
        }
    }

    /// Complete miss (distance 1)
    pub fn no_match() -> Self {
        Self {
            is_exact_match: false,
            distance: 1.0,
        }
    }

    /// Exact when `matched`, complete miss otherwise
    pub fn of(matched: bool) -> Self {
        if matched {
            Self::exact()
        } else {
            Self::no_match()
        }
    }

    /// Graded result. NaN is treated as a complete miss and negative
    /// values are clamped to zero.
    pub fn partial(distance: f64) -> Self {
        let distance = if distance.is_nan() {
            1.0
        } else {
            distance.max(0.0)
        };
        Self {
            is_exact_match: distance == 0.0,
            distance,
        }
    }

    /// Combine per-criterion results: mean distance, exact only if every
    /// criterion was exact. No criteria at all is an exact match.
    pub fn aggregate(results: &[MatchResult]) -> Self {
        if results.is_empty() {
            return Self::exact();
        }

        let total: f64 = results.iter().map(|r| r.distance).sum();
        Self {
            is_exact_match: results.iter().all(|r| r.is_exact_match),
            distance: total / results.len() as f64,
        }
    }
}

/// Errors raised while evaluating a pattern against a request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// A regex in the pattern failed to compile
    #[error("invalid regex '{pattern}': {reason}")]
    InvalidRegex { pattern: String, reason: String },
}

/// Result type for match evaluation
pub type MatchOutcome<T> = Result<T, MatchError>;
