//! Value matching strategies
//!
//! Each strategy compares one expected criterion against one actual value
//! and yields a `MatchResult` with distance in `[0, 1]`:
//!
//! - `EqualTo`, `Url`, `UrlPath`: graded by normalized Levenshtein distance
//! - `Contains`, `Matches`, `DoesNotMatch`, `Absent`, regex URL forms: 0 or 1

use regex::Regex;
use serde::{Deserialize, Serialize};
use strsim::normalized_levenshtein;

use super::result::{MatchError, MatchOutcome, MatchResult};
use crate::request::LoggedRequest;

/// Graded distance between an expected and an actual string
#[inline]
pub fn string_distance(expected: &str, actual: &str) -> MatchResult {
    if expected == actual {
        MatchResult::exact()
    } else {
        MatchResult::partial(1.0 - normalized_levenshtein(expected, actual))
    }
}

/// Compile a regex that must match the whole value
pub fn compile_full_match(pattern: &str) -> MatchOutcome<Regex> {
    Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| MatchError::InvalidRegex {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// Criterion for a single header value or the request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StringMatcher {
    EqualTo(String),
    Contains(String),
    Matches(String),
    DoesNotMatch(String),
    Absent,
}

impl StringMatcher {
    /// Compare against a value; `None` means the value is missing.
    ///
    /// A missing value is a complete miss for every matcher except `Absent`.
    /// Regexes are compiled even when the value is missing, so a malformed
    /// pattern always fails.
    pub fn match_value(&self, actual: Option<&str>) -> MatchOutcome<MatchResult> {
        let result = match self {
            StringMatcher::Absent => MatchResult::of(actual.is_none()),
            StringMatcher::EqualTo(expected) => {
                actual.map_or_else(MatchResult::no_match, |value| string_distance(expected, value))
            }
            StringMatcher::Contains(needle) => {
                MatchResult::of(actual.is_some_and(|value| value.contains(needle.as_str())))
            }
            StringMatcher::Matches(pattern) => {
                let regex = compile_full_match(pattern)?;
                MatchResult::of(actual.is_some_and(|value| regex.is_match(value)))
            }
            StringMatcher::DoesNotMatch(pattern) => {
                let regex = compile_full_match(pattern)?;
                MatchResult::of(actual.is_some_and(|value| !regex.is_match(value)))
            }
        };
        Ok(result)
    }
}

/// Criterion for the request URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UrlMatcher {
    /// Full URL including query string
    Url(String),
    /// Path only, query ignored
    UrlPath(String),
    /// Regex over the full URL
    UrlPattern(String),
    /// Regex over the path
    UrlPathPattern(String),
    #[default]
    Any,
}

impl UrlMatcher {
    pub fn match_request(&self, request: &LoggedRequest) -> MatchOutcome<MatchResult> {
        let result = match self {
            UrlMatcher::Url(expected) => string_distance(expected, &request.url),
            UrlMatcher::UrlPath(expected) => string_distance(expected, request.path()),
            UrlMatcher::UrlPattern(pattern) => {
                MatchResult::of(compile_full_match(pattern)?.is_match(&request.url))
            }
            UrlMatcher::UrlPathPattern(pattern) => {
                MatchResult::of(compile_full_match(pattern)?.is_match(request.path()))
            }
            UrlMatcher::Any => MatchResult::exact(),
        };
        Ok(result)
    }
}

/// Method criterion: `None` or "ANY" accepts every method
pub fn method_match(expected: Option<&str>, actual: &str) -> MatchResult {
    match expected {
        None => MatchResult::exact(),
        Some(method) if method.eq_ignore_ascii_case("ANY") => MatchResult::exact(),
        Some(method) => MatchResult::of(method.eq_ignore_ascii_case(actual)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::LoggedRequestBuilder;

    #[test]
    fn test_string_distance() {
        assert_eq!(string_distance("abc", "abc"), MatchResult::exact());

        let close = string_distance("/orders", "/order");
        let far = string_distance("/orders", "/users/42/profile");
        assert!(!close.is_exact_match);
        assert!(close.distance > 0.0);
        assert!(close.distance < far.distance);
        assert!(far.distance <= 1.0);
    }

    #[test]
    fn test_equal_to() {
        let matcher = StringMatcher::EqualTo("json".into());
        assert!(matcher.match_value(Some("json")).unwrap().is_exact_match);
        assert!(!matcher.match_value(Some("jsonx")).unwrap().is_exact_match);
        assert_eq!(matcher.match_value(None).unwrap(), MatchResult::no_match());
    }

    #[test]
    fn test_contains() {
        let matcher = StringMatcher::Contains("sku".into());
        assert!(matcher.match_value(Some(r#"{"sku":1}"#)).unwrap().is_exact_match);
        assert_eq!(
            matcher.match_value(Some("{}")).unwrap(),
            MatchResult::no_match()
        );
    }

    #[test]
    fn test_matches_is_anchored() {
        let matcher = StringMatcher::Matches("[0-9]+".into());
        assert!(matcher.match_value(Some("123")).unwrap().is_exact_match);
        assert!(!matcher.match_value(Some("a123")).unwrap().is_exact_match);

        let inverse = StringMatcher::DoesNotMatch("[0-9]+".into());
        assert!(inverse.match_value(Some("a123")).unwrap().is_exact_match);
    }

    #[test]
    fn test_absent() {
        let matcher = StringMatcher::Absent;
        assert!(matcher.match_value(None).unwrap().is_exact_match);
        assert!(!matcher.match_value(Some("x")).unwrap().is_exact_match);
    }

    #[test]
    fn test_invalid_regex() {
        let matcher = StringMatcher::Matches("(unclosed".into());
        let err = matcher.match_value(Some("x")).unwrap_err();
        assert!(matches!(err, MatchError::InvalidRegex { ref pattern, .. } if pattern == "(unclosed"));

        // missing value still surfaces the broken pattern
        assert!(matcher.match_value(None).is_err());
        assert!(!StringMatcher::DoesNotMatch("x".into())
            .match_value(None)
            .unwrap()
            .is_exact_match);
    }

    #[test]
    fn test_url_matchers() {
        let request = LoggedRequestBuilder::new().url("/orders/7?expand=1").build();

        assert!(UrlMatcher::Url("/orders/7?expand=1".into())
            .match_request(&request)
            .unwrap()
            .is_exact_match);
        assert!(!UrlMatcher::Url("/orders/7".into())
            .match_request(&request)
            .unwrap()
            .is_exact_match);
        assert!(UrlMatcher::UrlPath("/orders/7".into())
            .match_request(&request)
            .unwrap()
            .is_exact_match);
        assert!(UrlMatcher::UrlPathPattern("/orders/[0-9]+".into())
            .match_request(&request)
            .unwrap()
            .is_exact_match);
        assert!(!UrlMatcher::UrlPattern("/orders/[0-9]+".into())
            .match_request(&request)
            .unwrap()
            .is_exact_match);
        assert!(UrlMatcher::Any.match_request(&request).unwrap().is_exact_match);
    }

    #[test]
    fn test_method_match() {
        assert!(method_match(None, "GET").is_exact_match);
        assert!(method_match(Some("ANY"), "DELETE").is_exact_match);
        assert!(method_match(Some("get"), "GET").is_exact_match);
        assert_eq!(method_match(Some("POST"), "GET"), MatchResult::no_match());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&StringMatcher::EqualTo("x".into())).unwrap();
        assert_eq!(json, r#"{"equalTo":"x"}"#);

        let url: UrlMatcher = serde_json::from_str(r#"{"urlPathPattern":"/a/.*"}"#).unwrap();
        assert_eq!(url, UrlMatcher::UrlPathPattern("/a/.*".into()));
    }
}
