//! Request patterns and their match function

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::result::{MatchOutcome, MatchResult};
use super::strategies::{method_match, StringMatcher, UrlMatcher};
use crate::request::LoggedRequest;

/// Matching criteria for a request, without a response attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPattern {
    /// `None` or "ANY" accepts every method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(default)]
    pub url: UrlMatcher,

    /// Keyed by header name (compared case-insensitively)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, StringMatcher>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body_patterns: Vec<StringMatcher>,
}

impl RequestPattern {
    /// Score `request` against every criterion of this pattern.
    ///
    /// The distance is the mean of the per-criterion distances (method,
    /// URL, each header, each body pattern). Fails only when a regex in the
    /// pattern does not compile.
    pub fn match_request(&self, request: &LoggedRequest) -> MatchOutcome<MatchResult> {
        let mut results = Vec::with_capacity(2 + self.headers.len() + self.body_patterns.len());

        results.push(method_match(self.method.as_deref(), &request.method));
        results.push(self.url.match_request(request)?);

        for (name, matcher) in &self.headers {
            results.push(matcher.match_value(request.header(name))?);
        }

        for matcher in &self.body_patterns {
            results.push(matcher.match_value(Some(&request.body))?);
        }

        Ok(MatchResult::aggregate(&results))
    }

    /// Number of criteria that contribute to the distance
    pub fn criteria_count(&self) -> usize {
        2 + self.headers.len() + self.body_patterns.len()
    }
}

/// Builder for request patterns
#[derive(Debug, Default)]
pub struct RequestPatternBuilder {
    pattern: RequestPattern,
}

impl RequestPatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.pattern.method = Some(method.into().to_ascii_uppercase());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.pattern.url = UrlMatcher::Url(url.into());
        self
    }

    pub fn url_path(mut self, path: impl Into<String>) -> Self {
        self.pattern.url = UrlMatcher::UrlPath(path.into());
        self
    }

    pub fn url_pattern(mut self, regex: impl Into<String>) -> Self {
        self.pattern.url = UrlMatcher::UrlPattern(regex.into());
        self
    }

    pub fn url_path_pattern(mut self, regex: impl Into<String>) -> Self {
        self.pattern.url = UrlMatcher::UrlPathPattern(regex.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, matcher: StringMatcher) -> Self {
        self.pattern
            .headers
            .insert(name.into().to_ascii_lowercase(), matcher);
        self
    }

    pub fn body(mut self, matcher: StringMatcher) -> Self {
        self.pattern.body_patterns.push(matcher);
        self
    }

    pub fn build(self) -> RequestPattern {
        self.pattern
    }
}
