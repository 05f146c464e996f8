//! Impl [`MatchRegexpMatcher`]

use super::Matcher;
use crate::{error::Error, format, value::Value};
use regex::Regex;

/// Matches a string against a regular expression
///
/// The pattern is compiled on every match, so an invalid pattern surfaces as a
/// usage error of the assertion that uses it.
///
/// # Example
/// ```
/// use error_matchers::prelude::*;
///
/// let matcher = match_regexp(r"\d{3}");
/// assert!(matcher.matches(&Value::from("error 123 abc")).unwrap());
/// assert!(!matcher.matches(&Value::from("no digits")).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRegexpMatcher {
    pattern: String,
}

/// Create [`MatchRegexpMatcher`]
pub fn match_regexp(pattern: impl Into<String>) -> MatchRegexpMatcher {
    MatchRegexpMatcher {
        pattern: pattern.into(),
    }
}

impl MatchRegexpMatcher {
    /// Get pattern
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    fn pattern_value(&self) -> Value {
        Value::Str(self.pattern.clone())
    }
}

impl Matcher for MatchRegexpMatcher {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), ret, fields(pattern = %self.pattern))
    )]
    fn matches(&self, actual: &Value) -> Result<bool, Error> {
        let Value::Str(text) = actual else {
            return Err(Error::NotAString(format::object(actual, 1)));
        };

        let regex = Regex::new(&self.pattern).map_err(|source| Error::InvalidRegex {
            pattern: self.pattern.clone(),
            source,
        })?;

        Ok(regex.is_match(text))
    }

    fn failure_message(&self, actual: &Value) -> String {
        format::message(actual, "to match regular expression", &self.pattern_value())
    }

    fn negated_failure_message(&self, actual: &Value) -> String {
        format::message(actual, "not to match regular expression", &self.pattern_value())
    }
}
