//! Impl [`MatchErrorMatcher`], the base "is this that error" predicate

use super::{ErrorMatcher, Matcher};
use crate::{error::Error, format, value::Value};

/// Matches an actual error against an expected error, string or matcher
///
/// - expected error: the actual error must be structurally equal to it
/// - expected string: the actual error's text must equal it
/// - expected matcher: the nested matcher is applied to the actual error's text
///
/// # Example
/// ```
/// use error_matchers::prelude::*;
///
/// let actual = Value::error(MessageError::new("error 123 abc"));
///
/// let same = Value::error(MessageError::new("error 123 abc"));
///
/// assert!(match_error(same).matches(&actual).unwrap());
/// assert!(match_error("error 123 abc").matches(&actual).unwrap());
/// assert!(match_error(Value::matcher(match_regexp(r"\d{3}"))).matches(&actual).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct MatchErrorMatcher {
    expected: Value,
}

/// Create [`MatchErrorMatcher`]
pub fn match_error(expected: impl Into<Value>) -> MatchErrorMatcher {
    MatchErrorMatcher::with_expected(expected.into())
}

impl ErrorMatcher for MatchErrorMatcher {
    fn with_expected(expected: Value) -> Self {
        Self { expected }
    }

    fn expected(&self) -> &Value {
        &self.expected
    }
}

impl Matcher for MatchErrorMatcher {
    fn matches(&self, actual: &Value) -> Result<bool, Error> {
        matches_error(&self.expected, actual)
    }

    fn failure_message(&self, actual: &Value) -> String {
        format::message(actual, "to match error", &self.expected)
    }

    fn negated_failure_message(&self, actual: &Value) -> String {
        format::message(actual, "not to match error", &self.expected)
    }
}

/// Apply the base error match of `expected` to `actual`
///
/// # Errors
/// - [`Error::NilActual`] when `actual` is nil
/// - [`Error::NotAnError`] when `actual` is not an error
/// - [`Error::UnsupportedExpected`] when `expected` is not an error, string or matcher
/// - whatever a nested matcher reports
pub(crate) fn matches_error(expected: &Value, actual: &Value) -> Result<bool, Error> {
    let actual_error = match actual {
        Value::Nil => return Err(Error::NilActual),
        Value::Error(error) => error,
        other => return Err(Error::NotAnError(format::object(other, 1))),
    };

    match expected {
        Value::Error(expected_error) => Ok(actual_error.eq_dyn(&**expected_error)),
        Value::Str(text) => Ok(actual_error.to_string() == *text),
        Value::Matcher(matcher) => matcher.matches(&Value::Str(actual_error.to_string())),
        other => Err(Error::UnsupportedExpected(format::object(other, 1))),
    }
}
