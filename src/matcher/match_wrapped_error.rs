//! Impl [`MatchWrappedErrorMatcher`]

use super::{ErrorMatcher, Matcher, match_error::matches_error};
use crate::{domain::unwind, error::Error, format, value::Value};

/// Matches an error against another one through layers of wrapping
///
/// First the operands are matched directly, exactly like [`MatchErrorMatcher`]. A
/// success or a usage error ends the match there, and so does an operand that is
/// not an error. Then:
/// - when exactly one side is wrapped, both sides are unwound to their innermost
///   error and those are matched;
/// - when both sides are wrapped, they must be structurally equal. Two wrap chains
///   built separately are never equal, even over the same error and messages.
///
/// # Example
/// ```
/// use error_matchers::prelude::*;
///
/// let no_rows = AnyError::from(MessageError::new("sql: no rows in result set"));
/// let wrapped = wrap(no_rows.clone(), "loading user");
///
/// assert!(match_wrapped_error(no_rows.clone()).matches(&wrapped.clone().into()).unwrap());
/// assert!(match_wrapped_error(wrapped).matches(&no_rows.into()).unwrap());
/// ```
///
/// [`MatchErrorMatcher`]: super::MatchErrorMatcher
#[derive(Debug, Clone)]
pub struct MatchWrappedErrorMatcher {
    expected: Value,
}

/// Create [`MatchWrappedErrorMatcher`]
pub fn match_wrapped_error(expected: impl Into<Value>) -> MatchWrappedErrorMatcher {
    MatchWrappedErrorMatcher::with_expected(expected.into())
}

impl ErrorMatcher for MatchWrappedErrorMatcher {
    fn with_expected(expected: Value) -> Self {
        Self { expected }
    }

    fn expected(&self) -> &Value {
        &self.expected
    }
}

impl Matcher for MatchWrappedErrorMatcher {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), ret, fields(expected = ?self.expected))
    )]
    fn matches(&self, actual: &Value) -> Result<bool, Error> {
        let verdict = matches_error(&self.expected, actual);
        if !matches!(verdict, Ok(false)) {
            #[cfg(feature = "tracing")]
            tracing::trace!("Matched directly or misused");

            return verdict;
        }

        let (Some(actual_error), Some(expected_error)) =
            (actual.as_error(), self.expected.as_error())
        else {
            return verdict;
        };

        let actual_wrapped = actual_error.as_causer().is_some();
        let expected_wrapped = expected_error.as_causer().is_some();

        if actual_wrapped != expected_wrapped {
            #[cfg(feature = "tracing")]
            tracing::trace!(actual_wrapped, expected_wrapped, "Unwinding both sides");

            let innermost_expected = Value::Error(unwind(expected_error).clone());
            let innermost_actual = Value::Error(unwind(actual_error).clone());
            return matches_error(&innermost_expected, &innermost_actual);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!("Both sides wrapped, comparing structure");

        Ok(actual_error.eq_dyn(&**expected_error))
    }

    fn failure_message(&self, actual: &Value) -> String {
        format::message(actual, "to match wrapped error", &self.expected)
    }

    fn negated_failure_message(&self, actual: &Value) -> String {
        format::message(actual, "not to match wrapped error", &self.expected)
    }
}
