//! Matchers: predicates used by assertions
//!
//! Every matcher answers [`Matcher::matches`] with a verdict and knows how to
//! describe a failure in either polarity. A usage error (`Err`) means the
//! assertion is malformed and the boolean verdict does not exist.

pub mod contain_matched_error;
pub mod match_error;
pub mod match_regexp;
pub mod match_wrapped_error;

use crate::{error::Error, value::Value};
use std::fmt;

pub use contain_matched_error::{ContainMatchedErrorMatcher, contain_matched_error};
pub use match_error::{MatchErrorMatcher, match_error};
pub use match_regexp::{MatchRegexpMatcher, match_regexp};
pub use match_wrapped_error::{MatchWrappedErrorMatcher, match_wrapped_error};

/// A predicate pluggable into [`Assertion`]
///
/// [`Assertion`]: crate::assertion::Assertion
pub trait Matcher: fmt::Debug + Send + Sync {
    /// Decide whether `actual` satisfies this matcher
    ///
    /// # Errors
    /// Any [`Error`] when the matcher cannot be applied to `actual`. The error takes
    /// precedence over the verdict.
    fn matches(&self, actual: &Value) -> Result<bool, Error>;

    /// Message for a failed positive assertion
    fn failure_message(&self, actual: &Value) -> String;

    /// Message for a failed negated assertion
    fn negated_failure_message(&self, actual: &Value) -> String;

    /// Name of the concrete matcher type
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A matcher built around one expected error, string or nested matcher
pub trait ErrorMatcher: Matcher + Sized {
    /// Create matcher for `expected`
    fn with_expected(expected: Value) -> Self;

    /// Get the expected operand
    fn expected(&self) -> &Value;
}
