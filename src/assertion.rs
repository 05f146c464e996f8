//! Polarity-aware assertions over [`Matcher`]s
//!
//! # Example
//! ```
//! use error_matchers::prelude::*;
//!
//! let no_rows = AnyError::from(MessageError::new("sql: no rows in result set"));
//! let errors = append(None, [no_rows.clone()]);
//!
//! expect(Value::error(errors)).to(&contain_matched_error(no_rows)).unwrap();
//! ```

use crate::{error::Error, matcher::Matcher, value::Value};

/// Why an assertion did not hold
#[derive(Debug, thiserror::Error)]
pub enum Failure {
    /// The verdict disagreed with the polarity of the assertion
    ///
    /// Holds the matcher's failure message for that polarity.
    #[error("{0}")]
    Mismatch(String),

    /// The matcher was misused; the verdict is meaningless
    #[error("Error from matcher: {0}")]
    Usage(#[from] Error),
}

/// An actual value waiting for a matcher
#[derive(Debug, Clone)]
pub struct Assertion {
    actual: Value,
}

/// Start an [`Assertion`] on `actual`
pub fn expect(actual: impl Into<Value>) -> Assertion {
    Assertion {
        actual: actual.into(),
    }
}

impl Assertion {
    /// Get the actual value
    #[inline]
    #[must_use]
    pub const fn actual(&self) -> &Value {
        &self.actual
    }

    /// Assert that `matcher` matches
    ///
    /// # Errors
    /// - [`Failure::Usage`] when the matcher reports a usage error
    /// - [`Failure::Mismatch`] when it does not match
    pub fn to(&self, matcher: &impl Matcher) -> Result<(), Failure> {
        self.report(matcher, true)
    }

    /// Assert that `matcher` does not match
    ///
    /// # Errors
    /// - [`Failure::Usage`] when the matcher reports a usage error
    /// - [`Failure::Mismatch`] when it matches
    pub fn not_to(&self, matcher: &impl Matcher) -> Result<(), Failure> {
        self.report(matcher, false)
    }

    /// Alias of [`Assertion::not_to`]
    ///
    /// # Errors
    /// See [`Assertion::not_to`]
    pub fn to_not(&self, matcher: &impl Matcher) -> Result<(), Failure> {
        self.not_to(matcher)
    }

    fn report(&self, matcher: &impl Matcher, positive: bool) -> Result<(), Failure> {
        let matched = matcher.matches(&self.actual)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(matched, positive, matcher = matcher.type_name(), "Assertion evaluated");

        if matched == positive {
            return Ok(());
        }

        let message = if positive {
            matcher.failure_message(&self.actual)
        } else {
            matcher.negated_failure_message(&self.actual)
        };

        Err(Failure::Mismatch(message))
    }
}
