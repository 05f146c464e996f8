//! Usage errors reported by matchers
//!
//! A usage error means the assertion itself is malformed (a nil operand, an
//! operand of the wrong kind, a broken pattern). It is never a verdict about the
//! errors being compared.

use thiserror::Error;

/// Error returned from [`Matcher::matches`] when the matcher was misused
///
/// [`Matcher::matches`]: crate::matcher::Matcher::matches
#[derive(Debug, Error)]
pub enum Error {
    /// The actual value is nil
    ///
    /// # Example
    /// ```
    /// use error_matchers::prelude::*;
    ///
    /// let matcher = match_error("an error");
    /// assert!(matcher.matches(&Value::Nil).is_err());
    /// ```
    #[error("Expected an error, got nil")]
    NilActual,

    /// The actual value does not carry the error capability
    ///
    /// Holds the rendered actual value.
    #[error("Expected an error.  Got:\n{0}")]
    NotAnError(String),

    /// The expected value is neither an error, a string nor a matcher
    ///
    /// Holds the rendered expected value.
    ///
    /// # Example
    /// ```
    /// use error_matchers::prelude::*;
    ///
    /// let matcher = match_error(3);
    /// let actual = Value::error(MessageError::new("an error"));
    /// assert!(matcher.matches(&actual).is_err());
    /// ```
    #[error(
        "MatchError must be passed an error, a string, or a Matcher that can match on strings.  Got:\n{0}"
    )]
    UnsupportedExpected(String),

    /// A string matcher was handed something other than a string
    #[error("RegularExpression matcher expects a string.  Got:\n{0}")]
    NotAString(String),

    /// The regular expression given to [`match_regexp`] does not compile
    ///
    /// [`match_regexp`]: crate::matcher::match_regexp::match_regexp
    #[error("RegularExpression `{pattern}` failed to compile with error:\n\t{source}")]
    InvalidRegex {
        /// Pattern as written by the caller
        pattern: String,

        /// Compilation error
        #[source]
        source: regex::Error,
    },
}
