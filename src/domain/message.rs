//! Impl [`MessageError`]

use std::{borrow::Cow, fmt};

/// An error that is nothing but its text
///
/// Two [`MessageError`]s are equal when their texts are equal.
///
/// # Example
/// ```
/// use error_matchers::prelude::*;
///
/// let error = MessageError::new("sql: no rows in result set");
/// assert_eq!(error.to_string(), "sql: no rows in result set");
/// assert_eq!(error, MessageError::new("sql: no rows in result set"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageError {
    message: Cow<'static, str>,
}

impl MessageError {
    /// Create new [`MessageError`]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get text of error
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for MessageError {}

crate::impl_match_error!(MessageError);
