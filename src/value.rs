//! Operands handed to matchers
//!
//! Assertions are written against loosely typed values: the actual side may be
//! nil or not an error at all, and the expected side may be an error, a string or
//! another matcher. [`Value`] keeps that shape so misuse is reported as a usage
//! error instead of being ruled out at compile time.

use crate::{
    domain::{AnyError, MatchError},
    matcher::Matcher,
};
use std::{fmt, sync::Arc};

/// A loosely typed operand
#[derive(Clone, Default)]
pub enum Value {
    /// No value at all
    #[default]
    Nil,

    /// An error
    Error(AnyError),

    /// Text
    Str(String),

    /// Raw bytes
    Bytes(Vec<u8>),

    /// An integer
    Int(i64),

    /// A nested matcher
    Matcher(Arc<dyn Matcher>),
}

impl Value {
    /// Create [`Value::Error`] from any [`MatchError`]
    pub fn error(error: impl MatchError) -> Self {
        Self::Error(AnyError::new(error))
    }

    /// Create [`Value::Matcher`]
    pub fn matcher(matcher: impl Matcher + 'static) -> Self {
        Self::Matcher(Arc::new(matcher))
    }

    /// Value is nil
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Get the error, if this value is one
    #[inline]
    #[must_use]
    pub const fn as_error(&self) -> Option<&AnyError> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Name of the value's type, used in failure messages
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Error(error) => error.type_name(),
            Self::Str(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Int(_) => "int",
            Self::Matcher(matcher) => matcher.type_name(),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("Nil"),
            Self::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Self::Str(text) => f.debug_tuple("Str").field(text).finish(),
            Self::Bytes(bytes) => f.debug_tuple("Bytes").field(bytes).finish(),
            Self::Int(number) => f.debug_tuple("Int").field(number).finish(),
            Self::Matcher(matcher) => f.debug_tuple("Matcher").field(matcher).finish(),
        }
    }
}

impl From<AnyError> for Value {
    fn from(error: AnyError) -> Self {
        Self::Error(error)
    }
}

impl From<Option<AnyError>> for Value {
    fn from(error: Option<AnyError>) -> Self {
        error.map_or(Self::Nil, Self::Error)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{matcher::match_regexp::match_regexp, test_utils::err_no_rows};

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn conversions() {
        assert!(Value::from(None::<AnyError>).is_nil());
        assert!(Value::from(Some(err_no_rows())).as_error().is_some());
        assert!(matches!(Value::from("an error"), Value::Str(text) if text == "an error"));
        assert!(matches!(Value::from(b"an error".as_slice()), Value::Bytes(_)));
        assert!(matches!(Value::from(3), Value::Int(3)));
        assert!(Value::default().is_nil());
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn type_names() {
        assert_eq!(Value::Nil.type_name(), "nil");
        assert_eq!(Value::from("x").type_name(), "string");
        assert_eq!(Value::from(3).type_name(), "int");
        assert!(Value::from(err_no_rows()).type_name().ends_with("MessageError"));
        assert!(
            Value::matcher(match_regexp(r"\d"))
                .type_name()
                .ends_with("MatchRegexpMatcher")
        );
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn debug_output() {
        assert_eq!(format!("{:?}", Value::Nil), "Nil");
        assert_eq!(format!("{:?}", Value::from(3)), "Int(3)");
        assert_eq!(format!("{:?}", Value::from("x")), "Str(\"x\")");
    }
}
