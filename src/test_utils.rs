use crate::domain::{AnyError, MessageError};
use std::fmt;

/// Stand-in for a "no rows" sentinel of a database driver
#[must_use]
pub(crate) fn err_no_rows() -> AnyError {
    AnyError::from(MessageError::new("sql: no rows in result set"))
}

/// Stand-in for a "not exist" sentinel of a filesystem layer
#[must_use]
pub(crate) fn err_not_exist() -> AnyError {
    AnyError::from(MessageError::new("file does not exist"))
}

/// A user-defined error whose text collides with `MessageError::new("an error")`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct CustomError;

impl fmt::Display for CustomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an error")
    }
}

impl std::error::Error for CustomError {}

crate::impl_match_error!(CustomError);
