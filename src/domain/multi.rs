//! Impl [`MultiError`]

use super::{Aggregate, AnyError, MatchError};
use crate::value::Value;
use std::{any::Any, fmt};

/// An ordered collection of errors reported as one
///
/// # Example
/// ```
/// use error_matchers::prelude::*;
///
/// let no_rows = AnyError::from(MessageError::new("sql: no rows in result set"));
/// let not_exist = AnyError::from(MessageError::new("file does not exist"));
///
/// let errors = append(None, [no_rows, not_exist]);
/// assert_eq!(errors.len(), 2);
/// assert_eq!(
///     errors.to_string(),
///     "2 errors occurred:\n\t* sql: no rows in result set\n\t* file does not exist\n\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MultiError {
    errors: Vec<AnyError>,
}

impl MultiError {
    /// Create new empty [`MultiError`]
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add `error`, flattening it when it is a [`MultiError`] itself
    pub fn push(&mut self, error: AnyError) {
        match error.as_any().downcast_ref::<Self>() {
            Some(nested) => self.errors.extend(nested.errors.iter().cloned()),
            None => self.errors.push(error),
        }
    }

    /// Get contained errors
    #[inline]
    #[must_use]
    pub fn errors(&self) -> &[AnyError] {
        &self.errors
    }

    /// Count of contained errors
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// No errors are contained
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a [`Value`], which is nil when nothing was collected
    #[must_use]
    pub fn into_value(self) -> Value {
        if self.is_empty() {
            Value::Nil
        } else {
            Value::error(self)
        }
    }
}

impl PartialEq for MultiError {
    fn eq(&self, other: &Self) -> bool {
        self.errors.len() == other.errors.len()
            && self
                .errors
                .iter()
                .zip(&other.errors)
                .all(|(left, right)| left.eq_dyn(&**right))
    }
}

/// Lists one error per tab-indented line. An empty collection keeps the bare tab
/// line: `"0 errors occurred:\n\t\n\n"`.
impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.len() == 1 {
            write!(f, "1 error occurred:\n\t")?;
        } else {
            write!(f, "{} errors occurred:\n\t", self.errors.len())?;
        }

        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                write!(f, "\n\t")?;
            }
            write!(f, "* {error}")?;
        }

        write!(f, "\n\n")
    }
}

impl std::error::Error for MultiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.errors.first().map(AnyError::as_std)
    }
}

impl Aggregate for MultiError {
    fn wrapped_errors(&self) -> &[AnyError] {
        &self.errors
    }
}

impl MatchError for MultiError {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_dyn(&self, other: &dyn MatchError) -> bool {
        super::eq_by_value(self, other)
    }

    fn as_aggregate(&self) -> Option<&dyn Aggregate> {
        Some(self)
    }
}

impl FromIterator<AnyError> for MultiError {
    fn from_iter<I: IntoIterator<Item = AnyError>>(iter: I) -> Self {
        let mut multi = Self::new();
        for error in iter {
            multi.push(error);
        }

        multi
    }
}

/// Append `errors` to `error`, producing a [`MultiError`]
///
/// `error` is extended in place when it already is a [`MultiError`], otherwise it
/// becomes the first entry. Nil entries are skipped and nested [`MultiError`]s are
/// flattened, so `append(None, [])` is an empty collection.
pub fn append<I>(error: Option<AnyError>, errors: I) -> MultiError
where
    I: IntoIterator,
    I::Item: Into<Option<AnyError>>,
{
    error
        .into_iter()
        .chain(errors.into_iter().filter_map(Into::into))
        .collect()
}
