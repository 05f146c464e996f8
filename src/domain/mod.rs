//! Error values that matchers compare
//!
//! Matchers only know three things about an error: its text, whether it wraps a
//! cause ([`Causer`]) and whether it collects other errors ([`Aggregate`]).
//! Everything else is opaque and compared through [`MatchError::eq_dyn`].

pub mod message;
pub mod multi;
pub mod wrapped;

use std::{any::Any, fmt, ops::Deref, sync::Arc};

pub use message::MessageError;
pub use multi::{MultiError, append};
pub use wrapped::{Wrapped, unwind, wrap};

/// An error that can take part in a match
///
/// Use [`impl_match_error!`] for plain errors with value equality; implement it by
/// hand when the error exposes a capability.
///
/// # Example
/// ```
/// use error_matchers::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// struct Timeout;
///
/// impl std::fmt::Display for Timeout {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("timed out")
///     }
/// }
///
/// impl std::error::Error for Timeout {}
///
/// error_matchers::impl_match_error!(Timeout);
///
/// let error = AnyError::from(Timeout);
/// assert!(error.eq_dyn(&*AnyError::from(Timeout)));
/// ```
///
/// [`impl_match_error!`]: crate::impl_match_error
pub trait MatchError: std::error::Error + Send + Sync + 'static {
    /// Upcast used for downcasting in [`MatchError::eq_dyn`]
    fn as_any(&self) -> &dyn Any;

    /// Structural equality against an error of unknown type
    ///
    /// Errors of different concrete types are never equal.
    fn eq_dyn(&self, other: &dyn MatchError) -> bool;

    /// Returns the [`Causer`] capability if this error wraps another one
    fn as_causer(&self) -> Option<&dyn Causer> {
        None
    }

    /// Returns the [`Aggregate`] capability if this error collects others
    fn as_aggregate(&self) -> Option<&dyn Aggregate> {
        None
    }

    /// Name of the concrete type, used in failure messages
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Move the immediate cause out, used to drop long chains iteratively
    #[doc(hidden)]
    fn take_cause(&mut self) -> Option<AnyError> {
        None
    }
}

/// Capability of an error carrying one immediate cause
pub trait Causer {
    /// The error this one wraps
    fn cause(&self) -> &AnyError;
}

/// Capability of an error holding an ordered collection of errors
pub trait Aggregate {
    /// Contained errors in the order they were stored
    fn wrapped_errors(&self) -> &[AnyError];
}

/// Value equality helper for [`MatchError::eq_dyn`] implementations
#[must_use]
pub fn eq_by_value<E>(this: &E, other: &dyn MatchError) -> bool
where
    E: PartialEq + 'static,
{
    other
        .as_any()
        .downcast_ref::<E>()
        .is_some_and(|other| this == other)
}

/// Implements [`MatchError`] for an error type with value equality
///
/// The type must implement [`std::error::Error`], [`PartialEq`], [`Send`] and [`Sync`].
#[macro_export]
macro_rules! impl_match_error {
    ($ty:ty) => {
        impl $crate::domain::MatchError for $ty {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn eq_dyn(&self, other: &dyn $crate::domain::MatchError) -> bool {
                $crate::domain::eq_by_value(self, other)
            }
        }
    };
}

/// Shared handle to any [`MatchError`]
///
/// Cloning is cheap. Wrapping and aggregation share their inner errors through it.
#[derive(Clone)]
pub struct AnyError(Arc<dyn MatchError>);

impl AnyError {
    /// Wrap an error into a shared handle
    pub fn new(error: impl MatchError) -> Self {
        Self(Arc::new(error))
    }

    /// Borrow as a plain [`std::error::Error`]
    #[must_use]
    pub fn as_std(&self) -> &(dyn std::error::Error + 'static) {
        &*self.0
    }
}

impl<E> From<E> for AnyError
where
    E: MatchError,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl Deref for AnyError {
    type Target = dyn MatchError;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}
