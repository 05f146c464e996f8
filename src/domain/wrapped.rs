//! Impl [`Wrapped`] and unwinding of cause chains

use super::{AnyError, Causer, MatchError, MessageError};
use std::{
    any::Any,
    borrow::Cow,
    fmt, mem,
    panic::Location,
    sync::{
        Arc, LazyLock,
        atomic::{AtomicU64, Ordering},
    },
};

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(0);

/// Left in place of a cause that was moved out while dropping a chain
static DETACHED: LazyLock<AnyError> =
    LazyLock::new(|| AnyError::new(MessageError::new("detached cause")));

/// Where a [`Wrapped`] was created
///
/// Carries the call site and a process-unique serial, so wraps built separately
/// never compare equal even when they come from the same line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    location: &'static Location<'static>,
    serial: u64,
}

impl Origin {
    #[track_caller]
    fn capture() -> Self {
        Self {
            location: Location::caller(),
            serial: NEXT_SERIAL.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Call site of the wrap
    #[inline]
    #[must_use]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

/// An error annotated with context around its cause
///
/// Displays as `"<message>: <cause>"`.
///
/// # Example
/// ```
/// use error_matchers::prelude::*;
///
/// let cause = AnyError::from(MessageError::new("sql: no rows in result set"));
/// let wrapped = Wrapped::new(cause, "loading user");
///
/// assert_eq!(wrapped.to_string(), "loading user: sql: no rows in result set");
/// ```
#[derive(Debug, Clone)]
pub struct Wrapped {
    message: Cow<'static, str>,
    cause: AnyError,
    origin: Origin,
}

impl Wrapped {
    /// Create new [`Wrapped`] around `cause`
    #[track_caller]
    pub fn new(cause: AnyError, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            cause,
            origin: Origin::capture(),
        }
    }

    /// Get context message of this layer
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get origin of this layer
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Origin {
        self.origin
    }
}

/// Unlinks uniquely owned layers one by one, so dropping a deep chain does not
/// recurse once per layer.
impl Drop for Wrapped {
    fn drop(&mut self) {
        let mut cause = mem::replace(&mut self.cause, DETACHED.clone());
        while let Some(inner) = Arc::get_mut(&mut cause.0).and_then(|error| error.take_cause()) {
            cause = inner;
        }
    }
}

impl PartialEq for Wrapped {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin
            && self.message == other.message
            && self.cause.eq_dyn(&*other.cause)
    }
}

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.cause)
    }
}

impl std::error::Error for Wrapped {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.cause.as_std())
    }
}

impl Causer for Wrapped {
    fn cause(&self) -> &AnyError {
        &self.cause
    }
}

impl MatchError for Wrapped {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_dyn(&self, other: &dyn MatchError) -> bool {
        super::eq_by_value(self, other)
    }

    fn as_causer(&self) -> Option<&dyn Causer> {
        Some(self)
    }

    fn take_cause(&mut self) -> Option<AnyError> {
        Some(mem::replace(&mut self.cause, DETACHED.clone()))
    }
}

/// Wrap `cause` with a context message
///
/// A missing cause stays missing, so wrapping nil yields nil.
///
/// # Example
/// ```
/// use error_matchers::prelude::*;
///
/// let cause = AnyError::from(MessageError::new("file does not exist"));
/// let wrapped = wrap(wrap(cause, "reading config"), "starting");
///
/// assert_eq!(
///     wrapped.unwrap().to_string(),
///     "starting: reading config: file does not exist"
/// );
/// assert!(wrap(None::<AnyError>, "nothing").is_none());
/// ```
#[track_caller]
pub fn wrap(
    cause: impl Into<Option<AnyError>>,
    message: impl Into<Cow<'static, str>>,
) -> Option<AnyError> {
    let cause = cause.into()?;

    Some(AnyError::new(Wrapped::new(cause, message)))
}

/// Follow the cause chain of `error` down to the first error without a cause
///
/// Iterative, so chain depth is bounded by memory only. A cyclic chain never
/// terminates. Chains built from [`AnyError`] are immutable and cannot form a cycle.
#[must_use]
pub fn unwind(error: &AnyError) -> &AnyError {
    let mut current = error;
    while let Some(causer) = current.as_causer() {
        current = causer.cause();
    }

    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{CustomError, err_no_rows};

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn display_prepends_context() {
        let wrapped = wrap(wrap(err_no_rows(), "wrapped this error"), "another wrapping").unwrap();

        assert_eq!(
            wrapped.to_string(),
            "another wrapping: wrapped this error: sql: no rows in result set"
        );
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn wrap_nil_is_nil() {
        assert!(wrap(None::<AnyError>, "wrapped this error").is_none());
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn clone_is_equal_but_rebuild_is_not() {
        let custom = AnyError::from(CustomError);
        let first = Wrapped::new(custom.clone(), "foo");
        let second = Wrapped::new(custom, "foo");

        assert_eq!(first, first.clone());
        assert_ne!(first, second);
        assert_eq!(first.origin().location().file(), file!());
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn wrap_records_its_caller() {
        let (wrapped, line) = (wrap(err_no_rows(), "ctx").unwrap(), line!());
        let wrapped = wrapped.as_any().downcast_ref::<Wrapped>().unwrap();

        assert_eq!(wrapped.origin().location().file(), file!());
        assert_eq!(wrapped.origin().location().line(), line);
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn deep_chain_drops_on_small_stack() {
        let depth = 100_000;

        let handle = std::thread::Builder::new()
            .stack_size(128 * 1024)
            .spawn(move || {
                let base = err_no_rows();
                let mut chain = Some(base.clone());
                for _ in 0..depth {
                    chain = wrap(chain, "layer");
                }

                let chain = chain.unwrap();
                assert!(unwind(&chain).eq_dyn(&*base));
                drop(chain);
            })
            .unwrap();

        handle.join().unwrap();
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn shared_cause_survives_drop() {
        let inner = wrap(err_no_rows(), "inner").unwrap();
        let outer = wrap(inner.clone(), "outer").unwrap();
        drop(outer);

        assert_eq!(inner.to_string(), "inner: sql: no rows in result set");
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn unwind_reaches_innermost() {
        let base = err_no_rows();
        let wrapped = wrap(wrap(base.clone(), "a"), "b").unwrap();

        assert!(unwind(&wrapped).eq_dyn(&*base));
        assert!(unwind(&base).eq_dyn(&*base));
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn source_follows_cause() {
        let wrapped = wrap(err_no_rows(), "ctx").unwrap();
        let source = wrapped.as_std().source().unwrap();

        assert_eq!(source.to_string(), "sql: no rows in result set");
    }
}
