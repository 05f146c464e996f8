//! Impl [`ContainMatchedErrorMatcher`]

use super::{ErrorMatcher, Matcher, match_error::matches_error};
use crate::{error::Error, format, value::Value};

/// Matches an error, or any error inside an [`Aggregate`] actual value
///
/// First the actual value is matched as a whole, exactly like
/// [`MatchErrorMatcher`]. A success or a usage error ends the match there. When the
/// actual value is an aggregate, each contained error is then tried in stored order
/// and the first success wins.
///
/// Contained errors are matched as the *expected* side against the matcher's
/// expected value as the *actual* side. When nothing inside matches, the verdict of
/// the last attempt is returned, which is a usage error whenever the expected value
/// is a string or a matcher.
///
/// # Example
/// ```
/// use error_matchers::prelude::*;
///
/// let no_rows = AnyError::from(MessageError::new("sql: no rows in result set"));
/// let not_exist = AnyError::from(MessageError::new("file does not exist"));
/// let errors = Value::error(append(None, [no_rows.clone(), not_exist]));
///
/// assert!(contain_matched_error(no_rows).matches(&errors).unwrap());
/// ```
///
/// [`Aggregate`]: crate::domain::Aggregate
/// [`MatchErrorMatcher`]: super::MatchErrorMatcher
#[derive(Debug, Clone)]
pub struct ContainMatchedErrorMatcher {
    expected: Value,
}

/// Create [`ContainMatchedErrorMatcher`]
pub fn contain_matched_error(expected: impl Into<Value>) -> ContainMatchedErrorMatcher {
    ContainMatchedErrorMatcher::with_expected(expected.into())
}

impl ErrorMatcher for ContainMatchedErrorMatcher {
    fn with_expected(expected: Value) -> Self {
        Self { expected }
    }

    fn expected(&self) -> &Value {
        &self.expected
    }
}

impl Matcher for ContainMatchedErrorMatcher {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), ret, fields(expected = ?self.expected))
    )]
    fn matches(&self, actual: &Value) -> Result<bool, Error> {
        let verdict = matches_error(&self.expected, actual);
        if !matches!(verdict, Ok(false)) {
            #[cfg(feature = "tracing")]
            tracing::trace!("Matched as a whole or misused");

            return verdict;
        }

        let Some(aggregate) = actual.as_error().and_then(|error| error.as_aggregate()) else {
            return verdict;
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(count = aggregate.wrapped_errors().len(), "Searching aggregate");

        let mut last = verdict;
        for contained in aggregate.wrapped_errors() {
            last = matches_error(&Value::Error(contained.clone()), &self.expected);
            if matches!(last, Ok(true)) {
                return last;
            }
        }

        last
    }

    fn failure_message(&self, actual: &Value) -> String {
        format::message(actual, "to contain matched error", &self.expected)
    }

    fn negated_failure_message(&self, actual: &Value) -> String {
        format::message(actual, "not to contain matched error", &self.expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{AnyError, MessageError, append, wrap},
        matcher::{
            impl_tests::impl_test_for_matcher, match_error::tests::impl_all_tests_match_error,
        },
        test_utils::{CustomError, err_no_rows, err_not_exist},
    };

    impl_all_tests_match_error!(ContainMatchedErrorMatcher);

    fn multi(errors: impl IntoIterator<Item = AnyError>) -> Value {
        Value::error(append(None, errors))
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn finds_error_in_aggregate_but_not_the_other_way() -> Result<(), Error> {
        let aggregate = multi([err_no_rows()]);

        assert!(contain_matched_error(err_no_rows()).matches(&aggregate)?);
        assert!(!contain_matched_error(aggregate).matches(&err_no_rows().into())?);

        Ok(())
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn finds_error_among_others() -> Result<(), Error> {
        let aggregate = multi([err_no_rows(), err_not_exist()]);

        assert!(contain_matched_error(err_no_rows()).matches(&aggregate)?);
        assert!(contain_matched_error(err_not_exist()).matches(&aggregate)?);

        Ok(())
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn finds_every_member() -> Result<(), Error> {
        for size in 1..=8 {
            let members: Vec<AnyError> = (0..size)
                .map(|index| AnyError::from(MessageError::new(format!("error {index}"))))
                .collect();
            let aggregate = multi(members.clone());

            for member in members {
                assert!(contain_matched_error(member).matches(&aggregate)?);
            }

            let outsider = AnyError::from(MessageError::new("outsider"));
            assert!(!contain_matched_error(outsider).matches(&aggregate)?);
        }

        Ok(())
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn missing_error_is_not_found() -> Result<(), Error> {
        assert!(!contain_matched_error(err_no_rows()).matches(&multi([]))?);
        assert!(!contain_matched_error(err_not_exist()).matches(&multi([err_no_rows()]))?);

        Ok(())
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn nil_with_aggregate() {
        let empty = Value::error(append(None, [None::<AnyError>]));

        let nil_actual = contain_matched_error(empty.clone()).matches(&Value::Nil);
        assert!(matches!(nil_actual, Err(Error::NilActual)));

        let nil_expected = contain_matched_error(Value::Nil).matches(&empty);
        assert!(matches!(nil_expected, Err(Error::UnsupportedExpected(_))));
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn aggregate_text_matches_as_a_whole() -> Result<(), Error> {
        let aggregate = multi([err_no_rows()]);
        let text = "1 error occurred:\n\t* sql: no rows in result set\n\n";

        assert!(contain_matched_error(text).matches(&aggregate)?);

        Ok(())
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn string_against_members_leaks_last_usage_error() {
        let aggregate = multi([err_no_rows(), AnyError::from(CustomError)]);

        let result = contain_matched_error("an error").matches(&aggregate);
        assert!(matches!(result, Err(Error::NotAnError(_))));
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn wrapped_members_are_not_unwound() -> Result<(), Error> {
        let aggregate = multi([wrap(err_no_rows(), "ctx").unwrap()]);

        assert!(!contain_matched_error(err_no_rows()).matches(&aggregate)?);

        Ok(())
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn messages() {
        let matcher = contain_matched_error(err_no_rows());
        let actual = multi([err_not_exist()]);

        assert!(matcher.failure_message(&actual).contains("\nto contain matched error\n"));
        assert!(
            matcher
                .negated_failure_message(&actual)
                .contains("\nnot to contain matched error\n")
        );
    }
}
