//! All prelude

pub use crate::assertion::{Assertion, Failure, expect};
pub use crate::domain::{
    Aggregate, AnyError, Causer, MatchError, MessageError, MultiError, Wrapped, append, unwind,
    wrap,
};
pub use crate::error::Error;
pub use crate::matcher::{
    ContainMatchedErrorMatcher, ErrorMatcher, MatchErrorMatcher, MatchRegexpMatcher,
    MatchWrappedErrorMatcher, Matcher, contain_matched_error, match_error, match_regexp,
    match_wrapped_error,
};
pub use crate::value::Value;
