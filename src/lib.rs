//! `error-matchers` - assertion matchers for errors hidden behind aggregation and wrapping
//!
//! Provides two matchers on top of a plain "is this that error" predicate:
//! - [`contain_matched_error`]: the actual error matches, or one of the errors
//!   collected in an aggregate actual value does
//! - [`match_wrapped_error`]: the errors match after stripping context from
//!   whichever side is wrapped
//!
//! ## Key Features
//! * 🧩 **Capabilities, not types**: any error can opt into wrapping ([`Causer`]) or
//!   aggregation ([`Aggregate`])
//! * 🔍 **Flexible expectations**: expect an error, its text, or a nested matcher
//! * 🚨 **Usage errors**: a malformed assertion is reported apart from a failed one
//!
//! ## Usage
//! Add to `Cargo.toml`:
//! ```toml
//! [dev-dependencies]
//! error-matchers = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! ## Examples
//!
//! ### Aggregates
//! ```
//! use error_matchers::prelude::*;
//!
//! let no_rows = AnyError::from(MessageError::new("sql: no rows in result set"));
//! let not_exist = AnyError::from(MessageError::new("file does not exist"));
//!
//! let errors = append(None, [no_rows.clone(), not_exist.clone()]);
//! expect(Value::error(errors)).to(&contain_matched_error(no_rows)).unwrap();
//! ```
//!
//! ### Wrapping
//! ```
//! use error_matchers::prelude::*;
//!
//! let no_rows = AnyError::from(MessageError::new("sql: no rows in result set"));
//! let wrapped = wrap(wrap(no_rows.clone(), "loading user"), "handling request");
//!
//! expect(wrapped.clone()).to(&match_wrapped_error(no_rows.clone())).unwrap();
//! expect(no_rows).to(&match_wrapped_error(wrapped)).unwrap();
//! ```
//!
//! ### Nested matchers
//! ```
//! use error_matchers::prelude::*;
//!
//! let error = AnyError::from(MessageError::new("error 123 abc"));
//! expect(error).to(&match_wrapped_error(Value::matcher(match_regexp(r"\d{3}")))).unwrap();
//! ```
//!
//! [`contain_matched_error`]: crate::matcher::contain_matched_error
//! [`match_wrapped_error`]: crate::matcher::match_wrapped_error
//! [`Causer`]: crate::domain::Causer
//! [`Aggregate`]: crate::domain::Aggregate

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![warn(clippy::nursery)]
#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::panic)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::as_conversions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assertion;
pub mod domain;
pub mod error;
pub mod format;
pub mod matcher;
pub mod prelude;
pub mod value;

#[cfg(test)]
pub(crate) mod test_utils;
