//! Rendering of operands and failure messages
//!
//! Messages follow the layout
//! ```text
//! Expected
//!     <type>: actual
//! to match error
//!     <type>: expected
//! ```

use crate::value::Value;

/// Default indentation unit
pub const DEFAULT_INDENT: &str = "    ";

/// Default maximum length of one rendered operand
pub const DEFAULT_MAX_LENGTH: usize = 4000;

const TRUNCATED_NOTICE: &str =
    "...\nRepresentation truncated as it exceeds the configured maximum length.";

/// Options for [`message_with`] and [`object_with`]
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FormatOptions {
    /// Unit of indentation
    indent: String,

    /// Longest rendering of one operand, in characters. `0` disables truncation
    max_length: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl FormatOptions {
    /// Create new [`FormatOptions`] with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set unit of indentation
    #[must_use]
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set maximum rendered length, `0` for unlimited
    #[must_use]
    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Get unit of indentation
    #[inline]
    #[must_use]
    pub fn get_indent(&self) -> &str {
        &self.indent
    }

    /// Get maximum rendered length
    #[inline]
    #[must_use]
    pub const fn get_max_length(&self) -> usize {
        self.max_length
    }
}

/// Render a failure message with default [`FormatOptions`]
///
/// # Example
/// ```
/// use error_matchers::format::message;
/// use error_matchers::prelude::*;
///
/// let text = message(&Value::from("a"), "to equal", &Value::from("b"));
/// assert_eq!(text, "Expected\n    <string>: a\nto equal\n    <string>: b");
/// ```
#[must_use]
pub fn message(actual: &Value, verb: &str, expected: &Value) -> String {
    message_with(&FormatOptions::default(), actual, verb, expected)
}

/// Render a failure message
#[must_use]
pub fn message_with(
    options: &FormatOptions,
    actual: &Value,
    verb: &str,
    expected: &Value,
) -> String {
    format!(
        "Expected\n{}\n{verb}\n{}",
        object_with(options, actual, 1),
        object_with(options, expected, 1)
    )
}

/// Render one operand with default [`FormatOptions`]
#[must_use]
pub fn object(value: &Value, indentation: usize) -> String {
    object_with(&FormatOptions::default(), value, indentation)
}

/// Render one operand as `<type>: value` at `indentation` levels
#[must_use]
pub fn object_with(options: &FormatOptions, value: &Value, indentation: usize) -> String {
    let indent = options.indent.repeat(indentation);
    let rendered = truncate(render(value), options.max_length);

    format!(
        "{indent}<{}>: {}",
        value.type_name(),
        rendered.replace('\n', &format!("\n{indent}"))
    )
}

fn render(value: &Value) -> String {
    match value {
        Value::Nil => "nil".to_string(),
        Value::Error(error) => error.to_string(),
        Value::Str(text) => text.clone(),
        Value::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        Value::Int(number) => number.to_string(),
        Value::Matcher(matcher) => format!("{matcher:?}"),
    }
}

fn truncate(mut rendered: String, max_length: usize) -> String {
    if max_length == 0 {
        return rendered;
    }

    if let Some((cut, _)) = rendered.char_indices().nth(max_length) {
        rendered.truncate(cut);
        rendered.push_str(TRUNCATED_NOTICE);
    }

    rendered
}
