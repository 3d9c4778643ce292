//! Field escaping

use std::borrow::Cow;

const LINE_BREAKS: [char; 2] = ['\n', '\r'];

/// Make `value` safe to store as a single field on a single line
///
/// Every occurrence of `delimiter`, `\n` and `\r` becomes one space. This is
/// lossy: the original value cannot be recovered on read.
pub fn escape_field<'a>(value: &'a str, delimiter: &str) -> Cow<'a, str> {
    let has_delimiter = !delimiter.is_empty() && value.contains(delimiter);
    if !has_delimiter && !value.contains(LINE_BREAKS) {
        return Cow::Borrowed(value);
    }

    let mut escaped = if has_delimiter {
        value.replace(delimiter, " ")
    } else {
        value.to_string()
    };
    if escaped.contains(LINE_BREAKS) {
        escaped = escaped.replace(LINE_BREAKS, " ");
    }
    Cow::Owned(escaped)
}
