//! Escaping of reserved characters in text nodes.
//!
//! `<`, `>` and `&` are written as hexadecimal character references
//! (`&#x3c;`, `&#x3e;`, `&#x26;`). The input is scanned once, left to right,
//! so the references produced for one character are never escaped again.

use std::borrow::Cow;

/// Replace `<`, `>` and `&` with numeric character references.
///
/// Borrows the input when it contains none of them.
#[must_use]
pub fn escape_xml_chars(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(['<', '>', '&']) else {
        return Cow::Borrowed(text);
    };

    let mut escaped = String::with_capacity(text.len() + 16);
    escaped.push_str(&text[..first]);
    for ch in text[first..].chars() {
        match ch {
            '<' => escaped.push_str("&#x3c;"),
            '>' => escaped.push_str("&#x3e;"),
            '&' => escaped.push_str("&#x26;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
