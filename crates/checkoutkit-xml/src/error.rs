//! XML error types.
//!
//! Parse failures reach callers as [`XmlError::Syntax`], carrying a bounded
//! copy of the offending document. The low-level variants (`QuickXml`,
//! `Attribute`, `UnexpectedEof`, `Malformed`) are produced while walking a
//! document and are folded into `Syntax` by the document-level entry points.

use std::io;

/// Errors that can occur during checkout XML encoding or decoding.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// Bytes are not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// An I/O error while reading a stream or writing XML.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document is not well-formed.
    #[error("Couldn't parse XML: {reason}. XML: {input}")]
    Syntax {
        /// What the parser objected to.
        reason: String,
        /// The offending document, truncated to the configured snippet limit.
        input: String,
    },

    /// The root element is not the one the target type expects.
    #[error("unexpected root element <{found}>, expected <{expected}>. XML: {input}")]
    UnexpectedRoot {
        /// Root element of the target type.
        expected: &'static str,
        /// Root element found in the document.
        found: String,
        /// The offending document, truncated to the configured snippet limit.
        input: String,
    },

    /// A value is present but cannot be converted to its field's type.
    #[error("invalid value '{value}' for <{field}>: {reason}")]
    FieldCoercion {
        /// Element or attribute name.
        field: String,
        /// The text found in the document.
        value: String,
        /// Why the conversion failed.
        reason: String,
    },

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// An error from quick-xml attribute handling.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// The document ended inside an element.
    #[error("unexpected end of document in {0}")]
    UnexpectedEof(String),

    /// Markup in a place the document structure does not allow.
    #[error("{0}")]
    Malformed(String),
}

impl XmlError {
    /// Build a coercion error for `field`.
    pub(crate) fn coercion(
        field: &str,
        value: &str,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::FieldCoercion {
            field: field.to_owned(),
            value: value.to_owned(),
            reason: reason.to_string(),
        }
    }

    /// Fold low-level parser errors into [`XmlError::Syntax`] quoting `xml`.
    pub(crate) fn with_input(self, xml: &str) -> Self {
        match self {
            Self::QuickXml(_)
            | Self::Attribute(_)
            | Self::UnexpectedEof(_)
            | Self::Malformed(_) => Self::Syntax {
                reason: self.to_string(),
                input: snippet(xml),
            },
            other => other,
        }
    }

    /// Whether this error means the document is not well-formed.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }
}

/// Truncate `xml` to the configured snippet limit, on a char boundary.
pub(crate) fn snippet(xml: &str) -> String {
    let limit = checkoutkit_core::CheckoutConfig::global().error_snippet_limit;
    match xml.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &xml[..cut]),
        None => xml.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_quote_input_in_syntax_error() {
        let err = XmlError::UnexpectedEof("root".to_owned()).with_input("<garbage>");
        assert!(err.is_syntax());
        let message = err.to_string();
        assert!(message.starts_with("Couldn't parse XML"));
        assert!(message.contains("<garbage>"));
    }

    #[test]
    fn test_should_leave_coercion_errors_alone() {
        let err = XmlError::coercion("quantity", "ten", "not a number").with_input("<x/>");
        assert!(matches!(err, XmlError::FieldCoercion { ref field, .. } if field == "quantity"));
    }

    #[test]
    fn test_should_truncate_long_snippets() {
        let limit = checkoutkit_core::CheckoutConfig::global().error_snippet_limit;
        let long = "é".repeat(limit + 10);
        let quoted = snippet(&long);
        assert!(quoted.ends_with("..."));
        assert_eq!(quoted.chars().count(), limit + 3);
    }
}
