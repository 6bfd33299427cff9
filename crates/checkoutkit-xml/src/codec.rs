//! UTF-8 conversion between bytes and text.
//!
//! Output never carries a byte-order mark. Streams may start with one, and it
//! is stripped before decoding. Decoding is strict: malformed sequences are
//! an error, never replaced.

use std::io::{BufReader, Read};

use crate::error::XmlError;

/// The UTF-8 byte-order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Encode text as UTF-8 bytes, without a byte-order mark.
#[must_use]
pub fn text_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decode UTF-8 bytes.
///
/// A leading byte-order mark is kept as U+FEFF; use [`strip_bom`] first for
/// transport payloads.
///
/// # Errors
///
/// Returns [`XmlError::Decode`] if `bytes` is not valid UTF-8.
pub fn bytes_to_text(bytes: &[u8]) -> Result<String, XmlError> {
    Ok(std::str::from_utf8(bytes)?.to_owned())
}

/// Drop one leading UTF-8 byte-order mark, if present.
#[must_use]
pub fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

/// Read a stream to its end and decode it, stripping a leading byte-order mark.
///
/// The stream is consumed but not closed; pass `&mut stream` to keep using it.
///
/// # Errors
///
/// Returns [`XmlError::Io`] if reading fails and [`XmlError::Decode`] if the
/// content is not valid UTF-8.
pub fn stream_to_text<R: Read>(stream: R) -> Result<String, XmlError> {
    let mut buf = Vec::new();
    BufReader::new(stream).read_to_end(&mut buf)?;
    if buf.starts_with(UTF8_BOM) {
        buf.drain(..UTF8_BOM.len());
    }
    String::from_utf8(buf).map_err(|e| XmlError::Decode(e.utf8_error()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use proptest::prelude::*;

    use super::*;

    const SAMPLE: &str = "abc€Œ™©®åëñöÿ!\"#$%&'()*+,-./שּׁзγəˆỊ₪€₧ﻷ";

    #[test]
    fn test_should_round_trip_multilingual_text() {
        assert_eq!(bytes_to_text(&text_to_bytes(SAMPLE)).unwrap(), SAMPLE);
    }

    #[test]
    fn test_should_round_trip_astral_characters() {
        let text = "cart 🛒 𝄞 𠜎";
        assert_eq!(bytes_to_text(&text_to_bytes(text)).unwrap(), text);
    }

    #[test]
    fn test_should_not_emit_bom() {
        assert!(!text_to_bytes(SAMPLE).starts_with(UTF8_BOM));
    }

    #[test]
    fn test_should_reject_malformed_utf8() {
        let err = bytes_to_text(&[b'a', 0xC3, 0x28]).unwrap_err();
        assert!(matches!(err, XmlError::Decode(_)));
    }

    #[test]
    fn test_should_decode_stream() {
        let text = stream_to_text(Cursor::new(text_to_bytes(SAMPLE))).unwrap();
        assert_eq!(text, SAMPLE);
    }

    #[test]
    fn test_should_strip_bom_from_stream() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"<garbage/>");
        assert_eq!(stream_to_text(bytes.as_slice()).unwrap(), "<garbage/>");
        assert_eq!(strip_bom(&bytes), b"<garbage/>");
    }

    #[test]
    fn test_should_leave_borrowed_stream_usable() {
        let mut cursor = Cursor::new(b"<a/>".to_vec());
        let text = stream_to_text(&mut cursor).unwrap();
        assert_eq!(text, "<a/>");
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_should_reject_malformed_stream() {
        let err = stream_to_text(&[0xFF, 0xFE, 0x00][..]).unwrap_err();
        assert!(matches!(err, XmlError::Decode(_)));
    }

    proptest! {
        #[test]
        fn test_codec_round_trip(s in any::<String>()) {
            prop_assert_eq!(bytes_to_text(&text_to_bytes(&s)).unwrap(), s);
        }
    }
}
