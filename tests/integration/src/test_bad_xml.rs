//! Malformed and unexpected document integration tests.

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use checkoutkit_model::NewOrderNotification;
    use checkoutkit_xml::{
        UTF8_BOM, XmlError, bytes_to_text, from_xml, parse_inbound, parse_inbound_bytes,
        parse_inbound_stream, to_xml,
    };

    use crate::new_order_notification;

    fn notification_xml() -> String {
        bytes_to_text(&to_xml(&new_order_notification()).unwrap()).unwrap()
    }

    #[test]
    fn test_should_fail_on_text_that_is_not_xml() {
        let invalid = "This is not valid XML.";
        let err = parse_inbound(invalid).unwrap_err();
        assert!(err.is_syntax());
        assert!(err.to_string().contains(invalid));
    }

    #[test]
    fn test_should_fail_on_invalid_beginning() {
        let xml = format!("blah{}", notification_xml());
        let err = parse_inbound(&xml).unwrap_err();
        assert!(err.is_syntax());
        assert!(err.to_string().contains(&xml));
    }

    #[test]
    fn test_should_fail_on_invalid_end() {
        let xml = format!("{}blah", notification_xml());
        let err = parse_inbound(&xml).unwrap_err();
        assert!(err.is_syntax());
        assert!(err.to_string().contains(&xml));
    }

    #[test]
    fn test_should_reject_garbage_root_for_typed_parse() {
        let err = from_xml::<NewOrderNotification>("<garbage />").unwrap_err();
        assert!(matches!(err, XmlError::UnexpectedRoot { ref found, .. } if found == "garbage"));
    }

    #[test]
    fn test_should_return_none_for_garbage_stream() {
        let parsed = parse_inbound_stream(Cursor::new(b"<garbage />".to_vec())).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_should_not_accept_unclosed_garbage_with_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"<garbage>");
        match parse_inbound_bytes(&bytes) {
            Ok(parsed) => assert!(parsed.is_none()),
            Err(err) => assert!(err.to_string().contains("Couldn't parse XML")),
        }
    }

    #[test]
    fn test_should_fail_on_truncated_notification() {
        let xml = notification_xml();
        let truncated = &xml[..xml.find("</items>").expect("items end tag")];
        let err = parse_inbound(truncated).unwrap_err();
        assert!(err.is_syntax());
    }

    #[test]
    fn test_should_reject_malformed_utf8() {
        let err = parse_inbound_bytes(&[b'<', 0xC3, 0x28, b'/', b'>']).unwrap_err();
        assert!(matches!(err, XmlError::Decode(_)));
    }

    #[test]
    fn test_should_name_field_that_cannot_be_coerced() {
        let xml = notification_xml().replace("<quantity>10</quantity>", "<quantity>ten</quantity>");
        match parse_inbound(&xml).unwrap_err() {
            XmlError::FieldCoercion { field, value, .. } => {
                assert_eq!(field, "quantity");
                assert_eq!(value, "ten");
            }
            other => panic!("expected FieldCoercion, got {other:?}"),
        }
    }

    #[test]
    fn test_should_reject_amount_too_large_for_two_digits() {
        let xml = notification_xml().replace(
            "<unit-price currency=\"USD\">5.05</unit-price>",
            "<unit-price currency=\"USD\">79228162514264337593543950335</unit-price>",
        );
        match parse_inbound(&xml).unwrap_err() {
            XmlError::FieldCoercion { field, .. } => assert_eq!(field, "unit-price"),
            other => panic!("expected FieldCoercion, got {other:?}"),
        }
    }
}
