//! Fragment extraction integration tests.

#[cfg(test)]
mod tests {
    use checkoutkit_xml::{bytes_to_text, element_value, to_xml, top_element};

    use crate::{GOOGLE_ORDER_NUMBER, SERIAL_NUMBER, new_order_notification};

    fn notification_xml() -> String {
        bytes_to_text(&to_xml(&new_order_notification()).unwrap()).unwrap()
    }

    #[test]
    fn test_should_find_top_element() {
        assert_eq!(top_element(&notification_xml()), "new-order-notification");
    }

    #[test]
    fn test_should_extract_order_number() {
        assert_eq!(element_value(&notification_xml(), "google-order-number"), GOOGLE_ORDER_NUMBER);
    }

    #[test]
    fn test_should_extract_serial_number() {
        assert_eq!(element_value(&notification_xml(), "serial-number"), SERIAL_NUMBER);
    }

    #[test]
    fn test_should_return_empty_for_missing_element() {
        assert_eq!(element_value(&notification_xml(), "wacky-element"), "");
    }

    #[test]
    fn test_should_extract_first_item_only() {
        let xml = notification_xml();
        assert_eq!(element_value(&xml, "item-name"), "Vanilla Coffee Syrup");
        assert_eq!(element_value(&xml, "unit-price"), "5.05");
        assert_eq!(element_value(&xml, "buyer-id"), "379653");
    }

    #[test]
    fn test_should_agree_with_full_parse_on_escaped_text() {
        let mut notification = new_order_notification();
        notification.shopping_cart.items[0].item_name = "Fish & Chips <large>".to_owned();
        let xml = bytes_to_text(&to_xml(&notification).unwrap()).unwrap();
        assert_eq!(element_value(&xml, "item-name"), "Fish & Chips <large>");
    }
}
