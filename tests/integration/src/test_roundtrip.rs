//! Serialize/deserialize round-trip integration tests.

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use chrono::Utc;
    use checkoutkit_model::{
        CheckoutShoppingCart, FinancialOrderState, NewOrderNotification,
        NotificationAcknowledgment,
    };
    use checkoutkit_xml::{
        Inbound, UTF8_BOM, bytes_to_text, from_slice, from_xml, parse_inbound,
        parse_inbound_stream, text_to_bytes, to_xml,
    };
    use rust_decimal::Decimal;

    use crate::{GOOGLE_ORDER_NUMBER, SERIAL_NUMBER, checkout_cart, new_order_notification};

    #[test]
    fn test_should_round_trip_new_order_notification() {
        let n1 = new_order_notification();
        let xml = bytes_to_text(&to_xml(&n1).unwrap()).unwrap();
        let n2: NewOrderNotification = from_xml(&xml).unwrap();

        assert_eq!(n2.google_order_number, n1.google_order_number);
        assert_eq!(n2.buyer_id, Some(379_653));
        assert_eq!(n2.serial_number, SERIAL_NUMBER);
        assert_eq!(n2.financial_order_state, FinancialOrderState::Reviewing);
        assert_eq!(n2.timestamp, n1.timestamp);
        assert_eq!(n2.shopping_cart.items.len(), 2);

        let first = &n2.shopping_cart.items[0];
        assert_eq!(first.item_name, "Vanilla Coffee Syrup");
        assert_eq!(first.item_description, "From Espresso House");
        assert_eq!(first.quantity, 10);
        assert_eq!(first.unit_price.currency(), "USD");
        assert_eq!(first.unit_price.value(), Decimal::new(505, 2));

        let second = &n2.shopping_cart.items[1];
        assert_eq!(second.item_name, "Nescafé Cappuccino ©");
        assert_eq!(second.item_description, "שּׁзγəˆỊ₪€₧ﻷ");
        assert_eq!(second.quantity, 2);
        assert_eq!(second.unit_price.currency(), "SEK");
        assert_eq!(second.unit_price.value(), Decimal::new(2350, 2));

        assert_eq!(n2, n1);
    }

    #[test]
    fn test_should_round_trip_current_timestamp() {
        let n1 = NewOrderNotification::new(SERIAL_NUMBER, GOOGLE_ORDER_NUMBER, Utc::now());
        let n2: NewOrderNotification = from_slice(&to_xml(&n1).unwrap()).unwrap();
        assert_eq!(n2.timestamp, n1.timestamp);
    }

    #[test]
    fn test_should_round_trip_sub_millisecond_timestamp() {
        let mut n1 = new_order_notification();
        n1.timestamp += chrono::Duration::nanoseconds(817_959);
        let n2: NewOrderNotification = from_slice(&to_xml(&n1).unwrap()).unwrap();
        assert_eq!(n2.timestamp, n1.timestamp);
        assert_eq!(n2, n1);
    }

    #[test]
    fn test_should_infer_notification_type_from_root() {
        let xml = to_xml(&new_order_notification()).unwrap();
        let parsed = parse_inbound(&bytes_to_text(&xml).unwrap()).unwrap();
        match parsed {
            Some(Inbound::NewOrder(n)) => assert_eq!(n.google_order_number, GOOGLE_ORDER_NUMBER),
            other => panic!("expected a new order notification, got {other:?}"),
        }
    }

    #[test]
    fn test_should_parse_stream_with_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(&to_xml(&new_order_notification()).unwrap());
        let parsed = parse_inbound_stream(Cursor::new(bytes)).unwrap().expect("known root");
        assert_eq!(parsed.serial_number(), SERIAL_NUMBER);
        assert_eq!(parsed.google_order_number(), Some(GOOGLE_ORDER_NUMBER));
    }

    #[test]
    fn test_should_round_trip_checkout_cart() {
        let cart = checkout_cart();
        let parsed: CheckoutShoppingCart = from_slice(&to_xml(&cart).unwrap()).unwrap();
        assert_eq!(parsed, cart);
    }

    #[test]
    fn test_should_keep_serialized_text_free_of_raw_markup_characters() {
        let mut cart = checkout_cart();
        cart.shopping_cart.items[0].item_description = "$25 > $20 & $100 < $200".to_owned();
        let xml = bytes_to_text(&to_xml(&cart).unwrap()).unwrap();
        assert!(xml.contains("$25 &#x3e; $20 &#x26; $100 &#x3c; $200"));
        let parsed: CheckoutShoppingCart = from_xml(&xml).unwrap();
        assert_eq!(parsed.shopping_cart.items[0].item_description, "$25 > $20 & $100 < $200");
    }

    #[test]
    fn test_should_acknowledge_notification() {
        let notification = parse_inbound(
            &bytes_to_text(&to_xml(&new_order_notification()).unwrap()).unwrap(),
        )
        .unwrap()
        .expect("known root");
        let ack = NotificationAcknowledgment::for_serial(notification.serial_number());
        let xml = bytes_to_text(&to_xml(&ack).unwrap()).unwrap();
        assert!(xml.contains(&format!("serial-number=\"{SERIAL_NUMBER}\"")));
    }

    #[test]
    fn test_should_encode_without_bom() {
        let bytes = text_to_bytes("Nescafé Cappuccino ©");
        assert!(!bytes.starts_with(UTF8_BOM));
        assert_eq!(bytes_to_text(&bytes).unwrap(), "Nescafé Cappuccino ©");
    }
}
