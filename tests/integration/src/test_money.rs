//! Money normalization integration tests.

#[cfg(test)]
mod tests {
    use checkoutkit_model::{ChargeOrderRequest, Money};
    use checkoutkit_xml::{bytes_to_text, element_value, to_xml};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    use crate::GOOGLE_ORDER_NUMBER;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_should_normalize_amounts() {
        assert_eq!(Money::new(dec("12.99")).value(), dec("12.99"));
        assert_eq!(Money::with_currency("USD", dec("12.95")).value(), dec("12.95"));
        assert_eq!(Money::new(dec("12.994")).value(), dec("12.99"));
        assert_eq!(Money::with_currency("USD", dec("12.975")).value(), dec("12.98"));
        assert_eq!(Money::with_currency("USD", dec("-12.975")).value(), dec("-12.98"));
        assert_eq!(Money::with_currency("USD", dec("12.95")).currency(), "USD");
    }

    #[test]
    fn test_should_use_configured_default_currency() {
        assert_eq!(Money::new(dec("1")).currency(), checkoutkit_core::default_currency());
    }

    #[test]
    fn test_should_serialize_two_fraction_digits() {
        let request = ChargeOrderRequest {
            google_order_number: GOOGLE_ORDER_NUMBER.to_owned(),
            amount: Some(Money::with_currency("USD", dec("7"))),
        };
        let xml = bytes_to_text(&to_xml(&request).unwrap()).unwrap();
        assert_eq!(element_value(&xml, "amount"), "7.00");
        assert_eq!(element_value(&xml, "currency"), "USD");
    }

    proptest! {
        #[test]
        fn test_money_always_has_scale_two(units in -1_000_000_000i64..1_000_000_000, scale in 0u32..8) {
            let money = Money::with_currency("EUR", Decimal::new(units, scale));
            prop_assert_eq!(money.value().scale(), 2);
        }
    }
}
