//! Cart signature integration tests.

#[cfg(test)]
mod tests {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use checkoutkit_auth::{AuthError, SignedCart, compute_cart_signature, verify_cart_signature};
    use checkoutkit_model::CheckoutShoppingCart;
    use checkoutkit_xml::{bytes_to_text, from_xml, to_xml};

    use crate::{MERCHANT_KEY, checkout_cart};

    #[test]
    fn test_should_match_known_signature() {
        assert_eq!(compute_cart_signature("<test />", MERCHANT_KEY), "wnHXcU/1//4SbpVEb88WaIB9td4=");
    }

    #[test]
    fn test_should_verify_serialized_cart() {
        let xml = bytes_to_text(&to_xml(&checkout_cart()).unwrap()).unwrap();
        let signature = compute_cart_signature(&xml, MERCHANT_KEY);
        assert!(verify_cart_signature(&xml, MERCHANT_KEY, &signature).is_ok());
    }

    #[test]
    fn test_should_detect_tampered_cart() {
        let xml = bytes_to_text(&to_xml(&checkout_cart()).unwrap()).unwrap();
        let signature = compute_cart_signature(&xml, MERCHANT_KEY);
        let tampered = xml.replace("<quantity>10</quantity>", "<quantity>1</quantity>");
        assert_ne!(tampered, xml);
        let err = verify_cart_signature(&tampered, MERCHANT_KEY, &signature).unwrap_err();
        assert!(matches!(err, AuthError::SignatureDoesNotMatch));
    }

    #[test]
    fn test_should_round_trip_signed_cart_form_values() {
        let cart = checkout_cart();
        let xml = bytes_to_text(&to_xml(&cart).unwrap()).unwrap();
        let signed = SignedCart::sign(&xml, MERCHANT_KEY);
        assert_eq!(BASE64.decode(&signed.cart).unwrap(), xml.as_bytes());

        let verified = signed.verify(MERCHANT_KEY).unwrap();
        let parsed: CheckoutShoppingCart = from_xml(&verified).unwrap();
        assert_eq!(parsed, cart);
    }

    #[test]
    fn test_should_reject_signed_cart_under_other_key() {
        let xml = bytes_to_text(&to_xml(&checkout_cart()).unwrap()).unwrap();
        let signed = SignedCart::sign(&xml, MERCHANT_KEY);
        assert!(matches!(signed.verify("not-the-key"), Err(AuthError::SignatureDoesNotMatch)));
    }
}
