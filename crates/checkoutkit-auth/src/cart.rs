//! Cart signature computation and verification.
//!
//! ```text
//! Signature = Base64(HMAC-SHA1(MerchantKey, CartXml))
//! ```
//!
//! The signature covers the exact bytes of the cart text: no canonicalization
//! happens, so a re-serialized cart must be signed again.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha1::Sha1;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::error::AuthError;

type HmacSha1 = Hmac<Sha1>;

/// Compute the base64 HMAC-SHA1 signature of a cart fragment.
#[must_use]
pub fn compute_cart_signature(cart_xml: &str, secret: &str) -> String {
    let mut mac =
        HmacSha1::new_from_slice(secret.as_bytes()).expect("HMAC can accept any key length");
    mac.update(cart_xml.as_bytes());
    let result = mac.finalize().into_bytes();
    BASE64.encode(result)
}

/// Verify that `provided` is the signature of `cart_xml` under `secret`.
///
/// The comparison runs in constant time. A mismatch reports nothing about
/// the signature the cart should have carried.
///
/// # Errors
///
/// Returns [`AuthError::SignatureDoesNotMatch`] if the signatures differ.
pub fn verify_cart_signature(
    cart_xml: &str,
    secret: &str,
    provided: &str,
) -> Result<(), AuthError> {
    let expected = compute_cart_signature(cart_xml, secret);

    if provided.as_bytes().ct_eq(expected.as_bytes()).into() {
        debug!(bytes = cart_xml.len(), "cart signature verified");
        Ok(())
    } else {
        debug!(bytes = cart_xml.len(), "cart signature mismatch");
        Err(AuthError::SignatureDoesNotMatch)
    }
}

/// The `cart` and `signature` form values posted with a checkout request.
///
/// Both are base64: `cart` is the encoded cart XML and `signature` its HMAC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedCart {
    /// Base64 of the cart XML.
    pub cart: String,
    /// Base64 HMAC-SHA1 of the cart XML.
    pub signature: String,
}

impl SignedCart {
    /// Encode and sign a serialized cart.
    #[must_use]
    pub fn sign(cart_xml: &str, secret: &str) -> Self {
        Self {
            cart: BASE64.encode(cart_xml.as_bytes()),
            signature: compute_cart_signature(cart_xml, secret),
        }
    }

    /// Decode the cart and check its signature, returning the cart XML.
    ///
    /// # Errors
    ///
    /// - [`AuthError::MalformedCart`] if `cart` is not base64
    /// - [`AuthError::InvalidCartEncoding`] if the decoded cart is not UTF-8
    /// - [`AuthError::SignatureDoesNotMatch`] if the signature differs
    pub fn verify(&self, secret: &str) -> Result<String, AuthError> {
        let bytes = BASE64.decode(self.cart.trim())?;
        let cart_xml = String::from_utf8(bytes)?;
        verify_cart_signature(&cart_xml, secret, self.signature.trim())?;
        Ok(cart_xml)
    }
}
