//! HMAC-SHA1 cart signatures for the checkout API.
//!
//! A merchant posts its cart to the checkout service together with a
//! signature: `Base64(HMAC-SHA1(MerchantKey, CartXml))`. The same computation
//! authenticates a cart that comes back, so any change to the cart text in
//! transit is detected.
//!
//! # Usage
//!
//! ```rust
//! use checkoutkit_auth::{compute_cart_signature, verify_cart_signature};
//!
//! let signature = compute_cart_signature("<test />", "12345");
//! assert_eq!(signature, "wnHXcU/1//4SbpVEb88WaIB9td4=");
//! assert!(verify_cart_signature("<test />", "12345", &signature).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`cart`] - Signature computation, verification and signed-cart form values
//! - [`error`] - Signature error types

pub mod cart;
pub mod error;

pub use cart::{SignedCart, compute_cart_signature, verify_cart_signature};
pub use error::AuthError;
