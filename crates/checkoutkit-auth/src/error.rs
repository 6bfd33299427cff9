//! Cart signature error types.

/// Errors that can occur while checking a signed cart.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The provided signature does not match the one computed for the cart.
    #[error("The cart signature does not match")]
    SignatureDoesNotMatch,

    /// The base64 `cart` form value could not be decoded.
    #[error("Malformed cart encoding: {0}")]
    MalformedCart(#[from] base64::DecodeError),

    /// The decoded cart is not valid UTF-8.
    #[error("Cart is not valid UTF-8: {0}")]
    InvalidCartEncoding(#[from] std::string::FromUtf8Error),
}
