//! Error types for the checkoutkit core.

/// Core error type for checkoutkit infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// Currency code is not three ASCII letters.
    #[error("invalid currency code: {0} (must be a 3-letter ISO 4217 code)")]
    InvalidCurrencyCode(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result type for checkoutkit operations.
pub type CheckoutResult<T> = Result<T, CheckoutError>;
