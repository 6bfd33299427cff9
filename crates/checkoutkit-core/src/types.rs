//! Common type definitions shared across crates.

use std::fmt;

/// ISO 4217 currency code carried on every monetary value (`currency="USD"`).
///
/// [`CurrencyCode::new`] accepts anything, since inbound documents are taken
/// as received. [`CurrencyCode::parse`] validates the 3-letter form and is
/// used for configured values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Fallback currency when nothing is configured.
    pub const DEFAULT: &str = "USD";

    /// Create a currency code without validation.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Create a currency code, requiring exactly three ASCII letters.
    ///
    /// Lowercase input is upper-cased.
    ///
    /// # Errors
    /// Returns an error if the code is not three ASCII letters.
    pub fn parse(code: impl Into<String>) -> Result<Self, crate::CheckoutError> {
        let code = code.into();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(crate::CheckoutError::InvalidCurrencyCode(code));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Get the currency code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl PartialEq<str> for CurrencyCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CurrencyCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
