//! Core types and configuration for checkoutkit.
//!
//! This crate provides the pieces shared by every other checkoutkit crate:
//! process-wide configuration (default currency, error snippet limit), the
//! [`CurrencyCode`] newtype, and the core error type.

mod config;
mod error;
mod types;

pub use config::{CheckoutConfig, default_currency};
pub use error::{CheckoutError, CheckoutResult};
pub use types::CurrencyCode;
