//! Configuration management for checkoutkit.
//!
//! Configuration is driven by environment variables. The process-wide copy is
//! set once, either explicitly through [`CheckoutConfig::install`] or lazily
//! from the environment on first use, and is read-only afterwards.

use std::sync::OnceLock;

use tracing::warn;

use crate::error::{CheckoutError, CheckoutResult};
use crate::types::CurrencyCode;

static GLOBAL: OnceLock<CheckoutConfig> = OnceLock::new();

/// Global configuration for checkoutkit.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutConfig {
    /// Currency attached to amounts created without an explicit currency.
    pub default_currency: CurrencyCode,
    /// Maximum number of characters of offending input quoted in parse errors.
    pub error_snippet_limit: usize,
    /// Log level.
    pub log_level: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            default_currency: CurrencyCode::default(),
            error_snippet_limit: 4096,
            log_level: "info".to_owned(),
        }
    }
}

impl CheckoutConfig {
    /// Load configuration from environment variables.
    ///
    /// Invalid values are logged and replaced by their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("CHECKOUT_DEFAULT_CURRENCY") {
            match CurrencyCode::parse(v) {
                Ok(code) => config.default_currency = code,
                Err(e) => warn!(error = %e, "ignoring CHECKOUT_DEFAULT_CURRENCY"),
            }
        }
        if let Ok(v) = std::env::var("CHECKOUT_ERROR_SNIPPET_LIMIT") {
            match parse_snippet_limit(&v) {
                Ok(limit) => config.error_snippet_limit = limit,
                Err(e) => warn!(error = %e, "ignoring CHECKOUT_ERROR_SNIPPET_LIMIT"),
            }
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// Load configuration from environment variables, failing on invalid values.
    ///
    /// # Errors
    /// Returns an error if a variable is set to a value that cannot be used.
    pub fn try_from_env() -> CheckoutResult<Self> {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("CHECKOUT_DEFAULT_CURRENCY") {
            config.default_currency = CurrencyCode::parse(v)?;
        }
        if let Ok(v) = std::env::var("CHECKOUT_ERROR_SNIPPET_LIMIT") {
            config.error_snippet_limit = parse_snippet_limit(&v)?;
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        Ok(config)
    }

    /// Install this configuration as the process-wide configuration.
    ///
    /// # Errors
    /// Returns an error if a configuration was already installed or read.
    pub fn install(self) -> CheckoutResult<()> {
        GLOBAL.set(self).map_err(|_| {
            CheckoutError::Config("process-wide configuration already initialized".to_owned())
        })
    }

    /// The process-wide configuration, loaded from the environment on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::from_env)
    }
}

/// The process-wide default currency.
#[must_use]
pub fn default_currency() -> &'static CurrencyCode {
    &CheckoutConfig::global().default_currency
}

fn parse_snippet_limit(value: &str) -> CheckoutResult<usize> {
    match value.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(CheckoutError::Config(format!(
            "CHECKOUT_ERROR_SNIPPET_LIMIT must be a positive integer, got '{value}'"
        ))),
        Ok(limit) => Ok(limit),
    }
}
