//! Monetary values.
//!
//! Every amount that crosses the wire is normalized to exactly two fractional
//! digits, rounding half away from zero (`12.975` becomes `12.98`,
//! `-12.975` becomes `-12.98`). The rounded value is the one the counterparty
//! charges, so nothing is ever truncated.
//!
//! Two fractional digits leave room for 27 integer digits: amounts beyond
//! [`MAX_AMOUNT`] are rejected where they are parsed and saturate where they
//! are constructed in code.

use std::fmt;
use std::str::FromStr;

use checkoutkit_core::CurrencyCode;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of fractional digits carried by every amount.
pub const MONEY_SCALE: u32 = 2;

/// Largest magnitude that still carries [`MONEY_SCALE`] fractional digits.
pub const MAX_AMOUNT: Decimal =
    Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, false, MONEY_SCALE);

/// An amount paired with its currency (`<unit-price currency="USD">5.05</unit-price>`).
///
/// Deserialized values go through the same normalization as
/// [`Money::from_wire`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMoney")]
pub struct Money {
    value: Decimal,
    currency: CurrencyCode,
}

/// Field-for-field shape of [`Money`] before normalization.
#[derive(Deserialize)]
struct RawMoney {
    value: Decimal,
    currency: CurrencyCode,
}

impl TryFrom<RawMoney> for Money {
    type Error = rust_decimal::Error;

    fn try_from(raw: RawMoney) -> Result<Self, Self::Error> {
        Self::try_with_currency(raw.currency, raw.value)
    }
}

impl Money {
    /// Normalize `amount` in the process-wide default currency.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self::with_currency(checkoutkit_core::default_currency().clone(), amount)
    }

    /// Normalize `amount` in the given currency.
    ///
    /// Amounts beyond [`MAX_AMOUNT`] saturate to it.
    #[must_use]
    pub fn with_currency(currency: impl Into<CurrencyCode>, amount: Decimal) -> Self {
        Self {
            value: round_amount(amount),
            currency: currency.into(),
        }
    }

    /// Normalize `amount`, rejecting values beyond [`MAX_AMOUNT`].
    ///
    /// # Errors
    /// Returns `ExceedsMaximumPossibleValue` or `LessThanMinimumPossibleValue`
    /// if the amount cannot carry two fractional digits.
    pub fn try_with_currency(
        currency: impl Into<CurrencyCode>,
        amount: Decimal,
    ) -> Result<Self, rust_decimal::Error> {
        let value = checked_round_amount(amount).ok_or(if amount.is_sign_negative() {
            rust_decimal::Error::LessThanMinimumPossibleValue
        } else {
            rust_decimal::Error::ExceedsMaximumPossibleValue
        })?;
        Ok(Self {
            value,
            currency: currency.into(),
        })
    }

    /// Parse an amount read from a document and normalize it.
    ///
    /// # Errors
    /// Returns the decimal parse error if `text` is not a number, or the
    /// range error of [`Money::try_with_currency`].
    pub fn from_wire(
        currency: impl Into<CurrencyCode>,
        text: &str,
    ) -> Result<Self, rust_decimal::Error> {
        let amount = Decimal::from_str(text.trim())?;
        Self::try_with_currency(currency, amount)
    }

    /// The rounded amount, always with scale 2.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// The currency code.
    #[must_use]
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

/// Round to [`MONEY_SCALE`] digits, half away from zero, and pad to exactly that scale.
///
/// Amounts beyond [`MAX_AMOUNT`] saturate to it, keeping their sign.
#[must_use]
pub fn round_amount(amount: Decimal) -> Decimal {
    checked_round_amount(amount).unwrap_or(if amount.is_sign_negative() {
        -MAX_AMOUNT
    } else {
        MAX_AMOUNT
    })
}

/// [`round_amount`], or `None` if the amount cannot carry [`MONEY_SCALE`] digits.
#[must_use]
pub fn checked_round_amount(amount: Decimal) -> Option<Decimal> {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    (rounded.scale() == MONEY_SCALE).then_some(rounded)
}
