//! Flattened view of the coupons and gift certificates applied to an order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::notification::{MerchantCodeAdjustment, NewOrderNotification, OrderAdjustment};
use crate::types::MerchantCodeType;

/// A coupon or gift certificate code with the amounts it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantCode {
    /// Coupon or gift certificate.
    pub code_type: MerchantCodeType,
    /// The code the buyer entered.
    pub code: String,
    /// At most 255 characters when sent back to the buyer.
    pub message: Option<String>,
    /// Amount the merchant calculated for the code, if any.
    pub calculated_amount: Option<Decimal>,
    /// Amount actually applied to the order.
    pub applied_amount: Decimal,
}

impl From<&MerchantCodeAdjustment> for MerchantCode {
    fn from(adjustment: &MerchantCodeAdjustment) -> Self {
        Self {
            code_type: adjustment.kind,
            code: adjustment.code.clone(),
            message: adjustment.message.clone(),
            calculated_amount: adjustment.calculated_amount.as_ref().map(|m| m.value()),
            applied_amount: adjustment.applied_amount.value(),
        }
    }
}

impl OrderAdjustment {
    /// The merchant codes of this adjustment, in document order.
    #[must_use]
    pub fn merchant_codes(&self) -> Vec<MerchantCode> {
        self.merchant_codes.iter().map(MerchantCode::from).collect()
    }
}

impl NewOrderNotification {
    /// The merchant codes applied to this order; empty when there is no adjustment.
    #[must_use]
    pub fn merchant_codes(&self) -> Vec<MerchantCode> {
        self.order_adjustment
            .as_ref()
            .map(OrderAdjustment::merchant_codes)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::money::Money;

    fn adjustment(kind: MerchantCodeType, code: &str, applied: i64) -> MerchantCodeAdjustment {
        MerchantCodeAdjustment {
            kind,
            code: code.to_owned(),
            calculated_amount: None,
            applied_amount: Money::with_currency("USD", Decimal::new(applied, 2)),
            message: Some(format!("{code} applied")),
        }
    }

    #[test]
    fn test_should_return_no_codes_without_adjustment() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let notification = NewOrderNotification::new("sn-1", "841171949013218", ts);
        assert!(notification.merchant_codes().is_empty());
    }

    #[test]
    fn test_should_flatten_codes_in_order() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let mut notification = NewOrderNotification::new("sn-1", "841171949013218", ts);
        notification.order_adjustment = Some(OrderAdjustment {
            merchant_codes: vec![
                adjustment(MerchantCodeType::GiftCertificate, "GIFT-10", 1000),
                adjustment(MerchantCodeType::Coupon, "FIRSTVISIT", 500),
            ],
            ..OrderAdjustment::default()
        });

        let codes = notification.merchant_codes();
        assert_eq!(codes.len(), 2);
        assert_eq!(codes[0].code_type, MerchantCodeType::GiftCertificate);
        assert_eq!(codes[0].applied_amount, Decimal::new(1000, 2));
        assert_eq!(codes[1].code, "FIRSTVISIT");
        assert_eq!(codes[1].message.as_deref(), Some("FIRSTVISIT applied"));
        assert!(codes[1].calculated_amount.is_none());
    }
}
