//! Inbound notifications and synchronous API responses.
//!
//! Every notification carries a `serial-number` attribute on its root element,
//! which the merchant echoes back in a `notification-acknowledgment`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::ShoppingCart;
use crate::money::Money;
use crate::types::{FinancialOrderState, FulfillmentOrderState, MerchantCodeType};

/// A postal address as reported by the checkout service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Name of the person at this address.
    pub contact_name: Option<String>,
    /// Company name, if any.
    pub company_name: Option<String>,
    /// Contact email address.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// First street line.
    pub address1: Option<String>,
    /// Second street line.
    pub address2: Option<String>,
    /// City or town.
    pub city: Option<String>,
    /// State, province or region.
    pub region: Option<String>,
    /// Postal or ZIP code.
    pub postal_code: Option<String>,
    /// Two-letter ISO 3166 country code.
    pub country_code: Option<String>,
}

/// A coupon or gift certificate applied to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantCodeAdjustment {
    /// Coupon or gift certificate.
    pub kind: MerchantCodeType,
    /// The code the buyer entered.
    pub code: String,
    /// Amount the merchant calculated for the code, if any.
    pub calculated_amount: Option<Money>,
    /// Amount actually applied to the order.
    pub applied_amount: Money,
    /// Message shown to the buyer for this code.
    pub message: Option<String>,
}

/// `<order-adjustment>`: merchant codes and totals applied on top of the cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderAdjustment {
    /// Coupon and gift certificate adjustments, in document order.
    pub merchant_codes: Vec<MerchantCodeAdjustment>,
    /// Total tax charged on the order.
    pub total_tax: Option<Money>,
    /// Sum of all merchant code adjustments.
    pub adjustment_total: Option<Money>,
}

/// `<buyer-marketing-preferences>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingPreferences {
    /// Whether the buyer accepts marketing email.
    pub email_allowed: bool,
}

/// `new-order-notification`: a buyer placed an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderNotification {
    /// Serial number of this message, echoed in the acknowledgment.
    pub serial_number: String,
    /// Order number assigned by the checkout service.
    pub google_order_number: String,
    /// Where the order ships to.
    pub buyer_shipping_address: Option<Address>,
    /// The buyer's billing address.
    pub buyer_billing_address: Option<Address>,
    /// Stable identifier of the buyer.
    pub buyer_id: Option<i64>,
    /// The buyer's marketing choices.
    pub buyer_marketing_preferences: Option<MarketingPreferences>,
    /// The cart the buyer checked out.
    pub shopping_cart: ShoppingCart,
    /// Codes, tax and totals applied to the cart.
    pub order_adjustment: Option<OrderAdjustment>,
    /// Total the buyer pays.
    pub order_total: Option<Money>,
    /// Fulfillment state when the order was placed.
    pub fulfillment_order_state: FulfillmentOrderState,
    /// Financial state when the order was placed.
    pub financial_order_state: FinancialOrderState,
    /// When the checkout service produced this message.
    pub timestamp: DateTime<Utc>,
}

impl NewOrderNotification {
    /// Create a notification with an empty cart and initial order states.
    #[must_use]
    pub fn new(
        serial_number: impl Into<String>,
        google_order_number: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            serial_number: serial_number.into(),
            google_order_number: google_order_number.into(),
            buyer_shipping_address: None,
            buyer_billing_address: None,
            buyer_id: None,
            buyer_marketing_preferences: None,
            shopping_cart: ShoppingCart::default(),
            order_adjustment: None,
            order_total: None,
            fulfillment_order_state: FulfillmentOrderState::default(),
            financial_order_state: FinancialOrderState::default(),
            timestamp,
        }
    }
}

/// `order-state-change-notification`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStateChangeNotification {
    /// Serial number of this message, echoed in the acknowledgment.
    pub serial_number: String,
    /// Order number assigned by the checkout service.
    pub google_order_number: String,
    /// Financial state after the change.
    pub new_financial_order_state: FinancialOrderState,
    /// Fulfillment state after the change.
    pub new_fulfillment_order_state: FulfillmentOrderState,
    /// Financial state before the change.
    pub previous_financial_order_state: FinancialOrderState,
    /// Fulfillment state before the change.
    pub previous_fulfillment_order_state: FulfillmentOrderState,
    /// Why the state changed, if given.
    pub reason: Option<String>,
    /// When the checkout service produced this message.
    pub timestamp: DateTime<Utc>,
}

/// `<risk-information>` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskInformation {
    /// Whether the order qualifies for payment guarantee.
    pub eligible_for_protection: bool,
    /// Billing address on the card.
    pub billing_address: Option<Address>,
    /// Address verification result code.
    pub avs_response: String,
    /// Card verification number result code.
    pub cvn_response: String,
    /// Last four digits of the card.
    pub partial_cc_number: String,
    /// IP address the buyer ordered from.
    pub ip_address: String,
    /// Age of the buyer's account in days.
    pub buyer_account_age: i32,
}

/// `risk-information-notification`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskInformationNotification {
    /// Serial number of this message, echoed in the acknowledgment.
    pub serial_number: String,
    /// Order number assigned by the checkout service.
    pub google_order_number: String,
    /// The risk assessment.
    pub risk_information: RiskInformation,
    /// When the checkout service produced this message.
    pub timestamp: DateTime<Utc>,
}

/// `authorization-amount-notification`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationAmountNotification {
    /// Serial number of this message, echoed in the acknowledgment.
    pub serial_number: String,
    /// Order number assigned by the checkout service.
    pub google_order_number: String,
    /// Amount authorized on the card.
    pub authorization_amount: Money,
    /// When the authorization lapses.
    pub authorization_expiration_date: DateTime<Utc>,
    /// Address verification result code.
    pub avs_response: String,
    /// Card verification number result code.
    pub cvn_response: String,
    /// When the checkout service produced this message.
    pub timestamp: DateTime<Utc>,
}

/// `charge-amount-notification`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeAmountNotification {
    /// Serial number of this message, echoed in the acknowledgment.
    pub serial_number: String,
    /// Order number assigned by the checkout service.
    pub google_order_number: String,
    /// Amount of this charge.
    pub latest_charge_amount: Money,
    /// Sum of all charges on the order.
    pub total_charge_amount: Money,
    /// When the checkout service produced this message.
    pub timestamp: DateTime<Utc>,
}

/// `refund-amount-notification`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundAmountNotification {
    /// Serial number of this message, echoed in the acknowledgment.
    pub serial_number: String,
    /// Order number assigned by the checkout service.
    pub google_order_number: String,
    /// Amount of this refund.
    pub latest_refund_amount: Money,
    /// Sum of all refunds on the order.
    pub total_refund_amount: Money,
    /// When the checkout service produced this message.
    pub timestamp: DateTime<Utc>,
}

/// `chargeback-amount-notification`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargebackAmountNotification {
    /// Serial number of this message, echoed in the acknowledgment.
    pub serial_number: String,
    /// Order number assigned by the checkout service.
    pub google_order_number: String,
    /// Amount of this chargeback.
    pub latest_chargeback_amount: Money,
    /// Sum of all chargebacks on the order.
    pub total_chargeback_amount: Money,
    /// When the checkout service produced this message.
    pub timestamp: DateTime<Utc>,
}

/// `request-received`: synchronous acknowledgment of an order processing command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestReceived {
    /// Serial number of this message, echoed in the acknowledgment.
    pub serial_number: String,
}

/// `error`: the service rejected a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Serial number of this message, echoed in the acknowledgment.
    pub serial_number: String,
    /// What went wrong.
    pub error_message: String,
    /// Warnings raised alongside the error.
    pub warning_messages: Vec<String>,
}

/// `checkout-redirect`: where to send the buyer after posting a cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRedirect {
    /// Serial number of this message, echoed in the acknowledgment.
    pub serial_number: String,
    /// Where to send the buyer to complete checkout.
    pub redirect_url: String,
}
