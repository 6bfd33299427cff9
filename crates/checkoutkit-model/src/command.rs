//! Outbound order processing commands.
//!
//! Commands name their order through a `google-order-number` attribute on the
//! root element.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Carrier, ShippingType};

/// `charge-order`. Without an amount the full authorized total is charged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeOrderRequest {
    /// Order number assigned by the checkout service.
    pub google_order_number: String,
    /// Amount to act on; the full order total when absent.
    pub amount: Option<Money>,
}

/// `refund-order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundOrderRequest {
    /// Order number assigned by the checkout service.
    pub google_order_number: String,
    /// Why the order is being refunded or cancelled.
    pub reason: String,
    /// Amount to act on; the full order total when absent.
    pub amount: Option<Money>,
    /// Free-text comment for the buyer.
    pub comment: Option<String>,
}

/// `cancel-order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    /// Order number assigned by the checkout service.
    pub google_order_number: String,
    /// Why the order is being refunded or cancelled.
    pub reason: String,
    /// Free-text comment for the buyer.
    pub comment: Option<String>,
}

/// `<tracking-data>` attached to a delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingData {
    /// Carrier delivering the shipment.
    pub carrier: Carrier,
    /// Carrier tracking number.
    pub tracking_number: String,
}

/// `deliver-order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverOrderRequest {
    /// Order number assigned by the checkout service.
    pub google_order_number: String,
    /// Shipment tracking, if the order was shipped with a carrier.
    pub tracking_data: Option<TrackingData>,
    /// Whether the buyer is emailed about the delivery.
    pub send_email: Option<bool>,
}

impl DeliverOrderRequest {
    /// Mark an order delivered without tracking information.
    #[must_use]
    pub fn new(google_order_number: impl Into<String>) -> Self {
        Self {
            google_order_number: google_order_number.into(),
            tracking_data: None,
            send_email: None,
        }
    }

    /// Mark an order delivered through a carrier service, with its tracking number.
    #[must_use]
    pub fn tracked(
        google_order_number: impl Into<String>,
        shipping: ShippingType,
        tracking_number: impl Into<String>,
    ) -> Self {
        Self {
            google_order_number: google_order_number.into(),
            tracking_data: Some(TrackingData {
                carrier: shipping.carrier(),
                tracking_number: tracking_number.into(),
            }),
            send_email: None,
        }
    }
}

/// `notification-acknowledgment`: the reply to every notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAcknowledgment {
    /// Serial number of the acknowledged notification.
    pub serial_number: Option<String>,
}

impl NotificationAcknowledgment {
    /// Acknowledge the notification with the given serial number.
    #[must_use]
    pub fn for_serial(serial_number: impl Into<String>) -> Self {
        Self {
            serial_number: Some(serial_number.into()),
        }
    }
}
