//! Root element names of the documents exchanged with the checkout service.

use checkoutkit_model::{
    AuthorizationAmountNotification, CancelOrderRequest, ChargeAmountNotification,
    ChargeOrderRequest, ChargebackAmountNotification, CheckoutRedirect, CheckoutShoppingCart,
    DeliverOrderRequest, ErrorResponse, NewOrderNotification, NotificationAcknowledgment,
    OrderStateChangeNotification, RefundAmountNotification, RefundOrderRequest, RequestReceived,
    RiskInformationNotification,
};

/// The checkout XML namespace.
pub const CHECKOUT_NAMESPACE: &str = "http://checkout.google.com/schema/2";

/// A type that forms a complete document under a fixed root element.
pub trait RootElement {
    /// The root element name, e.g. `new-order-notification`.
    const ROOT_ELEMENT: &'static str;

    /// Attributes written on the root element besides `xmlns`.
    fn root_attributes(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }
}

macro_rules! impl_root_element {
    ($($ty:ty => $name:literal, $attr:literal => $field:ident);+ $(;)?) => {
        $(
            impl RootElement for $ty {
                const ROOT_ELEMENT: &'static str = $name;

                fn root_attributes(&self) -> Vec<(&'static str, &str)> {
                    vec![($attr, self.$field.as_str())]
                }
            }
        )+
    };
}

impl_root_element! {
    NewOrderNotification => "new-order-notification", "serial-number" => serial_number;
    OrderStateChangeNotification => "order-state-change-notification", "serial-number" => serial_number;
    RiskInformationNotification => "risk-information-notification", "serial-number" => serial_number;
    AuthorizationAmountNotification => "authorization-amount-notification", "serial-number" => serial_number;
    ChargeAmountNotification => "charge-amount-notification", "serial-number" => serial_number;
    RefundAmountNotification => "refund-amount-notification", "serial-number" => serial_number;
    ChargebackAmountNotification => "chargeback-amount-notification", "serial-number" => serial_number;
    RequestReceived => "request-received", "serial-number" => serial_number;
    ErrorResponse => "error", "serial-number" => serial_number;
    CheckoutRedirect => "checkout-redirect", "serial-number" => serial_number;
    ChargeOrderRequest => "charge-order", "google-order-number" => google_order_number;
    RefundOrderRequest => "refund-order", "google-order-number" => google_order_number;
    CancelOrderRequest => "cancel-order", "google-order-number" => google_order_number;
    DeliverOrderRequest => "deliver-order", "google-order-number" => google_order_number;
}

impl RootElement for CheckoutShoppingCart {
    const ROOT_ELEMENT: &'static str = "checkout-shopping-cart";
}

impl RootElement for NotificationAcknowledgment {
    const ROOT_ELEMENT: &'static str = "notification-acknowledgment";

    fn root_attributes(&self) -> Vec<(&'static str, &str)> {
        self.serial_number
            .as_deref()
            .map(|sn| vec![("serial-number", sn)])
            .unwrap_or_default()
    }
}
