//! Typed object graph for the checkout XML API.
//!
//! Plain value types for the documents exchanged with the checkout service:
//! inbound notifications and responses, outbound carts and order processing
//! commands, and the [`Money`] type every amount goes through. The XML mapping
//! lives in `checkoutkit-xml`.

pub mod wire;

pub mod cart;
pub mod command;
pub mod merchant_code;
pub mod money;
pub mod notification;
pub mod types;

pub use cart::{
    CheckoutShoppingCart, FlatRateShipping, Item, MerchantCheckoutFlowSupport, ShoppingCart,
};
pub use command::{
    CancelOrderRequest, ChargeOrderRequest, DeliverOrderRequest, NotificationAcknowledgment,
    RefundOrderRequest, TrackingData,
};
pub use merchant_code::MerchantCode;
pub use money::{MAX_AMOUNT, MONEY_SCALE, Money, checked_round_amount, round_amount};
pub use notification::{
    Address, AuthorizationAmountNotification, ChargeAmountNotification,
    ChargebackAmountNotification, CheckoutRedirect, ErrorResponse, MarketingPreferences,
    MerchantCodeAdjustment, NewOrderNotification, OrderAdjustment, OrderStateChangeNotification,
    RefundAmountNotification, RequestReceived, RiskInformation, RiskInformationNotification,
};
pub use types::{
    Carrier, FinancialOrderState, FulfillmentOrderState, MerchantCodeType, ShippingType,
};
pub use wire::WireEnum;
