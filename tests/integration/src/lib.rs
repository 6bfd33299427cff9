//! End-to-end tests across the checkoutkit crates.
//!
//! The fixtures here build the documents the checkout service exchanges with
//! a merchant; the `test_*` modules push them through the codec, the
//! serializer, the extractor and the signature checks together.
//!
//! Run them with:
//! ```text
//! cargo test -p checkoutkit-integration
//! ```

use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};
use checkoutkit_model::{CheckoutShoppingCart, Item, Money, NewOrderNotification, ShoppingCart};
use rust_decimal::Decimal;

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Order number used by every fixture.
pub const GOOGLE_ORDER_NUMBER: &str = "841171949013218";

/// Serial number of the new-order fixture.
pub const SERIAL_NUMBER: &str = "fc8n593wfhfoc8nwot8";

/// Merchant key the signature tests sign with.
pub const MERCHANT_KEY: &str = "12345";

/// The timestamp every fixture carries.
#[must_use]
pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2007, 3, 19, 15, 6, 26)
        .single()
        .map(|ts| ts + chrono::Duration::milliseconds(51))
        .unwrap_or_default()
}

/// The two line items of the fixture cart, one of them in non-Latin scripts.
#[must_use]
pub fn fixture_items() -> Vec<Item> {
    vec![
        Item::new(
            "Vanilla Coffee Syrup",
            "From Espresso House",
            Money::with_currency("USD", Decimal::new(505, 2)),
            10,
        ),
        Item::new(
            "Nescafé Cappuccino ©",
            "שּׁзγəˆỊ₪€₧ﻷ",
            Money::with_currency("SEK", Decimal::new(2350, 2)),
            2,
        ),
    ]
}

/// A new-order notification carrying the fixture cart.
#[must_use]
pub fn new_order_notification() -> NewOrderNotification {
    init_tracing();

    let mut notification =
        NewOrderNotification::new(SERIAL_NUMBER, GOOGLE_ORDER_NUMBER, fixed_timestamp());
    notification.buyer_id = Some(379_653);
    notification.shopping_cart.items = fixture_items();
    notification
}

/// A checkout request for the fixture cart.
#[must_use]
pub fn checkout_cart() -> CheckoutShoppingCart {
    init_tracing();

    CheckoutShoppingCart::new(ShoppingCart {
        items: fixture_items(),
        ..ShoppingCart::default()
    })
}

mod test_bad_xml;
mod test_extract;
mod test_money;
mod test_roundtrip;
mod test_signature;
