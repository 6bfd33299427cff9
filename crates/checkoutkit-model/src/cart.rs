//! Shopping carts and the `checkout-shopping-cart` request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A line item (`<item>`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Short name shown to the buyer.
    pub item_name: String,
    /// Longer description shown to the buyer.
    pub item_description: String,
    /// Price of a single unit.
    pub unit_price: Money,
    /// Number of units ordered.
    pub quantity: u32,
    /// The merchant's own identifier for the item.
    pub merchant_item_id: Option<String>,
    /// Alternate tax table applied to this item.
    pub tax_table_selector: Option<String>,
}

impl Item {
    /// Create an item with the required fields.
    #[must_use]
    pub fn new(
        item_name: impl Into<String>,
        item_description: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> Self {
        Self {
            item_name: item_name.into(),
            item_description: item_description.into(),
            unit_price,
            quantity,
            merchant_item_id: None,
            tax_table_selector: None,
        }
    }
}

/// The items being bought, in order (`<shopping-cart>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingCart {
    /// Line items in document order.
    pub items: Vec<Item>,
    /// `<cart-expiration><good-until-date>`.
    pub cart_expiration: Option<DateTime<Utc>>,
    /// `<merchant-private-data><merchant-note>`.
    pub merchant_private_data: Option<String>,
}

/// A named flat-rate shipping option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatRateShipping {
    /// Name of the option shown to the buyer.
    pub name: String,
    /// Shipping charge for the whole order.
    pub price: Money,
}

/// `<merchant-checkout-flow-support>`: URLs and shipping choices offered to the buyer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MerchantCheckoutFlowSupport {
    /// Where the buyer goes to change the cart.
    pub edit_cart_url: Option<String>,
    /// Where the buyer goes after checkout.
    pub continue_shopping_url: Option<String>,
    /// Whether the buyer must give a phone number.
    pub request_buyer_phone_number: Option<bool>,
    /// Flat-rate shipping options, in document order.
    pub flat_rate_shipping: Vec<FlatRateShipping>,
}

/// Outbound `checkout-shopping-cart` request. Its serialized form is what a
/// cart signature covers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutShoppingCart {
    /// The cart being checked out.
    pub shopping_cart: ShoppingCart,
    /// Merchant URLs and shipping options.
    pub checkout_flow_support: Option<MerchantCheckoutFlowSupport>,
}

impl CheckoutShoppingCart {
    /// Wrap a cart with no flow support.
    #[must_use]
    pub fn new(shopping_cart: ShoppingCart) -> Self {
        Self {
            shopping_cart,
            checkout_flow_support: None,
        }
    }
}
