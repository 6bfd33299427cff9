//! Checkout XML serialization: converting model types to XML documents.
//!
//! This module provides the [`CheckoutSerialize`] trait and implementations
//! for every model type that is written as XML. Conventions:
//!
//! - Namespace: `http://checkout.google.com/schema/2`
//! - Text nodes are escaped with [`escape_xml_chars`]
//! - Optional fields that are `None` and empty lists are omitted, never written empty
//! - Enums are written under their wire name
//! - Amounts: `<tag currency="USD">12.34</tag>`
//! - Timestamps: RFC 3339 UTC with as many fractional digits as the value
//!   carries (`2007-03-19T15:06:26.051Z`, `2007-03-19T15:06:26.051817959Z`)
//! - XML declaration: `<?xml version="1.0" encoding="UTF-8"?>`

use std::io::{self, Write};

use checkoutkit_model::{
    Address, AuthorizationAmountNotification, CancelOrderRequest, ChargeAmountNotification,
    ChargeOrderRequest, ChargebackAmountNotification, CheckoutRedirect, CheckoutShoppingCart,
    DeliverOrderRequest, ErrorResponse, FlatRateShipping, Item, MarketingPreferences,
    MerchantCheckoutFlowSupport, MerchantCodeAdjustment, Money, NewOrderNotification,
    NotificationAcknowledgment, OrderAdjustment, OrderStateChangeNotification,
    RefundAmountNotification, RefundOrderRequest, RequestReceived, RiskInformation,
    RiskInformationNotification, ShoppingCart, TrackingData, WireEnum,
};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};

use crate::error::XmlError;
use crate::escape::escape_xml_chars;
use crate::root::{CHECKOUT_NAMESPACE, RootElement};

/// Trait for serializing model types to XML.
///
/// Implementors write their content as child elements inside the current XML
/// context. The root element and its attributes are handled by [`to_xml`].
///
/// Uses `io::Result` because `quick_xml::Writer` closures require `io::Result<()>`.
pub trait CheckoutSerialize {
    /// Serialize this value as XML child elements into the given writer.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if writing to the underlying writer fails.
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// Serialize a value as a complete UTF-8 checkout document.
///
/// The root element name comes from the value's type; the namespace and any
/// root attributes (such as `serial-number`) are written on it.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn to_xml<T: CheckoutSerialize + RootElement>(value: &T) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(1024);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = writer
        .create_element(T::ROOT_ELEMENT)
        .with_attribute(("xmlns", CHECKOUT_NAMESPACE));
    for (name, attr_value) in value.root_attributes() {
        root = root.with_attribute((name, attr_value));
    }
    root.write_inner_content(|w| value.serialize_xml(w))?;

    tracing::trace!(root = T::ROOT_ELEMENT, bytes = buf.len(), "serialized document");
    Ok(buf)
}

// ---------------------------------------------------------------------------
// Helper functions for writing common XML patterns
// ---------------------------------------------------------------------------

/// Write a simple `<tag>text</tag>` element, escaping the text.
fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::from_escaped(escape_xml_chars(text)))?;
    Ok(())
}

/// Write `<tag>text</tag>` only if the value is `Some`.
fn write_optional_text<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&str>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, v)?;
    }
    Ok(())
}

fn write_bool<W: Write>(writer: &mut Writer<W>, tag: &str, value: bool) -> io::Result<()> {
    write_text_element(writer, tag, if value { "true" } else { "false" })
}

fn write_optional_bool<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<bool>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_bool(writer, tag, v)?;
    }
    Ok(())
}

fn write_optional_i64<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<i64>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, &v.to_string())?;
    }
    Ok(())
}

/// Write an enum under its wire name.
fn write_enum<W: Write, E: WireEnum>(writer: &mut Writer<W>, tag: &str, value: E) -> io::Result<()> {
    write_text_element(writer, tag, value.wire_name())
}

/// Write `<tag>iso8601</tag>`.
fn write_timestamp<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &chrono::DateTime<chrono::Utc>,
) -> io::Result<()> {
    write_text_element(writer, tag, &format_timestamp(value))
}

/// Format a `DateTime<Utc>` as RFC 3339 with a `Z` suffix, keeping every
/// non-zero fractional digit so the value parses back unchanged.
fn format_timestamp(dt: &chrono::DateTime<chrono::Utc>) -> String {
    dt.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)
}

/// Write `<tag currency="XXX">0.00</tag>`.
fn write_money<W: Write>(writer: &mut Writer<W>, tag: &str, money: &Money) -> io::Result<()> {
    writer
        .create_element(tag)
        .with_attribute(("currency", money.currency().as_str()))
        .write_text_content(BytesText::from_escaped(money.value().to_string()))?;
    Ok(())
}

fn write_optional_money<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    money: Option<&Money>,
) -> io::Result<()> {
    if let Some(m) = money {
        write_money(writer, tag, m)?;
    }
    Ok(())
}

/// Write an address under the given element name.
fn write_address<W: Write>(writer: &mut Writer<W>, tag: &str, address: &Address) -> io::Result<()> {
    writer.create_element(tag).write_inner_content(|w| {
        write_optional_text(w, "contact-name", address.contact_name.as_deref())?;
        write_optional_text(w, "company-name", address.company_name.as_deref())?;
        write_optional_text(w, "email", address.email.as_deref())?;
        write_optional_text(w, "phone", address.phone.as_deref())?;
        write_optional_text(w, "address1", address.address1.as_deref())?;
        write_optional_text(w, "address2", address.address2.as_deref())?;
        write_optional_text(w, "city", address.city.as_deref())?;
        write_optional_text(w, "region", address.region.as_deref())?;
        write_optional_text(w, "postal-code", address.postal_code.as_deref())?;
        write_optional_text(w, "country-code", address.country_code.as_deref())?;
        Ok(())
    })?;
    Ok(())
}

fn write_optional_address<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    address: Option<&Address>,
) -> io::Result<()> {
    if let Some(a) = address {
        write_address(writer, tag, a)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Carts
// ---------------------------------------------------------------------------

impl CheckoutSerialize for Item {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("item").write_inner_content(|w| {
            write_text_element(w, "item-name", &self.item_name)?;
            write_text_element(w, "item-description", &self.item_description)?;
            write_money(w, "unit-price", &self.unit_price)?;
            write_text_element(w, "quantity", &self.quantity.to_string())?;
            write_optional_text(w, "merchant-item-id", self.merchant_item_id.as_deref())?;
            write_optional_text(w, "tax-table-selector", self.tax_table_selector.as_deref())?;
            Ok(())
        })?;
        Ok(())
    }
}

impl CheckoutSerialize for ShoppingCart {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("shopping-cart")
            .write_inner_content(|w| {
                if let Some(ref expiration) = self.cart_expiration {
                    w.create_element("cart-expiration")
                        .write_inner_content(|w| write_timestamp(w, "good-until-date", expiration))?;
                }
                w.create_element("items").write_inner_content(|w| {
                    for item in &self.items {
                        item.serialize_xml(w)?;
                    }
                    Ok(())
                })?;
                if let Some(ref note) = self.merchant_private_data {
                    w.create_element("merchant-private-data")
                        .write_inner_content(|w| write_text_element(w, "merchant-note", note))?;
                }
                Ok(())
            })?;
        Ok(())
    }
}

impl CheckoutSerialize for FlatRateShipping {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("flat-rate-shipping")
            .with_attribute(("name", self.name.as_str()))
            .write_inner_content(|w| write_money(w, "price", &self.price))?;
        Ok(())
    }
}

impl CheckoutSerialize for MerchantCheckoutFlowSupport {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("checkout-flow-support")
            .write_inner_content(|w| {
                w.create_element("merchant-checkout-flow-support")
                    .write_inner_content(|w| {
                        write_optional_text(w, "edit-cart-url", self.edit_cart_url.as_deref())?;
                        write_optional_text(
                            w,
                            "continue-shopping-url",
                            self.continue_shopping_url.as_deref(),
                        )?;
                        write_optional_bool(
                            w,
                            "request-buyer-phone-number",
                            self.request_buyer_phone_number,
                        )?;
                        if !self.flat_rate_shipping.is_empty() {
                            w.create_element("shipping-methods")
                                .write_inner_content(|w| {
                                    for method in &self.flat_rate_shipping {
                                        method.serialize_xml(w)?;
                                    }
                                    Ok(())
                                })?;
                        }
                        Ok(())
                    })?;
                Ok(())
            })?;
        Ok(())
    }
}

impl CheckoutSerialize for CheckoutShoppingCart {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        self.shopping_cart.serialize_xml(writer)?;
        if let Some(ref flow) = self.checkout_flow_support {
            flow.serialize_xml(writer)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

impl CheckoutSerialize for MerchantCodeAdjustment {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element(self.kind.wire_name())
            .write_inner_content(|w| {
                write_text_element(w, "code", &self.code)?;
                write_optional_money(w, "calculated-amount", self.calculated_amount.as_ref())?;
                write_money(w, "applied-amount", &self.applied_amount)?;
                write_optional_text(w, "message", self.message.as_deref())?;
                Ok(())
            })?;
        Ok(())
    }
}

impl CheckoutSerialize for OrderAdjustment {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("order-adjustment")
            .write_inner_content(|w| {
                if !self.merchant_codes.is_empty() {
                    w.create_element("merchant-codes").write_inner_content(|w| {
                        for code in &self.merchant_codes {
                            code.serialize_xml(w)?;
                        }
                        Ok(())
                    })?;
                }
                write_optional_money(w, "total-tax", self.total_tax.as_ref())?;
                write_optional_money(w, "adjustment-total", self.adjustment_total.as_ref())?;
                Ok(())
            })?;
        Ok(())
    }
}

impl CheckoutSerialize for MarketingPreferences {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("buyer-marketing-preferences")
            .write_inner_content(|w| write_bool(w, "email-allowed", self.email_allowed))?;
        Ok(())
    }
}

impl CheckoutSerialize for NewOrderNotification {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "google-order-number", &self.google_order_number)?;
        write_optional_address(
            writer,
            "buyer-shipping-address",
            self.buyer_shipping_address.as_ref(),
        )?;
        write_optional_address(
            writer,
            "buyer-billing-address",
            self.buyer_billing_address.as_ref(),
        )?;
        write_optional_i64(writer, "buyer-id", self.buyer_id)?;
        if let Some(ref prefs) = self.buyer_marketing_preferences {
            prefs.serialize_xml(writer)?;
        }
        self.shopping_cart.serialize_xml(writer)?;
        if let Some(ref adjustment) = self.order_adjustment {
            adjustment.serialize_xml(writer)?;
        }
        write_optional_money(writer, "order-total", self.order_total.as_ref())?;
        write_enum(writer, "fulfillment-order-state", self.fulfillment_order_state)?;
        write_enum(writer, "financial-order-state", self.financial_order_state)?;
        write_timestamp(writer, "timestamp", &self.timestamp)?;
        Ok(())
    }
}

impl CheckoutSerialize for OrderStateChangeNotification {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "google-order-number", &self.google_order_number)?;
        write_enum(writer, "new-financial-order-state", self.new_financial_order_state)?;
        write_enum(writer, "new-fulfillment-order-state", self.new_fulfillment_order_state)?;
        write_enum(
            writer,
            "previous-financial-order-state",
            self.previous_financial_order_state,
        )?;
        write_enum(
            writer,
            "previous-fulfillment-order-state",
            self.previous_fulfillment_order_state,
        )?;
        write_optional_text(writer, "reason", self.reason.as_deref())?;
        write_timestamp(writer, "timestamp", &self.timestamp)?;
        Ok(())
    }
}

impl CheckoutSerialize for RiskInformation {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("risk-information")
            .write_inner_content(|w| {
                write_bool(w, "eligible-for-protection", self.eligible_for_protection)?;
                write_optional_address(w, "billing-address", self.billing_address.as_ref())?;
                write_text_element(w, "avs-response", &self.avs_response)?;
                write_text_element(w, "cvn-response", &self.cvn_response)?;
                write_text_element(w, "partial-cc-number", &self.partial_cc_number)?;
                write_text_element(w, "ip-address", &self.ip_address)?;
                write_text_element(w, "buyer-account-age", &self.buyer_account_age.to_string())?;
                Ok(())
            })?;
        Ok(())
    }
}

impl CheckoutSerialize for RiskInformationNotification {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "google-order-number", &self.google_order_number)?;
        self.risk_information.serialize_xml(writer)?;
        write_timestamp(writer, "timestamp", &self.timestamp)?;
        Ok(())
    }
}

impl CheckoutSerialize for AuthorizationAmountNotification {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "google-order-number", &self.google_order_number)?;
        write_money(writer, "authorization-amount", &self.authorization_amount)?;
        write_timestamp(
            writer,
            "authorization-expiration-date",
            &self.authorization_expiration_date,
        )?;
        write_text_element(writer, "avs-response", &self.avs_response)?;
        write_text_element(writer, "cvn-response", &self.cvn_response)?;
        write_timestamp(writer, "timestamp", &self.timestamp)?;
        Ok(())
    }
}

impl CheckoutSerialize for ChargeAmountNotification {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "google-order-number", &self.google_order_number)?;
        write_money(writer, "latest-charge-amount", &self.latest_charge_amount)?;
        write_money(writer, "total-charge-amount", &self.total_charge_amount)?;
        write_timestamp(writer, "timestamp", &self.timestamp)?;
        Ok(())
    }
}

impl CheckoutSerialize for RefundAmountNotification {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "google-order-number", &self.google_order_number)?;
        write_money(writer, "latest-refund-amount", &self.latest_refund_amount)?;
        write_money(writer, "total-refund-amount", &self.total_refund_amount)?;
        write_timestamp(writer, "timestamp", &self.timestamp)?;
        Ok(())
    }
}

impl CheckoutSerialize for ChargebackAmountNotification {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "google-order-number", &self.google_order_number)?;
        write_money(writer, "latest-chargeback-amount", &self.latest_chargeback_amount)?;
        write_money(writer, "total-chargeback-amount", &self.total_chargeback_amount)?;
        write_timestamp(writer, "timestamp", &self.timestamp)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

impl CheckoutSerialize for RequestReceived {
    fn serialize_xml<W: Write>(&self, _writer: &mut Writer<W>) -> io::Result<()> {
        Ok(())
    }
}

impl CheckoutSerialize for ErrorResponse {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "error-message", &self.error_message)?;
        if !self.warning_messages.is_empty() {
            writer
                .create_element("warning-messages")
                .write_inner_content(|w| {
                    for message in &self.warning_messages {
                        write_text_element(w, "string", message)?;
                    }
                    Ok(())
                })?;
        }
        Ok(())
    }
}

impl CheckoutSerialize for CheckoutRedirect {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "redirect-url", &self.redirect_url)
    }
}

// ---------------------------------------------------------------------------
// Order processing commands
// ---------------------------------------------------------------------------

impl CheckoutSerialize for ChargeOrderRequest {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_money(writer, "amount", self.amount.as_ref())
    }
}

impl CheckoutSerialize for RefundOrderRequest {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "reason", &self.reason)?;
        write_optional_money(writer, "amount", self.amount.as_ref())?;
        write_optional_text(writer, "comment", self.comment.as_deref())?;
        Ok(())
    }
}

impl CheckoutSerialize for CancelOrderRequest {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "reason", &self.reason)?;
        write_optional_text(writer, "comment", self.comment.as_deref())?;
        Ok(())
    }
}

impl CheckoutSerialize for TrackingData {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("tracking-data")
            .write_inner_content(|w| {
                write_enum(w, "carrier", self.carrier)?;
                write_text_element(w, "tracking-number", &self.tracking_number)?;
                Ok(())
            })?;
        Ok(())
    }
}

impl CheckoutSerialize for DeliverOrderRequest {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        if let Some(ref tracking) = self.tracking_data {
            tracking.serialize_xml(writer)?;
        }
        write_optional_bool(writer, "send-email", self.send_email)?;
        Ok(())
    }
}

impl CheckoutSerialize for NotificationAcknowledgment {
    fn serialize_xml<W: Write>(&self, _writer: &mut Writer<W>) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use checkoutkit_model::{Carrier, FinancialOrderState, ShippingType};
    use rust_decimal::Decimal;

    use super::*;

    fn xml_string<T: CheckoutSerialize + RootElement>(value: &T) -> String {
        String::from_utf8(to_xml(value).expect("serialization should succeed"))
            .expect("valid UTF-8")
    }

    #[test]
    fn test_should_write_declaration_and_namespaced_root() {
        let xml = xml_string(&RequestReceived {
            serial_number: "sn-42".to_owned(),
        });
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(
            "<request-received xmlns=\"http://checkout.google.com/schema/2\" serial-number=\"sn-42\""
        ));
    }

    #[test]
    fn test_should_escape_text_nodes_with_character_references() {
        let cart = CheckoutShoppingCart::new(ShoppingCart {
            items: vec![Item::new(
                "Fish & Chips",
                "<b>crispy</b>",
                Money::with_currency("GBP", Decimal::new(895, 2)),
                1,
            )],
            ..ShoppingCart::default()
        });
        let xml = xml_string(&cart);
        assert!(xml.contains("<item-name>Fish &#x26; Chips</item-name>"));
        assert!(xml.contains("<item-description>&#x3c;b&#x3e;crispy&#x3c;/b&#x3e;</item-description>"));
    }

    #[test]
    fn test_should_write_money_with_currency_attribute() {
        let request = ChargeOrderRequest {
            google_order_number: "841171949013218".to_owned(),
            amount: Some(Money::with_currency("USD", Decimal::new(12975, 3))),
        };
        let xml = xml_string(&request);
        assert!(xml.contains("google-order-number=\"841171949013218\""));
        assert!(xml.contains("<amount currency=\"USD\">12.98</amount>"));
    }

    #[test]
    fn test_should_omit_unset_optional_fields() {
        let request = RefundOrderRequest {
            google_order_number: "1".to_owned(),
            reason: "Damaged".to_owned(),
            amount: None,
            comment: None,
        };
        let xml = xml_string(&request);
        assert!(xml.contains("<reason>Damaged</reason>"));
        assert!(!xml.contains("<amount"));
        assert!(!xml.contains("<comment"));
    }

    #[test]
    fn test_should_write_enums_by_wire_name() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 19, 15, 6, 26).unwrap();
        let mut notification = NewOrderNotification::new("sn", "1", ts);
        notification.financial_order_state = FinancialOrderState::PaymentDeclined;
        let xml = xml_string(&notification);
        assert!(xml.contains("<financial-order-state>PAYMENT_DECLINED</financial-order-state>"));
        assert!(xml.contains("<fulfillment-order-state>NEW</fulfillment-order-state>"));
        assert!(xml.contains("<timestamp>2024-03-19T15:06:26Z</timestamp>"));
    }

    #[test]
    fn test_should_keep_every_fractional_digit_of_timestamps() {
        let base = Utc.with_ymd_and_hms(2007, 3, 19, 15, 6, 26).unwrap();
        assert_eq!(
            format_timestamp(&(base + chrono::Duration::milliseconds(51))),
            "2007-03-19T15:06:26.051Z"
        );
        assert_eq!(
            format_timestamp(&(base + chrono::Duration::nanoseconds(51_817_959))),
            "2007-03-19T15:06:26.051817959Z"
        );
    }

    #[test]
    fn test_should_write_symbolic_name_when_none_declared() {
        let request = DeliverOrderRequest::tracked("1", ShippingType::FedexGround, "7946");
        let xml = xml_string(&request);
        assert_eq!(request.tracking_data.as_ref().map(|t| t.carrier), Some(Carrier::FedEx));
        assert!(xml.contains("<carrier>FedEx</carrier>"));
        assert!(xml.contains("<tracking-number>7946</tracking-number>"));
    }

    #[test]
    fn test_should_write_acknowledgment_without_serial() {
        let xml = xml_string(&NotificationAcknowledgment::default());
        assert!(xml.contains("<notification-acknowledgment xmlns=\"http://checkout.google.com/schema/2\">"));
        assert!(!xml.contains("serial-number"));
    }
}
