//! Checkout XML deserialization: parsing checkout documents into model types.
//!
//! This module provides the [`CheckoutDeserialize`] trait and implementations
//! for every model type that is read from XML, plus the strict typed entry
//! points [`from_xml`] and [`from_slice`]. Unknown child elements are skipped;
//! malformed markup, a wrong root element and values that cannot be coerced
//! to their field type are errors.

use std::str::FromStr;

use checkoutkit_core::CurrencyCode;
use checkoutkit_model::{
    Address, AuthorizationAmountNotification, CancelOrderRequest, ChargeAmountNotification,
    ChargeOrderRequest, ChargebackAmountNotification, CheckoutRedirect, CheckoutShoppingCart,
    DeliverOrderRequest, ErrorResponse, FlatRateShipping, Item, MarketingPreferences,
    MerchantCheckoutFlowSupport, MerchantCodeAdjustment, MerchantCodeType, Money,
    NewOrderNotification, NotificationAcknowledgment, OrderAdjustment,
    OrderStateChangeNotification, RefundAmountNotification, RefundOrderRequest, RequestReceived,
    RiskInformation, RiskInformationNotification, ShoppingCart, TrackingData, WireEnum,
};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, BytesText, Event};

use crate::codec::strip_bom;
use crate::error::{XmlError, snippet};
use crate::root::RootElement;

/// Trait for deserializing model types from XML.
///
/// The opening tag has already been consumed by the caller and is passed in so
/// that attributes are reachable; the implementation reads child elements
/// until the matching end tag.
pub trait CheckoutDeserialize: Sized {
    /// Deserialize an instance from the given XML reader.
    ///
    /// # Errors
    ///
    /// Returns `XmlError` if the XML is malformed, a required element is
    /// missing, or a value cannot be converted.
    fn deserialize_xml(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Self, XmlError>;
}

/// Parse a complete checkout document into `T`.
///
/// # Errors
///
/// - [`XmlError::Syntax`] if the document is not well-formed
/// - [`XmlError::UnexpectedRoot`] if its root is not `T::ROOT_ELEMENT`
/// - [`XmlError::FieldCoercion`] or [`XmlError::MissingElement`] for bad content
pub fn from_xml<T: CheckoutDeserialize + RootElement>(xml: &str) -> Result<T, XmlError> {
    parse_typed(xml).map_err(|err| err.with_input(xml))
}

/// Parse a UTF-8 encoded document, skipping a leading byte-order mark.
///
/// # Errors
///
/// Returns [`XmlError::Decode`] for invalid UTF-8, otherwise as [`from_xml`].
pub fn from_slice<T: CheckoutDeserialize + RootElement>(bytes: &[u8]) -> Result<T, XmlError> {
    let xml = std::str::from_utf8(strip_bom(bytes))?;
    from_xml(xml)
}

fn parse_typed<T: CheckoutDeserialize + RootElement>(xml: &str) -> Result<T, XmlError> {
    let mut reader = new_reader(xml);
    let root = read_root(&mut reader)?;
    let found = local_name(&root)?;
    if found != T::ROOT_ELEMENT {
        return Err(XmlError::UnexpectedRoot {
            expected: T::ROOT_ELEMENT,
            found: found.to_owned(),
            input: snippet(xml),
        });
    }
    let value = T::deserialize_xml(&mut reader, &root)?;
    finish_document(&mut reader)?;
    Ok(value)
}

// ---------------------------------------------------------------------------
// Document structure
// ---------------------------------------------------------------------------

/// A reader over `xml` that reports `<a/>` as a start and an end event.
pub(crate) fn new_reader(xml: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().expand_empty_elements = true;
    reader
}

/// Walk the prolog and return the root element's opening tag.
pub(crate) fn read_root<'x>(reader: &mut Reader<&'x [u8]>) -> Result<BytesStart<'x>, XmlError> {
    loop {
        match reader.read_event()? {
            Event::Start(e) => return Ok(e),
            Event::Decl(_) | Event::PI(_) | Event::Comment(_) | Event::DocType(_) => {}
            Event::Text(e) if is_blank(&e) => {}
            Event::Eof => return Err(XmlError::Malformed("no root element".to_owned())),
            other => {
                return Err(XmlError::Malformed(format!(
                    "{} before the root element",
                    describe(&other)
                )));
            }
        }
    }
}

/// Check that only whitespace, comments and processing instructions follow
/// the root element.
pub(crate) fn finish_document(reader: &mut Reader<&[u8]>) -> Result<(), XmlError> {
    loop {
        match reader.read_event()? {
            Event::Eof => return Ok(()),
            Event::PI(_) | Event::Comment(_) => {}
            Event::Text(e) if is_blank(&e) => {}
            other => {
                return Err(XmlError::Malformed(format!(
                    "{} after the root element",
                    describe(&other)
                )));
            }
        }
    }
}

fn is_blank(text: &BytesText<'_>) -> bool {
    text.iter().all(u8::is_ascii_whitespace)
}

fn describe(event: &Event<'_>) -> &'static str {
    match event {
        Event::Start(_) | Event::Empty(_) => "element",
        Event::End(_) => "end tag",
        Event::Text(_) | Event::GeneralRef(_) => "text",
        Event::CData(_) => "CDATA section",
        Event::DocType(_) => "DOCTYPE",
        _ => "markup",
    }
}

/// Local name of an element, without any namespace prefix.
pub(crate) fn local_name<'e>(start: &'e BytesStart<'_>) -> Result<&'e str, XmlError> {
    Ok(std::str::from_utf8(start.local_name().into_inner())?)
}

// ---------------------------------------------------------------------------
// Helper functions for reading common XML patterns
// ---------------------------------------------------------------------------

/// Call `on_child` for every child element until the parent's end tag.
///
/// `on_child` must consume the child through its end tag.
fn for_each_child<'x>(
    reader: &mut Reader<&'x [u8]>,
    parent: &str,
    mut on_child: impl FnMut(&mut Reader<&'x [u8]>, &str, &BytesStart<'x>) -> Result<(), XmlError>,
) -> Result<(), XmlError> {
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = local_name(&e)?;
                on_child(reader, name, &e)?;
            }
            Event::End(_) => return Ok(()),
            Event::Eof => return Err(XmlError::UnexpectedEof(parent.to_owned())),
            _ => {}
        }
    }
}

/// Read the text content of the current element and consume its end tag.
///
/// Entity and character references are resolved and CDATA is taken verbatim.
fn read_text_content(reader: &mut Reader<&[u8]>, field: &str) -> Result<String, XmlError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::Malformed(err.to_string()))?;
                text.push_str(&decoded);
            }
            Event::CData(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::Malformed(err.to_string()))?;
                text.push_str(&decoded);
            }
            Event::GeneralRef(e) => {
                let name = e
                    .decode()
                    .map_err(|err| XmlError::Malformed(err.to_string()))?;
                let entity = format!("&{name};");
                let resolved = quick_xml::escape::unescape(&entity)
                    .map_err(|err| XmlError::Malformed(err.to_string()))?;
                text.push_str(&resolved);
            }
            Event::Start(_) => skip_element(reader, field)?,
            Event::End(_) => return Ok(text),
            Event::Eof => return Err(XmlError::UnexpectedEof(field.to_owned())),
            _ => {}
        }
    }
}

/// Skip over an element and all its children.
fn skip_element(reader: &mut Reader<&[u8]>, field: &str) -> Result<(), XmlError> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => return Err(XmlError::UnexpectedEof(field.to_owned())),
            _ => {}
        }
    }
}

/// Value of the attribute `name` on `start`, with references resolved.
fn attribute(start: &BytesStart<'_>, name: &str) -> Result<Option<String>, XmlError> {
    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == name.as_bytes() {
            let raw = std::str::from_utf8(&attr.value)?;
            let value = quick_xml::escape::unescape(raw)
                .map_err(|err| XmlError::Malformed(err.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn required_attribute(start: &BytesStart<'_>, name: &str) -> Result<String, XmlError> {
    let owner = local_name(start)?;
    attribute(start, name)?.ok_or_else(|| XmlError::MissingElement(format!("{owner}/@{name}")))
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, XmlError> {
    value.ok_or_else(|| XmlError::MissingElement(field.to_owned()))
}

/// Parse a boolean from XML text ("true"/"false").
fn parse_bool(field: &str, text: &str) -> Result<bool, XmlError> {
    match text.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(XmlError::coercion(field, text, "expected 'true' or 'false'")),
    }
}

/// Parse an integer from XML text.
fn parse_int<N>(field: &str, text: &str) -> Result<N, XmlError>
where
    N: FromStr,
    N::Err: std::fmt::Display,
{
    text.trim()
        .parse::<N>()
        .map_err(|e| XmlError::coercion(field, text, e))
}

/// Parse an ISO 8601 timestamp from XML text.
fn parse_timestamp(field: &str, text: &str) -> Result<chrono::DateTime<chrono::Utc>, XmlError> {
    let s = text.trim();
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.fZ")
                .map(|ndt| ndt.and_utc())
        })
        .map_err(|e| XmlError::coercion(field, text, e))
}

/// Parse an enum from its wire name.
fn parse_enum<E: WireEnum>(field: &str, text: &str) -> Result<E, XmlError> {
    E::from_wire(text.trim()).ok_or_else(|| XmlError::coercion(field, text, "unknown value"))
}

fn read_bool(reader: &mut Reader<&[u8]>, field: &str) -> Result<bool, XmlError> {
    let text = read_text_content(reader, field)?;
    parse_bool(field, &text)
}

fn read_int<N>(reader: &mut Reader<&[u8]>, field: &str) -> Result<N, XmlError>
where
    N: FromStr,
    N::Err: std::fmt::Display,
{
    let text = read_text_content(reader, field)?;
    parse_int(field, &text)
}

fn read_timestamp(
    reader: &mut Reader<&[u8]>,
    field: &str,
) -> Result<chrono::DateTime<chrono::Utc>, XmlError> {
    let text = read_text_content(reader, field)?;
    parse_timestamp(field, &text)
}

fn read_enum<E: WireEnum>(reader: &mut Reader<&[u8]>, field: &str) -> Result<E, XmlError> {
    let text = read_text_content(reader, field)?;
    parse_enum(field, &text)
}

/// Read `<tag currency="XXX">0.00</tag>`, normalizing the amount.
///
/// Without a `currency` attribute the configured default currency applies.
fn read_money(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart<'_>,
    field: &str,
) -> Result<Money, XmlError> {
    let currency = attribute(start, "currency")?.map_or_else(
        || checkoutkit_core::default_currency().clone(),
        CurrencyCode::from,
    );
    let text = read_text_content(reader, field)?;
    Money::from_wire(currency, &text).map_err(|e| XmlError::coercion(field, &text, e))
}

/// Deserialize the children named `item_tag` of the current element, in order.
fn deserialize_list<T: CheckoutDeserialize>(
    reader: &mut Reader<&[u8]>,
    parent: &str,
    item_tag: &str,
) -> Result<Vec<T>, XmlError> {
    let mut items = Vec::new();
    for_each_child(reader, parent, |reader, name, child| {
        if name == item_tag {
            items.push(T::deserialize_xml(reader, child)?);
        } else {
            skip_element(reader, name)?;
        }
        Ok(())
    })?;
    Ok(items)
}

/// Text of the children named `item_tag` of the current element, in order.
fn read_text_list(
    reader: &mut Reader<&[u8]>,
    parent: &str,
    item_tag: &str,
) -> Result<Vec<String>, XmlError> {
    let mut items = Vec::new();
    for_each_child(reader, parent, |reader, name, _| {
        if name == item_tag {
            items.push(read_text_content(reader, name)?);
        } else {
            skip_element(reader, name)?;
        }
        Ok(())
    })?;
    Ok(items)
}

// ---------------------------------------------------------------------------
// Carts
// ---------------------------------------------------------------------------

impl CheckoutDeserialize for Item {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, _start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let mut item_name = None;
        let mut item_description = None;
        let mut unit_price = None;
        let mut quantity = None;
        let mut merchant_item_id = None;
        let mut tax_table_selector = None;

        for_each_child(reader, "item", |reader, name, child| {
            match name {
                "item-name" => item_name = Some(read_text_content(reader, name)?),
                "item-description" => item_description = Some(read_text_content(reader, name)?),
                "unit-price" => unit_price = Some(read_money(reader, child, name)?),
                "quantity" => quantity = Some(read_int(reader, name)?),
                "merchant-item-id" => merchant_item_id = Some(read_text_content(reader, name)?),
                "tax-table-selector" => {
                    tax_table_selector = Some(read_text_content(reader, name)?);
                }
                _ => skip_element(reader, name)?,
            }
            Ok(())
        })?;

        Ok(Item {
            item_name: required(item_name, "item-name")?,
            item_description: item_description.unwrap_or_default(),
            unit_price: required(unit_price, "unit-price")?,
            quantity: required(quantity, "quantity")?,
            merchant_item_id,
            tax_table_selector,
        })
    }
}

impl CheckoutDeserialize for ShoppingCart {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, _start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let mut cart = ShoppingCart::default();

        for_each_child(reader, "shopping-cart", |reader, name, _| {
            match name {
                "items" => cart.items = deserialize_list(reader, name, "item")?,
                "cart-expiration" => {
                    for_each_child(reader, name, |reader, name, _| {
                        if name == "good-until-date" {
                            cart.cart_expiration = Some(read_timestamp(reader, name)?);
                        } else {
                            skip_element(reader, name)?;
                        }
                        Ok(())
                    })?;
                }
                "merchant-private-data" => {
                    for_each_child(reader, name, |reader, name, _| {
                        if name == "merchant-note" {
                            cart.merchant_private_data = Some(read_text_content(reader, name)?);
                        } else {
                            skip_element(reader, name)?;
                        }
                        Ok(())
                    })?;
                }
                _ => skip_element(reader, name)?,
            }
            Ok(())
        })?;

        Ok(cart)
    }
}

impl CheckoutDeserialize for FlatRateShipping {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let shipping_name = required_attribute(start, "name")?;
        let mut price = None;

        for_each_child(reader, "flat-rate-shipping", |reader, name, child| {
            if name == "price" {
                price = Some(read_money(reader, child, name)?);
            } else {
                skip_element(reader, name)?;
            }
            Ok(())
        })?;

        Ok(FlatRateShipping {
            name: shipping_name,
            price: required(price, "price")?,
        })
    }
}

impl CheckoutDeserialize for MerchantCheckoutFlowSupport {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, _start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let mut flow = MerchantCheckoutFlowSupport::default();

        for_each_child(reader, "merchant-checkout-flow-support", |reader, name, _| {
            match name {
                "edit-cart-url" => flow.edit_cart_url = Some(read_text_content(reader, name)?),
                "continue-shopping-url" => {
                    flow.continue_shopping_url = Some(read_text_content(reader, name)?);
                }
                "request-buyer-phone-number" => {
                    flow.request_buyer_phone_number = Some(read_bool(reader, name)?);
                }
                "shipping-methods" => {
                    flow.flat_rate_shipping = deserialize_list(reader, name, "flat-rate-shipping")?;
                }
                _ => skip_element(reader, name)?,
            }
            Ok(())
        })?;

        Ok(flow)
    }
}

impl CheckoutDeserialize for CheckoutShoppingCart {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, _start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let mut shopping_cart = None;
        let mut checkout_flow_support = None;

        for_each_child(reader, "checkout-shopping-cart", |reader, name, child| {
            match name {
                "shopping-cart" => {
                    shopping_cart = Some(ShoppingCart::deserialize_xml(reader, child)?);
                }
                "checkout-flow-support" => {
                    for_each_child(reader, name, |reader, name, child| {
                        if name == "merchant-checkout-flow-support" {
                            checkout_flow_support =
                                Some(MerchantCheckoutFlowSupport::deserialize_xml(reader, child)?);
                        } else {
                            skip_element(reader, name)?;
                        }
                        Ok(())
                    })?;
                }
                _ => skip_element(reader, name)?,
            }
            Ok(())
        })?;

        Ok(CheckoutShoppingCart {
            shopping_cart: required(shopping_cart, "shopping-cart")?,
            checkout_flow_support,
        })
    }
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

impl CheckoutDeserialize for Address {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let parent = local_name(start)?.to_owned();
        let mut address = Address::default();

        for_each_child(reader, &parent, |reader, name, _| {
            let slot = match name {
                "contact-name" => &mut address.contact_name,
                "company-name" => &mut address.company_name,
                "email" => &mut address.email,
                "phone" => &mut address.phone,
                "address1" => &mut address.address1,
                "address2" => &mut address.address2,
                "city" => &mut address.city,
                "region" => &mut address.region,
                "postal-code" => &mut address.postal_code,
                "country-code" => &mut address.country_code,
                _ => return skip_element(reader, name),
            };
            *slot = Some(read_text_content(reader, name)?);
            Ok(())
        })?;

        Ok(address)
    }
}

impl CheckoutDeserialize for MerchantCodeAdjustment {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let element = local_name(start)?.to_owned();
        let kind = parse_enum::<MerchantCodeType>("merchant-codes", &element)?;
        let mut code = None;
        let mut calculated_amount = None;
        let mut applied_amount = None;
        let mut message = None;

        for_each_child(reader, &element, |reader, name, child| {
            match name {
                "code" => code = Some(read_text_content(reader, name)?),
                "calculated-amount" => calculated_amount = Some(read_money(reader, child, name)?),
                "applied-amount" => applied_amount = Some(read_money(reader, child, name)?),
                "message" => message = Some(read_text_content(reader, name)?),
                _ => skip_element(reader, name)?,
            }
            Ok(())
        })?;

        Ok(MerchantCodeAdjustment {
            kind,
            code: required(code, "code")?,
            calculated_amount,
            applied_amount: required(applied_amount, "applied-amount")?,
            message,
        })
    }
}

impl CheckoutDeserialize for OrderAdjustment {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, _start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let mut adjustment = OrderAdjustment::default();

        for_each_child(reader, "order-adjustment", |reader, name, child| {
            match name {
                "merchant-codes" => {
                    for_each_child(reader, name, |reader, name, child| {
                        if MerchantCodeType::from_wire(name).is_some() {
                            adjustment
                                .merchant_codes
                                .push(MerchantCodeAdjustment::deserialize_xml(reader, child)?);
                        } else {
                            skip_element(reader, name)?;
                        }
                        Ok(())
                    })?;
                }
                "total-tax" => adjustment.total_tax = Some(read_money(reader, child, name)?),
                "adjustment-total" => {
                    adjustment.adjustment_total = Some(read_money(reader, child, name)?);
                }
                _ => skip_element(reader, name)?,
            }
            Ok(())
        })?;

        Ok(adjustment)
    }
}

impl CheckoutDeserialize for MarketingPreferences {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, _start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let mut preferences = MarketingPreferences::default();

        for_each_child(reader, "buyer-marketing-preferences", |reader, name, _| {
            if name == "email-allowed" {
                preferences.email_allowed = read_bool(reader, name)?;
            } else {
                skip_element(reader, name)?;
            }
            Ok(())
        })?;

        Ok(preferences)
    }
}

impl CheckoutDeserialize for NewOrderNotification {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let serial_number = required_attribute(start, "serial-number")?;
        let mut google_order_number = None;
        let mut buyer_shipping_address = None;
        let mut buyer_billing_address = None;
        let mut buyer_id = None;
        let mut buyer_marketing_preferences = None;
        let mut shopping_cart = None;
        let mut order_adjustment = None;
        let mut order_total = None;
        let mut fulfillment_order_state = None;
        let mut financial_order_state = None;
        let mut timestamp = None;

        for_each_child(reader, "new-order-notification", |reader, name, child| {
            match name {
                "google-order-number" => {
                    google_order_number = Some(read_text_content(reader, name)?);
                }
                "buyer-shipping-address" => {
                    buyer_shipping_address = Some(Address::deserialize_xml(reader, child)?);
                }
                "buyer-billing-address" => {
                    buyer_billing_address = Some(Address::deserialize_xml(reader, child)?);
                }
                "buyer-id" => buyer_id = Some(read_int(reader, name)?),
                "buyer-marketing-preferences" => {
                    buyer_marketing_preferences =
                        Some(MarketingPreferences::deserialize_xml(reader, child)?);
                }
                "shopping-cart" => {
                    shopping_cart = Some(ShoppingCart::deserialize_xml(reader, child)?);
                }
                "order-adjustment" => {
                    order_adjustment = Some(OrderAdjustment::deserialize_xml(reader, child)?);
                }
                "order-total" => order_total = Some(read_money(reader, child, name)?),
                "fulfillment-order-state" => {
                    fulfillment_order_state = Some(read_enum(reader, name)?);
                }
                "financial-order-state" => financial_order_state = Some(read_enum(reader, name)?),
                "timestamp" => timestamp = Some(read_timestamp(reader, name)?),
                _ => skip_element(reader, name)?,
            }
            Ok(())
        })?;

        Ok(NewOrderNotification {
            serial_number,
            google_order_number: required(google_order_number, "google-order-number")?,
            buyer_shipping_address,
            buyer_billing_address,
            buyer_id,
            buyer_marketing_preferences,
            shopping_cart: shopping_cart.unwrap_or_default(),
            order_adjustment,
            order_total,
            fulfillment_order_state: fulfillment_order_state.unwrap_or_default(),
            financial_order_state: financial_order_state.unwrap_or_default(),
            timestamp: required(timestamp, "timestamp")?,
        })
    }
}

impl CheckoutDeserialize for OrderStateChangeNotification {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let serial_number = required_attribute(start, "serial-number")?;
        let mut google_order_number = None;
        let mut new_financial = None;
        let mut new_fulfillment = None;
        let mut previous_financial = None;
        let mut previous_fulfillment = None;
        let mut reason = None;
        let mut timestamp = None;

        for_each_child(reader, "order-state-change-notification", |reader, name, _| {
            match name {
                "google-order-number" => {
                    google_order_number = Some(read_text_content(reader, name)?);
                }
                "new-financial-order-state" => new_financial = Some(read_enum(reader, name)?),
                "new-fulfillment-order-state" => new_fulfillment = Some(read_enum(reader, name)?),
                "previous-financial-order-state" => {
                    previous_financial = Some(read_enum(reader, name)?);
                }
                "previous-fulfillment-order-state" => {
                    previous_fulfillment = Some(read_enum(reader, name)?);
                }
                "reason" => reason = Some(read_text_content(reader, name)?),
                "timestamp" => timestamp = Some(read_timestamp(reader, name)?),
                _ => skip_element(reader, name)?,
            }
            Ok(())
        })?;

        Ok(OrderStateChangeNotification {
            serial_number,
            google_order_number: required(google_order_number, "google-order-number")?,
            new_financial_order_state: required(new_financial, "new-financial-order-state")?,
            new_fulfillment_order_state: required(new_fulfillment, "new-fulfillment-order-state")?,
            previous_financial_order_state: required(
                previous_financial,
                "previous-financial-order-state",
            )?,
            previous_fulfillment_order_state: required(
                previous_fulfillment,
                "previous-fulfillment-order-state",
            )?,
            reason,
            timestamp: required(timestamp, "timestamp")?,
        })
    }
}

impl CheckoutDeserialize for RiskInformation {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, _start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let mut risk = RiskInformation::default();

        for_each_child(reader, "risk-information", |reader, name, child| {
            match name {
                "eligible-for-protection" => risk.eligible_for_protection = read_bool(reader, name)?,
                "billing-address" => {
                    risk.billing_address = Some(Address::deserialize_xml(reader, child)?);
                }
                "avs-response" => risk.avs_response = read_text_content(reader, name)?,
                "cvn-response" => risk.cvn_response = read_text_content(reader, name)?,
                "partial-cc-number" => risk.partial_cc_number = read_text_content(reader, name)?,
                "ip-address" => risk.ip_address = read_text_content(reader, name)?,
                "buyer-account-age" => risk.buyer_account_age = read_int(reader, name)?,
                _ => skip_element(reader, name)?,
            }
            Ok(())
        })?;

        Ok(risk)
    }
}

impl CheckoutDeserialize for RiskInformationNotification {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let serial_number = required_attribute(start, "serial-number")?;
        let mut google_order_number = None;
        let mut risk_information = None;
        let mut timestamp = None;

        for_each_child(reader, "risk-information-notification", |reader, name, child| {
            match name {
                "google-order-number" => {
                    google_order_number = Some(read_text_content(reader, name)?);
                }
                "risk-information" => {
                    risk_information = Some(RiskInformation::deserialize_xml(reader, child)?);
                }
                "timestamp" => timestamp = Some(read_timestamp(reader, name)?),
                _ => skip_element(reader, name)?,
            }
            Ok(())
        })?;

        Ok(RiskInformationNotification {
            serial_number,
            google_order_number: required(google_order_number, "google-order-number")?,
            risk_information: required(risk_information, "risk-information")?,
            timestamp: required(timestamp, "timestamp")?,
        })
    }
}

impl CheckoutDeserialize for AuthorizationAmountNotification {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let serial_number = required_attribute(start, "serial-number")?;
        let mut google_order_number = None;
        let mut authorization_amount = None;
        let mut authorization_expiration_date = None;
        let mut avs_response = None;
        let mut cvn_response = None;
        let mut timestamp = None;

        for_each_child(reader, "authorization-amount-notification", |reader, name, child| {
            match name {
                "google-order-number" => {
                    google_order_number = Some(read_text_content(reader, name)?);
                }
                "authorization-amount" => {
                    authorization_amount = Some(read_money(reader, child, name)?);
                }
                "authorization-expiration-date" => {
                    authorization_expiration_date = Some(read_timestamp(reader, name)?);
                }
                "avs-response" => avs_response = Some(read_text_content(reader, name)?),
                "cvn-response" => cvn_response = Some(read_text_content(reader, name)?),
                "timestamp" => timestamp = Some(read_timestamp(reader, name)?),
                _ => skip_element(reader, name)?,
            }
            Ok(())
        })?;

        Ok(AuthorizationAmountNotification {
            serial_number,
            google_order_number: required(google_order_number, "google-order-number")?,
            authorization_amount: required(authorization_amount, "authorization-amount")?,
            authorization_expiration_date: required(
                authorization_expiration_date,
                "authorization-expiration-date",
            )?,
            avs_response: avs_response.unwrap_or_default(),
            cvn_response: cvn_response.unwrap_or_default(),
            timestamp: required(timestamp, "timestamp")?,
        })
    }
}

/// Charge, refund and chargeback notifications share one shape: a latest and
/// a running total amount.
macro_rules! impl_amount_notification {
    ($ty:ident, $root:literal, $latest:ident => $latest_tag:literal, $total:ident => $total_tag:literal) => {
        impl CheckoutDeserialize for $ty {
            fn deserialize_xml(
                reader: &mut Reader<&[u8]>,
                start: &BytesStart<'_>,
            ) -> Result<Self, XmlError> {
                let serial_number = required_attribute(start, "serial-number")?;
                let mut google_order_number = None;
                let mut latest = None;
                let mut total = None;
                let mut timestamp = None;

                for_each_child(reader, $root, |reader, name, child| {
                    match name {
                        "google-order-number" => {
                            google_order_number = Some(read_text_content(reader, name)?);
                        }
                        $latest_tag => latest = Some(read_money(reader, child, name)?),
                        $total_tag => total = Some(read_money(reader, child, name)?),
                        "timestamp" => timestamp = Some(read_timestamp(reader, name)?),
                        _ => skip_element(reader, name)?,
                    }
                    Ok(())
                })?;

                Ok($ty {
                    serial_number,
                    google_order_number: required(google_order_number, "google-order-number")?,
                    $latest: required(latest, $latest_tag)?,
                    $total: required(total, $total_tag)?,
                    timestamp: required(timestamp, "timestamp")?,
                })
            }
        }
    };
}

impl_amount_notification!(
    ChargeAmountNotification,
    "charge-amount-notification",
    latest_charge_amount => "latest-charge-amount",
    total_charge_amount => "total-charge-amount"
);
impl_amount_notification!(
    RefundAmountNotification,
    "refund-amount-notification",
    latest_refund_amount => "latest-refund-amount",
    total_refund_amount => "total-refund-amount"
);
impl_amount_notification!(
    ChargebackAmountNotification,
    "chargeback-amount-notification",
    latest_chargeback_amount => "latest-chargeback-amount",
    total_chargeback_amount => "total-chargeback-amount"
);

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

impl CheckoutDeserialize for RequestReceived {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let serial_number = required_attribute(start, "serial-number")?;
        skip_element(reader, "request-received")?;
        Ok(RequestReceived { serial_number })
    }
}

impl CheckoutDeserialize for ErrorResponse {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let serial_number = required_attribute(start, "serial-number")?;
        let mut error_message = None;
        let mut warning_messages = Vec::new();

        for_each_child(reader, "error", |reader, name, _| {
            match name {
                "error-message" => error_message = Some(read_text_content(reader, name)?),
                "warning-messages" => warning_messages = read_text_list(reader, name, "string")?,
                _ => skip_element(reader, name)?,
            }
            Ok(())
        })?;

        Ok(ErrorResponse {
            serial_number,
            error_message: required(error_message, "error-message")?,
            warning_messages,
        })
    }
}

impl CheckoutDeserialize for CheckoutRedirect {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let serial_number = required_attribute(start, "serial-number")?;
        let mut redirect_url = None;

        for_each_child(reader, "checkout-redirect", |reader, name, _| {
            if name == "redirect-url" {
                redirect_url = Some(read_text_content(reader, name)?);
            } else {
                skip_element(reader, name)?;
            }
            Ok(())
        })?;

        Ok(CheckoutRedirect {
            serial_number,
            redirect_url: required(redirect_url, "redirect-url")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Order processing commands
// ---------------------------------------------------------------------------

impl CheckoutDeserialize for ChargeOrderRequest {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let google_order_number = required_attribute(start, "google-order-number")?;
        let mut amount = None;

        for_each_child(reader, "charge-order", |reader, name, child| {
            if name == "amount" {
                amount = Some(read_money(reader, child, name)?);
            } else {
                skip_element(reader, name)?;
            }
            Ok(())
        })?;

        Ok(ChargeOrderRequest {
            google_order_number,
            amount,
        })
    }
}

impl CheckoutDeserialize for RefundOrderRequest {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let google_order_number = required_attribute(start, "google-order-number")?;
        let mut reason = None;
        let mut amount = None;
        let mut comment = None;

        for_each_child(reader, "refund-order", |reader, name, child| {
            match name {
                "reason" => reason = Some(read_text_content(reader, name)?),
                "amount" => amount = Some(read_money(reader, child, name)?),
                "comment" => comment = Some(read_text_content(reader, name)?),
                _ => skip_element(reader, name)?,
            }
            Ok(())
        })?;

        Ok(RefundOrderRequest {
            google_order_number,
            reason: required(reason, "reason")?,
            amount,
            comment,
        })
    }
}

impl CheckoutDeserialize for CancelOrderRequest {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let google_order_number = required_attribute(start, "google-order-number")?;
        let mut reason = None;
        let mut comment = None;

        for_each_child(reader, "cancel-order", |reader, name, _| {
            match name {
                "reason" => reason = Some(read_text_content(reader, name)?),
                "comment" => comment = Some(read_text_content(reader, name)?),
                _ => skip_element(reader, name)?,
            }
            Ok(())
        })?;

        Ok(CancelOrderRequest {
            google_order_number,
            reason: required(reason, "reason")?,
            comment,
        })
    }
}

impl CheckoutDeserialize for TrackingData {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, _start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let mut carrier = None;
        let mut tracking_number = None;

        for_each_child(reader, "tracking-data", |reader, name, _| {
            match name {
                "carrier" => carrier = Some(read_enum(reader, name)?),
                "tracking-number" => tracking_number = Some(read_text_content(reader, name)?),
                _ => skip_element(reader, name)?,
            }
            Ok(())
        })?;

        Ok(TrackingData {
            carrier: carrier.unwrap_or_default(),
            tracking_number: required(tracking_number, "tracking-number")?,
        })
    }
}

impl CheckoutDeserialize for DeliverOrderRequest {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let google_order_number = required_attribute(start, "google-order-number")?;
        let mut tracking_data = None;
        let mut send_email = None;

        for_each_child(reader, "deliver-order", |reader, name, child| {
            match name {
                "tracking-data" => tracking_data = Some(TrackingData::deserialize_xml(reader, child)?),
                "send-email" => send_email = Some(read_bool(reader, name)?),
                _ => skip_element(reader, name)?,
            }
            Ok(())
        })?;

        Ok(DeliverOrderRequest {
            google_order_number,
            tracking_data,
            send_email,
        })
    }
}

impl CheckoutDeserialize for NotificationAcknowledgment {
    fn deserialize_xml(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let serial_number = attribute(start, "serial-number")?;
        skip_element(reader, "notification-acknowledgment")?;
        Ok(NotificationAcknowledgment { serial_number })
    }
}
