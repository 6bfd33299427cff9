//! Type-inferring parsing of inbound documents.
//!
//! The checkout service posts notifications and answers requests with one of
//! a fixed set of root elements. [`parse_inbound`] looks the root element up
//! in a static table and dispatches to the matching deserializer.
//!
//! A document whose root element is not in the table is not an error: the
//! parse yields `Ok(None)` so callers can skip messages they do not handle.
//! Malformed XML is still an error, both in the prolog and inside a known
//! document.

use std::io::Read;

use checkoutkit_model::{
    AuthorizationAmountNotification, ChargeAmountNotification, ChargebackAmountNotification,
    CheckoutRedirect, ErrorResponse, NewOrderNotification, OrderStateChangeNotification,
    RefundAmountNotification, RequestReceived, RiskInformationNotification,
};
use quick_xml::Reader;
use quick_xml::events::BytesStart;

use crate::codec::{stream_to_text, strip_bom};
use crate::deserialize::{CheckoutDeserialize, finish_document, local_name, new_reader, read_root};
use crate::error::XmlError;
use crate::extract::top_element;
use crate::root::RootElement;
use crate::serialize::to_xml;

/// Reads the body of one inbound document type.
type RootReader = fn(&mut Reader<&[u8]>, &BytesStart<'_>) -> Result<Inbound, XmlError>;

fn read<T>(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Inbound, XmlError>
where
    T: CheckoutDeserialize + Into<Inbound>,
{
    T::deserialize_xml(reader, start).map(Into::into)
}

macro_rules! inbound_messages {
    ($($(#[$meta:meta])* $variant:ident($ty:ty)),+ $(,)?) => {
        /// A parsed inbound document.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Inbound {
            $(
                $(#[$meta])*
                $variant($ty),
            )+
        }

        $(
            impl From<$ty> for Inbound {
                fn from(message: $ty) -> Self {
                    Self::$variant(message)
                }
            }
        )+

        static ROOT_TABLE: &[(&str, RootReader)] = &[
            $((<$ty as RootElement>::ROOT_ELEMENT, read::<$ty>),)+
        ];

        impl Inbound {
            /// Root element name of this message.
            #[must_use]
            pub fn root_element(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => <$ty as RootElement>::ROOT_ELEMENT,)+
                }
            }

            /// Serial number carried on the root element.
            #[must_use]
            pub fn serial_number(&self) -> &str {
                match self {
                    $(Self::$variant(message) => message.serial_number.as_str(),)+
                }
            }

            /// Serialize this message back to a document.
            ///
            /// # Errors
            ///
            /// Returns `XmlError` if serialization fails.
            pub fn to_xml(&self) -> Result<Vec<u8>, XmlError> {
                match self {
                    $(Self::$variant(message) => to_xml(message),)+
                }
            }
        }
    };
}

inbound_messages! {
    /// `new-order-notification`
    NewOrder(NewOrderNotification),
    /// `order-state-change-notification`
    OrderStateChange(OrderStateChangeNotification),
    /// `risk-information-notification`
    RiskInformation(RiskInformationNotification),
    /// `authorization-amount-notification`
    AuthorizationAmount(AuthorizationAmountNotification),
    /// `charge-amount-notification`
    ChargeAmount(ChargeAmountNotification),
    /// `refund-amount-notification`
    RefundAmount(RefundAmountNotification),
    /// `chargeback-amount-notification`
    ChargebackAmount(ChargebackAmountNotification),
    /// `request-received`
    RequestReceived(RequestReceived),
    /// `error`
    Error(ErrorResponse),
    /// `checkout-redirect`
    CheckoutRedirect(CheckoutRedirect),
}

impl Inbound {
    /// The order this message is about; `None` for responses.
    #[must_use]
    pub fn google_order_number(&self) -> Option<&str> {
        match self {
            Self::NewOrder(n) => Some(n.google_order_number.as_str()),
            Self::OrderStateChange(n) => Some(n.google_order_number.as_str()),
            Self::RiskInformation(n) => Some(n.google_order_number.as_str()),
            Self::AuthorizationAmount(n) => Some(n.google_order_number.as_str()),
            Self::ChargeAmount(n) => Some(n.google_order_number.as_str()),
            Self::RefundAmount(n) => Some(n.google_order_number.as_str()),
            Self::ChargebackAmount(n) => Some(n.google_order_number.as_str()),
            Self::RequestReceived(_) | Self::Error(_) | Self::CheckoutRedirect(_) => None,
        }
    }

    /// Whether this is an asynchronous notification (which must be acknowledged).
    #[must_use]
    pub fn is_notification(&self) -> bool {
        self.google_order_number().is_some()
    }
}

/// Root element names [`parse_inbound`] recognizes.
pub fn inbound_roots() -> impl Iterator<Item = &'static str> {
    ROOT_TABLE.iter().map(|(name, _)| *name)
}

/// Parse a document, inferring its type from the root element.
///
/// # Errors
///
/// Returns [`XmlError::Syntax`] if the document is not well-formed, and the
/// field errors of [`from_xml`](crate::from_xml) for a known root with bad
/// content. An unknown root element yields `Ok(None)`.
pub fn parse_inbound(xml: &str) -> Result<Option<Inbound>, XmlError> {
    parse_known(xml).map_err(|err| {
        let err = err.with_input(xml);
        tracing::warn!(root = top_element(xml), error = %err, "rejected inbound document");
        err
    })
}

/// [`parse_inbound`] over UTF-8 bytes, skipping a leading byte-order mark.
///
/// # Errors
///
/// Returns [`XmlError::Decode`] for invalid UTF-8, otherwise as [`parse_inbound`].
pub fn parse_inbound_bytes(bytes: &[u8]) -> Result<Option<Inbound>, XmlError> {
    let xml = std::str::from_utf8(strip_bom(bytes))?;
    parse_inbound(xml)
}

/// [`parse_inbound`] over a stream, read to its end.
///
/// # Errors
///
/// Returns [`XmlError::Io`] or [`XmlError::Decode`] if the stream cannot be
/// read as UTF-8, otherwise as [`parse_inbound`].
pub fn parse_inbound_stream<R: Read>(stream: R) -> Result<Option<Inbound>, XmlError> {
    let xml = stream_to_text(stream)?;
    parse_inbound(&xml)
}

fn parse_known(xml: &str) -> Result<Option<Inbound>, XmlError> {
    let mut reader = new_reader(xml);
    let root = read_root(&mut reader)?;
    let name = local_name(&root)?;

    let Some((_, read_body)) = ROOT_TABLE.iter().find(|(known, _)| *known == name) else {
        tracing::debug!(root = name, "ignoring document with unknown root element");
        return Ok(None);
    };

    let message = read_body(&mut reader, &root)?;
    finish_document(&mut reader)?;
    tracing::debug!(
        root = name,
        serial_number = message.serial_number(),
        "parsed inbound document"
    );
    Ok(Some(message))
}
