//! XML encoding and decoding for the checkout API.
//!
//! This crate converts between the `checkoutkit-model` types and the checkout
//! XML wire format, and carries the lower-level text primitives that layer
//! depends on.
//!
//! # Key components
//!
//! - [`text_to_bytes`], [`bytes_to_text`] and [`stream_to_text`]: strict UTF-8 codec
//! - [`escape_xml_chars`]: numeric-reference escaping for text nodes
//! - [`CheckoutSerialize`] trait and [`to_xml`] for writing documents
//! - [`CheckoutDeserialize`] trait and [`from_xml`] for strict typed parsing
//! - [`parse_inbound`] for parsing a document whose type is inferred from its root element
//! - [`top_element`] and [`element_value`]: a non-validating fast path for probing documents
//!
//! # Checkout XML conventions
//!
//! - Namespace: `http://checkout.google.com/schema/2`
//! - Booleans: lowercase `true`/`false`
//! - Amounts: two fractional digits with a `currency` attribute
//! - Timestamps: RFC 3339 UTC at full precision (`2007-03-19T15:06:26.051Z`)
//! - XML declaration: `<?xml version="1.0" encoding="UTF-8"?>`

pub mod codec;
pub mod deserialize;
pub mod error;
pub mod escape;
pub mod extract;
pub mod inbound;
pub mod root;
pub mod serialize;

pub use codec::{UTF8_BOM, bytes_to_text, stream_to_text, strip_bom, text_to_bytes};
pub use deserialize::{CheckoutDeserialize, from_slice, from_xml};
pub use error::XmlError;
pub use escape::escape_xml_chars;
pub use extract::{TOP_ELEMENT_SCAN_LIMIT, element_value, top_element};
pub use inbound::{
    Inbound, inbound_roots, parse_inbound, parse_inbound_bytes, parse_inbound_stream,
};
pub use root::{CHECKOUT_NAMESPACE, RootElement};
pub use serialize::{CheckoutSerialize, to_xml};
