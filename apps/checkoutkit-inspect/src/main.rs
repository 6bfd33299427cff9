//! checkoutkit-inspect - look inside a checkout XML document.
//!
//! Reads a document from a file (or `-` for stdin), reports its root element
//! and order number through the fast extractor, then parses it fully and
//! prints a summary. With a signature argument and a merchant key in the
//! environment, the document is also checked as a signed cart.
//!
//! # Usage
//!
//! ```text
//! checkoutkit-inspect notification.xml
//! CHECKOUT_MERCHANT_KEY=12345 checkoutkit-inspect cart.xml wnHXcU/1//4SbpVEb88WaIB9td4=
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CHECKOUT_MERCHANT_KEY` | *(unset)* | Secret used to verify the cart signature |
//! | `CHECKOUT_DEFAULT_CURRENCY` | `USD` | Currency for amounts without a `currency` attribute |
//! | `CHECKOUT_ERROR_SNIPPET_LIMIT` | `4096` | Characters of input quoted in parse errors |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use checkoutkit_auth::verify_cart_signature;
use checkoutkit_core::CheckoutConfig;
use checkoutkit_model::NotificationAcknowledgment;
use checkoutkit_xml::{
    Inbound, bytes_to_text, element_value, parse_inbound, strip_bom, to_xml, top_element,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: checkoutkit-inspect <file|-> [signature]";

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    Ok(())
}

/// Command-line arguments.
#[derive(Debug)]
struct Args {
    input: Option<PathBuf>,
    signature: Option<String>,
}

impl Args {
    fn parse() -> Result<Self> {
        let mut args = std::env::args().skip(1);
        let Some(input) = args.next() else {
            bail!("{USAGE}");
        };
        let signature = args.next();
        if args.next().is_some() {
            bail!("{USAGE}");
        }
        Ok(Self {
            input: (input != "-").then(|| PathBuf::from(input)),
            signature,
        })
    }
}

/// A document as received, and the same document ready for parsing.
#[derive(Debug)]
struct Document {
    /// Exact text received, byte-order mark included; signatures cover this.
    received: String,
    /// Text handed to the parser and the extractor.
    xml: String,
}

impl Document {
    fn from_bytes(raw: &[u8]) -> Result<Self> {
        Ok(Self {
            received: bytes_to_text(raw)?,
            xml: bytes_to_text(strip_bom(raw))?,
        })
    }
}

fn read_document(input: Option<&Path>) -> Result<Document> {
    let raw = match input {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf).context("failed to read stdin")?;
            buf
        }
    };
    Document::from_bytes(&raw)
}

fn describe(message: &Inbound) -> String {
    match message {
        Inbound::NewOrder(n) => format!(
            "{} item(s), financial state {}, fulfillment state {}",
            n.shopping_cart.items.len(),
            n.financial_order_state,
            n.fulfillment_order_state
        ),
        Inbound::OrderStateChange(n) => format!(
            "financial {} -> {}, fulfillment {} -> {}",
            n.previous_financial_order_state,
            n.new_financial_order_state,
            n.previous_fulfillment_order_state,
            n.new_fulfillment_order_state
        ),
        Inbound::RiskInformation(n) => format!(
            "eligible for protection: {}, AVS {}, CVN {}",
            n.risk_information.eligible_for_protection,
            n.risk_information.avs_response,
            n.risk_information.cvn_response
        ),
        Inbound::AuthorizationAmount(n) => format!("authorized {}", n.authorization_amount),
        Inbound::ChargeAmount(n) => format!(
            "charged {} (total {})",
            n.latest_charge_amount, n.total_charge_amount
        ),
        Inbound::RefundAmount(n) => format!(
            "refunded {} (total {})",
            n.latest_refund_amount, n.total_refund_amount
        ),
        Inbound::ChargebackAmount(n) => format!(
            "charged back {} (total {})",
            n.latest_chargeback_amount, n.total_chargeback_amount
        ),
        Inbound::RequestReceived(_) => "request received".to_owned(),
        Inbound::Error(e) => format!(
            "error: {} ({} warning(s))",
            e.error_message,
            e.warning_messages.len()
        ),
        Inbound::CheckoutRedirect(r) => format!("redirect to {}", r.redirect_url),
    }
}

fn main() -> Result<()> {
    let config = CheckoutConfig::try_from_env()?;
    init_tracing(&config.log_level)?;
    config.install()?;

    let args = Args::parse()?;
    let document = read_document(args.input.as_deref())?;
    let xml = &document.xml;

    println!("root element:        {}", top_element(xml));
    println!("google-order-number: {}", element_value(xml, "google-order-number"));
    println!("serial-number:       {}", element_value(xml, "serial-number"));

    match parse_inbound(xml)? {
        Some(message) => {
            println!("message:             {}", describe(&message));
            if message.is_notification() {
                let ack = NotificationAcknowledgment::for_serial(message.serial_number());
                let ack_xml = String::from_utf8(to_xml(&ack)?)?;
                println!("acknowledgment:      {ack_xml}");
            }
        }
        None => println!("message:             (not an inbound message type)"),
    }

    if let Some(signature) = args.signature {
        let Ok(secret) = std::env::var("CHECKOUT_MERCHANT_KEY") else {
            bail!("CHECKOUT_MERCHANT_KEY must be set to verify a signature");
        };
        match verify_cart_signature(&document.received, &secret, &signature) {
            Ok(()) => {
                info!("cart signature verified");
                println!("signature:           valid");
            }
            Err(e) => {
                warn!(error = %e, "cart signature rejected");
                bail!("signature check failed: {e}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use checkoutkit_auth::compute_cart_signature;
    use checkoutkit_xml::UTF8_BOM;

    use super::*;

    #[test]
    fn test_should_sign_received_bytes_including_bom() {
        let mut raw = UTF8_BOM.to_vec();
        raw.extend_from_slice(b"<checkout-shopping-cart />");
        let document = Document::from_bytes(&raw).unwrap();

        assert_eq!(document.xml, "<checkout-shopping-cart />");
        assert_eq!(document.received.as_bytes(), raw.as_slice());

        let signature = compute_cart_signature("\u{feff}<checkout-shopping-cart />", "12345");
        assert!(verify_cart_signature(&document.received, "12345", &signature).is_ok());
        assert!(verify_cart_signature(&document.xml, "12345", &signature).is_err());
    }

    #[test]
    fn test_should_read_document_without_bom_unchanged() {
        let document = Document::from_bytes(b"<request-received serial-number=\"1\"/>").unwrap();
        assert_eq!(document.received, document.xml);
    }
}
