//! Fast, non-validating inspection of XML documents.
//!
//! These functions scan the raw text for tags instead of parsing the
//! document. They never fail: a missing element yields `""`. Use them to
//! route or inspect a notification before (or instead of) a full
//! deserialization; malformed input is not detected here.

/// Maximum number of markup tokens [`top_element`] looks at before giving up.
pub const TOP_ELEMENT_SCAN_LIMIT: usize = 64;

/// Name of the root element, or `""` if none is found within
/// [`TOP_ELEMENT_SCAN_LIMIT`] tokens.
///
/// The XML declaration, processing instructions, comments and a DOCTYPE are
/// skipped.
#[must_use]
pub fn top_element(xml: &str) -> &str {
    let mut scanner = Scanner::new(xml);
    for _ in 0..TOP_ELEMENT_SCAN_LIMIT {
        match scanner.next_token() {
            Some(Token::Open(tag)) => return tag.name,
            Some(Token::Other) => {}
            None => break,
        }
    }
    ""
}

/// Text content of the first element named `name`, or `""`.
///
/// The first tag in document order that either is named `name` or carries an
/// attribute named `name` decides the result; for an attribute, its value is
/// returned. Entity and character references are resolved. A self-closing
/// element yields `""`.
#[must_use]
pub fn element_value(xml: &str, name: &str) -> String {
    let mut scanner = Scanner::new(xml);
    while let Some(token) = scanner.next_token() {
        let Token::Open(tag) = token else {
            continue;
        };
        if tag.name == name || local_name(tag.name) == name {
            if tag.self_closing {
                return String::new();
            }
            return inner_text(&xml[scanner.pos..], tag.name)
                .map(resolve_references)
                .unwrap_or_default();
        }
        if let Some(value) = attribute_value(tag.attributes, name) {
            return resolve_references(value);
        }
    }
    String::new()
}

/// An opening (or self-closing) tag.
#[derive(Debug)]
struct OpenTag<'a> {
    name: &'a str,
    attributes: &'a str,
    self_closing: bool,
}

#[derive(Debug)]
enum Token<'a> {
    Open(OpenTag<'a>),
    /// End tag, comment, declaration, processing instruction or CDATA.
    Other,
}

/// Walks `<...>` tokens left to right.
#[derive(Debug)]
struct Scanner<'a> {
    xml: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(xml: &'a str) -> Self {
        Self { xml, pos: 0 }
    }

    fn next_token(&mut self) -> Option<Token<'a>> {
        loop {
            let rest = &self.xml[self.pos..];
            let open = rest.find('<')?;
            let start = self.pos + open;
            let markup = &self.xml[start..];

            let terminator = if markup.starts_with("<!--") {
                "-->"
            } else if markup.starts_with("<![CDATA[") {
                "]]>"
            } else if markup.starts_with("<?") {
                "?>"
            } else if markup.starts_with("<!") || markup.starts_with("</") {
                ">"
            } else if markup[1..].starts_with(is_name_start) {
                return self.open_tag(start);
            } else {
                // A stray '<' in text.
                self.pos = start + 1;
                continue;
            };

            let end = markup.find(terminator)?;
            self.pos = start + end + terminator.len();
            return Some(Token::Other);
        }
    }

    fn open_tag(&mut self, start: usize) -> Option<Token<'a>> {
        let body_start = start + 1;
        let close = body_start + find_tag_end(&self.xml[body_start..])?;
        let body = &self.xml[body_start..close];
        self.pos = close + 1;

        let (body, self_closing) = match body.strip_suffix('/') {
            Some(inner) => (inner, true),
            None => (body, false),
        };
        let name_len = body
            .find(|c: char| c.is_whitespace() || c == '/')
            .unwrap_or(body.len());

        Some(Token::Open(OpenTag {
            name: &body[..name_len],
            attributes: &body[name_len..],
            self_closing,
        }))
    }
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == ':'
}

fn local_name(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

/// Offset of the `>` closing a tag body, skipping quoted attribute values.
fn find_tag_end(body: &str) -> Option<usize> {
    let mut quote = None;
    for (i, c) in body.char_indices() {
        match (quote, c) {
            (None, '>') => return Some(i),
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            _ => {}
        }
    }
    None
}

/// Raw text between the current position and the matching `</name>`.
fn inner_text<'a>(rest: &'a str, name: &str) -> Option<&'a str> {
    let closing = format!("</{name}");
    let mut from = 0;
    while let Some(found) = rest[from..].find(&closing) {
        let at = from + found;
        let after = rest[at + closing.len()..].trim_start();
        if after.starts_with('>') {
            return Some(&rest[..at]);
        }
        from = at + closing.len();
    }
    None
}

/// Value of attribute `name` in a tag's attribute list.
fn attribute_value<'a>(attributes: &'a str, name: &str) -> Option<&'a str> {
    let mut rest = attributes;
    loop {
        rest = rest.trim_start();
        let eq = rest.find('=')?;
        let key = rest[..eq].trim_end();
        let value_part = rest[eq + 1..].trim_start();
        let quote = value_part.chars().next().filter(|c| *c == '"' || *c == '\'')?;
        let value_len = value_part[1..].find(quote)?;
        let value = &value_part[1..=value_len];
        if key == name || local_name(key) == name {
            return Some(value);
        }
        rest = &value_part[value_len + 2..];
    }
}

fn resolve_references(raw: &str) -> String {
    let text = raw
        .strip_prefix("<![CDATA[")
        .and_then(|s| s.strip_suffix("]]>"));
    match text {
        Some(cdata) => cdata.to_owned(),
        None => quick_xml::escape::unescape(raw)
            .map_or_else(|_| raw.to_owned(), std::borrow::Cow::into_owned),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTIFICATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- delivered by the checkout service -->
<new-order-notification xmlns="http://checkout.google.com/schema/2" serial-number="fc8n593wfhfoc8nwot8">
  <google-order-number>841171949013218</google-order-number>
  <buyer-id>379653</buyer-id>
  <shopping-cart>
    <items>
      <item>
        <item-name>Nescafé Cappuccino ©</item-name>
        <item-description>Smooth &#x26; creamy &lt;hot&gt;</item-description>
        <unit-price currency="SEK">23.50</unit-price>
        <quantity>2</quantity>
      </item>
    </items>
    <merchant-private-data/>
  </shopping-cart>
</new-order-notification>"#;

    #[test]
    fn test_should_find_top_element() {
        assert_eq!(top_element(NOTIFICATION), "new-order-notification");
        assert_eq!(top_element("<request-received serial-number='1'/>"), "request-received");
    }

    #[test]
    fn test_should_skip_prolog_tokens() {
        let xml = "<?xml version=\"1.0\"?><!DOCTYPE x><?pi data?><!-- <fake> --><real/>";
        assert_eq!(top_element(xml), "real");
    }

    #[test]
    fn test_should_return_empty_top_element_for_plain_text() {
        assert_eq!(top_element("This is not valid XML."), "");
        assert_eq!(top_element(""), "");
        assert_eq!(top_element("a < b"), "");
    }

    #[test]
    fn test_should_bound_top_element_scan() {
        let mut xml = "<!-- c -->".repeat(TOP_ELEMENT_SCAN_LIMIT);
        xml.push_str("<late/>");
        assert_eq!(top_element(&xml), "");
    }

    #[test]
    fn test_should_extract_element_value() {
        assert_eq!(element_value(NOTIFICATION, "google-order-number"), "841171949013218");
        assert_eq!(element_value(NOTIFICATION, "quantity"), "2");
        assert_eq!(element_value(NOTIFICATION, "item-name"), "Nescafé Cappuccino ©");
    }

    #[test]
    fn test_should_resolve_references() {
        assert_eq!(element_value(NOTIFICATION, "item-description"), "Smooth & creamy <hot>");
    }

    #[test]
    fn test_should_extract_root_attribute() {
        assert_eq!(element_value(NOTIFICATION, "serial-number"), "fc8n593wfhfoc8nwot8");
        assert_eq!(element_value(NOTIFICATION, "currency"), "SEK");
    }

    #[test]
    fn test_should_return_empty_when_missing() {
        assert_eq!(element_value(NOTIFICATION, "wacky-element"), "");
        assert_eq!(element_value(NOTIFICATION, "merchant-private-data"), "");
        assert_eq!(element_value("not xml", "anything"), "");
    }

    #[test]
    fn test_should_not_match_name_prefixes() {
        let xml = "<order><google-order-number-old>1</google-order-number-old><google-order-number>2</google-order-number></order>";
        assert_eq!(element_value(xml, "google-order-number"), "2");
    }

    #[test]
    fn test_should_return_empty_for_unclosed_element() {
        assert_eq!(element_value("<a><b>text", "b"), "");
    }

    #[test]
    fn test_should_unwrap_cdata() {
        let xml = "<a><note><![CDATA[1 < 2 & 3]]></note></a>";
        assert_eq!(element_value(xml, "note"), "1 < 2 & 3");
    }
}
