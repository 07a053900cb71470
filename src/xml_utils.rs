//! XML utilities for IOF result documents
//!
//! Result files come straight out of timing software and are often sparse:
//! optional elements are missing, numbers are blank. These helpers read the
//! tree leniently, turning every missing value into an empty string or `0`.
//!
//! This module provides low-level decoding and lookup without any result semantics.

use roxmltree::Node;

use crate::{Result, ResultsError};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode a raw result file into a string ready for parsing.
///
/// Strips a leading UTF-8 byte order mark and rejects invalid UTF-8 or
/// documents that are empty after trimming.
pub fn decode_result_xml(data: &[u8]) -> Result<String> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

    let text = std::str::from_utf8(data)
        .map_err(|e| ResultsError::xml_error("UTF-8 conversion", e.to_string()))?;

    if text.trim().is_empty() {
        return Err(ResultsError::xml_error("Result document", "document is empty"));
    }

    Ok(text.to_string())
}

/// First child element of `node` with the given local name.
///
/// Namespaces are ignored so IOF 3.0 documents with a default namespace and
/// bare documents resolve the same way.
pub fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.is_element() && n.tag_name().name() == name)
}

/// All child elements of `node` with the given local name, in document order.
pub fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| n.is_element() && n.tag_name().name() == name)
}

/// All descendant elements of `node` with the given local name, in document order.
pub fn descendants<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants().filter(move |n| n.is_element() && n.tag_name().name() == name)
}

/// Trimmed text content of `node` and all its descendants.
pub fn text_content(node: Node<'_, '_>) -> String {
    let text: String = node.descendants().filter(|n| n.is_text()).filter_map(|n| n.text()).collect();
    text.trim().to_string()
}

/// Trimmed text of the first child element called `name`, or empty.
pub fn child_text(node: Node<'_, '_>, name: &str) -> String {
    child(node, name).map(text_content).unwrap_or_default()
}

/// Trimmed text at the end of a child-element path, or empty when any step is missing.
pub fn nested_text(node: Node<'_, '_>, path: &[&str]) -> String {
    let mut current = node;
    for name in path {
        match child(current, name) {
            Some(next) => current = next,
            None => return String::new(),
        }
    }
    text_content(current)
}

/// Read the leading integer of a numeric field.
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit (so `"123.8"` reads as `123`), and anything without digits reads
/// as `0`. Out-of-range values saturate.
pub fn parse_leading_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if negative { -value } else { value }
}
