//! Stylesheet text parser.
//!
//! Parsing is deliberately lossy: comments are stripped, every
//! `selector { prop: value; ... }` block becomes a [`StyleRule`], and an
//! unterminated trailing block is dropped without an error. Values are kept as
//! written (trimmed) and only interpreted later by [`crate::css::properties`].

use crate::css::model::{PropertyMap, StyleRule, Stylesheet};

/// Strip CSS block comments (`/* ... */`) from the input, replacing each
/// comment with a single space.
pub(crate) fn strip_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("/*") {
        result.push_str(&rest[..start]);
        result.push(' ');
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            // Unterminated comment: consume the rest of the input.
            None => rest = "",
        }
    }
    result.push_str(rest);

    result
}

/// Parse stylesheet text into a [`Stylesheet`].
pub fn parse_stylesheet(input: &str) -> Stylesheet {
    let cleaned = strip_comments(input);
    let mut sheet = Stylesheet::new();
    let mut rest = cleaned.as_str();

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open + 1..].find('}').map(|i| open + 1 + i) else {
            break;
        };
        let selector = rest[..open].trim();
        if !selector.is_empty() {
            let rule = StyleRule::new(selector, parse_declarations(&rest[open + 1..close]));
            if rule.selector.is_none() {
                tracing::debug!(selector, "unsupported selector will never match");
            }
            sheet.insert(rule);
        }
        rest = &rest[close + 1..];
    }

    sheet
}

/// Parse a declaration block body (`prop: value; ...`), as found between
/// braces or in an inline `style` attribute.
///
/// Each declaration is split at its first `:`; entries without a colon or
/// with an empty name are skipped.
pub fn parse_declarations(block: &str) -> PropertyMap {
    let mut map = PropertyMap::new();
    for decl in block.split(';') {
        let Some((name, value)) = decl.split_once(':') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        map.set(name.to_ascii_lowercase(), value.trim());
    }
    map
}
