//! Arbitrary property declarations (`[mask-type:luminance]`).

use std::borrow::Cow;

use crate::parser::lexer::is_balanced;
use crate::types::value::decode_arbitrary;
use crate::types::{PropertyFamily, StyleToken, TokenValue};

/// Parse `[property:value]`.
pub fn parse(raw: &str) -> Option<StyleToken> {
    let inner = raw.strip_prefix('[')?.strip_suffix(']')?;
    let (property, value) = inner.split_once(':')?;
    if !is_property_name(property) || value.is_empty() || !is_balanced(value) {
        return None;
    }
    let value = decode_arbitrary(value);
    Some(StyleToken {
        family: PropertyFamily::ArbitraryProperty,
        property: Cow::Owned(property.to_string()),
        css_value: value.clone(),
        value: TokenValue::Arbitrary(value),
        raw: raw.to_string(),
        negative: false,
    })
}

pub(crate) fn claims_delimited(raw: &str) -> bool {
    raw.starts_with('[') && raw.ends_with(']') && raw.contains(':')
}

/// Lowercase CSS property name or custom property.
fn is_property_name(name: &str) -> bool {
    if name.starts_with("--") {
        return name.len() > 2;
    }
    name.starts_with(|c: char| c.is_ascii_lowercase() || c == '-')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_and_value() {
        let token = parse("[mask-type:luminance]").unwrap();
        assert_eq!(token.property, "mask-type");
        assert_eq!(token.to_css(), "mask-type: luminance");
        assert!(token.is_arbitrary());

        let token = parse("[--scroll-offset:56px]").unwrap();
        assert_eq!(token.property, "--scroll-offset");

        let token = parse("[grid-template-columns:1fr_auto]").unwrap();
        assert_eq!(token.css_value, "1fr auto");
    }

    #[test]
    fn rejects_non_properties() {
        assert!(parse("[&:hover]").is_none());
        assert!(parse("[Color:red]").is_none());
        assert!(parse("[color:]").is_none());
        assert!(parse("[color:calc(1px]").is_none());
        assert!(parse("color:red").is_none());
    }
}
