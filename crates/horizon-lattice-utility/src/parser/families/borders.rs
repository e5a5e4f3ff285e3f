//! Border, outline, ring and radius utilities.

use super::family_table;
use crate::parser::lexer::{Grammar, Keywords, Scale, Utility};
use crate::types::PropertyFamily;

const LINE_STYLES: Keywords = &[
    ("solid", "solid"),
    ("dashed", "dashed"),
    ("dotted", "dotted"),
    ("double", "double"),
    ("hidden", "hidden"),
    ("none", "none"),
];

const RADII: Keywords = &[
    ("", "0.25rem"),
    ("none", "0"),
    ("xs", "var(--radius-xs)"),
    ("sm", "var(--radius-sm)"),
    ("md", "var(--radius-md)"),
    ("lg", "var(--radius-lg)"),
    ("xl", "var(--radius-xl)"),
    ("2xl", "var(--radius-2xl)"),
    ("3xl", "var(--radius-3xl)"),
    ("4xl", "var(--radius-4xl)"),
    ("full", "calc(infinity * 1px)"),
];

const fn width(prefix: &'static str, property: &'static str) -> Utility {
    Utility::new(prefix, property)
        .keywords(&[("", "1px")])
        .scale(Scale::Pixels)
        .grammar(Grammar::Length)
}

const fn radius(prefix: &'static str, property: &'static str) -> Utility {
    Utility::new(prefix, property)
        .keywords(RADII)
        .grammar(Grammar::Length)
}

static UTILITIES: &[Utility] = &[
    width("border", "border-width"),
    width("border-x", "border-inline-width"),
    width("border-y", "border-block-width"),
    width("border-s", "border-inline-start-width"),
    width("border-e", "border-inline-end-width"),
    width("border-t", "border-top-width"),
    width("border-r", "border-right-width"),
    width("border-b", "border-bottom-width"),
    width("border-l", "border-left-width"),
    Utility::new("border", "border-style").keywords(LINE_STYLES),
    radius("rounded", "border-radius"),
    radius("rounded-tl", "border-top-left-radius"),
    radius("rounded-tr", "border-top-right-radius"),
    radius("rounded-br", "border-bottom-right-radius"),
    radius("rounded-bl", "border-bottom-left-radius"),
    radius("rounded-ss", "border-start-start-radius"),
    radius("rounded-se", "border-start-end-radius"),
    radius("rounded-es", "border-end-start-radius"),
    radius("rounded-ee", "border-end-end-radius"),
    width("outline", "outline-width"),
    Utility::new("outline", "outline-style").keywords(LINE_STYLES),
    Utility::new("outline-offset", "outline-offset")
        .scale(Scale::Pixels)
        .grammar(Grammar::Length)
        .negatable(),
    width("ring", "--tw-ring-width"),
    Utility::new("ring-offset", "--tw-ring-offset-width")
        .scale(Scale::Pixels)
        .grammar(Grammar::Length),
];

family_table!(PropertyFamily::Borders, UTILITIES);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_and_styles() {
        assert_eq!(parse("border").unwrap().to_css(), "border-width: 1px");
        assert_eq!(parse("border-2").unwrap().css_value, "2px");
        assert_eq!(parse("border-t-4").unwrap().property, "border-top-width");
        assert_eq!(parse("border-dashed").unwrap().property, "border-style");
        assert_eq!(parse("border-[3px]").unwrap().css_value, "3px");
    }

    #[test]
    fn radii() {
        assert_eq!(parse("rounded").unwrap().css_value, "0.25rem");
        assert_eq!(parse("rounded-tl-lg").unwrap().property, "border-top-left-radius");
        assert_eq!(parse("rounded-full").unwrap().css_value, "calc(infinity * 1px)");
        assert!(parse("rounded-huge").is_none());
    }

    #[test]
    fn outline_offsets() {
        assert_eq!(parse("outline-offset-2").unwrap().css_value, "2px");
        assert_eq!(parse("-outline-offset-2").unwrap().css_value, "-2px");
        assert!(parse("-outline-2").is_none());
    }
}
