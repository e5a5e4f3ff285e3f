//! Width and height utilities.

use super::family_table;
use crate::parser::lexer::{Grammar, Keywords, Scale, Utility};
use crate::types::PropertyFamily;

const WIDTH_KEYWORDS: Keywords = &[
    ("auto", "auto"),
    ("px", "1px"),
    ("full", "100%"),
    ("screen", "100vw"),
    ("dvw", "100dvw"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
];

const HEIGHT_KEYWORDS: Keywords = &[
    ("auto", "auto"),
    ("px", "1px"),
    ("full", "100%"),
    ("screen", "100vh"),
    ("dvh", "100dvh"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
];

const CONTAINER_KEYWORDS: Keywords = &[
    ("none", "none"),
    ("full", "100%"),
    ("prose", "65ch"),
    ("xs", "var(--container-xs)"),
    ("sm", "var(--container-sm)"),
    ("md", "var(--container-md)"),
    ("lg", "var(--container-lg)"),
    ("xl", "var(--container-xl)"),
    ("2xl", "var(--container-2xl)"),
    ("3xl", "var(--container-3xl)"),
    ("4xl", "var(--container-4xl)"),
    ("5xl", "var(--container-5xl)"),
    ("6xl", "var(--container-6xl)"),
    ("7xl", "var(--container-7xl)"),
];

const fn extent(prefix: &'static str, property: &'static str, keywords: Keywords) -> Utility {
    Utility::new(prefix, property)
        .keywords(keywords)
        .scale(Scale::Fraction)
        .grammar(Grammar::Length)
}

static UTILITIES: &[Utility] = &[
    extent("w", "width", WIDTH_KEYWORDS),
    extent("h", "height", HEIGHT_KEYWORDS),
    extent("min-w", "min-width", WIDTH_KEYWORDS),
    extent("min-h", "min-height", HEIGHT_KEYWORDS),
    extent("max-w", "max-width", CONTAINER_KEYWORDS),
    extent("max-h", "max-height", HEIGHT_KEYWORDS),
    Utility::new("aspect", "aspect-ratio")
        .keywords(&[("auto", "auto"), ("square", "1 / 1"), ("video", "16 / 9")])
        .grammar(Grammar::Any),
];

family_table!(PropertyFamily::Sizing, UTILITIES);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_and_keywords() {
        assert_eq!(parse("w-1/2").unwrap().css_value, "calc(1/2 * 100%)");
        assert_eq!(parse("h-screen").unwrap().css_value, "100vh");
        assert_eq!(parse("max-w-prose").unwrap().css_value, "65ch");
        assert!(parse("w-1/0").is_none());
    }

    #[test]
    fn min_prefix_is_not_margin() {
        assert_eq!(parse("min-w-0").unwrap().property, "min-width");
        assert_eq!(parse("min-h-[50vh]").unwrap().css_value, "50vh");
    }

    #[test]
    fn aspect_ratio() {
        assert_eq!(parse("aspect-video").unwrap().css_value, "16 / 9");
        assert_eq!(parse("aspect-[4/3]").unwrap().css_value, "4/3");
    }
}
