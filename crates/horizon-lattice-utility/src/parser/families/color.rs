//! Color utilities.
//!
//! Palette entries render as theme variables (`var(--color-red-500)`). An
//! opacity modifier after a top-level `/` mixes the color with transparent.

use super::family_table;
use crate::parser::lexer::{Grammar, RawValue, Scale, Utility};
use crate::types::PropertyFamily;
use crate::types::value::{is_integer, is_number, is_percentage};

const HUES: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

const SHADES: &[&str] = &[
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

const COLOR_KEYWORDS: &[(&str, &str)] = &[
    ("inherit", "inherit"),
    ("current", "currentcolor"),
    ("transparent", "transparent"),
    ("black", "var(--color-black)"),
    ("white", "var(--color-white)"),
];

const fn paint(prefix: &'static str, property: &'static str) -> Utility {
    Utility::new(prefix, property)
        .scale(Scale::Palette)
        .grammar(Grammar::Color)
}

static UTILITIES: &[Utility] = &[
    paint("text", "color"),
    paint("bg", "background-color"),
    paint("border", "border-color"),
    paint("border-x", "border-inline-color"),
    paint("border-y", "border-block-color"),
    paint("border-s", "border-inline-start-color"),
    paint("border-e", "border-inline-end-color"),
    paint("border-t", "border-top-color"),
    paint("border-r", "border-right-color"),
    paint("border-b", "border-bottom-color"),
    paint("border-l", "border-left-color"),
    paint("decoration", "text-decoration-color"),
    paint("outline", "outline-color"),
    paint("ring", "--tw-ring-color"),
    paint("ring-offset", "--tw-ring-offset-color"),
    paint("fill", "fill"),
    paint("stroke", "stroke"),
    paint("accent", "accent-color"),
    paint("caret", "caret-color"),
    paint("shadow", "--tw-shadow-color"),
    paint("from", "--tw-gradient-from"),
    paint("via", "--tw-gradient-via"),
    paint("to", "--tw-gradient-to"),
];

family_table!(PropertyFamily::Color, UTILITIES);

/// Resolve a palette entry or color keyword.
pub(crate) fn palette_color(name: &str) -> Option<String> {
    if let Some((_, css)) = COLOR_KEYWORDS.iter().find(|(keyword, _)| *keyword == name) {
        return Some(css.to_string());
    }
    let (hue, shade) = name.rsplit_once('-')?;
    (HUES.contains(&hue) && SHADES.contains(&shade))
        .then(|| format!("var(--color-{}-{})", hue, shade))
}

/// Apply an opacity modifier (`50`, `[0.5]`, `[25%]`, `(--alpha)`).
pub(crate) fn with_alpha(color: &str, alpha: &str) -> Option<String> {
    if color == "inherit" {
        return None;
    }
    let alpha = match RawValue::classify(alpha)? {
        RawValue::Bare(n) if is_integer(n) => {
            let n: u32 = n.parse().ok()?;
            if n > 100 {
                return None;
            }
            format!("{}%", n)
        }
        RawValue::Arbitrary { hint: None, value } if is_percentage(&value) => value,
        RawValue::Arbitrary { hint: None, value } if is_number(&value) => {
            format!("calc({} * 100%)", value)
        }
        RawValue::Custom { hint: None, name } => format!("var({})", name),
        _ => return None,
    };
    Some(format!("color-mix(in oklab, {} {}, transparent)", color, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TokenValue;

    #[test]
    fn palette_colors() {
        let token = parse("bg-red-500").unwrap();
        assert_eq!(token.property, "background-color");
        assert_eq!(token.css_value, "var(--color-red-500)");
        assert_eq!(token.preset(), Some("red-500"));

        assert_eq!(parse("text-current").unwrap().css_value, "currentcolor");
        assert!(parse("bg-red-450").is_none());
        assert!(parse("bg-crimson-500").is_none());
    }

    #[test]
    fn decoration_colors() {
        let token = parse("decoration-(--my-color)").unwrap();
        assert_eq!(token.property, "text-decoration-color");
        assert_eq!(token.value, TokenValue::CustomProperty("var(--my-color)".into()));
        assert_eq!(token.css_value, "var(--my-color)");

        let token = parse("decoration-[#243c5a]").unwrap();
        assert!(token.is_arbitrary());
        assert_eq!(token.css_value, "#243c5a");

        assert!(parse("decoration-foo").is_none());
        assert!(parse("decoration-[3px]").is_none());
    }

    #[test]
    fn opacity_modifiers() {
        assert_eq!(
            parse("bg-red-500/50").unwrap().css_value,
            "color-mix(in oklab, var(--color-red-500) 50%, transparent)"
        );
        assert_eq!(
            parse("bg-[#fff]/[0.25]").unwrap().css_value,
            "color-mix(in oklab, #fff calc(0.25 * 100%), transparent)"
        );
        assert_eq!(
            parse("text-black/(--alpha)").unwrap().css_value,
            "color-mix(in oklab, var(--color-black) var(--alpha), transparent)"
        );
        assert!(parse("bg-red-500/150").is_none());
        assert!(parse("bg-inherit/50").is_none());
    }

    #[test]
    fn prefix_specific_matches() {
        assert_eq!(parse("ring-offset-blue-300").unwrap().property, "--tw-ring-offset-color");
        assert_eq!(parse("border-x-white").unwrap().property, "border-inline-color");
        assert!(parse("border-[2px]").is_none());
        assert!(parse("-bg-red-500").is_none());
    }

    #[test]
    fn type_hints() {
        assert!(parse("bg-[color:var(--brand)]").is_some());
        assert!(parse("bg-(color:--brand)").is_some());
        assert!(parse("bg-(length:--brand)").is_none());
    }
}
