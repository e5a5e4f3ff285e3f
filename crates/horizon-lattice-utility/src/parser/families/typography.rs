//! Typography utilities.

use super::family_table;
use crate::parser::lexer::{Grammar, Scale, Utility};
use crate::types::PropertyFamily;

static UTILITIES: &[Utility] = &[
    Utility::new("text", "font-size")
        .keywords(&[
            ("xs", "var(--text-xs)"),
            ("sm", "var(--text-sm)"),
            ("base", "var(--text-base)"),
            ("lg", "var(--text-lg)"),
            ("xl", "var(--text-xl)"),
            ("2xl", "var(--text-2xl)"),
            ("3xl", "var(--text-3xl)"),
            ("4xl", "var(--text-4xl)"),
            ("5xl", "var(--text-5xl)"),
            ("6xl", "var(--text-6xl)"),
            ("7xl", "var(--text-7xl)"),
            ("8xl", "var(--text-8xl)"),
            ("9xl", "var(--text-9xl)"),
        ])
        .grammar(Grammar::Length),
    Utility::new("text", "text-align").keywords(&[
        ("left", "left"),
        ("center", "center"),
        ("right", "right"),
        ("justify", "justify"),
        ("start", "start"),
        ("end", "end"),
    ]),
    Utility::new("text", "text-wrap").keywords(&[
        ("wrap", "wrap"),
        ("nowrap", "nowrap"),
        ("balance", "balance"),
        ("pretty", "pretty"),
    ]),
    Utility::new("text", "text-overflow").keywords(&[("ellipsis", "ellipsis"), ("clip", "clip")]),
    Utility::new("font", "font-weight")
        .keywords(&[
            ("thin", "100"),
            ("extralight", "200"),
            ("light", "300"),
            ("normal", "400"),
            ("medium", "500"),
            ("semibold", "600"),
            ("bold", "700"),
            ("extrabold", "800"),
            ("black", "900"),
        ])
        .grammar(Grammar::Number),
    Utility::new("font", "font-family")
        .keywords(&[
            ("sans", "var(--font-sans)"),
            ("serif", "var(--font-serif)"),
            ("mono", "var(--font-mono)"),
        ])
        .grammar(Grammar::Any),
    Utility::new("leading", "line-height")
        .keywords(&[
            ("none", "1"),
            ("tight", "1.25"),
            ("snug", "1.375"),
            ("normal", "1.5"),
            ("relaxed", "1.625"),
            ("loose", "2"),
        ])
        .scale(Scale::Spacing)
        .grammar(Grammar::Any),
    Utility::new("tracking", "letter-spacing")
        .keywords(&[
            ("tighter", "var(--tracking-tighter)"),
            ("tight", "var(--tracking-tight)"),
            ("normal", "var(--tracking-normal)"),
            ("wide", "var(--tracking-wide)"),
            ("wider", "var(--tracking-wider)"),
            ("widest", "var(--tracking-widest)"),
        ])
        .grammar(Grammar::Length)
        .negatable(),
    Utility::new("indent", "text-indent")
        .keywords(&[("px", "1px")])
        .scale(Scale::Spacing)
        .grammar(Grammar::Length)
        .negatable(),
    Utility::new("decoration", "text-decoration-style").keywords(&[
        ("solid", "solid"),
        ("double", "double"),
        ("dotted", "dotted"),
        ("dashed", "dashed"),
        ("wavy", "wavy"),
    ]),
    Utility::new("decoration", "text-decoration-thickness")
        .keywords(&[("auto", "auto"), ("from-font", "from-font")])
        .scale(Scale::Pixels)
        .grammar(Grammar::Length),
    Utility::new("underline-offset", "text-underline-offset")
        .keywords(&[("auto", "auto")])
        .scale(Scale::Pixels)
        .grammar(Grammar::Length)
        .negatable(),
    Utility::fixed("underline", "text-decoration-line", &[("", "underline")]),
    Utility::fixed("overline", "text-decoration-line", &[("", "overline")]),
    Utility::fixed("line-through", "text-decoration-line", &[("", "line-through")]),
    Utility::fixed("no-underline", "text-decoration-line", &[("", "none")]),
    Utility::fixed("uppercase", "text-transform", &[("", "uppercase")]),
    Utility::fixed("lowercase", "text-transform", &[("", "lowercase")]),
    Utility::fixed("capitalize", "text-transform", &[("", "capitalize")]),
    Utility::fixed("normal-case", "text-transform", &[("", "none")]),
    Utility::fixed("italic", "font-style", &[("", "italic")]),
    Utility::fixed("not-italic", "font-style", &[("", "normal")]),
    Utility::new("whitespace", "white-space").keywords(&[
        ("normal", "normal"),
        ("nowrap", "nowrap"),
        ("pre", "pre"),
        ("pre-line", "pre-line"),
        ("pre-wrap", "pre-wrap"),
        ("break-spaces", "break-spaces"),
    ]),
    Utility::new("align", "vertical-align")
        .keywords(&[
            ("baseline", "baseline"),
            ("top", "top"),
            ("middle", "middle"),
            ("bottom", "bottom"),
            ("text-top", "text-top"),
            ("text-bottom", "text-bottom"),
            ("sub", "sub"),
            ("super", "super"),
        ])
        .grammar(Grammar::Any),
    Utility::new("list", "list-style-type")
        .keywords(&[("none", "none"), ("disc", "disc"), ("decimal", "decimal")])
        .grammar(Grammar::Any),
];

family_table!(PropertyFamily::Typography, UTILITIES);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_text_prefix() {
        assert_eq!(parse("text-sm").unwrap().property, "font-size");
        assert_eq!(parse("text-center").unwrap().property, "text-align");
        assert_eq!(parse("text-balance").unwrap().property, "text-wrap");
        assert_eq!(parse("text-ellipsis").unwrap().property, "text-overflow");
        assert_eq!(parse("text-[14px]").unwrap().css_value, "14px");
        assert!(parse("text-red-500").is_none());
    }

    #[test]
    fn font_weight_before_family() {
        assert_eq!(parse("font-bold").unwrap().css_value, "700");
        assert_eq!(parse("font-[550]").unwrap().property, "font-weight");
        assert_eq!(parse("font-[Inter]").unwrap().property, "font-family");
        assert_eq!(parse("font-mono").unwrap().property, "font-family");
    }

    #[test]
    fn indent_accepts_unitless_scale_only() {
        assert_eq!(
            parse("indent-4").unwrap().css_value,
            "calc(var(--spacing) * 4)"
        );
        assert_eq!(parse("indent-[2em]").unwrap().css_value, "2em");
        assert_eq!(
            parse("-indent-2").unwrap().css_value,
            "calc(var(--spacing) * -2)"
        );
        assert!(parse("indent-4px").is_none());
    }

    #[test]
    fn decoration_utilities() {
        assert_eq!(parse("decoration-wavy").unwrap().property, "text-decoration-style");
        assert_eq!(parse("decoration-2").unwrap().css_value, "2px");
        assert_eq!(parse("decoration-[3px]").unwrap().property, "text-decoration-thickness");
        assert!(parse("decoration-foo").is_none());
    }

    #[test]
    fn underline_prefixes() {
        assert_eq!(parse("underline").unwrap().css_value, "underline");
        assert_eq!(
            parse("underline-offset-4").unwrap().property,
            "text-underline-offset"
        );
        assert!(parse("underline-4").is_none());
    }

    #[test]
    fn standalone_keywords() {
        assert_eq!(parse("italic").unwrap().to_css(), "font-style: italic");
        assert_eq!(parse("normal-case").unwrap().css_value, "none");
        assert!(parse("italic-bold").is_none());
    }
}
