//! Value grammar checks.
//!
//! Bracket values are handed to the `cssparser` tokenizer and judged by the
//! shape of what comes out: a single dimension with a length unit is a length,
//! a hash with 3/4/6/8 hex digits is a color, and so on. Scale steps
//! (`4`, `0.5`, `1/2`) are plain ASCII and checked by hand.

use cssparser::{Parser, ParserInput, Token};

/// Shape of a bracket value as seen by the CSS tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ValueShape {
    /// Unit-less number.
    Number { zero: bool },
    /// `50%`.
    Percentage,
    /// Dimension with a length unit.
    Length,
    /// Dimension in `s` or `ms`.
    Time,
    /// Dimension in `deg`, `rad`, `grad` or `turn`.
    Angle,
    /// Any other dimension (`1fr`, `2x`).
    Dimension,
    /// Hash token with a valid hex color length.
    HexColor,
    /// A bare identifier (lowercased).
    Ident(String),
    /// A function call (lowercased name, without the parenthesis).
    Function(String),
    /// More than one component (`0 0 10px black`).
    Sequence,
    /// Anything else (strings, delimiters, bad hashes).
    Other,
}

const LENGTH_UNITS: &[&str] = &[
    "px", "em", "rem", "ex", "ch", "cap", "ic", "lh", "rlh", "vw", "vh", "vi", "vb", "vmin",
    "vmax", "svw", "svh", "lvw", "lvh", "dvw", "dvh", "cqw", "cqh", "cqi", "cqb", "cqmin",
    "cqmax", "cm", "mm", "q", "in", "pt", "pc",
];

const MATH_FUNCTIONS: &[&str] = &[
    "calc", "min", "max", "clamp", "round", "mod", "rem", "abs", "sign", "var", "env",
];

const COLOR_FUNCTIONS: &[&str] = &[
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color",
    "color-mix", "light-dark", "var",
];

const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke",
    "yellow", "yellowgreen", "transparent", "currentcolor",
];

/// Type hints accepted before a bracket or parenthesis value
/// (`[length:2px]`, `(color:--brand)`).
const TYPE_HINTS: &[&str] = &[
    "any", "color", "length", "percentage", "number", "integer", "url", "image", "angle",
    "time", "position", "family-name", "absolute-size", "relative-size", "line-width",
    "bg-size", "shadow", "vector",
];

impl ValueShape {
    fn from_token(token: &Token<'_>) -> Self {
        match token {
            Token::Number { value, .. } => ValueShape::Number { zero: *value == 0.0 },
            Token::Percentage { .. } => ValueShape::Percentage,
            Token::Dimension { unit, .. } => {
                let unit = unit.to_ascii_lowercase();
                if LENGTH_UNITS.contains(&unit.as_str()) {
                    ValueShape::Length
                } else if unit == "s" || unit == "ms" {
                    ValueShape::Time
                } else if matches!(unit.as_str(), "deg" | "rad" | "grad" | "turn") {
                    ValueShape::Angle
                } else {
                    ValueShape::Dimension
                }
            }
            Token::Hash(hex) | Token::IDHash(hex) => {
                let valid = matches!(hex.len(), 3 | 4 | 6 | 8)
                    && hex.chars().all(|c| c.is_ascii_hexdigit());
                if valid { ValueShape::HexColor } else { ValueShape::Other }
            }
            Token::Ident(name) => ValueShape::Ident(name.to_ascii_lowercase()),
            Token::Function(name) => ValueShape::Function(name.to_ascii_lowercase()),
            _ => ValueShape::Other,
        }
    }

    fn is_math(&self) -> bool {
        matches!(self, ValueShape::Function(name) if MATH_FUNCTIONS.contains(&name.as_str()))
    }
}

/// Tokenize `value` and report its shape, or `None` if it is empty.
pub(crate) fn shape_of(value: &str) -> Option<ValueShape> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);

    let shape = match parser.next() {
        Ok(token) => ValueShape::from_token(token),
        Err(_) => return None,
    };

    if parser.is_exhausted() {
        Some(shape)
    } else {
        Some(ValueShape::Sequence)
    }
}

/// Hex, named, or functional color.
pub(crate) fn is_color(value: &str) -> bool {
    match shape_of(value) {
        Some(ValueShape::HexColor) => true,
        Some(ValueShape::Ident(name)) => NAMED_COLORS.contains(&name.as_str()),
        Some(ValueShape::Function(name)) => COLOR_FUNCTIONS.contains(&name.as_str()),
        _ => false,
    }
}

/// Length, percentage, unit-less zero, or a math function.
pub(crate) fn is_length(value: &str) -> bool {
    match shape_of(value) {
        Some(ValueShape::Length | ValueShape::Percentage | ValueShape::Number { zero: true }) => {
            true
        }
        Some(shape) => shape.is_math(),
        None => false,
    }
}

/// Unit-less number or a math function.
pub(crate) fn is_number(value: &str) -> bool {
    match shape_of(value) {
        Some(ValueShape::Number { .. }) => true,
        Some(shape) => shape.is_math(),
        None => false,
    }
}

/// Percentage or a math function.
pub(crate) fn is_percentage(value: &str) -> bool {
    match shape_of(value) {
        Some(ValueShape::Percentage) => true,
        Some(shape) => shape.is_math(),
        None => false,
    }
}

/// Time dimension or a math function.
pub(crate) fn is_time(value: &str) -> bool {
    match shape_of(value) {
        Some(ValueShape::Time) => true,
        Some(shape) => shape.is_math(),
        None => false,
    }
}

/// Angle dimension, unit-less zero, or a math function.
pub(crate) fn is_angle(value: &str) -> bool {
    match shape_of(value) {
        Some(ValueShape::Angle | ValueShape::Number { zero: true }) => true,
        Some(shape) => shape.is_math(),
        None => false,
    }
}

/// Split a leading type hint off a bracket or parenthesis value.
pub(crate) fn split_type_hint(content: &str) -> (Option<&str>, &str) {
    if let Some((hint, rest)) = content.split_once(':')
        && TYPE_HINTS.contains(&hint)
    {
        return (Some(hint), rest);
    }
    (None, content)
}

/// Decode bracket content: `_` becomes a space, `\_` stays an underscore.
pub(crate) fn decode_arbitrary(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'_') => {
                out.push('_');
                chars.next();
            }
            '_' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// `--name` with at least one name character.
pub(crate) fn is_custom_property_name(name: &str) -> bool {
    name.strip_prefix("--").is_some_and(|rest| {
        !rest.is_empty()
            && rest
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    })
}

/// Non-empty run of ASCII digits.
pub(crate) fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Unit-less spacing step: an integer or a decimal in quarter steps
/// (`4`, `0.5`, `2.25`).
pub(crate) fn is_spacing_step(s: &str) -> bool {
    let (whole, frac) = match s.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (s, None),
    };
    if !is_integer(whole) || frac.is_some_and(|f| !is_integer(f)) {
        return false;
    }
    s.parse::<f64>().is_ok_and(|v| (v * 4.0).fract() == 0.0)
}

/// `a/b` with a non-zero denominator.
pub(crate) fn parse_fraction(s: &str) -> Option<(u32, u32)> {
    let (num, den) = s.split_once('/')?;
    if !is_integer(num) || !is_integer(den) {
        return None;
    }
    let num = num.parse().ok()?;
    let den: u32 = den.parse().ok()?;
    (den > 0).then_some((num, den))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_shapes() {
        assert!(is_color("#243c5a"));
        assert!(is_color("#fff"));
        assert!(is_color("rgb(0 0 0 / 50%)"));
        assert!(is_color("oklch(0.7 0.1 200)"));
        assert!(is_color("rebeccapurple"));
        assert!(is_color("var(--brand)"));
        assert!(!is_color("#ggg"));
        assert!(!is_color("14px"));
        assert!(!is_color("foo"));
        assert!(!is_color("red blue"));
    }

    #[test]
    fn length_shapes() {
        assert!(is_length("14px"));
        assert!(is_length("1.5rem"));
        assert!(is_length("50%"));
        assert!(is_length("0"));
        assert!(is_length("calc(100% - 2rem)"));
        assert!(!is_length("12"));
        assert!(!is_length("#fff"));
        assert!(!is_length("2s"));
    }

    #[test]
    fn other_shapes() {
        assert!(is_number("1.5"));
        assert!(is_percentage("40%"));
        assert!(is_time("150ms"));
        assert!(is_angle("45deg"));
        assert_eq!(shape_of("0 0 10px black"), Some(ValueShape::Sequence));
        assert_eq!(shape_of(""), None);
    }

    #[test]
    fn type_hints() {
        assert_eq!(split_type_hint("length:2px"), (Some("length"), "2px"));
        assert_eq!(split_type_hint("color:var(--x)"), (Some("color"), "var(--x)"));
        assert_eq!(split_type_hint("url(http://x)"), (None, "url(http://x)"));
    }

    #[test]
    fn arbitrary_decoding() {
        assert_eq!(decode_arbitrary("0_0_10px_black"), "0 0 10px black");
        assert_eq!(decode_arbitrary(r"a\_b"), "a_b");
    }

    #[test]
    fn scale_steps() {
        assert!(is_spacing_step("4"));
        assert!(is_spacing_step("0.5"));
        assert!(is_spacing_step("2.25"));
        assert!(!is_spacing_step("0.3"));
        assert!(!is_spacing_step("4px"));
        assert!(!is_spacing_step("1."));
        assert!(!is_spacing_step(""));

        assert_eq!(parse_fraction("1/2"), Some((1, 2)));
        assert_eq!(parse_fraction("1/0"), None);
        assert_eq!(parse_fraction("a/2"), None);
    }

    #[test]
    fn custom_property_names() {
        assert!(is_custom_property_name("--my-color"));
        assert!(!is_custom_property_name("--"));
        assert!(!is_custom_property_name("my-color"));
    }
}
