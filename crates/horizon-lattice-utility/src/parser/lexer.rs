//! Base token lexer.
//!
//! Every property family describes its utilities as a static table of
//! [`Utility`] entries. A [`FamilyTable`] sorts those entries once so that
//! longer prefixes are tried first (`underline-offset` before `underline`,
//! `min-w` before `m`), then matches a base token against them:
//!
//! 1. Strip a leading `-` (negative flag, only for negatable utilities).
//! 2. Match the prefix: either the whole token (bare form) or `prefix-`.
//! 3. Classify the remainder as a bracket value, a custom property
//!    reference, a preset keyword, or a scale step.
//! 4. Validate it against the utility's grammar and render the CSS value.
//!
//! The first utility that accepts wins. A utility that rejects the remainder
//! simply lets the next one try.

use std::borrow::Cow;
use std::cmp::Reverse;

use super::families::color;
use crate::types::value::{
    decode_arbitrary, is_angle, is_color, is_custom_property_name, is_integer, is_length,
    is_number, is_percentage, is_spacing_step, is_time, parse_fraction, split_type_hint,
};
use crate::types::{PropertyFamily, StyleToken, TokenValue};

/// Preset keyword table: (suffix, CSS value). An empty suffix is the bare
/// utility (`rounded`, `italic`).
pub(crate) type Keywords = &'static [(&'static str, &'static str)];

/// What a utility accepts as a bare, non-keyword value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scale {
    /// Keywords only.
    None,
    /// Palette colors (`red-500`) and color keywords, with optional `/alpha`.
    Palette,
    /// Quarter-step spacing multiplier (`4`, `0.5`).
    Spacing,
    /// Spacing steps or fractions (`1/2`).
    Fraction,
    /// Plain integers.
    Integer,
    /// Integers 0-100 rendered as percentages.
    Percent,
    /// Integers rendered as pixels.
    Pixels,
    /// Integers rendered as milliseconds.
    Milliseconds,
}

/// What a utility accepts inside brackets or as a custom property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Grammar {
    /// No bracket or parenthesis values.
    None,
    Color,
    Length,
    Number,
    /// Number or percentage.
    Percent,
    Time,
    Angle,
    /// Any non-empty balanced content.
    Any,
}

impl Grammar {
    /// Structural check of an untyped bracket value.
    fn accepts(self, value: &str) -> bool {
        match self {
            Grammar::None => false,
            Grammar::Color => is_color(value),
            Grammar::Length => is_length(value),
            Grammar::Number => is_number(value),
            Grammar::Percent => is_number(value) || is_percentage(value),
            Grammar::Time => is_time(value),
            Grammar::Angle => is_angle(value),
            Grammar::Any => !value.trim().is_empty(),
        }
    }

    /// Whether an explicit type hint is compatible.
    fn accepts_hint(self, hint: &str) -> bool {
        match self {
            Grammar::None => false,
            Grammar::Color => hint == "color",
            Grammar::Length => matches!(hint, "length" | "percentage" | "line-width"),
            Grammar::Number => matches!(hint, "number" | "integer"),
            Grammar::Percent => matches!(hint, "number" | "percentage"),
            Grammar::Time => hint == "time",
            Grammar::Angle => hint == "angle",
            Grammar::Any => true,
        }
    }

    /// Bracket value check: a hint is trusted when compatible, otherwise the
    /// value's shape decides.
    fn admits(self, hint: Option<&str>, value: &str) -> bool {
        match hint {
            Some(hint) => self.accepts_hint(hint),
            None => self.accepts(value),
        }
    }
}

/// Wrapper applied to rendered values (`blur({})`, `{}deg`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Template {
    /// Applied to scale steps only.
    Scale(&'static str),
    /// Applied to scale steps, bracket values and custom properties.
    All(&'static str),
}

/// One utility: a prefix, the property it writes and the values it accepts.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Utility {
    pub(crate) prefix: &'static str,
    pub(crate) property: &'static str,
    pub(crate) keywords: Keywords,
    pub(crate) scale: Scale,
    pub(crate) grammar: Grammar,
    pub(crate) negatable: bool,
    pub(crate) template: Option<Template>,
}

impl Utility {
    pub(crate) const fn new(prefix: &'static str, property: &'static str) -> Self {
        Self {
            prefix,
            property,
            keywords: &[],
            scale: Scale::None,
            grammar: Grammar::None,
            negatable: false,
            template: None,
        }
    }

    /// A bare utility with a fixed value (`italic`, `flex`).
    pub(crate) const fn fixed(
        prefix: &'static str,
        property: &'static str,
        keywords: Keywords,
    ) -> Self {
        Self::new(prefix, property).keywords(keywords)
    }

    pub(crate) const fn keywords(mut self, keywords: Keywords) -> Self {
        self.keywords = keywords;
        self
    }

    pub(crate) const fn scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    pub(crate) const fn grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }

    pub(crate) const fn negatable(mut self) -> Self {
        self.negatable = true;
        self
    }

    pub(crate) const fn template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    /// The text after `prefix-`, or `""` for the bare form.
    fn remainder<'a>(&self, body: &'a str) -> Option<&'a str> {
        if body == self.prefix {
            return Some("");
        }
        body.strip_prefix(self.prefix)?
            .strip_prefix('-')
            .filter(|rest| !rest.is_empty())
    }

    fn keyword(&self, suffix: &str) -> Option<&'static str> {
        self.keywords
            .iter()
            .find(|(name, _)| *name == suffix)
            .map(|(_, css)| *css)
    }

    fn accept(
        &self,
        family: PropertyFamily,
        raw: &str,
        remainder: &str,
        negative: bool,
    ) -> Option<StyleToken> {
        let (remainder, alpha) = if self.scale == Scale::Palette {
            split_alpha(remainder)
        } else {
            (remainder, None)
        };

        let (value, css_value) = match RawValue::classify(remainder)? {
            RawValue::Bare(text) => match self.keyword(text) {
                Some(_) if negative => return None,
                Some(css) => (TokenValue::Preset(text.to_string()), css.to_string()),
                None => self.scale_value(text, negative)?,
            },
            RawValue::Arbitrary { hint, value } => {
                if !self.grammar.admits(hint, &value) {
                    return None;
                }
                let css = self.wrap_all(negate(&value, negative));
                (TokenValue::Arbitrary(value), css)
            }
            RawValue::Custom { hint, name } => {
                if self.grammar == Grammar::None
                    || hint.is_some_and(|h| !self.grammar.accepts_hint(h))
                {
                    return None;
                }
                let reference = format!("var({})", name);
                let css = self.wrap_all(negate(&reference, negative));
                (TokenValue::CustomProperty(reference), css)
            }
        };

        let css_value = match alpha {
            Some(alpha) => color::with_alpha(&css_value, alpha)?,
            None => css_value,
        };

        Some(StyleToken {
            family,
            property: Cow::Borrowed(self.property),
            value,
            css_value,
            raw: raw.to_string(),
            negative,
        })
    }

    fn scale_value(&self, text: &str, negative: bool) -> Option<(TokenValue, String)> {
        let sign = if negative { "-" } else { "" };
        let css = match self.scale {
            Scale::None => return None,
            Scale::Palette => {
                if negative {
                    return None;
                }
                let css = color::palette_color(text)?;
                return Some((TokenValue::Preset(text.to_string()), css));
            }
            Scale::Spacing => spacing(text, sign)?,
            Scale::Fraction => match parse_fraction(text) {
                Some((num, den)) => format!("calc({}/{} * {}100%)", num, den, sign),
                None => spacing(text, sign)?,
            },
            Scale::Integer if is_integer(text) => format!("{}{}", sign, text),
            Scale::Percent if is_integer(text) && !negative => {
                let percent: u32 = text.parse().ok()?;
                if percent > 100 {
                    return None;
                }
                format!("{}%", percent)
            }
            Scale::Pixels if is_integer(text) => format!("{}{}px", sign, text),
            Scale::Milliseconds if is_integer(text) && !negative => format!("{}ms", text),
            _ => return None,
        };
        let css = match self.template {
            Some(Template::Scale(t) | Template::All(t)) => t.replace("{}", &css),
            None => css,
        };
        Some((TokenValue::Scale(text.to_string()), css))
    }

    fn wrap_all(&self, css: String) -> String {
        match self.template {
            Some(Template::All(t)) => t.replace("{}", &css),
            _ => css,
        }
    }
}

fn spacing(text: &str, sign: &str) -> Option<String> {
    is_spacing_step(text).then(|| format!("calc(var(--spacing) * {}{})", sign, text))
}

fn negate(css: &str, negative: bool) -> String {
    if negative {
        format!("calc({} * -1)", css)
    } else {
        css.to_string()
    }
}

/// Split a trailing top-level `/alpha` off a color value.
fn split_alpha(remainder: &str) -> (&str, Option<&str>) {
    let mut depth = 0i32;
    let mut split_at = None;
    for (i, b) in remainder.bytes().enumerate() {
        match b {
            b'[' | b'(' => depth += 1,
            b']' | b')' => depth -= 1,
            b'/' if depth == 0 => split_at = Some(i),
            _ => {}
        }
    }
    match split_at {
        Some(i) if i > 0 && i + 1 < remainder.len() => {
            (&remainder[..i], Some(&remainder[i + 1..]))
        }
        _ => (remainder, None),
    }
}

/// Whether brackets and parentheses nest to zero without going negative.
pub(crate) fn is_balanced(s: &str) -> bool {
    let mut depth = 0i32;
    for b in s.bytes() {
        match b {
            b'[' | b'(' => depth += 1,
            b']' | b')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Classified remainder of a base token after its prefix.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawValue<'a> {
    /// Keyword or scale text (possibly empty).
    Bare(&'a str),
    /// `[hint:value]` with underscores decoded.
    Arbitrary { hint: Option<&'a str>, value: String },
    /// `(hint:--name)`.
    Custom { hint: Option<&'a str>, name: &'a str },
}

impl<'a> RawValue<'a> {
    pub(crate) fn classify(remainder: &'a str) -> Option<Self> {
        if let Some(inner) = remainder.strip_prefix('[') {
            let inner = inner.strip_suffix(']')?;
            if !is_balanced(inner) {
                return None;
            }
            let (hint, value) = split_type_hint(inner);
            if value.is_empty() {
                return None;
            }
            return Some(RawValue::Arbitrary {
                hint,
                value: decode_arbitrary(value),
            });
        }

        if let Some(inner) = remainder.strip_prefix('(') {
            let inner = inner.strip_suffix(')')?;
            let (hint, name) = split_type_hint(inner);
            if !is_custom_property_name(name) {
                return None;
            }
            return Some(RawValue::Custom { hint, name });
        }

        if remainder.contains(['[', ']', '(', ')']) {
            return None;
        }
        Some(RawValue::Bare(remainder))
    }

    fn is_delimited(remainder: &str) -> bool {
        remainder.starts_with('[') || remainder.starts_with('(')
    }
}

/// A family's utilities, sorted longest prefix first.
#[derive(Debug)]
pub(crate) struct FamilyTable {
    family: PropertyFamily,
    utilities: Vec<&'static Utility>,
}

impl FamilyTable {
    pub(crate) fn new(family: PropertyFamily, utilities: &'static [Utility]) -> Self {
        let mut utilities: Vec<&'static Utility> = utilities.iter().collect();
        // Stable: utilities sharing a prefix keep their declared order.
        utilities.sort_by_key(|u| Reverse(u.prefix.len()));
        Self { family, utilities }
    }

    /// Prefixes in match order.
    #[cfg(test)]
    pub(crate) fn prefixes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.utilities.iter().map(|u| u.prefix)
    }

    /// Match `raw` against this family's utilities.
    pub(crate) fn parse(&self, raw: &str) -> Option<StyleToken> {
        let (negative, body) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        for utility in &self.utilities {
            let Some(remainder) = utility.remainder(body) else {
                continue;
            };
            if negative && !utility.negatable {
                continue;
            }
            if let Some(token) = utility.accept(self.family, raw, remainder, negative) {
                return Some(token);
            }
            tracing::trace!(
                family = %self.family,
                prefix = utility.prefix,
                remainder,
                "utility declined token"
            );
        }
        None
    }

    /// Whether some utility prefix matched `raw` with a bracket or
    /// parenthesis value. Used to tell invalid arbitrary values apart from
    /// unknown utilities.
    pub(crate) fn claims_delimited(&self, raw: &str) -> bool {
        let body = raw.strip_prefix('-').unwrap_or(raw);
        self.utilities.iter().any(|utility| {
            utility
                .remainder(body)
                .is_some_and(RawValue::is_delimited)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: &[Utility] = &[
        Utility::new("m", "margin")
            .keywords(&[("auto", "auto")])
            .scale(Scale::Spacing)
            .grammar(Grammar::Length)
            .negatable(),
        Utility::new("min-w", "min-width").scale(Scale::Fraction).grammar(Grammar::Length),
        Utility::fixed("italic", "font-style", &[("", "italic")]),
        Utility::new("blur", "filter")
            .keywords(&[("", "blur(8px)")])
            .grammar(Grammar::Length)
            .template(Template::All("blur({})")),
    ];

    fn table() -> FamilyTable {
        FamilyTable::new(PropertyFamily::Spacing, SAMPLE)
    }

    #[test]
    fn longer_prefixes_first() {
        let prefixes: Vec<_> = table().prefixes().collect();
        assert_eq!(prefixes, vec!["italic", "min-w", "blur", "m"]);
    }

    #[test]
    fn scale_and_keywords() {
        let t = table();

        let token = t.parse("m-4").unwrap();
        assert_eq!(token.value, TokenValue::Scale("4".into()));
        assert_eq!(token.css_value, "calc(var(--spacing) * 4)");

        let token = t.parse("m-auto").unwrap();
        assert_eq!(token.preset(), Some("auto"));

        let token = t.parse("italic").unwrap();
        assert_eq!(token.preset(), Some(""));
        assert_eq!(token.to_css(), "font-style: italic");

        let token = t.parse("min-w-1/2").unwrap();
        assert_eq!(token.css_value, "calc(1/2 * 100%)");
    }

    #[test]
    fn negative_values() {
        let t = table();

        let token = t.parse("-m-4").unwrap();
        assert!(token.negative);
        assert_eq!(token.css_value, "calc(var(--spacing) * -4)");

        let token = t.parse("-m-[3px]").unwrap();
        assert_eq!(token.css_value, "calc(3px * -1)");

        assert!(t.parse("-m-auto").is_none());
        assert!(t.parse("-min-w-4").is_none());
    }

    #[test]
    fn bracket_and_custom_values() {
        let t = table();

        let token = t.parse("m-[calc(100%_-_1rem)]").unwrap();
        assert_eq!(token.value, TokenValue::Arbitrary("calc(100% - 1rem)".into()));

        let token = t.parse("m-(--gutter)").unwrap();
        assert_eq!(token.value, TokenValue::CustomProperty("var(--gutter)".into()));

        let token = t.parse("m-(length:--gutter)").unwrap();
        assert!(token.is_custom_property());

        assert!(t.parse("m-(color:--gutter)").is_none());
        assert!(t.parse("m-[#fff]").is_none());
        assert!(t.parse("m-[color:#fff]").is_none());
        assert!(t.parse("m-[length:var(--x)]").is_some());
    }

    #[test]
    fn templates() {
        let t = table();
        assert_eq!(t.parse("blur").unwrap().css_value, "blur(8px)");
        assert_eq!(t.parse("blur-[2px]").unwrap().css_value, "blur(2px)");
    }

    #[test]
    fn malformed_values() {
        let t = table();
        assert!(t.parse("m-4px").is_none());
        assert!(t.parse("m-[4px").is_none());
        assert!(t.parse("m-(gutter)").is_none());
        assert!(t.parse("m-[]").is_none());
        assert!(t.parse("mx-4").is_none());
        assert!(t.parse("m-").is_none());
        assert!(t.parse("blur-").is_none());
        assert!(t.parse("italic-").is_none());
        assert!(t.parse("-m-").is_none());
    }

    #[test]
    fn delimited_claims() {
        let t = table();
        assert!(t.claims_delimited("m-[#fff]"));
        assert!(!t.claims_delimited("m-foo"));
        assert!(!t.claims_delimited("p-[1px]"));
    }

    #[test]
    fn alpha_split() {
        assert_eq!(split_alpha("red-500/50"), ("red-500", Some("50")));
        assert_eq!(split_alpha("[#fff]/[0.5]"), ("[#fff]", Some("[0.5]")));
        assert_eq!(split_alpha("[rgb(0_0_0/50%)]"), ("[rgb(0_0_0/50%)]", None));
        assert_eq!(split_alpha("red-500/"), ("red-500/", None));
    }

    #[test]
    fn balance() {
        assert!(is_balanced("a[b(c)]"));
        assert!(!is_balanced("a]["));
        assert!(!is_balanced("(("));
    }
}
