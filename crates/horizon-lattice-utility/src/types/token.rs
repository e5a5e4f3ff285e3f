//! Style token definitions.

use std::borrow::Cow;
use std::fmt;

/// Property family a utility belongs to.
///
/// Families are the unit of registry ordering: several families share
/// prefixes (`text-` is claimed by color and typography), so the order in
/// which they are tried decides ambiguous tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PropertyFamily {
    /// Arbitrary `[property:value]` declarations.
    ArbitraryProperty,
    /// Text, background, border, decoration and other paint colors.
    Color,
    /// Font size, weight, alignment, decoration style, indent, wrapping.
    Typography,
    /// Padding, margin and gaps.
    Spacing,
    /// Width, height and their min/max constraints.
    Sizing,
    /// Display, position, flex and grid placement, overflow.
    Layout,
    /// Border and outline widths and styles, corner radii.
    Borders,
    /// Opacity, shadows, filters, transitions and transforms.
    Effects,
}

impl PropertyFamily {
    /// Every family, in declaration order.
    pub const ALL: [PropertyFamily; 8] = [
        PropertyFamily::ArbitraryProperty,
        PropertyFamily::Color,
        PropertyFamily::Typography,
        PropertyFamily::Spacing,
        PropertyFamily::Sizing,
        PropertyFamily::Layout,
        PropertyFamily::Borders,
        PropertyFamily::Effects,
    ];

    /// Stable kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            PropertyFamily::ArbitraryProperty => "arbitrary-property",
            PropertyFamily::Color => "color",
            PropertyFamily::Typography => "typography",
            PropertyFamily::Spacing => "spacing",
            PropertyFamily::Sizing => "sizing",
            PropertyFamily::Layout => "layout",
            PropertyFamily::Borders => "borders",
            PropertyFamily::Effects => "effects",
        }
    }
}

impl fmt::Display for PropertyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value slot of a token.
///
/// Arbitrary and custom-property values are separate variants, so a token can
/// never carry both provenance flags at once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "kebab-case"))]
pub enum TokenValue {
    /// A keyword from the utility's preset table or a palette entry
    /// (`center`, `sm`, `red-500`). Bare utilities such as `italic` carry an
    /// empty preset.
    Preset(String),
    /// A numeric or fractional scale step (`4`, `0.5`, `1/2`).
    Scale(String),
    /// Bracket content with underscores decoded to spaces (`#243c5a`).
    Arbitrary(String),
    /// A custom property reference, already rewritten to `var(--name)`.
    CustomProperty(String),
}

impl TokenValue {
    /// The raw text of the value.
    pub fn as_str(&self) -> &str {
        match self {
            TokenValue::Preset(s)
            | TokenValue::Scale(s)
            | TokenValue::Arbitrary(s)
            | TokenValue::CustomProperty(s) => s,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Arbitrary(s) => write!(f, "[{}]", s),
            TokenValue::Preset(s) | TokenValue::Scale(s) | TokenValue::CustomProperty(s) => {
                f.write_str(s)
            }
        }
    }
}

/// A base class token matched against one property family.
///
/// # Example
///
/// ```
/// use horizon_lattice_utility::prelude::*;
///
/// let token = parse_token("decoration-[#243c5a]").unwrap();
/// assert_eq!(token.family, PropertyFamily::Color);
/// assert_eq!(token.property, "text-decoration-color");
/// assert!(token.is_arbitrary());
/// assert_eq!(token.css_value, "#243c5a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StyleToken {
    /// Family whose parser accepted the token.
    pub family: PropertyFamily,
    /// Logical CSS property the token writes.
    pub property: Cow<'static, str>,
    /// The parsed value.
    pub value: TokenValue,
    /// The value rendered as CSS text.
    pub css_value: String,
    /// The original base token.
    pub raw: String,
    /// Whether the token carried a leading `-`.
    pub negative: bool,
}

impl StyleToken {
    /// Whether the value came from bracket syntax.
    pub fn is_arbitrary(&self) -> bool {
        matches!(self.value, TokenValue::Arbitrary(_))
    }

    /// Whether the value came from parenthesis custom-property syntax.
    pub fn is_custom_property(&self) -> bool {
        matches!(self.value, TokenValue::CustomProperty(_))
    }

    /// The preset keyword, if the value is one.
    pub fn preset(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Preset(s) => Some(s),
            _ => None,
        }
    }

    /// Render as a single CSS declaration (`property: value`).
    pub fn to_css(&self) -> String {
        format!("{}: {}", self.property, self.css_value)
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
