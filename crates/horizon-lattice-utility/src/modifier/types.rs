//! Modifier type definitions.

use std::fmt;

use super::priority::ModifierTables;

/// Category of a variant modifier.
///
/// Categories are declared from highest to lowest priority. Each owns a
/// reserved weight band of [`BAND_SPAN`](super::BAND_SPAN) values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ModifierCategory {
    /// `[@media(...)]`, `[@supports(...)]`, `[@container(...)]`.
    AtRule,
    /// Arbitrary selector variants such as `[&:nth-child(3n+1)]`.
    ArbitraryVariant,
    /// Breakpoints (`sm`, `md`, `lg`, ...).
    Responsive,
    /// `dark` and `light`.
    DarkMode,
    /// `motion-safe` and `motion-reduce`.
    Motion,
    /// `group-*` and `peer-*`.
    GroupPeer,
    /// Interaction and structural states (`hover`, `checked`, ...).
    State,
    /// `before`, `after`, `placeholder`, ...
    PseudoElement,
    /// Bracketed attribute selectors and `aria-*` / `data-*` variants.
    Attribute,
    /// Anything unrecognized.
    Unknown,
}

impl ModifierCategory {
    /// Every category, highest priority first. This is also the grouping
    /// order used by [`recommended_css_order`](super::recommended_css_order).
    pub const RECOMMENDED_ORDER: [ModifierCategory; 10] = [
        ModifierCategory::AtRule,
        ModifierCategory::ArbitraryVariant,
        ModifierCategory::Responsive,
        ModifierCategory::DarkMode,
        ModifierCategory::Motion,
        ModifierCategory::GroupPeer,
        ModifierCategory::State,
        ModifierCategory::PseudoElement,
        ModifierCategory::Attribute,
        ModifierCategory::Unknown,
    ];

    /// Lower bound of the category's weight band.
    pub const fn base_weight(self) -> u32 {
        match self {
            ModifierCategory::AtRule => 1000,
            ModifierCategory::ArbitraryVariant => 900,
            ModifierCategory::Responsive => 800,
            ModifierCategory::DarkMode => 700,
            ModifierCategory::Motion => 600,
            ModifierCategory::GroupPeer => 500,
            ModifierCategory::State => 400,
            ModifierCategory::PseudoElement => 300,
            ModifierCategory::Attribute => 200,
            ModifierCategory::Unknown => 100,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModifierCategory::AtRule => "at-rule",
            ModifierCategory::ArbitraryVariant => "arbitrary-variant",
            ModifierCategory::Responsive => "responsive",
            ModifierCategory::DarkMode => "dark-mode",
            ModifierCategory::Motion => "motion",
            ModifierCategory::GroupPeer => "group-peer",
            ModifierCategory::State => "state",
            ModifierCategory::PseudoElement => "pseudo-element",
            ModifierCategory::Attribute => "attribute",
            ModifierCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ModifierCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category, weight and optional subcategory of a modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModifierPriority {
    pub category: ModifierCategory,
    /// Band base plus the within-band adjustment.
    pub weight: u32,
    /// Finer classification (`container`, `peer`, `aria`, ...).
    pub subcategory: Option<&'static str>,
}

/// A single variant modifier from a class candidate.
///
/// # Example
///
/// ```
/// use horizon_lattice_utility::prelude::*;
///
/// let hover = Modifier::parse("hover");
/// let lg = Modifier::parse("lg");
/// assert_eq!(hover.category, ModifierCategory::State);
/// assert!(should_come_first(&lg, &hover));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Modifier {
    /// The modifier text without the trailing colon.
    pub raw: String,
    pub category: ModifierCategory,
    pub weight: u32,
    pub subcategory: Option<&'static str>,
}

impl Modifier {
    /// Build a modifier from a computed priority.
    pub fn new(raw: impl Into<String>, priority: ModifierPriority) -> Self {
        Self {
            raw: raw.into(),
            category: priority.category,
            weight: priority.weight,
            subcategory: priority.subcategory,
        }
    }

    /// Categorize `raw` with the default breakpoint table.
    pub fn parse(raw: &str) -> Self {
        ModifierTables::standard().modifier(raw)
    }

    /// Categorize each segment of a chain, preserving order.
    pub fn parse_chain(segments: &[&str]) -> Vec<Self> {
        ModifierTables::standard().chain(segments)
    }

    pub fn priority(&self) -> ModifierPriority {
        ModifierPriority {
            category: self.category,
            weight: self.weight,
            subcategory: self.subcategory,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_descend_in_recommended_order() {
        let weights: Vec<u32> = ModifierCategory::RECOMMENDED_ORDER
            .iter()
            .map(|c| c.base_weight())
            .collect();
        assert!(weights.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn chain_preserves_order() {
        let chain = Modifier::parse_chain(&["hover", "lg", "before"]);
        let raws: Vec<&str> = chain.iter().map(|m| m.raw.as_str()).collect();
        assert_eq!(raws, vec!["hover", "lg", "before"]);
        assert_eq!(chain[1].category, ModifierCategory::Responsive);
    }

    #[test]
    fn priority_round_trip() {
        let m = Modifier::parse("peer-checked");
        assert_eq!(Modifier::new("peer-checked", m.priority()), m);
        assert_eq!(m.to_string(), "peer-checked");
    }
}
