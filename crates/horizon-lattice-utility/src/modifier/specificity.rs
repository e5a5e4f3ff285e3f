//! CSS-like specificity for utility declarations.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign};

use super::complexity::SelectorAnalysis;
use super::types::{Modifier, ModifierCategory};

/// Specificity as an (a, b, c, d) tuple.
///
/// - a: inline styles
/// - b: ID selectors
/// - c: classes, attributes, pseudo-classes
/// - d: elements, pseudo-elements
///
/// Compared lexicographically: (0,1,0,0) > (0,0,99,99)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Specificity(pub u32, pub u32, pub u32, pub u32);

impl Specificity {
    pub const ZERO: Self = Self(0, 0, 0, 0);

    /// A single utility class selector.
    pub const UTILITY: Self = Self(0, 0, 1, 0);

    /// What one modifier adds to the utility class selector.
    pub fn of_modifier(modifier: &Modifier) -> Self {
        match modifier.category {
            ModifierCategory::State | ModifierCategory::Attribute => Self(0, 0, 1, 0),
            // `.group:hover .x` adds the marker class and the state.
            ModifierCategory::GroupPeer => Self(0, 0, 2, 0),
            ModifierCategory::PseudoElement => Self(0, 0, 0, 1),
            ModifierCategory::ArbitraryVariant => {
                let a = SelectorAnalysis::of(&modifier.raw);
                Self(
                    0,
                    a.ids,
                    a.classes + a.attribute_groups + a.pseudo_classes,
                    a.elements + a.pseudo_elements,
                )
            }
            ModifierCategory::AtRule
            | ModifierCategory::Responsive
            | ModifierCategory::DarkMode
            | ModifierCategory::Motion
            | ModifierCategory::Unknown => Self::ZERO,
        }
    }

    /// Specificity of a utility class carrying `modifiers`.
    pub fn of_chain(modifiers: &[Modifier]) -> Self {
        modifiers
            .iter()
            .fold(Self::UTILITY, |acc, m| acc + Self::of_modifier(m))
    }

    pub fn inline(&self) -> u32 {
        self.0
    }

    pub fn ids(&self) -> u32 {
        self.1
    }

    pub fn classes(&self) -> u32 {
        self.2
    }

    pub fn elements(&self) -> u32 {
        self.3
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(
            self.0 + rhs.0,
            self.1 + rhs.1,
            self.2 + rhs.2,
            self.3 + rhs.3,
        )
    }
}

impl AddAssign for Specificity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{},{})", self.0, self.1, self.2, self.3)
    }
}

/// Specificity of a utility class with a single modifier.
///
/// ```
/// use horizon_lattice_utility::prelude::*;
///
/// assert_eq!(calculate_css_specificity("hover"), Specificity(0, 0, 2, 0));
/// assert_eq!(calculate_css_specificity("before"), Specificity(0, 0, 1, 1));
/// ```
pub fn calculate_css_specificity(modifier: &str) -> Specificity {
    Specificity::UTILITY + Specificity::of_modifier(&Modifier::parse(modifier))
}

/// Lexicographic comparison, `a` against `b`.
pub fn compare_specificity(a: &Specificity, b: &Specificity) -> Ordering {
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_modifier_specificity() {
        assert_eq!(calculate_css_specificity("hover"), Specificity(0, 0, 2, 0));
        assert_eq!(calculate_css_specificity("before"), Specificity(0, 0, 1, 1));
        assert_eq!(calculate_css_specificity("lg"), Specificity(0, 0, 1, 0));
        assert_eq!(calculate_css_specificity("dark"), Specificity(0, 0, 1, 0));
        assert_eq!(calculate_css_specificity("[@media(print)]"), Specificity::UTILITY);
        assert_eq!(calculate_css_specificity("group-hover"), Specificity(0, 0, 3, 0));
        assert_eq!(calculate_css_specificity("aria-checked"), Specificity(0, 0, 2, 0));
    }

    #[test]
    fn arbitrary_variant_specificity() {
        assert_eq!(
            calculate_css_specificity("[&[aria-checked]:hover]"),
            Specificity(0, 0, 3, 0)
        );
        assert_eq!(calculate_css_specificity("[&>li]"), Specificity(0, 0, 1, 1));
        assert_eq!(calculate_css_specificity("[&_#main]"), Specificity(0, 1, 1, 0));
    }

    #[test]
    fn chain_accumulates() {
        let chain = Modifier::parse_chain(&["lg", "hover", "before"]);
        assert_eq!(Specificity::of_chain(&chain), Specificity(0, 0, 2, 1));
        assert_eq!(Specificity::of_chain(&[]), Specificity::UTILITY);
    }

    #[test]
    fn lexicographic_comparison() {
        assert_eq!(
            compare_specificity(&Specificity(0, 1, 0, 0), &Specificity(0, 0, 99, 99)),
            Ordering::Greater
        );
        assert_eq!(
            compare_specificity(&Specificity(0, 0, 1, 0), &Specificity(0, 0, 1, 1)),
            Ordering::Less
        );
        assert_eq!(
            compare_specificity(&Specificity::UTILITY, &Specificity(0, 0, 1, 0)),
            Ordering::Equal
        );
    }

    #[test]
    fn arithmetic_and_display() {
        let mut s = Specificity::UTILITY;
        s += Specificity(0, 1, 0, 2);
        assert_eq!(s, Specificity(0, 1, 1, 2));
        assert_eq!(s.to_string(), "(0,1,1,2)");
        assert_eq!(s.ids(), 1);
        assert_eq!(s.elements(), 2);
    }
}
