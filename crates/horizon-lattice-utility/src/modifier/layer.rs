//! Cascade layers for emission grouping.

use std::fmt;

use super::types::{Modifier, ModifierCategory};

/// Named output layer, ordered from first emitted to last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CascadeLayer {
    Utilities,
    States,
    Responsive,
    Arbitrary,
    AtRules,
}

impl CascadeLayer {
    /// Every layer in emission order.
    pub const ALL: [CascadeLayer; 5] = [
        CascadeLayer::Utilities,
        CascadeLayer::States,
        CascadeLayer::Responsive,
        CascadeLayer::Arbitrary,
        CascadeLayer::AtRules,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CascadeLayer::Utilities => "utilities",
            CascadeLayer::States => "states",
            CascadeLayer::Responsive => "responsive",
            CascadeLayer::Arbitrary => "arbitrary",
            CascadeLayer::AtRules => "at-rules",
        }
    }

    /// The outermost layer any of `modifiers` maps to.
    pub fn of_chain(modifiers: &[Modifier]) -> Self {
        modifiers
            .iter()
            .map(|m| cascade_layer(m.category))
            .max()
            .unwrap_or(CascadeLayer::Utilities)
    }
}

impl fmt::Display for CascadeLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a modifier category to its output layer.
pub fn cascade_layer(category: ModifierCategory) -> CascadeLayer {
    match category {
        ModifierCategory::AtRule => CascadeLayer::AtRules,
        ModifierCategory::ArbitraryVariant => CascadeLayer::Arbitrary,
        ModifierCategory::Responsive => CascadeLayer::Responsive,
        ModifierCategory::DarkMode
        | ModifierCategory::Motion
        | ModifierCategory::GroupPeer
        | ModifierCategory::State
        | ModifierCategory::PseudoElement
        | ModifierCategory::Attribute => CascadeLayer::States,
        ModifierCategory::Unknown => CascadeLayer::Utilities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_layers() {
        assert_eq!(cascade_layer(ModifierCategory::AtRule), CascadeLayer::AtRules);
        assert_eq!(cascade_layer(ModifierCategory::ArbitraryVariant), CascadeLayer::Arbitrary);
        assert_eq!(cascade_layer(ModifierCategory::Responsive), CascadeLayer::Responsive);
        assert_eq!(cascade_layer(ModifierCategory::PseudoElement), CascadeLayer::States);
        assert_eq!(cascade_layer(ModifierCategory::Unknown), CascadeLayer::Utilities);
    }

    #[test]
    fn chain_takes_outermost_layer() {
        let chain = Modifier::parse_chain(&["hover", "md"]);
        assert_eq!(CascadeLayer::of_chain(&chain), CascadeLayer::Responsive);
        assert_eq!(CascadeLayer::of_chain(&[]), CascadeLayer::Utilities);
        assert_eq!(CascadeLayer::AtRules.to_string(), "at-rules");
    }
}
