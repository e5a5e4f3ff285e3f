//! Resolved declarations and rejected candidates.

use super::cascade::Precedence;
use crate::error::RejectReason;
use crate::modifier::{BASELINE_WEIGHT, CascadeLayer, Modifier, Specificity};
use crate::types::StyleToken;

/// One accepted class candidate.
///
/// Each declaration has:
/// - The parsed base token
/// - Its modifiers in written order
/// - Pre-computed weight, specificity and layer
/// - Source order for tie-breaking
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedDeclaration {
    /// The full candidate text (`hover:lg:bg-red-500`).
    pub raw: String,
    pub token: StyleToken,
    pub modifiers: Vec<Modifier>,
    /// Highest modifier weight, or [`BASELINE_WEIGHT`] without modifiers.
    pub weight: u32,
    pub specificity: Specificity,
    /// Position of the candidate in the input.
    pub source_order: usize,
    pub layer: CascadeLayer,
}

impl ResolvedDeclaration {
    /// Build a declaration, deriving weight, specificity and layer from the
    /// modifiers.
    pub fn new(
        raw: impl Into<String>,
        token: StyleToken,
        modifiers: Vec<Modifier>,
        source_order: usize,
    ) -> Self {
        let weight = modifiers
            .iter()
            .map(|m| m.weight)
            .max()
            .unwrap_or(BASELINE_WEIGHT);
        let specificity = Specificity::of_chain(&modifiers);
        let layer = CascadeLayer::of_chain(&modifiers);
        Self {
            raw: raw.into(),
            token,
            modifiers,
            weight,
            specificity,
            source_order,
            layer,
        }
    }

    /// Logical property this declaration writes.
    pub fn property(&self) -> &str {
        &self.token.property
    }

    pub fn has_modifiers(&self) -> bool {
        !self.modifiers.is_empty()
    }

    pub fn precedence(&self) -> Precedence {
        Precedence {
            weight: self.weight,
            specificity: self.specificity,
            source_order: self.source_order,
        }
    }
}

/// A candidate that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rejection {
    pub raw: String,
    pub source_order: usize,
    pub reason: RejectReason,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_token;

    #[test]
    fn unmodified_declaration_uses_baseline() {
        let token = parse_token("p-4").unwrap();
        let decl = ResolvedDeclaration::new("p-4", token, vec![], 3);
        assert_eq!(decl.weight, BASELINE_WEIGHT);
        assert_eq!(decl.specificity, Specificity::UTILITY);
        assert_eq!(decl.layer, CascadeLayer::Utilities);
        assert_eq!(decl.property(), "padding");
        assert!(!decl.has_modifiers());
    }

    #[test]
    fn weight_is_max_modifier_weight() {
        let token = parse_token("bg-red-500").unwrap();
        let modifiers = Modifier::parse_chain(&["hover", "lg"]);
        let lg = modifiers[1].weight;
        let decl = ResolvedDeclaration::new("hover:lg:bg-red-500", token, modifiers, 0);
        assert_eq!(decl.weight, lg);
        assert_eq!(decl.specificity, Specificity(0, 0, 2, 0));
        assert_eq!(decl.layer, CascadeLayer::Responsive);
    }
}
