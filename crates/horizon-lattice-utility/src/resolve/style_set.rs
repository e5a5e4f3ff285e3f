//! Resolved style set.

use std::collections::{BTreeMap, HashSet};

use super::declaration::{Rejection, ResolvedDeclaration};
use crate::modifier::CascadeLayer;

/// Output of a resolution run.
///
/// Declarations are sorted ascending by precedence, so applying them in
/// order leaves every property's winner last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedStyleSet {
    declarations: Vec<ResolvedDeclaration>,
    rejected: Vec<Rejection>,
}

impl ResolvedStyleSet {
    pub(crate) fn new(mut declarations: Vec<ResolvedDeclaration>, rejected: Vec<Rejection>) -> Self {
        declarations.sort_by_key(ResolvedDeclaration::precedence);
        Self {
            declarations,
            rejected,
        }
    }

    /// All declarations, lowest precedence first.
    pub fn declarations(&self) -> &[ResolvedDeclaration] {
        &self.declarations
    }

    /// Candidates that could not be resolved, in input order.
    pub fn rejected(&self) -> &[Rejection] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedDeclaration> {
        self.declarations.iter()
    }

    /// The winning declaration for `property`.
    pub fn winner(&self, property: &str) -> Option<&ResolvedDeclaration> {
        self.winner_where(property, |_| true)
    }

    /// The winning declaration for `property` among those matching
    /// `filter`, e.g. only declarations active in a given context.
    pub fn winner_where<F>(&self, property: &str, filter: F) -> Option<&ResolvedDeclaration>
    where
        F: Fn(&ResolvedDeclaration) -> bool,
    {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.token.property == property && filter(d))
    }

    /// One winner per property, in ascending precedence.
    pub fn winners(&self) -> Vec<&ResolvedDeclaration> {
        let mut seen = HashSet::new();
        let mut winners: Vec<&ResolvedDeclaration> = self
            .declarations
            .iter()
            .rev()
            .filter(|d| seen.insert(d.property()))
            .collect();
        winners.reverse();
        winners
    }

    /// Declarations grouped by cascade layer, each group in precedence
    /// order.
    pub fn by_layer(&self) -> BTreeMap<CascadeLayer, Vec<&ResolvedDeclaration>> {
        let mut layers: BTreeMap<CascadeLayer, Vec<&ResolvedDeclaration>> = BTreeMap::new();
        for decl in &self.declarations {
            layers.entry(decl.layer).or_default().push(decl);
        }
        layers
    }
}

impl<'a> IntoIterator for &'a ResolvedStyleSet {
    type Item = &'a ResolvedDeclaration;
    type IntoIter = std::slice::Iter<'a, ResolvedDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RejectReason;
    use crate::modifier::Modifier;
    use crate::parser::parse_token;

    fn decl(candidate: &str, modifiers: &[&str], order: usize) -> ResolvedDeclaration {
        let base = candidate.rsplit(':').next().unwrap();
        ResolvedDeclaration::new(
            candidate,
            parse_token(base).unwrap(),
            Modifier::parse_chain(modifiers),
            order,
        )
    }

    fn sample() -> ResolvedStyleSet {
        ResolvedStyleSet::new(
            vec![
                decl("md:p-4", &["md"], 0),
                decl("p-2", &[], 1),
                decl("hover:m-1", &["hover"], 2),
                decl("m-2", &[], 3),
            ],
            vec![Rejection {
                raw: "nope".into(),
                source_order: 4,
                reason: RejectReason::ParseFailure,
            }],
        )
    }

    #[test]
    fn sorted_by_precedence() {
        let set = sample();
        let raws: Vec<&str> = set.iter().map(|d| d.raw.as_str()).collect();
        assert_eq!(raws, vec!["p-2", "m-2", "hover:m-1", "md:p-4"]);
        assert_eq!(set.len(), 4);
        assert_eq!(set.rejected().len(), 1);
    }

    #[test]
    fn winners_per_property() {
        let set = sample();
        assert_eq!(set.winner("padding").unwrap().raw, "md:p-4");
        assert_eq!(set.winner("margin").unwrap().raw, "hover:m-1");
        assert!(set.winner("color").is_none());

        let raws: Vec<&str> = set.winners().iter().map(|d| d.raw.as_str()).collect();
        assert_eq!(raws, vec!["hover:m-1", "md:p-4"]);
    }

    #[test]
    fn winner_where_filters_context() {
        let set = sample();
        let plain = set.winner_where("padding", |d| !d.has_modifiers()).unwrap();
        assert_eq!(plain.raw, "p-2");
    }

    #[test]
    fn grouped_by_layer() {
        let set = sample();
        let layers = set.by_layer();
        assert_eq!(layers[&CascadeLayer::Utilities].len(), 2);
        assert_eq!(layers[&CascadeLayer::States].len(), 1);
        assert_eq!(layers[&CascadeLayer::Responsive][0].raw, "md:p-4");
        assert!(!layers.contains_key(&CascadeLayer::AtRules));
    }

    #[test]
    fn empty_set() {
        let set = ResolvedStyleSet::default();
        assert!(set.is_empty());
        assert!(set.winners().is_empty());
        assert!((&set).into_iter().next().is_none());
    }
}
