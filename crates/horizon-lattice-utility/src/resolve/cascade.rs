//! Conflict resolution between declarations.

use super::declaration::ResolvedDeclaration;
use crate::modifier::Specificity;

/// Ordering key for declarations writing the same property.
///
/// Fields compare in declaration order: higher weight wins regardless of
/// position, then higher specificity, then the later candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Precedence {
    pub weight: u32,
    pub specificity: Specificity,
    pub source_order: usize,
}

/// Whether two declarations write the same logical property.
pub fn conflicts(a: &ResolvedDeclaration, b: &ResolvedDeclaration) -> bool {
    a.token.property == b.token.property
}

/// The declaration that wins between `a` and `b`.
pub fn resolve_conflict<'a>(
    a: &'a ResolvedDeclaration,
    b: &'a ResolvedDeclaration,
) -> &'a ResolvedDeclaration {
    if b.precedence() > a.precedence() { b } else { a }
}
