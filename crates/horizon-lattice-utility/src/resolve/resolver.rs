//! Resolution pipeline.

use std::collections::HashSet;
use std::sync::OnceLock;

use super::declaration::{Rejection, ResolvedDeclaration};
use super::style_set::ResolvedStyleSet;
use crate::config::ResolverConfig;
use crate::error::{RejectReason, Result};
use crate::modifier::{ModifierTables, split_modifiers};

/// Resolves class strings into ordered declaration sets.
///
/// A resolver holds only immutable configuration and may be shared freely
/// between threads.
///
/// # Example
///
/// ```
/// use horizon_lattice_utility::prelude::*;
///
/// let resolver = Resolver::new();
/// let set = resolver.resolve("bg-blue-500 hover:lg:bg-red-500");
/// let winner = set.winner("background-color").unwrap();
/// assert_eq!(winner.raw, "hover:lg:bg-red-500");
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    config: ResolverConfig,
    tables: ModifierTables,
}

impl Resolver {
    /// A resolver with the default configuration.
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::default(),
            tables: ModifierTables::standard().clone(),
        }
    }

    /// A resolver with a validated custom configuration.
    pub fn with_config(config: ResolverConfig) -> Result<Self> {
        config.validate()?;
        let tables = ModifierTables::new(config.breakpoints.iter().cloned())?;
        Ok(Self { config, tables })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a whitespace-separated class string.
    ///
    /// Candidates that fail to resolve are recorded on the result and never
    /// stop the rest of the batch.
    pub fn resolve(&self, class_string: &str) -> ResolvedStyleSet {
        let mut declarations = Vec::new();
        let mut rejected = Vec::new();

        for (source_order, candidate) in class_string.split_whitespace().enumerate() {
            match self.resolve_candidate(candidate, source_order) {
                Ok(declaration) => declarations.push(declaration),
                Err(reason) => {
                    tracing::debug!(candidate, source_order, %reason, "rejected class candidate");
                    rejected.push(Rejection {
                        raw: candidate.to_string(),
                        source_order,
                        reason,
                    });
                }
            }
        }

        if self.config.dedupe {
            declarations = keep_last_duplicates(declarations);
        }

        ResolvedStyleSet::new(declarations, rejected)
    }

    fn resolve_candidate(
        &self,
        candidate: &str,
        source_order: usize,
    ) -> std::result::Result<ResolvedDeclaration, RejectReason> {
        let split = split_modifiers(candidate);
        if !split.balanced {
            return Err(RejectReason::UnbalancedModifierChain);
        }
        if split.has_empty_segment() {
            return Err(RejectReason::EmptySegment);
        }

        let registry = &self.config.registry;
        let token = registry
            .parse_token(split.base)
            .ok_or_else(|| registry.diagnose(split.base))?;
        let modifiers = self.tables.chain(&split.modifiers);

        Ok(ResolvedDeclaration::new(
            candidate,
            token,
            modifiers,
            source_order,
        ))
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop earlier copies of identical candidates.
fn keep_last_duplicates(declarations: Vec<ResolvedDeclaration>) -> Vec<ResolvedDeclaration> {
    let mut seen = HashSet::new();
    let mut kept: Vec<ResolvedDeclaration> = declarations
        .into_iter()
        .rev()
        .filter(|d| seen.insert(d.raw.clone()))
        .collect();
    kept.reverse();
    kept
}

/// Resolve with the default configuration.
pub fn resolve(class_string: &str) -> ResolvedStyleSet {
    static DEFAULT: OnceLock<Resolver> = OnceLock::new();
    DEFAULT.get_or_init(Resolver::new).resolve(class_string)
}
