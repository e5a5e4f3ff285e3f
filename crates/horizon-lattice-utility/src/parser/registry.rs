//! Ordered property-family registry.
//!
//! Several families share prefixes, so the order in which they are tried is
//! part of the grammar. The order is explicit versioned data rather than
//! something discovered at runtime.

use std::sync::OnceLock;

use crate::error::{Error, RejectReason, Result};
use crate::types::{PropertyFamily, StyleToken};

/// Version of the built-in family order.
pub const REGISTRY_VERSION: u32 = 1;

/// An ordered list of property families.
///
/// # Example
///
/// ```
/// use horizon_lattice_utility::prelude::*;
///
/// let registry = FamilyRegistry::v1();
/// let token = registry.parse_token("text-sm").unwrap();
/// assert_eq!(token.family, PropertyFamily::Typography);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FamilyRegistry {
    version: u32,
    families: Vec<PropertyFamily>,
}

impl FamilyRegistry {
    /// The built-in order: arbitrary properties first, then color before
    /// typography so `text-red-500` is a color, then the rest.
    pub fn v1() -> Self {
        Self {
            version: REGISTRY_VERSION,
            families: vec![
                PropertyFamily::ArbitraryProperty,
                PropertyFamily::Color,
                PropertyFamily::Typography,
                PropertyFamily::Spacing,
                PropertyFamily::Sizing,
                PropertyFamily::Layout,
                PropertyFamily::Borders,
                PropertyFamily::Effects,
            ],
        }
    }

    /// A custom order. Families may be omitted but not repeated.
    pub fn custom(version: u32, families: Vec<PropertyFamily>) -> Result<Self> {
        let registry = Self { version, families };
        registry.validate()?;
        Ok(registry)
    }

    /// Check that the registry is non-empty and has no duplicates.
    pub fn validate(&self) -> Result<()> {
        if self.families.is_empty() {
            return Err(Error::EmptyRegistry {
                version: self.version,
            });
        }
        for (i, family) in self.families.iter().enumerate() {
            if self.families[..i].contains(family) {
                return Err(Error::DuplicateFamily {
                    family: *family,
                    version: self.version,
                });
            }
        }
        Ok(())
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn families(&self) -> &[PropertyFamily] {
        &self.families
    }

    /// Try each family in order; the first that accepts wins.
    pub fn parse_token(&self, raw: &str) -> Option<StyleToken> {
        self.families.iter().find_map(|family| {
            let token = family.parser()(raw);
            if token.is_none() {
                tracing::trace!(family = %family, raw, "family fell through");
            }
            token
        })
    }

    /// Classify why `raw` was not accepted.
    pub fn diagnose(&self, raw: &str) -> RejectReason {
        if self.families.iter().any(|family| family.claims_delimited(raw)) {
            RejectReason::InvalidArbitraryValue
        } else {
            RejectReason::ParseFailure
        }
    }
}

impl Default for FamilyRegistry {
    fn default() -> Self {
        Self::v1()
    }
}

/// Parse a base token with the built-in registry.
pub fn parse_token(raw: &str) -> Option<StyleToken> {
    static DEFAULT: OnceLock<FamilyRegistry> = OnceLock::new();
    DEFAULT.get_or_init(FamilyRegistry::v1).parse_token(raw)
}
