//! Resolver configuration.

use crate::error::Result;
use crate::modifier::{DEFAULT_BREAKPOINTS, validate_breakpoints};
use crate::parser::FamilyRegistry;

/// Configuration for a [`Resolver`](crate::Resolver).
///
/// # Example
///
/// ```
/// use horizon_lattice_utility::prelude::*;
///
/// let config = ResolverConfig::default()
///     .with_breakpoints(["phone", "tablet", "desktop"])
///     .with_dedupe(false);
/// assert!(config.validate().is_ok());
/// let resolver = Resolver::with_config(config).unwrap();
/// assert!(!resolver.config().dedupe);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverConfig {
    /// Property family order.
    pub registry: FamilyRegistry,
    /// Responsive breakpoints, smallest first.
    pub breakpoints: Vec<String>,
    /// Drop earlier copies of identical candidates.
    pub dedupe: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            registry: FamilyRegistry::v1(),
            breakpoints: DEFAULT_BREAKPOINTS.iter().map(|s| s.to_string()).collect(),
            dedupe: true,
        }
    }
}

impl ResolverConfig {
    pub fn with_registry(mut self, registry: FamilyRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_breakpoints<I, S>(mut self, breakpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breakpoints = breakpoints.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    /// Check the registry and the breakpoint table.
    pub fn validate(&self) -> Result<()> {
        self.registry.validate()?;
        validate_breakpoints(&self.breakpoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::parser::REGISTRY_VERSION;

    #[test]
    fn default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.registry.version(), REGISTRY_VERSION);
        assert_eq!(config.breakpoints, vec!["sm", "md", "lg", "xl", "2xl"]);
        assert!(config.dedupe);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation_errors() {
        let config = ResolverConfig::default().with_breakpoints(["sm", "md", "sm"]);
        assert!(matches!(config.validate(), Err(Error::InvalidBreakpoints { .. })));

        let many: Vec<String> = (0..12).map(|i| format!("w{i}")).collect();
        let config = ResolverConfig::default().with_breakpoints(many);
        assert!(config.validate().is_err());
    }
}
