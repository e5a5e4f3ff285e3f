//! Error types for utility-class resolution.
//!
//! Two kinds of failure exist. [`Error`] covers misconfiguration and is
//! returned from fallible constructors. [`RejectReason`] describes why a single
//! class candidate was dropped during resolution; it is recorded on the
//! resulting style set and never aborts a batch.

use crate::types::PropertyFamily;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a resolver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The family registry has no entries.
    #[error("Family registry v{version} contains no property families")]
    EmptyRegistry { version: u32 },

    /// A family was listed twice in a registry.
    #[error("Property family '{family}' appears more than once in registry v{version}")]
    DuplicateFamily { family: PropertyFamily, version: u32 },

    /// The responsive breakpoint table cannot be placed inside its band.
    #[error("Invalid breakpoint table: {message}")]
    InvalidBreakpoints { message: String },
}

impl Error {
    /// Create a breakpoint table error.
    pub fn invalid_breakpoints(message: impl Into<String>) -> Self {
        Self::InvalidBreakpoints {
            message: message.into(),
        }
    }
}

/// Why a class candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RejectReason {
    /// No property family accepted the base token.
    #[error("no property family accepts the base token")]
    ParseFailure,

    /// A utility prefix matched but its bracket or parenthesis value did not
    /// fit the family's value grammar.
    #[error("arbitrary value does not fit the property grammar")]
    InvalidArbitraryValue,

    /// Bracket depth never returned to zero while splitting modifiers.
    #[error("unbalanced brackets in modifier chain")]
    UnbalancedModifierChain,

    /// A modifier or the base token was empty (`hover:` or `a::b`).
    #[error("empty modifier or base segment")]
    EmptySegment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = Error::DuplicateFamily {
            family: PropertyFamily::Color,
            version: 1,
        };
        assert_eq!(
            err.to_string(),
            "Property family 'color' appears more than once in registry v1"
        );

        let err = Error::invalid_breakpoints("empty");
        assert_eq!(err.to_string(), "Invalid breakpoint table: empty");
    }

    #[test]
    fn reject_reason_display() {
        assert_eq!(
            RejectReason::UnbalancedModifierChain.to_string(),
            "unbalanced brackets in modifier chain"
        );
    }
}
