//! Utility-class style resolution for Horizon Lattice.
//!
//! This crate turns Tailwind-like class strings into ordered style
//! declarations, featuring:
//!
//! - **Token lexing**: Per-family grammars for colors, typography, spacing,
//!   sizing, layout, borders, effects and arbitrary properties
//! - **Variants**: Bracket-aware splitting of `hover:lg:[&>li]:` chains
//! - **Priority**: Category weight bands, CSS-like specificity and cascade layers
//! - **Resolution**: Deterministic conflict handling with rejection diagnostics
//!
//! # Example
//!
//! ```
//! use horizon_lattice_utility::prelude::*;
//!
//! let set = resolve("hover:lg:bg-red-500 bg-blue-500 p-4 decoration-foo");
//!
//! // The modified background wins over the plain one.
//! let bg = set.winner("background-color").unwrap();
//! assert_eq!(bg.token.css_value, "var(--color-red-500)");
//!
//! // Unknown utilities are reported, not fatal.
//! assert_eq!(set.rejected()[0].raw, "decoration-foo");
//! assert_eq!(set.rejected()[0].reason, RejectReason::ParseFailure);
//! ```

pub mod config;
pub mod modifier;
pub mod parser;
pub mod resolve;
pub mod types;

mod error;

pub use config::ResolverConfig;
pub use error::{Error, RejectReason, Result};
pub use resolve::{ResolvedStyleSet, Resolver, resolve};

static_assertions::assert_impl_all!(Resolver: Send, Sync);
static_assertions::assert_impl_all!(ResolvedStyleSet: Send, Sync);

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::ResolverConfig;
    pub use crate::error::{Error, RejectReason, Result};
    pub use crate::modifier::{
        CascadeLayer, Modifier, ModifierCategory, ModifierPriority, ModifierSplit, Specificity,
        calculate_css_specificity, cascade_layer, compare_specificity, modifier_priority,
        recommended_css_order, should_come_first, sort_modifiers_by_priority, split_modifiers,
    };
    pub use crate::parser::{FamilyRegistry, parse_token};
    pub use crate::resolve::{
        Precedence, Rejection, ResolvedDeclaration, ResolvedStyleSet, Resolver, resolve,
    };
    pub use crate::types::{PropertyFamily, StyleToken, TokenValue};
}
