//! Per-family utility grammars.
//!
//! Each family module declares a static utility table and exposes a pure
//! `parse(&str) -> Option<StyleToken>` function. The registry decides the
//! order in which families are tried.

pub(crate) mod arbitrary;
pub(crate) mod borders;
pub(crate) mod color;
pub(crate) mod effects;
pub(crate) mod layout;
pub(crate) mod sizing;
pub(crate) mod spacing;
pub(crate) mod typography;

use crate::types::{PropertyFamily, StyleToken};

/// A family's token parser.
pub type FamilyParser = fn(&str) -> Option<StyleToken>;

/// Declares the lazily sorted table and entry points for a family module.
macro_rules! family_table {
    ($family:expr, $utilities:expr) => {
        fn table() -> &'static $crate::parser::lexer::FamilyTable {
            static TABLE: std::sync::OnceLock<$crate::parser::lexer::FamilyTable> =
                std::sync::OnceLock::new();
            TABLE.get_or_init(|| $crate::parser::lexer::FamilyTable::new($family, $utilities))
        }

        /// Parse a base token against this family's utilities.
        pub fn parse(raw: &str) -> Option<$crate::types::StyleToken> {
            table().parse(raw)
        }

        pub(crate) fn claims_delimited(raw: &str) -> bool {
            table().claims_delimited(raw)
        }
    };
}

pub(crate) use family_table;

impl PropertyFamily {
    /// The parser for this family.
    pub fn parser(&self) -> FamilyParser {
        match self {
            PropertyFamily::ArbitraryProperty => arbitrary::parse,
            PropertyFamily::Color => color::parse,
            PropertyFamily::Typography => typography::parse,
            PropertyFamily::Spacing => spacing::parse,
            PropertyFamily::Sizing => sizing::parse,
            PropertyFamily::Layout => layout::parse,
            PropertyFamily::Borders => borders::parse,
            PropertyFamily::Effects => effects::parse,
        }
    }

    /// Whether one of this family's prefixes matched `raw` with a bracket or
    /// parenthesis value.
    pub(crate) fn claims_delimited(&self, raw: &str) -> bool {
        match self {
            PropertyFamily::ArbitraryProperty => arbitrary::claims_delimited(raw),
            PropertyFamily::Color => color::claims_delimited(raw),
            PropertyFamily::Typography => typography::claims_delimited(raw),
            PropertyFamily::Spacing => spacing::claims_delimited(raw),
            PropertyFamily::Sizing => sizing::claims_delimited(raw),
            PropertyFamily::Layout => layout::claims_delimited(raw),
            PropertyFamily::Borders => borders::claims_delimited(raw),
            PropertyFamily::Effects => effects::claims_delimited(raw),
        }
    }
}
