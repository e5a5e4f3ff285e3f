//! Padding, margin and gap utilities.

use super::family_table;
use crate::parser::lexer::{Grammar, Scale, Utility};
use crate::types::PropertyFamily;

const fn padding(prefix: &'static str, property: &'static str) -> Utility {
    Utility::new(prefix, property)
        .keywords(&[("px", "1px")])
        .scale(Scale::Spacing)
        .grammar(Grammar::Length)
}

const fn margin(prefix: &'static str, property: &'static str) -> Utility {
    Utility::new(prefix, property)
        .keywords(&[("px", "1px"), ("auto", "auto")])
        .scale(Scale::Spacing)
        .grammar(Grammar::Length)
        .negatable()
}

static UTILITIES: &[Utility] = &[
    padding("p", "padding"),
    padding("px", "padding-inline"),
    padding("py", "padding-block"),
    padding("ps", "padding-inline-start"),
    padding("pe", "padding-inline-end"),
    padding("pt", "padding-top"),
    padding("pr", "padding-right"),
    padding("pb", "padding-bottom"),
    padding("pl", "padding-left"),
    margin("m", "margin"),
    margin("mx", "margin-inline"),
    margin("my", "margin-block"),
    margin("ms", "margin-inline-start"),
    margin("me", "margin-inline-end"),
    margin("mt", "margin-top"),
    margin("mr", "margin-right"),
    margin("mb", "margin-bottom"),
    margin("ml", "margin-left"),
    padding("gap", "gap"),
    padding("gap-x", "column-gap"),
    padding("gap-y", "row-gap"),
];

family_table!(PropertyFamily::Spacing, UTILITIES);
