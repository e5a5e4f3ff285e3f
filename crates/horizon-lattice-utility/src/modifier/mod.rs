//! Variant modifiers: splitting, categorization, weights and specificity.

mod complexity;
mod layer;
mod priority;
mod specificity;
mod split;
mod types;

pub use complexity::{SelectorAnalysis, arbitrary_variant_complexity};
pub use layer::{CascadeLayer, cascade_layer};
pub use priority::{
    BAND_SPAN, BASELINE_WEIGHT, DEFAULT_BREAKPOINTS, MAX_ADJUSTMENT, MAX_BREAKPOINTS,
    ModifierTables, modifier_priority, recommended_css_order, should_come_first,
    sort_modifiers_by_priority,
};
pub(crate) use priority::validate_breakpoints;
pub use specificity::{Specificity, calculate_css_specificity, compare_specificity};
pub use split::{ModifierSplit, split_modifiers};
pub use types::{Modifier, ModifierCategory, ModifierPriority};
