//! Modifier categorization and weighting.
//!
//! A modifier's weight is its category's band base plus a within-band
//! adjustment. Adjustments never exceed [`MAX_ADJUSTMENT`], so a modifier can
//! never climb into the band above its own.

use std::sync::OnceLock;

use static_assertions::const_assert;

use super::complexity::arbitrary_variant_complexity;
use super::types::{Modifier, ModifierCategory, ModifierPriority};
use crate::error::{Error, Result};

/// Width of each category's weight band.
pub const BAND_SPAN: u32 = 100;

/// Largest within-band adjustment.
pub const MAX_ADJUSTMENT: u32 = BAND_SPAN - 1;

/// Weight of a declaration without modifiers.
pub const BASELINE_WEIGHT: u32 = 0;

/// Breakpoints used when none are configured.
pub const DEFAULT_BREAKPOINTS: [&str; 5] = ["sm", "md", "lg", "xl", "2xl"];

/// Largest breakpoint table that still fits the responsive band.
pub const MAX_BREAKPOINTS: usize = 9;

const BREAKPOINT_STEP: u32 = 10;

const_assert!(MAX_BREAKPOINTS as u32 * BREAKPOINT_STEP <= MAX_ADJUSTMENT);
const_assert!(BASELINE_WEIGHT < ModifierCategory::Unknown.base_weight());
const_assert!(bands_disjoint());

const fn bands_disjoint() -> bool {
    let order = ModifierCategory::RECOMMENDED_ORDER;
    let mut i = 1;
    while i < order.len() {
        if order[i - 1].base_weight() < order[i].base_weight() + BAND_SPAN {
            return false;
        }
        i += 1;
    }
    true
}

/// Per-state adjustments; rarer and more specific states rank higher.
const STATE_BONUS: &[(&str, u32)] = &[
    ("hover", 10),
    ("focus", 20),
    ("focus-within", 25),
    ("focus-visible", 30),
    ("active", 40),
    ("visited", 45),
    ("target", 50),
    ("odd", 52),
    ("even", 52),
    ("first", 55),
    ("last", 55),
    ("only", 58),
    ("first-of-type", 60),
    ("last-of-type", 60),
    ("only-of-type", 62),
    ("empty", 62),
    ("default", 64),
    ("enabled", 65),
    ("optional", 66),
    ("valid", 68),
    ("in-range", 68),
    ("required", 70),
    ("invalid", 72),
    ("out-of-range", 72),
    ("user-valid", 72),
    ("user-invalid", 74),
    ("placeholder-shown", 74),
    ("autofill", 76),
    ("read-only", 78),
    ("checked", 80),
    ("open", 80),
    ("indeterminate", 82),
    ("disabled", 90),
];

const PSEUDO_ELEMENTS: &[&str] = &[
    "before",
    "after",
    "placeholder",
    "file",
    "marker",
    "selection",
    "first-line",
    "first-letter",
    "backdrop",
    "details-content",
];

const AT_RULE_BONUS: &[(&str, &str, u32)] = &[
    ("[@media", "media", 10),
    ("[@supports", "supports", 20),
    ("[@container", "container", 30),
];

const GROUP_BONUS: u32 = 5;
const PEER_BONUS: u32 = 50;
const BRACKET_INNER_BONUS: u32 = 30;
const ARIA_DATA_INNER_BONUS: u32 = 25;
const ATTRIBUTE_SELECTOR_BONUS: u32 = 10;
const ATTRIBUTE_ARIA_DATA_BONUS: u32 = 20;
const DARK_BONUS: u32 = 10;
const MOTION_REDUCE_BONUS: u32 = 10;

/// Panics if a constant table leaves its band.
fn audit_tables() {
    for (state, bonus) in STATE_BONUS {
        assert!(*bonus <= MAX_ADJUSTMENT, "state bonus for '{state}' leaves its band");
    }
    for (_, name, bonus) in AT_RULE_BONUS {
        assert!(*bonus <= MAX_ADJUSTMENT, "at-rule bonus for '{name}' leaves its band");
    }
    let max_group = PEER_BONUS + BRACKET_INNER_BONUS.max(max_state_bonus() / 2);
    assert!(max_group <= MAX_ADJUSTMENT, "group/peer bonus leaves its band");
}

fn max_state_bonus() -> u32 {
    STATE_BONUS.iter().map(|(_, b)| *b).max().unwrap_or(0)
}

fn state_bonus(state: &str) -> Option<u32> {
    STATE_BONUS
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, bonus)| *bonus)
}

/// Breakpoint-aware modifier lookup tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierTables {
    breakpoints: Vec<String>,
}

impl ModifierTables {
    /// Tables with [`DEFAULT_BREAKPOINTS`].
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<ModifierTables> = OnceLock::new();
        STANDARD.get_or_init(|| {
            audit_tables();
            Self {
                breakpoints: DEFAULT_BREAKPOINTS.iter().map(|s| s.to_string()).collect(),
            }
        })
    }

    /// Tables with a custom breakpoint list, smallest first.
    pub fn new<I, S>(breakpoints: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let breakpoints: Vec<String> = breakpoints.into_iter().map(Into::into).collect();
        validate_breakpoints(&breakpoints)?;
        audit_tables();
        Ok(Self { breakpoints })
    }

    pub fn breakpoints(&self) -> &[String] {
        &self.breakpoints
    }

    /// Categorize and weigh one modifier.
    pub fn priority(&self, raw: &str) -> ModifierPriority {
        let priority = self.categorize(raw);
        tracing::trace!(
            modifier = raw,
            category = %priority.category,
            weight = priority.weight,
            "categorized modifier"
        );
        priority
    }

    pub fn modifier(&self, raw: &str) -> Modifier {
        Modifier::new(raw, self.priority(raw))
    }

    pub fn chain(&self, segments: &[&str]) -> Vec<Modifier> {
        segments.iter().map(|raw| self.modifier(raw)).collect()
    }

    fn categorize(&self, raw: &str) -> ModifierPriority {
        if raw.starts_with("[@") {
            let (subcategory, bonus) = AT_RULE_BONUS
                .iter()
                .find(|(prefix, _, _)| raw.starts_with(prefix))
                .map_or(("other", 0), |(_, name, bonus)| (*name, *bonus));
            return weighted(ModifierCategory::AtRule, bonus, Some(subcategory));
        }

        if raw.starts_with("[&") {
            let complexity = arbitrary_variant_complexity(raw);
            return weighted(ModifierCategory::ArbitraryVariant, complexity, Some("selector"));
        }

        if let Some(index) = self.breakpoints.iter().position(|bp| bp == raw) {
            let step = (index as u32 + 1) * BREAKPOINT_STEP;
            return weighted(ModifierCategory::Responsive, step, None);
        }

        match raw {
            "dark" => return weighted(ModifierCategory::DarkMode, DARK_BONUS, Some("dark")),
            "light" => return weighted(ModifierCategory::DarkMode, 0, Some("light")),
            "motion-safe" => return weighted(ModifierCategory::Motion, 0, Some("safe")),
            "motion-reduce" => {
                return weighted(ModifierCategory::Motion, MOTION_REDUCE_BONUS, Some("reduce"));
            }
            _ => {}
        }

        if let Some(inner) = raw.strip_prefix("group-") {
            return weighted(
                ModifierCategory::GroupPeer,
                GROUP_BONUS + inner_bonus(inner),
                Some("group"),
            );
        }
        if let Some(inner) = raw.strip_prefix("peer-") {
            return weighted(
                ModifierCategory::GroupPeer,
                PEER_BONUS + inner_bonus(inner),
                Some("peer"),
            );
        }

        if PSEUDO_ELEMENTS.contains(&raw) {
            return weighted(ModifierCategory::PseudoElement, 0, None);
        }

        if raw.starts_with('[') {
            return weighted(
                ModifierCategory::Attribute,
                ATTRIBUTE_SELECTOR_BONUS,
                Some("selector"),
            );
        }
        if raw.starts_with("aria-") {
            return weighted(ModifierCategory::Attribute, ATTRIBUTE_ARIA_DATA_BONUS, Some("aria"));
        }
        if raw.starts_with("data-") {
            return weighted(ModifierCategory::Attribute, ATTRIBUTE_ARIA_DATA_BONUS, Some("data"));
        }

        if let Some(bonus) = state_bonus(raw) {
            return weighted(ModifierCategory::State, bonus, None);
        }

        weighted(ModifierCategory::Unknown, 0, None)
    }
}

impl Default for ModifierTables {
    fn default() -> Self {
        Self::standard().clone()
    }
}

/// Bonus for the state wrapped by `group-`/`peer-`, ignoring a `/name`
/// suffix.
fn inner_bonus(inner: &str) -> u32 {
    let inner = match inner.rsplit_once('/') {
        Some((state, _)) if !inner.ends_with(']') => state,
        _ => inner,
    };
    if inner.starts_with('[') {
        BRACKET_INNER_BONUS
    } else if inner.starts_with("aria-") || inner.starts_with("data-") {
        ARIA_DATA_INNER_BONUS
    } else {
        state_bonus(inner).unwrap_or(0) / 2
    }
}

fn weighted(
    category: ModifierCategory,
    adjustment: u32,
    subcategory: Option<&'static str>,
) -> ModifierPriority {
    ModifierPriority {
        category,
        weight: category.base_weight() + adjustment.min(MAX_ADJUSTMENT),
        subcategory,
    }
}

pub(crate) fn validate_breakpoints(breakpoints: &[String]) -> Result<()> {
    if breakpoints.is_empty() {
        return Err(Error::invalid_breakpoints("at least one breakpoint is required"));
    }
    if breakpoints.len() > MAX_BREAKPOINTS {
        return Err(Error::invalid_breakpoints(format!(
            "{} breakpoints given, at most {} fit the responsive band",
            breakpoints.len(),
            MAX_BREAKPOINTS
        )));
    }
    for (i, bp) in breakpoints.iter().enumerate() {
        if bp.is_empty() || bp.contains([':', '[', ']', '(', ')']) || bp.contains(char::is_whitespace)
        {
            return Err(Error::invalid_breakpoints(format!("'{bp}' is not a valid breakpoint name")));
        }
        if is_reserved_modifier(bp) {
            return Err(Error::invalid_breakpoints(format!("'{bp}' is already a variant name")));
        }
        if breakpoints[..i].contains(bp) {
            return Err(Error::invalid_breakpoints(format!("'{bp}' is listed twice")));
        }
    }
    Ok(())
}

/// Names the categorizer already claims outside the responsive band.
fn is_reserved_modifier(name: &str) -> bool {
    matches!(name, "dark" | "light" | "motion-safe" | "motion-reduce")
        || ["group-", "peer-", "aria-", "data-"]
            .iter()
            .any(|prefix| name.starts_with(prefix))
        || PSEUDO_ELEMENTS.contains(&name)
        || state_bonus(name).is_some()
}

/// Priority of a modifier under the default breakpoint table.
pub fn modifier_priority(raw: &str) -> ModifierPriority {
    ModifierTables::standard().priority(raw)
}

/// Stable sort, highest weight first.
pub fn sort_modifiers_by_priority(modifiers: &[Modifier]) -> Vec<Modifier> {
    let mut sorted = modifiers.to_vec();
    sorted.sort_by(|a, b| b.weight.cmp(&a.weight));
    sorted
}

/// Whether `a` strictly outranks `b`.
pub fn should_come_first(a: &Modifier, b: &Modifier) -> bool {
    a.weight > b.weight
}

/// Group modifiers by category in [`ModifierCategory::RECOMMENDED_ORDER`],
/// highest weight first within each group.
pub fn recommended_css_order(modifiers: &[Modifier]) -> Vec<Modifier> {
    ModifierCategory::RECOMMENDED_ORDER
        .iter()
        .flat_map(|category| {
            let group: Vec<Modifier> = modifiers
                .iter()
                .filter(|m| m.category == *category)
                .cloned()
                .collect();
            sort_modifiers_by_priority(&group)
        })
        .collect()
}
