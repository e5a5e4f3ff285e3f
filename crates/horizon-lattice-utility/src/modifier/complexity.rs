//! Arbitrary variant selector analysis.
//!
//! Arbitrary variants (`[&:nth-child(3n+1)]`) are ranked inside their band by
//! a complexity score and contribute selector specificity. Both come from a
//! single scan over the selector text that ignores anything nested inside
//! function arguments or attribute brackets.

/// Component counts of an arbitrary variant selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorAnalysis {
    pub pseudo_classes: u32,
    pub pseudo_elements: u32,
    /// Top-level `[...]` groups.
    pub attribute_groups: u32,
    /// Whether a `>`, `+` or `~` appears outside parentheses and brackets.
    pub has_combinator: bool,
    /// Top-level `name(...)` calls.
    pub function_calls: u32,
    /// Parts separated by top-level combinators.
    pub segments: u32,
    pub ids: u32,
    pub classes: u32,
    pub elements: u32,
}

impl SelectorAnalysis {
    /// Analyze a selector, with or without its surrounding brackets.
    pub fn of(selector: &str) -> Self {
        let selector = selector
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or(selector);
        let chars: Vec<char> = selector.chars().collect();

        let mut analysis = Self {
            segments: 1,
            ..Self::default()
        };
        let mut parens = 0u32;
        let mut brackets = 0u32;
        let mut compound_start = true;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            if brackets > 0 {
                match c {
                    '[' => brackets += 1,
                    ']' => brackets -= 1,
                    _ => {}
                }
                i += 1;
                continue;
            }
            if parens > 0 {
                match c {
                    '(' => parens += 1,
                    ')' => parens -= 1,
                    _ => {}
                }
                i += 1;
                continue;
            }

            match c {
                '[' => {
                    analysis.attribute_groups += 1;
                    brackets += 1;
                    compound_start = false;
                }
                '(' => {
                    analysis.function_calls += 1;
                    parens += 1;
                }
                ':' if chars.get(i + 1) == Some(&':') => {
                    analysis.pseudo_elements += 1;
                    compound_start = false;
                    i += 1;
                }
                ':' => {
                    analysis.pseudo_classes += 1;
                    compound_start = false;
                }
                '>' | '+' | '~' => {
                    analysis.has_combinator = true;
                    analysis.segments += 1;
                    compound_start = true;
                }
                '#' => {
                    analysis.ids += 1;
                    compound_start = false;
                }
                '.' => {
                    analysis.classes += 1;
                    compound_start = false;
                }
                '_' | ' ' => compound_start = true,
                c if compound_start && c.is_ascii_alphabetic() => {
                    analysis.elements += 1;
                    compound_start = false;
                }
                '&' | '*' => compound_start = false,
                _ => {}
            }

            // Skip the rest of an identifier so `nth-child` is not read as
            // an element or a second token.
            if matches!(c, ':' | '#' | '.') || c.is_ascii_alphabetic() {
                while chars
                    .get(i + 1)
                    .is_some_and(|n| n.is_ascii_alphanumeric() || *n == '-')
                {
                    i += 1;
                }
            }
            i += 1;
        }

        analysis
    }

    /// Weighted complexity score used inside the arbitrary variant band.
    pub fn complexity(&self) -> u32 {
        let mut score = 10 * (self.pseudo_classes + self.pseudo_elements)
            + 20 * self.attribute_groups
            + 15 * self.function_calls;
        if self.has_combinator {
            score += 8;
        }
        if self.segments > 1 {
            score += 3 * self.segments;
        }
        if self.pseudo_classes > 1 || self.attribute_groups > 1 {
            score += 5;
        }
        score
    }
}

/// Complexity score of an arbitrary variant.
pub fn arbitrary_variant_complexity(selector: &str) -> u32 {
    SelectorAnalysis::of(selector).complexity()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scores() {
        assert_eq!(arbitrary_variant_complexity("[&[aria-checked]:hover]"), 30);
        assert_eq!(arbitrary_variant_complexity("[&:nth-child(3n+1)]"), 25);
        assert_eq!(arbitrary_variant_complexity("[&>li]"), 14);
    }

    #[test]
    fn nested_combinators_ignored() {
        let a = SelectorAnalysis::of("[&:nth-child(2n+1)]");
        assert!(!a.has_combinator);
        assert_eq!(a.segments, 1);

        let a = SelectorAnalysis::of("[&[class~=x]]");
        assert!(!a.has_combinator);
        assert_eq!(a.attribute_groups, 1);
    }

    #[test]
    fn combinator_counted_once() {
        let a = SelectorAnalysis::of("[&>ul>li]");
        assert!(a.has_combinator);
        assert_eq!(a.segments, 3);
        assert_eq!(a.complexity(), 8 + 9);
    }

    #[test]
    fn pseudo_elements_and_bonus() {
        let a = SelectorAnalysis::of("[&::before]");
        assert_eq!(a.pseudo_elements, 1);
        assert_eq!(a.pseudo_classes, 0);

        let a = SelectorAnalysis::of("[&:hover:focus]");
        assert_eq!(a.pseudo_classes, 2);
        assert_eq!(a.complexity(), 25);
    }

    #[test]
    fn selector_components() {
        let a = SelectorAnalysis::of("[.sidebar_&]");
        assert_eq!(a.classes, 1);
        assert_eq!(a.elements, 0);

        let a = SelectorAnalysis::of("[&>li.active#main]");
        assert_eq!(a.elements, 1);
        assert_eq!(a.classes, 1);
        assert_eq!(a.ids, 1);
    }
}
