//! Bracket-aware modifier splitting.

/// A candidate split into its modifier chain and base token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierSplit<'a> {
    /// Modifiers in written order, without their colons.
    pub modifiers: Vec<&'a str>,
    /// The trailing base token.
    pub base: &'a str,
    /// False when brackets or parentheses did not nest; the whole candidate
    /// is then the base and no modifiers are reported.
    pub balanced: bool,
}

impl ModifierSplit<'_> {
    /// Whether the base or any modifier is empty (`hover:`, `a::b`).
    pub fn has_empty_segment(&self) -> bool {
        self.base.is_empty() || self.modifiers.iter().any(|m| m.is_empty())
    }
}

/// Split `candidate` on colons that sit outside every bracket and
/// parenthesis.
///
/// ```
/// use horizon_lattice_utility::prelude::*;
///
/// let split = split_modifiers("[&:nth-child(3n+1)]:hover:text-sm");
/// assert_eq!(split.modifiers, vec!["[&:nth-child(3n+1)]", "hover"]);
/// assert_eq!(split.base, "text-sm");
/// ```
pub fn split_modifiers(candidate: &str) -> ModifierSplit<'_> {
    let mut depth = 0i32;
    let mut start = 0;
    let mut modifiers = Vec::new();

    for (i, b) in candidate.bytes().enumerate() {
        match b {
            b'[' | b'(' => depth += 1,
            b']' | b')' => {
                depth -= 1;
                if depth < 0 {
                    break;
                }
            }
            b':' if depth == 0 => {
                modifiers.push(&candidate[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        tracing::warn!(candidate, depth, "unbalanced brackets in modifier chain");
        return ModifierSplit {
            modifiers: Vec::new(),
            base: candidate,
            balanced: false,
        };
    }

    ModifierSplit {
        modifiers,
        base: &candidate[start..],
        balanced: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_chain() {
        let split = split_modifiers("lg:hover:bg-red-500");
        assert_eq!(split.modifiers, vec!["lg", "hover"]);
        assert_eq!(split.base, "bg-red-500");
        assert!(split.balanced);
    }

    #[test]
    fn no_modifiers() {
        let split = split_modifiers("p-4");
        assert!(split.modifiers.is_empty());
        assert_eq!(split.base, "p-4");
    }

    #[test]
    fn colons_inside_brackets_stay() {
        let split = split_modifiers("[@media(min-width:640px)]:[&:hover]:p-4");
        assert_eq!(split.modifiers, vec!["[@media(min-width:640px)]", "[&:hover]"]);
        assert_eq!(split.base, "p-4");

        let split = split_modifiers("hover:[mask-type:luminance]");
        assert_eq!(split.modifiers, vec!["hover"]);
        assert_eq!(split.base, "[mask-type:luminance]");
    }

    #[test]
    fn unbalanced_fails_closed() {
        for candidate in ["[&:hover:p-4", "hover]:p-4", "a):b(:c"] {
            let split = split_modifiers(candidate);
            assert!(!split.balanced, "{candidate}");
            assert!(split.modifiers.is_empty());
            assert_eq!(split.base, candidate);
        }
    }

    #[test]
    fn empty_segments() {
        assert!(split_modifiers("hover:").has_empty_segment());
        assert!(split_modifiers("hover::p-4").has_empty_segment());
        assert!(split_modifiers(":p-4").has_empty_segment());
        assert!(!split_modifiers("hover:p-4").has_empty_segment());
    }
}
