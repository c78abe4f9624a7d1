//! Word hooks: the tiles that extend a word at either end, and whether the
//! word still stands with its first or last tile taken off.

use crate::spanish_char::{normalize_word, to_display, SPANISH_ALPHABET};
use crate::word_list::WordList;

/// Hook information for one word. Letters are in display form (`CH`, `LL`,
/// `RR`) and in tile order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hooks {
    /// Tiles that can go in front of the word.
    pub left_external: Vec<String>,
    /// Tiles that can go after the word.
    pub right_external: Vec<String>,
    /// The word without its first tile is a word.
    pub left_internal: bool,
    /// The word without its last tile is a word.
    pub right_internal: bool,
}

impl Hooks {
    #[must_use]
    pub fn has_external_hooks(&self) -> bool {
        !self.left_external.is_empty() || !self.right_external.is_empty()
    }

    #[must_use]
    pub fn has_internal_hooks(&self) -> bool {
        self.left_internal || self.right_internal
    }
}

/// Hooks of `word` (written form, any case) against `words`.
///
/// ```
/// use ficha::hooks::hooks;
/// use ficha::word_list::WordList;
///
/// let words = WordList::parse_from_str("casa\ncasas\nramo\nramos");
/// assert_eq!(hooks("casa", &words).right_external, vec!["S"]);
/// assert!(hooks("ramos", &words).right_internal);
/// ```
#[must_use]
pub fn hooks(word: &str, words: &WordList) -> Hooks {
    let internal = normalize_word(word.trim());
    if internal.is_empty() {
        return Hooks::default();
    }

    let mut result = Hooks::default();
    // the alphabet is already in tile order
    for tile in SPANISH_ALPHABET.chars() {
        if words.contains(&format!("{tile}{internal}")) {
            result.left_external.push(to_display(&tile.to_string()));
        }
        if words.contains(&format!("{internal}{tile}")) {
            result.right_external.push(to_display(&tile.to_string()));
        }
    }

    let mut chars = internal.chars();
    chars.next();
    result.left_internal = words.contains(chars.as_str());
    let mut chars = internal.chars();
    chars.next_back();
    result.right_internal = words.contains(chars.as_str());

    log::debug!(
        "hooks of {internal}: {} left, {} right",
        result.left_external.len(),
        result.right_external.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> WordList {
        WordList::parse_from_str("casa\ncasas\nramo\nramos\namo\namor\nla\nlas\nala\nhala\nchala\nllama\nama\nmas")
    }

    #[test]
    fn test_right_external_hook() {
        let h = hooks("CASA", &words());
        assert_eq!(h.right_external, vec!["S"]);
        assert!(h.left_external.is_empty());
        assert!(h.has_external_hooks());
    }

    #[test]
    fn test_left_external_hooks_in_tile_order() {
        // CH (7) comes before H (11)
        let h = hooks("la", &words());
        assert_eq!(h.left_external, vec!["A"]);
        let h = hooks("ala", &words());
        assert_eq!(h.left_external, vec!["CH", "H"]);
    }

    #[test]
    fn test_internal_hooks() {
        let h = hooks("ramos", &words());
        assert!(h.right_internal);
        assert!(!h.left_internal);

        // AMOR minus A is MOR, not a word; minus R is AMO
        let h = hooks("amor", &words());
        assert!(h.right_internal);
        assert!(!h.left_internal);

        // LL comes off as one tile, leaving AMA
        let h = hooks("llama", &words());
        assert!(h.left_internal);
        assert!(!h.right_internal);
    }

    #[test]
    fn test_unknown_word_has_no_hooks() {
        let h = hooks("zzz", &words());
        assert_eq!(h, Hooks::default());
        assert!(!h.has_external_hooks());
        assert!(!h.has_internal_hooks());
    }

    #[test]
    fn test_blank_word() {
        assert_eq!(hooks("  ", &words()), Hooks::default());
    }
}
