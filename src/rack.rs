//! A player's rack: tile counts plus blanks.

use std::collections::HashMap;

use crate::spanish_char::{normalize_word, SpanishChar, BLANK};

/// Most tiles a rack (or anagram letter set) may hold.
pub const MAX_RACK_LETTERS: usize = 15;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    counts: HashMap<char, usize>,
    blanks: usize,
}

impl Rack {
    /// Build a rack from written letters; `?` marks a blank.
    ///
    /// Anything that is neither a tile nor a blank (digits, punctuation,
    /// spaces) is skipped.
    #[must_use]
    pub fn from_letters(letters: &str) -> Rack {
        let mut rack = Rack::default();
        for c in normalize_word(letters).chars() {
            if c == BLANK {
                rack.blanks += 1;
            } else if c.is_tile() {
                *rack.counts.entry(c).or_insert(0) += 1;
            }
        }
        rack
    }

    #[must_use]
    pub fn blanks(&self) -> usize {
        self.blanks
    }

    /// Total tiles, blanks included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum::<usize>() + self.blanks
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Can the multiset `needed` be drawn from this rack, blanks standing in
    /// for missing tiles?
    #[must_use]
    pub fn can_supply(&self, needed: &HashMap<char, usize>) -> bool {
        let missing: usize = needed
            .iter()
            .map(|(c, &n)| n.saturating_sub(self.counts.get(c).copied().unwrap_or(0)))
            .sum();
        missing <= self.blanks
    }

    /// Can `word` (internal form) be spelled from this rack alone?
    #[must_use]
    pub fn can_form(&self, word: &str) -> bool {
        self.can_supply(&tile_counts(word))
    }

    /// Can `word` be spelled from this rack after the tiles already on the
    /// board (`fixed`) are taken out of it?
    #[must_use]
    pub fn can_complete(&self, word: &str, fixed: &HashMap<char, usize>) -> bool {
        let mut needed = tile_counts(word);
        for (c, n) in fixed {
            if let Some(count) = needed.get_mut(c) {
                *count = count.saturating_sub(*n);
            }
        }
        self.can_supply(&needed)
    }
}

pub(crate) fn tile_counts(word: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in word.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}
