//! Ordering by the Spanish tile alphabet.
//!
//! Characters are ranked by their position in
//! [`SPANISH_ALPHABET`](crate::spanish_char::SPANISH_ALPHABET). Anything
//! outside the alphabet (digits, punctuation, lowercase letters, blanks) sorts
//! after every ranked character and keeps its original relative order, so the
//! result is a stable partition rather than an arbitrary shuffle.

use std::cmp::Ordering;

use crate::rack::tile_counts;
use crate::spanish_char::{normalize_word, to_display, SpanishChar};

// Unranked characters share one key past the end of the alphabet; the sort is
// stable, so they stay in input order.
fn sort_key(c: char) -> usize {
    c.spanish_rank().unwrap_or(usize::MAX)
}

/// Reorder the characters of `input` by Spanish tile order.
///
/// Total over all strings; length and character multiset are preserved.
///
/// ```
/// use ficha::collation::sort_spanish_letters;
/// assert_eq!(sort_spanish_letters("OLA"), "AOL");
/// assert_eq!(sort_spanish_letters("A1B"), "AB1");
/// ```
#[must_use]
pub fn sort_spanish_letters(input: &str) -> String {
    let mut chars: Vec<char> = input.chars().collect();
    chars.sort_by_key(|&c| sort_key(c));
    chars.into_iter().collect()
}

/// Comparator form of the tile order. Two unranked characters compare equal.
#[must_use]
pub fn compare_spanish(a: char, b: char) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Compare two internal-form words tile by tile, shorter prefix first.
#[must_use]
pub fn compare_words(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(sort_key)
        .cmp(b.chars().map(sort_key))
        .then_with(|| a.cmp(b))
}

/// Canonical anagram key: the word's tiles in Spanish order.
///
/// Two words are anagrams of each other iff their alphagrams are equal.
#[must_use]
pub fn alphagram(word: &str) -> String {
    sort_spanish_letters(&normalize_word(word))
}

/// Return the tile (internal form) that `longer` has one more of than `base`.
///
/// Returns `None` when `longer` contains no tile beyond those of `base`.
#[must_use]
pub fn find_added_letter(base: &str, longer: &str) -> Option<char> {
    let base_counts = tile_counts(&normalize_word(base));
    let longer_norm = normalize_word(longer);
    let longer_counts = tile_counts(&longer_norm);

    // walk in word order so the result is deterministic
    longer_norm
        .chars()
        .find(|c| longer_counts[c] > base_counts.get(c).copied().unwrap_or(0))
}

/// Group `words` by the tile each adds to `base`.
///
/// Groups come out in tile order (words with no identifiable added tile go
/// last, under [`None`]); words within a group are in Spanish word order and
/// in display form.
#[must_use]
pub fn sort_words_by_added_letter(base: &str, words: &[String]) -> Vec<(Option<char>, Vec<String>)> {
    let mut groups: Vec<(Option<char>, Vec<String>)> = Vec::new();
    for word in words {
        let added = find_added_letter(base, word);
        let normalized = normalize_word(word);
        match groups.iter_mut().find(|(letter, _)| *letter == added) {
            Some((_, members)) => members.push(normalized),
            None => groups.push((added, vec![normalized])),
        }
    }

    // unknown letters share usize::MAX with None, so None needs its own flag
    groups.sort_by_key(|(letter, _)| (letter.is_none(), letter.map_or(usize::MAX, sort_key)));
    for (_, members) in &mut groups {
        members.sort_by(|a, b| compare_words(a, b));
        for m in members.iter_mut() {
            *m = to_display(m);
        }
    }
    groups
}
