//! Spanish tile values and word scoring.
//!
//! Scores are computed over the internal form, so CH, LL and RR are each one
//! tile with their own value. Positions played with a blank score zero.

use std::collections::HashSet;

use crate::spanish_char::{normalize_word, BLANK};

/// Suffix that carries a length filter in a search term, e.g. `CASA?/5`.
const LENGTH_SUFFIX: char = '/';

/// Face value of one tile (internal form). Anything that is not a tile is 0.
#[must_use]
pub fn tile_value(tile: char) -> u32 {
    match tile {
        'A' | 'E' | 'O' | 'I' | 'S' | 'N' | 'R' | 'U' | 'L' | 'T' => 1,
        'D' | 'G' => 2,
        'C' | 'B' | 'M' | 'P' => 3,
        'H' | 'F' | 'V' | 'Y' => 4,
        'Ç' | 'Q' => 5,
        'J' | 'K' | 'Ñ' | 'W' | 'X' => 8,
        'Z' => 10,
        _ => 0,
    }
}

fn strip_length_suffix(term: &str) -> &str {
    match term.rsplit_once(LENGTH_SUFFIX) {
        Some((head, digits)) if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => head,
        _ => term,
    }
}

/// Positions of `word` (internal form, zero-based) that a blank had to cover.
///
/// Each real letter in `search_term` claims the first unclaimed position in
/// `word` holding the same tile; whatever is left over came from a blank.
/// Returns an empty list when `search_term` contains no `?`.
///
/// ```
/// use ficha::score::blank_positions;
/// assert_eq!(blank_positions("CASA", "CAS?"), vec![3]);
/// assert!(blank_positions("CASA", "CASA").is_empty());
/// ```
#[must_use]
pub fn blank_positions(word: &str, search_term: &str) -> Vec<usize> {
    let term = strip_length_suffix(search_term.trim());
    if !term.contains(BLANK) {
        return Vec::new();
    }

    let tiles: Vec<char> = normalize_word(word).chars().collect();
    let mut claimed = vec![false; tiles.len()];
    for letter in normalize_word(term).chars().filter(|&c| c != BLANK) {
        if let Some(pos) = (0..tiles.len()).find(|&i| !claimed[i] && tiles[i] == letter) {
            claimed[pos] = true;
        }
    }

    claimed
        .iter()
        .enumerate()
        .filter_map(|(i, &taken)| (!taken).then_some(i))
        .collect()
}

/// Score of `word`: the sum of its tile values, with positions covered by a
/// blank (as worked out from `search_term`) counting zero.
///
/// ```
/// use ficha::score::word_score;
/// assert_eq!(word_score("CHORRO", None), 15);
/// assert_eq!(word_score("CASA", Some("CAS?")), 5);
/// ```
#[must_use]
pub fn word_score(word: &str, search_term: Option<&str>) -> u32 {
    let blanks: HashSet<usize> = search_term
        .map(|term| blank_positions(word, term).into_iter().collect())
        .unwrap_or_default();

    normalize_word(word)
        .chars()
        .enumerate()
        .filter(|(i, _)| !blanks.contains(i))
        .map(|(_, c)| tile_value(c))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spanish_char::SPANISH_ALPHABET;

    #[test]
    fn test_every_tile_has_a_value() {
        for c in SPANISH_ALPHABET.chars() {
            assert!(tile_value(c) > 0, "{c} has no value");
        }
        assert_eq!(tile_value('?'), 0);
        assert_eq!(tile_value('1'), 0);
    }

    #[test]
    fn test_digraph_values() {
        assert_eq!(word_score("CH", None), 5);
        assert_eq!(word_score("LL", None), 8);
        assert_eq!(word_score("RR", None), 8);
    }

    #[test]
    fn test_word_score_plain() {
        assert_eq!(word_score("CHORRO", None), 15);
        assert_eq!(word_score("casa", None), 6);
        assert_eq!(word_score("zorro", None), 20);
        assert_eq!(word_score("", None), 0);
    }

    #[test]
    fn test_word_score_ignores_accents() {
        assert_eq!(word_score("camión", None), word_score("CAMION", None));
    }

    #[test]
    fn test_blank_positions_needs_a_blank_in_the_term() {
        assert!(blank_positions("CASA", "CASA").is_empty());
        assert!(blank_positions("CASA", "CA*").is_empty());
    }

    #[test]
    fn test_blank_positions_first_unclaimed_match() {
        // the term's two A's claim positions 1 and 3; S is the blank
        assert_eq!(blank_positions("CASA", "CAA?"), vec![2]);
        // A claims the earliest free A, so the last A is left to a blank
        assert_eq!(blank_positions("CASA", "??SA"), vec![0, 3]);
    }

    #[test]
    fn test_blank_positions_uses_internal_form() {
        // CH is a single tile at position 0
        assert_eq!(blank_positions("CHORRO", "?ORRO"), vec![0]);
        assert_eq!(blank_positions("CHORRO", "CHO?O"), vec![2]);
    }

    #[test]
    fn test_blank_positions_strips_length_suffix() {
        assert_eq!(blank_positions("CASA", "CAS?/4"), vec![3]);
        assert_eq!(blank_positions("CASAS", "CAS?/4"), vec![3, 4]);
    }

    #[test]
    fn test_word_score_with_blanks() {
        assert_eq!(word_score("CHORRO", Some("?ORRO")), 10);
        assert_eq!(word_score("ZORRO", Some("?ORRO")), 10);
        assert_eq!(word_score("CASA", Some("CASA")), 6);
    }
}
