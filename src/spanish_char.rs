//! Spanish tile alphabet and the internal single-character word form.
//!
//! Spanish Scrabble treats the digraphs CH, LL and RR as single tiles. Inside
//! the crate every word is kept in an *internal form*: uppercase, accents
//! stripped (except Ñ), and each digraph replaced by one stand-in character
//! (`Ç` for CH, `K` for LL, `W` for RR). One `char` is then one tile.

use std::collections::HashMap;
use std::sync::LazyLock;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// The 28 tiles in collation order: vowels first, then consonants, with the
/// digraph stand-ins placed where the digraph sorts.
pub const SPANISH_ALPHABET: &str = "AEIOUBCÇDFGHJLKMNÑPQRWSTVXYZ";

pub const ALPHABET_SIZE: usize = 28;
pub(crate) const VOWELS: &str = "AEIOU";

/// Digraphs and their internal stand-ins, in replacement order.
pub(crate) const DIGRAPHS: [(&str, char); 3] = [("CH", 'Ç'), ("LL", 'K'), ("RR", 'W')];

/// Marks a blank (wildcard tile) in racks and anagram queries.
pub const BLANK: char = '?';

static RANKS: LazyLock<HashMap<char, usize>> =
    LazyLock::new(|| SPANISH_ALPHABET.chars().enumerate().map(|(i, c)| (c, i)).collect());

pub trait SpanishChar {
    /// Zero-based position in [`SPANISH_ALPHABET`], or `None` for anything else.
    fn spanish_rank(&self) -> Option<usize>;
    fn is_tile(&self) -> bool;
    fn is_spanish_vowel(&self) -> bool;
}

impl SpanishChar for char {
    fn spanish_rank(&self) -> Option<usize> {
        RANKS.get(self).copied()
    }
    fn is_tile(&self) -> bool {
        RANKS.contains_key(self)
    }
    fn is_spanish_vowel(&self) -> bool {
        VOWELS.contains(*self)
    }
}

/// Convert a word to internal form.
///
/// Uppercases, strips diacritics (Ñ and Ç survive, they are tiles of their own)
/// and folds CH/LL/RR into their stand-ins.
///
/// ```
/// use ficha::spanish_char::normalize_word;
/// assert_eq!(normalize_word("chorro"), "ÇOWO");
/// assert_eq!(normalize_word("Pingüino"), "PINGUINO");
/// assert_eq!(normalize_word("año"), "AÑO");
/// ```
#[must_use]
pub fn normalize_word(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let upper = input.to_uppercase();
    let mut stripped = String::with_capacity(upper.len());
    for c in upper.chars() {
        if c == 'Ñ' || c == 'Ç' {
            stripped.push(c);
        } else {
            stripped.extend(c.nfd().filter(|d| !is_combining_mark(*d)));
        }
    }

    DIGRAPHS
        .iter()
        .fold(stripped, |acc, &(digraph, stand_in)| acc.replace(digraph, &stand_in.to_string()))
}

/// Convert an internal-form word back to how it is written.
#[must_use]
pub fn to_display(word: &str) -> String {
    let mut out = String::with_capacity(word.len() + 4);
    for c in word.chars() {
        match DIGRAPHS.iter().find(|(_, stand_in)| *stand_in == c) {
            Some((digraph, _)) => out.push_str(digraph),
            None => out.push(c),
        }
    }
    out
}

/// Number of tiles in `word`, counting each digraph once.
#[must_use]
pub fn tile_len(word: &str) -> usize {
    normalize_word(word).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_constants() {
        assert_eq!(SPANISH_ALPHABET.chars().count(), ALPHABET_SIZE);
        assert_eq!(VOWELS.len(), 5);
        assert_eq!(RANKS.len(), ALPHABET_SIZE);
    }

    #[test]
    fn test_spanish_rank() {
        assert_eq!('A'.spanish_rank(), Some(0));
        assert_eq!('O'.spanish_rank(), Some(3));
        assert_eq!('Ç'.spanish_rank(), Some(7));
        assert_eq!('Ñ'.spanish_rank(), Some(17));
        assert_eq!('Z'.spanish_rank(), Some(27));
        assert_eq!('1'.spanish_rank(), None);
        assert_eq!('a'.spanish_rank(), None); // lowercase is not a tile
    }

    #[test]
    fn test_is_tile() {
        assert!('K'.is_tile());
        assert!('W'.is_tile());
        assert!(!'?'.is_tile());
        assert!(!'ñ'.is_tile());
    }

    #[test]
    fn test_is_spanish_vowel() {
        for c in "AEIOU".chars() {
            assert!(c.is_spanish_vowel());
        }
        assert!(!'Y'.is_spanish_vowel());
        assert!(!'a'.is_spanish_vowel());
    }

    #[test]
    fn test_normalize_digraphs() {
        assert_eq!(normalize_word("CHICO"), "ÇICO");
        assert_eq!(normalize_word("calle"), "CAKE");
        assert_eq!(normalize_word("perro"), "PEWO");
        assert_eq!(normalize_word("chorro"), "ÇOWO");
    }

    #[test]
    fn test_normalize_strips_accents_but_keeps_enye() {
        assert_eq!(normalize_word("canción"), "CANCION");
        assert_eq!(normalize_word("ÑANDÚ"), "ÑANDU");
        assert_eq!(normalize_word("niño"), "NIÑO");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_word(""), "");
    }

    #[test]
    fn test_to_display() {
        assert_eq!(to_display("ÇOWO"), "CHORRO");
        assert_eq!(to_display("CAKE"), "CALLE");
        assert_eq!(to_display("NIÑO"), "NIÑO");
    }

    #[test]
    fn test_display_inverts_normalize() {
        for w in ["CHURRO", "LLAVE", "CARRO", "MUCHACHO"] {
            assert_eq!(to_display(&normalize_word(w)), w);
        }
    }

    #[test]
    fn test_tile_len() {
        assert_eq!(tile_len("chorro"), 4);
        assert_eq!(tile_len("casa"), 4);
        assert_eq!(tile_len(""), 0);
    }
}
