//! Loading the lexicon and answering "is this a word?"
//!
//! A word list can come from a file (native builds) or from an in-memory
//! string (the WASM build, where the host fetches the file and hands over its
//! contents).
//!
//! The parsing logic:
//! - One word per line. Anything after a `;` or `,` on the line is ignored, so
//!   `casa;50` and `casa,sust.` both load as `casa`.
//! - Blank lines and lines starting with `#` are skipped.
//! - Words are converted to internal form (see [`normalize_word`]).
//! - The final list is deduplicated and sorted by length, then Spanish order.
//!
//! Word validity is reached through the [`WordLookup`] trait, so callers can
//! swap the in-memory list for a remote dictionary without touching search
//! code.

use std::cmp::Ordering;

use crate::collation::compare_words;
use crate::errors::LookupError;
use crate::spanish_char::normalize_word;

/// Separators after which the rest of a line is metadata.
const FIELD_SEPARATORS: [char; 2] = [';', ','];
const COMMENT_PREFIX: char = '#';

/// Answers whether a word is in the lexicon.
pub trait WordLookup {
    /// Is `word` (written form, any case) a valid word?
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when the backing store cannot be consulted.
    fn lookup(&self, word: &str) -> Result<bool, LookupError>;

    /// Number of words in the lexicon.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when the backing store cannot be consulted.
    fn count(&self) -> Result<usize, LookupError>;
}

/// A processed, ready-to-search word list.
///
/// `words` holds internal-form words, deduplicated and sorted by
/// (tile count, Spanish order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    pub words: Vec<String>,
}

fn by_len_then_spanish(a: &str, b: &str) -> Ordering {
    a.chars()
        .count()
        .cmp(&b.chars().count())
        .then_with(|| compare_words(a, b))
}

impl WordList {
    /// Build a list from words already in memory.
    pub fn from_words<I, S>(words: I) -> WordList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| normalize_word(w.as_ref().trim()))
            .filter(|w| !w.is_empty())
            .collect();

        // dedup only removes adjacent duplicates, so sort first
        words.sort_by(|a, b| by_len_then_spanish(a, b));
        words.dedup();

        WordList { words }
    }

    /// Parse a word list from an in-memory string.
    ///
    /// Works everywhere, including WASM.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let words = contents.lines().filter_map(|raw_line| {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                return None;
            }
            let word = line.split(FIELD_SEPARATORS).next().unwrap_or(line).trim();
            (!word.is_empty()).then_some(word)
        });
        WordList::from_words(words)
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Io`] if the file at `path` cannot be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<WordList, LookupError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| LookupError::Io {
            path: path_ref.display().to_string(),
            source,
        })?;
        let list = Self::parse_from_str(&data);
        log::debug!("loaded {} words from {}", list.len(), path_ref.display());
        Ok(list)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Is the internal-form `word` in the list?
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|probe| by_len_then_spanish(probe, word))
            .is_ok()
    }
}

impl WordLookup for WordList {
    fn lookup(&self, word: &str) -> Result<bool, LookupError> {
        let normalized = normalize_word(word.trim());
        if normalized.is_empty() {
            return Ok(false);
        }
        Ok(self.contains(&normalized))
    }

    fn count(&self) -> Result<usize, LookupError> {
        Ok(self.len())
    }
}

/// Ask `lookup` for its word count and log the outcome.
///
/// # Errors
///
/// Passes on whatever [`LookupError`] the lookup returns.
pub fn probe_word_count(lookup: &dyn WordLookup) -> Result<usize, LookupError> {
    match lookup.count() {
        Ok(n) => {
            log::info!("word list ready: {n} words");
            Ok(n)
        }
        Err(e) => {
            log::warn!("could not count words: {e}");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Offline;

    impl WordLookup for Offline {
        fn lookup(&self, _word: &str) -> Result<bool, LookupError> {
            Err(LookupError::Unavailable { reason: "offline".to_string() })
        }
        fn count(&self) -> Result<usize, LookupError> {
            Err(LookupError::Unavailable { reason: "offline".to_string() })
        }
    }

    #[test]
    fn test_parse_basic() {
        let list = WordList::parse_from_str("casa\nperro\nsol");
        assert_eq!(list.words, vec!["SOL", "CASA", "PEWO"]);
    }

    #[test]
    fn test_parse_ignores_trailing_fields() {
        let list = WordList::parse_from_str("casa;50\nmesa,sust.\nsol ; 3");
        assert_eq!(list.words, vec!["SOL", "CASA", "MESA"]);
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let list = WordList::parse_from_str("# lemario\n\n  casa  \n\n#sol\n;solo metadata");
        assert_eq!(list.words, vec!["CASA"]);
    }

    #[test]
    fn test_parse_deduplicates_after_normalizing() {
        let list = WordList::parse_from_str("camión\nCAMION\nCamion");
        assert_eq!(list.words, vec!["CAMION"]);
    }

    #[test]
    fn test_parse_sorts_by_tiles_then_spanish_order() {
        // CHAL is 3 tiles, and vowels sort before every consonant
        let list = WordList::parse_from_str("beso\nchal\neso\nosa\nbeta");
        assert_eq!(list.words, vec!["ESO", "OSA", "ÇAL", "BESO", "BETA"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(WordList::parse_from_str("").is_empty());
    }

    #[test]
    fn test_lookup() {
        let list = WordList::parse_from_str("casa\nchorro\nniño");
        assert!(list.lookup("casa").unwrap());
        assert!(list.lookup("Chorro").unwrap());
        assert!(list.lookup("NIÑO").unwrap());
        assert!(!list.lookup("nino").unwrap());
        assert!(!list.lookup("perro").unwrap());
    }

    #[test]
    fn test_lookup_blank_word_is_not_a_word() {
        let list = WordList::parse_from_str("casa");
        assert!(!list.lookup("").unwrap());
        assert!(!list.lookup("   ").unwrap());
    }

    #[test]
    fn test_probe_word_count() {
        let list = WordList::from_words(["uno", "dos", "tres"]);
        assert_eq!(probe_word_count(&list).unwrap(), 3);
    }

    #[test]
    fn test_probe_word_count_propagates_errors() {
        let err = probe_word_count(&Offline).unwrap_err();
        assert_eq!(err.code(), "L002");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_missing_file() {
        let err = WordList::load_from_path("/definitely/not/here.txt").unwrap_err();
        assert_eq!(err.code(), "L001");
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
