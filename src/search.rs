//! Pattern search and anagram lookup over a [`WordList`].

use crate::errors::PatternError;
use crate::query::{AnagramQuery, SearchQuery};
use crate::spanish_char::to_display;
use crate::word_list::WordList;

/// Default cut-off between "normal" and "long" results.
pub const DEFAULT_MAX_LENGTH: usize = 8;
/// Shortest word listed among shorter anagrams by default.
pub const DEFAULT_MIN_ANAGRAM_LENGTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Words up to this many tiles are shown when the query has no length.
    pub max_default_length: usize,
    /// Show only the words longer than `max_default_length` instead.
    pub show_longer: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions { max_default_length: DEFAULT_MAX_LENGTH, show_longer: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnagramOptions {
    pub include_shorter: bool,
    pub min_length: usize,
}

impl Default for AnagramOptions {
    fn default() -> Self {
        AnagramOptions { include_shorter: false, min_length: DEFAULT_MIN_ANAGRAM_LENGTH }
    }
}

/// Anagram results, all in display form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnagramResults {
    /// Words using exactly the given letters (only when there are no blanks).
    pub exact: Vec<String>,
    /// Words using every tile, blanks included (only when there are blanks).
    pub with_blanks: Vec<String>,
    /// Shorter formable words, longest first.
    pub shorter: Vec<String>,
}

impl AnagramResults {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.with_blanks.is_empty() && self.shorter.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.exact.len() + self.with_blanks.len() + self.shorter.len()
    }
}

fn tiles(word: &str) -> usize {
    word.chars().count()
}

fn length_allowed(len: usize, query_len: Option<usize>, options: &SearchOptions) -> bool {
    match query_len {
        Some(n) => len == n,
        None if options.show_longer => len > options.max_default_length,
        None => len <= options.max_default_length,
    }
}

/// Words in `words` matching a `PATTERN[:LENGTH][,RACK]` query.
///
/// Results keep word-list order and are in display form.
///
/// # Errors
///
/// Returns whatever [`SearchQuery::parse`] or [`Pattern::compile`](crate::pattern::Pattern::compile)
/// reports for a malformed query.
///
/// ```
/// use ficha::search::{find_pattern_matches, SearchOptions};
/// use ficha::word_list::WordList;
///
/// let words = WordList::parse_from_str("canción\nacción\ncasa");
/// let found = find_pattern_matches("-CION", &words, &SearchOptions::default()).unwrap();
/// assert_eq!(found, vec!["ACCION", "CANCION"]);
/// ```
pub fn find_pattern_matches(
    query: &str,
    words: &WordList,
    options: &SearchOptions,
) -> Result<Vec<String>, PatternError> {
    let query = SearchQuery::parse(query)?;
    let matcher = query.pattern.compile()?;
    let fixed = query.pattern.literal_tiles();
    let (min_len, max_len) = (query.pattern.min_len(), query.pattern.max_len());
    log::debug!("searching {} words with {matcher}", words.len());

    let found: Vec<String> = words
        .words
        .iter()
        .filter(|w| {
            let len = tiles(w);
            // cheap length check before running the regex
            len >= min_len && max_len.is_none_or(|max| len <= max) && length_allowed(len, query.length, options)
        })
        .filter(|w| matcher.test(w))
        .filter(|w| query.rack.as_ref().is_none_or(|rack| rack.can_complete(w, &fixed)))
        .map(|w| to_display(w))
        .collect();

    log::debug!("{} matches for {}", found.len(), query.pattern);
    Ok(found)
}

/// Anagrams of a `LETTERS[:LENGTH]` query, `?` standing for a blank.
///
/// # Errors
///
/// Returns whatever [`AnagramQuery::parse`] reports for a malformed query.
///
/// ```
/// use ficha::search::{find_anagrams, AnagramOptions};
/// use ficha::word_list::WordList;
///
/// let words = WordList::parse_from_str("amor\nroma\nramo\nmar");
/// let found = find_anagrams("omar", &words, &AnagramOptions::default()).unwrap();
/// assert_eq!(found.exact, vec!["AMOR", "RAMO", "ROMA"]);
/// ```
pub fn find_anagrams(
    query: &str,
    words: &WordList,
    options: &AnagramOptions,
) -> Result<AnagramResults, PatternError> {
    let parsed = AnagramQuery::parse(query)?;
    let rack = &parsed.rack;
    let full_len = rack.len();
    let wanted = |len: usize| parsed.length.is_none_or(|n| n == len);

    let mut results = AnagramResults::default();

    // a full-length word drawn from a blank-free rack is an exact anagram
    if wanted(full_len) {
        let full = collect(words, |w| tiles(w) == full_len && rack.can_form(w));
        if rack.blanks() == 0 {
            results.exact = full;
        } else {
            results.with_blanks = full;
        }
    }

    if options.include_shorter {
        let mut shorter = collect(words, |w| {
            let len = tiles(w);
            len < full_len && len >= options.min_length && wanted(len) && rack.can_form(w)
        });
        // stable, so equal lengths keep word-list order
        shorter.sort_by_key(|w| std::cmp::Reverse(tiles(w)));
        results.shorter = shorter.into_iter().map(|w| to_display(&w)).collect();
    }

    results.exact = results.exact.iter().map(|w| to_display(w)).collect();
    results.with_blanks = results.with_blanks.iter().map(|w| to_display(w)).collect();

    log::debug!(
        "anagrams of {query:?}: {} exact, {} with blanks, {} shorter",
        results.exact.len(),
        results.with_blanks.len(),
        results.shorter.len()
    );
    Ok(results)
}

fn collect(words: &WordList, keep: impl Fn(&str) -> bool) -> Vec<String> {
    words.words.iter().filter(|w| keep(w.as_str())).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> WordList {
        WordList::parse_from_str(
            "casa\ncasas\ncaza\ncosa\nchorro\nacción\ncanción\nmar\namor\nroma\nramo\nmora\nrama\nramos\nor\nconstitución",
        )
    }

    #[test]
    fn test_pattern_exact_word() {
        let found = find_pattern_matches("CASA", &words(), &SearchOptions::default()).unwrap();
        assert_eq!(found, vec!["CASA"]);
    }

    #[test]
    fn test_pattern_any_letter() {
        let found = find_pattern_matches("CA.A", &words(), &SearchOptions::default()).unwrap();
        assert_eq!(found, vec!["CASA", "CAZA"]);
    }

    #[test]
    fn test_pattern_results_in_display_form() {
        let found = find_pattern_matches("CH-", &words(), &SearchOptions::default()).unwrap();
        assert_eq!(found, vec!["CHORRO"]);
    }

    #[test]
    fn test_pattern_default_length_cut_off() {
        let opts = SearchOptions::default();
        let found = find_pattern_matches("-CION", &words(), &opts).unwrap();
        assert_eq!(found, vec!["ACCION", "CANCION"]);

        let longer = SearchOptions { show_longer: true, ..opts };
        let found = find_pattern_matches("-CION", &words(), &longer).unwrap();
        assert_eq!(found, vec!["CONSTITUCION"]);
    }

    #[test]
    fn test_pattern_explicit_length_overrides_cut_off() {
        let found = find_pattern_matches("-CION:12", &words(), &SearchOptions::default()).unwrap();
        assert_eq!(found, vec!["CONSTITUCION"]);
        let found = find_pattern_matches("CA*:5", &words(), &SearchOptions::default()).unwrap();
        assert_eq!(found, vec!["CASAS"]);
    }

    #[test]
    fn test_pattern_with_rack() {
        // CA + two tiles from the rack
        let found = find_pattern_matches("CA*,SA", &words(), &SearchOptions::default()).unwrap();
        assert_eq!(found, vec!["CASA"]);
        let found = find_pattern_matches("CA*,A?", &words(), &SearchOptions::default()).unwrap();
        assert_eq!(found, vec!["CASA", "CAZA"]);
    }

    #[test]
    fn test_pattern_no_matches() {
        let found = find_pattern_matches("XX*", &words(), &SearchOptions::default()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_pattern_errors() {
        let opts = SearchOptions::default();
        assert!(matches!(find_pattern_matches("", &words(), &opts), Err(PatternError::EmptyPattern)));
        assert!(matches!(
            find_pattern_matches("CA^SA", &words(), &opts),
            Err(PatternError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_anagram_exact() {
        let found = find_anagrams("AMOR", &words(), &AnagramOptions::default()).unwrap();
        assert_eq!(found.exact, vec!["AMOR", "MORA", "RAMO", "ROMA"]);
        assert!(found.with_blanks.is_empty());
        assert!(found.shorter.is_empty());
    }

    #[test]
    fn test_anagram_with_blank() {
        let found = find_anagrams("AMO?", &words(), &AnagramOptions::default()).unwrap();
        assert!(found.exact.is_empty());
        assert_eq!(found.with_blanks, vec!["AMOR", "MORA", "RAMO", "ROMA"]);
    }

    #[test]
    fn test_anagram_shorter_longest_first() {
        let opts = AnagramOptions { include_shorter: true, ..AnagramOptions::default() };
        let found = find_anagrams("RAMOS", &words(), &opts).unwrap();
        assert_eq!(found.exact, vec!["RAMOS"]);
        assert_eq!(found.shorter, vec!["AMOR", "MORA", "RAMO", "ROMA", "MAR", "OR"]);
    }

    #[test]
    fn test_anagram_min_length() {
        let opts = AnagramOptions { include_shorter: true, min_length: 3 };
        let found = find_anagrams("RAMOS", &words(), &opts).unwrap();
        assert!(!found.shorter.contains(&"OR".to_string()));
    }

    #[test]
    fn test_anagram_length_restricts_every_list() {
        let opts = AnagramOptions { include_shorter: true, ..AnagramOptions::default() };
        let found = find_anagrams("RAMOS:3", &words(), &opts).unwrap();
        assert!(found.exact.is_empty());
        assert_eq!(found.shorter, vec!["MAR"]);
        assert_eq!(found.total(), 1);
    }

    #[test]
    fn test_anagram_digraph_tiles() {
        let found = find_anagrams("RROOCH", &words(), &AnagramOptions::default()).unwrap();
        assert_eq!(found.exact, vec!["CHORRO"]);
    }

    #[test]
    fn test_anagram_ignores_stray_symbols() {
        let found = find_anagrams("AMOR!", &words(), &AnagramOptions::default()).unwrap();
        assert_eq!(found.exact, vec!["AMOR", "MORA", "RAMO", "ROMA"]);
    }

    #[test]
    fn test_anagram_errors() {
        assert!(matches!(
            find_anagrams("", &words(), &AnagramOptions::default()),
            Err(PatternError::EmptyPattern)
        ));
        assert!(matches!(
            find_anagrams("!!", &words(), &AnagramOptions::default()),
            Err(PatternError::EmptyPattern)
        ));
    }
}
