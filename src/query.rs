//! Search-box input: cleaning keystrokes and parsing the compact query syntax.
//!
//! Pattern queries look like `PATTERN[:LENGTH][,RACK]`, e.g. `-CION:7,ERT?`.
//! Anagram queries look like `LETTERS[:LENGTH]`, e.g. `AMOR?:5`.

use crate::errors::PatternError;
use crate::pattern::Pattern;
use crate::rack::{Rack, MAX_RACK_LETTERS};

const LENGTH_SEPARATOR: char = ':';
const RACK_SEPARATOR: char = ',';

const LETTER_CHARS: &str = "ABCDEFGHIJKLMNÑOPQRSTUVWXYZÇ";

fn is_letter(c: char) -> bool {
    LETTER_CHARS.contains(c)
}

fn is_pattern_char(c: char) -> bool {
    is_letter(c) || "*.^$-".contains(c)
}

fn is_rack_char(c: char) -> bool {
    is_letter(c) || c == '?'
}

fn keep(s: &str, pred: fn(char) -> bool) -> String {
    s.chars().filter(|&c| pred(c)).collect()
}

/// Drop every character an anagram box does not accept.
///
/// Keeps letters and `?` (plus `,`) before the first `:`, digits after it.
#[must_use]
pub fn clean_anagram_input(value: &str) -> String {
    let upper = value.to_uppercase();
    match upper.split_once(LENGTH_SEPARATOR) {
        Some((letters, len)) => format!(
            "{}{LENGTH_SEPARATOR}{}",
            keep(letters, |c| is_rack_char(c) || c == RACK_SEPARATOR),
            keep(len, |c| c.is_ascii_digit()),
        ),
        None => keep(&upper, |c| is_rack_char(c) || c == RACK_SEPARATOR),
    }
}

/// Drop every character a pattern box does not accept.
///
/// Pattern part keeps letters and `* . ^ $ -`, the length part keeps digits,
/// and the rack part keeps letters and `?`.
#[must_use]
pub fn clean_pattern_input(value: &str) -> String {
    let upper = value.to_uppercase();
    let (head, rack) = match upper.split_once(RACK_SEPARATOR) {
        Some((head, rack)) => (head, Some(keep(rack, is_rack_char))),
        None => (upper.as_str(), None),
    };

    let mut out = match head.split_once(LENGTH_SEPARATOR) {
        Some((pattern, len)) => format!(
            "{}{LENGTH_SEPARATOR}{}",
            keep(pattern, is_pattern_char),
            keep(len, |c| c.is_ascii_digit()),
        ),
        None => keep(head, is_pattern_char),
    };
    if let Some(rack) = rack {
        out.push(RACK_SEPARATOR);
        out.push_str(&rack);
    }
    out
}

fn parse_length(raw: Option<&str>) -> Result<Option<usize>, PatternError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<usize>()
            .map(Some)
            .map_err(|_| PatternError::InvalidLength { input: s.to_string() }),
    }
}

fn check_rack_size(len: usize) -> Result<(), PatternError> {
    if len > MAX_RACK_LETTERS {
        Err(PatternError::RackTooLong { len, max: MAX_RACK_LETTERS })
    } else {
        Ok(())
    }
}

/// A parsed `PATTERN[:LENGTH][,RACK]` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub pattern: Pattern,
    /// Exact word length in tiles, if given.
    pub length: Option<usize>,
    /// Tiles the unmatched part of each word must come from, if given.
    pub rack: Option<Rack>,
}

impl SearchQuery {
    /// # Errors
    ///
    /// - [`PatternError::EmptyPattern`] if there is no pattern before `:`/`,`.
    /// - [`PatternError::InvalidLength`] if the length is not a number.
    /// - [`PatternError::RackTooLong`] if the rack has more than 15 tiles.
    /// - any error from [`Pattern::parse`].
    pub fn parse(input: &str) -> Result<SearchQuery, PatternError> {
        let (head, rack_raw) = match input.split_once(RACK_SEPARATOR) {
            Some((head, rack)) => (head, Some(rack)),
            None => (input, None),
        };
        let (pattern_raw, len_raw) = match head.split_once(LENGTH_SEPARATOR) {
            Some((p, l)) => (p, Some(l)),
            None => (head, None),
        };

        let pattern = Pattern::parse(pattern_raw)?;
        let length = parse_length(len_raw)?;
        let rack = rack_raw
            .map(Rack::from_letters)
            .filter(|r| !r.is_empty());
        if let Some(r) = &rack {
            check_rack_size(r.len())?;
        }

        Ok(SearchQuery { pattern, length, rack })
    }
}

/// A parsed `LETTERS[:LENGTH]` anagram query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramQuery {
    pub rack: Rack,
    pub length: Option<usize>,
}

impl AnagramQuery {
    /// # Errors
    ///
    /// - [`PatternError::EmptyPattern`] if there are no letters or blanks.
    /// - [`PatternError::InvalidLength`] if the length is not a number.
    /// - [`PatternError::RackTooLong`] if there are more than 15 tiles.
    pub fn parse(input: &str) -> Result<AnagramQuery, PatternError> {
        let (letters_raw, len_raw) = match input.split_once(LENGTH_SEPARATOR) {
            Some((l, n)) => (l, Some(n)),
            None => (input, None),
        };
        let letters: String = letters_raw.chars().filter(|&c| c != RACK_SEPARATOR).collect();

        let rack = Rack::from_letters(&letters);
        if rack.is_empty() {
            return Err(PatternError::EmptyPattern);
        }
        check_rack_size(rack.len())?;
        let length = parse_length(len_raw)?;

        Ok(AnagramQuery { rack, length })
    }
}
