use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use fancy_regex::Regex;

use crate::errors::PatternError;
use crate::spanish_char::normalize_word;

/// Marks a pattern as already translated into matcher syntax.
const RUN_TOKEN: &str = ".*";
const START_ANCHOR: char = '^';
const END_ANCHOR: char = '$';

/// Entries kept before the cache is emptied and starts over.
const MAX_CACHED_REGEXES: usize = 256;

/// Global, lazily initialized cache of compiled regexes.
///
/// Keyed by the full regex source (flags included). The lock is held only for
/// the lookup and the insert; compilation happens outside it. Holds at most
/// [`MAX_CACHED_REGEXES`] entries.
static REGEX_CACHE: OnceLock<Mutex<HashMap<String, Regex>>> = OnceLock::new();

/// Return a compiled `Regex` for `pattern`, caching the result.
pub(crate) fn get_regex(pattern: &str) -> Result<Regex, fancy_regex::Error> {
    let cache = REGEX_CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    // if the lock is poisoned we just compile without caching
    if let Ok(guard) = cache.lock()
        && let Some(re) = guard.get(pattern).cloned()
    {
        return Ok(re);
    }

    let compiled = Regex::new(pattern)?;

    if let Ok(mut guard) = cache.lock() {
        if let Some(existing) = guard.get(pattern).cloned() {
            return Ok(existing);
        }
        if guard.len() >= MAX_CACHED_REGEXES {
            log::debug!("regex cache full, dropping {} entries", guard.len());
            guard.clear();
        }
        guard.insert(pattern.to_string(), compiled.clone());
    }
    Ok(compiled)
}

/// A compiled, case-insensitive, fully anchored word predicate.
#[derive(Debug, Clone)]
pub struct Matcher {
    /// Anchored source without the case-insensitivity flag, e.g. `^C.*A$`.
    source: String,
    regex: Regex,
}

impl Matcher {
    /// Compile an anchored source string (`^...$`) case-insensitively.
    ///
    /// The body between the anchors is grouped, so top-level alternation
    /// (`^CASA|COSA$`) still has to cover the whole candidate.
    pub(crate) fn from_anchored(source: String) -> Result<Matcher, PatternError> {
        debug_assert!(source.starts_with(START_ANCHOR) && source.ends_with(END_ANCHOR));
        let body = anchored_body(&source);
        let regex = get_regex(&format!("(?i){START_ANCHOR}(?:{body}){END_ANCHOR}"))?;
        Ok(Matcher { source, regex })
    }

    /// Does the whole of `candidate` satisfy the pattern?
    ///
    /// A backtracking-limit error inside the regex engine counts as no match.
    #[must_use]
    pub fn test(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate).unwrap_or_else(|e| {
            log::debug!("matcher {} gave up on {candidate:?}: {e}", self.source);
            false
        })
    }

    /// Like [`Matcher::test`], but brings `word` to internal form first so that
    /// written digraphs (`CHICO`) meet typed patterns (`ÇICO`).
    #[must_use]
    pub fn test_word(&self, word: &str) -> bool {
        self.test(&normalize_word(word))
    }

    /// The anchored source this matcher was built from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/i", self.source)
    }
}

/// `source` without one leading `^` and one unescaped trailing `$`.
fn anchored_body(source: &str) -> &str {
    let body = source.strip_prefix(START_ANCHOR).unwrap_or(source);
    match body.strip_suffix(END_ANCHOR) {
        Some(rest) if !ends_with_escape(rest) => rest,
        _ => body,
    }
}

/// Does `s` end in an odd run of backslashes, escaping whatever follows?
fn ends_with_escape(s: &str) -> bool {
    s.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

#[cfg(test)]
fn cached_regex_count() -> usize {
    REGEX_CACHE
        .get()
        .and_then(|cache| cache.lock().ok().map(|guard| guard.len()))
        .unwrap_or(0)
}

/// Compile a raw pattern into an anchored, case-insensitive [`Matcher`].
///
/// A pattern counts as *already processed* when it contains `.*`, starts with
/// `^` or ends with `$`; such patterns get whichever anchors they lack, and
/// never a second one. Any other pattern is wrapped as `^pattern$`.
///
/// Regex syntax in `pattern` is honoured as written. Use
/// [`Pattern`](super::Pattern) when literal text must be escaped.
///
/// # Errors
///
/// Returns [`PatternError::RegexError`] if the anchored pattern is not valid
/// matcher syntax.
///
/// ```
/// use ficha::pattern::convert_pattern_to_regex;
/// let m = convert_pattern_to_regex("^C.*A$").unwrap();
/// assert!(m.test("CASA"));
/// assert_eq!(m.as_str(), "^C.*A$");
/// ```
pub fn convert_pattern_to_regex(pattern: &str) -> Result<Matcher, PatternError> {
    let is_processed = pattern.contains(RUN_TOKEN)
        || pattern.starts_with(START_ANCHOR)
        || pattern.ends_with(END_ANCHOR);

    let anchored = if is_processed {
        let mut s = String::with_capacity(pattern.len() + 2);
        if !pattern.starts_with(START_ANCHOR) {
            s.push(START_ANCHOR);
        }
        s.push_str(pattern);
        if !pattern.ends_with(END_ANCHOR) {
            s.push(END_ANCHOR);
        }
        s
    } else {
        format!("{START_ANCHOR}{pattern}{END_ANCHOR}")
    };

    Matcher::from_anchored(anchored)
}
