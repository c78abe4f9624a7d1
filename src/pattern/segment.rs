use std::collections::HashMap;
use std::fmt::Write;
use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::none_of,
    combinator::{map, value},
    multi::many1,
    IResult,
    Parser,
};

use crate::errors::PatternError;
use crate::spanish_char::normalize_word;

use super::compiler::Matcher;

/// Parser result type: input, output, with our custom `PatternError`
pub type PResult<'a, O> = IResult<&'a str, O, Box<PatternError>>;

/// Characters with meaning in user patterns; everything else is literal text.
const SYNTAX_CHARS: &str = ".*-^$";

/// One piece of a typed search pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String), // tiles in internal form, matched exactly
    AnyLetter,       // '.': exactly one tile
    AnyRun,          // '*', '.*' or '-': zero or more tiles
}

/// A search pattern as a sequence of typed segments.
///
/// Matching is always whole-word; there is no unanchored mode. Literal text
/// is escaped when the pattern is compiled, so callers never need to.
///
/// User syntax accepted by [`Pattern::parse`]:
///
/// | Input      | Meaning                              |
/// |------------|--------------------------------------|
/// | `CASA`     | exactly CASA                         |
/// | `C.SA`     | `.` is one tile                      |
/// | `CA*`      | `*` (or `.*`) is any run of tiles    |
/// | `-CION`    | ends with CION                       |
/// | `CON-`     | starts with CON                      |
/// | `-CON-`    | contains CON                         |
/// | `-PUCH-R`  | contains PUCH and ends with R        |
/// | `^CA.*$`   | explicit anchors are accepted        |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub segments: Vec<Segment>,
}

impl Pattern {
    /// Build a pattern from segments, merging adjacent literals and runs.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Pattern {
        let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());
        for seg in segments {
            match seg {
                Segment::Literal(s) if s.is_empty() => {}
                Segment::Literal(s) => {
                    if let Some(Segment::Literal(prev)) = merged.last_mut() {
                        prev.push_str(&s);
                    } else {
                        merged.push(Segment::Literal(s));
                    }
                }
                Segment::AnyRun if merged.last() == Some(&Segment::AnyRun) => {}
                other => merged.push(other),
            }
        }
        Pattern { segments: merged }
    }

    /// Parse user pattern syntax.
    ///
    /// # Errors
    ///
    /// - [`PatternError::EmptyPattern`] if `text` has no segments.
    /// - [`PatternError::InvalidInput`] if an anchor appears mid-pattern.
    pub fn parse(text: &str) -> Result<Pattern, PatternError> {
        let trimmed = text.trim();
        let body = trimmed.strip_prefix('^').unwrap_or(trimmed);
        let body = body.strip_suffix('$').unwrap_or(body);

        let mut rest = body;
        let mut segments = Vec::new();
        while !rest.is_empty() {
            match segment(rest) {
                Ok((next, seg)) => {
                    segments.push(seg);
                    rest = next;
                }
                Err(nom::Err::Failure(e) | nom::Err::Error(e)) if !matches!(*e, PatternError::NomError(_)) => {
                    return Err(*e);
                }
                Err(_) => {
                    return Err(PatternError::InvalidInput {
                        input: trimmed.to_string(),
                        reason: format!("unexpected '{}'", rest.chars().next().unwrap_or('?')),
                    });
                }
            }
        }

        if segments.is_empty() {
            return Err(PatternError::EmptyPattern);
        }
        Ok(Pattern::new(segments))
    }

    /// Render as an anchored regex source with every literal escaped.
    #[must_use]
    pub fn to_regex_source(&self) -> String {
        let mut out = String::from("^");
        for seg in &self.segments {
            match seg {
                Segment::Literal(s) => out.push_str(&fancy_regex::escape(s)),
                Segment::AnyLetter => out.push('.'),
                Segment::AnyRun => out.push_str(".*"),
            }
        }
        out.push('$');
        out
    }

    /// Compile to a case-insensitive whole-word [`Matcher`].
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::RegexError`] if the regex engine rejects the
    /// rendered source (not expected, since literals are escaped).
    pub fn compile(&self) -> Result<Matcher, PatternError> {
        Matcher::from_anchored(self.to_regex_source())
    }

    /// Tile counts of all literal segments.
    #[must_use]
    pub fn literal_tiles(&self) -> HashMap<char, usize> {
        let mut counts = HashMap::new();
        for seg in &self.segments {
            if let Segment::Literal(s) = seg {
                for c in s.chars() {
                    *counts.entry(c).or_insert(0) += 1;
                }
            }
        }
        counts
    }

    /// Fewest tiles a matching word can have.
    #[must_use]
    pub fn min_len(&self) -> usize {
        self.segments
            .iter()
            .map(|seg| match seg {
                Segment::Literal(s) => s.chars().count(),
                Segment::AnyLetter => 1,
                Segment::AnyRun => 0,
            })
            .sum()
    }

    /// Most tiles a matching word can have, or `None` if unbounded.
    #[must_use]
    pub fn max_len(&self) -> Option<usize> {
        if self.segments.contains(&Segment::AnyRun) {
            None
        } else {
            Some(self.min_len())
        }
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::parse(s)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for seg in &self.segments {
            match seg {
                Segment::Literal(s) => f.write_str(s)?,
                Segment::AnyLetter => f.write_char('.')?,
                Segment::AnyRun => f.write_char('*')?,
            }
        }
        Ok(())
    }
}

// === Token parsers ===

fn any_run(input: &str) -> PResult<'_, Segment> {
    value(Segment::AnyRun, alt((tag(".*"), tag("*"), tag("-")))).parse(input)
}

fn any_letter(input: &str) -> PResult<'_, Segment> {
    value(Segment::AnyLetter, tag(".")).parse(input)
}

fn literal(input: &str) -> PResult<'_, Segment> {
    map(many1(none_of(SYNTAX_CHARS)), |chars: Vec<char>| {
        Segment::Literal(normalize_word(&chars.into_iter().collect::<String>()))
    })
    .parse(input)
}

fn anchor(input: &str) -> PResult<'_, &str> {
    alt((tag("^"), tag("$"))).parse(input)
}

fn anchor_misplaced(input: &str) -> PResult<'_, Segment> {
    let (_, found) = anchor(input)?;
    Err(nom::Err::Failure(Box::new(PatternError::InvalidInput {
        input: input.to_string(),
        reason: format!("anchor '{found}' is only allowed at the pattern edges"),
    })))
}

// '.*' must be tried before '.'
fn segment(input: &str) -> PResult<'_, Segment> {
    alt((any_run, any_letter, literal, anchor_misplaced)).parse(input)
}
