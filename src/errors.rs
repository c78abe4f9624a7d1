//! Error types with stable codes and help text.
//!
//! # Error Codes
//!
//! Pattern and query errors ([`PatternError`]):
//!
//! - P001: `RegexError` (Invalid matcher syntax)
//! - P002: `EmptyPattern` (Empty pattern or letter set)
//! - P003: `InvalidLength` (Length suffix is not a number)
//! - P004: `RackTooLong` (Too many rack letters)
//! - P005: `InvalidInput` (Unparseable pattern)
//! - P006: `NomError` (Low-level nom parser error)
//!
//! Word-lookup errors ([`LookupError`]):
//!
//! - L001: `Io` (Word list could not be read)
//! - L002: `Unavailable` (Lookup service unavailable)
//!
//! # Example
//!
//! ```
//! use ficha::errors::PatternError;
//! use ficha::pattern::convert_pattern_to_regex;
//!
//! match convert_pattern_to_regex("CA(SA") {
//!     Err(e) => {
//!         assert_eq!(e.code(), "P001");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use nom::error::{ErrorKind, ParseError as NomParseError};
use std::io;

/// Errors raised while compiling patterns or parsing search queries.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Invalid pattern syntax: {0}")]
    RegexError(#[from] fancy_regex::Error),

    #[error("Empty pattern")]
    EmptyPattern,

    #[error("Invalid length: \"{input}\"")]
    InvalidLength { input: String },

    #[error("Too many rack letters: {len} (max {max})")]
    RackTooLong { len: usize, max: usize },

    #[error("Invalid pattern \"{input}\": {reason}")]
    InvalidInput { input: String, reason: String },

    // nom parser error (lowest level)
    #[error("nom parser error: {0:?}")]
    NomError(ErrorKind),
}

impl From<fancy_regex::Error> for Box<PatternError> {
    fn from(e: fancy_regex::Error) -> Self {
        Box::new(PatternError::RegexError(e))
    }
}

impl<'a> NomParseError<&'a str> for Box<PatternError> {
    fn from_error_kind(_input: &'a str, kind: ErrorKind) -> Self {
        Box::new(PatternError::NomError(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl PatternError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PatternError::RegexError(_) => "P001",
            PatternError::EmptyPattern => "P002",
            PatternError::InvalidLength { .. } => "P003",
            PatternError::RackTooLong { .. } => "P004",
            PatternError::InvalidInput { .. } => "P005",
            PatternError::NomError(_) => "P006",
        }
    }

    /// Short description of the error kind
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PatternError::RegexError(_) => "Invalid matcher syntax",
            PatternError::EmptyPattern => "Empty pattern or letter set",
            PatternError::InvalidLength { .. } => "Length suffix is not a number",
            PatternError::RackTooLong { .. } => "Too many rack letters",
            PatternError::InvalidInput { .. } => "Unparseable pattern",
            PatternError::NomError(_) => "Low-level parser error",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PatternError::RegexError(_) => Some("Check for unbalanced brackets or parentheses, e.g. 'CA.A' instead of 'CA(A'"),
            PatternError::EmptyPattern => Some("Example: use 'CA.A', '-CION' or 'CASA:5,ERT?' instead of an empty string"),
            PatternError::InvalidLength { .. } => Some("The part after ':' must be a number, e.g. 'CA*:6'"),
            PatternError::RackTooLong { .. } => Some("A rack holds at most 15 tiles (CH, LL and RR count as one)"),
            PatternError::InvalidInput { .. } => Some("Anchors '^' and '$' may only appear at the start and end of a pattern"),
            PatternError::NomError(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Failures of the word-lookup collaborator.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("failed to read word list from '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("word lookup unavailable: {reason}")]
    Unavailable { reason: String },
}

impl LookupError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            LookupError::Io { .. } => "L001",
            LookupError::Unavailable { .. } => "L002",
        }
    }

    /// Short description of the error kind
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            LookupError::Io { .. } => "Word list could not be read",
            LookupError::Unavailable { .. } => "Lookup service unavailable",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LookupError::Io { .. } => Some("Pass an existing file with --word-list or set FICHA_WORD_LIST"),
            LookupError::Unavailable { .. } => Some("The lookup can be retried once the backing service is reachable"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pattern_errors() -> Vec<PatternError> {
        vec![
            PatternError::RegexError(fancy_regex::Regex::new("(").unwrap_err()),
            PatternError::EmptyPattern,
            PatternError::InvalidLength { input: "x".to_string() },
            PatternError::RackTooLong { len: 16, max: 15 },
            PatternError::InvalidInput { input: "C^A".to_string(), reason: "misplaced anchor".to_string() },
            PatternError::NomError(ErrorKind::Tag),
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = PatternError::EmptyPattern;
        assert_eq!(err.code(), "P002");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("P002"));
        assert!(detailed.contains("Example"));
    }

    /// Test that all `PatternError` variants have unique error codes
    #[test]
    fn test_all_pattern_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in sample_pattern_errors() {
            let code = err.code();
            assert!(code.starts_with('P'), "Error code '{}' should start with 'P'", code);
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }
        assert_eq!(codes.len(), 6);
    }

    /// Test that all error codes follow the format X0NN
    #[test]
    fn test_error_code_format() {
        let lookup = vec![
            LookupError::Io { path: "x".to_string(), source: io::Error::from(io::ErrorKind::NotFound) },
            LookupError::Unavailable { reason: "down".to_string() },
        ];
        let codes = sample_pattern_errors()
            .iter()
            .map(PatternError::code)
            .chain(lookup.iter().map(LookupError::code))
            .collect::<Vec<_>>();

        for code in codes {
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters", code);
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{}' should end with a number", code);
        }
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        for err in sample_pattern_errors() {
            let detailed = err.display_detailed();
            assert!(detailed.contains(err.code()));
            assert!(detailed.contains(&err.to_string()));
            if let Some(help) = err.help() {
                assert!(detailed.contains(help));
            }
        }
    }

    #[test]
    fn test_rack_too_long_message_has_values() {
        let err = PatternError::RackTooLong { len: 17, max: 15 };
        let detailed = err.display_detailed();
        assert!(detailed.contains("17") && detailed.contains("15"));
    }

    #[test]
    fn test_lookup_io_error_keeps_source() {
        use std::error::Error;
        let err = LookupError::Io {
            path: "/no/such/file".to_string(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.code(), "L001");
        assert!(err.to_string().contains("/no/such/file"));
        assert!(err.source().is_some());
    }
}
