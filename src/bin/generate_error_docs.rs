//! Generate the error-code reference from the error enums themselves.
//!
//! Codes, descriptions and help text come straight from the `code()`,
//! `description()` and `help()` methods of `PatternError` and `LookupError`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use ficha::errors::{LookupError, PatternError};

/// Print one section per error, for any type with `code()`, `description()`,
/// `help()` and `display_detailed()`
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());

            if let Some(help_text) = error.help() {
                println!("**How to fix:** {help_text}\n");
            }

            println!("**Example:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");
        }
    };
}

fn all_pattern_error_variants() -> Vec<PatternError> {
    let regex_error = match fancy_regex::Regex::new("CA(SA") {
        Err(e) => PatternError::RegexError(e),
        Ok(_) => PatternError::EmptyPattern,
    };
    vec![
        regex_error,
        PatternError::EmptyPattern,
        PatternError::InvalidLength { input: "6a".to_string() },
        PatternError::RackTooLong { len: 16, max: 15 },
        PatternError::InvalidInput {
            input: "CA^SA".to_string(),
            reason: "anchor '^' is only allowed at the pattern edges".to_string(),
        },
        PatternError::NomError(nom::error::ErrorKind::Tag),
    ]
}

fn all_lookup_error_variants() -> Vec<LookupError> {
    vec![
        LookupError::Io {
            path: "palabras.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        },
        LookupError::Unavailable { reason: "connection refused".to_string() },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("This document is generated from the source. Do not edit it by hand.\n");

    println!("## Pattern Errors\n");
    println!("Raised while compiling a pattern or parsing a search or anagram query.\n");
    generate_error_docs!(all_pattern_error_variants());

    println!("## Lookup Errors\n");
    println!("Raised by the word list or another word-lookup backend.\n");
    generate_error_docs!(all_lookup_error_variants());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_is_documented_once() {
        let mut codes: Vec<&str> = all_pattern_error_variants().iter().map(PatternError::code).collect();
        codes.extend(all_lookup_error_variants().iter().map(LookupError::code));
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
        assert_eq!(codes, vec!["L001", "L002", "P001", "P002", "P003", "P004", "P005", "P006"]);
    }
}
