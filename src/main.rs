use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};

use ficha::collation::sort_spanish_letters;
use ficha::errors::{LookupError, PatternError};
use ficha::hooks::hooks;
use ficha::pattern::{convert_pattern_to_regex, translate_hyphen_pattern, Pattern};
use ficha::query::{clean_anagram_input, clean_pattern_input};
use ficha::score::word_score;
use ficha::search::{
    find_anagrams, find_pattern_matches, AnagramOptions, SearchOptions, DEFAULT_MAX_LENGTH,
    DEFAULT_MIN_ANAGRAM_LENGTH,
};
use ficha::spanish_char::{normalize_word, to_display};
use ficha::word_list::{probe_word_count, WordList, WordLookup};

/// Spanish word-game toolkit
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Word list file, one word per line (anything after ';' or ',' is ignored)
    #[arg(short, long, env = "FICHA_WORD_LIST", global = true)]
    word_list: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sort letters by the Spanish tile alphabet
    Sort { letters: String },

    /// Print the words that match a pattern
    Match {
        /// e.g. "C.SA", "-CION", "^CA.*$"
        pattern: String,
        words: Vec<String>,
        /// Parse the pattern as typed segments (literals escaped) instead of raw matcher syntax
        #[arg(long)]
        typed: bool,
    },

    /// Search the word list with PATTERN[:LENGTH][,RACK]
    Search {
        query: String,
        /// Show only words longer than --max-len
        #[arg(long)]
        longer: bool,
        #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
        max_len: usize,
    },

    /// Find anagrams of LETTERS[:LENGTH] ('?' is a blank)
    Anagram {
        query: String,
        /// Also list shorter words
        #[arg(long)]
        shorter: bool,
        #[arg(long, default_value_t = DEFAULT_MIN_ANAGRAM_LENGTH)]
        min_len: usize,
    },

    /// Check whether a word is in the word list
    Check { word: String },

    /// Score a word; with --search, letters the search covered with '?' score 0
    Score {
        word: String,
        #[arg(long)]
        search: Option<String>,
    },

    /// Show the tiles that hook onto a word at either end
    Hooks { word: String },

    /// Count the words in the word list
    Count,
}

/// Entry point of the ficha CLI.
///
/// Delegates to [`try_main`] and prints any error (with its code and help
/// text when it has one) before exiting with code 1.
fn main() -> ExitCode {
    let debug_value = std::env::var(ficha::log::DEBUG_ENV).ok();
    ficha::log::init_logger(ficha::log::debug_requested(debug_value.as_deref()));

    if let Err(e) = try_main() {
        if let Some(pe) = e.downcast_ref::<PatternError>() {
            eprintln!("Error: {}", pe.display_detailed());
        } else if let Some(le) = e.downcast_ref::<LookupError>() {
            eprintln!("Error: {}", le.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn load_words(path: Option<&str>) -> Result<WordList, Box<dyn std::error::Error>> {
    let path = path.ok_or("no word list given; pass --word-list or set FICHA_WORD_LIST")?;
    let t_load = Instant::now();
    let words = WordList::load_from_path(path)?;
    log::debug!("loaded {} words in {:.3}s", words.len(), t_load.elapsed().as_secs_f64());
    Ok(words)
}

fn print_section(title: &str, words: &[String]) {
    if words.is_empty() {
        return;
    }
    println!("{title} ({}):", words.len());
    for w in words {
        println!("  {w}");
    }
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let word_list = cli.word_list.as_deref();

    match cli.command {
        Command::Sort { letters } => {
            println!("{}", sort_spanish_letters(&letters));
        }

        Command::Match { pattern, words, typed } => {
            if typed {
                let matcher = Pattern::parse(&pattern)?.compile()?;
                log::debug!("typed matcher {matcher}");
                for w in words.iter().filter(|w| matcher.test_word(w)) {
                    println!("{w}");
                }
            } else {
                let matcher = convert_pattern_to_regex(&translate_hyphen_pattern(&pattern))?;
                log::debug!("raw matcher {matcher}");
                for w in words.iter().filter(|w| matcher.test(w)) {
                    println!("{w}");
                }
            }
        }

        Command::Search { query, longer, max_len } => {
            let words = load_words(word_list)?;
            let options = SearchOptions { max_default_length: max_len, show_longer: longer };
            let found = find_pattern_matches(&clean_pattern_input(&query), &words, &options)?;
            for w in &found {
                println!("{w}");
            }
            eprintln!("{} matches", found.len());
        }

        Command::Anagram { query, shorter, min_len } => {
            let words = load_words(word_list)?;
            let options = AnagramOptions { include_shorter: shorter, min_length: min_len };
            let results = find_anagrams(&clean_anagram_input(&query), &words, &options)?;
            print_section("Exact", &results.exact);
            print_section("With blanks", &results.with_blanks);
            print_section("Shorter", &results.shorter);
            if results.is_empty() {
                eprintln!("no anagrams found");
            }
        }

        Command::Check { word } => {
            let words = load_words(word_list)?;
            let lookup: &dyn WordLookup = &words;
            let verdict = if lookup.lookup(&word)? { "valid" } else { "not valid" };
            println!("{}: {verdict}", word.trim().to_uppercase());
        }

        Command::Score { word, search } => {
            let score = word_score(&word, search.as_deref());
            println!("{}: {score}", to_display(&normalize_word(&word)));
        }

        Command::Hooks { word } => {
            let words = load_words(word_list)?;
            let h = hooks(&word, &words);
            println!(
                "{} {} {}",
                h.left_external.join(""),
                to_display(&normalize_word(&word)),
                h.right_external.join("")
            );
            println!("without first tile: {}", if h.left_internal { "word" } else { "-" });
            println!("without last tile: {}", if h.right_internal { "word" } else { "-" });
        }

        Command::Count => {
            let words = load_words(word_list)?;
            println!("{}", probe_word_count(&words)?);
        }
    }

    Ok(())
}
