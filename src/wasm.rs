use wasm_bindgen::prelude::*;

use crate::collation::sort_spanish_letters;
use crate::errors::PatternError;
use crate::hooks::{hooks, Hooks};
use crate::log::init_logger;
use crate::pattern::{convert_pattern_to_regex, translate_hyphen_pattern};
use crate::query::{clean_anagram_input, clean_pattern_input};
use crate::search::{find_anagrams, find_pattern_matches, AnagramOptions, AnagramResults, SearchOptions};
use crate::word_list::WordList;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "P002", "WASM001")
    code: String,
    message: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<PatternError> for WasmError {
    fn from(e: PatternError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);
        if let Some(help) = e.help {
            msg.push_str("\n\nSuggestion: ");
            msg.push_str(&help);
        }
        js_sys::Error::new(&msg).into()
    }
}

fn words_from_js(words: JsValue) -> Result<WordList, WasmError> {
    let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("words must be string[]: {e}"),
        description: "Invalid word-list format".to_string(),
        help: Some("Pass an array of strings, e.g. ['casa', 'chorro']".to_string()),
    })?;
    Ok(WordList::from_words(words))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        WasmError {
            code: "WASM002".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize result".to_string(),
            help: None,
        }
        .into()
    })
}

#[derive(serde::Serialize)]
struct WasmAnagramResults {
    exact: Vec<String>,
    with_blanks: Vec<String>,
    shorter: Vec<String>,
}

impl From<AnagramResults> for WasmAnagramResults {
    fn from(r: AnagramResults) -> Self {
        WasmAnagramResults { exact: r.exact, with_blanks: r.with_blanks, shorter: r.shorter }
    }
}

#[derive(serde::Serialize)]
struct WasmHooks {
    left_external: Vec<String>,
    right_external: Vec<String>,
    left_internal: bool,
    right_internal: bool,
}

impl From<Hooks> for WasmHooks {
    fn from(h: Hooks) -> Self {
        WasmHooks {
            left_external: h.left_external,
            right_external: h.right_external,
            left_internal: h.left_internal,
            right_internal: h.right_internal,
        }
    }
}

/// Set up the panic hook and logging. Call once after the module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("ficha WASM module initialized");
}

#[wasm_bindgen]
pub fn sort_spanish_letters_wasm(input: &str) -> String {
    sort_spanish_letters(input)
}

/// Does `word` match `pattern` (raw matcher syntax, hyphen shorthand allowed)?
#[wasm_bindgen]
pub fn pattern_matches_wasm(pattern: &str, word: &str) -> Result<bool, JsValue> {
    let matcher = convert_pattern_to_regex(&translate_hyphen_pattern(pattern)).map_err(WasmError::from)?;
    Ok(matcher.test(word))
}

/// JS entry: (query: string, words: string[], show_longer: boolean) -> string[]
#[wasm_bindgen]
pub fn search_wasm(query: &str, words: JsValue, show_longer: bool) -> Result<JsValue, JsValue> {
    let words = words_from_js(words)?;
    let options = SearchOptions { show_longer, ..SearchOptions::default() };
    let found = find_pattern_matches(&clean_pattern_input(query), &words, &options).map_err(WasmError::from)?;
    to_js(&found)
}

/// JS entry: (query: string, words: string[], include_shorter: boolean)
/// -> { exact, with_blanks, shorter }
#[wasm_bindgen]
pub fn anagram_wasm(query: &str, words: JsValue, include_shorter: bool) -> Result<JsValue, JsValue> {
    let words = words_from_js(words)?;
    let options = AnagramOptions { include_shorter, ..AnagramOptions::default() };
    let results = find_anagrams(&clean_anagram_input(query), &words, &options).map_err(WasmError::from)?;
    to_js(&WasmAnagramResults::from(results))
}

/// JS entry: (word: string, words: string[])
/// -> { left_external, right_external, left_internal, right_internal }
#[wasm_bindgen]
pub fn hooks_wasm(word: &str, words: JsValue) -> Result<JsValue, JsValue> {
    let words = words_from_js(words)?;
    to_js(&WasmHooks::from(hooks(word, &words)))
}
