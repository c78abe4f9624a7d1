// Library API shared by the CLI and the WASM build
pub mod collation;
pub mod errors;
pub mod hooks;
pub mod log;
pub mod pattern;
pub mod query;
pub mod rack;
pub mod score;
pub mod search;
pub mod spanish_char;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
