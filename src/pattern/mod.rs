pub mod compiler;
pub mod segment;
mod translation;

// Re-export the public API so call sites can use `ficha::pattern::*`.
pub use compiler::{convert_pattern_to_regex, Matcher};
pub use segment::{Pattern, Segment};
pub use translation::translate_hyphen_pattern;
