//! Word-level view of raw SQL text.
//!
//! This module groups the building blocks used to point at a word inside a
//! query without a full parse. Hover lookups and diagnostic positioning both
//! go through it, so the two always agree on what "the word at an offset" is.
//!
//! Modules:
//! - `keyword` : MySQL keyword list and membership test.
//! - `word`    : Word struct pairing matched text with its byte span.
//! - `locator` : Word grammar, offset lookup and whole-word search.
//!
//! Example:
//! ```rust
//! use sqlsense::prelude::*;
//!
//! let word = locate(16, "sql`SELECT * FRO`").unwrap();
//! assert_eq!(word.text, "FRO");
//! assert_eq!(word.span(), (13, 16));
//! assert!(is_keyword("select"));
//! ```
//!
//! NOTE: the grammar knows nothing about string literals or comments; a word
//! inside `'quoted text'` is located like any other.

pub mod keyword;
pub mod locator;
pub mod word;

pub use keyword::{KEYWORDS, is_keyword};
pub use locator::{byte_offset, first_whole_word, first_whole_word_ignore_case, locate, words};
pub use word::Word;

/// Convenience prelude re-exporting the most commonly used items.
pub mod prelude {
    pub use super::{Word, is_keyword, locate, words};
}
