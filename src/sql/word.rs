//! Word model tying a matched word to its source span.
//!
//! A `Word` is what the word-locator hands back: the matched text plus byte
//! offsets (`start`, `end`) into the original query string. Offsets let
//! callers (hover, diagnostics) slice the original text without keeping a
//! parallel rewritten copy.
//!
//! See sibling modules:
//! - `locator.rs` for the word grammar and offset lookups.
//! - `keyword.rs` for the keyword list words are classified against.
use serde::Serialize;

/// A word with its inclusive start and exclusive end byte offsets.
///
/// Invariants:
/// - `end >= start`
/// - `[start, end)` is a valid slice range for the original input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Word {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Byte length of this word (`end - start`).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if `offset` lies within the word or touches either edge.
    ///
    /// NOTE: unlike a half-open range, `offset == end` counts, so a cursor
    /// placed right after the last character still hovers the word.
    pub fn encloses(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    pub fn is_keyword(&self) -> bool {
        crate::sql::keyword::is_keyword(&self.text)
    }
}
