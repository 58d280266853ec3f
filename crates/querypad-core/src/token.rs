//! Token types produced by the query tokenizer.

use serde::{Deserialize, Serialize};

/// Classification of a token in the query grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Query keywords (SELECT, FROM, WHERE, ...)
    Keyword,
    /// Built-in functions (COUNT, SUM, ...)
    Function,
    /// String literals, single or double quoted
    Str,
    /// Line and block comments
    Comment,
    /// Numeric literals
    Number,
    /// Everything else: identifiers, operators, whitespace, punctuation
    Plain,
}

/// A classified, contiguous span of source text.
///
/// The ordered token list produced by the tokenizer exactly partitions its
/// input: no gaps, no overlaps, and concatenating `text` in emitted order
/// reproduces the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Byte offset of the first character of the span
    pub start: usize,
    /// Byte offset one past the last character of the span
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let end = start + text.len();
        Self {
            kind,
            text,
            start,
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
