//! Word-boundary resolution relative to the cursor.

/// The identifier-like span ending exactly at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpan {
    /// The spanned text, upper-cased for dictionary comparison
    pub word: String,
    /// Byte offset where the span starts
    pub start: usize,
    /// Byte offset where the span ends (the cursor)
    pub end: usize,
}

/// Resolve the word ending at `cursor`.
///
/// Walks backward while the preceding character is an ASCII letter or
/// underscore. Digits stop the walk: `tbl2` with the cursor after `2`
/// has no active word, because the scan cannot cross the digit. An empty
/// span yields `None`, which callers treat as "completion not applicable".
pub fn word_before_cursor(text: &str, cursor: usize) -> Option<WordSpan> {
    let mut cursor = cursor.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }

    let mut start = cursor;
    for (idx, ch) in text[..cursor].char_indices().rev() {
        if ch.is_ascii_alphabetic() || ch == '_' {
            start = idx;
        } else {
            break;
        }
    }

    if start == cursor {
        return None;
    }
    Some(WordSpan {
        word: text[start..cursor].to_ascii_uppercase(),
        start,
        end: cursor,
    })
}
