//! Candidate filtering and application.

use crate::dictionary::{Candidate, Dictionary};

/// Upper bound on the candidate list shown to the user.
pub const MAX_CANDIDATES: usize = 10;

/// Filter the dictionary for the active word.
///
/// A candidate matches when its display text starts with the word,
/// compared case-insensitively, and is not exactly equal to it — a word
/// that is already a complete token gets no self-match. The result keeps
/// dictionary order and is capped at [`MAX_CANDIDATES`].
pub fn filter_candidates(dictionary: &Dictionary, word: &str) -> Vec<Candidate> {
    if word.is_empty() {
        return Vec::new();
    }
    let word = word.to_ascii_uppercase();
    let matches: Vec<Candidate> = dictionary
        .entries()
        .iter()
        .filter(|candidate| {
            let display = candidate.display.to_ascii_uppercase();
            display.starts_with(&word) && display != word
        })
        .take(MAX_CANDIDATES)
        .cloned()
        .collect();
    tracing::debug!(word = %word, count = matches.len(), "filtered completion candidates");
    matches
}

/// Apply a candidate to the text.
///
/// Replaces the half-open span `[word_start, cursor)` with the candidate's
/// display text and returns the new text plus the new cursor offset. For
/// callable candidates the cursor lands between the call delimiters
/// instead of after them.
pub fn apply_candidate(
    text: &str,
    word_start: usize,
    cursor: usize,
    candidate: &Candidate,
) -> (String, usize) {
    let cursor = cursor.min(text.len()).max(word_start);
    let mut out = String::with_capacity(text.len() + candidate.display.len());
    out.push_str(&text[..word_start]);
    out.push_str(&candidate.display);
    out.push_str(&text[cursor..]);

    let mut new_cursor = word_start + candidate.display.len();
    if candidate.is_callable() {
        new_cursor -= 1;
    }
    (out, new_cursor)
}
