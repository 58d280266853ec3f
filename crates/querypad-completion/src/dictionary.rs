//! The completion dictionary.
//!
//! Built once from the grammar's two disjoint static lists. Keywords come
//! first in author-defined order, then functions in author-defined order
//! with the empty-call marker appended. Candidates are never re-sorted.

use once_cell::sync::Lazy;
use querypad_core::{Grammar, GrammarMode};

/// Suffix marking a candidate as callable.
pub const CALL_MARKER: &str = "()";

/// Category label shown next to a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    Keyword,
    Function,
}

impl CandidateKind {
    pub fn label(&self) -> &'static str {
        match self {
            CandidateKind::Keyword => "keyword",
            CandidateKind::Function => "function",
        }
    }
}

/// A single completion suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Text shown and inserted, e.g. `SELECT` or `COUNT()`
    pub display: String,
    pub kind: CandidateKind,
}

impl Candidate {
    /// Callable candidates place the cursor between the call delimiters
    /// when applied.
    pub fn is_callable(&self) -> bool {
        self.display.ends_with(CALL_MARKER)
    }
}

/// An immutable, ordered candidate list for one grammar.
#[derive(Debug)]
pub struct Dictionary {
    entries: Vec<Candidate>,
}

impl Dictionary {
    pub fn build(grammar: &Grammar) -> Self {
        let mut entries =
            Vec::with_capacity(grammar.keywords.len() + grammar.functions.len());
        for keyword in grammar.keywords {
            entries.push(Candidate {
                display: (*keyword).to_string(),
                kind: CandidateKind::Keyword,
            });
        }
        for function in grammar.functions {
            entries.push(Candidate {
                display: format!("{function}{CALL_MARKER}"),
                kind: CandidateKind::Function,
            });
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[Candidate] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static QUERY_DICTIONARY: Lazy<Dictionary> =
    Lazy::new(|| Dictionary::build(Grammar::for_mode(GrammarMode::Query)));

/// The dictionary for the query grammar, built on first use.
pub fn query_dictionary() -> &'static Dictionary {
    &QUERY_DICTIONARY
}
