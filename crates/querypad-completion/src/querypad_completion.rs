//! Autocompletion engine for QueryPad.
//!
//! Three pieces, used in order by the input controller:
//!
//! - the word-boundary resolver finds the identifier span ending at the
//!   cursor
//! - the dictionary holds every candidate, built once from the grammar's
//!   static keyword and function lists
//! - the filter returns the dictionary-ordered candidates for a word
//!
//! Ranking is deliberately simple: dictionary order, keywords before
//! functions, capped at ten entries. No frequency tracking, no fuzzy
//! scoring.

mod dictionary;
mod engine;
mod word;

pub use dictionary::{CALL_MARKER, Candidate, CandidateKind, Dictionary, query_dictionary};
pub use engine::{MAX_CANDIDATES, apply_candidate, filter_candidates};
pub use word::{WordSpan, word_before_cursor};
