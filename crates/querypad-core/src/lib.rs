//! QueryPad Core - Shared types for the QueryPad editing engine
//!
//! This crate provides the fundamental types that the other QueryPad
//! crates depend on. It defines:
//!
//! - `Token` / `TokenKind` - classified spans produced by the tokenizer
//! - `Grammar` / `GrammarMode` - the editing mode and its dictionaries
//! - The static keyword and function lists for the query grammar
//! - The shared error type

mod error;
mod grammar;
mod token;

pub use error::*;
pub use grammar::*;
pub use token::*;
