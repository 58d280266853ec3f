//! Syntax highlighting for QueryPad.
//!
//! Two strategies, selected by the grammar:
//!
//! - **Query**: a hand-rolled left-to-right scanner tokenizes the text and
//!   the renderer wraps classified tokens in markup. No regex engine is
//!   involved in scanning, so classifier priority is explicit rather than
//!   an artifact of pattern ordering.
//! - **Structured data**: no tokenization; four ordered substitution
//!   passes annotate keys, values, numbers, and literals after a colon.
//!
//! Both strategies escape markup-significant characters up front and emit
//! markup that is a strict, reversible annotation: stripping every
//! inserted tag reproduces the escaped input exactly.

use querypad_core::{Grammar, GrammarMode, Token};

mod escape;
mod render;
mod scanner;
mod substitution;

pub use escape::{escape_markup, strip_markup};
pub use render::{css_class, render_tokens};
pub use scanner::Scanner;
pub use substitution::highlight_structured;

/// Tokenize raw text under the given grammar's dictionaries.
///
/// Markup-significant characters are escaped before scanning, so the
/// returned tokens partition the *escaped* form of `text`. For text
/// containing none of `&`, `<`, `>` the escaped form is the text itself.
pub fn tokenize(text: &str, grammar: &Grammar) -> Vec<Token> {
    Scanner::new(escape_markup(text)).tokenize(grammar)
}

/// Tokenize text that has already been escaped (for example, the output
/// of [`strip_markup`]).
pub fn tokenize_escaped(escaped: impl Into<String>, grammar: &Grammar) -> Vec<Token> {
    Scanner::new(escaped).tokenize(grammar)
}

/// Render raw text to a markup string under the given grammar.
pub fn highlight(text: &str, grammar: &Grammar) -> String {
    match grammar.mode {
        GrammarMode::Query => render_tokens(&tokenize(text, grammar)),
        GrammarMode::StructuredData => highlight_structured(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use querypad_core::GrammarMode;

    fn query() -> &'static Grammar {
        Grammar::for_mode(GrammarMode::Query)
    }

    fn structured() -> &'static Grammar {
        Grammar::for_mode(GrammarMode::StructuredData)
    }

    #[test]
    fn test_strip_round_trip_query() {
        let text = "SELECT a, b FROM t WHERE a < 3 -- note";
        let markup = highlight(text, query());
        assert_eq!(strip_markup(&markup), escape_markup(text));
    }

    #[test]
    fn test_strip_round_trip_structured() {
        let text = "{\n  \"action\": \"run\",\n  \"limit\": 10,\n  \"dry\": true\n}";
        let markup = highlight(text, structured());
        assert_eq!(strip_markup(&markup), escape_markup(text));
    }

    #[test]
    fn test_tokenize_render_strip_retokenize_is_stable() {
        let text = "SELECT COUNT(*) FROM logs WHERE level < 'warn' /* all */";
        let tokens = tokenize(text, query());
        let stripped = strip_markup(&render_tokens(&tokens));
        assert_eq!(tokenize_escaped(stripped, query()), tokens);
    }
}
