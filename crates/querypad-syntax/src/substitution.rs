//! Substitution-based highlighter for the structured-data grammar.
//!
//! Instead of tokenizing, four substitution passes run in a fixed order
//! over the escaped text:
//!
//! 1. quoted keys immediately before a colon
//! 2. quoted values after a colon
//! 3. numeric values after a colon
//! 4. `true` / `false` / `null` after a colon (case-insensitive)
//!
//! Each pattern is scoped by the surrounding punctuation (a required
//! colon) so no later pass can match the tags inserted by an earlier one.
//! Whitespace around the colon is captured and re-emitted untouched, so
//! stripping the inserted tags recovers the escaped input exactly.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::escape::escape_markup;

static KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]+)"(\s*:)"#).expect("key pattern"));
static STRING_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(:\s*)"([^"]*)""#).expect("string value pattern"));
static NUMBER_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(:\s*)(\d+\.?\d*)").expect("number value pattern"));
static LITERAL_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(:\s*)((?i:true|false|null))\b").expect("literal value pattern"));

/// Highlight structured-data text.
///
/// This only annotates syntax patterns; it never validates that the text
/// is well-formed structured data.
pub fn highlight_structured(text: &str) -> String {
    let escaped = escape_markup(text);
    let pass1 = KEY.replace_all(&escaped, "<span class=\"sql-function\">\"$1\"</span>$2");
    let pass2 = STRING_VALUE.replace_all(&pass1, "$1<span class=\"sql-string\">\"$2\"</span>");
    let pass3 = NUMBER_VALUE.replace_all(&pass2, "$1<span class=\"sql-number\">$2</span>");
    let pass4 = LITERAL_VALUE.replace_all(&pass3, "$1<span class=\"sql-keyword\">$2</span>");
    pass4.into_owned()
}
