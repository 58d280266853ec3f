//! Markup escaping and stripping.
//!
//! The renderer's output is HTML-shaped markup, so the source text must be
//! made injection-safe before any scanning or substitution happens. Only
//! `&`, `<`, and `>` are escaped; quotes stay as-is because the markup
//! never places source text inside an attribute.

use once_cell::sync::Lazy;
use regex::Regex;

/// Escape markup-significant characters.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

static SPAN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?span[^>]*>").expect("span tag pattern is valid"));

/// Remove every inserted `<span>` annotation, recovering the escaped text.
///
/// This is the inverse of rendering: for any input,
/// `strip_markup(&highlight(text, grammar)) == escape_markup(text)`.
pub fn strip_markup(markup: &str) -> String {
    SPAN_TAG.replace_all(markup, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_markup("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_markup("plain"), "plain");
    }

    #[test]
    fn test_strip_markup_removes_only_tags() {
        let markup = "<span class=\"sql-keyword\">SELECT</span> x";
        assert_eq!(strip_markup(markup), "SELECT x");
    }

    #[test]
    fn test_strip_markup_keeps_escaped_entities() {
        let markup = "<span class=\"sql-string\">'a &lt; b'</span>";
        assert_eq!(strip_markup(markup), "'a &lt; b'");
    }
}
