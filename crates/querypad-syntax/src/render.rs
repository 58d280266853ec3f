//! Markup renderer for token streams.

use querypad_core::{Token, TokenKind};

/// CSS class for a token kind, or `None` for plain text.
pub fn css_class(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Keyword => Some("sql-keyword"),
        TokenKind::Function => Some("sql-function"),
        TokenKind::Str => Some("sql-string"),
        TokenKind::Comment => Some("sql-comment"),
        TokenKind::Number => Some("sql-number"),
        TokenKind::Plain => None,
    }
}

/// Render a token stream to markup.
///
/// Token text passes through byte-for-byte; classified tokens are wrapped
/// in a `<span>` carrying their CSS class. Because tokens partition their
/// input, stripping the spans recovers it exactly.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match css_class(token.kind) {
            Some(class) => {
                out.push_str("<span class=\"");
                out.push_str(class);
                out.push_str("\">");
                out.push_str(&token.text);
                out.push_str("</span>");
            }
            None => out.push_str(&token.text),
        }
    }
    out
}
