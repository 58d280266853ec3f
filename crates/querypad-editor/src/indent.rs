//! Smart indent for line breaks.

/// One indent level, also inserted by the Tab key.
pub const INDENT_UNIT: &str = "  ";

/// Compute the indentation for a new line inserted at `cursor`.
///
/// The current line's leading run of spaces and tabs is copied verbatim.
/// When `bracket_indent` is set and the nearest non-whitespace character
/// strictly before the cursor is an opening bracket, one extra
/// [`INDENT_UNIT`] is appended.
///
/// This is a single-level heuristic: there is no bracket-depth stack and
/// closing brackets never decrease the indent, so deeply nested blocks
/// under-indent past the first level.
pub fn indent_for_newline(text: &str, cursor: usize, bracket_indent: bool) -> String {
    let mut cursor = cursor.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }

    let line_start = text[..cursor].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let mut indent: String = text[line_start..cursor]
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect();

    if bracket_indent {
        let last_non_ws = text[..cursor].trim_end().chars().next_back();
        if matches!(last_non_ws, Some('{') | Some('(') | Some('[')) {
            indent.push_str(INDENT_UNIT);
        }
    }
    indent
}
