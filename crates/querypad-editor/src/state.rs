//! Editor state: text, selection, and the completion menu.
//!
//! One `EditorState` lives for the whole widget session and is mutated
//! only by the input controller. Selection offsets are byte offsets into
//! the text, always clamped to `[0, len]` and snapped to char boundaries,
//! so slicing can never panic downstream.

use querypad_completion::Candidate;

/// The completion surface attached to the editor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionMenu {
    pub open: bool,
    pub candidates: Vec<Candidate>,
    pub active_index: usize,
    /// Start offset of the word the candidates would replace
    pub word_start: usize,
}

impl CompletionMenu {
    pub fn open_with(&mut self, candidates: Vec<Candidate>, word_start: usize) {
        self.open = true;
        self.candidates = candidates;
        self.active_index = 0;
        self.word_start = word_start;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Move the selection down, wrapping at the end.
    pub fn select_next(&mut self) {
        if !self.candidates.is_empty() {
            self.active_index = (self.active_index + 1) % self.candidates.len();
        }
    }

    /// Move the selection up, wrapping at the start.
    pub fn select_previous(&mut self) {
        if !self.candidates.is_empty() {
            self.active_index =
                (self.active_index + self.candidates.len() - 1) % self.candidates.len();
        }
    }

    pub fn active(&self) -> Option<&Candidate> {
        self.candidates.get(self.active_index)
    }
}

/// The editable text surface: text plus a selection range.
///
/// `selection_start == selection_end` is a plain cursor; otherwise the
/// half-open range `[selection_start, selection_end)` is selected and the
/// cursor sits at `selection_end`.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    text: String,
    selection_start: usize,
    selection_end: usize,
    pub menu: CompletionMenu,
}

impl EditorState {
    /// Create a state with the cursor at the end of the initial text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self {
            text,
            selection_start: end,
            selection_end: end,
            menu: CompletionMenu::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The cursor offset (the selection end).
    pub fn cursor(&self) -> usize {
        self.selection_end
    }

    pub fn selection(&self) -> (usize, usize) {
        (self.selection_start, self.selection_end)
    }

    pub fn has_selection(&self) -> bool {
        self.selection_start != self.selection_end
    }

    /// Set the selection range. Offsets are clamped into the text and
    /// snapped to char boundaries; a reversed range is normalized.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let start = self.snap(start);
        let end = self.snap(end);
        if start <= end {
            self.selection_start = start;
            self.selection_end = end;
        } else {
            self.selection_start = end;
            self.selection_end = start;
        }
    }

    pub fn set_cursor(&mut self, offset: usize) {
        let offset = self.snap(offset);
        self.selection_start = offset;
        self.selection_end = offset;
    }

    /// Replace the current selection (or insert at the cursor) and leave
    /// the cursor after the inserted text.
    pub fn insert_at_cursor(&mut self, insert: &str) {
        let (start, end) = (self.selection_start, self.selection_end);
        self.text.replace_range(start..end, insert);
        self.set_cursor(start + insert.len());
    }

    /// Delete the selection, or the character before the cursor.
    /// Returns false when there is nothing to delete.
    pub fn delete_backward(&mut self) -> bool {
        if self.has_selection() {
            let (start, end) = (self.selection_start, self.selection_end);
            self.text.replace_range(start..end, "");
            self.set_cursor(start);
            return true;
        }
        let end = self.selection_end;
        if end == 0 {
            return false;
        }
        let start = self.prev_char_boundary(end);
        self.text.replace_range(start..end, "");
        self.set_cursor(start);
        true
    }

    /// Wholesale replacement used by completion application: the new text
    /// and cursor were computed together and stay consistent.
    pub fn set_text_and_cursor(&mut self, text: String, cursor: usize) {
        self.text = text;
        self.set_cursor(cursor);
    }

    fn snap(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }

    fn prev_char_boundary(&self, offset: usize) -> usize {
        let mut offset = offset.saturating_sub(1);
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}
