//! The editing session and its input controller.
//!
//! `EditorSession` is the orchestrator: a two-mode state machine (Normal
//! and CompletionOpen, derived from whether the menu is open) that routes
//! every key event and keeps a fixed mutation order:
//!
//! 1. update the text
//! 2. reposition the cursor
//! 3. re-tokenize and re-render the markup
//! 4. re-evaluate the completion menu
//!
//! The rendered markup therefore never lags the authoritative text.

use querypad_completion::{
    apply_candidate, filter_candidates, query_dictionary, word_before_cursor,
};
use querypad_core::{Grammar, GrammarMode};
use querypad_syntax::highlight;
use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::indent::{INDENT_UNIT, indent_for_newline};
use crate::keys::Key;
use crate::state::EditorState;

/// The session's text at confirm time, tagged with its grammar mode so
/// the host knows which field to write it back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorResult {
    pub mode: GrammarMode,
    pub value: String,
}

/// Work the engine asks the host to perform. The engine itself never
/// touches the network, the clipboard, or window chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRequest {
    /// Persist the result and close the surface
    Confirm(EditorResult),
    /// Close the surface without saving
    Cancel,
    /// Put the given text on the clipboard, fire-and-forget
    CopyText(String),
}

/// What the engine did with a key event.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Handled; the host must suppress its default behavior
    Consumed,
    /// Not handled; the host applies its default behavior
    Ignored,
    /// Handled; the host should additionally perform the request
    Request(HostRequest),
}

/// One editable text surface with highlighting, completion, and smart
/// indent. Lives for the widget session; strictly single-threaded.
#[derive(Debug)]
pub struct EditorSession {
    state: EditorState,
    grammar: &'static Grammar,
    markup: String,
    read_only: bool,
}

impl EditorSession {
    pub fn new(config: &EditorConfig, initial_text: impl Into<String>) -> Self {
        let grammar = Grammar::for_mode(config.mode);
        let state = EditorState::new(initial_text);
        let markup = highlight(state.text(), grammar);
        tracing::debug!(mode = %config.mode, read_only = config.read_only, "editor session started");
        Self {
            state,
            grammar,
            markup,
            read_only: config.read_only,
        }
    }

    pub fn text(&self) -> &str {
        self.state.text()
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor()
    }

    /// The rendered markup for the current text.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn mode(&self) -> GrammarMode {
        self.grammar.mode
    }

    /// The current text tagged for persistence.
    pub fn result(&self) -> EditorResult {
        EditorResult {
            mode: self.grammar.mode,
            value: self.state.text().to_string(),
        }
    }

    /// A copy request for the host; the engine never blocks on the
    /// host completing it.
    pub fn copy_request(&self) -> HostRequest {
        HostRequest::CopyText(self.state.text().to_string())
    }

    /// Cursor-only movement reported by the host. Never re-evaluates
    /// completion: only text mutations do that.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        self.state.set_selection(start, end);
    }

    /// The host lost input focus. The host is expected to delay this call
    /// briefly so a pointer-driven candidate click can land first; once it
    /// arrives the menu closes unconditionally.
    pub fn focus_lost(&mut self) {
        self.state.menu.close();
    }

    /// Pointer-driven candidate selection from the host's menu widget.
    pub fn click_candidate(&mut self, index: usize) {
        if !self.state.menu.open {
            return;
        }
        if index < self.state.menu.candidates.len() {
            self.state.menu.active_index = index;
            self.accept_active();
        }
    }

    /// Route one key event. CompletionOpen handling runs first; a key the
    /// menu does not consume closes it and falls through to Normal mode.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if self.state.menu.open {
            match key {
                Key::Down => {
                    self.state.menu.select_next();
                    return KeyOutcome::Consumed;
                }
                Key::Up => {
                    self.state.menu.select_previous();
                    return KeyOutcome::Consumed;
                }
                Key::Enter | Key::Tab => {
                    self.accept_active();
                    return KeyOutcome::Consumed;
                }
                Key::Escape => {
                    self.state.menu.close();
                    return KeyOutcome::Consumed;
                }
                _ => self.state.menu.close(),
            }
        }

        match key {
            Key::Char(ch) => {
                if self.read_only {
                    return KeyOutcome::Ignored;
                }
                let mut buf = [0u8; 4];
                self.state.insert_at_cursor(ch.encode_utf8(&mut buf));
                self.after_mutation();
                KeyOutcome::Consumed
            }
            Key::Enter => {
                if self.read_only {
                    return KeyOutcome::Ignored;
                }
                self.insert_newline_with_indent();
                self.after_mutation();
                KeyOutcome::Consumed
            }
            Key::Tab => {
                if self.read_only {
                    return KeyOutcome::Ignored;
                }
                self.state.insert_at_cursor(INDENT_UNIT);
                self.after_mutation();
                KeyOutcome::Consumed
            }
            Key::Backspace => {
                if self.read_only {
                    return KeyOutcome::Ignored;
                }
                if self.state.delete_backward() {
                    self.after_mutation();
                }
                KeyOutcome::Consumed
            }
            Key::Up | Key::Down => KeyOutcome::Ignored,
            Key::Escape => KeyOutcome::Request(HostRequest::Cancel),
            Key::Submit => KeyOutcome::Request(HostRequest::Confirm(self.result())),
        }
    }

    /// Line break plus computed indent, cursor placed after the indent.
    fn insert_newline_with_indent(&mut self) {
        let (start, _) = self.state.selection();
        let indent = indent_for_newline(self.state.text(), start, self.grammar.bracket_indent());
        let mut insert = String::with_capacity(1 + indent.len());
        insert.push('\n');
        insert.push_str(&indent);
        self.state.insert_at_cursor(&insert);
    }

    /// Steps 3 and 4 of the mutation order: re-render, then re-evaluate
    /// the completion menu. Text and cursor were updated by the caller.
    fn after_mutation(&mut self) {
        self.markup = highlight(self.state.text(), self.grammar);
        self.refresh_completion();
    }

    /// Re-evaluate the menu against the word ending at the cursor. Runs
    /// after every text mutation and never on cursor-only movement.
    fn refresh_completion(&mut self) {
        if !self.grammar.completion_enabled() {
            self.state.menu.close();
            return;
        }
        let Some(span) = word_before_cursor(self.state.text(), self.state.cursor()) else {
            self.state.menu.close();
            return;
        };
        let candidates = filter_candidates(query_dictionary(), &span.word);
        if candidates.is_empty() {
            // Zero candidates is not an error; the surface just stays shut.
            self.state.menu.close();
        } else {
            self.state.menu.open_with(candidates, span.start);
        }
    }

    /// Apply the active candidate and return to Normal mode. The menu
    /// stays closed afterwards; only the next mutation may reopen it.
    fn accept_active(&mut self) {
        let Some(candidate) = self.state.menu.active().cloned() else {
            self.state.menu.close();
            return;
        };
        let word_start = self.state.menu.word_start;
        let (text, cursor) = apply_candidate(
            self.state.text(),
            word_start,
            self.state.cursor(),
            &candidate,
        );
        tracing::debug!(candidate = %candidate.display, "applied completion");
        self.state.set_text_and_cursor(text, cursor);
        self.state.menu.close();
        self.markup = highlight(self.state.text(), self.grammar);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn query_session(text: &str) -> EditorSession {
        EditorSession::new(&EditorConfig::query(), text)
    }

    fn type_str(session: &mut EditorSession, s: &str) {
        for ch in s.chars() {
            let _ = session.handle_key(Key::Char(ch));
        }
    }

    #[test]
    fn test_typing_opens_menu() {
        let mut session = query_session("");
        type_str(&mut session, "SEL");
        assert!(session.state().menu.open);
        assert!(
            session
                .state()
                .menu
                .candidates
                .iter()
                .any(|c| c.display == "SELECT")
        );
    }

    #[test]
    fn test_full_keyword_closes_menu() {
        let mut session = query_session("");
        type_str(&mut session, "SELECT");
        assert!(!session.state().menu.open, "no self-match for a full keyword");
    }

    #[test]
    fn test_tab_accepts_candidate() {
        let mut session = query_session("");
        type_str(&mut session, "SEL");
        let outcome = session.handle_key(Key::Tab);
        assert_eq!(outcome, KeyOutcome::Consumed);
        assert_eq!(session.text(), "SELECT");
        assert_eq!(session.cursor(), 6);
        assert!(!session.state().menu.open);
    }

    #[test]
    fn test_enter_accepts_candidate_instead_of_newline() {
        let mut session = query_session("");
        type_str(&mut session, "FRO");
        let _ = session.handle_key(Key::Enter);
        assert_eq!(session.text(), "FROM");
    }

    #[test]
    fn test_callable_accept_places_cursor_in_parens() {
        let mut session = query_session("");
        type_str(&mut session, "COUN");
        let _ = session.handle_key(Key::Tab);
        assert_eq!(session.text(), "COUNT()");
        assert_eq!(session.cursor(), 6);
    }

    #[test]
    fn test_arrow_keys_navigate_menu_with_wrap() {
        let mut session = query_session("");
        type_str(&mut session, "I");
        let len = session.state().menu.candidates.len();
        assert!(len > 1);
        assert_eq!(session.handle_key(Key::Up), KeyOutcome::Consumed);
        assert_eq!(session.state().menu.active_index, len - 1);
        assert_eq!(session.handle_key(Key::Down), KeyOutcome::Consumed);
        assert_eq!(session.state().menu.active_index, 0);
    }

    #[test]
    fn test_escape_closes_menu_without_cancel() {
        let mut session = query_session("");
        type_str(&mut session, "SEL");
        assert_eq!(session.handle_key(Key::Escape), KeyOutcome::Consumed);
        assert!(!session.state().menu.open);
        assert_eq!(session.text(), "SEL");
        // A second Escape, in Normal mode, asks the host to close.
        assert_eq!(
            session.handle_key(Key::Escape),
            KeyOutcome::Request(HostRequest::Cancel)
        );
    }

    #[test]
    fn test_backspace_falls_through_and_reevaluates() {
        let mut session = query_session("");
        type_str(&mut session, "SELE");
        assert!(session.state().menu.open);
        let _ = session.handle_key(Key::Backspace);
        assert_eq!(session.text(), "SEL");
        assert!(session.state().menu.open, "menu re-opens from the shorter word");
    }

    #[test]
    fn test_deleting_whole_word_closes_menu() {
        let mut session = query_session("");
        type_str(&mut session, "S");
        assert!(session.state().menu.open);
        let _ = session.handle_key(Key::Backspace);
        assert!(!session.state().menu.open);
    }

    #[test]
    fn test_enter_indents_under_bracket() {
        let mut session = query_session("");
        type_str(&mut session, "  WHERE (");
        let _ = session.handle_key(Key::Enter);
        assert_eq!(session.text(), "  WHERE (\n    ");
        assert_eq!(session.cursor(), session.text().len());
    }

    #[test]
    fn test_enter_inherits_plain_indent() {
        let mut session = query_session("");
        type_str(&mut session, "  WHERE x");
        let _ = session.handle_key(Key::Enter);
        assert!(session.text().ends_with("\n  "));
    }

    #[test]
    fn test_tab_inserts_indent_unit_when_menu_closed() {
        let mut session = query_session("x ");
        let _ = session.handle_key(Key::Tab);
        assert_eq!(session.text(), "x   ");
    }

    #[test]
    fn test_markup_tracks_every_mutation() {
        let mut session = query_session("");
        type_str(&mut session, "SELECT 1");
        assert!(session.markup().contains("<span class=\"sql-keyword\">SELECT</span>"));
        assert!(session.markup().contains("<span class=\"sql-number\">1</span>"));
    }

    #[test]
    fn test_cursor_only_movement_keeps_menu_state() {
        let mut session = query_session("");
        type_str(&mut session, "SEL");
        session.set_selection(1, 1);
        // No mutation happened, so the menu is untouched.
        assert!(session.state().menu.open);
    }

    #[test]
    fn test_structured_data_never_completes() {
        let mut session = EditorSession::new(&EditorConfig::structured_data(), "");
        type_str(&mut session, "tru");
        assert!(!session.state().menu.open);
    }

    #[test]
    fn test_structured_data_plain_indent_only() {
        let mut session = EditorSession::new(&EditorConfig::structured_data(), "");
        type_str(&mut session, "  \"a\": {");
        let _ = session.handle_key(Key::Enter);
        assert!(session.text().ends_with("\n  "), "no bracket indent: {:?}", session.text());
    }

    #[test]
    fn test_read_only_rejects_mutations() {
        let config = EditorConfig::query().read_only();
        let mut session = EditorSession::new(&config, "SELECT 1");
        assert_eq!(session.handle_key(Key::Char('x')), KeyOutcome::Ignored);
        assert_eq!(session.handle_key(Key::Backspace), KeyOutcome::Ignored);
        assert_eq!(session.handle_key(Key::Enter), KeyOutcome::Ignored);
        assert_eq!(session.text(), "SELECT 1");
        // Confirm and copy still work on a read-only surface.
        assert!(matches!(
            session.handle_key(Key::Submit),
            KeyOutcome::Request(HostRequest::Confirm(_))
        ));
    }

    #[test]
    fn test_submit_carries_mode_and_text() {
        let mut session = EditorSession::new(&EditorConfig::structured_data(), "{}");
        let outcome = session.handle_key(Key::Submit);
        assert_eq!(
            outcome,
            KeyOutcome::Request(HostRequest::Confirm(EditorResult {
                mode: GrammarMode::StructuredData,
                value: "{}".into(),
            }))
        );
    }

    #[test]
    fn test_click_candidate_applies_directly() {
        let mut session = query_session("");
        type_str(&mut session, "SEL");
        session.click_candidate(0);
        assert_eq!(session.text(), "SELECT");
        assert!(!session.state().menu.open);
    }

    #[test]
    fn test_focus_lost_closes_menu() {
        let mut session = query_session("");
        type_str(&mut session, "SEL");
        session.focus_lost();
        assert!(!session.state().menu.open);
    }

    #[test]
    fn test_copy_request_carries_text() {
        let session = query_session("SELECT 1");
        assert_eq!(
            session.copy_request(),
            HostRequest::CopyText("SELECT 1".into())
        );
    }

    #[test]
    fn test_mid_word_completion_replaces_prefix_only() {
        let mut session = query_session("WHERE x");
        session.set_selection(0, 0);
        // Cursor at start; type a fresh word before the existing text.
        // (Insertion happens at the cursor, mutation re-evaluates there.)
        let _ = session.handle_key(Key::Char('g'));
        let _ = session.handle_key(Key::Char('r'));
        assert!(session.state().menu.open);
        let _ = session.handle_key(Key::Tab);
        assert!(session.text().starts_with("GROUP"));
        assert!(session.text().ends_with("WHERE x"));
    }
}
