//! QueryPad editing session.
//!
//! This crate ties the engine together: it owns the single
//! [`EditorState`], routes key events through the two-mode input
//! controller, keeps the rendered markup in lockstep with the text, and
//! talks to the host through [`HostRequest`] values and the keyed
//! [`ValueStore`].
//!
//! Everything is synchronous and single-threaded: each key event runs to
//! completion before the next one, and every mutation re-tokenizes the
//! whole document. That is a deliberate trade-off for short interactive
//! documents; see the crate docs of `querypad-syntax`.

mod config;
mod indent;
mod keys;
mod session;
mod state;
mod storage;

pub use config::EditorConfig;
pub use indent::{INDENT_UNIT, indent_for_newline};
pub use keys::Key;
pub use session::{EditorResult, EditorSession, HostRequest, KeyOutcome};
pub use state::{CompletionMenu, EditorState};
pub use storage::{EDITOR_RESULT_KEY, StorageError, ValueStore};
