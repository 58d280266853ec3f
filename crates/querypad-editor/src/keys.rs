//! Key events forwarded by the host.
//!
//! The host owns the real input stack; it forwards the keys the engine
//! cares about and applies its own default behavior for anything the
//! engine reports as ignored (caret movement, clipboard shortcuts, ...).

/// A discrete key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character
    Char(char),
    /// Line break; runs the indent engine in Normal mode
    Enter,
    /// Indent unit insertion, or completion accept while the menu is open
    Tab,
    Backspace,
    /// Completion selection up while the menu is open
    Up,
    /// Completion selection down while the menu is open
    Down,
    /// Completion cancel, or a cancel request toward the host
    Escape,
    /// Quick confirm (typically bound to Ctrl+Enter by the host)
    Submit,
}
