//! The key events the engine can intercept.

/// Platform modifier keys held during a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Control key held.
    pub ctrl: bool,
    /// Command / meta key held.
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
    };

    /// Returns `true` if a platform command modifier (ctrl or meta) is held.
    ///
    /// Self-closing characters typed with a command modifier are never intercepted, so
    /// shortcuts on those keys keep working.
    pub fn command_held(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A discrete input event as reported by the host surface.
///
/// One event maps to at most one engine: `Tab` to indentation, `Backspace` to the dedent
/// check, `Character` to bracket/quote pairing, `Enter` to newline indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// The Tab key, with or without Shift.
    Tab {
        /// Shift held: outdent instead of indent.
        shift: bool,
    },
    /// The Backspace key.
    Backspace,
    /// The Enter / Return key.
    Enter,
    /// A printable character, with any platform modifiers held.
    Character {
        /// The typed character.
        ch: char,
        /// Modifier keys held while typing it.
        modifiers: Modifiers,
    },
}

impl KeyEvent {
    /// Convenience constructor for a plain typed character with no modifiers.
    pub fn character(ch: char) -> Self {
        KeyEvent::Character {
            ch,
            modifiers: Modifiers::NONE,
        }
    }
}
