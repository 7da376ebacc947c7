//! The fixed-priority keystroke router.
//!
//! One engine owns each key: tab handling, backspace dedent, bracket/quote pairing,
//! newline indentation, checked in that order. Each engine first checks applicability and
//! declines with `None` otherwise, so at most one transform is applied per keystroke and
//! engines never compose within one event.

use ropey::Rope;

use crate::config::{ConfigError, EngineConfig};
use crate::key::KeyEvent;
use crate::selection::SelectionRange;
use crate::{backspace, indent, newline, pairing};

/// Result of an intercepted keystroke: the replacement buffer and selection, to be
/// committed to the surface atomically.
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    /// The replacement buffer.
    pub buffer: Rope,
    /// The replacement selection (a caret when collapsed).
    pub selection: SelectionRange,
}

impl EditOutcome {
    /// The replacement buffer as an owned string, for hosts that store plain text.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }
}

/// Stateless keystroke transformer for one editing session.
///
/// Holds the session's [`EngineConfig`], which is validated at construction and
/// immutable afterwards. All methods are pure over their inputs; the engine retains
/// nothing across calls.
#[derive(Debug, Clone)]
pub struct TypingEngine {
    config: EngineConfig,
}

impl TypingEngine {
    /// Build an engine, validating the configuration once up front.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build an engine with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Transform one keystroke.
    ///
    /// Returns the replacement buffer and selection, or `None` meaning "do not
    /// intercept; defer to the surface's native behavior". A read-only session
    /// intercepts nothing.
    ///
    /// # Panics
    ///
    /// Panics if `selection` does not satisfy `start <= end <= buffer.len_chars()`;
    /// malformed ranges are a caller bug that must not be masked by clamping.
    pub fn handle(
        &self,
        buffer: &Rope,
        selection: SelectionRange,
        event: &KeyEvent,
    ) -> Option<EditOutcome> {
        if self.config.read_only {
            return None;
        }
        match *event {
            KeyEvent::Tab { shift } => indent::handle_tab(buffer, selection, &self.config, shift),
            KeyEvent::Backspace => backspace::handle_backspace(buffer, selection),
            KeyEvent::Character { ch, modifiers } => {
                pairing::handle_character(buffer, selection, ch, modifiers, &self.config)
            }
            KeyEvent::Enter => newline::handle_enter(buffer, selection, &self.config),
        }
    }

    /// [`TypingEngine::handle`] for hosts that store plain strings, such as a textarea
    /// adapter. Offsets are still char offsets.
    pub fn handle_str(
        &self,
        text: &str,
        selection: SelectionRange,
        event: &KeyEvent,
    ) -> Option<(String, SelectionRange)> {
        let buffer = Rope::from_str(text);
        self.handle(&buffer, selection, event)
            .map(|outcome| (outcome.text(), outcome.selection))
    }
}
