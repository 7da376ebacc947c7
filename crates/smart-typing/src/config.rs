//! Session configuration and setup-time validation.
//!
//! [`EngineConfig`] is the only long-lived value the engine carries. It is validated once
//! when the [`TypingEngine`](crate::TypingEngine) is built and is read-only afterwards;
//! per-keystroke code never reports configuration errors.

use std::collections::BTreeMap;

/// Configuration for a typing session.
///
/// The defaults mirror a conventional two-space editing surface: tabs and newline
/// indentation handled, and `( [ { < ' "` self-closing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// One level of indentation. Must be non-empty while `handle_tabs` is on.
    pub indent_unit: String,
    /// Intercept Tab / Shift+Tab. When off, the Tab key falls through to the surface.
    pub handle_tabs: bool,
    /// Intercept Enter and carry the current line's space run onto the new line.
    pub handle_new_line_indentation: bool,
    /// Opener characters that trigger pair insertion / wrapping / skip-through.
    pub self_closing_characters: Vec<char>,
    /// A read-only surface intercepts nothing.
    pub read_only: bool,
    pairs: BTreeMap<char, char>,
}

fn default_pairs() -> BTreeMap<char, char> {
    [
        ('(', ')'),
        ('[', ']'),
        ('{', '}'),
        ('<', '>'),
        ('\'', '\''),
        ('"', '"'),
    ]
    .into_iter()
    .collect()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            indent_unit: "  ".to_string(),
            handle_tabs: true,
            handle_new_line_indentation: true,
            self_closing_characters: vec!['(', '[', '{', '<', '\'', '"'],
            read_only: false,
            pairs: default_pairs(),
        }
    }
}

impl EngineConfig {
    /// Defaults with an indent unit of `tab_size` spaces.
    pub fn with_tab_size(tab_size: usize) -> Self {
        Self {
            indent_unit: " ".repeat(tab_size),
            ..Self::default()
        }
    }

    /// Override or add a bracket-table entry. A character paired with itself behaves as a
    /// quote (skip-through at a caret instead of unconditional pairing).
    pub fn set_pair(&mut self, opener: char, closer: char) {
        self.pairs.insert(opener, closer);
    }

    /// The closer paired with `opener`, if the bracket table maps it.
    pub fn closer_for(&self, opener: char) -> Option<char> {
        self.pairs.get(&opener).copied()
    }

    /// Returns `true` if `ch` is a configured self-closing opener.
    pub fn is_opener(&self, ch: char) -> bool {
        self.self_closing_characters.contains(&ch)
    }

    /// Returns `true` if `ch` closes one of the configured openers without opening
    /// anything itself (`) ] } >` under the default table; quotes are their own openers
    /// and therefore not pure closers).
    pub fn is_pure_closer(&self, ch: char) -> bool {
        !self.is_opener(ch)
            && self
                .self_closing_characters
                .iter()
                .any(|&opener| self.closer_for(opener) == Some(ch))
    }

    /// Returns `true` if the pairing engine should consider `ch` at all: it is a
    /// configured opener or the closer of one.
    pub fn intercepts_character(&self, ch: char) -> bool {
        self.is_opener(ch) || self.is_pure_closer(ch)
    }

    /// Indent unit length in chars.
    pub(crate) fn indent_unit_len(&self) -> usize {
        self.indent_unit.chars().count()
    }

    /// Check the configuration invariants.
    ///
    /// Returns the first violation found: an empty indent unit while tab handling is on,
    /// or a self-closing character with no bracket-table entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.handle_tabs && self.indent_unit.is_empty() {
            return Err(ConfigError::EmptyIndentUnit);
        }
        for &ch in &self.self_closing_characters {
            if !self.pairs.contains_key(&ch) {
                return Err(ConfigError::UnpairedCharacter(ch));
            }
        }
        Ok(())
    }
}

/// Setup-time configuration failures, reported once at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Tab handling is enabled but the indent unit is empty.
    EmptyIndentUnit,
    /// A self-closing character has no bracket-table entry.
    UnpairedCharacter(char),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyIndentUnit => {
                write!(f, "indent unit must be non-empty while tab handling is on")
            }
            ConfigError::UnpairedCharacter(ch) => {
                write!(
                    f,
                    "self-closing character {ch:?} has no bracket table entry"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
