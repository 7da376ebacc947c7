//! Bracket/quote pairing, wrapping, and skip-through engine.
//!
//! Decision table for a typed character `ch` with closer `closer`:
//!
//! | Condition | Action |
//! |---|---|
//! | `ch` is a pure closer | skip past an identical char at the caret, else defer |
//! | `ch` is a quote, caret only | skip past an identical next char, else open a pair |
//! | `ch` is an opener | wrap the selection: `ch` + selected + `closer`, caret before the closer |
//!
//! "Pure closer" means a character that closes a configured opener without opening
//! anything itself; quotes pair with themselves and take the quote branch instead.
//! Characters typed with a command modifier held are never intercepted.

use ropey::Rope;

use crate::config::EngineConfig;
use crate::engine::EditOutcome;
use crate::key::Modifiers;
use crate::selection::{self, SelectionRange};

/// Apply a typed self-closing character.
///
/// Returns `None` when the character is outside the configured set, a command modifier
/// is held, or a closer finds no identical character at the caret to skip past; the
/// surface then inserts the character natively.
pub fn handle_character(
    buffer: &Rope,
    selection: SelectionRange,
    ch: char,
    modifiers: Modifiers,
    config: &EngineConfig,
) -> Option<EditOutcome> {
    selection::validate(buffer, selection);
    if modifiers.command_held() || !config.intercepts_character(ch) {
        return None;
    }

    if config.is_pure_closer(ch) {
        return skip_past(buffer, selection, ch);
    }

    let closer = config.closer_for(ch)?;
    if ch == closer && selection.is_caret() {
        // A quote at a caret types through an existing identical quote, avoiding a
        // doubled quote; with nothing to skip it opens a fresh pair.
        return skip_past(buffer, selection, ch).or_else(|| {
            let mut pair = String::new();
            pair.push(ch);
            pair.push(closer);
            let mut out = buffer.clone();
            out.insert(selection.start, &pair);
            Some(EditOutcome {
                buffer: out,
                selection: SelectionRange::caret(selection.start + 1),
            })
        });
    }

    // Wrap: opener, then the (possibly empty) selected text, then the closer. Inserting
    // the closer first keeps the start offset valid for the opener insert.
    let mut out = buffer.clone();
    out.insert_char(selection.end, closer);
    out.insert_char(selection.start, ch);
    Some(EditOutcome {
        buffer: out,
        selection: SelectionRange::caret(selection.end + 1),
    })
}

/// Move the caret past the char at the selection end if it equals `ch`.
fn skip_past(buffer: &Rope, selection: SelectionRange, ch: char) -> Option<EditOutcome> {
    if buffer.get_char(selection.end) == Some(ch) {
        Some(EditOutcome {
            buffer: buffer.clone(),
            selection: SelectionRange::caret(selection.end + 1),
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(text: &str, selection: SelectionRange, ch: char) -> Option<EditOutcome> {
        let buffer = Rope::from_str(text);
        handle_character(
            &buffer,
            selection,
            ch,
            Modifiers::NONE,
            &EngineConfig::default(),
        )
    }

    #[test]
    fn test_opener_at_caret_opens_pair() {
        let outcome = apply("ab", SelectionRange::caret(1), '{').unwrap();
        assert_eq!(outcome.buffer, "a{}b");
        assert_eq!(outcome.selection, SelectionRange::caret(2));
    }

    #[test]
    fn test_closer_defers_without_match() {
        assert!(apply("ab", SelectionRange::caret(1), ')').is_none());
    }

    #[test]
    fn test_command_modifier_defers() {
        let buffer = Rope::from_str("ab");
        for modifiers in [
            Modifiers {
                ctrl: true,
                meta: false,
            },
            Modifiers {
                ctrl: false,
                meta: true,
            },
        ] {
            let outcome = handle_character(
                &buffer,
                SelectionRange::caret(0),
                '(',
                modifiers,
                &EngineConfig::default(),
            );
            assert!(outcome.is_none());
        }
    }

    #[test]
    fn test_unconfigured_character_defers() {
        assert!(apply("ab", SelectionRange::caret(0), 'x').is_none());
        assert!(apply("ab", SelectionRange::caret(0), '`').is_none());
    }
}
