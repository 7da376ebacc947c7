//! Whitespace-unit backspace dedent engine.
//!
//! Backspacing at the head of a whitespace-only line collapses one two-space unit
//! instead of a single character. The two-space unit is fixed, independent of the
//! configured indent unit; a surface indented differently falls through to native
//! backspace more often.

use ropey::Rope;

use crate::engine::EditOutcome;
use crate::selection::{self, SelectionRange};

/// Apply a Backspace keystroke.
///
/// Applies only when the selection is a caret and the text before it is a `'\n'`
/// followed by an even, non-zero run of spaces reaching the caret. Removes exactly the
/// last two spaces. Returns `None` otherwise, deferring to the surface's native
/// single-character backspace.
pub fn handle_backspace(buffer: &Rope, selection: SelectionRange) -> Option<EditOutcome> {
    selection::validate(buffer, selection);
    if !selection.is_caret() {
        return None;
    }
    let caret = selection.start;

    let mut iter = buffer.chars_at(caret);
    let mut spaces = 0usize;
    let hit_newline = loop {
        match iter.prev() {
            Some(' ') => spaces += 1,
            Some('\n') => break true,
            _ => break false,
        }
    };
    if !hit_newline || spaces < 2 || spaces % 2 != 0 {
        return None;
    }

    let mut out = buffer.clone();
    out.remove(caret - 2..caret);
    Some(EditOutcome {
        buffer: out,
        selection: SelectionRange::caret(caret - 2),
    })
}
