//! Newline indentation continuation engine.
//!
//! Pressing Enter inserts a line break plus a copy of the current line's leading space
//! run, so the new line continues at the same visual depth. The scan is over literal
//! spaces, not indent units: continuation mirrors the previous visual line no matter
//! whether its indentation came from tab handling or manual spacing.

use ropey::Rope;

use crate::config::EngineConfig;
use crate::engine::EditOutcome;
use crate::selection::{LineFacts, SelectionRange};
use crate::text;

/// Apply an Enter keystroke, replacing any active selection.
///
/// Returns `None` only when `config.handle_new_line_indentation` is off.
pub fn handle_enter(
    buffer: &Rope,
    selection: SelectionRange,
    config: &EngineConfig,
) -> Option<EditOutcome> {
    if !config.handle_new_line_indentation {
        return None;
    }
    let facts = LineFacts::derive(buffer, selection);
    // Scanned over the buffer, not just the text before the caret: a caret inside the
    // leading run still picks up the full run.
    let indent = text::space_run(buffer, facts.line_start);

    let mut inserted = String::with_capacity(indent + 1);
    inserted.push('\n');
    inserted.push_str(&" ".repeat(indent));

    let mut out = buffer.clone();
    out.remove(selection.start..selection.end);
    out.insert(selection.start, &inserted);

    Some(EditOutcome {
        buffer: out,
        selection: SelectionRange::caret(selection.start + indent + 1),
    })
}
