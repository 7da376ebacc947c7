//! Tab / Shift+Tab indentation engine.
//!
//! Two shapes of edit, chosen by the selection:
//!
//! - **Block**: a non-empty selection at least one indent unit long gets every line it
//!   touches indented or outdented, with the selection stretched or shrunk to keep
//!   covering the same text.
//! - **Line**: a caret (or a selection shorter than the unit) operates on the active
//!   line's leading run of whole indent units only.
//!
//! A handled Tab always intercepts the keystroke, even when the transform turns out to be
//! a no-op; otherwise the surface would insert a literal tab character.

use ropey::Rope;

use crate::config::EngineConfig;
use crate::engine::EditOutcome;
use crate::selection::{LineFacts, SelectionRange};
use crate::text;

/// Apply a Tab (`shift == false`) or Shift+Tab (`shift == true`) keystroke.
///
/// Returns `None` only when `config.handle_tabs` is off.
pub fn handle_tab(
    buffer: &Rope,
    selection: SelectionRange,
    config: &EngineConfig,
    shift: bool,
) -> Option<EditOutcome> {
    if !config.handle_tabs {
        return None;
    }
    let facts = LineFacts::derive(buffer, selection);
    let unit = config.indent_unit.as_str();
    let unit_len = config.indent_unit_len();

    let outcome = if !selection.is_caret() && selection.len() >= unit_len {
        if shift {
            outdent_block(buffer, selection, facts.line_start, unit, unit_len)
        } else {
            indent_block(buffer, selection, facts.line_start, unit, unit_len)
        }
    } else if shift {
        outdent_line(buffer, selection, facts.line_start, unit, unit_len)
    } else {
        indent_line(buffer, selection, facts.line_start, unit, unit_len)
    };
    Some(outcome)
}

/// Prepend one unit at the first line's head and after every newline inside the selection.
fn indent_block(
    buffer: &Rope,
    selection: SelectionRange,
    line_start: usize,
    unit: &str,
    unit_len: usize,
) -> EditOutcome {
    let selected = buffer.slice(selection.start..selection.end);
    let mut new_selected = String::with_capacity(selected.len_bytes() + unit.len() * 4);
    let mut newlines = 0;
    for ch in selected.chars() {
        new_selected.push(ch);
        if ch == '\n' {
            new_selected.push_str(unit);
            newlines += 1;
        }
    }

    let mut out = buffer.clone();
    out.remove(selection.start..selection.end);
    out.insert(selection.start, &new_selected);
    out.insert(line_start, unit);

    EditOutcome {
        buffer: out,
        selection: SelectionRange::new(
            selection.start + unit_len,
            selection.end + unit_len * (newlines + 1),
        ),
    }
}

/// Remove one unit from the first line's head and after every newline inside the
/// selection. No-op unless a whole unit sits at the line head, fully before the selection.
fn outdent_block(
    buffer: &Rope,
    selection: SelectionRange,
    line_start: usize,
    unit: &str,
    unit_len: usize,
) -> EditOutcome {
    if line_start + unit_len > selection.start || !text::matches_at(buffer, line_start, unit) {
        return EditOutcome {
            buffer: buffer.clone(),
            selection,
        };
    }

    let selected = buffer.slice(selection.start..selection.end);
    let chars: Vec<char> = selected.chars().collect();
    let unit_chars: Vec<char> = unit.chars().collect();
    let mut new_selected = String::with_capacity(selected.len_bytes());
    let mut new_len = 0;
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        new_selected.push(ch);
        new_len += 1;
        i += 1;
        // Drop one whole unit anchored right after each line break.
        if ch == '\n' && chars[i..].starts_with(&unit_chars) {
            i += unit_len;
        }
    }

    let mut out = buffer.clone();
    out.remove(selection.start..selection.end);
    out.insert(selection.start, &new_selected);
    out.remove(line_start..line_start + unit_len);

    // The selection end stays anchored at the pre-edit start offset, one unit past the
    // outdented text; clamp at the buffer end.
    let end = (selection.start + new_len).min(out.len_chars());
    EditOutcome {
        buffer: out,
        selection: SelectionRange::new(selection.start - unit_len, end),
    }
}

/// Insert one unit at the end of the active line's leading unit run.
fn indent_line(
    buffer: &Rope,
    selection: SelectionRange,
    line_start: usize,
    unit: &str,
    unit_len: usize,
) -> EditOutcome {
    let run = text::unit_run(buffer, line_start, unit, selection.start);
    let mut out = buffer.clone();
    out.insert(line_start + run * unit_len, unit);
    EditOutcome {
        buffer: out,
        selection: SelectionRange::caret(selection.start + unit_len),
    }
}

/// Remove the last unit of the active line's leading unit run, if there is one.
fn outdent_line(
    buffer: &Rope,
    selection: SelectionRange,
    line_start: usize,
    unit: &str,
    unit_len: usize,
) -> EditOutcome {
    let run = text::unit_run(buffer, line_start, unit, selection.start);
    if run == 0 {
        return EditOutcome {
            buffer: buffer.clone(),
            selection,
        };
    }
    let removal = line_start + (run - 1) * unit_len;
    let mut out = buffer.clone();
    out.remove(removal..removal + unit_len);
    EditOutcome {
        buffer: out,
        selection: SelectionRange::caret(selection.start - unit_len),
    }
}
