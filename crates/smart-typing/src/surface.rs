//! The host-surface seam.
//!
//! The engine never touches a live input surface. A host implements [`EditSurface`] as a
//! thin adapter over whatever it edits (a textarea, a TUI widget, a document model) and
//! drives keystrokes through [`process_key`]; re-highlighting and line-number refresh
//! belong in the host's `commit`, debounced there if they are expensive.

use ropey::Rope;

use crate::engine::{EditOutcome, TypingEngine};
use crate::key::KeyEvent;
use crate::selection::SelectionRange;

/// A live editable surface: the engine's one external collaborator boundary.
pub trait EditSurface {
    /// Current buffer contents.
    fn buffer(&self) -> Rope;

    /// Current selection, a caret when collapsed.
    fn selection(&self) -> SelectionRange;

    /// Replace the buffer and selection atomically with an engine result.
    fn commit(&mut self, outcome: EditOutcome);
}

/// Run one keystroke through `engine` against `surface`.
///
/// Returns `true` when the keystroke was intercepted and committed; `false` means the
/// surface should let its native behavior run (and, for a browser host, not call
/// `preventDefault`).
pub fn process_key<S: EditSurface>(engine: &TypingEngine, surface: &mut S, event: &KeyEvent) -> bool {
    let buffer = surface.buffer();
    let selection = surface.selection();
    match engine.handle(&buffer, selection, event) {
        Some(outcome) => {
            surface.commit(outcome);
            true
        }
        None => false,
    }
}
