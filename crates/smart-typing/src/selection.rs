//! Selection ranges and line-relative fact derivation.
//!
//! Engines reason about the buffer in line-relative terms (where does the current line
//! start, what sits before/inside/after the selection). [`LineFacts`] derives those facts
//! once per keystroke from the absolute char offsets the host surface reports.

use ropey::{Rope, RopeSlice};

/// A contiguous span of the buffer in 0-based char offsets.
///
/// `start == end` denotes a caret with no selected text. Invariant: `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    /// Inclusive start char offset.
    pub start: usize,
    /// Exclusive end char offset.
    pub end: usize,
}

impl SelectionRange {
    /// Create a selection spanning `start..end`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`; an inverted range is a caller bug, not a state the
    /// engines recover from.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(
            start <= end,
            "selection start {start} exceeds selection end {end}"
        );
        Self { start, end }
    }

    /// Create a collapsed selection (a caret) at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns `true` if the selection is collapsed to a caret.
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Length of the selected span in chars.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if no text is selected (same as [`SelectionRange::is_caret`]).
    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }
}

/// Fail fast on selections that do not fit the buffer.
pub(crate) fn validate(buffer: &Rope, selection: SelectionRange) {
    assert!(
        selection.start <= selection.end,
        "selection start {} exceeds selection end {}",
        selection.start,
        selection.end
    );
    assert!(
        selection.end <= buffer.len_chars(),
        "selection end {} exceeds buffer length {}",
        selection.end,
        buffer.len_chars()
    );
}

/// Line-relative facts derived from an absolute buffer and selection.
///
/// Derived fresh per keystroke and never stored; the slices borrow from the buffer the
/// facts were derived from.
#[derive(Debug, Clone, Copy)]
pub struct LineFacts<'a> {
    /// Char offset of the start of the line containing the selection start: one past the
    /// most recent `'\n'` before it, or `0` for the first line.
    pub line_start: usize,
    /// Everything before the selection.
    pub before: RopeSlice<'a>,
    /// The selected text (empty for a caret).
    pub selected: RopeSlice<'a>,
    /// Everything after the selection.
    pub after: RopeSlice<'a>,
}

impl<'a> LineFacts<'a> {
    /// Derive line facts for `selection` within `buffer`.
    ///
    /// Total over all valid inputs; an empty buffer yields `line_start == 0` and empty
    /// slices. Panics if the selection does not fit the buffer.
    pub fn derive(buffer: &'a Rope, selection: SelectionRange) -> Self {
        validate(buffer, selection);
        let line = buffer.char_to_line(selection.start);
        Self {
            line_start: buffer.line_to_char(line),
            before: buffer.slice(..selection.start),
            selected: buffer.slice(selection.start..selection.end),
            after: buffer.slice(selection.end..),
        }
    }
}

/// Number of logical lines in the buffer (N newlines yield N + 1 lines).
///
/// Hosts typically feed this to their line-number label renderer after each committed edit.
pub fn line_count(buffer: &Rope) -> usize {
    buffer.len_lines()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_range() {
        let caret = SelectionRange::caret(3);
        assert!(caret.is_caret());
        assert_eq!(caret.len(), 0);

        let span = SelectionRange::new(1, 4);
        assert!(!span.is_caret());
        assert_eq!(span.len(), 3);
    }

    #[test]
    #[should_panic(expected = "selection start")]
    fn test_inverted_range_panics() {
        let _ = SelectionRange::new(4, 1);
    }

    #[test]
    fn test_derive_empty_buffer() {
        let buffer = Rope::from_str("");
        let facts = LineFacts::derive(&buffer, SelectionRange::caret(0));

        assert_eq!(facts.line_start, 0);
        assert_eq!(facts.before.len_chars(), 0);
        assert_eq!(facts.selected.len_chars(), 0);
        assert_eq!(facts.after.len_chars(), 0);
    }

    #[test]
    fn test_derive_mid_line() {
        let buffer = Rope::from_str("ab\ncd\nef");
        let facts = LineFacts::derive(&buffer, SelectionRange::new(4, 7));

        assert_eq!(facts.line_start, 3);
        assert_eq!(facts.before.to_string(), "ab\nc");
        assert_eq!(facts.selected.to_string(), "d\ne");
        assert_eq!(facts.after.to_string(), "f");
    }

    #[test]
    fn test_derive_caret_at_line_head() {
        // A caret sitting right after '\n' belongs to the new line.
        let buffer = Rope::from_str("ab\ncd");
        let facts = LineFacts::derive(&buffer, SelectionRange::caret(3));
        assert_eq!(facts.line_start, 3);
    }

    #[test]
    fn test_derive_caret_at_buffer_end() {
        let buffer = Rope::from_str("ab\n");
        let facts = LineFacts::derive(&buffer, SelectionRange::caret(3));
        assert_eq!(facts.line_start, 3);
    }

    #[test]
    #[should_panic(expected = "exceeds buffer length")]
    fn test_derive_out_of_range_panics() {
        let buffer = Rope::from_str("ab");
        let _ = LineFacts::derive(&buffer, SelectionRange::caret(5));
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(&Rope::from_str("")), 1);
        assert_eq!(line_count(&Rope::from_str("a")), 1);
        assert_eq!(line_count(&Rope::from_str("a\nb")), 2);
        assert_eq!(line_count(&Rope::from_str("a\nb\n")), 3);
    }
}
