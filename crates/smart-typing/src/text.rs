//! Explicit index scanning over the buffer. The indentation engines deliberately avoid
//! regex here: the indent unit is runtime-configurable and anchored scans over it are
//! cheaper and clearer as plain char walks.

use ropey::Rope;

/// Returns `true` if the chars of `pat` appear in `buffer` starting at `char_idx`.
pub(crate) fn matches_at(buffer: &Rope, char_idx: usize, pat: &str) -> bool {
    if char_idx > buffer.len_chars() {
        return false;
    }
    let mut chars = buffer.chars_at(char_idx);
    pat.chars().all(|expected| chars.next() == Some(expected))
}

/// Number of whole back-to-back repetitions of `unit` at `char_idx`, never letting a
/// repetition cross `limit`.
pub(crate) fn unit_run(buffer: &Rope, char_idx: usize, unit: &str, limit: usize) -> usize {
    let unit_len = unit.chars().count();
    if unit_len == 0 {
        return 0;
    }
    let mut runs = 0;
    let mut at = char_idx;
    while at + unit_len <= limit && matches_at(buffer, at, unit) {
        runs += 1;
        at += unit_len;
    }
    runs
}

/// Length of the run of literal space characters starting at `char_idx`.
pub(crate) fn space_run(buffer: &Rope, char_idx: usize) -> usize {
    buffer
        .chars_at(char_idx)
        .take_while(|&ch| ch == ' ')
        .count()
}
