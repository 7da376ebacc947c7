#![warn(missing_docs)]
//! Smart Typing - Structural Keystroke Transforms for Plain-Text Surfaces
//!
//! # Overview
//!
//! `smart-typing` is a headless engine that layers structural editing behaviors on top of a
//! raw text input: tab indentation and outdenting, indentation carried onto new lines,
//! whitespace-aware backspace, and bracket/quote pairing. It does not touch rendering,
//! styling, or syntax highlighting; the host surface reads its current buffer and selection,
//! hands them to the engine together with one key event, and commits the replacement buffer
//! and selection the engine returns.
//!
//! # Core Model
//!
//! Every operation is a pure function over a `(buffer, selection, key)` triple:
//!
//! - **Buffer**: a [`ropey::Rope`]; clones are cheap, so "mutation" is always modeled as
//!   producing a new buffer.
//! - **Selection**: a [`SelectionRange`] of 0-based char offsets, a caret when collapsed.
//! - **Result**: an [`EditOutcome`] holding the replacement buffer and selection, or `None`
//!   meaning "do not intercept; let the surface's native behavior run".
//!
//! For one keystroke at most one engine's transform is applied, in a fixed priority order:
//! tab handling, backspace dedent, bracket/quote pairing, newline indentation. Engines never
//! compose within one event.
//!
//! # Quick Start
//!
//! ```rust
//! use ropey::Rope;
//! use smart_typing::{KeyEvent, SelectionRange, TypingEngine};
//!
//! let engine = TypingEngine::with_defaults();
//!
//! // Pressing Enter at the end of an indented line carries the indentation over.
//! let buffer = Rope::from_str("  let x = 1;");
//! let caret = SelectionRange::caret(buffer.len_chars());
//! let outcome = engine.handle(&buffer, caret, &KeyEvent::Enter).unwrap();
//!
//! assert_eq!(outcome.text(), "  let x = 1;\n  ");
//! assert_eq!(outcome.selection, SelectionRange::caret(outcome.buffer.len_chars()));
//! ```
//!
//! # Module Description
//!
//! - [`selection`] - selection ranges and line-relative fact derivation
//! - [`config`] - session configuration and setup-time validation
//! - [`key`] - the key events the engine can intercept
//! - [`indent`] - Tab / Shift+Tab indentation engine
//! - [`newline`] - newline indentation continuation engine
//! - [`backspace`] - whitespace-unit backspace dedent engine
//! - [`pairing`] - bracket/quote pairing, wrapping, and skip-through engine
//! - [`engine`] - the fixed-priority keystroke router
//! - [`surface`] - the host-surface seam (read state, transform, commit)
//!
//! # Error Handling
//!
//! Configuration problems (an empty indent unit, a self-closing character with no bracket
//! table entry) are reported once by [`TypingEngine::new`] as a [`ConfigError`]. Per-keystroke
//! operations have no recoverable errors: every call either transforms or declines. Malformed
//! selection ranges are a contract violation of the caller and fail fast with a panic rather
//! than being silently clamped, so caret-corruption bugs surface immediately.

pub mod backspace;
pub mod config;
pub mod engine;
pub mod indent;
pub mod key;
pub mod newline;
pub mod pairing;
pub mod selection;
pub mod surface;
mod text;

pub use config::{ConfigError, EngineConfig};
pub use engine::{EditOutcome, TypingEngine};
pub use key::{KeyEvent, Modifiers};
pub use selection::{LineFacts, SelectionRange, line_count};
pub use surface::{EditSurface, process_key};
