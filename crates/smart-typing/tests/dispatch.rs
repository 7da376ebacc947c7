use ropey::Rope;
use smart_typing::{
    ConfigError, EditOutcome, EditSurface, EngineConfig, KeyEvent, SelectionRange, TypingEngine,
    line_count, process_key,
};

/// A minimal host surface: a buffer, a selection, and an edit counter standing in for
/// the re-highlight / re-number work a real host performs on commit.
struct MockSurface {
    buffer: Rope,
    selection: SelectionRange,
    commits: usize,
}

impl MockSurface {
    fn new(text: &str, selection: SelectionRange) -> Self {
        Self {
            buffer: Rope::from_str(text),
            selection,
            commits: 0,
        }
    }
}

impl EditSurface for MockSurface {
    fn buffer(&self) -> Rope {
        self.buffer.clone()
    }

    fn selection(&self) -> SelectionRange {
        self.selection
    }

    fn commit(&mut self, outcome: EditOutcome) {
        self.buffer = outcome.buffer;
        self.selection = outcome.selection;
        self.commits += 1;
    }
}

#[test]
fn test_process_key_commits_intercepted_edits() {
    let engine = TypingEngine::with_defaults();
    let mut surface = MockSurface::new("foo", SelectionRange::new(0, 3));

    assert!(process_key(&engine, &mut surface, &KeyEvent::character('(')));
    assert_eq!(surface.buffer, "(foo)");
    assert_eq!(surface.selection, SelectionRange::caret(4));
    assert_eq!(surface.commits, 1);

    // A deferred keystroke commits nothing.
    assert!(!process_key(&engine, &mut surface, &KeyEvent::character('x')));
    assert_eq!(surface.buffer, "(foo)");
    assert_eq!(surface.commits, 1);
}

#[test]
fn test_keystroke_session() {
    let engine = TypingEngine::with_defaults();
    let mut surface = MockSurface::new("if x {", SelectionRange::caret(6));

    // Enter after the brace: no indentation to carry yet.
    assert!(process_key(&engine, &mut surface, &KeyEvent::Enter));
    assert_eq!(surface.buffer, "if x {\n");

    // Indent the new line, then open a call.
    assert!(process_key(&engine, &mut surface, &KeyEvent::Tab { shift: false }));
    assert_eq!(surface.buffer, "if x {\n  ");

    assert!(process_key(&engine, &mut surface, &KeyEvent::character('(')));
    assert_eq!(surface.buffer, "if x {\n  ()");
    assert_eq!(surface.selection, SelectionRange::caret(10));

    // Typing the closer skips over the inserted one.
    assert!(process_key(&engine, &mut surface, &KeyEvent::character(')')));
    assert_eq!(surface.buffer, "if x {\n  ()");
    assert_eq!(surface.selection, SelectionRange::caret(11));

    // Enter now carries the two-space indentation.
    assert!(process_key(&engine, &mut surface, &KeyEvent::Enter));
    assert_eq!(surface.buffer, "if x {\n  ()\n  ");
    assert_eq!(surface.selection, SelectionRange::caret(14));

    // Backspace collapses the carried indentation one unit at a time.
    assert!(process_key(&engine, &mut surface, &KeyEvent::Backspace));
    assert_eq!(surface.buffer, "if x {\n  ()\n");
    assert_eq!(surface.selection, SelectionRange::caret(12));

    assert_eq!(line_count(&surface.buffer), 3);
}

#[test]
fn test_read_only_session_intercepts_nothing() {
    let mut config = EngineConfig::default();
    config.read_only = true;
    let engine = TypingEngine::new(config).unwrap();
    let buffer = Rope::from_str("  foo");

    for event in [
        KeyEvent::Tab { shift: false },
        KeyEvent::Tab { shift: true },
        KeyEvent::Backspace,
        KeyEvent::Enter,
        KeyEvent::character('('),
    ] {
        assert!(
            engine
                .handle(&buffer, SelectionRange::caret(5), &event)
                .is_none()
        );
    }
}

#[test]
fn test_invalid_config_rejected_at_construction() {
    assert_eq!(
        TypingEngine::new(EngineConfig::with_tab_size(0)).err(),
        Some(ConfigError::EmptyIndentUnit)
    );

    let mut config = EngineConfig::default();
    config.self_closing_characters.push('`');
    assert_eq!(
        TypingEngine::new(config).err(),
        Some(ConfigError::UnpairedCharacter('`'))
    );
}

#[test]
fn test_handle_str_convenience() {
    let engine = TypingEngine::with_defaults();

    let (text, selection) = engine
        .handle_str("  x", SelectionRange::caret(3), &KeyEvent::Enter)
        .unwrap();

    assert_eq!(text, "  x\n  ");
    assert_eq!(selection, SelectionRange::caret(6));
}

#[test]
#[should_panic(expected = "exceeds buffer length")]
fn test_malformed_selection_fails_fast() {
    let engine = TypingEngine::with_defaults();
    let buffer = Rope::from_str("ab");

    let _ = engine.handle(&buffer, SelectionRange::caret(10), &KeyEvent::Enter);
}
