//! Drives a short typing session through the engine and prints every committed edit,
//! showing the caret as `|` and a selection as `[...]`.

use ropey::Rope;
use smart_typing::{EditOutcome, EditSurface, KeyEvent, SelectionRange, TypingEngine, process_key};

struct DemoSurface {
    buffer: Rope,
    selection: SelectionRange,
}

impl EditSurface for DemoSurface {
    fn buffer(&self) -> Rope {
        self.buffer.clone()
    }

    fn selection(&self) -> SelectionRange {
        self.selection
    }

    fn commit(&mut self, outcome: EditOutcome) {
        self.buffer = outcome.buffer;
        self.selection = outcome.selection;
    }
}

fn render(surface: &DemoSurface) -> String {
    let text = surface.buffer.to_string();
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    for (i, ch) in chars.iter().enumerate() {
        if i == surface.selection.start {
            out.push(if surface.selection.is_caret() { '|' } else { '[' });
        }
        if i == surface.selection.end && !surface.selection.is_caret() {
            out.push(']');
        }
        out.push(*ch);
    }
    if surface.selection.start == chars.len() {
        out.push(if surface.selection.is_caret() { '|' } else { '[' });
    }
    if surface.selection.end == chars.len() && !surface.selection.is_caret() {
        out.push(']');
    }
    out.replace('\n', "\\n")
}

fn main() {
    let engine = TypingEngine::with_defaults();
    let mut surface = DemoSurface {
        buffer: Rope::from_str("fn demo"),
        selection: SelectionRange::caret(7),
    };

    let script: &[(&str, KeyEvent)] = &[
        ("type (", KeyEvent::character('(')),
        ("type )", KeyEvent::character(')')),
        ("type {", KeyEvent::character('{')),
        ("press Enter", KeyEvent::Enter),
        ("press Tab", KeyEvent::Tab { shift: false }),
        ("type '", KeyEvent::character('\'')),
        ("type '", KeyEvent::character('\'')),
        ("press Backspace", KeyEvent::Backspace),
        ("press Shift+Tab", KeyEvent::Tab { shift: true }),
    ];

    println!("{:>16}  {}", "start", render(&surface));
    for (label, event) in script {
        let intercepted = process_key(&engine, &mut surface, event);
        let marker = if intercepted { "" } else { "  (native)" };
        println!("{label:>16}  {}{marker}", render(&surface));
    }
}
