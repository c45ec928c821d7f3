//! Demo: undoing editor changes from saved snapshots
//!
//! Run with: cargo run --bin snapshot

use design_patterns::behavioral::snapshot::{Editor, History};
use design_patterns::console;

fn describe(editor: &Editor) -> String {
    let (x, y) = editor.cursor();
    format!(
        "{:?} cursor=({}, {}) selection={}",
        editor.text(),
        x,
        y,
        editor.selection_width()
    )
}

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("Snapshot");

    let mut editor = Editor::new();
    let mut history = History::with_capacity(10);

    history.backup(&mut editor, "empty");
    editor.set_text("Hello");
    editor.set_cursor(5, 0);

    history.backup(&mut editor, "greeting");
    editor.set_text("Hello, world");
    editor.set_cursor(12, 0);
    editor.set_selection_width(5);

    console::section("Current");
    console::lines([describe(&editor)]);
    console::lines([format!("history: {}", history.labels().join(" -> "))]);

    while history.undo(&mut editor) {
        console::section("After undo");
        console::lines([describe(&editor)]);
    }

    Ok(())
}
