//! Demo: copy, cut, paste and undo in a tiny text editor
//!
//! Run with: cargo run --bin command

use design_patterns::behavioral::command::{Action, Application};
use design_patterns::console;

fn show(app: &Application) {
    console::lines([
        format!("text:      {:?}", app.editor().text()),
        format!("clipboard: {:?}", app.clipboard()),
        format!("history:   {} command(s)", app.history_len()),
    ]);
}

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("Command");

    let mut app = Application::new("Hello, brave new world");
    show(&app);

    console::section("Select \"brave \" and cut it");
    app.editor_mut().select(7, 13)?;
    app.trigger(Action::Cut);
    show(&app);

    console::section("Paste at the end");
    let len = app.editor().text().len();
    app.editor_mut().select(len, len)?;
    app.trigger(Action::Paste);
    show(&app);

    console::section("Copy everything (not recorded)");
    app.editor_mut().select_all();
    app.trigger(Action::Copy);
    show(&app);

    console::section("Undo twice");
    app.trigger(Action::Undo);
    app.trigger(Action::Undo);
    show(&app);

    if !app.undo() {
        console::failure("nothing left to undo");
    }

    Ok(())
}
