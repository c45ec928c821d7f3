//! Demo: an editor publishing file events to subscribers
//!
//! Run with: cargo run --bin observer

use std::rc::Rc;

use design_patterns::behavioral::observer::{
    Editor, EmailAlertsListener, EventKind, EventManager, LoggingListener,
};
use design_patterns::console;

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("Observer");

    let logger = Rc::new(LoggingListener::new("log.txt"));
    let alerts = Rc::new(EmailAlertsListener::new("admin@example.com"));

    let mut editor = Editor::new(EventManager::new());
    editor.events().subscribe(EventKind::Open, logger.clone());
    editor.events().subscribe(EventKind::Save, logger.clone());
    let alert_id = editor.events().subscribe(EventKind::Save, alerts.clone());

    editor.open_file("test.txt");
    editor.save_file()?;
    editor.events().unsubscribe(alert_id);
    editor.save_file()?;
    editor.close_file()?;

    console::section("log.txt");
    console::lines(logger.entries());
    console::section("admin@example.com");
    console::lines(alerts.outbox());

    console::section("Saving with no file open");
    if let Err(err) = editor.save_file() {
        console::failure(&err.to_string());
    }

    Ok(())
}
