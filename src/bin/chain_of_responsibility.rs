//! Demo: help requests bubbling up a widget tree
//!
//! Run with: cargo run --bin chain_of_responsibility

use design_patterns::behavioral::chain_of_responsibility::{Component, HelpTree};
use design_patterns::console;

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("Chain of Responsibility");

    let mut tree = HelpTree::new();
    let dialog = tree.add_root(Component::dialog(Some("http://example.com/budget")));
    let panel = tree.add_child(dialog, Component::panel(Some("This panel does budgets")))?;
    let ok = tree.add_child(panel, Component::button_with_tooltip("Confirm the budget"))?;
    let cancel = tree.add_child(panel, Component::button())?;
    let bare_panel = tree.add_child(dialog, Component::panel(None))?;
    let help = tree.add_child(bare_panel, Component::button())?;

    for (label, id) in [("OK", ok), ("Cancel", cancel), ("Help", help)] {
        console::section(&format!("F1 on the {} button", label));
        match tree.show_help(id)? {
            Some(help) => console::success(&help.render()),
            None => console::failure("no help available"),
        }
    }

    Ok(())
}
