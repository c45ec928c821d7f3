//! Demo: the same dialog rendered through different button factories
//!
//! Run with: cargo run --bin factory

use design_patterns::console;
use design_patterns::creational::factory::{
    Dialog, HtmlButtonFactory, MacButtonFactory, WindowsButtonFactory,
};

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("Factory Method");

    console::section("Windows");
    console::lines(Dialog::new(WindowsButtonFactory).render());
    console::section("macOS");
    console::lines(Dialog::new(MacButtonFactory).render());
    console::section("Web");
    console::lines(Dialog::new(HtmlButtonFactory).render());

    Ok(())
}
