//! Demo: moving and drawing a nested group of graphics
//!
//! Run with: cargo run --bin composite

use design_patterns::console;
use design_patterns::structural::composite::{Circle, CompoundGraphic, Dot, Graphic};

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("Composite");

    let mut group = CompoundGraphic::new();
    group
        .add(Dot::new(1, 2))
        .add(Dot::new(3, 4))
        .add(Circle::new(5, 6, 7));

    console::section("Initial");
    console::lines(group.draw());

    console::section("Moved by (1, 1)");
    group.move_by(1, 1);
    console::lines(group.draw());

    console::section("First dot removed");
    group.remove(0);
    console::lines(group.draw());
    console::lines([format!("{} leaves", group.count())]);

    Ok(())
}
