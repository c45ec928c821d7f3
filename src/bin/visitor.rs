//! Demo: exporting and measuring shapes without touching their types
//!
//! Run with: cargo run --bin visitor

use design_patterns::behavioral::visitor::{
    export_all, AnyShape, AreaVisitor, Circle, Dot, Element, Rectangle, Shape,
};
use design_patterns::console;

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("Visitor");

    let mut shapes: Vec<AnyShape> = vec![
        Dot { id: 1, x: 10, y: 20 }.into(),
        Circle { id: 2, x: 5, y: 5, radius: 3 }.into(),
        Rectangle { id: 3, x: 0, y: 0, width: 4, height: 6 }.into(),
    ];
    for shape in shapes.iter_mut() {
        shape.move_by(1, 1);
    }

    console::section("Shapes");
    console::lines(shapes.iter().map(Shape::draw));

    console::section("JSON export");
    console::lines(export_all(&shapes)?);

    console::section("Areas");
    let mut areas = AreaVisitor::default();
    for shape in &shapes {
        let area = shape.accept(&mut areas);
        console::lines([format!("{:<40} {:>8.2}", shape.draw(), area)]);
    }
    console::lines([format!("total {:.2}", areas.total)]);

    Ok(())
}
