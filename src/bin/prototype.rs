//! Demo: cloning shapes through trait objects and a registry
//!
//! Run with: cargo run --bin prototype

use design_patterns::console;
use design_patterns::creational::prototype::{
    Circle, PrototypeRegistry, Rectangle, Shape, ShapeBase,
};

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("Prototype");

    let circle = Circle {
        base: ShapeBase { x: 10, y: 10, color: "red".into() },
        radius: 20,
    };
    let rectangle = Rectangle {
        base: ShapeBase { x: 0, y: 0, color: "blue".into() },
        width: 10,
        height: 20,
    };

    let shapes: Vec<Box<dyn Shape>> = vec![Box::new(circle), Box::new(rectangle)];
    let mut copies = shapes.clone();
    copies[0].base_mut().color = "green".into();

    console::section("Originals vs copies");
    for (original, copy) in shapes.iter().zip(&copies) {
        console::lines([format!("{:?}  =>  {:?}", original, copy)]);
    }

    console::section("Registry");
    let mut registry = PrototypeRegistry::new();
    for (name, shape) in ["big red circle", "blue rectangle"].into_iter().zip(shapes) {
        registry.register(name, shape);
    }
    for name in registry.names() {
        if let Some(shape) = registry.spawn(name) {
            console::lines([format!("{}: area {:.1}", name, shape.area())]);
        }
    }

    Ok(())
}
