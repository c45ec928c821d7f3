//! Demo: planting a large forest from three shared tree types
//!
//! Run with: cargo run --bin flyweight

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use design_patterns::console;
use design_patterns::structural::flyweight::{Forest, RecordingCanvas, TreeTypeRegistry};

const TREES: usize = 10_000;
const KINDS: [(&str, &str, &str); 3] = [
    ("oak", "green", "rough"),
    ("birch", "white", "smooth"),
    ("maple", "red", "lobed"),
];

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("Flyweight");

    let mut rng = StdRng::seed_from_u64(7);
    let mut registry = TreeTypeRegistry::new();
    let mut forest = Forest::new();

    for _ in 0..TREES {
        let (name, color, texture) = KINDS[rng.gen_range(0..KINDS.len())];
        let (x, y) = (rng.gen_range(0..500), rng.gen_range(0..500));
        forest.plant_tree(&mut registry, x, y, name, color, texture);
    }

    console::lines([
        format!("{} trees planted", forest.len()),
        format!("{} tree types in memory", registry.len()),
    ]);

    console::section("First draw calls");
    let mut canvas = RecordingCanvas::new();
    forest.draw(&mut canvas);
    console::lines(canvas.calls().iter().take(5));

    Ok(())
}
