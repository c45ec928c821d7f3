//! Demo: fitting square pegs into a round hole
//!
//! Run with: cargo run --bin adapter

use design_patterns::console;
use design_patterns::structural::adapter::{RoundHole, RoundPeg, SquarePeg, SquarePegAdapter};

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("Adapter");

    let hole = RoundHole::new(5.0);
    console::lines([format!(
        "round peg r=5 fits hole r={}: {}",
        hole.radius(),
        hole.fits(&RoundPeg::new(5.0))
    )]);

    for width in [5.0, 10.0] {
        let peg = SquarePeg::new(width);
        let fits = hole.fits(&SquarePegAdapter::new(&peg));
        console::lines([format!("square peg w={} fits: {}", width, fits)]);
    }

    Ok(())
}
