//! Demo: two game AIs sharing one turn skeleton
//!
//! Run with: cargo run --bin template_method

use design_patterns::behavioral::template_method::{GameAi, MonstersAi, OrcsAi};
use design_patterns::console;

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("Template Method");

    let mut players: Vec<Box<dyn GameAi>> =
        vec![Box::new(OrcsAi::default()), Box::new(MonstersAi::default())];

    for round in 1..=2 {
        console::section(&format!("Turn {}", round));
        for ai in players.iter_mut() {
            console::lines(ai.turn());
        }
    }

    Ok(())
}
