//! Demo: sharing one database handle through an explicit registry
//!
//! Run with: cargo run --bin singleton

use std::rc::Rc;

use design_patterns::console;
use design_patterns::creational::singleton::{Database, InstanceRegistry};

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("Singleton");

    let mut registry = InstanceRegistry::new();
    let first = registry.get_or_init(|| Database::connect("db://main"));
    let second = registry.get_or_init(|| Database::connect("db://replica"));

    console::lines([
        first.query("SELECT * FROM users"),
        second.query("SELECT * FROM orders"),
    ]);
    console::lines([format!(
        "same instance: {}, queries served: {}",
        Rc::ptr_eq(&first, &second),
        first.query_count()
    )]);

    console::section("A second registry");
    let mut other = InstanceRegistry::new();
    let third = other.get_or_init(|| Database::connect("db://test"));
    console::lines([format!(
        "{} is shared with the first registry: {}",
        third.url(),
        Rc::ptr_eq(&first, &third)
    )]);

    Ok(())
}
