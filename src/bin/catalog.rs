//! Lists every pattern in the catalogue.
//!
//! Run with: cargo run --bin catalog [-- --json]

use colored::Colorize;

use design_patterns::catalog::{self, PatternCategory, CATALOG};
use design_patterns::console;

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;

    if std::env::args().skip(1).any(|arg| arg == "--json") {
        println!("{}", serde_json::to_string_pretty(CATALOG)?);
        return Ok(());
    }

    console::heading("Design patterns");
    for category in PatternCategory::ALL {
        console::section(&category.to_string());
        for pattern in catalog::by_category(category) {
            println!(
                "  {:<24} {:<24} {}",
                pattern.name.bold(),
                format!("--bin {}", pattern.binary).dimmed(),
                pattern.intent
            );
        }
    }

    Ok(())
}
