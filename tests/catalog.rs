use std::collections::HashSet;
use std::path::Path;

use design_patterns::catalog::{self, PatternCategory, CATALOG};

const EXPECTED: [&str; 21] = [
    "Chain of Responsibility",
    "Command",
    "Iterator",
    "Mediator",
    "Observer",
    "Snapshot",
    "State",
    "Strategy",
    "Template Method",
    "Visitor",
    "Abstract Factory",
    "Builder",
    "Factory Method",
    "Prototype",
    "Singleton",
    "Adapter",
    "Bridge",
    "Composite",
    "Decorator",
    "Flyweight",
    "Proxy",
];

#[test]
fn test_every_pattern_listed_exactly_once() {
    assert_eq!(CATALOG.len(), EXPECTED.len());
    for name in EXPECTED {
        let hits = CATALOG.iter().filter(|p| p.name == name).count();
        assert_eq!(hits, 1, "{name} listed {hits} times");
    }
}

#[test]
fn test_binaries_are_unique_and_exist() {
    let mut seen = HashSet::new();
    let bin_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/bin");

    for pattern in CATALOG {
        assert!(seen.insert(pattern.binary), "duplicate binary {}", pattern.binary);
        let source = bin_dir.join(format!("{}.rs", pattern.binary));
        assert!(source.is_file(), "missing demo {}", source.display());
    }
}

#[test]
fn test_categories_partition_catalog() {
    let total: usize = PatternCategory::ALL
        .iter()
        .map(|c| catalog::by_category(*c).count())
        .sum();
    assert_eq!(total, CATALOG.len());
}

#[test]
fn test_intents_are_filled_in() {
    assert!(CATALOG.iter().all(|p| !p.intent.trim().is_empty()));
}

#[test]
fn test_json_listing_round_trips_names() {
    let json = serde_json::to_value(CATALOG).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    assert_eq!(names, EXPECTED);
}
