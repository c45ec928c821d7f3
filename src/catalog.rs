//! Index of every pattern in the crate, grouped by category.

use std::fmt;

use serde::Serialize;

/// Categories of design patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    /// Vary interaction and communication between objects.
    Behavioral,
    /// Vary object construction.
    Creational,
    /// Vary object composition.
    Structural,
}

impl PatternCategory {
    pub const ALL: [PatternCategory; 3] = [
        PatternCategory::Behavioral,
        PatternCategory::Creational,
        PatternCategory::Structural,
    ];
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Behavioral => write!(f, "Behavioral"),
            Self::Creational => write!(f, "Creational"),
            Self::Structural => write!(f, "Structural"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternInfo {
    pub name: &'static str,
    pub category: PatternCategory,
    pub intent: &'static str,
    /// Demo binary, run with `cargo run --bin <binary>`.
    pub binary: &'static str,
}

const fn entry(
    name: &'static str,
    category: PatternCategory,
    binary: &'static str,
    intent: &'static str,
) -> PatternInfo {
    PatternInfo {
        name,
        category,
        intent,
        binary,
    }
}

use PatternCategory::{Behavioral, Creational, Structural};

pub const CATALOG: &[PatternInfo] = &[
    entry(
        "Chain of Responsibility",
        Behavioral,
        "chain_of_responsibility",
        "Pass a request along a chain of handlers until one handles it",
    ),
    entry(
        "Command",
        Behavioral,
        "command",
        "Turn a request into a standalone object that can be queued or undone",
    ),
    entry(
        "Iterator",
        Behavioral,
        "iterator",
        "Traverse a collection without exposing its internal representation",
    ),
    entry(
        "Mediator",
        Behavioral,
        "mediator",
        "Route communication between components through one coordinator",
    ),
    entry(
        "Observer",
        Behavioral,
        "observer",
        "Notify subscribers about events that happen to the object they watch",
    ),
    entry(
        "Snapshot",
        Behavioral,
        "snapshot",
        "Save and restore an object's state without revealing its internals",
    ),
    entry(
        "State",
        Behavioral,
        "state",
        "Let an object change its behavior when its internal state changes",
    ),
    entry(
        "Strategy",
        Behavioral,
        "strategy",
        "Make a family of interchangeable algorithms selectable at runtime",
    ),
    entry(
        "Template Method",
        Behavioral,
        "template_method",
        "Define an algorithm's skeleton and let implementors override steps",
    ),
    entry(
        "Visitor",
        Behavioral,
        "visitor",
        "Separate an operation from the object structure it runs on",
    ),
    entry(
        "Abstract Factory",
        Creational,
        "abstract_factory",
        "Produce families of related objects without naming concrete types",
    ),
    entry(
        "Builder",
        Creational,
        "builder",
        "Construct complex objects step by step",
    ),
    entry(
        "Factory Method",
        Creational,
        "factory",
        "Defer the choice of concrete product to a factory implementation",
    ),
    entry(
        "Prototype",
        Creational,
        "prototype",
        "Copy existing objects without depending on their concrete types",
    ),
    entry(
        "Singleton",
        Creational,
        "singleton",
        "Guarantee one shared instance per registry scope",
    ),
    entry(
        "Adapter",
        Structural,
        "adapter",
        "Let objects with incompatible interfaces collaborate",
    ),
    entry(
        "Bridge",
        Structural,
        "bridge",
        "Split an abstraction from its implementation so both can vary",
    ),
    entry(
        "Composite",
        Structural,
        "composite",
        "Treat trees of objects and single objects uniformly",
    ),
    entry(
        "Decorator",
        Structural,
        "decorator",
        "Attach behavior to an object by wrapping it",
    ),
    entry(
        "Flyweight",
        Structural,
        "flyweight",
        "Share common state between many fine-grained objects",
    ),
    entry(
        "Proxy",
        Structural,
        "proxy",
        "Control access to another object through a stand-in",
    ),
];

pub fn by_category(category: PatternCategory) -> impl Iterator<Item = &'static PatternInfo> {
    CATALOG.iter().filter(move |p| p.category == category)
}

/// Looks a pattern up by display name or binary name, ignoring case.
pub fn find(name: &str) -> Option<&'static PatternInfo> {
    CATALOG
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name) || p.binary.eq_ignore_ascii_case(name))
}
