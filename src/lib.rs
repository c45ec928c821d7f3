//! # Design Patterns in Rust
//!
//! The classic Gang-of-Four catalogue, one self-contained module per pattern.
//!
//! ## Behavioral
//! - Chain of responsibility, Command, Iterator, Mediator, Observer
//! - Snapshot (memento), State, Strategy, Template method, Visitor
//!
//! ## Creational
//! - Abstract factory, Builder, Factory method, Prototype, Singleton
//!
//! ## Structural
//! - Adapter, Bridge, Composite, Decorator, Flyweight, Proxy
//!
//! Each module opens with the pattern's problem, solution, structure and
//! trade-offs, then a small implementation and its tests.
//!
//! Run a demo with: `cargo run --bin <pattern>`
//! List everything with: `cargo run --bin catalog`

pub mod behavioral;
pub mod catalog;
pub mod config;
pub mod console;
pub mod creational;
pub mod error;
pub mod structural;

pub use config::Config;
pub use error::{Error, Result};
