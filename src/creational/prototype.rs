//! Creational Pattern: Prototype
//! Example: Copying shapes without knowing their concrete types
//!
//! Run with: cargo run --bin prototype
//!
//! Code holding a `Box<dyn Shape>` cannot call `Clone::clone` on the
//! concrete type it doesn't know. Each shape therefore clones itself into a
//! new box ([`Shape::clone_box`]), and `Box<dyn Shape>` gets a `Clone` impl
//! on top of that. A [`PrototypeRegistry`] keeps preconfigured shapes by
//! name and hands out copies.

use std::any::Any;
use std::fmt;

use rustc_hash::FxHashMap;
use tracing::debug;

/// State every shape carries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeBase {
    pub x: i32,
    pub y: i32,
    pub color: String,
}

pub trait Shape: Any + fmt::Debug {
    fn clone_box(&self) -> Box<dyn Shape>;
    fn base(&self) -> &ShapeBase;
    fn base_mut(&mut self) -> &mut ShapeBase;
    fn area(&self) -> f64;
    fn as_any(&self) -> &dyn Any;
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    pub base: ShapeBase,
    pub radius: u32,
}

impl Shape for Circle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn area(&self) -> f64 {
        let r = f64::from(self.radius);
        std::f64::consts::PI * r * r
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rectangle {
    pub base: ShapeBase,
    pub width: u32,
    pub height: u32,
}

impl Shape for Rectangle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn area(&self) -> f64 {
        f64::from(self.width) * f64::from(self.height)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Named prototypes. `spawn` always returns an independent copy.
#[derive(Debug, Clone, Default)]
pub struct PrototypeRegistry {
    prototypes: FxHashMap<String, Box<dyn Shape>>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the prototype previously stored under `name`, if any.
    pub fn register(&mut self, name: &str, prototype: Box<dyn Shape>) -> Option<Box<dyn Shape>> {
        debug!(name, "registering prototype");
        self.prototypes.insert(name.to_string(), prototype)
    }

    pub fn spawn(&self, name: &str) -> Option<Box<dyn Shape>> {
        self.prototypes.get(name).map(|p| p.clone_box())
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.prototypes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_circle() -> Circle {
        Circle {
            base: ShapeBase { x: 10, y: 10, color: "red".into() },
            radius: 5,
        }
    }

    #[test]
    fn test_clone_through_trait_object() {
        let original: Box<dyn Shape> = Box::new(red_circle());
        let mut copy = original.clone();
        copy.base_mut().x = 99;

        assert_eq!(original.base().x, 10);
        assert_eq!(copy.base().x, 99);
        assert_eq!(copy.base().color, "red");
    }

    #[test]
    fn test_copy_keeps_concrete_type() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(red_circle()),
            Box::new(Rectangle { base: ShapeBase::default(), width: 10, height: 20 }),
        ];
        let copies = shapes.clone();

        let circle = copies[0].as_any().downcast_ref::<Circle>().unwrap();
        assert_eq!(circle, &red_circle());
        assert!(copies[1].as_any().downcast_ref::<Rectangle>().is_some());
        assert_eq!(copies[1].area(), 200.0);
    }

    #[test]
    fn test_registry_spawns_independent_copies() {
        let mut registry = PrototypeRegistry::new();
        assert!(registry.register("big red circle", Box::new(red_circle())).is_none());

        let mut first = registry.spawn("big red circle").unwrap();
        first.base_mut().color = "blue".into();
        let second = registry.spawn("big red circle").unwrap();

        assert_eq!(second.base().color, "red");
        assert!(registry.spawn("missing").is_none());
        assert_eq!(registry.names(), vec!["big red circle"]);
    }
}
