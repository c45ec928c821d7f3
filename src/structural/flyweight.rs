//! Structural Pattern: Flyweight
//! Example: A forest of many trees sharing a handful of tree types
//!
//! Run with: cargo run --bin flyweight
//!
//! A tree's coordinates are unique to it (extrinsic state); its name, colour
//! and texture are not (intrinsic state). The intrinsic part lives in a
//! [`TreeType`] shared through `Rc`, and a [`TreeTypeRegistry`] hands out the
//! existing type whenever an identical one is requested.
//!
//! The registry is an ordinary value passed to [`Forest::plant_tree`]; two
//! registries never share types, and dropping one frees its types once the
//! last tree using them is gone.

use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

/// Drawing surface the trees render onto.
pub trait Canvas {
    fn draw_tree(&mut self, kind: &TreeType, x: i32, y: i32);
}

/// Intrinsic, immutable, shared.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct TreeType {
    name: String,
    color: String,
    texture: String,
}

impl TreeType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn texture(&self) -> &str {
        &self.texture
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, x: i32, y: i32) {
        canvas.draw_tree(self, x, y);
    }
}

type TreeKey = (String, String, String);

#[derive(Debug, Default)]
pub struct TreeTypeRegistry {
    types: FxHashMap<TreeKey, Rc<TreeType>>,
}

impl TreeTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared type for this combination, creating it on first use.
    pub fn get(&mut self, name: &str, color: &str, texture: &str) -> Rc<TreeType> {
        let key = (name.to_string(), color.to_string(), texture.to_string());
        let kind = self.types.entry(key).or_insert_with(|| {
            debug!(name, color, texture, "new tree type");
            Rc::new(TreeType {
                name: name.to_string(),
                color: color.to_string(),
                texture: texture.to_string(),
            })
        });
        Rc::clone(kind)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Extrinsic state plus a handle to the shared type.
#[derive(Debug, Clone)]
pub struct Tree {
    pub x: i32,
    pub y: i32,
    kind: Rc<TreeType>,
}

impl Tree {
    pub fn kind(&self) -> &Rc<TreeType> {
        &self.kind
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.kind.draw(canvas, self.x, self.y);
    }
}

#[derive(Debug, Default)]
pub struct Forest {
    trees: Vec<Tree>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plant_tree(
        &mut self,
        registry: &mut TreeTypeRegistry,
        x: i32,
        y: i32,
        name: &str,
        color: &str,
        texture: &str,
    ) {
        let kind = registry.get(name, color, texture);
        trace!(x, y, name, "planting tree");
        self.trees.push(Tree { x, y, kind });
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for tree in &self.trees {
            tree.draw(canvas);
        }
    }
}

/// Remembers every draw call, one line each.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    calls: Vec<String>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[String] {
        &self.calls
    }
}

impl Canvas for RecordingCanvas {
    fn draw_tree(&mut self, kind: &TreeType, x: i32, y: i32) {
        self.calls.push(format!(
            "{} {} ({}) at ({}, {})",
            kind.color, kind.name, kind.texture, x, y
        ));
    }
}
