//! Behavioral Pattern: Visitor
//! Example: Exporting and measuring a heterogeneous set of shapes
//!
//! Run with: cargo run --bin visitor
//!
//! ## Problem
//! A family of types needs a new operation (export to JSON, compute area)
//! that does not belong in the types themselves, and more such operations
//! will follow.
//!
//! ## Solution
//! Move each operation into a visitor with one method per element type.
//! Elements implement `accept`, which calls the visitor method matching their
//! own type. That second call is the double dispatch: the element picks
//! the method, the visitor picks the behaviour.
//!
//! An insurance agent visiting a bank sells theft insurance; visiting a house
//! sells health insurance. Same agent, behaviour chosen by the place visited.
//!
//! ## Structure
//! - [`Visitor`]: `visit_dot`, `visit_circle`, `visit_rectangle`, with an
//!   associated `Output` type so each visitor returns what suits it.
//! - [`Element`]: `accept`, implemented by [`Dot`], [`Circle`], [`Rectangle`]
//!   and by [`AnyShape`] for heterogeneous collections.
//! - [`JsonExportVisitor`], [`AreaVisitor`]: concrete visitors.
//!
//! ## Trade-offs
//! New operations need no changes to the shapes. A new shape type, though,
//! means touching every visitor.

use std::f64::consts::PI;

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisitorError {
    #[error("failed to serialize shape: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub trait Visitor {
    type Output;

    fn visit_dot(&mut self, dot: &Dot) -> Self::Output;
    fn visit_circle(&mut self, circle: &Circle) -> Self::Output;
    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> Self::Output;
}

pub trait Element {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output;
}

pub trait Shape {
    fn move_by(&mut self, dx: i32, dy: i32);
    fn draw(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dot {
    pub id: u32,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub radius: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rectangle {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Element for Dot {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_dot(self)
    }
}

impl Element for Circle {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_circle(self)
    }
}

impl Element for Rectangle {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_rectangle(self)
    }
}

impl Shape for Dot {
    fn move_by(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    fn draw(&self) -> String {
        format!("Dot #{} at ({}, {})", self.id, self.x, self.y)
    }
}

impl Shape for Circle {
    fn move_by(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    fn draw(&self) -> String {
        format!(
            "Circle #{} at ({}, {}) r={}",
            self.id, self.x, self.y, self.radius
        )
    }
}

impl Shape for Rectangle {
    fn move_by(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    fn draw(&self) -> String {
        format!(
            "Rectangle #{} at ({}, {}) {}x{}",
            self.id, self.x, self.y, self.width, self.height
        )
    }
}

/// Closed set of shapes for collections that mix them.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyShape {
    Dot(Dot),
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Element for AnyShape {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            AnyShape::Dot(dot) => dot.accept(visitor),
            AnyShape::Circle(circle) => circle.accept(visitor),
            AnyShape::Rectangle(rectangle) => rectangle.accept(visitor),
        }
    }
}

impl Shape for AnyShape {
    fn move_by(&mut self, dx: i32, dy: i32) {
        match self {
            AnyShape::Dot(dot) => dot.move_by(dx, dy),
            AnyShape::Circle(circle) => circle.move_by(dx, dy),
            AnyShape::Rectangle(rectangle) => rectangle.move_by(dx, dy),
        }
    }

    fn draw(&self) -> String {
        match self {
            AnyShape::Dot(dot) => dot.draw(),
            AnyShape::Circle(circle) => circle.draw(),
            AnyShape::Rectangle(rectangle) => rectangle.draw(),
        }
    }
}

impl From<Dot> for AnyShape {
    fn from(dot: Dot) -> Self {
        AnyShape::Dot(dot)
    }
}

impl From<Circle> for AnyShape {
    fn from(circle: Circle) -> Self {
        AnyShape::Circle(circle)
    }
}

impl From<Rectangle> for AnyShape {
    fn from(rectangle: Rectangle) -> Self {
        AnyShape::Rectangle(rectangle)
    }
}

// ============================================================================
// Concrete visitors
// ============================================================================

#[derive(Serialize)]
struct Tagged<'a, T: Serialize> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    shape: &'a T,
}

/// Renders each shape as one JSON object tagged with its type.
#[derive(Debug, Default)]
pub struct JsonExportVisitor;

impl JsonExportVisitor {
    fn export<T: Serialize>(kind: &'static str, shape: &T) -> Result<String, VisitorError> {
        Ok(serde_json::to_string(&Tagged { kind, shape })?)
    }
}

impl Visitor for JsonExportVisitor {
    type Output = Result<String, VisitorError>;

    fn visit_dot(&mut self, dot: &Dot) -> Self::Output {
        Self::export("dot", dot)
    }

    fn visit_circle(&mut self, circle: &Circle) -> Self::Output {
        Self::export("circle", circle)
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> Self::Output {
        Self::export("rectangle", rectangle)
    }
}

/// Area per shape; also keeps a running total of everything it visited.
#[derive(Debug, Default)]
pub struct AreaVisitor {
    pub total: f64,
}

impl AreaVisitor {
    fn record(&mut self, area: f64) -> f64 {
        self.total += area;
        area
    }
}

impl Visitor for AreaVisitor {
    type Output = f64;

    fn visit_dot(&mut self, _dot: &Dot) -> f64 {
        self.record(0.0)
    }

    fn visit_circle(&mut self, circle: &Circle) -> f64 {
        let r = f64::from(circle.radius);
        self.record(PI * r * r)
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> f64 {
        self.record(f64::from(rectangle.width) * f64::from(rectangle.height))
    }
}

/// Exports every shape, failing on the first error.
pub fn export_all(shapes: &[AnyShape]) -> Result<Vec<String>, VisitorError> {
    let mut visitor = JsonExportVisitor;
    shapes.iter().map(|s| s.accept(&mut visitor)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shapes() -> Vec<AnyShape> {
        vec![
            Dot { id: 1, x: 10, y: 20 }.into(),
            Circle { id: 2, x: 5, y: 5, radius: 2 }.into(),
            Rectangle { id: 3, x: 0, y: 0, width: 3, height: 4 }.into(),
        ]
    }

    #[test]
    fn test_json_export_tags_type_first() {
        let exported = export_all(&shapes()).unwrap();
        assert_eq!(exported[0], r#"{"type":"dot","id":1,"x":10,"y":20}"#);
        assert_eq!(
            exported[2],
            r#"{"type":"rectangle","id":3,"x":0,"y":0,"width":3,"height":4}"#
        );
    }

    #[test]
    fn test_area_visitor_accumulates() {
        let mut visitor = AreaVisitor::default();
        let areas: Vec<f64> = shapes().iter().map(|s| s.accept(&mut visitor)).collect();

        assert_eq!(areas[0], 0.0);
        assert!((areas[1] - 4.0 * PI).abs() < 1e-9);
        assert_eq!(areas[2], 12.0);
        assert!((visitor.total - (12.0 + 4.0 * PI)).abs() < 1e-9);
    }

    #[test]
    fn test_concrete_shapes_accept_directly() {
        let circle = Circle { id: 9, x: 0, y: 0, radius: 1 };
        let json = circle.accept(&mut JsonExportVisitor).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "circle");
        assert_eq!(value["radius"], 1);
    }

    #[test]
    fn test_move_saturates_at_bounds() {
        let mut shape: AnyShape = Circle { id: 4, x: i32::MAX, y: i32::MIN, radius: 1 }.into();
        shape.move_by(1, -1);
        assert_eq!(
            shape.draw(),
            format!("Circle #4 at ({}, {}) r=1", i32::MAX, i32::MIN)
        );
    }

    #[test]
    fn test_move_and_draw() {
        let mut shape: AnyShape = Dot { id: 1, x: 0, y: 0 }.into();
        shape.move_by(2, -3);
        assert_eq!(shape.draw(), "Dot #1 at (2, -3)");
    }
}
