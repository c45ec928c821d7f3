//! Structural Pattern: Composite
//! Example: Nested groups of graphics moved and drawn as one
//!
//! Run with: cargo run --bin composite
//!
//! Leaves ([`Dot`], [`Circle`]) and containers ([`CompoundGraphic`]) share
//! the [`Graphic`] trait, so client code treats a single dot and a whole
//! nested drawing the same way. Containers forward each call to their
//! children and combine the results.

pub trait Graphic {
    fn move_by(&mut self, dx: i32, dy: i32);
    /// One line per leaf, in insertion order.
    fn draw(&self) -> Vec<String>;
    /// Number of leaves in this subtree.
    fn count(&self) -> usize {
        1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub x: i32,
    pub y: i32,
}

impl Dot {
    pub fn new(x: i32, y: i32) -> Self {
        Dot { x, y }
    }
}

impl Graphic for Dot {
    fn move_by(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    fn draw(&self) -> Vec<String> {
        vec![format!("Draw dot at {} {}", self.x, self.y)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub radius: u32,
}

impl Circle {
    pub fn new(x: i32, y: i32, radius: u32) -> Self {
        Circle { x, y, radius }
    }
}

impl Graphic for Circle {
    fn move_by(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    fn draw(&self) -> Vec<String> {
        vec![format!(
            "Draw circle at {} {} with radius {}",
            self.x, self.y, self.radius
        )]
    }
}

#[derive(Default)]
pub struct CompoundGraphic {
    children: Vec<Box<dyn Graphic>>,
}

impl CompoundGraphic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, child: impl Graphic + 'static) -> &mut Self {
        self.children.push(Box::new(child));
        self
    }

    /// Detaches the direct child at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Graphic>> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Graphic for CompoundGraphic {
    fn move_by(&mut self, dx: i32, dy: i32) {
        for child in &mut self.children {
            child.move_by(dx, dy);
        }
    }

    fn draw(&self) -> Vec<String> {
        self.children.iter().flat_map(|c| c.draw()).collect()
    }

    fn count(&self) -> usize {
        self.children.iter().map(|c| c.count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawing() -> CompoundGraphic {
        let mut group = CompoundGraphic::new();
        group
            .add(Dot::new(1, 2))
            .add(Dot::new(3, 4))
            .add(Circle::new(5, 6, 7));
        group
    }

    #[test]
    fn test_draw_in_order() {
        assert_eq!(
            drawing().draw(),
            vec![
                "Draw dot at 1 2",
                "Draw dot at 3 4",
                "Draw circle at 5 6 with radius 7"
            ]
        );
    }

    #[test]
    fn test_move_reaches_every_leaf() {
        let mut group = drawing();
        group.move_by(1, 1);
        assert_eq!(group.draw()[0], "Draw dot at 2 3");
        assert_eq!(group.draw()[2], "Draw circle at 6 7 with radius 7");
    }

    #[test]
    fn test_remove_child() {
        let mut group = drawing();
        let removed = group.remove(0).unwrap();
        assert_eq!(removed.draw(), vec!["Draw dot at 1 2"]);
        assert_eq!(group.len(), 2);
        assert!(group.remove(5).is_none());
    }

    #[test]
    fn test_move_saturates_at_bounds() {
        let mut group = CompoundGraphic::new();
        group.add(Dot::new(i32::MAX - 1, i32::MIN + 1));
        group.move_by(10, -10);
        assert_eq!(group.draw(), vec![format!("Draw dot at {} {}", i32::MAX, i32::MIN)]);
    }

    #[test]
    fn test_nested_groups() {
        let mut outer = CompoundGraphic::new();
        outer.add(Dot::new(0, 0)).add(drawing());

        assert_eq!(outer.len(), 2);
        assert_eq!(outer.count(), 4);

        outer.move_by(10, 0);
        assert_eq!(outer.draw()[1], "Draw dot at 11 2");
        assert!(CompoundGraphic::new().is_empty());
    }
}
