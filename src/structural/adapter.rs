//! Structural Pattern: Adapter
//! Example: Square pegs in round holes
//!
//! Run with: cargo run --bin adapter
//!
//! [`RoundHole::fits`] only understands things with a radius. A
//! [`SquarePeg`] has a width instead, so [`SquarePegAdapter`] wraps it and
//! reports the radius of the smallest circle around the square
//! (`width * sqrt(2) / 2`). Neither the hole nor the peg changes.

/// Anything with a radius.
pub trait Round {
    fn radius(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundHole {
    radius: f64,
}

impl RoundHole {
    pub fn new(radius: f64) -> Self {
        RoundHole { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn fits(&self, peg: &impl Round) -> bool {
        self.radius >= peg.radius()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundPeg {
    radius: f64,
}

impl RoundPeg {
    pub fn new(radius: f64) -> Self {
        RoundPeg { radius }
    }
}

impl Round for RoundPeg {
    fn radius(&self) -> f64 {
        self.radius
    }
}

/// Incompatible with [`RoundHole`] on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquarePeg {
    width: f64,
}

impl SquarePeg {
    pub fn new(width: f64) -> Self {
        SquarePeg { width }
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SquarePegAdapter<'a> {
    peg: &'a SquarePeg,
}

impl<'a> SquarePegAdapter<'a> {
    pub fn new(peg: &'a SquarePeg) -> Self {
        SquarePegAdapter { peg }
    }
}

impl Round for SquarePegAdapter<'_> {
    fn radius(&self) -> f64 {
        self.peg.width() * std::f64::consts::SQRT_2 / 2.0
    }
}
