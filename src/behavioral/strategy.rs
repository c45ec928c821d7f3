//! Behavioral Pattern: Strategy
//! Example: Interchangeable arithmetic operations
//!
//! Run with: cargo run --bin strategy
//!
//! ## Problem
//! - A class that grows one algorithm after another becomes hard to maintain.
//! - The algorithm should be swappable at runtime without touching the class.
//!
//! ## Solution
//! Each algorithm lives behind a common interface. The [`Context`] holds one
//! and delegates to it; the client picks which one and may replace it later.
//! Getting to the airport by car, bus or bike: same goal, different strategy.
//!
//! ## Trade-offs
//! With only a couple of rarely-changing algorithms this is overkill, and
//! closures already give you most of it: any `Fn(i64, i64) -> Result<i64>`
//! is a [`Strategy`] through the blanket impl below.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),
}

pub trait Strategy {
    fn execute(&self, a: i64, b: i64) -> Result<i64, StrategyError>;
}

impl<F> Strategy for F
where
    F: Fn(i64, i64) -> Result<i64, StrategyError>,
{
    fn execute(&self, a: i64, b: i64) -> Result<i64, StrategyError> {
        self(a, b)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Add;

impl Strategy for Add {
    fn execute(&self, a: i64, b: i64) -> Result<i64, StrategyError> {
        a.checked_add(b).ok_or(StrategyError::Overflow("add"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Subtract;

impl Strategy for Subtract {
    fn execute(&self, a: i64, b: i64) -> Result<i64, StrategyError> {
        a.checked_sub(b).ok_or(StrategyError::Overflow("subtract"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Multiply;

impl Strategy for Multiply {
    fn execute(&self, a: i64, b: i64) -> Result<i64, StrategyError> {
        a.checked_mul(b).ok_or(StrategyError::Overflow("multiply"))
    }
}

/// Integer division truncating toward zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Divide;

impl Strategy for Divide {
    fn execute(&self, a: i64, b: i64) -> Result<i64, StrategyError> {
        if b == 0 {
            return Err(StrategyError::DivisionByZero);
        }
        a.checked_div(b).ok_or(StrategyError::Overflow("divide"))
    }
}

/// Named operations, parsed from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            Operation::Add => Box::new(Add),
            Operation::Subtract => Box::new(Subtract),
            Operation::Multiply => Box::new(Multiply),
            Operation::Divide => Box::new(Divide),
        }
    }
}

impl FromStr for Operation {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "-" => Ok(Operation::Subtract),
            "multiply" | "*" => Ok(Operation::Multiply),
            "divide" | "/" => Ok(Operation::Divide),
            other => Err(StrategyError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Subtract => write!(f, "subtract"),
            Operation::Multiply => write!(f, "multiply"),
            Operation::Divide => write!(f, "divide"),
        }
    }
}

pub struct Context {
    strategy: Box<dyn Strategy>,
}

impl Context {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Context { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = strategy;
    }

    pub fn execute_strategy(&self, a: i64, b: i64) -> Result<i64, StrategyError> {
        let result = self.strategy.execute(a, b);
        trace!(a, b, ?result, "executed strategy");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_context_swaps_strategy_at_runtime() {
        let mut context = Context::new(Box::new(Add));
        assert_eq!(context.execute_strategy(1, 2), Ok(3));

        context.set_strategy(Box::new(Multiply));
        assert_eq!(context.execute_strategy(3, 4), Ok(12));
    }

    #[test]
    fn test_parse_operation() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!(" Divide ".parse::<Operation>(), Ok(Operation::Divide));
        assert_eq!("-".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!(
            "modulo".parse::<Operation>(),
            Err(StrategyError::UnknownOperation("modulo".into()))
        );
    }

    #[test]
    fn test_division_errors() {
        assert_eq!(Divide.execute(1, 0), Err(StrategyError::DivisionByZero));
        assert_eq!(
            Divide.execute(i64::MIN, -1),
            Err(StrategyError::Overflow("divide"))
        );
        assert_eq!(Divide.execute(-7, 2), Ok(-3));
    }

    #[test]
    fn test_closure_is_a_strategy() {
        let max = |a: i64, b: i64| -> Result<i64, StrategyError> { Ok(a.max(b)) };
        let context = Context::new(Box::new(max));
        assert_eq!(context.execute_strategy(4, 9), Ok(9));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
    }

    proptest! {
        #[test]
        fn prop_strategies_match_checked_arithmetic(a: i64, b: i64) {
            prop_assert_eq!(Add.execute(a, b).ok(), a.checked_add(b));
            prop_assert_eq!(Subtract.execute(a, b).ok(), a.checked_sub(b));
            prop_assert_eq!(Multiply.execute(a, b).ok(), a.checked_mul(b));
            prop_assert_eq!(Divide.execute(a, b).ok(), a.checked_div(b));
        }
    }
}
