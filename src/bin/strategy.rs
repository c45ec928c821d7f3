//! Demo: a calculator that swaps its arithmetic at runtime
//!
//! Run with: cargo run --bin strategy

use design_patterns::behavioral::strategy::{Context, Operation, StrategyError};
use design_patterns::console;

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("Strategy");

    let (a, b) = (84, 2);
    let mut context = Context::new(Operation::Add.strategy());

    for symbol in ["+", "-", "*", "/"] {
        let operation: Operation = symbol.parse()?;
        context.set_strategy(operation.strategy());
        console::lines([format!("{} {} {} = {}", a, operation, b, context.execute_strategy(a, b)?)]);
    }

    console::section("Custom strategy");
    context.set_strategy(Box::new(|x: i64, y: i64| -> Result<i64, StrategyError> {
        Ok(x.max(y))
    }));
    console::lines([format!("max({}, {}) = {}", a, b, context.execute_strategy(a, b)?)]);

    console::section("Errors");
    context.set_strategy(Operation::Divide.strategy());
    if let Err(err) = context.execute_strategy(a, 0) {
        console::failure(&err.to_string());
    }
    if let Err(err) = "%".parse::<Operation>() {
        console::failure(&err.to_string());
    }

    Ok(())
}
