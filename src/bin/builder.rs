//! Demo: one director, two builders, a car and its manual
//!
//! Run with: cargo run --bin builder

use design_patterns::console;
use design_patterns::creational::builder::{Builder, CarBuilder, CarManualBuilder, Director};

fn main() -> design_patterns::Result<()> {
    console::bootstrap()?;
    console::heading("Builder");

    let director = Director;

    console::section("Sports car");
    let mut car_builder = CarBuilder::default();
    director.construct_sports_car(&mut car_builder);
    let car = car_builder.build()?;
    console::lines([format!("{:?}", car)]);

    console::section("Its manual");
    let mut manual_builder = CarManualBuilder::default();
    director.construct_sports_car(&mut manual_builder);
    console::lines(manual_builder.build()?.pages());

    console::section("SUV");
    director.construct_suv(&mut car_builder);
    console::lines([format!("{:?}", car_builder.build()?)]);

    console::section("Hand-built, no seats");
    if let Err(err) = CarBuilder::default().engine("electric").build() {
        console::failure(&err.to_string());
    }

    Ok(())
}
