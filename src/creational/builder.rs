//! Creational Pattern: Builder
//! Example: Cars and their manuals built by the same construction steps
//!
//! Run with: cargo run --bin builder
//!
//! ## Problem
//! Objects with many optional parts lead to huge constructors or to a
//! subclass per configuration. Sometimes the same construction steps must
//! also yield a different representation (a car and its manual).
//!
//! ## Solution
//! Move construction into a builder with one method per step; call only the
//! steps you need, then `build`. A [`Director`] can encode common recipes
//! so clients don't repeat step sequences. It is optional.
//!
//! ## Structure
//! - [`Builder`]: the construction steps plus `build`, with the product as an
//!   associated type.
//! - [`CarBuilder`] → [`Car`] and [`CarManualBuilder`] → [`Manual`]: two
//!   builders, two unrelated products, same steps.
//! - [`Director`]: recipes for a sports car and an SUV.
//!
//! Steps return `&mut Self`, so calls chain; `build` validates that the
//! required parts (engine, seats) were provided.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("missing required part: {0}")]
    MissingField(&'static str),
    #[error("a car needs at least one seat")]
    NoSeats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CarType {
    #[default]
    CityCar,
    SportsCar,
    Suv,
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarType::CityCar => write!(f, "city car"),
            CarType::SportsCar => write!(f, "sports car"),
            CarType::Suv => write!(f, "SUV"),
        }
    }
}

pub trait Builder {
    type Product;

    fn reset(&mut self) -> &mut Self;
    fn car_type(&mut self, car_type: CarType) -> &mut Self;
    fn engine(&mut self, engine: &str) -> &mut Self;
    fn seats(&mut self, seats: u8) -> &mut Self;
    fn trip_computer(&mut self, enabled: bool) -> &mut Self;
    fn gps(&mut self, enabled: bool) -> &mut Self;
    fn build(&self) -> Result<Self::Product, BuildError>;
}

/// Parts collected so far; shared by both builders.
#[derive(Debug, Clone, Default)]
struct Parts {
    car_type: CarType,
    engine: Option<String>,
    seats: Option<u8>,
    trip_computer: bool,
    gps: bool,
}

impl Parts {
    fn validate(&self) -> Result<(String, u8), BuildError> {
        let engine = self.engine.clone().ok_or(BuildError::MissingField("engine"))?;
        let seats = self.seats.ok_or(BuildError::MissingField("seats"))?;
        if seats == 0 {
            return Err(BuildError::NoSeats);
        }
        Ok((engine, seats))
    }
}

/// Implements every step by writing into `self.parts`.
macro_rules! impl_builder_steps {
    () => {
        fn reset(&mut self) -> &mut Self {
            self.parts = Parts::default();
            self
        }

        fn car_type(&mut self, car_type: CarType) -> &mut Self {
            self.parts.car_type = car_type;
            self
        }

        fn engine(&mut self, engine: &str) -> &mut Self {
            self.parts.engine = Some(engine.to_string());
            self
        }

        fn seats(&mut self, seats: u8) -> &mut Self {
            self.parts.seats = Some(seats);
            self
        }

        fn trip_computer(&mut self, enabled: bool) -> &mut Self {
            self.parts.trip_computer = enabled;
            self
        }

        fn gps(&mut self, enabled: bool) -> &mut Self {
            self.parts.gps = enabled;
            self
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    pub car_type: CarType,
    pub engine: String,
    pub seats: u8,
    pub trip_computer: bool,
    pub gps: bool,
}

#[derive(Debug, Default)]
pub struct CarBuilder {
    parts: Parts,
}

impl Builder for CarBuilder {
    type Product = Car;

    impl_builder_steps!();

    fn build(&self) -> Result<Car, BuildError> {
        let (engine, seats) = self.parts.validate()?;
        debug!(car_type = %self.parts.car_type, "built car");
        Ok(Car {
            car_type: self.parts.car_type,
            engine,
            seats,
            trip_computer: self.parts.trip_computer,
            gps: self.parts.gps,
        })
    }
}

/// A manual describes a car rather than being one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manual {
    pages: Vec<String>,
}

impl Manual {
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn render(&self) -> String {
        self.pages.join("\n")
    }
}

#[derive(Debug, Default)]
pub struct CarManualBuilder {
    parts: Parts,
}

impl Builder for CarManualBuilder {
    type Product = Manual;

    impl_builder_steps!();

    fn build(&self) -> Result<Manual, BuildError> {
        let (engine, seats) = self.parts.validate()?;
        let on_off = |enabled: bool| if enabled { "installed" } else { "not installed" };

        Ok(Manual {
            pages: vec![
                format!("Type of car: {}", self.parts.car_type),
                format!("Engine: {}", engine),
                format!("Seats: {}", seats),
                format!("Trip computer: {}", on_off(self.parts.trip_computer)),
                format!("GPS navigator: {}", on_off(self.parts.gps)),
            ],
        })
    }
}

/// Knows the step sequences for popular configurations.
#[derive(Debug, Default)]
pub struct Director;

impl Director {
    pub fn construct_sports_car<B: Builder>(&self, builder: &mut B) {
        builder
            .reset()
            .car_type(CarType::SportsCar)
            .engine("V8")
            .seats(2)
            .trip_computer(true)
            .gps(true);
    }

    pub fn construct_suv<B: Builder>(&self, builder: &mut B) {
        builder
            .reset()
            .car_type(CarType::Suv)
            .engine("2.5L diesel")
            .seats(7)
            .gps(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chained_steps() {
        let car = CarBuilder::default()
            .engine("V8")
            .seats(4)
            .trip_computer(true)
            .gps(true)
            .build()
            .unwrap();

        assert_eq!(car.engine, "V8");
        assert_eq!(car.seats, 4);
        assert_eq!(car.car_type, CarType::CityCar);
    }

    #[test]
    fn test_missing_parts() {
        let mut builder = CarBuilder::default();
        assert_eq!(builder.build(), Err(BuildError::MissingField("engine")));

        builder.engine("V6");
        assert_eq!(builder.build(), Err(BuildError::MissingField("seats")));

        builder.seats(0);
        assert_eq!(builder.build(), Err(BuildError::NoSeats));
    }

    #[test]
    fn test_director_drives_both_builders() {
        let director = Director;

        let mut car_builder = CarBuilder::default();
        director.construct_sports_car(&mut car_builder);
        let car = car_builder.build().unwrap();
        assert_eq!(car.car_type, CarType::SportsCar);
        assert_eq!(car.seats, 2);

        let mut manual_builder = CarManualBuilder::default();
        director.construct_sports_car(&mut manual_builder);
        let manual = manual_builder.build().unwrap();
        assert_eq!(manual.pages()[0], "Type of car: sports car");
        assert!(manual.render().contains("Engine: V8"));
    }

    #[test]
    fn test_reset_clears_previous_recipe() {
        let director = Director;
        let mut builder = CarBuilder::default();
        director.construct_sports_car(&mut builder);
        director.construct_suv(&mut builder);

        let suv = builder.build().unwrap();
        assert_eq!(suv.car_type, CarType::Suv);
        assert!(!suv.trip_computer);
    }

    #[test]
    fn test_car_serializes() {
        let mut builder = CarBuilder::default();
        Director.construct_suv(&mut builder);
        let json = serde_json::to_value(builder.build().unwrap()).unwrap();
        assert_eq!(json["car_type"], "suv");
        assert_eq!(json["seats"], 7);
    }
}
