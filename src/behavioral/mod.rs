//! Behavioral patterns: how objects interact and share responsibility.

pub mod chain_of_responsibility;
pub mod command;
pub mod iterator;
pub mod mediator;
pub mod observer;
pub mod snapshot;
pub mod state;
pub mod strategy;
pub mod template_method;
pub mod visitor;
