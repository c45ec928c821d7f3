//! Crate-level error type.
//!
//! Every pattern module owns a small `thiserror` enum for its own failure
//! modes. Demo binaries only care that something went wrong, so they return
//! this wrapper and let `?` do the conversions.

use thiserror::Error;

use crate::behavioral::{chain_of_responsibility, command, iterator, observer, strategy, visitor};
use crate::config::ConfigError;
use crate::creational::builder;
use crate::structural::decorator;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Chain(#[from] chain_of_responsibility::ChainError),

    #[error(transparent)]
    Command(#[from] command::CommandError),

    #[error(transparent)]
    Iterator(#[from] iterator::IteratorError),

    #[error(transparent)]
    Observer(#[from] observer::ObserverError),

    #[error(transparent)]
    Strategy(#[from] strategy::StrategyError),

    #[error(transparent)]
    Visitor(#[from] visitor::VisitorError),

    #[error(transparent)]
    Build(#[from] builder::BuildError),

    #[error(transparent)]
    DataSource(#[from] decorator::DataSourceError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_errors_convert_transparently() {
        let err: Error = iterator::IteratorError::Exhausted.into();
        assert_eq!(err.to_string(), iterator::IteratorError::Exhausted.to_string());

        let err: Error = strategy::StrategyError::DivisionByZero.into();
        assert!(matches!(err, Error::Strategy(_)));
    }
}
