//! Configuration error types.

use thiserror::Error;

/// Errors raised while resolving storefront configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric setting could not be parsed.
    #[error("Invalid value for {key}: {value:?} is not a number")]
    InvalidNumber { key: &'static str, value: String },

    /// A timeout was set to zero.
    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}
