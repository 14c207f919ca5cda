//! Observability setup for the storefront.
//!
//! This crate provides:
//! - `LogFormat` - JSON for production, human-readable for development
//! - `LogConfig` - Format and `EnvFilter` directives, from file or environment
//! - `init` - Install the global `tracing` subscriber once per process

mod logging;

pub use logging::*;
