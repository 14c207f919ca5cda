//! Streaming primitives for shell-first SSR.
//!
//! This crate enforces shell-first streaming patterns:
//! - `StreamingSink` - Shell, then sections, then deferred replacements
//! - `Shell` / `HeadContent` - Document scaffolding around the sections
//! - `StreamError` - Ordering and write failures

mod error;
mod shell;
mod sink;

pub use error::*;
pub use shell::*;
pub use sink::*;
