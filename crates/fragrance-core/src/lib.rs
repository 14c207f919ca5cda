//! Core types for the FRAGRANCE. storefront.
//!
//! This crate provides the fundamental types shared by the data layer,
//! the presentation tree, and the binaries:
//! - `Product` / `ProductId` / `ProductKey` - Catalog records and render identity
//! - `Price` - Two-decimal price formatting
//! - `LoadState` - Pending / Failed / Ready catalog state
//! - `MenuVisibility` - Mobile menu open flag
//! - `StorefrontConfig` - Backend URL, timeouts, cart badge

mod config;
mod error;
mod mount;
mod price;
mod product;
mod state;

pub use config::*;
pub use error::*;
pub use mount::*;
pub use price::*;
pub use product::*;
pub use state::*;
