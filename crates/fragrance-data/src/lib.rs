//! Catalog data access for the storefront.
//!
//! - [`HttpTransport`] - GET over reqwest (`native`) or Spin outbound HTTP (`spin`)
//! - [`FetchClient`] - base-URL resolution and JSON decoding
//! - [`CatalogClient`] - `GET {base}/api/products` into `Vec<Product>`
//! - [`ProductLoader`] - Pending / Failed / Ready with stale-result discard
//!
//! # Example
//!
//! ```ignore
//! use fragrance_core::StorefrontConfig;
//! use fragrance_data::{CatalogClient, ProductLoader};
//!
//! let config = StorefrontConfig::from_env()?;
//! let catalog = CatalogClient::native(&config)?;
//!
//! let mut loader = ProductLoader::new();
//! let state = loader.load(&catalog).await;
//! println!("{}", state.name());
//! ```

mod catalog;
mod client;
mod error;
mod loader;
mod response;
mod timeout;
mod transport;

pub use catalog::*;
pub use client::*;
pub use error::*;
pub use loader::*;
pub use response::*;
pub use timeout::*;
pub use transport::*;
