//! Storefront configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Fixed path of the catalog endpoint, appended to the base URL.
pub const CATALOG_PATH: &str = "/api/products";

/// Environment variable holding the backend base URL.
pub const ENV_BACKEND_URL: &str = "FRAGRANCE_BACKEND_URL";
/// Environment variable overriding the total catalog fetch timeout.
pub const ENV_CATALOG_TIMEOUT_MS: &str = "FRAGRANCE_CATALOG_TIMEOUT_MS";
/// Environment variable overriding the connect timeout.
pub const ENV_CONNECT_TIMEOUT_MS: &str = "FRAGRANCE_CONNECT_TIMEOUT_MS";
/// Environment variable overriding the cart badge count.
pub const ENV_CART_COUNT: &str = "FRAGRANCE_CART_COUNT";

/// Configuration for one storefront deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Backend base URL. Empty means same-origin.
    pub base_url: String,
    /// Total time allowed for the catalog fetch.
    pub catalog_timeout_ms: u64,
    /// Time allowed to establish the connection.
    pub connect_timeout_ms: u64,
    /// Display-only cart badge value.
    pub cart_count: u32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            catalog_timeout_ms: 10_000,
            connect_timeout_ms: 3_000,
            cart_count: 2,
        }
    }
}

impl StorefrontConfig {
    /// Create a configuration pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Load defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (environment, Spin variables, ...).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BACKEND_URL) {
            self.base_url = url;
        }
        if let Some(raw) = lookup(ENV_CATALOG_TIMEOUT_MS) {
            self.catalog_timeout_ms = parse_number(ENV_CATALOG_TIMEOUT_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_CONNECT_TIMEOUT_MS) {
            self.connect_timeout_ms = parse_number(ENV_CONNECT_TIMEOUT_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_CART_COUNT) {
            self.cart_count = parse_number(ENV_CART_COUNT, &raw)?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Set the backend base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the total catalog timeout.
    pub fn with_catalog_timeout(mut self, timeout: Duration) -> Self {
        self.catalog_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Set the cart badge value.
    pub fn with_cart_count(mut self, count: u32) -> Self {
        self.cart_count = count;
        self
    }

    /// Check the timeouts are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout("catalog_timeout_ms"));
        }
        if self.connect_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout("connect_timeout_ms"));
        }
        Ok(())
    }

    /// Full URL of the catalog endpoint.
    pub fn catalog_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CATALOG_PATH)
    }

    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_millis(self.catalog_timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}
