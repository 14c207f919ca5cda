//! Timeout configuration for fetch operations.

use std::time::Duration;

use fragrance_core::StorefrontConfig;

/// Timeout configuration for a fetch operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Connection timeout.
    pub connect: Duration,
    /// Total operation timeout.
    pub total: Duration,
}

impl TimeoutConfig {
    /// Create a new timeout configuration.
    pub fn new(connect: Duration, total: Duration) -> Self {
        Self { connect, total }
    }

    /// Create from a single total timeout.
    pub fn from_total(total: Duration) -> Self {
        Self {
            connect: std::cmp::min(total, Duration::from_secs(3)),
            total,
        }
    }

    /// Take the catalog timeouts from storefront configuration.
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self {
            connect: config.connect_timeout(),
            total: config.catalog_timeout(),
        }
    }
}

impl TimeoutConfig {
    /// Connect timeout in nanoseconds, saturating.
    pub fn connect_nanos(&self) -> u64 {
        saturating_nanos(self.connect)
    }

    /// Total timeout in nanoseconds, saturating.
    pub fn total_nanos(&self) -> u64 {
        saturating_nanos(self.total)
    }
}

fn saturating_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self::from_config(&StorefrontConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_default_matches_config_default() {
        let timeout = TimeoutConfig::default();
        assert_eq!(timeout.connect, Duration::from_secs(3));
        assert_eq!(timeout.total, Duration::from_secs(10));
    }

    #[test]
    fn test_timeout_from_total_caps_connect() {
        let timeout = TimeoutConfig::from_total(Duration::from_millis(500));
        assert_eq!(timeout.connect, Duration::from_millis(500));

        let timeout = TimeoutConfig::from_total(Duration::from_secs(30));
        assert_eq!(timeout.connect, Duration::from_secs(3));
    }

    #[test]
    fn test_timeout_from_config() {
        let config = StorefrontConfig::default().with_catalog_timeout(Duration::from_secs(2));
        let timeout = TimeoutConfig::from_config(&config);
        assert_eq!(timeout.total, Duration::from_secs(2));
    }

    #[test]
    fn test_timeout_nanos() {
        let timeout = TimeoutConfig::default();
        assert_eq!(timeout.connect_nanos(), 3_000_000_000);
        assert_eq!(timeout.total_nanos(), 10_000_000_000);

        let huge = TimeoutConfig::new(Duration::MAX, Duration::MAX);
        assert_eq!(huge.total_nanos(), u64::MAX);
    }
}
