//! Structured logging initialization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log format (`json` or `human`).
pub const ENV_LOG_FORMAT: &str = "FRAGRANCE_LOG_FORMAT";
/// Standard filter variable, e.g. `fragrance_data=debug,info`.
pub const ENV_LOG_FILTER: &str = "RUST_LOG";

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for production/log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown log format {0:?} (expected \"json\" or \"human\")")]
pub struct ParseLogFormatError(String);

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "human" | "pretty" | "text" => Ok(Self::Human),
            other => Err(ParseLogFormatError(other.to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Human => write!(f, "human"),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub format: LogFormat,
    /// `EnvFilter` directives.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            filter: "info".to_string(),
        }
    }
}

impl LogConfig {
    /// Human-readable output at the given filter.
    pub fn human(filter: impl Into<String>) -> Self {
        Self {
            format: LogFormat::Human,
            filter: filter.into(),
        }
    }

    /// Defaults overridden by `FRAGRANCE_LOG_FORMAT` and `RUST_LOG`.
    pub fn from_env() -> Result<Self, ParseLogFormatError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ParseLogFormatError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            self.format = raw.parse()?;
        }
        if let Some(filter) = lookup(ENV_LOG_FILTER).filter(|f| !f.trim().is_empty()) {
            self.filter = filter;
        }
        Ok(self)
    }

    /// Build the filter, falling back to `info` on invalid directives.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize tracing/logging for the process.
///
/// Logs go to stderr so stdout stays free for rendered output. Safe to call
/// multiple times: only the first call installs a subscriber, and the return
/// value says whether this call did.
pub fn init(config: &LogConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init()
            .is_ok(),
        LogFormat::Human => builder.compact().try_init().is_ok(),
    };

    if installed {
        tracing::debug!(format = %config.format, filter = %config.filter, "logging initialized");
    }
    installed
}
