//! CLI configuration.

use anyhow::{Context, Result};
use fragrance_core::StorefrontConfig;
use fragrance_observability::LogConfig;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, from the working directory upwards.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["fragrance.toml", ".fragrance.toml", "fragrance.json"];

/// CLI configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront settings shared with the workload.
    #[serde(default)]
    pub storefront: StorefrontConfig,

    /// Logging for the CLI process.
    #[serde(default = "default_log")]
    pub log: LogConfig,
}

/// The CLI logs to the terminal, so it defaults to compact human output.
fn default_log() -> LogConfig {
    LogConfig::human("warn")
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config content, picking the format from the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        let config: Self = if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .storefront
            .validate()
            .with_context(|| format!("Invalid storefront settings in {}", path))?;
        Ok(config)
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Storefront settings with environment and flag overrides applied.
    ///
    /// Precedence, lowest first: file, environment, `--base-url`.
    pub fn resolve_storefront<F>(&self, lookup: F, base_url: Option<&str>) -> Result<StorefrontConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut storefront = self
            .storefront
            .clone()
            .with_overrides(lookup)
            .context("Invalid storefront environment")?;

        if let Some(url) = base_url {
            storefront = storefront.with_base_url(url);
        }
        Ok(storefront)
    }

    /// Log settings with environment overrides; `--verbose` forces debug.
    pub fn resolve_log<F>(&self, lookup: F, verbose: bool) -> LogConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut log = self
            .log
            .clone()
            .with_overrides(lookup)
            .unwrap_or_else(|_| self.log.clone());

        if verbose {
            log.filter = "debug".to_string();
        }
        log
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            storefront: StorefrontConfig::default(),
            log: default_log(),
        }
    }
}

/// Generate a default fragrance.toml config file.
pub fn generate_default_config() -> String {
    let storefront = StorefrontConfig::default();
    let log = default_log();

    format!(
        r#"# FRAGRANCE. storefront configuration

[storefront]
# Backend serving GET /api/products. Empty means same-origin.
base_url = "{base_url}"
catalog_timeout_ms = {timeout}
connect_timeout_ms = {connect}
cart_count = {cart}

[log]
# "human" or "json"
format = "{format}"
filter = "{filter}"
"#,
        base_url = storefront.base_url,
        timeout = storefront.catalog_timeout_ms,
        connect = storefront.connect_timeout_ms,
        cart = storefront.cart_count,
        format = log.format,
        filter = log.filter,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fragrance_core::ENV_BACKEND_URL;
    use fragrance_observability::LogFormat;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = CliConfig::parse("fragrance.toml", &generate_default_config()).unwrap();

        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log, LogConfig::human("warn"));
    }

    #[test]
    fn test_save_and_load_toml() {
        let dir = std::env::temp_dir().join(format!("fragrance-cli-save-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("fragrance.toml");
        let path = path.to_str().unwrap();

        let mut config = CliConfig::default();
        config.storefront.cart_count = 5;
        config.save(path).unwrap();

        assert_eq!(CliConfig::load(path).unwrap(), config);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = CliConfig::parse(
            "fragrance.toml",
            "[storefront]\nbase_url = \"http://localhost:8000\"\n",
        )
        .unwrap();

        assert_eq!(config.storefront.base_url, "http://localhost:8000");
        assert_eq!(config.storefront.cart_count, 2);
        assert_eq!(config.log.format, LogFormat::Human);
    }

    #[test]
    fn test_parse_json() {
        let config = CliConfig::parse(
            "fragrance.json",
            r#"{"storefront": {"cart_count": 0}, "log": {"format": "json"}}"#,
        )
        .unwrap();

        assert_eq!(config.storefront.cart_count, 0);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_parse_rejects_zero_timeout() {
        let result = CliConfig::parse(
            "fragrance.toml",
            "[storefront]\ncatalog_timeout_ms = 0\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_storefront_precedence() {
        let config = CliConfig::parse(
            "fragrance.toml",
            "[storefront]\nbase_url = \"http://from-file\"\n",
        )
        .unwrap();

        let from_file = config.resolve_storefront(no_env, None).unwrap();
        assert_eq!(from_file.base_url, "http://from-file");

        let env = |key: &str| (key == ENV_BACKEND_URL).then(|| "http://from-env".to_string());
        let from_env = config.resolve_storefront(env, None).unwrap();
        assert_eq!(from_env.base_url, "http://from-env");

        let from_flag = config
            .resolve_storefront(env, Some("http://from-flag"))
            .unwrap();
        assert_eq!(from_flag.base_url, "http://from-flag");
    }

    #[test]
    fn test_resolve_log_verbose() {
        let config = CliConfig::parse("fragrance.toml", "").unwrap();
        assert_eq!(config.resolve_log(no_env, false).filter, "warn");
        assert_eq!(config.resolve_log(no_env, true).filter, "debug");
    }
}
