//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use fragrance_core::StorefrontConfig;
use fragrance_observability::LogConfig;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration, as loaded from disk.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// `--base-url` flag.
    pub base_url: Option<String>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, base_url: Option<String>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(PathBuf::from(path)),
            None => find_config(&cwd),
        };

        let config = match &config_path {
            Some(path) => CliConfig::load(&path.to_string_lossy())?,
            None => CliConfig::default(),
        };

        Ok(Self {
            config,
            config_path,
            base_url,
            output,
            cwd,
        })
    }

    /// Storefront settings after environment and `--base-url` overrides.
    pub fn storefront(&self) -> Result<StorefrontConfig> {
        self.config
            .resolve_storefront(|key| std::env::var(key).ok(), self.base_url.as_deref())
    }

    /// Logging settings after environment overrides.
    pub fn log_config(&self, verbose: bool) -> LogConfig {
        self.config
            .resolve_log(|key| std::env::var(key).ok(), verbose)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find a config file in `start` or any of its parents.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "fragrance-cli-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_find_config_walks_up() {
        let root = scratch_dir("walk");
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join("fragrance.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(root.join("fragrance.toml")));
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let root = scratch_dir("nearest");
        let nested = root.join("shop");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join("fragrance.toml"), "").unwrap();
        std::fs::write(nested.join(".fragrance.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(nested.join(".fragrance.toml")));
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_resolve_path() {
        let ctx = Context {
            config: CliConfig::default(),
            config_path: None,
            base_url: None,
            output: Output::new(false, false),
            cwd: PathBuf::from("/srv/shop"),
        };

        assert_eq!(ctx.resolve_path("page.html"), PathBuf::from("/srv/shop/page.html"));
        assert_eq!(ctx.resolve_path("/tmp/page.html"), PathBuf::from("/tmp/page.html"));
    }
}
