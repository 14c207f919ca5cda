//! Configuration management commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use fragrance_observability::LogFormat;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let effective = CliConfig {
        storefront: ctx.storefront()?,
        log: ctx.log_config(false),
    };

    if ctx.output.is_json() {
        ctx.output.json(&effective);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    println!();
    println!("[storefront]");
    let storefront = &effective.storefront;
    let base_url = if storefront.base_url.is_empty() {
        "(same origin)"
    } else {
        storefront.base_url.as_str()
    };
    ctx.output.kv("base_url", base_url);
    ctx.output.kv("catalog_url", &storefront.catalog_url());
    ctx.output.kv("catalog_timeout_ms", &storefront.catalog_timeout_ms.to_string());
    ctx.output.kv("connect_timeout_ms", &storefront.connect_timeout_ms.to_string());
    ctx.output.kv("cart_count", &storefront.cart_count.to_string());

    println!();
    println!("[log]");
    ctx.output.kv("format", &effective.log.format.to_string());
    ctx.output.kv("filter", &effective.log.filter);

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = match &ctx.config_path {
        Some(path) => path.to_string_lossy().to_string(),
        None => bail!("No config file found. Run `fragrance config init` to create one."),
    };

    let mut config = CliConfig::load(&config_path)?;
    set_config_value(&mut config, key, value)?;
    config
        .storefront
        .validate()
        .with_context(|| format!("Refusing to set {} = {}", key, value))?;
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path: PathBuf = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    storefront.validate()?;

    if !storefront.base_url.is_empty()
        && !storefront.base_url.starts_with("http://")
        && !storefront.base_url.starts_with("https://")
    {
        bail!(
            "storefront.base_url must be empty or an http(s) URL, got '{}'",
            storefront.base_url
        );
    }

    if storefront.base_url.is_empty() {
        ctx.output
            .warn("storefront.base_url is empty; the CLI needs an absolute backend URL");
    }
    if storefront.connect_timeout_ms > storefront.catalog_timeout_ms {
        ctx.output
            .warn("storefront.connect_timeout_ms exceeds catalog_timeout_ms; the total timeout fires first");
    }

    ctx.output.success("Configuration is valid");
    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["storefront", "base_url"] => Ok(config.storefront.base_url.clone()),
        ["storefront", "catalog_timeout_ms"] => Ok(config.storefront.catalog_timeout_ms.to_string()),
        ["storefront", "connect_timeout_ms"] => Ok(config.storefront.connect_timeout_ms.to_string()),
        ["storefront", "cart_count"] => Ok(config.storefront.cart_count.to_string()),
        ["log", "format"] => Ok(config.log.format.to_string()),
        ["log", "filter"] => Ok(config.log.filter.clone()),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["storefront", "base_url"] => config.storefront.base_url = value.to_string(),
        ["storefront", "catalog_timeout_ms"] => {
            config.storefront.catalog_timeout_ms = value.parse()?
        }
        ["storefront", "connect_timeout_ms"] => {
            config.storefront.connect_timeout_ms = value.parse()?
        }
        ["storefront", "cart_count"] => config.storefront.cart_count = value.parse()?,
        ["log", "format"] => config.log.format = value.parse::<LogFormat>()?,
        ["log", "filter"] => config.log.filter = value.to_string(),
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_value() {
        let config = CliConfig::default();

        assert_eq!(get_config_value(&config, "storefront.cart_count").unwrap(), "2");
        assert_eq!(get_config_value(&config, "storefront.catalog_timeout_ms").unwrap(), "10000");
        assert_eq!(get_config_value(&config, "log.format").unwrap(), "human");
        assert!(get_config_value(&config, "storefront.nope").is_err());
    }

    #[test]
    fn test_set_config_value() {
        let mut config = CliConfig::default();

        set_config_value(&mut config, "storefront.base_url", "http://localhost:8000").unwrap();
        set_config_value(&mut config, "storefront.cart_count", "0").unwrap();
        set_config_value(&mut config, "log.format", "json").unwrap();

        assert_eq!(config.storefront.base_url, "http://localhost:8000");
        assert_eq!(config.storefront.cart_count, 0);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_set_config_value_rejects_bad_input() {
        let mut config = CliConfig::default();

        assert!(set_config_value(&mut config, "storefront.cart_count", "two").is_err());
        assert!(set_config_value(&mut config, "log.format", "xml").is_err());
        assert!(set_config_value(&mut config, "deploy.canary", "true").is_err());
        assert_eq!(config, CliConfig::default());
    }
}
