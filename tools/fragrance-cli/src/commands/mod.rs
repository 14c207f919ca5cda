//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod render;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use fragrance_data::CatalogClient;
use fragrance_ui::StorefrontView;

use crate::context::Context;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Render with the mobile menu open.
    #[arg(long)]
    pub menu_open: bool,

    /// Write the page to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value in the config file.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the effective configuration.
    Validate,
}

/// Mount a view against the live catalog and wait for the load to settle.
pub(crate) async fn load_view(ctx: &Context) -> Result<StorefrontView> {
    let config = ctx.storefront()?;
    let catalog = CatalogClient::native(&config).context("Failed to create HTTP client")?;
    ctx.output.debug(&format!("GET {}", catalog.catalog_url()));

    let mut view = StorefrontView::from_config(&config);
    let spinner = ctx.output.spinner("Loading products…");
    view.mount(catalog).await;
    view.poll_updates();
    spinner.finish_and_clear();

    Ok(view)
}
