//! Render the storefront page.

use anyhow::{Context as _, Result};

use super::{load_view, RenderArgs};
use crate::context::Context;
use crate::output::format_bytes;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut view = load_view(ctx).await?;

    if let Some(message) = view.state().error_message() {
        ctx.output.warn(message);
    }
    if args.menu_open {
        view.open_menu();
    }

    let html = view.render();

    match args.output {
        Some(path) => {
            let path = ctx.resolve_path(&path);
            std::fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ctx.output.success(&format!(
                "Wrote {} ({}, {} products)",
                path.display(),
                format_bytes(html.len() as u64),
                view.state().products().len()
            ));
        }
        None => print!("{}", html),
    }

    Ok(())
}
