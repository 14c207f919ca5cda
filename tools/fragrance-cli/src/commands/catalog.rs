//! List the product catalog.

use anyhow::{bail, Result};
use fragrance_core::LoadState;
use serde_json::{json, Value};

use super::{load_view, CatalogArgs};
use crate::context::Context;
use crate::output::{column_widths, state_badge};

const HEADER: [&str; 3] = ["KEY", "TITLE", "PRICE"];

/// Run the catalog command.
pub async fn run(_args: CatalogArgs, ctx: &Context) -> Result<()> {
    let view = load_view(ctx).await?;
    let state = view.state();

    if ctx.output.is_json() {
        ctx.output.json(&state_json(state));
    } else {
        ctx.output.header("Catalog");
        ctx.output.kv("state", &state_badge(state.name()));

        let rows = table_rows(state);
        if !rows.is_empty() {
            let widths = column_widths(&HEADER, &rows);
            println!();
            ctx.output.table_row(&HEADER, &widths);
            for row in &rows {
                let cols: Vec<&str> = row.iter().map(String::as_str).collect();
                ctx.output.table_row(&cols, &widths);
            }
        }
    }

    if let Some(message) = state.error_message() {
        bail!("{}", message);
    }
    Ok(())
}

/// One `[key, title, price]` row per product, in catalog order.
fn table_rows(state: &LoadState) -> Vec<Vec<String>> {
    state
        .products()
        .iter()
        .enumerate()
        .map(|(position, product)| {
            vec![
                product.key(position).to_string(),
                product.title.clone(),
                product.price.display(),
            ]
        })
        .collect()
}

fn state_json(state: &LoadState) -> Value {
    match state.error_message() {
        Some(message) => json!({ "state": state.name(), "error": message }),
        None => json!({ "state": state.name(), "products": state.products() }),
    }
}
