//! Section renderers for the storefront page.

mod about;
mod catalog;
mod footer;
mod hero;
mod icons;
mod menu;
mod navbar;

pub use about::*;
pub use catalog::*;
pub use footer::*;
pub use hero::*;
pub use menu::*;
pub use navbar::*;

use fragrance_streaming::escape_html;

/// Brand mark plus name, shared by the navbar, menu and footer.
fn render_brand(brand: &str) -> String {
    format!(
        r#"<div class="brand"><span class="brand-mark" aria-hidden="true"></span>{}</div>"#,
        escape_html(brand)
    )
}
