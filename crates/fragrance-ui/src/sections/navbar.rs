//! Fixed navigation bar.

use fragrance_streaming::escape_html;

use super::{icons, render_brand};
use crate::content::{Link, StaticContent};

/// Render the navigation bar. The cart badge only appears for a positive count.
pub fn render_navbar(content: &StaticContent, cart_count: u32) -> String {
    let badge = if cart_count > 0 {
        format!(r#"<span class="cart-badge" data-cart-count="{0}">{0}</span>"#, cart_count)
    } else {
        String::new()
    };

    format!(
        r#"<header class="navbar" data-section="navbar">
    <div class="navbar-inner">
        <button type="button" class="icon-button menu-button" data-action="open-menu" aria-label="Open menu" aria-controls="mobile-menu">{menu_icon}</button>
        {brand}
        <nav class="nav-links">{links}</nav>
        <div class="nav-actions">
            <button type="button" class="icon-button" aria-label="Search">{search_icon}</button>
            <div class="cart">
                <button type="button" class="icon-button" aria-label="Cart">{bag_icon}</button>
                {badge}
            </div>
        </div>
    </div>
</header>
"#,
        menu_icon = icons::menu(),
        brand = render_brand(&content.brand),
        links = render_links(&content.nav_links, "nav-link"),
        search_icon = icons::search(),
        bag_icon = icons::bag(),
        badge = badge,
    )
}

/// Render a run of anchors with a shared class.
pub(crate) fn render_links(links: &[Link], class: &str) -> String {
    links
        .iter()
        .map(|link| {
            format!(
                r#"<a class="{}" href="{}">{}</a>"#,
                class,
                escape_html(&link.href),
                escape_html(&link.label)
            )
        })
        .collect()
}
