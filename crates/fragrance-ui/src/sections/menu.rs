//! Slide-in mobile menu.
//!
//! The server renders the menu in whichever state the view holds; the inline
//! script flips the same three attributes client-side.

use fragrance_core::MenuVisibility;

use super::navbar::render_links;
use super::{icons, render_brand};
use crate::content::StaticContent;

/// Element id of the menu root, used by the toggle script.
pub const MENU_ID: &str = "mobile-menu";

pub fn render_menu(content: &StaticContent, menu: MenuVisibility) -> String {
    let open = menu.is_open();
    let hidden = if open { "" } else { " hidden" };

    format!(
        r#"<div class="menu" id="{id}" data-section="menu" data-open="{open}" aria-hidden="{closed}">
    <div class="menu-backdrop" data-action="close-menu"{hidden}></div>
    <aside class="menu-drawer" role="dialog" aria-label="Menu">
        <div class="menu-header">
            {brand}
            <button type="button" class="icon-button" data-action="close-menu" aria-label="Close menu">{close_icon}</button>
        </div>
        <nav class="menu-links">{links}</nav>
    </aside>
</div>
"#,
        id = MENU_ID,
        open = open,
        closed = !open,
        hidden = hidden,
        brand = render_brand(&content.brand),
        close_icon = icons::close(),
        links = render_links(&content.nav_links, "menu-link"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_closed_by_default() {
        let html = render_menu(&StaticContent::default(), MenuVisibility::closed());

        assert!(html.contains(r#"data-open="false" aria-hidden="true""#));
        assert!(html.contains(r#"<div class="menu-backdrop" data-action="close-menu" hidden></div>"#));
    }

    #[test]
    fn test_menu_open() {
        let mut menu = MenuVisibility::closed();
        menu.open();
        let html = render_menu(&StaticContent::default(), menu);

        assert!(html.contains(r#"data-open="true" aria-hidden="false""#));
        assert!(html.contains(r#"<div class="menu-backdrop" data-action="close-menu"></div>"#));
    }

    #[test]
    fn test_menu_has_close_control_and_links() {
        let html = render_menu(&StaticContent::default(), MenuVisibility::closed());

        assert!(html.contains(r#"aria-label="Close menu""#));
        assert_eq!(html.matches(r#"class="menu-link""#).count(), 3);
        assert!(html.contains("FRAGRANCE."));
    }
}
