//! Page composition: shell plus sections in document order.

use fragrance_core::{LoadState, MenuVisibility};
use fragrance_streaming::{HeadContent, Shell};

use crate::content::StaticContent;
use crate::scripts::MENU_SCRIPT;
use crate::sections::{
    render_about, render_catalog, render_footer, render_hero, render_menu, render_navbar,
    CATALOG_SECTION_ID, SCENE_VIEWER_SCRIPT,
};
use crate::styles::STOREFRONT_STYLES;

/// The independently renderable parts of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Navbar,
    Menu,
    Hero,
    Catalog,
    About,
    Footer,
}

impl SectionId {
    /// All sections in document order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Navbar,
        SectionId::Menu,
        SectionId::Hero,
        SectionId::Catalog,
        SectionId::About,
        SectionId::Footer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Navbar => "navbar",
            Self::Menu => "menu",
            Self::Hero => "hero",
            Self::Catalog => "catalog",
            Self::About => "about",
            Self::Footer => "footer",
        }
    }

    /// Element id a streamed replacement must target. Only the catalog changes
    /// after the first render.
    pub fn replace_target(&self) -> Option<&'static str> {
        match self {
            Self::Catalog => Some(CATALOG_SECTION_ID),
            _ => None,
        }
    }
}

/// Everything a render needs, borrowed from the view.
#[derive(Debug, Clone, Copy)]
pub struct PageModel<'a> {
    pub content: &'a StaticContent,
    pub state: &'a LoadState,
    pub menu: MenuVisibility,
    pub cart_count: u32,
}

/// Render one section.
pub fn render_section(model: &PageModel<'_>, section: SectionId) -> String {
    let content = model.content;
    match section {
        SectionId::Navbar => render_navbar(content, model.cart_count),
        SectionId::Menu => render_menu(content, model.menu),
        SectionId::Hero => render_hero(&content.hero),
        SectionId::Catalog => render_catalog(&content.catalog, model.state),
        SectionId::About => render_about(&content.about),
        SectionId::Footer => render_footer(&content.brand, &content.footer),
    }
}

/// Render all sections in document order, without the shell.
pub fn render_body(model: &PageModel<'_>) -> String {
    SectionId::ALL
        .iter()
        .map(|section| render_section(model, *section))
        .collect()
}

/// Document shell: head with styles and the scene viewer, body wrapper, and
/// the menu script at the end of the body.
pub fn page_shell(content: &StaticContent) -> Shell {
    let head = HeadContent::new(content.page_title.as_str())
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", &content.description)
        .with_style(STOREFRONT_STYLES)
        .with_module_script(SCENE_VIEWER_SCRIPT);

    Shell::new(head)
        .with_body_start("<body>\n<div class=\"page\">\n")
        .with_body_end(format!("</div>\n{}\n</body>\n</html>", MENU_SCRIPT))
}

/// Render the complete HTML document.
pub fn render_page(model: &PageModel<'_>) -> String {
    page_shell(model.content).wrap(&render_body(model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fragrance_core::Product;

    fn model<'a>(content: &'a StaticContent, state: &'a LoadState) -> PageModel<'a> {
        PageModel {
            content,
            state,
            menu: MenuVisibility::closed(),
            cart_count: 2,
        }
    }

    #[test]
    fn test_sections_render_in_document_order() {
        let content = StaticContent::default();
        let state = LoadState::Pending;
        let body = render_body(&model(&content, &state));

        let positions: Vec<usize> = SectionId::ALL
            .iter()
            .map(|s| {
                body.find(&format!(r#"data-section="{}""#, s.name()))
                    .unwrap_or_else(|| panic!("missing section {}", s.name()))
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_render_page_document() {
        let content = StaticContent::default();
        let state = LoadState::ready(vec![Product::new("Neroli", 42.0)]);
        let html = render_page(&model(&content, &state));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>FRAGRANCE. | Minimalist aromas for modern minds</title>"));
        assert!(html.contains("spline-viewer.js"));
        assert!(html.contains("document.getElementById('mobile-menu')"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_static_sections_ignore_load_state() {
        let content = StaticContent::default();
        let pending = LoadState::Pending;
        let failed = LoadState::failed("Failed to load products");

        for section in [SectionId::Navbar, SectionId::Hero, SectionId::About, SectionId::Footer] {
            assert_eq!(
                render_section(&model(&content, &pending), section),
                render_section(&model(&content, &failed), section)
            );
        }
    }

    #[test]
    fn test_only_catalog_is_replaceable() {
        assert_eq!(SectionId::Catalog.replace_target(), Some("catalog"));
        assert_eq!(SectionId::Hero.replace_target(), None);
    }
}
