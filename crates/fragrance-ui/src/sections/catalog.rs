//! Product grid section.
//!
//! The only section whose markup depends on fetched data. It always renders
//! inside a wrapper with a stable id so a streamed replacement can swap the
//! pending placeholder for the settled grid.

use fragrance_core::{LoadState, Product};
use fragrance_streaming::escape_html;

use super::icons;
use crate::content::CatalogContent;

/// Element id of the catalog wrapper, target of deferred replacement.
pub const CATALOG_SECTION_ID: &str = "catalog";

/// Render the catalog section for the current load state.
pub fn render_catalog(content: &CatalogContent, state: &LoadState) -> String {
    let body = match state {
        LoadState::Pending => format!(
            r#"<div class="catalog-status" role="status" aria-live="polite">{}</div>"#,
            escape_html(&content.loading)
        ),
        LoadState::Failed { message } => format!(
            r#"<div class="catalog-status catalog-error" role="alert">{}</div>"#,
            escape_html(message)
        ),
        LoadState::Ready { products } => render_grid(content, products),
    };

    format!(
        r#"<section class="catalog" id="{id}" data-section="catalog" data-state="{state}">
{body}
</section>
"#,
        id = CATALOG_SECTION_ID,
        state = state.name(),
        body = body,
    )
}

fn render_grid(content: &CatalogContent, products: &[Product]) -> String {
    let cards: String = products
        .iter()
        .enumerate()
        .map(|(position, product)| render_card(content, product, position))
        .collect();

    format!(
        r#"<div class="catalog-inner" id="{anchor}">
    <div class="catalog-header">
        <h2 class="catalog-heading">{heading}</h2>
        <a href="{view_all_href}" class="catalog-view-all">{view_all}</a>
    </div>
    <div class="product-grid">
        {cards}
    </div>
</div>"#,
        anchor = escape_html(&content.anchor),
        heading = escape_html(&content.heading),
        view_all_href = escape_html(&content.view_all.href),
        view_all = escape_html(&content.view_all.label),
        cards = cards,
    )
}

/// Render one product card.
///
/// A missing image still produces an `<img>` with an empty `src`.
pub fn render_card(content: &CatalogContent, product: &Product, position: usize) -> String {
    let title = escape_html(&product.title);

    format!(
        r#"<article class="product-card" data-key="{key}">
    <div class="product-media">
        <img src="{image}" alt="{title}" loading="lazy">
    </div>
    <div class="product-body">
        <div class="product-summary">
            <div>
                <h3 class="product-title">{title}</h3>
                <p class="product-description">{description}</p>
            </div>
            <div class="product-rating">{star}<span>{rating}</span></div>
        </div>
        <div class="product-footer">
            <span class="product-price">{price}</span>
            <button type="button" class="button button-solid button-small">{add_to_cart}</button>
        </div>
    </div>
</article>
"#,
        key = escape_html(&product.key(position).to_string()),
        image = escape_html(product.image.as_deref().unwrap_or_default()),
        title = title,
        description = escape_html(&product.description),
        star = icons::star(),
        rating = escape_html(&content.rating),
        price = escape_html(&product.price.display()),
        add_to_cart = escape_html(&content.add_to_cart),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> CatalogContent {
        CatalogContent::default()
    }

    // === State Tests ===

    #[test]
    fn test_catalog_pending_shows_loading_only() {
        let html = render_catalog(&content(), &LoadState::Pending);

        assert!(html.contains("Loading products\u{2026}"));
        assert!(html.contains(r#"data-state="pending""#));
        assert!(!html.contains("product-card"));
        assert!(!html.contains("Bestsellers"));
    }

    #[test]
    fn test_catalog_failed_shows_message_and_no_cards() {
        let state = LoadState::failed("Failed to load products (HTTP 500)");
        let html = render_catalog(&content(), &state);

        assert!(html.contains(r#"role="alert">Failed to load products (HTTP 500)</div>"#));
        assert_eq!(html.matches("product-card").count(), 0);
    }

    #[test]
    fn test_catalog_ready_renders_cards_in_order() {
        let state = LoadState::ready(vec![
            Product::new("Neroli", 42.0).with_id(1u64),
            Product::new("Vetiver", 58.5).with_id(2u64),
            Product::new("Iris", 9.0).with_id(3u64),
        ]);
        let html = render_catalog(&content(), &state);

        assert_eq!(html.matches(r#"class="product-card""#).count(), 3);
        let neroli = html.find("Neroli").unwrap();
        let vetiver = html.find("Vetiver").unwrap();
        let iris = html.find("Iris").unwrap();
        assert!(neroli < vetiver && vetiver < iris);
        assert!(html.contains(r#"<div class="catalog-inner" id="bestsellers">"#));
        assert!(html.contains(r#"<h2 class="catalog-heading">Bestsellers</h2>"#));
        assert!(html.contains(">View all</a>"));
    }

    #[test]
    fn test_catalog_ready_empty() {
        let html = render_catalog(&content(), &LoadState::ready(Vec::new()));

        assert!(html.contains("Bestsellers"));
        assert_eq!(html.matches("product-card").count(), 0);
    }

    #[test]
    fn test_catalog_wrapper_id_stable_across_states() {
        for state in [
            LoadState::Pending,
            LoadState::failed("x"),
            LoadState::ready(Vec::new()),
        ] {
            let html = render_catalog(&content(), &state);
            assert!(html.starts_with(r#"<section class="catalog" id="catalog""#));
        }
    }

    // === Card Tests ===

    #[test]
    fn test_card_fields() {
        let product = Product::new("Neroli", 42.0)
            .with_id(1u64)
            .with_description("Citrus.")
            .with_image("x.jpg");
        let html = render_card(&content(), &product, 0);

        assert!(html.contains(r#"data-key="1""#));
        assert!(html.contains(r#"<img src="x.jpg" alt="Neroli" loading="lazy">"#));
        assert!(html.contains(r#"<h3 class="product-title">Neroli</h3>"#));
        assert!(html.contains(r#"<p class="product-description">Citrus.</p>"#));
        assert!(html.contains("<span>4.9</span>"));
        assert!(html.contains(r#"<span class="product-price">$42.00</span>"#));
        assert!(html.contains(">Add to cart</button>"));
    }

    #[test]
    fn test_card_without_id_uses_position() {
        let html = render_card(&content(), &Product::new("Iris", 9.0), 4);
        assert!(html.contains(r##"data-key="#4""##));
    }

    #[test]
    fn test_card_without_image_renders_empty_src() {
        let html = render_card(&content(), &Product::new("Iris", 9.0), 0);
        assert!(html.contains(r#"<img src="" alt="Iris""#));
    }

    #[test]
    fn test_card_escapes_product_text() {
        let product = Product::new("<script>alert(1)</script>", 1.0)
            .with_description("Rose & \"oud\"")
            .with_image("x.jpg\" onerror=\"alert(1)");
        let html = render_card(&content(), &product, 0);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Rose &amp; &quot;oud&quot;"));
        assert!(html.contains(r#"src="x.jpg&quot; onerror=&quot;alert(1)""#));
    }
}
