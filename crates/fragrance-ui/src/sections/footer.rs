use fragrance_streaming::escape_html;

use super::navbar::render_links;
use super::render_brand;
use crate::content::{FooterContent, LinkColumn};

pub fn render_footer(brand: &str, content: &FooterContent) -> String {
    let columns: String = content.columns.iter().map(render_column).collect();

    format!(
        r#"<footer class="site-footer" data-section="footer">
    <div class="footer-inner">
        <div class="footer-brand">
            {brand}
            <p class="footer-tagline">{tagline}</p>
        </div>
        <div class="footer-columns">{columns}</div>
    </div>
</footer>
"#,
        brand = render_brand(brand),
        tagline = escape_html(&content.tagline),
        columns = columns,
    )
}

fn render_column(column: &LinkColumn) -> String {
    format!(
        r#"<div class="footer-column"><p class="footer-column-title">{}</p>{}</div>"#,
        escape_html(&column.title),
        render_links(&column.links, "footer-link")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_brand_and_columns() {
        let html = render_footer("FRAGRANCE.", &FooterContent::default());

        assert!(html.contains("FRAGRANCE."));
        assert!(html.contains("Minimal design. Modern aromas."));
        assert!(html.contains(r#"<p class="footer-column-title">Shop</p>"#));
        assert!(html.contains(r#"<p class="footer-column-title">Company</p>"#));
        for label in ["All products", "New arrivals", "Gifts", "About", "Careers", "Contact"] {
            assert!(html.contains(&format!(">{}</a>", label)), "missing {}", label);
        }
    }
}
