use fragrance_streaming::escape_html;

use crate::content::AboutContent;

/// Element id of the about panel, target of the "About" links.
pub const ABOUT_ID: &str = "about";

pub fn render_about(content: &AboutContent) -> String {
    format!(
        r#"<section class="about" id="{id}" data-section="about">
    <div class="about-grid">
        <div class="about-copy">
            <h3 class="about-heading">{heading}</h3>
            <p class="about-body">{body}</p>
            <div class="about-actions">
                <button type="button" class="button button-solid">{primary}</button>
                <button type="button" class="button button-outline">{secondary}</button>
            </div>
        </div>
        <div class="about-media">
            <img src="{image}" alt="{alt}" loading="lazy">
        </div>
    </div>
</section>
"#,
        id = ABOUT_ID,
        heading = escape_html(&content.heading),
        body = escape_html(&content.body),
        primary = escape_html(&content.primary_action),
        secondary = escape_html(&content.secondary_action),
        image = escape_html(&content.image_url),
        alt = escape_html(&content.image_alt),
    )
}
