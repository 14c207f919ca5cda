//! Hero banner with the decorative 3D scene.

use fragrance_streaming::escape_html;

use crate::content::HeroContent;

/// Web component that renders Spline scenes. Loaded as a module from the head.
pub const SCENE_VIEWER_SCRIPT: &str =
    "https://unpkg.com/@splinetool/viewer@1.9.28/build/spline-viewer.js";

/// Render the hero banner section.
///
/// The scene sits behind the copy; if the viewer or the scene fails to load
/// the backdrop stays blank and the rest of the section is unaffected.
pub fn render_hero(content: &HeroContent) -> String {
    format!(
        r#"<section class="hero" data-section="hero">
    <div class="hero-scene" aria-hidden="true">
        <spline-viewer url="{scene}" loading-anim-type="none"></spline-viewer>
    </div>
    <div class="hero-fade" aria-hidden="true"></div>
    <div class="hero-content">
        <h1 class="hero-headline">{headline}</h1>
        <p class="hero-subheadline">{subheadline}</p>
        <div class="hero-actions">
            <a href="{primary_href}" class="button button-solid">{primary_label}</a>
            <a href="{secondary_href}" class="button button-outline">{secondary_label}</a>
        </div>
    </div>
</section>
"#,
        scene = escape_html(&content.scene_url),
        headline = escape_html(&content.headline),
        subheadline = escape_html(&content.subheadline),
        primary_href = escape_html(&content.primary_cta.href),
        primary_label = escape_html(&content.primary_cta.label),
        secondary_href = escape_html(&content.secondary_cta.href),
        secondary_label = escape_html(&content.secondary_cta.label),
    )
}
