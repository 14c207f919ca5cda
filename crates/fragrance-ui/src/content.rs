//! Static copy for the storefront sections.

use serde::{Deserialize, Serialize};

/// A text link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Hero banner content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    pub primary_cta: Link,
    pub secondary_cta: Link,
    /// Decorative 3D scene. Rendering never depends on it loading.
    pub scene_url: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            headline: "The Fragrance of Creativity".to_string(),
            subheadline: "Minimalist aromas for modern minds. Discover clean, glassy compositions with iridescent nuance.".to_string(),
            primary_cta: Link::new("Shop bestsellers", "#bestsellers"),
            secondary_cta: Link::new("Explore collections", "#collections"),
            scene_url: "https://prod.spline.design/myxXfbNiwnbTpGFp/scene.splinecode".to_string(),
        }
    }
}

/// Fixed labels around the product grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogContent {
    pub heading: String,
    /// Fragment id of the grid, target of the "Bestsellers" links.
    pub anchor: String,
    pub view_all: Link,
    pub loading: String,
    /// Decorative rating shown on every card.
    pub rating: String,
    pub add_to_cart: String,
}

impl Default for CatalogContent {
    fn default() -> Self {
        Self {
            heading: "Bestsellers".to_string(),
            anchor: "bestsellers".to_string(),
            view_all: Link::new("View all", "#"),
            loading: "Loading products\u{2026}".to_string(),
            rating: "4.9".to_string(),
            add_to_cart: "Add to cart".to_string(),
        }
    }
}

/// The informational panel under the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub heading: String,
    pub body: String,
    pub primary_action: String,
    pub secondary_action: String,
    pub image_url: String,
    pub image_alt: String,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            heading: "Design, distilled.".to_string(),
            body: "We craft clean fragrances that feel like clarity. Minimal ingredients, maximum intention \u{2014} bottled as glassy objects of focus.".to_string(),
            primary_action: "Shop now".to_string(),
            secondary_action: "Learn more".to_string(),
            image_url: "https://images.unsplash.com/photo-1592945403244-b3fbafd7f539?q=80&w=1200&auto=format&fit=crop".to_string(),
            image_alt: "Perfume bottles".to_string(),
        }
    }
}

/// A titled column of footer links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkColumn {
    pub title: String,
    pub links: Vec<Link>,
}

impl LinkColumn {
    pub fn new(title: &str, labels: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            links: labels.iter().map(|label| Link::new(label, "#")).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterContent {
    pub tagline: String,
    pub columns: Vec<LinkColumn>,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            tagline: "Minimal design. Modern aromas.".to_string(),
            columns: vec![
                LinkColumn::new("Shop", &["All products", "New arrivals", "Gifts"]),
                LinkColumn::new("Company", &["About", "Careers", "Contact"]),
            ],
        }
    }
}

/// Everything on the page that does not come from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticContent {
    pub brand: String,
    pub page_title: String,
    pub description: String,
    /// Shared by the navigation bar and the mobile menu.
    pub nav_links: Vec<Link>,
    pub hero: HeroContent,
    pub catalog: CatalogContent,
    pub about: AboutContent,
    pub footer: FooterContent,
}

impl Default for StaticContent {
    fn default() -> Self {
        Self {
            brand: "FRAGRANCE.".to_string(),
            page_title: "FRAGRANCE. | Minimalist aromas for modern minds".to_string(),
            description: "Clean, glassy fragrance compositions with iridescent nuance.".to_string(),
            nav_links: vec![
                Link::new("Collections", "#collections"),
                Link::new("Bestsellers", "#bestsellers"),
                Link::new("About", "#about"),
            ],
            hero: HeroContent::default(),
            catalog: CatalogContent::default(),
            about: AboutContent::default(),
            footer: FooterContent::default(),
        }
    }
}
