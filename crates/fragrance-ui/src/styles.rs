//! Page stylesheet.

pub const STOREFRONT_STYLES: &str = r##"
:root {
    --ink: #111827;
    --ink-soft: #374151;
    --muted: #6b7280;
    --glass: rgba(255, 255, 255, 0.7);
    --glass-border: rgba(255, 255, 255, 0.4);
    --line: rgba(229, 231, 235, 0.7);
    --accent: #9333ea;
    --accent-2: #6366f1;
    --amber: #f59e0b;
    --error: #dc2626;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    min-height: 100vh;
    background: linear-gradient(to bottom, #faf5ff, #ffffff);
    color: var(--ink);
    line-height: 1.5;
}

a { color: inherit; text-decoration: none; }
button { font: inherit; cursor: pointer; }
.page { padding-top: 4rem; }

/* Brand */
.brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-weight: 600;
    letter-spacing: -0.01em;
    color: #1f2937;
}

.brand-mark {
    width: 1.5rem;
    height: 1.5rem;
    border-radius: 0.25rem;
    background: linear-gradient(to bottom right, #a855f7, var(--accent-2));
}

.icon { width: 1.5rem; height: 1.5rem; display: block; }

.icon-button {
    padding: 0.5rem;
    border: none;
    border-radius: 0.5rem;
    background: transparent;
    color: inherit;
    transition: background 0.2s;
}

.icon-button:hover { background: rgba(255, 255, 255, 0.6); }

.button {
    display: inline-block;
    padding: 0.75rem 1.25rem;
    border-radius: 0.5rem;
    border: 1px solid transparent;
    transition: background 0.2s, border-color 0.2s;
}

.button-solid { background: var(--ink); color: #fff; }
.button-solid:hover { background: #000; }
.button-outline { border-color: #d1d5db; background: transparent; color: var(--ink); }
.button-outline:hover { border-color: #9ca3af; }
.button-small { padding: 0.375rem 0.75rem; font-size: 0.875rem; }

/* Navbar */
.navbar {
    position: fixed;
    inset: 0 0 auto 0;
    z-index: 30;
    backdrop-filter: blur(8px);
    background: rgba(255, 255, 255, 0.5);
    border-bottom: 1px solid rgba(255, 255, 255, 0.3);
}

.navbar-inner {
    max-width: 80rem;
    height: 4rem;
    margin: 0 auto;
    padding: 0 1rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-links { display: flex; gap: 2rem; font-size: 0.875rem; color: var(--ink-soft); }
.nav-links a:hover { color: var(--ink); }
.nav-actions { display: flex; align-items: center; gap: 0.75rem; }
.cart { position: relative; }

.cart-badge {
    position: absolute;
    top: -0.25rem;
    right: -0.25rem;
    font-size: 10px;
    background: var(--accent);
    color: #fff;
    border-radius: 9999px;
    padding: 0.125rem 0.375rem;
}

.menu-button { display: none; }

/* Mobile menu */
.menu-backdrop {
    position: fixed;
    inset: 0;
    z-index: 40;
    background: rgba(0, 0, 0, 0.3);
}

.menu-drawer {
    position: fixed;
    top: 0;
    bottom: 0;
    left: 0;
    width: 18rem;
    z-index: 50;
    padding: 1.5rem;
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(8px);
    border-right: 1px solid var(--glass-border);
    transform: translateX(-300px);
    visibility: hidden;
    transition: transform 0.3s cubic-bezier(0.22, 1, 0.36, 1), visibility 0.3s;
}

.menu[data-open="true"] .menu-drawer { transform: translateX(0); visibility: visible; }
.menu-header { display: flex; align-items: center; justify-content: space-between; }
.menu-links { margin-top: 2rem; display: grid; gap: 0.5rem; }
.menu-link { display: block; padding: 0.5rem 0.75rem; border-radius: 0.25rem; }
.menu-link:hover { background: #f3f4f6; }

/* Hero */
.hero {
    position: relative;
    height: 90vh;
    overflow: hidden;
}

.hero-scene { position: absolute; inset: 0; }
.hero-scene spline-viewer { width: 100%; height: 100%; }

.hero-fade {
    position: absolute;
    inset: 0;
    pointer-events: none;
    background: linear-gradient(to bottom, rgba(255, 255, 255, 0.2), rgba(255, 255, 255, 0.1), #fff);
}

.hero-content {
    position: relative;
    z-index: 10;
    height: 100%;
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 2rem;
    display: flex;
    flex-direction: column;
    justify-content: center;
}

.hero-headline { max-width: 42rem; font-size: 3.75rem; font-weight: 600; letter-spacing: -0.02em; line-height: 1.1; }
.hero-subheadline { max-width: 42rem; margin-top: 1rem; font-size: 1.125rem; color: var(--ink-soft); }
.hero-actions { margin-top: 2rem; display: flex; gap: 0.75rem; }

/* Catalog */
.catalog { margin-top: 4rem; }
.catalog-status { padding: 5rem 0; text-align: center; color: #4b5563; }
.catalog-error { color: var(--error); }
.catalog-inner { max-width: 80rem; margin: 0 auto; padding: 0 2rem; }
.catalog-header { display: flex; align-items: flex-end; justify-content: space-between; }
.catalog-heading { font-size: 1.875rem; font-weight: 600; letter-spacing: -0.01em; }
.catalog-view-all { font-size: 0.875rem; color: #4b5563; }

.product-grid {
    margin-top: 1.5rem;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
}

.product-card {
    border-radius: 1rem;
    overflow: hidden;
    background: var(--glass);
    backdrop-filter: blur(8px);
    border: 1px solid var(--glass-border);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    transition: box-shadow 0.2s;
}

.product-card:hover { box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
.product-media { aspect-ratio: 4 / 3; overflow: hidden; }
.product-media img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s; }
.product-card:hover .product-media img { transform: scale(1.05); }
.product-body { padding: 1rem; }
.product-summary { display: flex; align-items: flex-start; justify-content: space-between; gap: 1rem; }
.product-title { font-size: 1rem; font-weight: 500; }

.product-description {
    font-size: 0.875rem;
    color: var(--muted);
    display: -webkit-box;
    -webkit-line-clamp: 2;
    -webkit-box-orient: vertical;
    overflow: hidden;
}

.product-rating { display: flex; align-items: center; gap: 0.25rem; color: var(--amber); font-size: 0.75rem; }
.product-rating span { color: #4b5563; }
.icon-star { width: 1rem; height: 1rem; }
.product-footer { margin-top: 1rem; display: flex; align-items: center; justify-content: space-between; }
.product-price { font-weight: 600; }

/* About */
.about { max-width: 64rem; margin: 6rem auto 0; padding: 0 2rem; }
.about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
.about-heading { font-size: 1.5rem; font-weight: 600; letter-spacing: -0.01em; }
.about-body { margin-top: 0.75rem; color: #4b5563; }
.about-actions { margin-top: 1.5rem; display: flex; gap: 1rem; }

.about-media {
    aspect-ratio: 4 / 3;
    border-radius: 1rem;
    overflow: hidden;
    border: 1px solid var(--glass-border);
    background: rgba(255, 255, 255, 0.6);
}

.about-media img { width: 100%; height: 100%; object-fit: cover; }

/* Footer */
.site-footer { margin-top: 6rem; border-top: 1px solid var(--line); }

.footer-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 3rem 2rem;
    display: flex;
    justify-content: space-between;
    font-size: 0.875rem;
    color: #4b5563;
}

.footer-tagline { margin-top: 0.75rem; }
.footer-columns { display: flex; gap: 2.5rem; }
.footer-column-title { font-weight: 500; color: var(--ink); margin-bottom: 0.5rem; }
.footer-link { display: block; padding: 0.125rem 0; }
.footer-link:hover { color: var(--ink); }

/* Responsive */
@media (max-width: 1024px) {
    .product-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (max-width: 768px) {
    .menu-button { display: block; }
    .nav-links { display: none; }
    .hero { height: 80vh; }
    .hero-headline { font-size: 2.25rem; }
    .about-grid { grid-template-columns: 1fr; }
    .footer-inner { flex-direction: column; align-items: center; gap: 1.5rem; }
}

@media (min-width: 769px) {
    .menu { display: none; }
}

@media (max-width: 640px) {
    .product-grid { grid-template-columns: 1fr; }
}
"##;
