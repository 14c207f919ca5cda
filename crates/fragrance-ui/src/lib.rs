//! Presentation tree for the FRAGRANCE. storefront.
//!
//! - `content` - Static copy (brand, hero, about, footer)
//! - `sections` - One render function per page section
//! - `page` - Section order, document shell, full-page render
//! - `view` - `StorefrontView`, the stateful instance that mounts, loads the
//!   catalog and re-renders

mod content;
mod page;
mod scripts;
mod sections;
mod styles;
mod view;

pub use content::*;
pub use page::*;
pub use scripts::MENU_SCRIPT;
pub use sections::*;
pub use styles::STOREFRONT_STYLES;
pub use view::*;
