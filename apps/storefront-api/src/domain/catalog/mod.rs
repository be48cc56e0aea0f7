//! Catalog bounded context.
//!
//! Categories, products, and custom-cake options. Read-only from the order
//! intake workflow's perspective: orders snapshot prices and option labels at
//! placement time and never follow live catalog references afterwards.

mod cake_option;
mod category;
pub mod errors;
mod product;
pub mod repository;

pub use cake_option::{CakeOption, OptionKind};
pub use category::Category;
pub use errors::CatalogError;
pub use product::{Product, UnitOfSale};
pub use repository::{CatalogRepository, ProductFilter};

/// Derive a URL slug from a display name.
///
/// Lowercases, keeps alphanumerics, and collapses everything else into single
/// hyphens (mirrors how catalog slugs are generated when one is not supplied).
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_dash = true; // suppress leading dash
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Saffron & Rosewater Baklava"), "saffron-rosewater-baklava");
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Custom   Cake!  "), "custom-cake");
    }

    #[test]
    fn slugify_keeps_digits() {
        assert_eq!(slugify("8\" Medium (Serves 15-20)"), "8-medium-serves-15-20");
    }
}
