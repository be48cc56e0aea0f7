//! Product category record.

use serde::{Deserialize, Serialize};

use crate::domain::shared::CategoryId;

use super::slugify;

/// A product category (e.g. Pastries, Cakes, Bread).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Unique URL slug.
    pub slug: String,
}

impl Category {
    /// Create a category with a freshly generated id and a slug derived from
    /// the name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            id: CategoryId::generate(),
            name,
            slug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_new_derives_slug() {
        let cat = Category::new("Pastries");
        assert_eq!(cat.slug, "pastries");
        assert!(!cat.id.as_str().is_empty());
    }
}
