//! Product record.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::{CakeOptionId, CategoryId, Money, ProductId, Timestamp};

use super::slugify;

/// How a product is sold and priced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfSale {
    /// Priced per piece.
    #[default]
    #[serde(rename = "ea")]
    Each,
    /// Priced per kilogram.
    #[serde(rename = "kg")]
    Kg,
    /// Priced per pound.
    #[serde(rename = "lb")]
    Lb,
}

impl UnitOfSale {
    /// Canonical string form, as stored and served.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Each => "ea",
            Self::Kg => "kg",
            Self::Lb => "lb",
        }
    }

    /// Parse from the canonical string form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ea" => Some(Self::Each),
            "kg" => Some(Self::Kg),
            "lb" => Some(Self::Lb),
            _ => None,
        }
    }
}

impl fmt::Display for UnitOfSale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog product.
///
/// `available_options` is only meaningful when `is_custom_cake` is set; it
/// lists the cake options a customer may pick from when configuring the cake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Owning category.
    pub category_id: CategoryId,
    /// Display name.
    pub name: String,
    /// Unique URL slug.
    pub slug: String,
    /// Storefront description.
    pub description: String,
    /// Base unit price.
    pub price: Money,
    /// Unit of sale.
    pub unit: UnitOfSale,
    /// Whether this product is configurable via cake options.
    pub is_custom_cake: bool,
    /// Whether the storefront features this product.
    pub is_featured: bool,
    /// Valid cake options for this product (custom cakes only).
    pub available_options: Vec<CakeOptionId>,
    /// When the product was added to the catalog.
    pub created_at: Timestamp,
}

impl Product {
    /// Create a product with a freshly generated id and a slug derived from
    /// the name.
    #[must_use]
    pub fn new(
        category_id: CategoryId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        unit: UnitOfSale,
        is_custom_cake: bool,
    ) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            id: ProductId::generate(),
            category_id,
            name,
            slug,
            description: description.into(),
            price,
            unit,
            is_custom_cake,
            is_featured: false,
            available_options: Vec::new(),
            created_at: Timestamp::now(),
        }
    }

    /// Attach the cake options customers may choose from (builder-style).
    #[must_use]
    pub fn with_options(mut self, options: Vec<CakeOptionId>) -> Self {
        self.available_options = options;
        self
    }

    /// Mark the product as featured (builder-style).
    #[must_use]
    pub const fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_product(custom: bool) -> Product {
        Product::new(
            CategoryId::generate(),
            "Signature Custom Celebration Cake",
            "A masterpiece tailored to your celebration.",
            Money::new(dec!(85.00)),
            UnitOfSale::Each,
            custom,
        )
    }

    #[test]
    fn product_new_derives_slug() {
        let p = make_product(true);
        assert_eq!(p.slug, "signature-custom-celebration-cake");
        assert!(p.available_options.is_empty());
    }

    #[test]
    fn product_with_options() {
        let opt = CakeOptionId::generate();
        let p = make_product(true).with_options(vec![opt.clone()]);
        assert_eq!(p.available_options, vec![opt]);
    }

    #[test]
    fn unit_of_sale_roundtrip() {
        for unit in [UnitOfSale::Each, UnitOfSale::Kg, UnitOfSale::Lb] {
            assert_eq!(UnitOfSale::parse(unit.as_str()), Some(unit));
        }
        assert_eq!(UnitOfSale::parse("oz"), None);
    }

    #[test]
    fn unit_of_sale_serde() {
        assert_eq!(serde_json::to_string(&UnitOfSale::Each).unwrap(), "\"ea\"");
        let parsed: UnitOfSale = serde_json::from_str("\"kg\"").unwrap();
        assert_eq!(parsed, UnitOfSale::Kg);
    }
}
