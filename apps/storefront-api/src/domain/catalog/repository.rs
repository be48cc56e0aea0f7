//! Catalog Repository Trait
//!
//! Read-only persistence abstraction for catalog data. Implemented by
//! adapters in the infrastructure layer; the order intake workflow only ever
//! reads through this port.

use async_trait::async_trait;

use crate::domain::shared::{CakeOptionId, CategoryId, ProductId};

use super::{CakeOption, CatalogError, Category, Product};

/// Filter for product listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Only products in the category with this slug.
    pub category_slug: Option<String>,
    /// Only products whose custom-cake flag matches.
    pub is_custom_cake: Option<bool>,
}

impl ProductFilter {
    /// Whether a product passes this filter (category matching is done by the
    /// adapter, which knows the category's slug).
    #[must_use]
    pub fn matches_custom_flag(&self, product: &Product) -> bool {
        self.is_custom_cake
            .is_none_or(|wanted| product.is_custom_cake == wanted)
    }
}

/// Repository trait for catalog reads.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Resolve a product by its id.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails. An unknown id is `Ok(None)`.
    async fn find_product(&self, id: &ProductId) -> Result<Option<Product>, CatalogError>;

    /// Resolve a product by its slug.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_product_by_slug(&self, slug: &str) -> Result<Option<Product>, CatalogError>;

    /// List products matching a filter.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, CatalogError>;

    /// Resolve a category by its id.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_category(&self, id: &CategoryId) -> Result<Option<Category>, CatalogError>;

    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError>;

    /// List all cake options.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn list_options(&self) -> Result<Vec<CakeOption>, CatalogError>;

    /// Resolve a set of cake options by id (missing ids are skipped).
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_options(&self, ids: &[CakeOptionId]) -> Result<Vec<CakeOption>, CatalogError>;
}
