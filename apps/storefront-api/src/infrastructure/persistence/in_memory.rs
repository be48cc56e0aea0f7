//! In-memory repository adapters.
//!
//! Used by tests and development wiring; behavior matches the SQLite store
//! for everything the intake workflow observes.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::catalog::{
    CakeOption, CatalogError, CatalogRepository, Category, Product, ProductFilter,
};
use crate::domain::ordering::aggregate::Order;
use crate::domain::ordering::errors::OrderError;
use crate::domain::ordering::repository::OrderRepository;
use crate::domain::shared::{CakeOptionId, CategoryId, OrderId, ProductId};

fn poisoned_catalog() -> CatalogError {
    CatalogError::Storage {
        message: "catalog lock poisoned".to_string(),
    }
}

fn poisoned_orders() -> OrderError {
    OrderError::Storage {
        message: "order lock poisoned".to_string(),
    }
}

/// In-memory catalog, seeded through the `add_*` methods.
#[derive(Default)]
pub struct InMemoryCatalog {
    categories: RwLock<Vec<Category>>,
    products: RwLock<Vec<Product>>,
    options: RwLock<Vec<CakeOption>>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category.
    pub fn add_category(&self, category: Category) {
        if let Ok(mut categories) = self.categories.write() {
            categories.push(category);
        }
    }

    /// Add a product.
    pub fn add_product(&self, product: Product) {
        if let Ok(mut products) = self.products.write() {
            products.push(product);
        }
    }

    /// Add a cake option.
    pub fn add_option(&self, option: CakeOption) {
        if let Ok(mut options) = self.options.write() {
            options.push(option);
        }
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn find_product(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        let products = self.products.read().map_err(|_| poisoned_catalog())?;
        Ok(products.iter().find(|p| p.id == *id).cloned())
    }

    async fn find_product_by_slug(&self, slug: &str) -> Result<Option<Product>, CatalogError> {
        let products = self.products.read().map_err(|_| poisoned_catalog())?;
        Ok(products.iter().find(|p| p.slug == slug).cloned())
    }

    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, CatalogError> {
        let category_id: Option<CategoryId> = match &filter.category_slug {
            Some(slug) => {
                let categories = self.categories.read().map_err(|_| poisoned_catalog())?;
                match categories.iter().find(|c| c.slug == *slug) {
                    Some(category) => Some(category.id.clone()),
                    // Unknown category slug matches nothing.
                    None => return Ok(Vec::new()),
                }
            }
            None => None,
        };

        let products = self.products.read().map_err(|_| poisoned_catalog())?;
        Ok(products
            .iter()
            .filter(|p| category_id.as_ref().is_none_or(|id| p.category_id == *id))
            .filter(|p| filter.matches_custom_flag(p))
            .cloned()
            .collect())
    }

    async fn find_category(&self, id: &CategoryId) -> Result<Option<Category>, CatalogError> {
        let categories = self.categories.read().map_err(|_| poisoned_catalog())?;
        Ok(categories.iter().find(|c| c.id == *id).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let categories = self.categories.read().map_err(|_| poisoned_catalog())?;
        Ok(categories.clone())
    }

    async fn list_options(&self) -> Result<Vec<CakeOption>, CatalogError> {
        let options = self.options.read().map_err(|_| poisoned_catalog())?;
        Ok(options.clone())
    }

    async fn find_options(&self, ids: &[CakeOptionId]) -> Result<Vec<CakeOption>, CatalogError> {
        let options = self.options.read().map_err(|_| poisoned_catalog())?;
        Ok(ids
            .iter()
            .filter_map(|id| options.iter().find(|o| o.id == *id).cloned())
            .collect())
    }
}

/// In-memory order repository. Stores aggregates in insertion order.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: &Order) -> Result<(), OrderError> {
        let mut orders = self.orders.write().map_err(|_| poisoned_orders())?;
        orders.push(order.clone());
        Ok(())
    }

    async fn find_by_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderError> {
        let orders = self.orders.read().map_err(|_| poisoned_orders())?;
        Ok(orders.iter().find(|o| o.id() == order_id).cloned())
    }

    async fn list(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.orders.read().map_err(|_| poisoned_orders())?;
        let mut all = orders.clone();
        all.reverse();
        Ok(all)
    }

    async fn count(&self) -> Result<u64, OrderError> {
        let orders = self.orders.read().map_err(|_| poisoned_orders())?;
        Ok(orders.len() as u64)
    }
}
