//! SQLite-backed store implementing both repository ports.
//!
//! A single connection behind a mutex; queries live in the `catalog` and
//! `orders` submodules as free functions over the raw connection. Order
//! creation runs in one transaction so the order row and its items commit or
//! roll back together.

mod catalog;
mod orders;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::Connection;

use crate::domain::catalog::{
    CakeOption, CatalogError, CatalogRepository, Category, Product, ProductFilter,
};
use crate::domain::ordering::aggregate::Order;
use crate::domain::ordering::errors::OrderError;
use crate::domain::ordering::repository::OrderRepository;
use crate::domain::shared::{CakeOptionId, CategoryId, OrderId, ProductId};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS categories (
    id   TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    slug TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS cake_options (
    id             TEXT PRIMARY KEY,
    option_type    TEXT NOT NULL,
    name           TEXT NOT NULL,
    price_modifier TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS products (
    id             TEXT PRIMARY KEY,
    category_id    TEXT NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
    name           TEXT NOT NULL,
    slug           TEXT NOT NULL UNIQUE,
    description    TEXT NOT NULL,
    price          TEXT NOT NULL,
    unit           TEXT NOT NULL,
    is_custom_cake INTEGER NOT NULL,
    is_featured    INTEGER NOT NULL,
    created_at     TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS product_options (
    product_id TEXT NOT NULL REFERENCES products(id) ON DELETE CASCADE,
    option_id  TEXT NOT NULL REFERENCES cake_options(id) ON DELETE CASCADE,
    PRIMARY KEY (product_id, option_id)
);

CREATE TABLE IF NOT EXISTS orders (
    id            TEXT PRIMARY KEY,
    customer_name TEXT NOT NULL,
    email         TEXT NOT NULL,
    phone         TEXT NOT NULL,
    total_price   TEXT NOT NULL,
    pickup_at     TEXT NOT NULL,
    status        TEXT NOT NULL,
    created_at    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS order_items (
    order_id   TEXT NOT NULL REFERENCES orders(id) ON DELETE CASCADE,
    position   INTEGER NOT NULL,
    product_id TEXT NOT NULL REFERENCES products(id),
    quantity   INTEGER NOT NULL,
    flavor     TEXT,
    filling    TEXT,
    size       TEXT,
    price      TEXT NOT NULL,
    PRIMARY KEY (order_id, position)
);

CREATE INDEX IF NOT EXISTS idx_products_category ON products(category_id);
CREATE INDEX IF NOT EXISTS idx_order_items_order ON order_items(order_id);
";

/// Durable store backed by a single SQLite connection.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open a file-backed store, creating the schema if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the database cannot be opened or migrated.
    pub fn open(path: &Path) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        Self::init(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory store (tests and development).
    ///
    /// # Errors
    ///
    /// Returns error if the schema cannot be created.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        Self::init(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init(conn: &Connection) -> Result<(), rusqlite::Error> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.execute_batch(SCHEMA)
    }

    fn lock_catalog(&self) -> Result<MutexGuard<'_, Connection>, CatalogError> {
        self.conn.lock().map_err(|_| CatalogError::Storage {
            message: "store lock poisoned".to_string(),
        })
    }

    fn lock_orders(&self) -> Result<MutexGuard<'_, Connection>, OrderError> {
        self.conn.lock().map_err(|_| OrderError::Storage {
            message: "store lock poisoned".to_string(),
        })
    }

    /// Insert a category (seeding and admin tooling).
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub fn insert_category(&self, category: &Category) -> Result<(), CatalogError> {
        let conn = self.lock_catalog()?;
        catalog::insert_category(&conn, category)
    }

    /// Insert a cake option (seeding and admin tooling).
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub fn insert_cake_option(&self, option: &CakeOption) -> Result<(), CatalogError> {
        let conn = self.lock_catalog()?;
        catalog::insert_cake_option(&conn, option)
    }

    /// Insert a product with its option links (seeding and admin tooling).
    ///
    /// # Errors
    ///
    /// Returns error if the write fails; the product and its links are
    /// written in one transaction.
    pub fn insert_product(&self, product: &Product) -> Result<(), CatalogError> {
        let mut conn = self.lock_catalog()?;
        let tx = conn.transaction().map_err(|e| CatalogError::Storage {
            message: e.to_string(),
        })?;
        catalog::insert_product(&tx, product)?;
        tx.commit().map_err(|e| CatalogError::Storage {
            message: e.to_string(),
        })
    }

    /// Whether the catalog has no products yet (seed-on-first-run check).
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub fn catalog_is_empty(&self) -> Result<bool, CatalogError> {
        let conn = self.lock_catalog()?;
        Ok(catalog::count_products(&conn)? == 0)
    }
}

#[async_trait]
impl CatalogRepository for SqliteStore {
    async fn find_product(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        let conn = self.lock_catalog()?;
        catalog::find_product(&conn, id)
    }

    async fn find_product_by_slug(&self, slug: &str) -> Result<Option<Product>, CatalogError> {
        let conn = self.lock_catalog()?;
        catalog::find_product_by_slug(&conn, slug)
    }

    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, CatalogError> {
        let conn = self.lock_catalog()?;
        catalog::list_products(&conn, filter.category_slug.as_deref(), filter.is_custom_cake)
    }

    async fn find_category(&self, id: &CategoryId) -> Result<Option<Category>, CatalogError> {
        let conn = self.lock_catalog()?;
        catalog::find_category(&conn, id)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let conn = self.lock_catalog()?;
        catalog::list_categories(&conn)
    }

    async fn list_options(&self) -> Result<Vec<CakeOption>, CatalogError> {
        let conn = self.lock_catalog()?;
        catalog::list_options(&conn)
    }

    async fn find_options(&self, ids: &[CakeOptionId]) -> Result<Vec<CakeOption>, CatalogError> {
        let conn = self.lock_catalog()?;
        catalog::find_options(&conn, ids)
    }
}

#[async_trait]
impl OrderRepository for SqliteStore {
    async fn create(&self, order: &Order) -> Result<(), OrderError> {
        let mut conn = self.lock_orders()?;
        let tx = conn.transaction().map_err(|e| OrderError::Storage {
            message: e.to_string(),
        })?;
        // A failure on any item drops the transaction and rolls everything
        // back, including the order row.
        orders::insert_order(&tx, order)?;
        tx.commit().map_err(|e| OrderError::Storage {
            message: e.to_string(),
        })
    }

    async fn find_by_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderError> {
        let conn = self.lock_orders()?;
        orders::find_by_id(&conn, order_id)
    }

    async fn list(&self) -> Result<Vec<Order>, OrderError> {
        let conn = self.lock_orders()?;
        orders::list(&conn)
    }

    async fn count(&self) -> Result<u64, OrderError> {
        let conn = self.lock_orders()?;
        orders::count(&conn)
    }
}
