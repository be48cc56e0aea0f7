//! Catalog table queries.
//!
//! Free functions over a raw connection; the store owns locking and
//! transactions.

use std::str::FromStr;

use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;

use crate::domain::catalog::{CakeOption, CatalogError, Category, OptionKind, Product, UnitOfSale};
use crate::domain::shared::{CakeOptionId, CategoryId, Money, ProductId, Timestamp};

fn sql_err(e: impl std::fmt::Display) -> CatalogError {
    CatalogError::Storage {
        message: e.to_string(),
    }
}

pub fn insert_category(conn: &Connection, category: &Category) -> Result<(), CatalogError> {
    conn.prepare_cached("INSERT INTO categories (id, name, slug) VALUES (?1, ?2, ?3)")
        .map_err(sql_err)?
        .execute(params![category.id.as_str(), category.name, category.slug])
        .map_err(sql_err)?;
    Ok(())
}

pub fn insert_cake_option(conn: &Connection, option: &CakeOption) -> Result<(), CatalogError> {
    conn.prepare_cached(
        "INSERT INTO cake_options (id, option_type, name, price_modifier) VALUES (?1, ?2, ?3, ?4)",
    )
    .map_err(sql_err)?
    .execute(params![
        option.id.as_str(),
        option.kind.as_str(),
        option.name,
        option.price_modifier.amount().to_string(),
    ])
    .map_err(sql_err)?;
    Ok(())
}

pub fn insert_product(conn: &Connection, product: &Product) -> Result<(), CatalogError> {
    conn.prepare_cached(
        "INSERT INTO products
           (id, category_id, name, slug, description, price, unit,
            is_custom_cake, is_featured, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
    )
    .map_err(sql_err)?
    .execute(params![
        product.id.as_str(),
        product.category_id.as_str(),
        product.name,
        product.slug,
        product.description,
        product.price.amount().to_string(),
        product.unit.as_str(),
        product.is_custom_cake,
        product.is_featured,
        product.created_at.to_rfc3339(),
    ])
    .map_err(sql_err)?;

    let mut stmt = conn
        .prepare_cached("INSERT INTO product_options (product_id, option_id) VALUES (?1, ?2)")
        .map_err(sql_err)?;
    for option_id in &product.available_options {
        stmt.execute(params![product.id.as_str(), option_id.as_str()])
            .map_err(sql_err)?;
    }
    Ok(())
}

// Raw row before price/unit/timestamp parsing.
struct ProductRow {
    id: String,
    category_id: String,
    name: String,
    slug: String,
    description: String,
    price: String,
    unit: String,
    is_custom_cake: bool,
    is_featured: bool,
    created_at: String,
}

const PRODUCT_COLUMNS: &str = "id, category_id, name, slug, description, price, unit, \
                               is_custom_cake, is_featured, created_at";

fn read_product_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ProductRow> {
    Ok(ProductRow {
        id: row.get(0)?,
        category_id: row.get(1)?,
        name: row.get(2)?,
        slug: row.get(3)?,
        description: row.get(4)?,
        price: row.get(5)?,
        unit: row.get(6)?,
        is_custom_cake: row.get(7)?,
        is_featured: row.get(8)?,
        created_at: row.get(9)?,
    })
}

fn to_product(conn: &Connection, row: ProductRow) -> Result<Product, CatalogError> {
    let price = Decimal::from_str(&row.price).map_err(sql_err)?;
    let unit = UnitOfSale::parse(&row.unit).ok_or_else(|| CatalogError::Storage {
        message: format!("unknown unit of sale: {}", row.unit),
    })?;
    let created_at = Timestamp::parse(&row.created_at).map_err(sql_err)?;

    let mut stmt = conn
        .prepare_cached("SELECT option_id FROM product_options WHERE product_id = ?1")
        .map_err(sql_err)?;
    let options = stmt
        .query_map(params![row.id], |r| r.get::<_, String>(0))
        .map_err(sql_err)?
        .collect::<rusqlite::Result<Vec<String>>>()
        .map_err(sql_err)?;

    Ok(Product {
        id: ProductId::new(row.id),
        category_id: CategoryId::new(row.category_id),
        name: row.name,
        slug: row.slug,
        description: row.description,
        price: Money::new(price),
        unit,
        is_custom_cake: row.is_custom_cake,
        is_featured: row.is_featured,
        available_options: options.into_iter().map(CakeOptionId::new).collect(),
        created_at,
    })
}

pub fn find_product(conn: &Connection, id: &ProductId) -> Result<Option<Product>, CatalogError> {
    let row = conn
        .prepare_cached(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"))
        .map_err(sql_err)?
        .query_row(params![id.as_str()], read_product_row)
        .optional()
        .map_err(sql_err)?;

    row.map(|r| to_product(conn, r)).transpose()
}

pub fn find_product_by_slug(
    conn: &Connection,
    slug: &str,
) -> Result<Option<Product>, CatalogError> {
    let row = conn
        .prepare_cached(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE slug = ?1"))
        .map_err(sql_err)?
        .query_row(params![slug], read_product_row)
        .optional()
        .map_err(sql_err)?;

    row.map(|r| to_product(conn, r)).transpose()
}

pub fn list_products(
    conn: &Connection,
    category_slug: Option<&str>,
    is_custom_cake: Option<bool>,
) -> Result<Vec<Product>, CatalogError> {
    let mut sql = format!(
        "SELECT {PRODUCT_COLUMNS_QUALIFIED} FROM products p \
         JOIN categories c ON c.id = p.category_id WHERE 1=1"
    );
    let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
    if let Some(slug) = category_slug {
        sql.push_str(&format!(" AND c.slug = ?{}", params_vec.len() + 1));
        params_vec.push(Box::new(slug.to_string()));
    }
    if let Some(custom) = is_custom_cake {
        sql.push_str(&format!(" AND p.is_custom_cake = ?{}", params_vec.len() + 1));
        params_vec.push(Box::new(custom));
    }
    sql.push_str(" ORDER BY p.name");

    let mut stmt = conn.prepare_cached(&sql).map_err(sql_err)?;
    let rows = stmt
        .query_map(
            rusqlite::params_from_iter(params_vec.iter().map(|p| p.as_ref())),
            read_product_row,
        )
        .map_err(sql_err)?
        .collect::<rusqlite::Result<Vec<ProductRow>>>()
        .map_err(sql_err)?;

    rows.into_iter().map(|r| to_product(conn, r)).collect()
}

const PRODUCT_COLUMNS_QUALIFIED: &str =
    "p.id, p.category_id, p.name, p.slug, p.description, p.price, p.unit, \
     p.is_custom_cake, p.is_featured, p.created_at";

pub fn find_category(
    conn: &Connection,
    id: &CategoryId,
) -> Result<Option<Category>, CatalogError> {
    conn.prepare_cached("SELECT id, name, slug FROM categories WHERE id = ?1")
        .map_err(sql_err)?
        .query_row(params![id.as_str()], |row| {
            Ok(Category {
                id: CategoryId::new(row.get::<_, String>(0)?),
                name: row.get(1)?,
                slug: row.get(2)?,
            })
        })
        .optional()
        .map_err(sql_err)
}

pub fn list_categories(conn: &Connection) -> Result<Vec<Category>, CatalogError> {
    let mut stmt = conn
        .prepare_cached("SELECT id, name, slug FROM categories ORDER BY name")
        .map_err(sql_err)?;
    stmt.query_map([], |row| {
        Ok(Category {
            id: CategoryId::new(row.get::<_, String>(0)?),
            name: row.get(1)?,
            slug: row.get(2)?,
        })
    })
    .map_err(sql_err)?
    .collect::<rusqlite::Result<Vec<Category>>>()
    .map_err(sql_err)
}

fn read_option_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<(String, String, String, String)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn to_option(raw: (String, String, String, String)) -> Result<CakeOption, CatalogError> {
    let (id, kind, name, modifier) = raw;
    let kind = OptionKind::parse(&kind).ok_or_else(|| CatalogError::Storage {
        message: format!("unknown option type: {kind}"),
    })?;
    let price_modifier = Decimal::from_str(&modifier).map_err(sql_err)?;
    Ok(CakeOption {
        id: CakeOptionId::new(id),
        kind,
        name,
        price_modifier: Money::new(price_modifier),
    })
}

pub fn list_options(conn: &Connection) -> Result<Vec<CakeOption>, CatalogError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, option_type, name, price_modifier FROM cake_options \
             ORDER BY option_type, name",
        )
        .map_err(sql_err)?;
    let raw = stmt
        .query_map([], read_option_row)
        .map_err(sql_err)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(sql_err)?;

    raw.into_iter().map(to_option).collect()
}

pub fn find_options(
    conn: &Connection,
    ids: &[CakeOptionId],
) -> Result<Vec<CakeOption>, CatalogError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, option_type, name, price_modifier FROM cake_options WHERE id = ?1",
        )
        .map_err(sql_err)?;

    let mut found = Vec::with_capacity(ids.len());
    for id in ids {
        let raw = stmt
            .query_row(params![id.as_str()], read_option_row)
            .optional()
            .map_err(sql_err)?;
        if let Some(raw) = raw {
            found.push(to_option(raw)?);
        }
    }
    Ok(found)
}

pub fn count_products(conn: &Connection) -> Result<u64, CatalogError> {
    conn.prepare_cached("SELECT COUNT(*) FROM products")
        .map_err(sql_err)?
        .query_row([], |row| row.get::<_, u64>(0))
        .map_err(sql_err)
}
