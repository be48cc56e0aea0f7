//! Order table queries.
//!
//! Free functions over a raw connection; `insert_order` is always called
//! inside a transaction owned by the store.

use std::str::FromStr;

use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;

use crate::domain::ordering::aggregate::{Order, OrderItem, ReconstitutedOrderParams};
use crate::domain::ordering::errors::OrderError;
use crate::domain::ordering::value_objects::{Customer, OrderStatus};
use crate::domain::shared::{Money, OrderId, ProductId, Timestamp};

fn sql_err(e: impl std::fmt::Display) -> OrderError {
    OrderError::Storage {
        message: e.to_string(),
    }
}

pub fn insert_order(conn: &Connection, order: &Order) -> Result<(), OrderError> {
    conn.prepare_cached(
        "INSERT INTO orders
           (id, customer_name, email, phone, total_price, pickup_at, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )
    .map_err(sql_err)?
    .execute(params![
        order.id().as_str(),
        order.customer().name(),
        order.customer().email(),
        order.customer().phone(),
        order.total_price().amount().to_string(),
        order.pickup_at().to_rfc3339(),
        order.status().as_str(),
        order.created_at().to_rfc3339(),
    ])
    .map_err(sql_err)?;

    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO order_items
               (order_id, position, product_id, quantity, flavor, filling, size, price)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .map_err(sql_err)?;
    for (position, item) in order.items().iter().enumerate() {
        stmt.execute(params![
            order.id().as_str(),
            position as i64,
            item.product_id().as_str(),
            item.quantity(),
            item.flavor(),
            item.filling(),
            item.size(),
            item.price().amount().to_string(),
        ])
        .map_err(sql_err)?;
    }
    Ok(())
}

struct OrderRow {
    id: String,
    customer_name: String,
    email: String,
    phone: String,
    total_price: String,
    pickup_at: String,
    status: String,
    created_at: String,
}

const ORDER_COLUMNS: &str =
    "id, customer_name, email, phone, total_price, pickup_at, status, created_at";

fn read_order_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<OrderRow> {
    Ok(OrderRow {
        id: row.get(0)?,
        customer_name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        total_price: row.get(4)?,
        pickup_at: row.get(5)?,
        status: row.get(6)?,
        created_at: row.get(7)?,
    })
}

fn load_items(conn: &Connection, order_id: &str) -> Result<Vec<OrderItem>, OrderError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT product_id, quantity, flavor, filling, size, price
             FROM order_items WHERE order_id = ?1 ORDER BY position",
        )
        .map_err(sql_err)?;

    let raw = stmt
        .query_map(params![order_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, u32>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, String>(5)?,
            ))
        })
        .map_err(sql_err)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(sql_err)?;

    raw.into_iter()
        .map(|(product_id, quantity, flavor, filling, size, price)| {
            let price = Decimal::from_str(&price).map_err(sql_err)?;
            Ok(OrderItem::new(
                ProductId::new(product_id),
                quantity,
                flavor,
                filling,
                size,
                Money::new(price),
            ))
        })
        .collect()
}

fn to_order(conn: &Connection, row: OrderRow) -> Result<Order, OrderError> {
    let total_price = Decimal::from_str(&row.total_price).map_err(sql_err)?;
    let pickup_at = Timestamp::parse(&row.pickup_at).map_err(sql_err)?;
    let created_at = Timestamp::parse(&row.created_at).map_err(sql_err)?;
    let status = OrderStatus::parse(&row.status).ok_or_else(|| OrderError::Storage {
        message: format!("unknown order status: {}", row.status),
    })?;
    let items = load_items(conn, &row.id)?;

    Ok(Order::reconstitute(ReconstitutedOrderParams {
        id: OrderId::new(row.id),
        customer: Customer::new(row.customer_name, row.email, row.phone),
        total_price: Money::new(total_price),
        pickup_at,
        status,
        items,
        created_at,
    }))
}

pub fn find_by_id(conn: &Connection, order_id: &OrderId) -> Result<Option<Order>, OrderError> {
    let row = conn
        .prepare_cached(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?1"))
        .map_err(sql_err)?
        .query_row(params![order_id.as_str()], read_order_row)
        .optional()
        .map_err(sql_err)?;

    row.map(|r| to_order(conn, r)).transpose()
}

pub fn list(conn: &Connection) -> Result<Vec<Order>, OrderError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC, id"
        ))
        .map_err(sql_err)?;
    let rows = stmt
        .query_map([], read_order_row)
        .map_err(sql_err)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(sql_err)?;

    rows.into_iter().map(|r| to_order(conn, r)).collect()
}

pub fn count(conn: &Connection) -> Result<u64, OrderError> {
    conn.prepare_cached("SELECT COUNT(*) FROM orders")
        .map_err(sql_err)?
        .query_row([], |row| row.get::<_, u64>(0))
        .map_err(sql_err)
}
