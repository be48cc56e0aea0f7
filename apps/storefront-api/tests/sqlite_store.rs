//! SQLite Store Integration Tests
//!
//! File-backed tests exercising durability, transactional order creation, and
//! the cascade from orders to their line items.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use chrono::Duration;
use rust_decimal_macros::dec;
use storefront_api::domain::ordering::{Customer, ItemSelection, PlaceOrderCommand};
use storefront_api::infrastructure::seed::seed_if_empty;
use storefront_api::{
    CatalogRepository, Category, Money, Order, OrderRepository, Product, ProductId, SqliteStore,
    Timestamp, UnitOfSale,
};
use tempfile::TempDir;

fn seeded_store() -> (TempDir, SqliteStore, Product) {
    let dir = TempDir::new().unwrap();
    let store = SqliteStore::open(&dir.path().join("storefront.db")).unwrap();

    let pastries = Category::new("Pastries");
    let baklava = Product::new(
        pastries.id.clone(),
        "Saffron & Rosewater Baklava",
        "Layers of phyllo with pistachios.",
        Money::new(dec!(24.00)),
        UnitOfSale::Each,
        false,
    );
    store.insert_category(&pastries).unwrap();
    store.insert_product(&baklava).unwrap();

    (dir, store, baklava)
}

fn order_for(product_id: &ProductId) -> Order {
    Order::place(
        PlaceOrderCommand {
            customer: Customer::new("Leila", "leila@example.com", "416-555-0100"),
            total_price: Money::new(dec!(48.00)),
            pickup_at: Timestamp::now().plus(Duration::hours(4)),
            items: vec![ItemSelection {
                product_id: product_id.clone(),
                quantity: 2,
                flavor: None,
                filling: None,
                size: None,
                price: Money::new(dec!(24.00)),
            }],
        },
        Timestamp::now(),
    )
}

#[tokio::test]
async fn order_round_trips_with_items_in_submission_order() {
    let (_dir, store, baklava) = seeded_store();

    let order = Order::place(
        PlaceOrderCommand {
            customer: Customer::new("Leila", "leila@example.com", "416-555-0100"),
            total_price: Money::new(dec!(48.00)),
            pickup_at: Timestamp::now().plus(Duration::hours(4)),
            items: vec![
                ItemSelection {
                    product_id: baklava.id.clone(),
                    quantity: 1,
                    flavor: Some("Saffron Vanilla".to_string()),
                    filling: None,
                    size: None,
                    price: Money::new(dec!(24.00)),
                },
                ItemSelection {
                    product_id: baklava.id.clone(),
                    quantity: 1,
                    flavor: None,
                    filling: Some("Apricot Jam".to_string()),
                    size: None,
                    price: Money::new(dec!(24.00)),
                },
            ],
        },
        Timestamp::now(),
    );
    store.create(&order).await.unwrap();

    let found = store.find_by_id(order.id()).await.unwrap().unwrap();
    assert_eq!(found.items().len(), 2);
    assert_eq!(found.items()[0].flavor(), Some("Saffron Vanilla"));
    assert_eq!(found.items()[1].filling(), Some("Apricot Jam"));
    assert_eq!(found.customer().name(), "Leila");
    assert_eq!(found.total_price(), order.total_price());
}

#[tokio::test]
async fn orders_survive_reopening_the_database() {
    let (dir, store, baklava) = seeded_store();
    let path = dir.path().join("storefront.db");

    let order = order_for(&baklava.id);
    store.create(&order).await.unwrap();
    drop(store);

    let reopened = SqliteStore::open(&path).unwrap();
    let found = reopened.find_by_id(order.id()).await.unwrap().unwrap();
    assert_eq!(found.id(), order.id());
    assert_eq!(found.items().len(), 1);
    assert_eq!(reopened.count().await.unwrap(), 1);

    let product = reopened.find_product(&baklava.id).await.unwrap();
    assert!(product.is_some());
}

#[tokio::test]
async fn failed_item_insert_rolls_back_the_whole_order() {
    let (_dir, store, _baklava) = seeded_store();

    // References a product that does not exist; the foreign key rejects the
    // item row, which must take the order row down with it.
    let order = order_for(&ProductId::new("no-such-product"));
    let result = store.create(&order).await;

    assert!(result.is_err());
    assert_eq!(store.count().await.unwrap(), 0);
    assert!(store.find_by_id(order.id()).await.unwrap().is_none());
}

#[tokio::test]
async fn deleting_an_order_cascades_to_its_items() {
    let (dir, store, baklava) = seeded_store();
    let path = dir.path().join("storefront.db");

    let order = order_for(&baklava.id);
    store.create(&order).await.unwrap();
    drop(store);

    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.pragma_update(None, "foreign_keys", "ON").unwrap();
    conn.execute("DELETE FROM orders WHERE id = ?1", [order.id().as_str()])
        .unwrap();

    let remaining: i64 = conn
        .query_row("SELECT COUNT(*) FROM order_items", [], |row| row.get(0))
        .unwrap();
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn list_returns_newest_orders_first() {
    let (_dir, store, baklava) = seeded_store();

    let first = Order::place(
        PlaceOrderCommand {
            customer: Customer::new("Leila", "leila@example.com", "416-555-0100"),
            total_price: Money::new(dec!(24.00)),
            pickup_at: Timestamp::now().plus(Duration::hours(4)),
            items: vec![ItemSelection {
                product_id: baklava.id.clone(),
                quantity: 1,
                flavor: None,
                filling: None,
                size: None,
                price: Money::new(dec!(24.00)),
            }],
        },
        Timestamp::parse("2026-06-01T10:00:00Z").unwrap(),
    );
    let second = Order::place(
        PlaceOrderCommand {
            customer: Customer::new("Omar", "omar@example.com", "416-555-0101"),
            total_price: Money::new(dec!(24.00)),
            pickup_at: Timestamp::now().plus(Duration::hours(4)),
            items: vec![ItemSelection {
                product_id: baklava.id.clone(),
                quantity: 1,
                flavor: None,
                filling: None,
                size: None,
                price: Money::new(dec!(24.00)),
            }],
        },
        Timestamp::parse("2026-06-01T11:00:00Z").unwrap(),
    );
    store.create(&first).await.unwrap();
    store.create(&second).await.unwrap();

    let all = store.list().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id(), second.id());
    assert_eq!(all[1].id(), first.id());
}

#[tokio::test]
async fn seeded_catalog_supports_the_full_browse_surface() {
    let dir = TempDir::new().unwrap();
    let store = SqliteStore::open(&dir.path().join("storefront.db")).unwrap();
    seed_if_empty(&store).unwrap();

    let categories = store.list_categories().await.unwrap();
    assert_eq!(categories.len(), 3);

    let options = store.list_options().await.unwrap();
    assert_eq!(options.len(), 9);

    let cake = store
        .find_product_by_slug("signature-custom-celebration-cake")
        .await
        .unwrap()
        .unwrap();
    assert!(cake.is_custom_cake);
    assert_eq!(store.find_options(&cake.available_options).await.unwrap().len(), 9);

    let baklava = store
        .find_product_by_slug("saffron-rosewater-baklava")
        .await
        .unwrap()
        .unwrap();
    let order = order_for(&baklava.id);
    store.create(&order).await.unwrap();
    assert_eq!(store.count().await.unwrap(), 1);

    // Seeding again must not duplicate anything.
    seed_if_empty(&store).unwrap();
    assert_eq!(store.list_categories().await.unwrap().len(), 3);
}
