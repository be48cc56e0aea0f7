//! Demo catalog seeding.
//!
//! Populates an empty store with the bakery's starter catalog so a fresh
//! deployment has something to sell.

use rust_decimal::Decimal;

use crate::domain::catalog::{CakeOption, CatalogError, Category, OptionKind, Product, UnitOfSale};
use crate::domain::shared::Money;
use crate::infrastructure::persistence::SqliteStore;

/// Seed the starter catalog if the store has no products yet.
///
/// # Errors
///
/// Returns error if any catalog write fails.
pub fn seed_if_empty(store: &SqliteStore) -> Result<(), CatalogError> {
    if !store.catalog_is_empty()? {
        return Ok(());
    }

    let pastries = Category::new("Pastries");
    let cakes = Category::new("Cakes");
    let bread = Category::new("Bread");
    for category in [&pastries, &cakes, &bread] {
        store.insert_category(category)?;
    }

    let options = [
        (OptionKind::Flavor, "Cardamom & Rose"),
        (OptionKind::Flavor, "Saffron Vanilla"),
        (OptionKind::Flavor, "Pistachio Dream"),
        (OptionKind::Filling, "Apricot Jam"),
        (OptionKind::Filling, "Honey Buttercream"),
        (OptionKind::Filling, "Pomegranate Reduction"),
        (OptionKind::Size, "6\" Small (Serves 8-10)"),
        (OptionKind::Size, "8\" Medium (Serves 15-20)"),
        (OptionKind::Size, "10\" Large (Serves 25-30)"),
    ];
    let mut option_ids = Vec::with_capacity(options.len());
    for (kind, name) in options {
        let option = CakeOption::new(kind, name, Money::ZERO);
        store.insert_cake_option(&option)?;
        option_ids.push(option.id);
    }

    let baklava = Product::new(
        pastries.id.clone(),
        "Saffron & Rosewater Baklava",
        "Luxurious layers of phyllo with premium pistachios and saffron syrup.",
        Money::new(Decimal::new(2400, 2)),
        UnitOfSale::Each,
        false,
    );
    store.insert_product(&baklava)?;

    let celebration_cake = Product::new(
        cakes.id.clone(),
        "Signature Custom Celebration Cake",
        "A masterpiece tailored to your celebration. Select your flavor and filling.",
        Money::new(Decimal::new(8500, 2)),
        UnitOfSale::Each,
        true,
    )
    .featured()
    .with_options(option_ids);
    store.insert_product(&celebration_cake)?;

    tracing::info!("seeded starter catalog");
    Ok(())
}
