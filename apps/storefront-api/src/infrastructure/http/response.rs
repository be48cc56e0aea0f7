//! HTTP response DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::{CakeOption, Category, OptionKind, Product, UnitOfSale};
use crate::domain::ordering::value_objects::ValidationErrors;
use crate::domain::shared::Timestamp;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Validation failure response: field-keyed error map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationFailureResponse {
    /// Errors keyed by request field.
    pub errors: ValidationErrors,
}

/// API error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// A catalog category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    /// Category id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
}

impl CategoryResponse {
    /// Create from a domain Category.
    #[must_use]
    pub fn from_category(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.clone(),
            slug: category.slug.clone(),
        }
    }
}

/// A configurable cake option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CakeOptionResponse {
    /// Option id.
    pub id: String,
    /// Option kind.
    pub option_type: OptionKind,
    /// Display name.
    pub name: String,
    /// Additive price modifier.
    pub price_modifier: Decimal,
}

impl CakeOptionResponse {
    /// Create from a domain CakeOption.
    #[must_use]
    pub fn from_option(option: &CakeOption) -> Self {
        Self {
            id: option.id.to_string(),
            option_type: option.kind,
            name: option.name.clone(),
            price_modifier: option.price_modifier.amount(),
        }
    }
}

/// A catalog product, with its category name and available cake options
/// expanded for the storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    /// Product id.
    pub id: String,
    /// Owning category slug.
    pub category: String,
    /// Owning category display name.
    pub category_name: String,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Description.
    pub description: String,
    /// Unit price.
    pub price: Decimal,
    /// Unit of sale.
    pub unit: UnitOfSale,
    /// Whether this product is a configurable custom cake.
    pub is_custom_cake: bool,
    /// Whether the storefront features this product.
    pub is_featured: bool,
    /// Options available when configuring this product.
    pub available_options: Vec<CakeOptionResponse>,
    /// Creation time.
    pub created_at: Timestamp,
}

impl ProductResponse {
    /// Create from a domain Product plus its resolved category and options.
    #[must_use]
    pub fn from_product(product: &Product, category: &Category, options: &[CakeOption]) -> Self {
        Self {
            id: product.id.to_string(),
            category: category.slug.clone(),
            category_name: category.name.clone(),
            name: product.name.clone(),
            slug: product.slug.clone(),
            description: product.description.clone(),
            price: product.price.amount(),
            unit: product.unit,
            is_custom_cake: product.is_custom_cake,
            is_featured: product.is_featured,
            available_options: options.iter().map(CakeOptionResponse::from_option).collect(),
            created_at: product.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ordering::value_objects::ValidationCode;
    use crate::domain::shared::Money;
    use rust_decimal_macros::dec;

    #[test]
    fn validation_failure_serializes_field_keyed_map() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "pickup_datetime",
            ValidationCode::PastPickup,
            "Pickup time cannot be in the past.",
        );

        let json = serde_json::to_string(&ValidationFailureResponse { errors }).unwrap();
        assert!(json.contains(r#""pickup_datetime""#));
        assert!(json.contains(r#""code":"PAST_PICKUP""#));
    }

    #[test]
    fn product_response_expands_category_and_options() {
        let category = Category::new("Cakes");
        let option = CakeOption::new(OptionKind::Flavor, "Saffron Vanilla", Money::ZERO);
        let product = Product::new(
            category.id.clone(),
            "Signature Custom Celebration Cake",
            "Built to order.",
            Money::new(dec!(85.00)),
            UnitOfSale::Each,
            true,
        )
        .with_options(vec![option.id.clone()]);

        let resp = ProductResponse::from_product(&product, &category, &[option]);
        assert_eq!(resp.category, "cakes");
        assert_eq!(resp.category_name, "Cakes");
        assert_eq!(resp.available_options.len(), 1);
        assert_eq!(resp.available_options[0].option_type, OptionKind::Flavor);
    }
}
