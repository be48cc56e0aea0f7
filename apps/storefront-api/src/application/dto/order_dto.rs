//! Order DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::ordering::aggregate::{ItemSelection, Order, PlaceOrderCommand};
use crate::domain::ordering::value_objects::{Customer, OrderStatus};
use crate::domain::shared::{Money, ProductId, Timestamp};

/// DTO for placing an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderDto {
    /// Customer name.
    pub customer_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Requested pickup time (RFC 3339).
    pub pickup_datetime: Timestamp,
    /// Caller-computed order total.
    pub total_price: Decimal,
    /// Order lines.
    pub items: Vec<PlaceOrderItemDto>,
}

/// A single line of a placement request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderItemDto {
    /// Referenced product id.
    pub product: String,
    /// Ordered quantity. Defaults to 1 when omitted.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Selected flavor label.
    #[serde(default)]
    pub flavor: Option<String>,
    /// Selected filling label.
    #[serde(default)]
    pub filling: Option<String>,
    /// Selected size label.
    #[serde(default)]
    pub size: Option<String>,
    /// Caller-supplied line price.
    pub price: Decimal,
}

const fn default_quantity() -> u32 {
    1
}

impl PlaceOrderDto {
    /// Convert to a domain command.
    #[must_use]
    pub fn to_command(&self) -> PlaceOrderCommand {
        PlaceOrderCommand {
            customer: Customer::new(&self.customer_name, &self.email, &self.phone),
            total_price: Money::new(self.total_price),
            pickup_at: self.pickup_datetime,
            items: self
                .items
                .iter()
                .map(|item| ItemSelection {
                    product_id: ProductId::new(&item.product),
                    quantity: item.quantity,
                    flavor: item.flavor.clone(),
                    filling: item.filling.clone(),
                    size: item.size.clone(),
                    price: Money::new(item.price),
                })
                .collect(),
        }
    }
}

/// DTO representing a persisted order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDto {
    /// Order id.
    pub id: String,
    /// Customer name.
    pub customer_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Requested pickup time.
    pub pickup_datetime: Timestamp,
    /// Order total.
    pub total_price: Decimal,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Line items in submission order.
    pub items: Vec<OrderItemDto>,
    /// Creation time.
    pub created_at: Timestamp,
}

/// A persisted order line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemDto {
    /// Referenced product id.
    pub product: String,
    /// Ordered quantity.
    pub quantity: u32,
    /// Flavor label snapshot.
    pub flavor: Option<String>,
    /// Filling label snapshot.
    pub filling: Option<String>,
    /// Size label snapshot.
    pub size: Option<String>,
    /// Price snapshot.
    pub price: Decimal,
}

impl OrderDto {
    /// Create from a domain Order.
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id().to_string(),
            customer_name: order.customer().name().to_string(),
            email: order.customer().email().to_string(),
            phone: order.customer().phone().to_string(),
            pickup_datetime: order.pickup_at(),
            total_price: order.total_price().amount(),
            status: order.status(),
            items: order
                .items()
                .iter()
                .map(|item| OrderItemDto {
                    product: item.product_id().to_string(),
                    quantity: item.quantity(),
                    flavor: item.flavor().map(ToString::to_string),
                    filling: item.filling().map(ToString::to_string),
                    size: item.size().map(ToString::to_string),
                    price: item.price().amount(),
                })
                .collect(),
            created_at: order.created_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn place_dto() -> PlaceOrderDto {
        PlaceOrderDto {
            customer_name: "Leila".to_string(),
            email: "leila@example.com".to_string(),
            phone: "416-555-0100".to_string(),
            pickup_datetime: Timestamp::parse("2026-06-05T15:00:00Z").unwrap(),
            total_price: dec!(109.00),
            items: vec![
                PlaceOrderItemDto {
                    product: "prod-baklava".to_string(),
                    quantity: 1,
                    flavor: None,
                    filling: None,
                    size: None,
                    price: dec!(24.00),
                },
                PlaceOrderItemDto {
                    product: "prod-cake".to_string(),
                    quantity: 1,
                    flavor: Some("Saffron Vanilla".to_string()),
                    filling: Some("Honey Buttercream".to_string()),
                    size: Some("6\" Small (Serves 8-10)".to_string()),
                    price: dec!(85.00),
                },
            ],
        }
    }

    #[test]
    fn to_command_maps_all_lines() {
        let cmd = place_dto().to_command();

        assert_eq!(cmd.customer.name(), "Leila");
        assert_eq!(cmd.total_price.amount(), dec!(109.00));
        assert_eq!(cmd.items.len(), 2);
        assert_eq!(cmd.items[1].flavor.as_deref(), Some("Saffron Vanilla"));
    }

    #[test]
    fn item_option_fields_default_to_none() {
        let json = r#"{"product": "prod-1", "quantity": 2, "price": "24.00"}"#;
        let item: PlaceOrderItemDto = serde_json::from_str(json).unwrap();

        assert_eq!(item.flavor, None);
        assert_eq!(item.filling, None);
        assert_eq!(item.size, None);
    }

    #[test]
    fn quantity_defaults_to_one() {
        let json = r#"{"product": "prod-1", "price": "24.00"}"#;
        let item: PlaceOrderItemDto = serde_json::from_str(json).unwrap();

        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn from_order_round_trips_snapshots() {
        let order = Order::place(place_dto().to_command(), Timestamp::now());
        let dto = OrderDto::from_order(&order);

        assert_eq!(dto.id, order.id().to_string());
        assert_eq!(dto.status, OrderStatus::Pending);
        assert_eq!(dto.items.len(), 2);
        assert_eq!(dto.items[1].size.as_deref(), Some("6\" Small (Serves 8-10)"));
        assert_eq!(dto.items[1].price, dec!(85.00));
    }
}
