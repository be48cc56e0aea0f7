//! Order Aggregate Root
//!
//! An order together with its owned line items, created and persisted as one
//! atomic unit. Prices and option labels are snapshots: once placed, an order
//! never tracks later catalog changes.

use serde::{Deserialize, Serialize};

use crate::domain::ordering::value_objects::{Customer, OrderStatus};
use crate::domain::shared::{Money, OrderId, ProductId, Timestamp};

use super::OrderItem;

/// A single proposed line of an order, as submitted by the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSelection {
    /// Referenced product.
    pub product_id: ProductId,
    /// Ordered quantity.
    pub quantity: u32,
    /// Selected flavor label (custom cakes only), copied verbatim.
    pub flavor: Option<String>,
    /// Selected filling label (custom cakes only), copied verbatim.
    pub filling: Option<String>,
    /// Selected size label (custom cakes only), copied verbatim.
    pub size: Option<String>,
    /// Caller-supplied line price.
    pub price: Money,
}

/// Command to place a new order.
///
/// Must pass [`OrderValidator`](crate::domain::ordering::OrderValidator)
/// before being handed to [`Order::place`]; the aggregate itself does not
/// re-run the intake rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrderCommand {
    /// Customer contact details.
    pub customer: Customer,
    /// Caller-supplied order total.
    pub total_price: Money,
    /// Requested pickup time.
    pub pickup_at: Timestamp,
    /// Line selections, in submission order.
    pub items: Vec<ItemSelection>,
}

/// Parameters for reconstituting an Order from storage.
///
/// Used by repositories to rebuild aggregates from persisted state, bypassing
/// placement logic.
#[derive(Debug, Clone)]
pub struct ReconstitutedOrderParams {
    /// Order identifier.
    pub id: OrderId,
    /// Customer contact details.
    pub customer: Customer,
    /// Order total.
    pub total_price: Money,
    /// Requested pickup time.
    pub pickup_at: Timestamp,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Line items in submission order.
    pub items: Vec<OrderItem>,
    /// Creation timestamp.
    pub created_at: Timestamp,
}

/// Order Aggregate Root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer: Customer,
    total_price: Money,
    pickup_at: Timestamp,
    status: OrderStatus,
    items: Vec<OrderItem>,
    created_at: Timestamp,
}

impl Order {
    /// Assemble a new order from a validated command.
    ///
    /// Generates a fresh id, defaults status to `Pending`, stamps `created_at`
    /// with the supplied `now` (the same instant validation used), and copies
    /// every line selection into a snapshot item, preserving submission order.
    #[must_use]
    pub fn place(cmd: PlaceOrderCommand, now: Timestamp) -> Self {
        let items = cmd
            .items
            .into_iter()
            .map(|sel| {
                OrderItem::new(
                    sel.product_id,
                    sel.quantity,
                    sel.flavor,
                    sel.filling,
                    sel.size,
                    sel.price,
                )
            })
            .collect();

        Self {
            id: OrderId::generate(),
            customer: cmd.customer,
            total_price: cmd.total_price,
            pickup_at: cmd.pickup_at,
            status: OrderStatus::Pending,
            items,
            created_at: now,
        }
    }

    /// Reconstitute an order from stored state.
    #[must_use]
    pub fn reconstitute(params: ReconstitutedOrderParams) -> Self {
        Self {
            id: params.id,
            customer: params.customer,
            total_price: params.total_price,
            pickup_at: params.pickup_at,
            status: params.status,
            items: params.items,
            created_at: params.created_at,
        }
    }

    /// Get the order id.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Get the customer contact details.
    #[must_use]
    pub const fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Get the order total.
    #[must_use]
    pub const fn total_price(&self) -> Money {
        self.total_price
    }

    /// Get the requested pickup time.
    #[must_use]
    pub const fn pickup_at(&self) -> Timestamp {
        self.pickup_at
    }

    /// Get the current status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Get the line items, in submission order.
    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_command() -> PlaceOrderCommand {
        PlaceOrderCommand {
            customer: Customer::new("Leila", "leila@example.com", "416-555-0100"),
            total_price: Money::new(dec!(109.00)),
            pickup_at: Timestamp::parse("2026-06-05T15:00:00Z").unwrap(),
            items: vec![
                ItemSelection {
                    product_id: ProductId::new("prod-baklava"),
                    quantity: 1,
                    flavor: None,
                    filling: None,
                    size: None,
                    price: Money::new(dec!(24.00)),
                },
                ItemSelection {
                    product_id: ProductId::new("prod-cake"),
                    quantity: 1,
                    flavor: Some("Saffron Vanilla".to_string()),
                    filling: Some("Honey Buttercream".to_string()),
                    size: Some("6\" Small (Serves 8-10)".to_string()),
                    price: Money::new(dec!(85.00)),
                },
            ],
        }
    }

    #[test]
    fn place_defaults_to_pending() {
        let now = Timestamp::parse("2026-06-01T12:00:00Z").unwrap();
        let order = Order::place(make_command(), now);

        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.created_at(), now);
        assert!(!order.id().as_str().is_empty());
    }

    #[test]
    fn place_preserves_submission_order_and_snapshots() {
        let order = Order::place(make_command(), Timestamp::now());

        assert_eq!(order.items().len(), 2);
        assert_eq!(order.items()[0].product_id().as_str(), "prod-baklava");
        assert_eq!(order.items()[1].flavor(), Some("Saffron Vanilla"));
        assert_eq!(order.items()[1].price().amount(), dec!(85.00));
    }

    #[test]
    fn place_generates_distinct_ids() {
        let a = Order::place(make_command(), Timestamp::now());
        let b = Order::place(make_command(), Timestamp::now());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn reconstitute_restores_state() {
        let placed = Order::place(make_command(), Timestamp::now());

        let restored = Order::reconstitute(ReconstitutedOrderParams {
            id: placed.id().clone(),
            customer: placed.customer().clone(),
            total_price: placed.total_price(),
            pickup_at: placed.pickup_at(),
            status: OrderStatus::Paid,
            items: placed.items().to_vec(),
            created_at: placed.created_at(),
        });

        assert_eq!(restored.id(), placed.id());
        assert_eq!(restored.status(), OrderStatus::Paid);
        assert_eq!(restored.items(), placed.items());
    }

    #[test]
    fn serde_roundtrip() {
        let order = Order::place(make_command(), Timestamp::now());

        let json = serde_json::to_string(&order).unwrap();
        let parsed: Order = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, order);
    }
}
