//! Order aggregate.

mod order;
mod order_item;

pub use order::{ItemSelection, Order, PlaceOrderCommand, ReconstitutedOrderParams};
pub use order_item::OrderItem;
