//! Order repository port.

use async_trait::async_trait;

use crate::domain::ordering::aggregate::Order;
use crate::domain::ordering::errors::OrderError;
use crate::domain::shared::OrderId;

/// Persistence port for order aggregates.
///
/// `create` must persist the order and all of its line items atomically: a
/// failure on any line leaves no trace of the order behind.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a newly placed order together with its items.
    async fn create(&self, order: &Order) -> Result<(), OrderError>;

    /// Find an order by id.
    async fn find_by_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderError>;

    /// List all orders, newest first.
    async fn list(&self) -> Result<Vec<Order>, OrderError>;

    /// Count persisted orders.
    async fn count(&self) -> Result<u64, OrderError>;
}
