//! Place Order Use Case

use std::sync::Arc;

use thiserror::Error;

use crate::application::dto::{OrderDto, PlaceOrderDto};
use crate::domain::catalog::{CatalogError, CatalogRepository};
use crate::domain::ordering::aggregate::Order;
use crate::domain::ordering::errors::OrderError;
use crate::domain::ordering::repository::OrderRepository;
use crate::domain::ordering::services::OrderValidator;
use crate::domain::ordering::value_objects::ValidationErrors;
use crate::domain::shared::Timestamp;

/// Failure modes of order placement.
#[derive(Debug, Error)]
pub enum PlaceOrderError {
    /// The proposed order failed intake validation.
    #[error("order rejected: {0}")]
    Rejected(ValidationErrors),
    /// Catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Persisting the order failed.
    #[error(transparent)]
    Storage(#[from] OrderError),
}

/// Use case for placing a storefront order.
///
/// Captures `now` once at the start, resolves every line's product reference
/// against the catalog, runs the full intake validation, and only then
/// assembles and persists the aggregate.
pub struct PlaceOrderUseCase<C, O>
where
    C: CatalogRepository,
    O: OrderRepository,
{
    catalog: Arc<C>,
    orders: Arc<O>,
}

impl<C, O> PlaceOrderUseCase<C, O>
where
    C: CatalogRepository,
    O: OrderRepository,
{
    /// Create a new PlaceOrderUseCase.
    pub fn new(catalog: Arc<C>, orders: Arc<O>) -> Self {
        Self { catalog, orders }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` with the full field-keyed error map when validation
    /// fails; `Catalog`/`Storage` on infrastructure failures. A rejected order
    /// leaves no persisted trace.
    pub async fn execute(&self, dto: PlaceOrderDto) -> Result<OrderDto, PlaceOrderError> {
        let now = Timestamp::now();
        let cmd = dto.to_command();

        let mut resolved = Vec::with_capacity(cmd.items.len());
        for item in &cmd.items {
            resolved.push(self.catalog.find_product(&item.product_id).await?);
        }

        OrderValidator::validate(now, &cmd, &resolved).map_err(PlaceOrderError::Rejected)?;

        let order = Order::place(cmd, now);
        self.orders.create(&order).await?;

        tracing::info!(
            order_id = %order.id(),
            items = order.items().len(),
            total = %order.total_price(),
            "order placed"
        );

        Ok(OrderDto::from_order(&order))
    }
}
