//! Order line items.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, ProductId};

/// A single line of an order.
///
/// Everything here is a snapshot fixed at placement time: the price and the
/// flavor/filling/size labels never change when the referenced product or
/// cake options change later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    product_id: ProductId,
    quantity: u32,
    flavor: Option<String>,
    filling: Option<String>,
    size: Option<String>,
    price: Money,
}

impl OrderItem {
    /// Create a line item. Labels are stored verbatim; the caller resolved
    /// option display names into free text before submission.
    #[must_use]
    pub fn new(
        product_id: ProductId,
        quantity: u32,
        flavor: Option<String>,
        filling: Option<String>,
        size: Option<String>,
        price: Money,
    ) -> Self {
        Self {
            product_id,
            quantity,
            flavor,
            filling,
            size,
            price,
        }
    }

    /// Referenced product.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Ordered quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Selected flavor label (custom cakes only).
    #[must_use]
    pub fn flavor(&self) -> Option<&str> {
        self.flavor.as_deref()
    }

    /// Selected filling label (custom cakes only).
    #[must_use]
    pub fn filling(&self) -> Option<&str> {
        self.filling.as_deref()
    }

    /// Selected size label (custom cakes only).
    #[must_use]
    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    /// Line price snapshot.
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Price extended over the quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}
