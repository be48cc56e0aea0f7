//! Ordering errors.

use thiserror::Error;

/// Errors from order persistence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// No order exists with the given id.
    #[error("Order not found: {order_id}")]
    NotFound {
        /// The order id that failed to resolve.
        order_id: String,
    },

    /// Underlying storage failed. The atomic write contract guarantees
    /// nothing was committed when this is returned from `create`.
    #[error("Order storage failure: {message}")]
    Storage {
        /// Description of the failure.
        message: String,
    },
}
