//! Ordering value objects.

mod customer;
mod order_status;
mod validation;

pub use customer::Customer;
pub use order_status::OrderStatus;
pub use validation::{FieldError, ValidationCode, ValidationErrors};
