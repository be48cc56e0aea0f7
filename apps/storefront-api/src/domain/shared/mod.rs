//! Shared domain primitives used by every bounded context.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::{CakeOptionId, CategoryId, Money, OrderId, ProductId, Timestamp};
