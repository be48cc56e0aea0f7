//! Shared value objects.

mod identifiers;
mod money;
mod timestamp;

pub use identifiers::{CakeOptionId, CategoryId, OrderId, ProductId};
pub use money::Money;
pub use timestamp::Timestamp;
