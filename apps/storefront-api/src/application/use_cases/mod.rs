//! Use Cases

mod place_order;

pub use place_order::{PlaceOrderError, PlaceOrderUseCase};
