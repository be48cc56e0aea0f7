//! Application DTOs.

mod order_dto;

pub use order_dto::{OrderDto, OrderItemDto, PlaceOrderDto, PlaceOrderItemDto};
