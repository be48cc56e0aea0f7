//! Ordering bounded context.
//!
//! The order intake workflow: the `Order` aggregate with its `OrderItem`
//! snapshot lines, the pure `OrderValidator` enforcing lead-time and
//! consistency rules, and the repository port for atomic persistence.

pub mod aggregate;
pub mod errors;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use aggregate::{ItemSelection, Order, OrderItem, PlaceOrderCommand, ReconstitutedOrderParams};
pub use errors::OrderError;
pub use repository::OrderRepository;
pub use services::OrderValidator;
pub use value_objects::{Customer, FieldError, OrderStatus, ValidationCode, ValidationErrors};
