// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::items_after_statements
    )
)]

//! Storefront API - Bakery Backend Library
//!
//! Order intake and catalog service for the bakery storefront. The heart of the
//! crate is the order intake workflow: a cart of product selections (including
//! custom-cake configuration) is validated against lead-time rules and turned
//! into a persisted, priced order aggregate.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, validation)
//!   - `catalog`: Category, Product, CakeOption records and read queries
//!   - `ordering`: Order aggregate, OrderItem snapshots, the order validator
//!
//! - **Application**: Use cases and orchestration
//!   - `use_cases`: `PlaceOrderUseCase` (validate + assemble + persist)
//!   - `dto`: Data transfer objects for the API boundary
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `http`: Axum REST controller
//!   - `persistence`: SQLite store (durable, transactional) and in-memory repos
//!   - `seed`: Demo catalog data

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and DTOs.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loaded from environment variables.
pub mod config;

// Domain re-exports
pub use domain::catalog::{CakeOption, CatalogRepository, Category, OptionKind, Product, UnitOfSale};
pub use domain::ordering::{
    Order, OrderItem, OrderRepository, OrderStatus, OrderValidator, ValidationCode,
    ValidationErrors,
};
pub use domain::shared::{CakeOptionId, CategoryId, Money, OrderId, ProductId, Timestamp};

// Application re-exports
pub use application::dto::{OrderDto, OrderItemDto, PlaceOrderDto, PlaceOrderItemDto};
pub use application::use_cases::{PlaceOrderError, PlaceOrderUseCase};

// Infrastructure re-exports
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::{InMemoryCatalog, InMemoryOrderRepository, SqliteStore};
