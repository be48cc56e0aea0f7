//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to application use cases.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::application::dto::{OrderDto, PlaceOrderDto};
use crate::application::use_cases::{PlaceOrderError, PlaceOrderUseCase};
use crate::domain::catalog::{CatalogError, CatalogRepository, Product, ProductFilter};
use crate::domain::ordering::repository::OrderRepository;
use crate::domain::shared::OrderId;

use super::request::ProductListQuery;
use super::response::{
    ApiErrorResponse, CakeOptionResponse, CategoryResponse, HealthResponse, ProductResponse,
    ValidationFailureResponse,
};

/// Application state shared across handlers.
pub struct AppState<C, O>
where
    C: CatalogRepository,
    O: OrderRepository,
{
    /// Use case for placing orders.
    pub place_order: Arc<PlaceOrderUseCase<C, O>>,
    /// Catalog repository for browse queries.
    pub catalog: Arc<C>,
    /// Order repository for confirmation-page lookups.
    pub orders: Arc<O>,
    /// Application version.
    pub version: String,
}

impl<C, O> AppState<C, O>
where
    C: CatalogRepository,
    O: OrderRepository,
{
    /// Wire up state from the two repositories.
    pub fn new(catalog: Arc<C>, orders: Arc<O>) -> Self {
        Self {
            place_order: Arc::new(PlaceOrderUseCase::new(Arc::clone(&catalog), Arc::clone(&orders))),
            catalog,
            orders,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl<C, O> Clone for AppState<C, O>
where
    C: CatalogRepository,
    O: OrderRepository,
{
    fn clone(&self) -> Self {
        Self {
            place_order: Arc::clone(&self.place_order),
            catalog: Arc::clone(&self.catalog),
            orders: Arc::clone(&self.orders),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<C, O>(state: AppState<C, O>) -> Router
where
    C: CatalogRepository + 'static,
    O: OrderRepository + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/orders", post(place_order))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/categories", get(list_categories))
        .route("/api/products", get(list_products))
        .route("/api/products/{slug}", get(get_product))
        .route("/api/cake-options", get(list_cake_options))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<C, O>(State(state): State<AppState<C, O>>) -> impl IntoResponse
where
    C: CatalogRepository,
    O: OrderRepository,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Place a new order.
async fn place_order<C, O>(
    State(state): State<AppState<C, O>>,
    Json(request): Json<PlaceOrderDto>,
) -> Response
where
    C: CatalogRepository,
    O: OrderRepository,
{
    match state.place_order.execute(request).await {
        Ok(order) => (StatusCode::CREATED, Json(order)).into_response(),
        Err(PlaceOrderError::Rejected(errors)) => (
            StatusCode::BAD_REQUEST,
            Json(ValidationFailureResponse { errors }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("order placement failed: {e}");
            internal_error(&e.to_string())
        }
    }
}

/// Fetch a stored order by id.
async fn get_order<C, O>(
    State(state): State<AppState<C, O>>,
    Path(id): Path<String>,
) -> Response
where
    C: CatalogRepository,
    O: OrderRepository,
{
    let order_id = OrderId::new(&id);
    match state.orders.find_by_id(&order_id).await {
        Ok(Some(order)) => (StatusCode::OK, Json(OrderDto::from_order(&order))).into_response(),
        Ok(None) => not_found(&format!("No order with id {id}")),
        Err(e) => {
            tracing::error!("order lookup failed: {e}");
            internal_error(&e.to_string())
        }
    }
}

/// List catalog categories.
async fn list_categories<C, O>(State(state): State<AppState<C, O>>) -> Response
where
    C: CatalogRepository,
    O: OrderRepository,
{
    match state.catalog.list_categories().await {
        Ok(categories) => {
            let body: Vec<CategoryResponse> =
                categories.iter().map(CategoryResponse::from_category).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!("category listing failed: {e}");
            internal_error(&e.to_string())
        }
    }
}

/// List products, optionally filtered by category slug and custom-cake flag.
async fn list_products<C, O>(
    State(state): State<AppState<C, O>>,
    Query(query): Query<ProductListQuery>,
) -> Response
where
    C: CatalogRepository,
    O: OrderRepository,
{
    let filter = ProductFilter {
        category_slug: query.category,
        is_custom_cake: query.custom_cake,
    };

    let products = match state.catalog.list_products(&filter).await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!("product listing failed: {e}");
            return internal_error(&e.to_string());
        }
    };

    let mut body = Vec::with_capacity(products.len());
    for product in &products {
        match expand_product(state.catalog.as_ref(), product).await {
            Ok(resp) => body.push(resp),
            Err(e) => {
                tracing::error!("product expansion failed: {e}");
                return internal_error(&e.to_string());
            }
        }
    }

    (StatusCode::OK, Json(body)).into_response()
}

/// Fetch a product by slug, with its available options expanded.
async fn get_product<C, O>(
    State(state): State<AppState<C, O>>,
    Path(slug): Path<String>,
) -> Response
where
    C: CatalogRepository,
    O: OrderRepository,
{
    match state.catalog.find_product_by_slug(&slug).await {
        Ok(Some(product)) => match expand_product(state.catalog.as_ref(), &product).await {
            Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
            Err(e) => {
                tracing::error!("product expansion failed: {e}");
                internal_error(&e.to_string())
            }
        },
        Ok(None) => not_found(&format!("No product with slug {slug}")),
        Err(e) => {
            tracing::error!("product lookup failed: {e}");
            internal_error(&e.to_string())
        }
    }
}

/// List all configurable cake options.
async fn list_cake_options<C, O>(State(state): State<AppState<C, O>>) -> Response
where
    C: CatalogRepository,
    O: OrderRepository,
{
    match state.catalog.list_options().await {
        Ok(options) => {
            let body: Vec<CakeOptionResponse> =
                options.iter().map(CakeOptionResponse::from_option).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!("cake option listing failed: {e}");
            internal_error(&e.to_string())
        }
    }
}

/// Resolve a product's category and options into a storefront response.
async fn expand_product<C>(catalog: &C, product: &Product) -> Result<ProductResponse, CatalogError>
where
    C: CatalogRepository,
{
    let category = catalog
        .find_category(&product.category_id)
        .await?
        .ok_or_else(|| CatalogError::Storage {
            message: format!("product {} references a missing category", product.id),
        })?;
    let options = catalog.find_options(&product.available_options).await?;

    Ok(ProductResponse::from_product(product, &category, &options))
}

fn not_found(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorResponse {
            code: "NOT_FOUND".to_string(),
            message: message.to_string(),
        }),
    )
        .into_response()
}

fn internal_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiErrorResponse {
            code: "INTERNAL".to_string(),
            message: message.to_string(),
        }),
    )
        .into_response()
}
