//! Mercado Server
//!
//! A REST JSON API over in-memory product and book collections:
//! catalog products with CRUD and criteria search, a market product group
//! with its own search policy, and a small library with book borrowing.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        // Catalog products
        .route("/products", get(api::products::list_products))
        .route("/products", post(api::products::create_product))
        .route("/products/search", get(api::products::search_products))
        .route("/products/:id", get(api::products::get_product))
        .route("/products/:id", put(api::products::update_product))
        .route("/products/:id", delete(api::products::delete_product))
        // Market group
        .route("/punto-group/health", get(api::market::market_health))
        .route("/punto-group/products", get(api::market::list_market_products))
        .route("/punto-group/products", post(api::market::create_market_product))
        .route(
            "/punto-group/products/search",
            get(api::market::search_market_products),
        )
        .route(
            "/punto-group/categories",
            get(api::market::list_market_categories),
        )
        // Library
        .route("/punto4/books", get(api::library::list_books))
        .route("/punto4/books", post(api::library::add_book))
        .route("/punto4/borrowing/borrow/:id", post(api::library::borrow_book))
        .route("/punto4/borrowing/return/:id", post(api::library::return_book))
        .route("/punto4/categories", get(api::library::list_genres))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    routes
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
