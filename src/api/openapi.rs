//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, library, market, products};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mercado API",
        version = "1.0.0",
        description = "Products and Lending REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        // Catalog products
        products::list_products,
        products::search_products,
        products::create_product,
        products::get_product,
        products::update_product,
        products::delete_product,
        // Market
        market::market_health,
        market::list_market_products,
        market::search_market_products,
        market::create_market_product,
        market::list_market_categories,
        // Library
        library::list_books,
        library::add_book,
        library::borrow_book,
        library::return_book,
        library::list_genres,
    ),
    components(
        schemas(
            // Products
            crate::models::product::Product,
            crate::models::product::CreateProduct,
            crate::models::product::UpdateProduct,
            crate::models::product::MarketProduct,
            crate::models::product::CreateMarketProduct,
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
            crate::error::ProductErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "products", description = "Catalog product management"),
        (name = "market", description = "Market product group"),
        (name = "library", description = "Books and borrowing")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
