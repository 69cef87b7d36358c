//! Market product endpoints (`/punto-group`)

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::product::{CreateMarketProduct, MarketProduct, MarketQuery},
};

use super::health::HealthResponse;

/// Market group health check
#[utoipa::path(
    get,
    path = "/punto-group/health",
    tag = "market",
    responses(
        (status = 200, description = "Group is up", body = HealthResponse)
    )
)]
pub async fn market_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// List all market products
#[utoipa::path(
    get,
    path = "/punto-group/products",
    tag = "market",
    responses(
        (status = 200, description = "List of market products", body = Vec<MarketProduct>)
    )
)]
pub async fn list_market_products(
    State(state): State<crate::AppState>,
) -> Json<Vec<MarketProduct>> {
    Json(state.services.market.list().await)
}

/// Search market products by name (mandatory)
#[utoipa::path(
    get,
    path = "/punto-group/products/search",
    tag = "market",
    params(MarketQuery),
    responses(
        (status = 200, description = "Matching products", body = Vec<MarketProduct>),
        (status = 400, description = "Missing name", body = crate::error::ErrorResponse),
        (status = 404, description = "No product matched", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_market_products(
    State(state): State<crate::AppState>,
    Query(query): Query<MarketQuery>,
) -> AppResult<Json<Vec<MarketProduct>>> {
    let results = state.services.market.search(query.name.as_deref()).await?;
    Ok(Json(results))
}

/// Create a new market product
#[utoipa::path(
    post,
    path = "/punto-group/products",
    tag = "market",
    request_body = CreateMarketProduct,
    responses(
        (status = 200, description = "Product created", body = MarketProduct)
    )
)]
pub async fn create_market_product(
    State(state): State<crate::AppState>,
    Json(product): Json<CreateMarketProduct>,
) -> Json<MarketProduct> {
    Json(state.services.market.create(product).await)
}

/// List the fixed market categories
#[utoipa::path(
    get,
    path = "/punto-group/categories",
    tag = "market",
    responses(
        (status = 200, description = "Category names", body = Vec<String>)
    )
)]
pub async fn list_market_categories(State(state): State<crate::AppState>) -> Json<Vec<String>> {
    Json(state.services.market.categories())
}
