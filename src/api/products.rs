//! Catalog product endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::product::{CreateProduct, Product, ProductQuery, UpdateProduct},
};

/// List all catalog products
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses(
        (status = 200, description = "List of products", body = Vec<Product>)
    )
)]
pub async fn list_products(State(state): State<crate::AppState>) -> Json<Vec<Product>> {
    Json(state.services.catalog.list().await)
}

/// Search catalog products by name and price range
#[utoipa::path(
    get,
    path = "/products/search",
    tag = "products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Matching products (may be empty)", body = Vec<Product>),
        (status = 400, description = "Invalid search criteria", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_products(
    State(state): State<crate::AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let results = state.services.catalog.search(&query).await?;
    Ok(Json(results))
}

/// Create a new catalog product
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Duplicate product name", body = crate::error::ProductErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<crate::AppState>,
    Json(product): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let created = state.services.catalog.create(product).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a catalog product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(
        ("id" = u32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product details", body = Product),
        (status = 404, description = "Product not found", body = crate::error::ProductErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<crate::AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<Product>> {
    let product = state.services.catalog.get(id).await?;
    Ok(Json(product))
}

/// Update a catalog product (partial merge)
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(
        ("id" = u32, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 404, description = "Product not found", body = crate::error::ProductErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<crate::AppState>,
    Path(id): Path<u32>,
    Json(patch): Json<UpdateProduct>,
) -> AppResult<Json<Product>> {
    let updated = state.services.catalog.update(id, patch).await?;
    Ok(Json(updated))
}

/// Delete a catalog product, returning the removed entity
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(
        ("id" = u32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = Product),
        (status = 404, description = "Product not found", body = crate::error::ProductErrorResponse)
    )
)]
pub async fn delete_product(
    State(state): State<crate::AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<Product>> {
    let removed = state.services.catalog.delete(id).await?;
    Ok(Json(removed))
}
