//! Error types for Mercado server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Product {0} not found")]
    ProductNotFound(u32),

    #[error("Duplicate product: {0}")]
    DuplicateProduct(String),
}

/// Plain error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Structured error response body for named product errors
#[derive(Serialize, utoipa::ToSchema)]
pub struct ProductErrorResponse {
    pub success: bool,
    pub error_code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(detail) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { detail })).into_response()
            }
            AppError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse { detail })).into_response()
            }
            // State conflicts keep the legacy 400 status, not 409
            AppError::Conflict(detail) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { detail })).into_response()
            }
            AppError::ProductNotFound(id) => (
                StatusCode::NOT_FOUND,
                Json(ProductErrorResponse {
                    success: false,
                    error_code: "PRODUCT_NOT_FOUND".to_string(),
                    message: format!("Producto con ID {} no encontrado", id),
                }),
            )
                .into_response(),
            AppError::DuplicateProduct(name) => (
                StatusCode::BAD_REQUEST,
                Json(ProductErrorResponse {
                    success: false,
                    error_code: "DUPLICATE_PRODUCT".to_string(),
                    message: format!("El producto '{}' ya existe", name),
                }),
            )
                .into_response(),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
