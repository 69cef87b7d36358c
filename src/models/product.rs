//! Product models.
//!
//! Two independent product schemas coexist: the catalog schema tracks a
//! stock quantity and supports partial updates; the market schema
//! (`/punto-group` endpoints) has no quantity and is append-only. They are
//! kept separate on purpose, matching the two resource groups they back.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Catalog product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: u32,
}

/// Payload to create a catalog product
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: u32,
}

/// Partial update for a catalog product.
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<u32>,
}

/// Catalog search criteria, AND-combined
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ProductQuery {
    /// Case-insensitive name substring (min 2 characters after trimming)
    pub name: Option<String>,
    /// Lower price bound, inclusive
    pub min_price: Option<f64>,
    /// Upper price bound, inclusive
    pub max_price: Option<f64>,
}

/// Market product (no stock tracking)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarketProduct {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

/// Payload to create a market product
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateMarketProduct {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

/// Market search criteria (name only)
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct MarketQuery {
    pub name: Option<String>,
}
