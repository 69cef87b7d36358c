//! Catalog product service.
//!
//! Search combines the supplied criteria with AND over a snapshot of the
//! collection and returns an empty list when nothing matches. The market
//! group (`market.rs`) intentionally applies a different search policy.

use crate::{
    error::{AppError, AppResult},
    models::product::{CreateProduct, Product, ProductQuery, UpdateProduct},
    store::products::ProductsStore,
};

#[derive(Clone)]
pub struct CatalogService {
    store: ProductsStore,
}

impl CatalogService {
    pub fn new(store: ProductsStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<Product> {
        self.store.list().await
    }

    pub async fn get(&self, id: u32) -> AppResult<Product> {
        self.store.get(id).await
    }

    pub async fn create(&self, product: CreateProduct) -> AppResult<Product> {
        self.store.create(product).await
    }

    pub async fn update(&self, id: u32, patch: UpdateProduct) -> AppResult<Product> {
        self.store.update(id, patch).await
    }

    pub async fn delete(&self, id: u32) -> AppResult<Product> {
        self.store.delete(id).await
    }

    /// Search by name substring and/or price range
    pub async fn search(&self, query: &ProductQuery) -> AppResult<Vec<Product>> {
        let term = match query.name.as_deref() {
            Some(raw) if !raw.is_empty() => {
                let term = raw.trim().to_lowercase();
                if term.chars().count() < 2 {
                    return Err(AppError::Validation(
                        "El término de búsqueda debe tener al menos 2 caracteres".to_string(),
                    ));
                }
                Some(term)
            }
            _ => None,
        };

        if let Some(min) = query.min_price {
            if min < 0.0 {
                return Err(AppError::Validation(
                    "El precio mínimo no puede ser negativo".to_string(),
                ));
            }
        }
        if let Some(max) = query.max_price {
            if max < 0.0 {
                return Err(AppError::Validation(
                    "El precio máximo no puede ser negativo".to_string(),
                ));
            }
        }
        if let (Some(min), Some(max)) = (query.min_price, query.max_price) {
            if min > max {
                return Err(AppError::Validation(
                    "El precio mínimo no puede ser mayor al máximo".to_string(),
                ));
            }
        }

        let results = self
            .store
            .list()
            .await
            .into_iter()
            .filter(|p| {
                term.as_deref()
                    .map_or(true, |t| p.name.to_lowercase().contains(t))
            })
            .filter(|p| query.min_price.map_or(true, |min| p.price >= min))
            .filter(|p| query.max_price.map_or(true, |max| p.price <= max))
            .collect();

        Ok(results)
    }
}
