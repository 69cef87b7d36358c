//! Catalog product store

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::product::{CreateProduct, Product, UpdateProduct},
};

#[derive(Default)]
struct Inner {
    entries: Vec<Product>,
    next_id: u32,
}

/// In-memory catalog product collection with full CRUD
#[derive(Clone, Default)]
pub struct ProductsStore {
    inner: Arc<RwLock<Inner>>,
}

impl ProductsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new product. Fails if the name is already taken
    /// (case-insensitive).
    pub async fn create(&self, product: CreateProduct) -> AppResult<Product> {
        let mut inner = self.inner.write().await;

        let name_lower = product.name.to_lowercase();
        if inner
            .entries
            .iter()
            .any(|p| p.name.to_lowercase() == name_lower)
        {
            return Err(AppError::DuplicateProduct(product.name));
        }

        inner.next_id += 1;
        let created = Product {
            id: inner.next_id,
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
        };
        inner.entries.push(created.clone());
        Ok(created)
    }

    /// All products in insertion order
    pub async fn list(&self) -> Vec<Product> {
        self.inner.read().await.entries.clone()
    }

    pub async fn get(&self, id: u32) -> AppResult<Product> {
        self.inner
            .read()
            .await
            .entries
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(AppError::ProductNotFound(id))
    }

    /// Merge the supplied fields over the stored product, replacing it with
    /// the merged value. Fields absent from the patch are preserved.
    pub async fn update(&self, id: u32, patch: UpdateProduct) -> AppResult<Product> {
        let mut inner = self.inner.write().await;
        let existing = inner
            .entries
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::ProductNotFound(id))?;

        let updated = Product {
            id: existing.id,
            name: patch.name.unwrap_or_else(|| existing.name.clone()),
            description: patch.description.or_else(|| existing.description.clone()),
            price: patch.price.unwrap_or(existing.price),
            quantity: patch.quantity.unwrap_or(existing.quantity),
        };
        *existing = updated.clone();
        Ok(updated)
    }

    /// Remove a product and return it
    pub async fn delete(&self, id: u32) -> AppResult<Product> {
        let mut inner = self.inner.write().await;
        let index = inner
            .entries
            .iter()
            .position(|p| p.id == id)
            .ok_or(AppError::ProductNotFound(id))?;
        Ok(inner.entries.remove(index))
    }
}
