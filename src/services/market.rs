//! Market product service.
//!
//! Search here requires a name and answers 404 on an empty match set,
//! unlike the catalog group which returns an empty list. The categories
//! endpoint serves a fixed list, not data derived from the collection.

use crate::{
    error::{AppError, AppResult},
    models::product::{CreateMarketProduct, MarketProduct},
    store::market::MarketStore,
};

#[derive(Clone)]
pub struct MarketService {
    store: MarketStore,
}

impl MarketService {
    pub fn new(store: MarketStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<MarketProduct> {
        self.store.list().await
    }

    pub async fn create(&self, product: CreateMarketProduct) -> MarketProduct {
        self.store.create(product).await
    }

    /// Search by name substring; the name is mandatory
    pub async fn search(&self, name: Option<&str>) -> AppResult<Vec<MarketProduct>> {
        let term = match name {
            Some(raw) if !raw.is_empty() => raw.to_lowercase(),
            _ => {
                return Err(AppError::Validation(
                    "Debes ingresar un nombre".to_string(),
                ))
            }
        };

        let results: Vec<MarketProduct> = self
            .store
            .list()
            .await
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&term))
            .collect();

        if results.is_empty() {
            return Err(AppError::NotFound("Producto no encontrado".to_string()));
        }
        Ok(results)
    }

    /// Fixed category list
    pub fn categories(&self) -> Vec<String> {
        vec![
            "Frutas".to_string(),
            "Verduras".to_string(),
            "Lácteos".to_string(),
        ]
    }
}
