//! Market product store

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::product::{CreateMarketProduct, MarketProduct};

#[derive(Default)]
struct Inner {
    entries: Vec<MarketProduct>,
    next_id: u32,
}

/// In-memory market product collection (append-only, no updates)
#[derive(Clone, Default)]
pub struct MarketStore {
    inner: Arc<RwLock<Inner>>,
}

impl MarketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the demo market rows
    pub fn seeded() -> Self {
        let entries = vec![
            MarketProduct {
                id: 1,
                name: "Manzana".to_string(),
                price: 1.5,
                description: Some("Fruta fresca".to_string()),
            },
            MarketProduct {
                id: 2,
                name: "Pera".to_string(),
                price: 2.0,
                description: Some("Verde y jugosa".to_string()),
            },
        ];
        let next_id = entries.len() as u32;
        Self {
            inner: Arc::new(RwLock::new(Inner { entries, next_id })),
        }
    }

    pub async fn create(&self, product: CreateMarketProduct) -> MarketProduct {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let created = MarketProduct {
            id: inner.next_id,
            name: product.name,
            price: product.price,
            description: product.description,
        };
        inner.entries.push(created.clone());
        created
    }

    pub async fn list(&self) -> Vec<MarketProduct> {
        self.inner.read().await.entries.clone()
    }
}
