//! Business logic services

pub mod catalog;
pub mod lending;
pub mod market;

use crate::store::Store;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub market: market::MarketService,
    pub lending: lending::LendingService,
}

impl Services {
    /// Create all services with the given store
    pub fn new(store: Store) -> Self {
        Self {
            catalog: catalog::CatalogService::new(store.products),
            market: market::MarketService::new(store.market),
            lending: lending::LendingService::new(store.books),
        }
    }
}
