//! In-memory entity stores.
//!
//! Each resource group owns its own collection behind an async `RwLock`, so
//! read-then-write sequences (updates, deletes, availability toggles) are
//! serialized even when requests are served concurrently. Ids are assigned
//! from a per-store monotonic counter starting at 1 and are never reused
//! after a deletion. All state is process-lifetime only.

pub mod books;
pub mod market;
pub mod products;

/// Aggregate of all entity stores
#[derive(Clone, Default)]
pub struct Store {
    pub products: products::ProductsStore,
    pub market: market::MarketStore,
    pub books: books::BooksStore,
}

impl Store {
    /// Create empty stores
    pub fn new() -> Self {
        Self::default()
    }

    /// Create stores pre-loaded with the demo rows served at startup
    pub fn seeded() -> Self {
        Self {
            products: products::ProductsStore::new(),
            market: market::MarketStore::seeded(),
            books: books::BooksStore::seeded(),
        }
    }
}
