//! Library lending service

use indexmap::IndexSet;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
    store::books::BooksStore,
};

#[derive(Clone)]
pub struct LendingService {
    store: BooksStore,
}

impl LendingService {
    pub fn new(store: BooksStore) -> Self {
        Self { store }
    }

    pub async fn list_books(&self) -> Vec<Book> {
        self.store.list().await
    }

    pub async fn add_book(&self, book: CreateBook) -> Book {
        self.store.create(book).await
    }

    /// Borrow a book (Available -> Borrowed)
    pub async fn borrow(&self, id: u32) -> AppResult<Book> {
        self.store.borrow(id).await
    }

    /// Return a book (any state -> Available)
    pub async fn give_back(&self, id: u32) -> AppResult<Book> {
        self.store.give_back(id).await
    }

    /// Distinct genres across the current collection, first-seen order
    pub async fn genres(&self) -> Vec<String> {
        let genres: IndexSet<String> = self
            .store
            .list()
            .await
            .into_iter()
            .map(|b| b.genre)
            .collect();
        genres.into_iter().collect()
    }
}
