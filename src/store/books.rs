//! Book store with availability toggling

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
};

#[derive(Default)]
struct Inner {
    entries: Vec<Book>,
    next_id: u32,
}

/// In-memory book collection. Books are never deleted; the availability
/// flag is the only mutable field after creation.
#[derive(Clone, Default)]
pub struct BooksStore {
    inner: Arc<RwLock<Inner>>,
}

impl BooksStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the demo library rows
    pub fn seeded() -> Self {
        let entries = vec![
            Book {
                id: 1,
                title: "Cien años de soledad".to_string(),
                author: "Gabriel García Márquez".to_string(),
                genre: "Novela".to_string(),
                year: 1967,
                available: true,
            },
            Book {
                id: 2,
                title: "Don Quijote de la Mancha".to_string(),
                author: "Miguel de Cervantes".to_string(),
                genre: "Clásico".to_string(),
                year: 1605,
                available: true,
            },
        ];
        let next_id = entries.len() as u32;
        Self {
            inner: Arc::new(RwLock::new(Inner { entries, next_id })),
        }
    }

    pub async fn create(&self, book: CreateBook) -> Book {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let created = Book {
            id: inner.next_id,
            title: book.title,
            author: book.author,
            genre: book.genre,
            year: book.year,
            available: true,
        };
        inner.entries.push(created.clone());
        created
    }

    pub async fn list(&self) -> Vec<Book> {
        self.inner.read().await.entries.clone()
    }

    /// Mark a book as borrowed. The availability check and the flip happen
    /// under one write lock so two borrowers cannot both succeed.
    pub async fn borrow(&self, id: u32) -> AppResult<Book> {
        let mut inner = self.inner.write().await;
        let book = inner
            .entries
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound("Libro no encontrado".to_string()))?;

        if !book.available {
            return Err(AppError::Conflict("Libro no disponible".to_string()));
        }
        book.available = false;
        Ok(book.clone())
    }

    /// Mark a book as available. Idempotent: returning an already-available
    /// book succeeds without complaint.
    pub async fn give_back(&self, id: u32) -> AppResult<Book> {
        let mut inner = self.inner.write().await;
        let book = inner
            .entries
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound("Libro no encontrado".to_string()))?;

        book.available = true;
        Ok(book.clone())
    }
}
