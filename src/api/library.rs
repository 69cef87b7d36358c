//! Library endpoints (`/punto4`): books, borrowing, genres

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
};

/// List all books
#[utoipa::path(
    get,
    path = "/punto4/books",
    tag = "library",
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<Book>> {
    Json(state.services.lending.list_books().await)
}

/// Register a new book (starts available)
#[utoipa::path(
    post,
    path = "/punto4/books",
    tag = "library",
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book registered", body = Book)
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    Json(book): Json<CreateBook>,
) -> Json<Book> {
    Json(state.services.lending.add_book(book).await)
}

/// Borrow a book
#[utoipa::path(
    post,
    path = "/punto4/borrowing/borrow/{id}",
    tag = "library",
    params(
        ("id" = u32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book borrowed", body = Book),
        (status = 400, description = "Book not available", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<Book>> {
    let book = state.services.lending.borrow(id).await?;
    Ok(Json(book))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/punto4/borrowing/return/{id}",
    tag = "library",
    params(
        ("id" = u32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book returned", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Path(id): Path<u32>,
) -> AppResult<Json<Book>> {
    let book = state.services.lending.give_back(id).await?;
    Ok(Json(book))
}

/// List distinct genres in the collection
#[utoipa::path(
    get,
    path = "/punto4/categories",
    tag = "library",
    responses(
        (status = 200, description = "Distinct genres", body = Vec<String>)
    )
)]
pub async fn list_genres(State(state): State<crate::AppState>) -> Json<Vec<String>> {
    Json(state.services.lending.genres().await)
}
