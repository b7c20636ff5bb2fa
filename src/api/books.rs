//! Books API endpoints
//!
//! Route shapes (POST for reads, create under /books/newbook) follow the
//! published wire contract of the service; all successes are 200.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::Book};

/// Create a new book
#[utoipa::path(
    post,
    path = "/books/newbook",
    tag = "books",
    request_body = Book,
    responses(
        (status = 200, description = "Created book including its assigned id", body = Book),
        (status = 400, description = "Book name missing or empty", body = crate::error::ErrorResponse)
    )
)]
pub async fn new_book(
    State(state): State<crate::AppState>,
    Json(book): Json<Book>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.create(book).await?;
    Ok(Json(book))
}

/// Get a book by id
#[utoipa::path(
    post,
    path = "/books/getbook/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "No book matches the id", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get(&id).await?;
    Ok(Json(book))
}

/// List all books
#[utoipa::path(
    post,
    path = "/books/listbooks",
    tag = "books",
    responses(
        (status = 200, description = "Every book in the collection", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Update a book (full-record replacement)
#[utoipa::path(
    put,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 200, description = "Updated book", body = Book),
        (status = 400, description = "Book id missing", body = crate::error::ErrorResponse),
        (status = 404, description = "No book matches the id", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Json(book): Json<Book>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update(book).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Deletion confirmation message", body = String),
        (status = 404, description = "No book matches the id", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<String>> {
    let message = state.services.books.delete(&id).await?;
    Ok(Json(message))
}
