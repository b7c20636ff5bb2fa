//! Books service
//!
//! The only layer applying business rules; all of them collapse to a single
//! non-empty-name check on creation. Everything else is lookup-then-delegate
//! to the repository.

use mongodb::bson::oid::ObjectId;

use crate::{
    error::{AppError, AppResult},
    models::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new book; the store assigns the identifier
    pub async fn create(&self, book: Book) -> AppResult<Book> {
        if book.name.is_empty() {
            return Err(AppError::Validation("Book name is required".to_string()));
        }
        let id = self
            .repository
            .books
            .insert(book.clone().into_document(None))
            .await?;
        tracing::debug!(id = %id, "book created");
        Ok(Book {
            id: Some(id.to_hex()),
            ..book
        })
    }

    /// Get a book by id
    pub async fn get(&self, id: &str) -> AppResult<Book> {
        let oid = parse_id(id)?;
        self.repository
            .books
            .find_by_id(&oid)
            .await?
            .map(Book::from)
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// List every book in the collection.
    ///
    /// An empty collection is a successful empty listing, not an error.
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let documents = self.repository.books.find_all().await?;
        Ok(documents.into_iter().map(Book::from).collect())
    }

    /// Replace the full record for an existing book
    pub async fn update(&self, book: Book) -> AppResult<Book> {
        let id = book
            .id
            .as_deref()
            .ok_or_else(|| AppError::Validation("Book id is required".to_string()))?;
        let oid = parse_id(id)?;
        self.repository
            .books
            .find_by_id(&oid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        self.repository
            .books
            .replace(&oid, book.clone().into_document(Some(oid)))
            .await?;
        tracing::debug!(id = %oid, "book replaced");
        Ok(book)
    }

    /// Delete a book by id; returns a confirmation message
    pub async fn delete(&self, id: &str) -> AppResult<String> {
        let oid = parse_id(id)?;
        self.repository
            .books
            .find_by_id(&oid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        self.repository.books.delete_by_id(&oid).await?;
        tracing::debug!(id = %oid, "book deleted");
        Ok("Book deleted successfully".to_string())
    }
}

/// Parse a path-level id into an ObjectId.
///
/// An unparseable id can never match a stored document, so it reports as
/// not-found rather than as a malformed request.
fn parse_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::NotFound(format!("Book {} not found", id)))
}
