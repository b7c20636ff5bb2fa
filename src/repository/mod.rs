//! Repository layer for document store operations

pub mod books;

use mongodb::Database;

/// Main repository struct holding collection handles
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository bound to the given database
    pub fn new(database: &Database, books_collection: &str) -> Self {
        Self {
            books: books::BooksRepository::new(database, books_collection),
        }
    }
}
