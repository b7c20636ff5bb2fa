//! Books repository for document store operations

use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};

use crate::{
    error::{AppError, AppResult},
    models::BookDocument,
};

/// Single point of contact with the books collection
#[derive(Clone)]
pub struct BooksRepository {
    collection: Collection<BookDocument>,
}

impl BooksRepository {
    pub fn new(database: &Database, collection_name: &str) -> Self {
        Self {
            collection: database.collection(collection_name),
        }
    }

    /// Insert a new book document; the store assigns the identifier
    pub async fn insert(&self, document: BookDocument) -> AppResult<ObjectId> {
        let result = self.collection.insert_one(document).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Internal("store returned a non-ObjectId identifier".into()))
    }

    /// Find a book document by id
    pub async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<BookDocument>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Return every book document in the collection, in store-native order
    pub async fn find_all(&self) -> AppResult<Vec<BookDocument>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Overwrite the full document matching `id`; no-op when nothing matches
    pub async fn replace(&self, id: &ObjectId, document: BookDocument) -> AppResult<()> {
        self.collection
            .replace_one(doc! { "_id": id }, document)
            .await?;
        Ok(())
    }

    /// Remove the document matching `id`; no-op when nothing matches
    pub async fn delete_by_id(&self, id: &ObjectId) -> AppResult<()> {
        self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(())
    }
}
