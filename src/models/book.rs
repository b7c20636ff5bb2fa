//! Book model
//!
//! Two representations: `Book` is the wire shape (PascalCase JSON fields,
//! string id), `BookDocument` is the persisted shape (`_id` as a native
//! ObjectId). Conversions between the two are explicit so the wire contract
//! never leaks driver types.

use mongodb::bson::oid::ObjectId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book record as exposed over the REST API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    /// Store-assigned identifier (hex string); absent until created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Book name; the only required field
    #[serde(default)]
    pub name: String,
    /// Price; no currency or range validation
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
}

/// Book document as persisted in the books collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub description: String,
    pub author: String,
}

impl Book {
    /// Convert to the persisted shape, keyed by the given id (None before
    /// insert, when the store assigns one)
    pub fn into_document(self, id: Option<ObjectId>) -> BookDocument {
        BookDocument {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
            description: self.description,
            author: self.author,
        }
    }
}

impl From<BookDocument> for Book {
    fn from(doc: BookDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()),
            name: doc.name,
            price: doc.price,
            category: doc.category,
            description: doc.description,
            author: doc.author,
        }
    }
}
