//! Document store abstraction.
//!
//! Repositories talk to named collections through the [`DocumentStore`] and [`Collection`]
//! traits rather than the MongoDB driver directly. Filters, updates and records are plain BSON
//! documents, so any backend able to evaluate top-level equality filters can stand in for
//! MongoDB (the test utilities provide an in-memory one).

pub mod error;
pub mod mongo;
pub mod options;

use async_trait::async_trait;
use bson::{Bson, Document};

pub use error::StoreError;
pub use mongo::{MongoCollection, MongoStore};
pub use options::{FindOptions, UpdateOutcome};

/// Handle to a single named collection.
#[async_trait]
pub trait Collection: Send + Sync {
    /// Returns the first document matching `filter`, if any.
    async fn find_one(&self, filter: Document) -> Result<Option<Document>, StoreError>;

    /// Returns every document matching `filter`, honouring `options`.
    ///
    /// The backend cursor is drained before returning.
    async fn find(
        &self,
        filter: Document,
        options: FindOptions,
    ) -> Result<Vec<Document>, StoreError>;

    /// Counts documents matching `filter`.
    async fn count(&self, filter: Document) -> Result<u64, StoreError>;

    /// Inserts `document` and returns the `_id` it was stored under.
    ///
    /// Documents without an `_id` get one assigned by the store.
    async fn insert_one(&self, document: Document) -> Result<Bson, StoreError>;

    /// Applies `set` with `$set` semantics to the first document matching `filter`.
    async fn update_one(&self, filter: Document, set: Document)
        -> Result<UpdateOutcome, StoreError>;

    /// Deletes the first document matching `filter`, returning how many were removed.
    async fn delete_one(&self, filter: Document) -> Result<u64, StoreError>;
}

/// A database exposing named collections.
pub trait DocumentStore: Send + Sync {
    type Collection: Collection;

    fn collection(&self, name: &str) -> Self::Collection;
}
