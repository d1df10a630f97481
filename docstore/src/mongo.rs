//! MongoDB backend.

use async_trait::async_trait;
use bson::{doc, Bson, Document};
use futures::TryStreamExt;

use crate::{Collection, DocumentStore, FindOptions, StoreError, UpdateOutcome};

/// [`DocumentStore`] backed by a MongoDB database.
#[derive(Clone, Debug)]
pub struct MongoStore {
    db: mongodb::Database,
}

impl MongoStore {
    /// Creates a new instance of [`MongoStore`]
    pub fn new(db: mongodb::Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &mongodb::Database {
        &self.db
    }
}

impl DocumentStore for MongoStore {
    type Collection = MongoCollection;

    fn collection(&self, name: &str) -> MongoCollection {
        MongoCollection {
            inner: self.db.collection::<Document>(name),
        }
    }
}

/// Untyped handle to a MongoDB collection.
#[derive(Clone, Debug)]
pub struct MongoCollection {
    inner: mongodb::Collection<Document>,
}

#[async_trait]
impl Collection for MongoCollection {
    async fn find_one(&self, filter: Document) -> Result<Option<Document>, StoreError> {
        Ok(self.inner.find_one(filter).await?)
    }

    async fn find(
        &self,
        filter: Document,
        options: FindOptions,
    ) -> Result<Vec<Document>, StoreError> {
        let mut find = self.inner.find(filter);
        if let Some(skip) = options.skip {
            find = find.skip(skip);
        }
        if let Some(limit) = options.limit {
            // The driver treats a limit of 0 as "no limit"
            find = find.limit(i64::try_from(limit).unwrap_or(i64::MAX));
        }
        if let Some(sort) = options.sort {
            find = find.sort(sort);
        }

        let cursor = find.await?;

        Ok(cursor.try_collect().await?)
    }

    async fn count(&self, filter: Document) -> Result<u64, StoreError> {
        Ok(self.inner.count_documents(filter).await?)
    }

    async fn insert_one(&self, document: Document) -> Result<Bson, StoreError> {
        let result = self.inner.insert_one(document).await?;

        Ok(result.inserted_id)
    }

    async fn update_one(
        &self,
        filter: Document,
        set: Document,
    ) -> Result<UpdateOutcome, StoreError> {
        let result = self.inner.update_one(filter, doc! { "$set": set }).await?;

        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete_one(&self, filter: Document) -> Result<u64, StoreError> {
        let result = self.inner.delete_one(filter).await?;

        Ok(result.deleted_count)
    }
}
