use bson::doc;
use docstore::{Collection, DocumentStore, FindOptions};
use entity::chat_message::ChatResponse;
use tracing::{debug, warn};

use crate::server::{
    data::parse_object_id, error::repository::RepositoryError, model::db::ChatMessageModel,
};

/// Per-user chat log with bounded retention.
///
/// Messages are append-only. Each user keeps at most `retention_limit` messages once an
/// eviction sweep has run; between an insert and the next sweep the count may exceed it.
pub struct ChatRepository<'a, S: DocumentStore> {
    store: &'a S,
    collection: String,
    retention_limit: u64,
}

impl<'a, S: DocumentStore> ChatRepository<'a, S> {
    /// Creates a new instance of [`ChatRepository`]
    ///
    /// # Arguments
    /// - `store` - Document store holding the collection
    /// - `collection` - Name of the chat message collection
    /// - `retention_limit` - Messages kept per user by the sweep run on history reads
    pub fn new(store: &'a S, collection: &str, retention_limit: u64) -> Self {
        Self {
            store,
            collection: collection.to_string(),
            retention_limit,
        }
    }

    fn collection(&self) -> S::Collection {
        self.store.collection(&self.collection)
    }

    /// Stores a chat message as-is
    ///
    /// Neither the text nor the user id are validated. A message without an identifier gets one
    /// assigned by the store.
    ///
    /// # Returns
    /// - `Ok(ChatResponse)` - Message and response of the stored record, read back from the store
    pub async fn store_message(
        &self,
        message: &ChatMessageModel,
    ) -> Result<ChatResponse, RepositoryError> {
        let collection = self.collection();

        let message_id = collection.insert_one(bson::to_document(message)?).await?;
        let document = collection
            .find_one(doc! { "_id": message_id })
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(bson::from_document(document)?)
    }

    /// Gets the chat history of a user
    ///
    /// Runs an eviction sweep with the configured retention limit first. A failed sweep is
    /// logged and ignored so the history can still be read.
    ///
    /// # Returns
    /// - `Ok(Vec<ChatResponse>)` - Remaining messages in the store's natural order
    /// - `Err(RepositoryError::InvalidId)` - `user_id` is not a valid object id
    pub async fn get_history(&self, user_id: &str) -> Result<Vec<ChatResponse>, RepositoryError> {
        if let Err(e) = self.evict(user_id, self.retention_limit).await {
            warn!(
                user_id,
                error = %e,
                "Chat history eviction failed, reading history without it"
            );
        }

        let user_id = parse_object_id(user_id)?;

        let history = self
            .collection()
            .find(doc! { "_userId": user_id }, FindOptions::new())
            .await?
            .into_iter()
            .map(bson::from_document)
            .collect::<Result<Vec<ChatResponse>, _>>()?;

        Ok(history)
    }

    /// Deletes a user's oldest messages until at most `limit` remain
    ///
    /// Messages are removed one at a time, oldest `timeStamp` first. The sweep is not
    /// transactional: it stops at the first failed delete and leaves the messages deleted so
    /// far removed.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of messages deleted, 0 when the user has `limit` messages or fewer
    /// - `Err(RepositoryError::InvalidId)` - `user_id` is not a valid object id
    pub async fn evict(&self, user_id: &str, limit: u64) -> Result<u64, RepositoryError> {
        let user_id = parse_object_id(user_id)?;
        let filter = doc! { "_userId": user_id };
        let collection = self.collection();

        let count = collection.count(filter.clone()).await?;
        if count <= limit {
            return Ok(0);
        }

        let oldest = collection
            .find(
                filter,
                FindOptions::new()
                    .sort(doc! { "timeStamp": 1 })
                    .limit(count - limit),
            )
            .await?
            .into_iter()
            .map(bson::from_document)
            .collect::<Result<Vec<ChatMessageModel>, _>>()?;

        let mut evicted = 0;
        for message_id in oldest.into_iter().filter_map(|message| message.id) {
            evicted += collection.delete_one(doc! { "_id": message_id }).await?;
        }

        debug!(
            %user_id,
            count,
            limit,
            evicted,
            "Evicted oldest chat messages"
        );

        Ok(evicted)
    }
}
