//! Chat message insertion utilities.

use bson::{oid::ObjectId, Bson};
use docstore::{Collection, DocumentStore};
use entity::chat_message::Model as ChatMessageModel;

use crate::{
    constant::TEST_CHAT_COLLECTION,
    error::TestError,
    fixtures::chat::{
        factory::{mock_chat_message, mock_time_stamp},
        ChatFixtures,
    },
};

impl<'a> ChatFixtures<'a> {
    /// Insert a mock chat message sent `minutes_ago` minutes before now.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the message
    /// - `index` - Used to derive the message and response text
    /// - `minutes_ago` - Age of the message
    ///
    /// # Returns
    /// - `Ok(ChatMessageModel)` - The inserted message including its store-assigned id
    /// - `Err(TestError)` - Encoding or insertion failed
    pub async fn insert_mock_message(
        &self,
        user_id: ObjectId,
        index: usize,
        minutes_ago: i64,
    ) -> Result<ChatMessageModel, TestError> {
        let mut message = mock_chat_message(user_id, index, mock_time_stamp(minutes_ago));

        let collection = self.context.store.collection(TEST_CHAT_COLLECTION);
        let id = collection.insert_one(bson::to_document(&message)?).await?;
        message.id = match id {
            Bson::ObjectId(id) => Some(id),
            _ => None,
        };

        Ok(message)
    }

    /// Insert `count` messages for a user, oldest first.
    ///
    /// Message `0` is the oldest and message `count - 1` the most recent, one minute apart.
    ///
    /// # Returns
    /// - `Ok(Vec<ChatMessageModel>)` - Inserted messages, oldest first
    /// - `Err(TestError)` - Encoding or insertion failed
    pub async fn insert_mock_history(
        &self,
        user_id: ObjectId,
        count: usize,
    ) -> Result<Vec<ChatMessageModel>, TestError> {
        let mut messages = Vec::with_capacity(count);
        for index in 0..count {
            let minutes_ago = (count - index) as i64;
            messages.push(self.insert_mock_message(user_id, index, minutes_ago).await?);
        }

        Ok(messages)
    }

    /// Stored messages for a user in natural order.
    ///
    /// Reads the store's contents directly, so it is neither counted nor affected by armed
    /// failures.
    pub fn messages_for(&self, user_id: ObjectId) -> Result<Vec<ChatMessageModel>, TestError> {
        self.context
            .store
            .documents(TEST_CHAT_COLLECTION)?
            .into_iter()
            .filter(|document| document.get_object_id("_userId").ok() == Some(user_id))
            .map(|document| {
                bson::from_document::<ChatMessageModel>(document).map_err(TestError::from)
            })
            .collect()
    }
}
