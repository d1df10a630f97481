//! Factory functions for generating mock chat message models.

use bson::{oid::ObjectId, DateTime};
use chrono::{Duration, Utc};
use entity::chat_message::Model as ChatMessageModel;

/// Create a mock chat message for testing.
///
/// # Arguments
/// - `user_id` - Owner of the message
/// - `index` - Used to derive distinguishable message and response text
/// - `time_stamp` - When the message was sent
///
/// # Returns
/// - `ChatMessageModel` - A message without an identifier
pub fn mock_chat_message(user_id: ObjectId, index: usize, time_stamp: DateTime) -> ChatMessageModel {
    ChatMessageModel {
        id: None,
        user_id,
        message: mock_message_text(index),
        response: mock_response_text(index),
        time_stamp,
    }
}

/// Timestamp `minutes_ago` minutes before now.
pub fn mock_time_stamp(minutes_ago: i64) -> DateTime {
    DateTime::from_chrono(Utc::now() - Duration::minutes(minutes_ago))
}

pub fn mock_message_text(index: usize) -> String {
    format!("message {}", index)
}

pub fn mock_response_text(index: usize) -> String {
    format!("response {}", index)
}
